use thiserror::Error;

pub type HpsResult<T> = Result<T, HpsError>;

#[derive(Error, Debug)]
pub enum HpsError {
    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("Value for {what} must be positive: {value}")]
    NonPositive { what: &'static str, value: f64 },

    #[error("Invalid configuration: {what}")]
    InvalidConfiguration { what: String },

    #[error("Name not found: {what} '{name}'")]
    NameNotFound { what: &'static str, name: String },
}
