//! Post-processing error type.

use thiserror::Error;

pub type PostResult<T> = Result<T, PostError>;

#[derive(Error, Debug)]
pub enum PostError {
    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Missing column {name:?}")]
    MissingColumn { name: String },

    /// A field that should hold a number (or a parseable period) did not.
    #[error("Row {row}: cannot parse {column:?} value {value:?}")]
    BadField {
        row: usize,
        column: String,
        value: String,
    },

    /// A generation row summing to zero has no defined mix.
    #[error("Row {row}: total generation is not positive")]
    NonPositiveTotal { row: usize },

    /// Averaging needs at least one observation per calendar month.
    #[error("No observations for month {month}")]
    EmptyMonth { month: usize },

    #[error("Matrix holds {values} values for {rows} x {cols} cells")]
    ShapeMismatch {
        rows: usize,
        cols: usize,
        values: usize,
    },
}
