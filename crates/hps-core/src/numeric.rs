use crate::HpsError;

/// One tolerance pair for float comparisons across the workspace.
#[derive(Clone, Copy, Debug)]
pub struct Tolerances {
    pub abs: f64,
    pub rel: f64,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-12,
            rel: 1e-9,
        }
    }
}

pub fn nearly_equal(a: f64, b: f64, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    if diff <= tol.abs {
        return true;
    }
    diff <= tol.rel * a.abs().max(b.abs())
}

/// Reject NaN and infinities before they reach a boundary assignment.
pub fn ensure_finite(v: f64, what: &'static str) -> Result<f64, HpsError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(HpsError::NonFinite { what, value: v })
    }
}

/// Finite and strictly positive (heat duties, mass flows, setpoint spans).
pub fn ensure_positive(v: f64, what: &'static str) -> Result<f64, HpsError> {
    ensure_finite(v, what)?;
    if v > 0.0 {
        Ok(v)
    } else {
        Err(HpsError::NonPositive { what, value: v })
    }
}
