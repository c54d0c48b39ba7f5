//! Shape-mismatch error taxonomy.

use cas_expr::PolyError;
use thiserror::Error;

/// The input expression does not have the shape an operation assumed.
///
/// These are recoverable by design: a caller that fails to read an
/// expression as a fraction is expected to try the polynomial reading next.
/// Caller bugs (e.g. taking the reciprocal of the zero sentinel) panic
/// instead of appearing here.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeError {
    #[error("expression is not a single-variable polynomial of integer degree")]
    NonPolynomial,
    #[error("polynomial exponent is negative or non-integral")]
    BadExponent,
    #[error("cannot divide a constant polynomial")]
    ConstantPolynomial,
    #[error("expression does not have a fraction shape")]
    NotAFraction,
    #[error("numerator is not a rational multiple of pi")]
    NotAPiMultiple,
    #[error("angle numerator or denominator is not an exact integer")]
    NonIntegerAngle,
}

impl From<PolyError> for ShapeError {
    fn from(err: PolyError) -> Self {
        match err {
            PolyError::NonPolynomial => ShapeError::NonPolynomial,
            PolyError::BadExponent => ShapeError::BadExponent,
        }
    }
}
