//! This module implements the [`CurveError`] type.

use thiserror::Error;

/// A result type for plain curve arithmetic.
pub type CurveResult<T> = std::result::Result<T, CurveError>;

/// Errors that can arise when evaluating the group law outside of a circuit.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CurveError {
    /// One of the two denominators of the unified addition law vanished.
    /// This only happens for curve/point combinations the addition law is not
    /// complete for.
    #[error("the {0} denominator of the addition law is zero")]
    ZeroDenominator(&'static str),

    #[error("the string `{0}` is not a decimal field element")]
    InvalidDecimal(String),

    #[error("the point ({0}, {1}) is not on the curve")]
    NotOnCurve(String, String),
}
