//! Coefficients of a twisted Edwards curve.

use ark_ff::PrimeField;

use crate::error::{CurveError, CurveResult};

/// The coefficients `a` and `d` of the curve `a * x^2 + y^2 = 1 + d * x^2 * y^2`.
///
/// They are fixed for the lifetime of any gadget built over them.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct CurveParams<F> {
    pub a: F,
    pub d: F,
}

impl<F: PrimeField> CurveParams<F> {
    pub fn new(a: F, d: F) -> Self {
        Self { a, d }
    }

    /// Builds the coefficients from decimal literals, e.g. values read from a
    /// fixture or a configuration file.
    pub fn from_decimal(a: &str, d: &str) -> CurveResult<Self> {
        Ok(Self {
            a: parse_decimal(a)?,
            d: parse_decimal(d)?,
        })
    }
}

/// Parses a field element written in base 10.
pub fn parse_decimal<F: PrimeField>(s: &str) -> CurveResult<F> {
    F::from_str(s.trim()).map_err(|_| CurveError::InvalidDecimal(s.to_string()))
}
