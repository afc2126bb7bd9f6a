//! Affine points and the unified twisted Edwards addition law.

use ark_ff::PrimeField;
use num_bigint::{BigInt, BigUint, Sign};
use num_traits::Zero;

use crate::{
    error::{CurveError, CurveResult},
    params::{parse_decimal, CurveParams},
};

/// A point in affine coordinates. The identity is `(0, 1)`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Point<F> {
    pub x: F,
    pub y: F,
}

impl<F: PrimeField> Point<F> {
    /// Creates a point without checking that it lies on any curve.
    pub fn new(x: F, y: F) -> Self {
        Self { x, y }
    }

    /// Creates a point and checks the curve equation.
    pub fn checked(x: F, y: F, params: &CurveParams<F>) -> CurveResult<Self> {
        let point = Self { x, y };
        if point.is_on_curve(params) {
            Ok(point)
        } else {
            Err(CurveError::NotOnCurve(x.to_string(), y.to_string()))
        }
    }

    /// Parses both coordinates from decimal literals.
    pub fn from_decimal(x: &str, y: &str) -> CurveResult<Self> {
        Ok(Self {
            x: parse_decimal(x)?,
            y: parse_decimal(y)?,
        })
    }

    pub fn identity() -> Self {
        Self {
            x: F::zero(),
            y: F::one(),
        }
    }

    pub fn is_identity(&self) -> bool {
        self.x.is_zero() && self.y.is_one()
    }

    /// Checks `a * x^2 + y^2 = 1 + d * x^2 * y^2`.
    pub fn is_on_curve(&self, params: &CurveParams<F>) -> bool {
        let x2 = self.x.square();
        let y2 = self.y.square();
        params.a * x2 + y2 == F::one() + params.d * x2 * y2
    }

    /// The additive inverse `(-x, y)`.
    pub fn neg(&self) -> Self {
        Self {
            x: -self.x,
            y: self.y,
        }
    }

    /// Unified addition:
    ///
    /// ```text
    /// x3 = (x1*y2 + y1*x2) / (1 + d*x1*x2*y1*y2)
    /// y3 = (y1*y2 - a*x1*x2) / (1 - d*x1*x2*y1*y2)
    /// ```
    pub fn add(&self, other: &Self, params: &CurveParams<F>) -> CurveResult<Self> {
        let x1y2 = self.x * other.y;
        let y1x2 = self.y * other.x;
        let y1y2 = self.y * other.y;
        let x1x2 = self.x * other.x;
        let dx1x2y1y2 = params.d * x1x2 * y1y2;

        let x_den = (F::one() + dx1x2y1y2)
            .inverse()
            .ok_or(CurveError::ZeroDenominator("x"))?;
        let y_den = (F::one() - dx1x2y1y2)
            .inverse()
            .ok_or(CurveError::ZeroDenominator("y"))?;

        Ok(Self {
            x: (x1y2 + y1x2) * x_den,
            y: (y1y2 - params.a * x1x2) * y_den,
        })
    }

    pub fn double(&self, params: &CurveParams<F>) -> CurveResult<Self> {
        self.add(self, params)
    }

    /// Reference double-and-add multiplication, least significant bit first.
    pub fn mul_biguint(&self, scalar: &BigUint, params: &CurveParams<F>) -> CurveResult<Self> {
        let mut acc = Self::identity();
        let mut base = *self;
        for i in 0..scalar.bits() {
            if scalar.bit(i) {
                acc = acc.add(&base, params)?;
            }
            base = base.double(params)?;
        }
        Ok(acc)
    }

    /// Multiplication by a signed scalar: `-k * P = k * (-P)`.
    pub fn mul_bigint(&self, scalar: &BigInt, params: &CurveParams<F>) -> CurveResult<Self> {
        let (sign, magnitude) = scalar.clone().into_parts();
        if magnitude.is_zero() {
            return Ok(Self::identity());
        }
        match sign {
            Sign::Minus => self.neg().mul_biguint(&magnitude, params),
            _ => self.mul_biguint(&magnitude, params),
        }
    }

    pub fn mul_u64(&self, scalar: u64, params: &CurveParams<F>) -> CurveResult<Self> {
        self.mul_biguint(&BigUint::from(scalar), params)
    }
}
