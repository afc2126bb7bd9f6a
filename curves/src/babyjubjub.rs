//! The BabyJubJub curve, a twisted Edwards curve whose base field is the
//! scalar field of BN254.
//!
//! ```text
//! 168700 * x^2 + y^2 = 1 + 168696 * x^2 * y^2
//! ```

use std::str::FromStr;

use ark_ff::MontFp;
use num_bigint::BigUint;

use crate::{params::CurveParams, point::Point};

/// The base field of the curve.
pub use ark_bn254::Fr as Fq;

pub const COEFF_A: Fq = MontFp!("168700");
pub const COEFF_D: Fq = MontFp!("168696");

/// Coordinates of the base point used by the ethsnarks test vectors. It
/// generates the full group, of order `8 * SUBGROUP_ORDER`.
pub const BASE_X: Fq =
    MontFp!("13819220147556003423829648734536813647484299520101079752658527049348033428680");
pub const BASE_Y: Fq =
    MontFp!("18418392512101013735016656943391868405135207372553011567997823284229347734793");

/// Order of the prime-order subgroup.
pub const SUBGROUP_ORDER: &str =
    "2736030358979909402780800718157159386076813972158567259200215660948447373041";

pub const COFACTOR: u64 = 8;

pub fn params() -> CurveParams<Fq> {
    CurveParams::new(COEFF_A, COEFF_D)
}

pub fn base_point() -> Point<Fq> {
    Point::new(BASE_X, BASE_Y)
}

pub fn subgroup_order() -> BigUint {
    BigUint::from_str(SUBGROUP_ORDER).expect("SUBGROUP_ORDER is a decimal literal")
}

/// Order of the full group, `COFACTOR * SUBGROUP_ORDER`.
pub fn group_order() -> BigUint {
    subgroup_order() * COFACTOR
}
