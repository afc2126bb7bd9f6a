//! Out-of-circuit arithmetic on twisted Edwards curves
//! `a * x^2 + y^2 = 1 + d * x^2 * y^2`.
//!
//! Everything here works on plain field elements and never touches a
//! constraint system. It is used to precompute the lookup tables of fixed-base
//! gadgets and as an independent reference in tests.

pub mod babyjubjub;
pub mod error;
pub mod params;
pub mod point;

pub use error::{CurveError, CurveResult};
pub use params::CurveParams;
pub use point::Point;
