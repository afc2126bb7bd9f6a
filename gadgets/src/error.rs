//! Error types of the gadget library.

use jubjub_curves::CurveError;
use thiserror::Error;

/// A result type for gadget construction.
pub type GadgetResult<T> = std::result::Result<T, GadgetError>;

/// A result type for satisfiability checks.
pub type SatisfiabilityResult<T> = std::result::Result<T, UnsatisfiedConstraint>;

/// Errors raised while constructing a gadget. They all denote a misuse by the
/// caller (wrong parameters) and are reported before anything is allocated on
/// the board.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GadgetError {
    #[error("the scalar has {0} bits, which is not a multiple of the {1}-bit chunk size")]
    ScalarLength(usize, usize),

    #[error("the scalar is empty")]
    EmptyScalar,

    #[error("{0} windows need {1} base points, but only {2} were supplied")]
    InsufficientBasePoints(usize, usize, usize),

    #[error("the number of windows per base point must be positive")]
    EmptySegment,

    #[error("the lookup table holds {0} constants, expected {1}")]
    LookupTableSize(usize, usize),

    #[error("the lookup gadget was given {0} selector bits, expected {1}")]
    SelectorBits(usize, usize),

    #[error("window table precomputation failed: {0}")]
    Curve(#[from] CurveError),
}

/// A constraint of the board that the current assignment violates.
/// The first field is the annotation of the constraint.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UnsatisfiedConstraint {
    #[error("unsatisfied constraint `{0}`: {1} * {2} is not equal to {3}")]
    R1CS(String, String, String, String),

    #[error("unsatisfied constraint `{0}`: {1} is not a boolean (0 or 1)")]
    Boolean(String, String),
}
