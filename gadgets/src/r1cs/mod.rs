//! A minimal rank-1 constraint system.

pub mod boolean;
pub mod constraint;
pub mod cvar;
pub mod protoboard;

pub use boolean::{BitArray, Boolean};
pub use constraint::{AnnotatedConstraint, BasicConstraint};
pub use cvar::FieldVar;
pub use protoboard::{Protoboard, Variable, WitnessGeneration};
