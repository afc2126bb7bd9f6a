//! R1CS gadgets for fixed-base scalar multiplication on twisted Edwards
//! curves, BabyJubJub in particular.
//!
//! Gadgets follow a two-phase discipline. They allocate their variables on a
//! [r1cs::Protoboard] when built, then record their constraints in
//! `generate_constraints` and assign their variables in `generate_witness`.
//! Both passes take the board explicitly and may run in any order, but the
//! witness of a gadget must be generated after the witness of its inputs.

pub mod adder;
pub mod config;
pub mod error;
pub mod fixed_base;
pub mod lookup;
pub mod r1cs;

pub use adder::{PointAdder, PointVar};
pub use config::FixedBaseConfig;
pub use error::{GadgetError, GadgetResult, SatisfiabilityResult, UnsatisfiedConstraint};
pub use fixed_base::{encoded_scalar, FixedBaseMul, WindowTable, WindowTableBuilder};
pub use lookup::{Lookup2Bit, LookupGadget, LookupSigned3Bit};
