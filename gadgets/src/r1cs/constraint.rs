//! Rank-1 constraints and their evaluation against a witness.

use ark_ff::PrimeField;

use super::{cvar::FieldVar, protoboard::WitnessGeneration};
use crate::error::{SatisfiabilityResult, UnsatisfiedConstraint};

/// The basic constraints a board can hold.
#[derive(Clone, Debug)]
pub enum BasicConstraint<Var> {
    /// `a * b = c`
    R1CS(Var, Var, Var),
    /// `x * (1 - x) = 0`
    Boolean(Var),
}

/// A [BasicConstraint] with a label, used when reporting a violation.
#[derive(Clone, Debug)]
pub struct AnnotatedConstraint<F: PrimeField> {
    pub annotation: String,
    pub constraint: BasicConstraint<FieldVar<F>>,
}

impl<F> AnnotatedConstraint<F>
where
    F: PrimeField,
{
    /// Checks the constraint against the values held by `env`.
    pub fn check_constraint(&self, env: &impl WitnessGeneration<F>) -> SatisfiabilityResult<()> {
        match &self.constraint {
            BasicConstraint::R1CS(a, b, c) => {
                let a = env.read_var(a);
                let b = env.read_var(b);
                let c = env.read_var(c);
                if a * b != c {
                    return Err(UnsatisfiedConstraint::R1CS(
                        self.annotation.clone(),
                        a.to_string(),
                        b.to_string(),
                        c.to_string(),
                    ));
                }
            }
            BasicConstraint::Boolean(x) => {
                let x = env.read_var(x);
                if !(x.is_zero() || x.is_one()) {
                    return Err(UnsatisfiedConstraint::Boolean(
                        self.annotation.clone(),
                        x.to_string(),
                    ));
                }
            }
        }
        Ok(())
    }
}
