//! The protoboard: owner of the variable assignment and of the recorded
//! constraints.
//!
//! Gadgets allocate their variables on the board when they are built, then
//! take the board again as an explicit argument in each of their two passes:
//! constraint generation appends to the constraint list, witness generation
//! writes the assignment.

use ark_ff::PrimeField;
use log::trace;

use super::{
    boolean::BitArray,
    constraint::{AnnotatedConstraint, BasicConstraint},
    cvar::FieldVar,
};
use crate::error::SatisfiabilityResult;

/// Handle on an allocated board variable. Only the board that allocated it
/// can resolve it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Variable(usize);

impl<F: PrimeField> From<Variable> for FieldVar<F> {
    fn from(var: Variable) -> Self {
        FieldVar::Var(var.0)
    }
}

impl<F: PrimeField> From<&Variable> for FieldVar<F> {
    fn from(var: &Variable) -> Self {
        FieldVar::Var(var.0)
    }
}

/// Read access to a witness.
pub trait WitnessGeneration<F>
where
    F: PrimeField,
{
    /// Evaluates a circuit variable under the current assignment.
    ///
    /// Panics if the variable was not allocated on this board.
    fn read_var(&self, var: &FieldVar<F>) -> F;
}

#[derive(Clone, Debug, Default)]
pub struct Protoboard<F: PrimeField> {
    values: Vec<F>,
    constraints: Vec<AnnotatedConstraint<F>>,
}

impl<F> Protoboard<F>
where
    F: PrimeField,
{
    pub fn new() -> Self {
        Self {
            values: vec![],
            constraints: vec![],
        }
    }

    /// Allocates a fresh variable, initially assigned zero.
    pub fn alloc_var(&mut self, annotation: impl Into<String>) -> Variable {
        let annotation: String = annotation.into();
        let var = Variable(self.values.len());
        trace!("allocating variable {} ({annotation})", var.0);
        self.values.push(F::zero());
        var
    }

    /// Allocates `len` variables meant to hold bits. No constraint is added,
    /// see [BitArray::generate_boolean_constraints].
    pub fn alloc_bits(&mut self, len: usize, annotation: &str) -> BitArray<F> {
        BitArray::alloc(self, len, annotation)
    }

    pub fn set_value(&mut self, var: Variable, value: F) {
        self.values[var.0] = value;
    }

    /// Records `a * b = c`.
    pub fn enforce_r1cs(
        &mut self,
        a: FieldVar<F>,
        b: FieldVar<F>,
        c: FieldVar<F>,
        annotation: impl Into<String>,
    ) {
        self.add_constraint(BasicConstraint::R1CS(a, b, c), annotation.into());
    }

    /// Records `x * (1 - x) = 0`.
    pub fn enforce_boolean(&mut self, x: FieldVar<F>, annotation: impl Into<String>) {
        self.add_constraint(BasicConstraint::Boolean(x), annotation.into());
    }

    fn add_constraint(&mut self, constraint: BasicConstraint<FieldVar<F>>, annotation: String) {
        self.constraints.push(AnnotatedConstraint {
            annotation,
            constraint,
        });
    }

    pub fn num_constraints(&self) -> usize {
        self.constraints.len()
    }

    pub fn num_variables(&self) -> usize {
        self.values.len()
    }

    /// Returns the first constraint violated by the current assignment.
    pub fn check_satisfied(&self) -> SatisfiabilityResult<()> {
        self.constraints
            .iter()
            .try_for_each(|constraint| constraint.check_constraint(self))
    }

    pub fn is_satisfied(&self) -> bool {
        self.check_satisfied().is_ok()
    }
}

impl<F> WitnessGeneration<F> for Protoboard<F>
where
    F: PrimeField,
{
    fn read_var(&self, var: &FieldVar<F>) -> F {
        var.eval(&|i| self.values[i])
    }
}
