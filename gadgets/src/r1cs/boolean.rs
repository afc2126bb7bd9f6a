//! Boolean variables and arrays of them.

use std::ops::Range;

use ark_ff::PrimeField;
use num_bigint::BigUint;

use super::{
    cvar::FieldVar,
    protoboard::{Protoboard, Variable, WitnessGeneration},
};

/// A boolean variable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Boolean<F: PrimeField>(FieldVar<F>);

impl<F> Boolean<F>
where
    F: PrimeField,
{
    /// Wraps a circuit variable without constraining it to be a bit.
    pub fn create_unsafe(x: FieldVar<F>) -> Self {
        Self(x)
    }

    pub fn as_field_var(&self) -> &FieldVar<F> {
        &self.0
    }

    /// Records the boolean check of the variable.
    pub fn check(&self, pb: &mut Protoboard<F>, annotation: impl Into<String>) {
        pb.enforce_boolean(self.0.clone(), annotation);
    }

    pub fn value(&self, pb: &Protoboard<F>) -> bool {
        !pb.read_var(&self.0).is_zero()
    }
}

/// A run of allocated bit variables, least significant bit first.
#[derive(Debug, Clone)]
pub struct BitArray<F: PrimeField> {
    vars: Vec<Variable>,
    bits: Vec<Boolean<F>>,
    annotation: String,
}

impl<F> BitArray<F>
where
    F: PrimeField,
{
    pub fn alloc(pb: &mut Protoboard<F>, len: usize, annotation: &str) -> Self {
        let vars: Vec<_> = (0..len)
            .map(|i| pb.alloc_var(format!("{annotation}[{i}]")))
            .collect();
        let bits = vars
            .iter()
            .map(|var| Boolean::create_unsafe(var.into()))
            .collect();
        Self {
            vars,
            bits,
            annotation: annotation.to_string(),
        }
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    pub fn var(&self, i: usize) -> Variable {
        self.vars[i]
    }

    pub fn bits(&self) -> &[Boolean<F>] {
        &self.bits
    }

    pub fn slice(&self, range: Range<usize>) -> &[Boolean<F>] {
        &self.bits[range]
    }

    /// Records one boolean check per bit.
    pub fn generate_boolean_constraints(&self, pb: &mut Protoboard<F>) {
        for (i, bit) in self.bits.iter().enumerate() {
            bit.check(pb, format!("{}[{i}] is boolean", self.annotation));
        }
    }

    /// Assigns the bits. Missing trailing bits are set to zero and extra
    /// ones are ignored.
    pub fn fill_with_bits(&self, pb: &mut Protoboard<F>, bits: &[bool]) {
        for (i, var) in self.vars.iter().enumerate() {
            let bit = bits.get(i).copied().unwrap_or(false);
            pb.set_value(*var, F::from(bit));
        }
    }

    /// Assigns the low `len()` bits of `value`.
    pub fn fill_with_bits_of_biguint(&self, pb: &mut Protoboard<F>, value: &BigUint) {
        let bits: Vec<bool> = (0..self.len()).map(|i| value.bit(i as u64)).collect();
        self.fill_with_bits(pb, &bits);
    }

    /// Assigns the low `len()` bits of the canonical representative of `value`.
    pub fn fill_with_bits_of_field_element(&self, pb: &mut Protoboard<F>, value: F) {
        self.fill_with_bits_of_biguint(pb, &value.into());
    }

    pub fn values(&self, pb: &Protoboard<F>) -> Vec<bool> {
        self.bits.iter().map(|bit| bit.value(pb)).collect()
    }
}
