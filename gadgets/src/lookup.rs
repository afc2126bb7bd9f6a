//! Table lookups selected by scalar bits.
//!
//! Both gadgets select one of four constants with two bits `b0`, `b1`
//! (index `b0 + 2 * b1`). The signed variant reads a third bit which negates
//! the selected constant.

use ark_ff::PrimeField;

use crate::{
    error::{GadgetError, GadgetResult},
    r1cs::{Boolean, FieldVar, Protoboard, Variable, WitnessGeneration},
};

/// Number of constants of a lookup table.
pub const LOOKUP_TABLE_SIZE: usize = 4;

pub trait LookupGadget<F: PrimeField> {
    fn generate_constraints(&self, pb: &mut Protoboard<F>);

    fn generate_witness(&self, pb: &mut Protoboard<F>);

    /// Output variable holding the selected constant.
    fn result(&self) -> FieldVar<F>;
}

fn check_sizes<F: PrimeField>(
    constants: &[F],
    bits: &[Boolean<F>],
    expected_bits: usize,
) -> GadgetResult<()> {
    if constants.len() != LOOKUP_TABLE_SIZE {
        return Err(GadgetError::LookupTableSize(
            constants.len(),
            LOOKUP_TABLE_SIZE,
        ));
    }
    if bits.len() != expected_bits {
        return Err(GadgetError::SelectorBits(bits.len(), expected_bits));
    }
    Ok(())
}

fn selected_index<F: PrimeField>(pb: &Protoboard<F>, b0: &Boolean<F>, b1: &Boolean<F>) -> usize {
    usize::from(b0.value(pb)) + 2 * usize::from(b1.value(pb))
}

/// `c3 - c2 - c1 + c0`
fn cross_term<F: PrimeField>(c: &[F]) -> F {
    c[3] - c[2] - c[1] + c[0]
}

/// Unsigned lookup in a table of four constants, one constraint.
#[derive(Clone, Debug)]
pub struct Lookup2Bit<F: PrimeField> {
    constants: Vec<F>,
    b0: Boolean<F>,
    b1: Boolean<F>,
    result: Variable,
    annotation: String,
}

impl<F> Lookup2Bit<F>
where
    F: PrimeField,
{
    pub fn new(
        pb: &mut Protoboard<F>,
        constants: &[F],
        bits: &[Boolean<F>],
        annotation: &str,
    ) -> GadgetResult<Self> {
        check_sizes(constants, bits, 2)?;
        let result = pb.alloc_var(format!("{annotation}.result"));
        Ok(Self {
            constants: constants.to_vec(),
            b0: bits[0].clone(),
            b1: bits[1].clone(),
            result,
            annotation: annotation.to_string(),
        })
    }
}

impl<F> LookupGadget<F> for Lookup2Bit<F>
where
    F: PrimeField,
{
    fn generate_constraints(&self, pb: &mut Protoboard<F>) {
        let c = &self.constants;
        let b0 = self.b0.as_field_var();
        let b1 = self.b1.as_field_var();

        // b1 * (b0 * (c3 - c2 - c1 + c0) + c2 - c0) = r - c0 - b0 * (c1 - c0)
        let a = b1.clone();
        let b = b0.scale(cross_term(c)) + FieldVar::Constant(c[2] - c[0]);
        let r: FieldVar<F> = self.result.into();
        let out = r - &FieldVar::Constant(c[0]) - b0.scale(c[1] - c[0]);
        pb.enforce_r1cs(a, b, out, format!("{}.select", self.annotation));
    }

    fn generate_witness(&self, pb: &mut Protoboard<F>) {
        let index = selected_index(pb, &self.b0, &self.b1);
        pb.set_value(self.result, self.constants[index]);
    }

    fn result(&self) -> FieldVar<F> {
        self.result.into()
    }
}

/// Signed lookup in a table of four constants: the third bit negates the
/// selected constant. Two constraints.
#[derive(Clone, Debug)]
pub struct LookupSigned3Bit<F: PrimeField> {
    constants: Vec<F>,
    b0: Boolean<F>,
    b1: Boolean<F>,
    sign: Boolean<F>,
    b0b1: Variable,
    result: Variable,
    annotation: String,
}

impl<F> LookupSigned3Bit<F>
where
    F: PrimeField,
{
    pub fn new(
        pb: &mut Protoboard<F>,
        constants: &[F],
        bits: &[Boolean<F>],
        annotation: &str,
    ) -> GadgetResult<Self> {
        check_sizes(constants, bits, 3)?;
        let b0b1 = pb.alloc_var(format!("{annotation}.b0b1"));
        let result = pb.alloc_var(format!("{annotation}.result"));
        Ok(Self {
            constants: constants.to_vec(),
            b0: bits[0].clone(),
            b1: bits[1].clone(),
            sign: bits[2].clone(),
            b0b1,
            result,
            annotation: annotation.to_string(),
        })
    }
}

impl<F> LookupGadget<F> for LookupSigned3Bit<F>
where
    F: PrimeField,
{
    fn generate_constraints(&self, pb: &mut Protoboard<F>) {
        let c = &self.constants;
        let b0 = self.b0.as_field_var();
        let b1 = self.b1.as_field_var();
        let b0b1: FieldVar<F> = self.b0b1.into();

        pb.enforce_r1cs(
            b0.clone(),
            b1.clone(),
            b0b1.clone(),
            format!("{}.b0b1", self.annotation),
        );

        // (c0 + b0 (c1 - c0) + b1 (c2 - c0) + b0b1 (c3 - c2 - c1 + c0)) * (1 - 2 b2) = r
        let magnitude = FieldVar::linear_combination(&[
            (c[0], FieldVar::one()),
            (c[1] - c[0], b0.clone()),
            (c[2] - c[0], b1.clone()),
            (cross_term(c), b0b1),
        ]);
        let sign = FieldVar::one() - self.sign.as_field_var().scale(F::from(2u64));
        pb.enforce_r1cs(
            magnitude,
            sign,
            self.result.into(),
            format!("{}.select", self.annotation),
        );
    }

    fn generate_witness(&self, pb: &mut Protoboard<F>) {
        let b0b1 = pb.read_var(self.b0.as_field_var()) * pb.read_var(self.b1.as_field_var());
        pb.set_value(self.b0b1, b0b1);

        let index = selected_index(pb, &self.b0, &self.b1);
        let value = self.constants[index];
        let value = if self.sign.value(pb) { -value } else { value };
        pb.set_value(self.result, value);
    }

    fn result(&self) -> FieldVar<F> {
        self.result.into()
    }
}
