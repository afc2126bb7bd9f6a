//! In-circuit twisted Edwards addition.

use ark_ff::PrimeField;
use jubjub_curves::{CurveParams, Point};

use crate::{
    error::GadgetResult,
    r1cs::{FieldVar, Protoboard, Variable, WitnessGeneration},
};

/// A curve point whose coordinates are circuit variables.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PointVar<F: PrimeField> {
    pub x: FieldVar<F>,
    pub y: FieldVar<F>,
}

impl<F> PointVar<F>
where
    F: PrimeField,
{
    pub fn new(x: FieldVar<F>, y: FieldVar<F>) -> Self {
        Self { x, y }
    }

    pub fn constant(point: &Point<F>) -> Self {
        Self::new(FieldVar::Constant(point.x), FieldVar::Constant(point.y))
    }

    pub fn value(&self, pb: &Protoboard<F>) -> Point<F> {
        Point::new(pb.read_var(&self.x), pb.read_var(&self.y))
    }
}

/// Computes `lhs + rhs` with the unified addition law, seven constraints:
///
/// ```text
/// beta = x1 * y2        gamma = y1 * x2
/// delta = y1 * y2       epsilon = x1 * x2
/// tau = delta * epsilon
/// x3 * (1 + d * tau) = beta + gamma
/// y3 * (1 - d * tau) = delta - a * epsilon
/// ```
#[derive(Clone, Debug)]
pub struct PointAdder<F: PrimeField> {
    params: CurveParams<F>,
    lhs: PointVar<F>,
    rhs: PointVar<F>,
    beta: Variable,
    gamma: Variable,
    delta: Variable,
    epsilon: Variable,
    tau: Variable,
    x3: Variable,
    y3: Variable,
    annotation: String,
}

impl<F> PointAdder<F>
where
    F: PrimeField,
{
    pub fn new(
        pb: &mut Protoboard<F>,
        params: &CurveParams<F>,
        lhs: PointVar<F>,
        rhs: PointVar<F>,
        annotation: &str,
    ) -> Self {
        let mut alloc = |name: &str| pb.alloc_var(format!("{annotation}.{name}"));
        Self {
            params: *params,
            lhs,
            rhs,
            beta: alloc("beta"),
            gamma: alloc("gamma"),
            delta: alloc("delta"),
            epsilon: alloc("epsilon"),
            tau: alloc("tau"),
            x3: alloc("x3"),
            y3: alloc("y3"),
            annotation: annotation.to_string(),
        }
    }

    pub fn generate_constraints(&self, pb: &mut Protoboard<F>) {
        let (x1, y1) = (&self.lhs.x, &self.lhs.y);
        let (x2, y2) = (&self.rhs.x, &self.rhs.y);
        let beta: FieldVar<F> = self.beta.into();
        let gamma: FieldVar<F> = self.gamma.into();
        let delta: FieldVar<F> = self.delta.into();
        let epsilon: FieldVar<F> = self.epsilon.into();
        let tau: FieldVar<F> = self.tau.into();
        let name = |step: &str| format!("{}.{step}", self.annotation);

        pb.enforce_r1cs(x1.clone(), y2.clone(), beta.clone(), name("beta"));
        pb.enforce_r1cs(y1.clone(), x2.clone(), gamma.clone(), name("gamma"));
        pb.enforce_r1cs(y1.clone(), y2.clone(), delta.clone(), name("delta"));
        pb.enforce_r1cs(x1.clone(), x2.clone(), epsilon.clone(), name("epsilon"));
        pb.enforce_r1cs(delta.clone(), epsilon.clone(), tau.clone(), name("tau"));

        let d_tau = tau.scale(self.params.d);
        pb.enforce_r1cs(
            self.x3.into(),
            FieldVar::one() + &d_tau,
            beta + &gamma,
            name("x3"),
        );
        pb.enforce_r1cs(
            self.y3.into(),
            FieldVar::one() - d_tau,
            delta - epsilon.scale(self.params.a),
            name("y3"),
        );
    }

    /// Fails if a denominator of the addition law vanishes, which cannot
    /// happen for points of a complete curve.
    pub fn generate_witness(&self, pb: &mut Protoboard<F>) -> GadgetResult<()> {
        let p = self.lhs.value(pb);
        let q = self.rhs.value(pb);

        let delta = p.y * q.y;
        let epsilon = p.x * q.x;
        pb.set_value(self.beta, p.x * q.y);
        pb.set_value(self.gamma, p.y * q.x);
        pb.set_value(self.delta, delta);
        pb.set_value(self.epsilon, epsilon);
        pb.set_value(self.tau, delta * epsilon);

        let sum = p.add(&q, &self.params)?;
        pb.set_value(self.x3, sum.x);
        pb.set_value(self.y3, sum.y);
        Ok(())
    }

    pub fn result_x(&self) -> FieldVar<F> {
        self.x3.into()
    }

    pub fn result_y(&self) -> FieldVar<F> {
        self.y3.into()
    }

    pub fn result(&self) -> PointVar<F> {
        PointVar::new(self.result_x(), self.result_y())
    }
}
