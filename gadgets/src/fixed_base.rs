//! Multiplication of a fixed base point by a secret scalar.
//!
//! The scalar bits, least significant first, are cut into chunks of
//! [CHUNK_SIZE_BITS] bits, one window each. Window `i` owns a table of the
//! multiples `1..=4` of its start point `16^i * G`; the two low bits of the
//! chunk select the multiple and the third one its sign. A chunk
//! `(b0, b1, b2)` therefore contributes
//!
//! ```text
//! (1 - 2 * b2) * (1 + b0 + 2 * b1) * 16^i * G
//! ```
//!
//! and the windows are summed left to right by a chain of [PointAdder]s.
//! Every `chunks_per_base_point` windows the progression restarts from the
//! next supplied base point.

use ark_ff::PrimeField;
use itertools::Itertools;
use jubjub_curves::{CurveParams, Point};
use log::{debug, trace};
use num_bigint::BigInt;

use crate::{
    adder::{PointAdder, PointVar},
    config::FixedBaseConfig,
    error::{GadgetError, GadgetResult},
    lookup::{Lookup2Bit, LookupGadget, LookupSigned3Bit, LOOKUP_TABLE_SIZE},
    r1cs::{Boolean, FieldVar, Protoboard},
};

/// Scalar bits consumed by a window.
pub const CHUNK_SIZE_BITS: usize = 3;

/// Bits selecting the magnitude within a window table.
pub const LOOKUP_SIZE_BITS: usize = 2;

/// The multiples `1..=4` of a window start point.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WindowTable<F: PrimeField> {
    points: Vec<Point<F>>,
}

impl<F> WindowTable<F>
where
    F: PrimeField,
{
    pub fn points(&self) -> &[Point<F>] {
        &self.points
    }

    pub fn start(&self) -> &Point<F> {
        &self.points[0]
    }

    pub fn xs(&self) -> Vec<F> {
        self.points.iter().map(|p| p.x).collect()
    }

    pub fn ys(&self) -> Vec<F> {
        self.points.iter().map(|p| p.y).collect()
    }
}

/// Precomputes the window tables, outside of any constraint system.
pub struct WindowTableBuilder<'a, F: PrimeField> {
    params: &'a CurveParams<F>,
    config: FixedBaseConfig,
}

impl<'a, F> WindowTableBuilder<'a, F>
where
    F: PrimeField,
{
    pub fn new(params: &'a CurveParams<F>, config: FixedBaseConfig) -> Self {
        Self { params, config }
    }

    /// Checks that `base_points` can serve `num_windows` windows.
    fn check_segments(&self, base_points: &[Point<F>], num_windows: usize) -> GadgetResult<()> {
        if num_windows == 0 {
            return Err(GadgetError::EmptyScalar);
        }
        let segments = self.config.segments(num_windows)?;
        if segments > base_points.len() {
            return Err(GadgetError::InsufficientBasePoints(
                num_windows,
                segments,
                base_points.len(),
            ));
        }
        Ok(())
    }

    /// One table per window. Fails if the base points cannot serve
    /// `num_windows` windows or if a denominator of the addition law vanishes.
    pub fn build(
        &self,
        base_points: &[Point<F>],
        num_windows: usize,
    ) -> GadgetResult<Vec<WindowTable<F>>> {
        self.check_segments(base_points, num_windows)?;

        let per_segment = self.config.chunks_per_base_point;
        let mut tables = Vec::with_capacity(num_windows);
        let mut start = base_points[0];
        for i in 0..num_windows {
            if i % per_segment == 0 {
                start = base_points[i / per_segment];
            }

            let mut current = start;
            let mut points = Vec::with_capacity(LOOKUP_TABLE_SIZE);
            points.push(current);
            for _ in 1..LOOKUP_TABLE_SIZE {
                current = current.add(&start, self.params)?;
                points.push(current);
            }
            trace!("window {i}: table built from start {start:?}");
            tables.push(WindowTable { points });

            // 4 * start -> 16 * start
            current = current.double(self.params)?;
            start = current.double(self.params)?;
        }
        Ok(tables)
    }
}

/// The fixed-base scalar multiplication gadget.
#[derive(Clone, Debug)]
pub struct FixedBaseMul<F: PrimeField> {
    tables: Vec<WindowTable<F>>,
    windows_x: Vec<LookupSigned3Bit<F>>,
    windows_y: Vec<Lookup2Bit<F>>,
    adders: Vec<PointAdder<F>>,
}

impl<F> FixedBaseMul<F>
where
    F: PrimeField,
{
    /// Builds the gadget for `scalar_bits`, least significant bit first.
    ///
    /// All parameters are checked and the tables computed before anything
    /// is allocated on `pb`, so an error leaves the board as it was.
    pub fn new(
        pb: &mut Protoboard<F>,
        params: &CurveParams<F>,
        base_points: &[Point<F>],
        scalar_bits: &[Boolean<F>],
        config: &FixedBaseConfig,
        annotation: &str,
    ) -> GadgetResult<Self> {
        if scalar_bits.len() % CHUNK_SIZE_BITS != 0 {
            return Err(GadgetError::ScalarLength(
                scalar_bits.len(),
                CHUNK_SIZE_BITS,
            ));
        }
        let num_windows = scalar_bits.len() / CHUNK_SIZE_BITS;
        let tables = WindowTableBuilder::new(params, *config).build(base_points, num_windows)?;
        let segments = num_windows.div_ceil(config.chunks_per_base_point);

        let mut windows_x = Vec::with_capacity(num_windows);
        let mut windows_y = Vec::with_capacity(num_windows);
        for (i, (table, chunk)) in tables
            .iter()
            .zip_eq(scalar_bits.chunks(CHUNK_SIZE_BITS))
            .enumerate()
        {
            windows_x.push(LookupSigned3Bit::new(
                pb,
                &table.xs(),
                chunk,
                &format!("{annotation}.windows_x[{i}]"),
            )?);
            windows_y.push(Lookup2Bit::new(
                pb,
                &table.ys(),
                &chunk[..LOOKUP_SIZE_BITS],
                &format!("{annotation}.windows_y[{i}]"),
            )?);
        }

        let window = |i: usize| PointVar::new(windows_x[i].result(), windows_y[i].result());
        let mut adders: Vec<PointAdder<F>> = Vec::with_capacity(num_windows - 1);
        for i in 1..num_windows {
            let lhs = match adders.last() {
                Some(previous) => previous.result(),
                None => window(0),
            };
            let adder = PointAdder::new(
                pb,
                params,
                lhs,
                window(i),
                &format!("{annotation}.adders[{}]", i - 1),
            );
            adders.push(adder);
        }

        debug!(
            "{annotation}: {num_windows} windows over {segments} base points, {} adders",
            adders.len()
        );

        Ok(Self {
            tables,
            windows_x,
            windows_y,
            adders,
        })
    }

    /// Builds the gadget over a single base point serving every window.
    pub fn with_base_point(
        pb: &mut Protoboard<F>,
        params: &CurveParams<F>,
        base_point: &Point<F>,
        scalar_bits: &[Boolean<F>],
        annotation: &str,
    ) -> GadgetResult<Self> {
        let config = FixedBaseConfig::single_segment(scalar_bits.len() / CHUNK_SIZE_BITS);
        Self::new(pb, params, &[*base_point], scalar_bits, &config, annotation)
    }

    pub fn generate_constraints(&self, pb: &mut Protoboard<F>) {
        for lookup in &self.windows_x {
            lookup.generate_constraints(pb);
        }
        for lookup in &self.windows_y {
            lookup.generate_constraints(pb);
        }
        for adder in &self.adders {
            adder.generate_constraints(pb);
        }
    }

    /// Assigns every internal variable from the scalar bits already on `pb`.
    pub fn generate_witness(&self, pb: &mut Protoboard<F>) -> GadgetResult<()> {
        for lookup in &self.windows_x {
            lookup.generate_witness(pb);
        }
        for lookup in &self.windows_y {
            lookup.generate_witness(pb);
        }
        for adder in &self.adders {
            adder.generate_witness(pb)?;
        }
        Ok(())
    }

    pub fn result_x(&self) -> FieldVar<F> {
        match self.adders.last() {
            Some(adder) => adder.result_x(),
            None => self.windows_x[0].result(),
        }
    }

    pub fn result_y(&self) -> FieldVar<F> {
        match self.adders.last() {
            Some(adder) => adder.result_y(),
            None => self.windows_y[0].result(),
        }
    }

    pub fn result(&self) -> PointVar<F> {
        PointVar::new(self.result_x(), self.result_y())
    }

    pub fn num_windows(&self) -> usize {
        self.tables.len()
    }

    pub fn num_adders(&self) -> usize {
        self.adders.len()
    }

    pub fn tables(&self) -> &[WindowTable<F>] {
        &self.tables
    }
}

/// The integer `k` such that the gadget maps `bits` to `k * G` within one
/// segment of base point `G`. Missing trailing bits count as zero.
pub fn encoded_scalar(bits: &[bool]) -> BigInt {
    bits.chunks(CHUNK_SIZE_BITS)
        .rev()
        .fold(BigInt::default(), |acc, chunk| {
            let bit = |j: usize| i64::from(chunk.get(j).copied().unwrap_or(false));
            let magnitude = 1 + bit(0) + 2 * bit(1);
            let digit = if bit(2) == 1 { -magnitude } else { magnitude };
            acc * 16u32 + digit
        })
}
