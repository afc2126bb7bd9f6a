use std::str::FromStr;

use ark_bn254::Fr;
use jubjub_curves::{babyjubjub, CurveError, CurveParams, Point};
use jubjub_gadgets::{
    encoded_scalar,
    fixed_base::CHUNK_SIZE_BITS,
    r1cs::{BitArray, Protoboard, WitnessGeneration},
    FixedBaseConfig, FixedBaseMul, GadgetError,
};
use num_bigint::BigUint;
use proptest::prelude::*;
use rand::{rngs::StdRng, Rng, SeedableRng};

const SCALAR: &str = "6453482891510615431577168724743356132495662554103773572771861111634748265227";
const EXPECTED_X: &str =
    "9475273318116948306485634257134587710963219450927319367756034463623580530136";
const EXPECTED_Y: &str =
    "1945841616097002480312205509604510190125303442992456923845187958701342969776";

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn bits_of(value: &BigUint, len: usize) -> Vec<bool> {
    (0..len).map(|i| value.bit(i as u64)).collect()
}

fn random_bits(rng: &mut StdRng, len: usize) -> Vec<bool> {
    (0..len).map(|_| rng.gen()).collect()
}

struct Instance {
    pb: Protoboard<Fr>,
    bits: BitArray<Fr>,
    gadget: FixedBaseMul<Fr>,
}

/// Builds the gadget over freshly allocated bits, generates its constraints
/// and its witness for `scalar`.
fn run(scalar: &[bool], base_points: &[Point<Fr>], config: &FixedBaseConfig) -> Instance {
    let params = babyjubjub::params();
    let mut pb = Protoboard::new();
    let bits = pb.alloc_bits(scalar.len(), "scalar");
    let gadget = FixedBaseMul::new(&mut pb, &params, base_points, bits.bits(), config, "mul")
        .unwrap();

    bits.generate_boolean_constraints(&mut pb);
    gadget.generate_constraints(&mut pb);
    bits.fill_with_bits(&mut pb, scalar);
    gadget.generate_witness(&mut pb).unwrap();
    Instance { pb, bits, gadget }
}

/// Out-of-circuit value of the gadget: every segment multiplies its base
/// point by the encoding of its chunks.
fn reference(scalar: &[bool], base_points: &[Point<Fr>], config: &FixedBaseConfig) -> Point<Fr> {
    let params = babyjubjub::params();
    scalar
        .chunks(CHUNK_SIZE_BITS * config.chunks_per_base_point)
        .zip(base_points)
        .fold(Point::identity(), |acc, (segment, base)| {
            let term = base
                .mul_bigint(&encoded_scalar(segment), &params)
                .unwrap();
            acc.add(&term, &params).unwrap()
        })
}

fn result(instance: &Instance) -> Point<Fr> {
    instance.gadget.result().value(&instance.pb)
}

fn second_base_point() -> Point<Fr> {
    let params = babyjubjub::params();
    babyjubjub::base_point()
        .mul_biguint(&(BigUint::from(16u32).pow(62)), &params)
        .unwrap()
}

#[test]
fn test_ethsnarks_vector_single_segment() {
    init_logger();
    let scalar = bits_of(&SCALAR.parse().unwrap(), 252);
    let config = FixedBaseConfig::single_segment(84);
    let instance = run(&scalar, &[babyjubjub::base_point()], &config);

    assert_eq!(instance.gadget.num_windows(), 84);
    assert_eq!(instance.gadget.num_adders(), 83);
    assert_eq!(instance.pb.check_satisfied(), Ok(()));

    let expected = Point::new(
        Fr::from_str(EXPECTED_X).unwrap(),
        Fr::from_str(EXPECTED_Y).unwrap(),
    );
    assert_eq!(result(&instance), expected);
    assert_eq!(
        instance.pb.read_var(&instance.gadget.result_x()),
        expected.x
    );
    assert_eq!(
        instance.pb.read_var(&instance.gadget.result_y()),
        expected.y
    );
}

#[test]
fn test_ethsnarks_vector_two_segments() {
    init_logger();
    let scalar = bits_of(&SCALAR.parse().unwrap(), 252);
    let base_points = [babyjubjub::base_point(), second_base_point()];
    let instance = run(&scalar, &base_points, &FixedBaseConfig::default());

    assert!(instance.pb.is_satisfied());
    let expected = Point::from_decimal(EXPECTED_X, EXPECTED_Y).unwrap();
    assert_eq!(result(&instance), expected);
}

#[test]
fn test_ethsnarks_vector_matches_encoded_scalar() {
    let params = babyjubjub::params();
    let scalar = bits_of(&SCALAR.parse().unwrap(), 252);
    let expected = Point::from_decimal(EXPECTED_X, EXPECTED_Y).unwrap();
    let g = babyjubjub::base_point();
    assert_eq!(
        g.mul_bigint(&encoded_scalar(&scalar), &params).unwrap(),
        expected
    );
}

#[test]
fn test_construction_is_deterministic() {
    let params = babyjubjub::params();
    let base_points = [babyjubjub::base_point(), second_base_point()];
    let build = || {
        let mut pb = Protoboard::<Fr>::new();
        let bits = pb.alloc_bits(252, "scalar");
        let gadget = FixedBaseMul::new(
            &mut pb,
            &params,
            &base_points,
            bits.bits(),
            &FixedBaseConfig::default(),
            "mul",
        )
        .unwrap();
        (pb, gadget)
    };
    let (pb1, gadget1) = build();
    let (pb2, gadget2) = build();
    assert_eq!(gadget1.tables(), gadget2.tables());
    assert_eq!(gadget1.result(), gadget2.result());
    assert_eq!(pb1.num_variables(), pb2.num_variables());

    let scalar = bits_of(&SCALAR.parse().unwrap(), 252);
    let r1 = run(&scalar, &base_points, &FixedBaseConfig::default());
    let r2 = run(&scalar, &base_points, &FixedBaseConfig::default());
    assert_eq!(result(&r1), result(&r2));
}

#[test]
fn test_sampled_scalars() {
    let g = babyjubjub::base_point();
    let config = FixedBaseConfig::single_segment(84);
    let scalars = [
        BigUint::from(0u32),
        BigUint::from(1u32),
        babyjubjub::subgroup_order() - 1u32,
    ];
    for scalar in scalars {
        let bits = bits_of(&scalar, 252);
        let instance = run(&bits, &[g], &config);
        assert!(instance.pb.is_satisfied());
        assert_eq!(result(&instance), reference(&bits, &[g], &config));
        assert_eq!(instance.bits.values(&instance.pb), bits);
    }
}

#[test]
fn test_segment_crossings() {
    let params = babyjubjub::params();
    let g = babyjubjub::base_point();
    let base_points = [
        g,
        g.mul_u64(3, &params).unwrap(),
        g.mul_u64(5, &params).unwrap(),
    ];
    let config = FixedBaseConfig::default();
    let mut rng = StdRng::from_seed([0; 32]);

    // one crossing, then two
    for chunks in [63, 125] {
        let scalar = random_bits(&mut rng, chunks * CHUNK_SIZE_BITS);
        let instance = run(&scalar, &base_points, &config);
        assert_eq!(instance.gadget.num_windows(), chunks);
        assert!(instance.pb.is_satisfied());
        assert_eq!(result(&instance), reference(&scalar, &base_points, &config));
    }
}

#[test]
fn test_single_window() {
    let params = babyjubjub::params();
    let g = babyjubjub::base_point();
    let config = FixedBaseConfig::default();
    for pattern in 0u64..8 {
        let scalar: Vec<bool> = (0..3).map(|i| (pattern >> i) & 1 == 1).collect();
        let instance = run(&scalar, &[g], &config);
        assert_eq!(instance.gadget.num_adders(), 0);
        assert!(instance.pb.is_satisfied());

        let magnitude = g.mul_u64(1 + (pattern & 3), &params).unwrap();
        let expected = if pattern & 4 == 4 {
            magnitude.neg()
        } else {
            magnitude
        };
        assert_eq!(result(&instance), expected);
    }
}

#[test]
fn test_flipped_bit_is_unsatisfied() {
    let mut rng = StdRng::from_seed([0; 32]);
    let scalar = random_bits(&mut rng, 252);
    let base_points = [babyjubjub::base_point(), second_base_point()];
    let mut instance = run(&scalar, &base_points, &FixedBaseConfig::default());
    assert!(instance.pb.is_satisfied());

    let i = 100;
    let flipped = Fr::from(!scalar[i]);
    instance.pb.set_value(instance.bits.var(i), flipped);
    assert!(!instance.pb.is_satisfied());
    assert!(instance.pb.check_satisfied().is_err());
}

#[test]
fn test_configuration_errors_leave_board_untouched() {
    let params = babyjubjub::params();
    let g = babyjubjub::base_point();
    let config = FixedBaseConfig::default();
    let mut pb = Protoboard::<Fr>::new();

    let bits = pb.alloc_bits(250, "scalar");
    let res = FixedBaseMul::new(&mut pb, &params, &[g], bits.bits(), &config, "mul");
    assert!(matches!(res, Err(GadgetError::ScalarLength(250, 3))));
    assert_eq!(pb.num_variables(), 250);
    assert_eq!(pb.num_constraints(), 0);

    let bits = pb.alloc_bits(189, "scalar");
    let before = pb.num_variables();
    let res = FixedBaseMul::new(&mut pb, &params, &[g], bits.bits(), &config, "mul");
    assert!(matches!(
        res,
        Err(GadgetError::InsufficientBasePoints(63, 2, 1))
    ));
    assert_eq!(pb.num_variables(), before);

    let res = FixedBaseMul::new(&mut pb, &params, &[g], &[], &config, "mul");
    assert!(matches!(res, Err(GadgetError::EmptyScalar)));
    assert_eq!(pb.num_variables(), before);
    assert_eq!(pb.num_constraints(), 0);
}

#[test]
fn test_zero_denominator_leaves_board_untouched() {
    // with a = 1 and d = -1, doubling (1, 1) divides by 1 + d = 0
    let params = CurveParams::new(Fr::from(1u64), -Fr::from(1u64));
    let base = Point::new(Fr::from(1u64), Fr::from(1u64));
    let mut pb = Protoboard::<Fr>::new();
    let bits = pb.alloc_bits(3, "scalar");

    let res = FixedBaseMul::new(
        &mut pb,
        &params,
        &[base],
        bits.bits(),
        &FixedBaseConfig::default(),
        "mul",
    );
    assert!(matches!(
        res,
        Err(GadgetError::Curve(CurveError::ZeroDenominator("x")))
    ));
    assert_eq!(pb.num_variables(), 3);
    assert_eq!(pb.num_constraints(), 0);
}

#[test]
fn test_witness_before_constraints() {
    init_logger();
    let params = babyjubjub::params();
    let scalar = bits_of(&SCALAR.parse().unwrap(), 252);
    let mut pb = Protoboard::<Fr>::new();
    let bits = pb.alloc_bits(252, "scalar");
    let gadget = FixedBaseMul::with_base_point(
        &mut pb,
        &params,
        &babyjubjub::base_point(),
        bits.bits(),
        "mul",
    )
    .unwrap();
    assert_eq!(gadget.num_windows(), 84);

    bits.fill_with_bits(&mut pb, &scalar);
    gadget.generate_witness(&mut pb).unwrap();
    bits.generate_boolean_constraints(&mut pb);
    gadget.generate_constraints(&mut pb);

    assert_eq!(pb.check_satisfied(), Ok(()));
    let expected = Point::from_decimal(EXPECTED_X, EXPECTED_Y).unwrap();
    assert_eq!(gadget.result().value(&pb), expected);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(8))]

    #[test]
    fn test_matches_reference_multiplication(
        scalar in prop::collection::vec(any::<bool>(), 252)
    ) {
        let base_points = [babyjubjub::base_point(), second_base_point()];
        let config = FixedBaseConfig::default();
        let instance = run(&scalar, &base_points, &config);
        prop_assert!(instance.pb.is_satisfied());

        let expected = reference(&scalar, &base_points, &config);
        prop_assert_eq!(result(&instance), expected);

        // both segments together equal one long progression from G
        let single = reference(&scalar, &base_points[..1], &FixedBaseConfig::single_segment(84));
        prop_assert_eq!(expected, single);
    }
}
