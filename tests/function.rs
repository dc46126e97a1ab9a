use std::collections::HashSet;

use fnchain::{
    error::FunctionError,
    function::{
        combinator::{Combinator, Part},
        core::{CAPACITY, Function},
        term::Term,
    },
};
use rstest::rstest;

const INPUTS: [f32; 7] = [-10.0, -1.5, -0.25, 0.0, 0.25, 1.0, 42.0];

fn sample(f: &Function, x: f32) -> f32 {
    f.sample(x)
     .unwrap_or_else(|e| panic!("sampling {f} at {x} failed: {e}"))
}

fn assert_close(actual: f32, expected: f32) {
    let tolerance = 1e-5 * expected.abs().max(1.0);
    assert!((actual - expected).abs() <= tolerance,
            "expected {expected}, got {actual}");
}

#[rstest]
fn constant_ignores_input(#[values(0.0, -3.5, 7.25, 1e9)] value: f32) {
    let f = Function::constant(value);
    for x in INPUTS {
        assert_eq!(sample(&f, x), value);
    }
}

#[rstest]
#[case(1.0, 0.0, 1.0)]
#[case(2.0, 1.0, 3.0)]
#[case(-0.5, 4.0, 0.1)]
#[case(0.0, 2.0, -1.0)]
fn linear_matches_formula(#[case] scale: f32, #[case] offset: f32, #[case] slope: f32) {
    let f = Function::linear(scale, offset, slope);
    for x in INPUTS {
        assert_eq!(sample(&f, x), (x * scale + offset) * slope);
    }
}

#[rstest]
#[case(1.0, 0.0, 1.0)]
#[case(2.0, 0.25, 10.0)]
#[case(0.5, -0.1, -3.0)]
fn sine_matches_formula(#[case] periods: f32, #[case] offset: f32, #[case] amplitude: f32) {
    let f = Function::sine(periods, offset, amplitude);
    for x in INPUTS {
        let expected = amplitude * (std::f32::consts::TAU * (x * periods - offset)).sin();
        assert_close(sample(&f, x), expected);
    }
}

#[test]
fn power_matches_formula() {
    let f = Function::power(2.0, 1.0, 3.0, 2.0);
    assert_eq!(sample(&f, 1.0), 27.0);
    assert_eq!(sample(&f, -0.5), 0.0);

    let root = Function::power(1.0, 0.0, 1.0, 0.5);
    assert_eq!(sample(&root, 16.0), 4.0);
    assert!(sample(&root, -4.0).is_nan());
}

#[test]
fn multiply_linear_by_constant() {
    let f = Function::linear(1.0, 0.0, 2.0).multiply(Function::constant(3.0))
                                           .unwrap();
    assert_eq!(sample(&f, 5.0), 30.0);
}

#[test]
fn clamp_sine_peak() {
    let f = Function::sine(1.0, 0.0, 10.0).clamp(-5.0, 5.0).unwrap();
    assert_eq!(sample(&f, 0.25), 5.0);
    assert_eq!(sample(&f, 0.75), -5.0);
    assert_close(sample(&f, 0.0), 0.0);
}

#[test]
fn divide_by_zero_is_infinite_not_an_error() {
    let x = Function::linear(1.0, 0.0, 1.0);

    let f = Function::constant(1.0).divide(x).unwrap();
    assert_eq!(sample(&f, 0.0), f32::INFINITY);

    let f = Function::constant(-1.0).divide(x).unwrap();
    assert_eq!(sample(&f, 0.0), f32::NEG_INFINITY);

    let f = x.divide(x).unwrap();
    assert!(sample(&f, 0.0).is_nan());
}

#[test]
fn clamp_is_idempotent() {
    let f = Function::linear(2.0, -1.0, 3.0);
    let once = f.clamp(-2.0, 4.0).unwrap();
    let twice = once.clamp(-2.0, 4.0).unwrap();

    for x in INPUTS {
        assert_eq!(sample(&twice, x), sample(&once, x));
    }
}

#[rstest]
#[case(-1.0, 1.0)]
#[case(0.0, 0.5)]
#[case(-100.0, -50.0)]
#[case(3.0, 3.0)]
fn clamp_keeps_samples_in_bounds(#[case] low: f32, #[case] high: f32) {
    let f = Function::sine(3.0, 0.1, 20.0).add(Function::linear(1.0, 0.0, 5.0))
                                         .unwrap()
                                         .clamp(low, high)
                                         .unwrap();
    for x in INPUTS {
        let y = sample(&f, x);
        assert!((low..=high).contains(&y), "{y} is outside [{low}, {high}]");
    }
}

#[test]
fn clamp_passes_nan_through() {
    let f = Function::power(1.0, 0.0, 1.0, 0.5).clamp(0.0, 1.0).unwrap();
    assert!(sample(&f, -4.0).is_nan());
    assert_eq!(sample(&f, 4.0), 1.0);

    let f = Function::constant(0.0).divide(Function::constant(0.0))
                                   .unwrap()
                                   .clamp(-5.0, 5.0)
                                   .unwrap();
    assert!(sample(&f, 0.0).is_nan());
}

#[test]
fn clamp_still_bounds_infinities() {
    let f = Function::constant(1.0).divide(Function::linear(1.0, 0.0, 1.0))
                                   .unwrap()
                                   .clamp(-5.0, 5.0)
                                   .unwrap();
    assert_eq!(sample(&f, 0.0), 5.0);
}

#[test]
fn inverted_clamp_yields_low_bound() {
    let f = Function::constant(0.0).clamp(5.0, -5.0).unwrap();
    for x in INPUTS {
        assert_eq!(sample(&f, x), 5.0);
    }
}

#[test]
fn combinators_fold_a_before_b() {
    let a = Function::linear(1.0, 2.0, 1.0).clamp(0.0, 10.0).unwrap();
    let b = Function::sine(1.0, 0.0, 2.0);

    let add = a.add(b).unwrap();
    let subtract = a.subtract(b).unwrap();
    let multiply = a.multiply(b).unwrap();
    let divide = a.divide(b).unwrap();

    for x in INPUTS {
        let (left, right) = (sample(&a, x), sample(&b, x));
        assert_eq!(sample(&add, x), left + right);
        assert_eq!(sample(&subtract, x), left - right);
        assert_eq!(sample(&multiply, x), left * right);
        assert_eq!(sample(&divide, x), left / right);
    }
}

#[test]
fn later_parts_of_b_continue_from_the_combined_value() {
    let a = Function::constant(1.0);
    let b = Function::constant(2.0).multiply(Function::constant(3.0))
                                   .unwrap();

    // (1 + 2) * 3, not 1 + (2 * 3)
    let f = a.add(b).unwrap();
    assert_eq!(sample(&f, 0.0), 9.0);
}

#[test]
fn combining_up_to_capacity_succeeds() {
    let a = Function::linear(1.0, 0.0, 1.0).add(Function::constant(1.0))
                                           .unwrap();
    let b = Function::constant(2.0).clamp(0.0, 3.0).unwrap();

    let f = a.multiply(b).unwrap();
    assert_eq!(f.part_count(), CAPACITY);
    assert_eq!(sample(&f, 0.0), 2.0);
    assert_eq!(sample(&f, 4.0), 3.0);
}

#[test]
fn combining_past_capacity_fails() {
    let a = Function::linear(1.0, 0.0, 1.0).add(Function::constant(1.0))
                                           .unwrap()
                                           .clamp(0.0, 1.0)
                                           .unwrap();
    let b = Function::constant(2.0).clamp(0.0, 3.0).unwrap();

    assert_eq!(a.multiply(b),
               Err(FunctionError::CapacityExceeded { capacity:  CAPACITY,
                                                     requested: CAPACITY + 1, }));
}

#[test]
fn clamping_a_full_function_fails() {
    let f = Function::constant(1.0).add(Function::constant(1.0))
                                   .unwrap()
                                   .add(Function::constant(1.0))
                                   .unwrap()
                                   .add(Function::constant(1.0))
                                   .unwrap();
    assert_eq!(sample(&f, 0.0), 4.0);

    assert_eq!(f.clamp(0.0, 1.0),
               Err(FunctionError::CapacityExceeded { capacity:  CAPACITY,
                                                     requested: CAPACITY + 1, }));
}

#[test]
fn void_cannot_be_used() {
    let void = Function::void();
    let other = Function::constant(1.0);

    assert!(void.is_void());
    assert!(!Function::constant(1.0).clamp(0.0, 1.0).unwrap().is_void());
    assert_eq!(void.part_count(), 1);
    assert_eq!(void.sample(0.0), Err(FunctionError::InvalidOperand));
    assert_eq!(void.clamp(0.0, 1.0), Err(FunctionError::InvalidOperand));
    assert_eq!(void.add(other), Err(FunctionError::InvalidOperand));
    assert_eq!(other.multiply(void), Err(FunctionError::InvalidOperand));
    assert_eq!(other.divide(void), Err(FunctionError::InvalidOperand));
}

#[test]
fn void_check_comes_before_capacity_check() {
    let full = Function::constant(1.0).add(Function::constant(1.0))
                                      .unwrap()
                                      .add(Function::constant(1.0))
                                      .unwrap()
                                      .add(Function::constant(1.0))
                                      .unwrap();

    assert_eq!(full.subtract(Function::void()),
               Err(FunctionError::InvalidOperand));
}

#[test]
fn first_part_is_always_base() {
    let b = Function::sine(1.0, 0.0, 1.0);
    let functions = [Function::linear(1.0, 0.0, 1.0),
                     Function::constant(2.0).subtract(b).unwrap(),
                     Function::power(1.0, 0.0, 1.0, 2.0).divide(b)
                                                        .unwrap()
                                                        .clamp(-1.0, 1.0)
                                                        .unwrap()];

    for f in functions {
        assert!(matches!(f.parts()[0],
                         Part::Term { combinator: Combinator::Base,
                                      .. }));
    }
}

#[test]
fn second_operand_is_retagged() {
    let f = Function::constant(2.0).subtract(Function::sine(1.0, 0.0, 1.0))
                                   .unwrap();

    assert_eq!(f.parts()[1],
               Part::Term { combinator: Combinator::Subtract,
                            term:       Term::Sine { periods:   1.0,
                                                     offset:    0.0,
                                                     amplitude: 1.0, }, });
}

#[test]
fn operands_are_left_unchanged() {
    let a = Function::linear(1.0, 0.0, 1.0);
    let b = Function::constant(3.0);

    let f = a.add(b).unwrap().clamp(0.0, 1.0).unwrap();

    assert_eq!(f.part_count(), 3);
    assert_eq!(a, Function::linear(1.0, 0.0, 1.0));
    assert_eq!(b, Function::constant(3.0));
    assert_eq!(sample(&b, 0.0), 3.0);
}

#[test]
fn equal_functions_hash_alike() {
    let mut seen = HashSet::new();
    seen.insert(Function::constant(f32::NAN));
    seen.insert(Function::constant(f32::NAN));
    seen.insert(Function::linear(1.0, 0.0, 1.0).clamp(0.0, 1.0).unwrap());
    seen.insert(Function::linear(1.0, 0.0, 1.0).clamp(0.0, 1.0).unwrap());
    seen.insert(Function::linear(1.0, 0.0, 1.0));

    assert_eq!(seen.len(), 3);
}

#[test]
fn display_nests_in_evaluation_order() {
    let f = Function::linear(1.0, 0.0, 2.0).multiply(Function::constant(3.0))
                                           .unwrap()
                                           .clamp(-5.0, 5.0)
                                           .unwrap();

    assert_eq!(f.to_string(), "((x*1 + 0)*2 * 3) clamped to [-5, 5]");
    assert_eq!(Function::void().to_string(), "void");
}
