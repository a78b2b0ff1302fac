use crate::evaluator::operations::{round_down, round_nearest, round_up};
use crate::{evaluate, Value};

fn eval_number(input: &str) -> f64 {
    match evaluate(input) {
        Ok(Some(Value::Number(n))) => n,
        other => panic!("expected a number from {:?}, got {:?}", input, other),
    }
}

#[test]
fn test_round_nearest_ties_go_up() {
    // 5 mod 2 = 1, exactly half the divisor: half up, not banker's.
    assert_eq!(eval_number("5 ~ 2"), 6.0);
    assert_eq!(eval_number("4 ~ 2"), 4.0);
    assert_eq!(eval_number("3 ~ 2"), 4.0);
}

#[test]
fn test_round_down_and_up() {
    assert_eq!(eval_number("7 @ 3"), 6.0);
    assert_eq!(eval_number("7 # 3"), 9.0);
}

#[test]
fn test_idempotent_on_exact_multiples() {
    assert_eq!(eval_number("6 @ 3"), 6.0);
    assert_eq!(eval_number("6 # 3"), 6.0);
    assert_eq!(eval_number("6 ~ 3"), 6.0);
}

#[test]
fn test_fractional_divisor() {
    assert_eq!(eval_number("2.5 ~ 0.5"), 2.5);
    assert_eq!(eval_number("2.3 # 0.5"), 2.5);
}

#[test]
fn test_chains_are_left_associative() {
    // (12 @ 5) @ 2, not 12 @ (5 @ 2)
    assert_eq!(eval_number("12 @ 5 @ 2"), 10.0);
    assert_eq!(eval_number("10 ~ 4 ~ 3"), 12.0);
}

#[test]
fn test_rounding_binds_tighter_than_term() {
    assert_eq!(eval_number("2 * 5 ~ 2"), 12.0);
    assert_eq!(eval_number("5 ~ 2 + 1"), 7.0);
}

#[test]
fn test_rounding_under_power() {
    // The power rule re-evaluates the rounding level on both sides.
    assert_eq!(eval_number("5 ~ 2 ^ 2"), 36.0);
}

#[test]
fn test_helpers_direct() {
    assert_eq!(round_nearest(5.0, 2.0), 6.0);
    assert_eq!(round_nearest(4.9, 2.0), 4.0);
    assert_eq!(round_down(11.0, 5.0), 10.0);
    assert_eq!(round_up(11.0, 5.0), 15.0);
    assert_eq!(round_up(10.0, 5.0), 10.0);
}
