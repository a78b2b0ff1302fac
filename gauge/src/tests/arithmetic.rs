use crate::{evaluate, Value};

fn eval_number(input: &str) -> f64 {
    match evaluate(input) {
        Ok(Some(Value::Number(n))) => n,
        other => panic!("expected a number from {:?}, got {:?}", input, other),
    }
}

#[test]
fn test_precedence() {
    assert_eq!(eval_number("1 + 2 * 3"), 7.0);
    assert_eq!(eval_number("2 ^ 3 * 4"), 32.0);
    assert_eq!(eval_number("2 * 3 ^ 2"), 18.0);
    assert_eq!(eval_number("10 - 4 / 2"), 8.0);
}

#[test]
fn test_power_is_left_associative() {
    assert_eq!(eval_number("2 ^ 3 ^ 2"), 64.0);
}

#[test]
fn test_unary_sign() {
    assert_eq!(eval_number("-5 + 3"), -2.0);
    assert_eq!(eval_number("+5 + 3"), 8.0);
    assert_eq!(eval_number("-2 * 3"), -6.0);
}

#[test]
fn test_division() {
    assert_eq!(eval_number("10 / 4"), 2.5);
}

#[test]
fn test_division_by_zero_is_infinite() {
    assert!(eval_number("1 / 0").is_infinite());
}

#[test]
fn test_brackets() {
    assert_eq!(eval_number("(1 + 2) * 3"), 9.0);
    assert_eq!(eval_number("((2))"), 2.0);
}

#[test]
fn test_bracketed_statement_as_operand() {
    // A parenthesized group is a full statement, so conditionals nest
    // inside arithmetic.
    assert_eq!(eval_number("2 * (if 1 > 0 then 5 else 2)"), 10.0);
}

#[test]
fn test_boolean_constants_are_numbers() {
    assert_eq!(eval_number("y + y"), 2.0);
    assert_eq!(eval_number("n * 5"), 0.0);
    assert_eq!(eval_number("Y + N"), 1.0);
}

#[test]
fn test_dimensional_lengths() {
    assert_eq!(eval_number("5mm + 2mm"), 7.0);
    assert_eq!(eval_number("210mm / 2"), 105.0);
    assert_eq!(eval_number("1.5mm * 4"), 6.0);
}

#[test]
fn test_hyp() {
    assert_eq!(eval_number("hyp(3, 4)"), 5.0);
    assert_eq!(eval_number("hypot(3, 4)"), 5.0);
    assert_eq!(eval_number("hyp(5 + 3, 6)"), 10.0);
}

#[test]
fn test_exponent_literals() {
    assert_eq!(eval_number("1.5e2 + 0.5e2"), 200.0);
    assert_eq!(eval_number("2e-1 * 10"), 2.0);
}
