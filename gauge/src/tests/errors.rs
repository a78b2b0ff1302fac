use crate::{evaluate, GaugeError};

#[test]
fn test_bad_number_is_a_scan_error() {
    match evaluate("1e234") {
        Err(GaugeError::Scan(msg)) => {
            assert!(msg.contains("bad number syntax"), "{}", msg)
        }
        other => panic!("expected a scan error, got {:?}", other),
    }
    assert!(matches!(evaluate("12_34"), Err(GaugeError::Scan(_))));
}

#[test]
fn test_scan_error_inside_larger_expression() {
    // The malformed literal aborts evaluation even when the expression
    // around it is fine; it never becomes a silently wrong number.
    assert!(matches!(evaluate("1 + 1e234"), Err(GaugeError::Scan(_))));
}

#[test]
fn test_missing_closing_bracket() {
    match evaluate("(1 + 2") {
        Err(GaugeError::Syntax(msg)) => {
            assert!(msg.contains("RightBracket"), "{}", msg);
            assert!(msg.contains("end of input"), "{}", msg);
        }
        other => panic!("expected a syntax error, got {:?}", other),
    }
}

#[test]
fn test_missing_argument_separator() {
    assert!(matches!(
        evaluate(r#"left("a" 3)"#),
        Err(GaugeError::Syntax(_))
    ));
    assert!(matches!(evaluate("hyp(3 4)"), Err(GaugeError::Syntax(_))));
}

#[test]
fn test_empty_input() {
    match evaluate("") {
        Err(GaugeError::Syntax(msg)) => {
            assert!(msg.contains("end of input"), "{}", msg)
        }
        other => panic!("expected a syntax error, got {:?}", other),
    }
    assert!(evaluate("   \t ").is_err());
}

#[test]
fn test_trailing_tokens_are_rejected() {
    assert!(matches!(evaluate("1 2"), Err(GaugeError::Syntax(_))));
    assert!(matches!(evaluate("1 + 2 )"), Err(GaugeError::Syntax(_))));
}

#[test]
fn test_keyword_in_factor_position() {
    assert!(matches!(evaluate("then"), Err(GaugeError::Syntax(_))));
    assert!(matches!(evaluate("1 + else"), Err(GaugeError::Syntax(_))));
}

#[test]
fn test_bracketed_group_must_produce_a_number() {
    assert!(matches!(
        evaluate(r#"("a") + 1"#),
        Err(GaugeError::Type(_))
    ));
    // An absent branch result cannot feed arithmetic.
    assert!(matches!(
        evaluate("(2 > 3 ? 1) + 1"),
        Err(GaugeError::Type(_))
    ));
}

#[test]
fn test_string_count_must_be_whole() {
    assert!(matches!(
        evaluate(r#"left("hello", 1.5)"#),
        Err(GaugeError::Syntax(_))
    ));
}

#[test]
fn test_no_state_between_calls() {
    assert!(evaluate("(1").is_err());
    // A failed evaluation leaves nothing behind for the next call.
    assert_eq!(evaluate("1 + 1").unwrap().unwrap().as_number().unwrap(), 2.0);
}
