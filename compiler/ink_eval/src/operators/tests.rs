#![expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use pretty_assertions::assert_eq;

use super::*;
use crate::errors::EvalErrorKind;

fn num(n: f64) -> Value {
    Value::Number(n)
}

fn eval(op: BinaryOp, left: &Value, right: &Value) -> String {
    evaluate_binary(op, left, right).unwrap().to_string()
}

fn kind(op: BinaryOp, left: &Value, right: &Value) -> EvalErrorKind {
    evaluate_binary(op, left, right).unwrap_err().kind().clone()
}

#[test]
fn test_arithmetic() {
    assert_eq!(eval(BinaryOp::Add, &num(1.0), &num(2.5)), "3.5");
    assert_eq!(eval(BinaryOp::Sub, &num(1.0), &num(3.0)), "-2");
    assert_eq!(eval(BinaryOp::Mul, &num(4.0), &num(2.5)), "10");
    assert_eq!(eval(BinaryOp::Div, &num(1.0), &num(4.0)), "0.25");
    assert_eq!(eval(BinaryOp::Mod, &num(-7.0), &num(3.0)), "-1");
}

#[test]
fn test_zero_divisors() {
    assert_eq!(kind(BinaryOp::Div, &num(1.0), &num(0.0)), EvalErrorKind::DivisionByZero);
    assert_eq!(kind(BinaryOp::Mod, &num(1.0), &num(0.0)), EvalErrorKind::ModuloByZero);
}

#[test]
fn test_modulus_requires_integers() {
    assert!(matches!(
        kind(BinaryOp::Mod, &num(5.5), &num(2.0)),
        EvalErrorKind::NonIntegerOperands { .. }
    ));
}

#[test]
fn test_string_concatenation_copies() {
    let a = Value::from("hi");
    let joined = evaluate_binary(BinaryOp::Add, &a, &Value::from("!")).unwrap();
    let (Value::Str(a_buf), Value::Str(joined_buf)) = (&a, &joined) else {
        panic!("expected strings");
    };
    assert!(!a_buf.ptr_eq(joined_buf));
    assert_eq!(joined_buf.to_vec(), b"hi!".to_vec());
    assert_eq!(eval(BinaryOp::Add, &a, &a), "'hihi'");
}

#[test]
fn test_boolean_arithmetic() {
    assert_eq!(eval(BinaryOp::Add, &Value::Bool(false), &Value::Bool(true)), "true");
    assert_eq!(eval(BinaryOp::Mul, &Value::Bool(false), &Value::Bool(true)), "false");
}

#[test]
fn test_logical_operators() {
    let t = Value::Bool(true);
    let f = Value::Bool(false);
    assert_eq!(eval(BinaryOp::And, &t, &f), "false");
    assert_eq!(eval(BinaryOp::Or, &t, &f), "true");
    assert_eq!(eval(BinaryOp::Xor, &t, &t), "false");

    assert_eq!(eval(BinaryOp::And, &num(12.0), &num(10.0)), "8");
    assert_eq!(eval(BinaryOp::Or, &num(12.0), &num(3.0)), "15");
    assert_eq!(eval(BinaryOp::Xor, &num(6.0), &num(3.0)), "5");
    assert!(matches!(
        kind(BinaryOp::And, &num(1.5), &num(1.0)),
        EvalErrorKind::NonIntegerOperands { .. }
    ));
}

#[test]
fn test_bytewise_string_logic_pads_shorter_operand() {
    let result = evaluate_binary(BinaryOp::Or, &Value::from("a"), &Value::from("  ")).unwrap();
    let Value::Str(buf) = result else {
        panic!("expected string");
    };
    assert_eq!(buf.to_vec(), vec![b'a' | b' ', b' ']);
}

#[test]
fn test_comparisons() {
    assert_eq!(eval(BinaryOp::Gt, &num(2.0), &num(1.0)), "true");
    assert_eq!(eval(BinaryOp::Lt, &num(2.0), &num(1.0)), "false");
    assert_eq!(eval(BinaryOp::Lt, &Value::from("abc"), &Value::from("abd")), "true");
    assert_eq!(eval(BinaryOp::Gt, &num(1.0), &num(1.0)), "false");
}

#[test]
fn test_equality_never_errors() {
    assert_eq!(eval(BinaryOp::Eq, &Value::Null, &Value::Empty), "true");
    assert_eq!(eval(BinaryOp::Eq, &num(1.0), &Value::from("1")), "false");
}

#[test]
fn test_unsupported_pair_names_both_operands() {
    let err = evaluate_binary(BinaryOp::Sub, &Value::from("a"), &num(1.0)).unwrap_err();
    assert_eq!(err.message(), "values 'a' and 1 do not support -");
    assert!(matches!(
        kind(BinaryOp::Gt, &Value::Bool(true), &num(1.0)),
        EvalErrorKind::UnsupportedOperands { .. }
    ));
}

#[test]
fn test_negation() {
    assert_eq!(evaluate_unary(UnaryOp::Negate, &num(3.0)).unwrap().to_string(), "-3");
    assert_eq!(
        evaluate_unary(UnaryOp::Negate, &Value::Bool(true)).unwrap().to_string(),
        "false"
    );
    assert!(evaluate_unary(UnaryOp::Negate, &Value::from("x")).is_err());
}
