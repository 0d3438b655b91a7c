//! Property test: the single-scan binary parser agrees with textbook
//! precedence climbing on arithmetic chains.

use ink_ir::{BinaryOp, Node, NodeKind};
use proptest::prelude::*;

const OPS: [(&str, BinaryOp); 4] = [
    ("+", BinaryOp::Add),
    ("-", BinaryOp::Sub),
    ("*", BinaryOp::Mul),
    ("%", BinaryOp::Mod),
];

fn apply(op: BinaryOp, left: f64, right: f64) -> f64 {
    match op {
        BinaryOp::Add => left + right,
        BinaryOp::Sub => left - right,
        BinaryOp::Mul => left * right,
        BinaryOp::Mod => left % right,
        other => panic!("operator {other:?} not generated"),
    }
}

fn eval_tree(node: &Node) -> f64 {
    match &node.kind {
        NodeKind::Number(n) => *n,
        NodeKind::Binary { op, left, right } => apply(*op, eval_tree(left), eval_tree(right)),
        other => panic!("unexpected node {other:?}"),
    }
}

/// Reference: precedence climbing with left associativity.
fn climb(operands: &[f64], ops: &[BinaryOp], pos: &mut usize, min_priority: i32) -> f64 {
    let mut lhs = operands[*pos];
    while *pos < ops.len() && ops[*pos].priority() >= min_priority {
        let op = ops[*pos];
        *pos += 1;
        let rhs = climb(operands, ops, pos, op.priority() + 1);
        lhs = apply(op, lhs, rhs);
    }
    lhs
}

fn chain() -> impl Strategy<Value = (Vec<u8>, Vec<usize>)> {
    (1usize..8).prop_flat_map(|len| {
        (
            prop::collection::vec(1u8..10, len + 1),
            prop::collection::vec(0usize..OPS.len(), len),
        )
    })
}

proptest! {
    #[test]
    fn prop_matches_precedence_climbing((operands, op_indices) in chain()) {
        let mut source = operands[0].to_string();
        for (i, &op) in op_indices.iter().enumerate() {
            source.push_str(&format!(" {} {}", OPS[op].0, operands[i + 1]));
        }

        let tokens = ink_lexer::lex(&source).map_err(|e| TestCaseError::fail(e.to_string()))?;
        let nodes = crate::parse(tokens).map_err(|e| TestCaseError::fail(e.to_string()))?;
        prop_assert_eq!(nodes.len(), 1);

        let values: Vec<f64> = operands.iter().map(|&n| f64::from(n)).collect();
        let ops: Vec<BinaryOp> = op_indices.iter().map(|&i| OPS[i].1).collect();
        let expected = climb(&values, &ops, &mut 0, i32::MIN);
        prop_assert_eq!(eval_tree(&nodes[0]), expected, "source: {}", source);
    }
}
