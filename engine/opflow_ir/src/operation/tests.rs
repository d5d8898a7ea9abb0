use super::*;
use pretty_assertions::assert_eq;

#[test]
fn binary_op_parse_known_symbols() {
    assert_eq!(BinaryOp::parse("+"), BinaryOp::Add);
    assert_eq!(BinaryOp::parse("-"), BinaryOp::Sub);
    assert_eq!(BinaryOp::parse("*"), BinaryOp::Mul);
}

#[test]
fn binary_op_keeps_unknown_symbol() {
    let op = BinaryOp::parse("/");
    assert_eq!(op, BinaryOp::Unsupported("/".into()));
    assert!(!op.is_supported());
    assert_eq!(op.symbol(), "/");
}

#[test]
fn calc_classifies_operands() {
    let op = Operation::calc("z", "x", "*", "3");
    assert_eq!(
        op,
        Operation::Calc {
            target: Name::new("z"),
            op: BinaryOp::Mul,
            left: Operand::Reference(Name::new("x")),
            right: Operand::Literal(3),
        }
    );
}

#[test]
fn references_are_left_then_right() {
    let op = Operation::calc("w", "z", "*", "y");
    let refs: Vec<&str> = op.references().map(Name::as_str).collect();
    assert_eq!(refs, vec!["z", "y"]);
}

#[test]
fn references_skip_literals() {
    let op = Operation::calc("x", "10", "+", "2");
    assert_eq!(op.references().count(), 0);

    let op = Operation::calc("m", "10", "-", "n");
    let refs: Vec<&str> = op.references().map(Name::as_str).collect();
    assert_eq!(refs, vec!["n"]);
}

#[test]
fn print_has_no_references() {
    let op = Operation::print("x");
    assert!(op.is_print());
    assert!(!op.is_calc());
    assert_eq!(op.references().count(), 0);
    assert_eq!(op.target(), "x");
}

#[test]
fn self_reference_is_kept_twice() {
    let op = Operation::calc("a", "a", "+", "a");
    assert_eq!(op.references().count(), 2);
}

#[test]
fn display_forms() {
    assert_eq!(
        Operation::calc("x", "10", "+", "2").to_string(),
        "calc x = 10 + 2"
    );
    assert_eq!(Operation::print("x").to_string(), "print x");
}
