use super::*;

#[test]
fn add_sub_mul() {
    assert_eq!(apply_binary(&BinaryOp::Add, 10, 2), Ok(12));
    assert_eq!(apply_binary(&BinaryOp::Sub, 12, 3), Ok(9));
    assert_eq!(apply_binary(&BinaryOp::Mul, 12, 9), Ok(108));
    assert_eq!(apply_binary(&BinaryOp::Sub, 3, 12), Ok(-9));
}

#[test]
fn unsupported_operator() {
    let div = BinaryOp::parse("/");
    assert_eq!(apply_binary(&div, 4, 2), Err(ApplyError::Unsupported));
}

#[test]
fn overflow_is_reported() {
    assert_eq!(
        apply_binary(&BinaryOp::Add, i64::MAX, 1),
        Err(ApplyError::Overflow)
    );
    assert_eq!(
        apply_binary(&BinaryOp::Sub, i64::MIN, 1),
        Err(ApplyError::Overflow)
    );
    assert_eq!(
        apply_binary(&BinaryOp::Mul, i64::MAX, 2),
        Err(ApplyError::Overflow)
    );
}

#[test]
fn boundaries_that_fit() {
    assert_eq!(apply_binary(&BinaryOp::Add, i64::MAX, 0), Ok(i64::MAX));
    assert_eq!(apply_binary(&BinaryOp::Mul, i64::MIN, 1), Ok(i64::MIN));
}
