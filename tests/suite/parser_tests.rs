//! Equation parsing through the public construction API.

use pretty_assertions::assert_eq;

use einsum_dispatch::{Einsum, EinsumError, MAX_MODES, Operand, ParseError};

#[test]
fn test_matmul_modes() {
    let op = Einsum::<f32>::new("ij,jk->ik", &[2, 3], None, Some(&[3, 4]), None).unwrap();
    assert_eq!(op.modes_a(), "ij");
    assert_eq!(op.modes_b(), "jk");
    assert_eq!(op.modes_c(), "ik");
    assert!(op.is_contraction());
}

#[test]
fn test_unary_is_reduction() {
    let op = Einsum::<f32>::new("ijk->ik", &[2, 3, 4], None, None, None).unwrap();
    assert!(op.is_reduction());
    assert_eq!(op.modes_b(), "");
}

#[test]
fn test_whitespace_ignored() {
    let op = Einsum::<f32>::new(" i j , j k -> i k ", &[2, 3], None, Some(&[3, 4]), None).unwrap();
    assert_eq!(op.modes_a(), "ij");
    assert_eq!(op.modes_b(), "jk");
    assert_eq!(op.modes_c(), "ik");
}

#[test]
fn test_broadcast_rejected_regardless_of_shapes() {
    let err = Einsum::<f32>::new("...ij,...jk->...ik", &[2, 3], None, Some(&[3, 4]), None)
        .unwrap_err();
    assert_eq!(err, EinsumError::Parse(ParseError::BroadcastNotSupported));

    let err = Einsum::<f32>::new("ij...", &[2, 3], None, None, None).unwrap_err();
    assert_eq!(err, EinsumError::Parse(ParseError::BroadcastNotSupported));
}

#[test]
fn test_mode_count_mismatch_fails() {
    // 3 modes against a 2-dimensional shape.
    let err = Einsum::<f32>::new("ijk", &[2, 3], None, None, None).unwrap_err();
    assert_eq!(
        err,
        EinsumError::Parse(ParseError::ModeShapeMismatch {
            operand: Operand::A,
            modes: 3,
            dims: 2,
        })
    );
}

#[test]
fn test_second_operand_mismatch_fails() {
    let err = Einsum::<f32>::new("ij,jkl->ik", &[2, 3], None, Some(&[3, 4]), None).unwrap_err();
    assert_eq!(
        err,
        EinsumError::Parse(ParseError::ModeShapeMismatch {
            operand: Operand::B,
            modes: 3,
            dims: 2,
        })
    );
}

#[test]
fn test_rank_ceiling() {
    let equation: String = std::iter::repeat('a').take(MAX_MODES + 1).collect();
    let shape = vec![2usize; MAX_MODES + 1];
    let err = Einsum::<f32>::new(&equation, &shape, None, None, None).unwrap_err();
    assert_eq!(
        err,
        EinsumError::Parse(ParseError::TooManyModes {
            operand: Operand::A,
            count: MAX_MODES + 1,
            max: MAX_MODES,
        })
    );
}

#[test]
fn test_b_shape_without_comma_is_ignored() {
    let op = Einsum::<f32>::new("ij->i", &[2, 3], None, Some(&[9, 9, 9]), None).unwrap();
    assert!(op.is_reduction());
    assert_eq!(op.output_shape(), vec![2]);
}

#[test]
fn test_uppercase_and_mixed_symbols() {
    let op = Einsum::<f32>::new("Ab,bC->AC", &[2, 3], None, Some(&[3, 4]), None).unwrap();
    assert_eq!(op.modes_c(), "AC");
    assert_eq!(op.output_shape(), vec![2, 4]);
}
