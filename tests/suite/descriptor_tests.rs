//! Descriptor assembly and output-shape queries.

use pretty_assertions::assert_eq;

use einsum_dispatch::{Einsum, EinsumError, ValidationError};

#[test]
fn test_output_shape_matmul() {
    let op = Einsum::<f32>::new("ij,jk", &[2, 3], None, Some(&[3, 4]), None).unwrap();
    assert_eq!(op.output_shape(), vec![2, 4]);
}

#[test]
fn test_output_shape_prefers_operand_a_extent() {
    // 'i' exists in both operands; the extent must come from A's entry.
    let op = Einsum::<f32>::new("ij,ji->ij", &[2, 3], None, Some(&[3, 2]), None).unwrap();
    assert_eq!(op.output_shape(), vec![2, 3]);
}

#[test]
fn test_unresolvable_explicit_output_mode() {
    let err = Einsum::<f32>::new("ij,jk->iz", &[2, 3], None, Some(&[3, 4]), None).unwrap_err();
    assert_eq!(
        err,
        EinsumError::Validation(ValidationError::UnresolvableOutputMode { mode: 'z' })
    );
}

#[test]
fn test_extent_mismatch_across_operands() {
    let err = Einsum::<f32>::new("ij,jk->ik", &[2, 3], None, Some(&[5, 4]), None).unwrap_err();
    assert_eq!(
        err,
        EinsumError::Validation(ValidationError::ExtentMismatch {
            mode: 'j',
            expected: 3,
            got: 5,
        })
    );
}

#[test]
fn test_extent_mismatch_within_operand() {
    let err = Einsum::<f32>::new("ii->i", &[2, 3], None, None, None).unwrap_err();
    assert_eq!(
        err,
        EinsumError::Validation(ValidationError::ExtentMismatch {
            mode: 'i',
            expected: 2,
            got: 3,
        })
    );
}

#[test]
fn test_diagonal_passthrough() {
    // "ii->i" with a square shape builds a diagonal view descriptor.
    let op = Einsum::<f32>::new("ii->i", &[3, 3], None, None, None).unwrap();
    assert_eq!(op.modes_a(), "ii");
    assert_eq!(op.modes_c(), "i");
    assert_eq!(op.output_shape(), vec![3]);
}

#[test]
fn test_output_shape_stable_across_queries() {
    let op = Einsum::<f32>::new("bhqd,bhkd->bhqk", &[2, 4, 8, 16], None, Some(&[2, 4, 8, 16]), None)
        .unwrap();
    let first = op.output_shape();
    assert_eq!(first, vec![2, 4, 8, 8]);
    assert_eq!(op.output_shape(), first);
    assert_eq!(op.output_shape(), first);
}
