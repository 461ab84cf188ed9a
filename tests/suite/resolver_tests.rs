//! Implicit- and explicit-output resolution behavior.

use pretty_assertions::assert_eq;

use einsum_dispatch::Einsum;

#[test]
fn test_implicit_matmul() {
    // Shared mode j is contracted; survivors come out sorted.
    let op = Einsum::<f32>::new("ij,jk", &[2, 3], None, Some(&[3, 4]), None).unwrap();
    assert_eq!(op.modes_c(), "ik");
    assert_eq!(op.output_shape(), vec![2, 4]);
}

#[test]
fn test_implicit_output_is_canonically_sorted() {
    // The derived output ignores equation order entirely.
    let op = Einsum::<f32>::new("kj,ji", &[4, 3], None, Some(&[3, 2]), None).unwrap();
    assert_eq!(op.modes_c(), "ik");
    assert_eq!(op.output_shape(), vec![2, 4]);

    let op = Einsum::<f32>::new("ba", &[3, 2], None, None, None).unwrap();
    assert_eq!(op.modes_c(), "ab");
    assert_eq!(op.output_shape(), vec![2, 3]);
}

#[test]
fn test_explicit_output_never_reordered() {
    let op = Einsum::<f32>::new("ij,jk->ki", &[2, 3], None, Some(&[3, 4]), None).unwrap();
    assert_eq!(op.modes_c(), "ki");
    assert_eq!(op.output_shape(), vec![4, 2]);
}

#[test]
fn test_implicit_outer_product() {
    let op = Einsum::<f32>::new("j,i", &[3], None, Some(&[2]), None).unwrap();
    assert_eq!(op.modes_c(), "ij");
    assert_eq!(op.output_shape(), vec![2, 3]);
}

#[test]
fn test_implicit_full_contraction_is_scalar() {
    // Every mode is shared, so the implicit output is empty.
    let op = Einsum::<f32>::new("ij,ij", &[2, 3], None, Some(&[2, 3]), None).unwrap();
    assert_eq!(op.modes_c(), "");
    assert_eq!(op.output_rank(), 0);
    assert!(op.output_shape().is_empty());
}

#[test]
fn test_implicit_repeated_shared_mode_contracts_once() {
    // j appears twice in A and once in B; it is still contracted away.
    let op = Einsum::<f32>::new("ijj,jk", &[2, 3, 3], None, Some(&[3, 4]), None).unwrap();
    assert_eq!(op.modes_c(), "ik");
}

#[test]
fn test_explicit_scalar_output() {
    let op = Einsum::<f32>::new("ij,ij->", &[2, 3], None, Some(&[2, 3]), None).unwrap();
    assert_eq!(op.modes_c(), "");
    assert!(op.output_shape().is_empty());
}

#[test]
fn test_mode_roundtrip_reproduces_sequences() {
    let cases: &[(&str, &[usize], Option<&[usize]>, &str, &str, &str)] = &[
        ("ij,jk->ik", &[2, 3], Some(&[3, 4]), "ij", "jk", "ik"),
        ("ij,jk", &[2, 3], Some(&[3, 4]), "ij", "jk", "ik"),
        ("ijk->ik", &[2, 3, 4], None, "ijk", "", "ik"),
        ("abc", &[2, 3, 4], None, "abc", "", "abc"),
    ];
    for &(equation, a_shape, b_shape, modes_a, modes_b, modes_c) in cases {
        let op = Einsum::<f32>::new(equation, a_shape, None, b_shape, None).unwrap();
        assert_eq!(op.modes_a(), modes_a, "{equation}");
        assert_eq!(op.modes_b(), modes_b, "{equation}");
        assert_eq!(op.modes_c(), modes_c, "{equation}");
    }
}
