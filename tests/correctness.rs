use matmul_bench::{Error, Matrix, Operands, multiply, multiply_ikj};

fn assert_matrices_equal(expected: &Matrix, actual: &Matrix, name: &str) {
    assert_eq!(expected.rows(), actual.rows(), "{}: row count mismatch", name);
    assert_eq!(expected.cols(), actual.cols(), "{}: column count mismatch", name);
    let (e, a) = (expected.as_slice(), actual.as_slice());
    for i in 0..e.len() {
        assert!(
            (e[i] - a[i]).abs() < 1e-8,
            "{}: mismatch at index {}: expected {}, got {}",
            name,
            i,
            e[i],
            a[i]
        );
    }
}

// ============================================================
// Concrete small-matrix results
// ============================================================

#[test]
fn test_2x2_multiply() {
    let a = Matrix::from_rows(&[vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
    let b = Matrix::from_rows(&[vec![5.0, 6.0], vec![7.0, 8.0]]).unwrap();

    let c = multiply(&a, &b).unwrap();
    let expected = Matrix::from_rows(&[vec![19.0, 22.0], vec![43.0, 50.0]]).unwrap();

    assert_matrices_equal(&expected, &c, "2x2");
}

#[test]
fn test_1x1_multiply() {
    let a = Matrix::from_rows(&[vec![3.0]]).unwrap();
    let b = Matrix::from_rows(&[vec![4.0]]).unwrap();

    let c = multiply(&a, &b).unwrap();
    assert_eq!(c.as_slice(), &[12.0]);
}

#[test]
fn test_zero_matrix_annihilates() {
    for n in [1, 2, 7, 16] {
        let zero = Matrix::zeros(n, n).unwrap();
        let m = Operands::generate(n, Some(9)).unwrap().a;

        let left = multiply(&zero, &m).unwrap();
        let right = multiply(&m, &zero).unwrap();

        assert_matrices_equal(&zero, &left, &format!("0*M size {}", n));
        assert_matrices_equal(&zero, &right, &format!("M*0 size {}", n));
    }
}

// ============================================================
// Algebraic properties
// ============================================================

#[test]
fn test_identity_is_neutral() {
    for n in [1, 3, 8, 50] {
        let identity = Matrix::identity(n).unwrap();
        let m = Operands::generate(n, Some(n as u64)).unwrap().a;

        let left = multiply(&identity, &m).unwrap();
        let right = multiply(&m, &identity).unwrap();

        assert_matrices_equal(&m, &left, &format!("I*M size {}", n));
        assert_matrices_equal(&m, &right, &format!("M*I size {}", n));
    }
}

#[test]
fn test_associativity() {
    let n = 16;
    let Operands { a, b } = Operands::generate(n, Some(1)).unwrap();
    let c = Operands::generate(n, Some(2)).unwrap().a;

    let left = multiply(&multiply(&a, &b).unwrap(), &c).unwrap();
    let right = multiply(&a, &multiply(&b, &c).unwrap()).unwrap();

    // Operand cells are in [0, 1), so accumulated values stay small and
    // the 1e-8 tolerance comfortably covers reassociation error at n=16.
    assert_matrices_equal(&left, &right, "associativity");
}

#[test]
fn test_result_dimensions_match_input() {
    for n in [1, 2, 17, 64] {
        let ops = Operands::generate(n, Some(n as u64)).unwrap();
        let c = multiply(&ops.a, &ops.b).unwrap();
        assert_eq!(c.rows(), n);
        assert_eq!(c.cols(), n);
    }
}

#[test]
fn test_loop_orders_agree() {
    let ops = Operands::generate(33, Some(7)).unwrap();

    let c_ijk = multiply(&ops.a, &ops.b).unwrap();
    let c_ikj = multiply_ikj(&ops.a, &ops.b).unwrap();

    assert_matrices_equal(&c_ijk, &c_ikj, "ijk vs ikj");
}

// ============================================================
// Operand generation
// ============================================================

#[test]
fn test_generated_cells_in_unit_interval() {
    let ops = Operands::generate(100, None).unwrap();
    for m in [&ops.a, &ops.b] {
        for &cell in m.as_slice() {
            assert!((0.0..1.0).contains(&cell), "cell {} outside [0, 1)", cell);
        }
    }
}

#[test]
fn test_same_seed_reproduces() {
    let first = Operands::generate(20, Some(1234)).unwrap();
    let second = Operands::generate(20, Some(1234)).unwrap();

    assert_eq!(first.a.as_slice(), second.a.as_slice());
    assert_eq!(first.b.as_slice(), second.b.as_slice());
}

#[test]
fn test_different_seeds_differ() {
    let first = Operands::generate(20, Some(1)).unwrap();
    let second = Operands::generate(20, Some(2)).unwrap();

    assert_ne!(first.a.as_slice(), second.a.as_slice());
}

#[test]
fn test_operands_are_independent() {
    let ops = Operands::generate(20, Some(5)).unwrap();
    assert_ne!(ops.a.as_slice(), ops.b.as_slice());
}

// ============================================================
// Error paths
// ============================================================

#[test]
fn test_dimension_mismatch_is_rejected() {
    let a = Matrix::zeros(2, 3).unwrap();
    let b = Matrix::zeros(2, 2).unwrap();

    match multiply(&a, &b) {
        Err(Error::DimensionMismatch {
            lhs_rows,
            lhs_cols,
            rhs_rows,
            rhs_cols,
        }) => {
            assert_eq!((lhs_rows, lhs_cols), (2, 3));
            assert_eq!((rhs_rows, rhs_cols), (2, 2));
        }
        other => panic!("expected DimensionMismatch, got {:?}", other),
    }
}

#[test]
fn test_empty_matrix_is_degenerate_not_an_error() {
    let a = Matrix::zeros(0, 0).unwrap();
    let b = Matrix::zeros(0, 0).unwrap();

    let c = multiply(&a, &b).unwrap();
    assert_eq!(c.rows(), 0);
    assert_eq!(c.cols(), 0);
}
