//! Dimension-tracked matrices: construction, addition, indexing.

use super::common::{assert_matrix_well_formed, assert_violation, left_matrix, right_matrix};
use vect::matrix::{add, at, zero};
use vect::{Axis, Dimension, Matrix, Violation, ViolationKind};

#[test]
fn worked_example_addition() {
    let sum = add(&left_matrix(), &right_matrix()).unwrap();
    let expected = Matrix::new(2, 3, vec![vec![8, 10, 12], vec![14, 16, 18]]).unwrap();
    assert_eq!(sum, expected);
    assert_matrix_well_formed(&sum);
}

#[test]
fn addition_leaves_operands_untouched() {
    let left = left_matrix();
    let right = right_matrix();
    let _ = add(&left, &right).unwrap();
    assert_eq!(left, left_matrix());
    assert_eq!(right, right_matrix());
}

#[test]
fn worked_example_indexing() {
    let m = left_matrix();
    assert_eq!(at(0, 1, &m), Ok(&2));
    assert_eq!(at(1, 2, &m), Ok(&6));
}

#[test]
fn row_failure_is_reported_before_column() {
    let m = left_matrix();
    assert_eq!(
        at(5, 9, &m),
        Err(Violation::Bounds {
            axis: Axis::Row,
            index: 5,
            len: 2
        })
    );
    assert_violation(at(0, 3, &m), ViolationKind::Bounds, "column index 3");
}

#[test]
fn construction_rejects_declared_shape_mismatch() {
    assert_violation(
        Matrix::new(2, 3, vec![vec![1, 2, 3]]),
        ViolationKind::Shape,
        "row mismatch: 2 != 1",
    );
    assert_eq!(
        Matrix::new(2, 2, vec![vec![1, 2], vec![3, 4, 5]]),
        Err(Violation::Shape {
            dimension: Dimension::RowWidth { row: 1 },
            expected: 2,
            actual: 3
        })
    );
}

#[test]
fn addition_names_the_mismatched_axis() {
    let m = left_matrix();
    assert_violation(add(&m, &zero(3, 3)), ViolationKind::Shape, "row mismatch");
    assert_violation(add(&m, &zero(2, 2)), ViolationKind::Shape, "column mismatch");
}

#[test]
fn zero_matrix_shape_and_contents() {
    let z: Matrix<i64> = zero(3, 2);
    assert_eq!(z.shape(), (3, 2));
    assert_matrix_well_formed(&z);
    assert!(z.iter_rows().all(|row| row == [0, 0]));

    let empty: Matrix<i64> = zero(0, 0);
    assert!(empty.data().is_empty());
}

#[test]
fn floats_add_elementwise() {
    let a = Matrix::from_array([[0.5, 1.5]]);
    let b = Matrix::from_array([[0.25, 0.25]]);
    assert_eq!(add(&a, &b).unwrap().into_data(), vec![vec![0.75, 1.75]]);
}
