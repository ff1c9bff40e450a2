#![allow(non_snake_case)]
use crate::algebra::*;

#[test]
fn test_gemv() {
    let M = DMatrix::from_row_slice(2, 3, &[1., 2., 3., 4., 5., 6.]);

    let mut y = vec![1., 1.];
    gemv(&M, MatrixShape::N, &mut y, &[1., 0., -1.], 2., 1.);
    assert_eq!(y, vec![-3., -3.]);

    let mut y = vec![0.; 3];
    gemv(&M, MatrixShape::T, &mut y, &[1., 1.], 1., 0.);
    assert_eq!(y, vec![5., 7., 9.]);
}

#[test]
fn test_rowmajor_layout() {
    let v = [1., 2., 3., 4.];
    let M = mat_from_rowmajor(2, &v);
    assert_eq!(M[(0, 1)], 2.);
    assert_eq!(M[(1, 0)], 3.);

    let mut w = [0.; 4];
    rowmajor_from_mat(&M, &mut w);
    assert_eq!(w, v);
}

#[test]
fn test_inverse_checked() {
    let M = DMatrix::from_row_slice(2, 2, &[4., 1., 1., 3.]);
    let Minv = inverse_checked(&M).unwrap();
    assert!((&M * &Minv - DMatrix::identity(2, 2)).amax() < 1e-12);

    // duplicated rows
    let S = DMatrix::from_row_slice(3, 3, &[1., 2., 3., 1., 2., 3., 0., 1., 1.]);
    assert!(inverse_checked(&S).is_none());
    assert!(solve_checked(&S, &[1., 1., 1.]).is_none());
    assert!(inverse_checked(&DMatrix::zeros(2, 2)).is_none());
}

#[test]
fn test_solve_checked() {
    let M = DMatrix::from_row_slice(2, 2, &[2., 0., 0., 4.]);
    let x = solve_checked(&M, &[2., 2.]).unwrap();
    assert!(x.dist(&[1., 0.5]) < 1e-14);
}

#[test]
fn test_symmetry() {
    let M = DMatrix::from_row_slice(2, 2, &[1., 2., 2.0 + 1e-14, 1.]);
    assert!(is_symmetric(&M, 1e-10));
    let N = DMatrix::from_row_slice(2, 2, &[1., 2., 0., 1.]);
    assert!(!is_symmetric(&N, 1e-10));
    let S = symmetric_part(&N);
    assert_eq!(S[(0, 1)], 1.);
    assert_eq!(S[(1, 0)], 1.);
}
