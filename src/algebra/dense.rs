//! Helpers over `nalgebra` dense matrices.
//!
//! Square blocks of the semidefinite cone are stored as flattened,
//! row-major vectors.  The reshaping functions here are the only place
//! where that layout is encoded.

use super::{MatrixShape, VectorMath};
use nalgebra::{DMatrix, DVector};

/// BLAS-like general matrix-vector multiply.  Produces `y = a*op(M)*x + b*y`
pub fn gemv(M: &DMatrix<f64>, shape: MatrixShape, y: &mut [f64], x: &[f64], a: f64, b: f64) {
    let xv = DVector::from_column_slice(x);
    let Mx = match shape {
        MatrixShape::N => {
            assert_eq!(M.ncols(), x.len());
            M * &xv
        }
        MatrixShape::T => {
            assert_eq!(M.nrows(), x.len());
            M.tr_mul(&xv)
        }
    };
    y.axpby(a, Mx.as_slice(), b);
}

/// Quadratic form `x'Mx`
pub fn quad_form(M: &DMatrix<f64>, x: &[f64]) -> f64 {
    let mut Mx = vec![0.0; x.len()];
    gemv(M, MatrixShape::N, &mut Mx, x, 1.0, 0.0);
    x.dot(&Mx)
}

/// Builds an `n×n` matrix from a flattened row-major vector.
pub fn mat_from_rowmajor(n: usize, v: &[f64]) -> DMatrix<f64> {
    assert_eq!(v.len(), n * n);
    DMatrix::from_row_slice(n, n, v)
}

/// Writes a square matrix into a flattened row-major vector.
pub fn rowmajor_from_mat(M: &DMatrix<f64>, v: &mut [f64]) {
    let n = M.ncols();
    assert_eq!(v.len(), M.nrows() * n);
    for (k, vk) in v.iter_mut().enumerate() {
        *vk = M[(k / n, k % n)];
    }
}

/// Returns `(M + M')/2`
pub fn symmetric_part(M: &DMatrix<f64>) -> DMatrix<f64> {
    (M + M.transpose()) * 0.5
}

/// Symmetry test with a tolerance relative to the largest entry.
pub fn is_symmetric(M: &DMatrix<f64>, rtol: f64) -> bool {
    if !M.is_square() {
        return false;
    }
    let scale = M.amax().max(1.0);
    (M - M.transpose()).amax() <= rtol * scale
}

/// Numerical rank test based on the singular values, with the
/// usual `max(m,n)⋅ε⋅σmax` threshold.
pub fn is_full_rank(M: &DMatrix<f64>) -> bool {
    if M.is_empty() {
        return true;
    }
    let σ = M.singular_values();
    let σmax = σ.max();
    let σmin = σ.min();
    let tol = (M.nrows().max(M.ncols()) as f64) * f64::EPSILON * σmax;
    σmin.is_finite() && σmin > tol
}

/// Inverse of a square matrix, or `None` if it is numerically singular.
pub fn inverse_checked(M: &DMatrix<f64>) -> Option<DMatrix<f64>> {
    if !M.is_square() || !is_full_rank(M) {
        return None;
    }
    M.clone().try_inverse()
}

/// Solves `Mx = b` by LU, or returns `None` if `M` is numerically singular.
pub fn solve_checked(M: &DMatrix<f64>, b: &[f64]) -> Option<Vec<f64>> {
    if !M.is_square() || !is_full_rank(M) {
        return None;
    }
    let x = M.clone().lu().solve(&DVector::from_column_slice(b))?;
    Some(x.as_slice().to_vec())
}
