use crate::algebra::*;
use crate::solver::core::traits::ConvexFunction;
use crate::solver::core::{check_dim, ProblemDataError};
use nalgebra::DVector;

/// The log of a posynomial, `f(x) = log Σ_k exp(F_k x + g_k)`.
///
/// Row `k` of `F` holds the exponents of monomial `k`, and `g_k` is the
/// log of its coefficient.
#[derive(Debug, Clone, PartialEq)]
pub struct Posynomial {
    F: DMatrix<f64>,
    g: Vec<f64>,
}

impl Posynomial {
    pub fn new(F: DMatrix<f64>, g: Vec<f64>) -> Result<Self, ProblemDataError> {
        if F.nrows() == 0 {
            return Err(ProblemDataError::DimensionMismatch {
                field: "posynomial terms",
                expected: 1,
                found: 0,
            });
        }
        check_dim("g", F.nrows(), g.len())?;
        if !(F.iter().all(|v| v.is_finite()) && g.is_finite()) {
            return Err(ProblemDataError::NonFinite("F or g"));
        }
        Ok(Self { F, g })
    }

    /// number of monomials
    pub fn nterms(&self) -> usize {
        self.F.nrows()
    }
}

impl ConvexFunction for Posynomial {
    fn nvars(&self) -> usize {
        self.F.ncols()
    }

    fn evaluate(&self, x: &[f64], grad: &mut [f64], hess: &mut DMatrix<f64>) -> f64 {
        // y = Fx + g, shifted by its maximum before exponentiating
        let mut y = self.g.clone();
        gemv(&self.F, MatrixShape::N, &mut y, x, 1.0, 1.0);
        let ymax = y.maximum();

        let mut p = y;
        p.scalarop(|v| (v - ymax).exp());
        let total: f64 = p.iter().sum();
        p.scale(1.0 / total);

        // ∇f = F'p
        gemv(&self.F, MatrixShape::T, grad, &p, 1.0, 0.0);

        // ∇²f = F'(diag(p) - pp')F
        let pF = DMatrix::from_diagonal(&DVector::from_column_slice(&p)) * &self.F;
        let gv = DVector::from_column_slice(grad);
        hess.copy_from(&(self.F.tr_mul(&pF) - &gv * gv.transpose()));

        ymax + total.ln()
    }
}
