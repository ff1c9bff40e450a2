use super::*;
use nalgebra::{DVector, Dyn, LU};

// ---------------
// Reduced KKT system, factored with a dense LU
//
//   [ H + Gs'Gs   A' ] [Δx]   [bx + Gs'r]
//   [ A           0  ] [Δy] = [by       ]
//
// with Gs = W⁻ᵀG and r = W⁻ᵀbz + λ \ d
// ---------------

pub(crate) struct DenseKKTSolver {
    n: usize,
    p: usize,

    // W⁻ᵀG, refreshed on every update
    Gs: DMatrix<f64>,

    // factors of the reduced matrix
    lu: Option<LU<f64, Dyn, Dyn>>,

    // work vectors of length m
    r: Vec<f64>,
    u: Vec<f64>,
    work: Vec<f64>,
    // columns of G, before and after scaling
    gcol: Vec<f64>,
    gscol: Vec<f64>,
    // stacked right hand side of the reduced system
    rhs: Vec<f64>,
}

impl DenseKKTSolver {
    pub fn new(n: usize, p: usize, m: usize) -> Self {
        Self {
            n,
            p,
            Gs: DMatrix::zeros(m, n),
            lu: None,
            r: vec![0.0; m],
            u: vec![0.0; m],
            work: vec![0.0; m],
            gcol: vec![0.0; m],
            gscol: vec![0.0; m],
            rhs: vec![0.0; n + p],
        }
    }
}

impl KKTSolver for DenseKKTSolver {
    fn update(
        &mut self,
        H: &DMatrix<f64>,
        A: &DMatrix<f64>,
        G: &DMatrix<f64>,
        cones: &CompositeCone,
    ) -> bool {
        let (n, p) = (self.n, self.p);

        for j in 0..n {
            self.gcol.iter_mut().zip(G.column(j).iter()).for_each(|(g, v)| *g = *v);
            cones.mul_Winv(MatrixShape::T, &mut self.gscol, &self.gcol, 1.0, 0.0);
            self.Gs.column_mut(j).copy_from_slice(&self.gscol);
        }

        let mut K = DMatrix::<f64>::zeros(n + p, n + p);
        K.view_mut((0, 0), (n, n)).copy_from(&(H + self.Gs.tr_mul(&self.Gs)));
        if p > 0 {
            K.view_mut((n, 0), (p, n)).copy_from(A);
            K.view_mut((0, n), (n, p)).copy_from(&A.transpose());
        }

        if !K.iter().all(|v| v.is_finite()) {
            self.lu = None;
            return false;
        }

        let lu = K.lu();
        let ok = lu.is_invertible();
        self.lu = ok.then_some(lu);
        ok
    }

    fn solve(
        &mut self,
        residuals: &Residuals,
        c: f64,
        d: &[f64],
        cones: &CompositeCone,
        step: &mut PrimalDualVariables,
    ) -> bool {
        let Some(lu) = &self.lu else {
            return false;
        };
        let n = self.n;

        // work = λ \ d
        // r = W⁻ᵀbz + λ \ d, with bz = -c⋅rz
        cones.λ_inv_circ_op(&mut self.work, d);
        cones.mul_Winv(MatrixShape::T, &mut self.r, &residuals.rz, -c, 0.0);
        self.r.axpby(1.0, &self.work, 1.0);

        // rhs = [bx + Gs'r; by]
        let (rhsx, rhsy) = self.rhs.split_at_mut(n);
        rhsx.scalarop_from(|v| -c * v, &residuals.rx);
        gemv(&self.Gs, MatrixShape::T, rhsx, &self.r, 1.0, 1.0);
        rhsy.scalarop_from(|v| c * v, &residuals.ry);

        let Some(sol) = lu.solve(&DVector::from_column_slice(&self.rhs)) else {
            return false;
        };
        if !sol.iter().all(|v| v.is_finite()) {
            return false;
        }
        step.x.copy_from(&sol.as_slice()[..n]);
        step.y.copy_from(&sol.as_slice()[n..]);

        // u = Gs Δx - r = WΔz
        self.u.copy_from(&self.r);
        gemv(&self.Gs, MatrixShape::N, &mut self.u, &step.x, 1.0, -1.0);
        cones.mul_Winv(MatrixShape::N, &mut step.z, &self.u, 1.0, 0.0);

        // Δs = -W'(λ \ d + u)
        self.work.axpby(1.0, &self.u, 1.0);
        cones.mul_W(MatrixShape::T, &mut step.s, &self.work, -1.0, 0.0);

        step.z.is_finite() && step.s.is_finite()
    }
}
