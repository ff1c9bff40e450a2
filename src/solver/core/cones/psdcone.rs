use super::*;
use crate::algebra::*;
use nalgebra::{DMatrix, DVector};
use std::iter::zip;

// ------------------------------------
// Positive Semidefinite Cone (full storage)
// ------------------------------------
//
// An order-n block occupies n² entries of the stacked vectors,
// holding the matrix in row-major order.  The scaling is
// W(X) = RᵀXR, with W(Z) = W⁻ᵀ(S) = Λ diagonal.

pub struct PSDCone {
    n: usize,
    λ: DVector<f64>,
    R: DMatrix<f64>,
    Rinv: DMatrix<f64>,
}

impl PSDCone {
    pub fn new(n: usize) -> Self {
        assert!(n >= 1);
        Self {
            n,
            λ: DVector::from_element(n, 1.0),
            R: DMatrix::identity(n, n),
            Rinv: DMatrix::identity(n, n),
        }
    }

    fn mat(&self, x: &[f64]) -> DMatrix<f64> {
        mat_from_rowmajor(self.n, x)
    }
}

impl Cone for PSDCone {
    fn dim(&self) -> usize {
        self.n
    }

    fn degree(&self) -> usize {
        self.n
    }

    fn numel(&self) -> usize {
        self.n * self.n
    }

    fn unit_initialization(&self, z: &mut [f64], s: &mut [f64]) {
        z.fill(0.0);
        s.fill(0.0);
        self.add_scaled_e(z, 1.0);
        self.add_scaled_e(s, 1.0);
    }

    fn add_scaled_e(&self, x: &mut [f64], α: f64) {
        for i in 0..self.n {
            x[i * self.n + i] += α;
        }
    }

    fn inner_product(&self, x: &[f64], y: &[f64]) -> f64 {
        // trace(XY) for symmetric X,Y
        x.dot(y)
    }

    fn margin(&self, x: &[f64]) -> f64 {
        symmetric_part(&self.mat(x)).symmetric_eigenvalues().min()
    }

    fn update_scaling(&mut self, s: &[f64], z: &[f64]) -> bool {
        let L1 = match symmetric_part(&self.mat(s)).cholesky() {
            Some(f) => f.l(),
            None => return false,
        };
        let L2 = match symmetric_part(&self.mat(z)).cholesky() {
            Some(f) => f.l(),
            None => return false,
        };

        // SVD of L2'L1 = UΣV'
        let svd = (L2.transpose() * &L1).svd(true, true);
        let (U, Vt) = match (svd.u, svd.v_t) {
            (Some(U), Some(Vt)) => (U, Vt),
            _ => return false,
        };
        let σ = svd.singular_values;
        if σ.min() <= 0.0 || σ.min().is_nan() {
            return false;
        }
        let σisqrt = DMatrix::from_diagonal(&σ.map(|x| 1.0 / x.sqrt()));

        // R = L1 V Σ^{-1/2}, R⁻¹ = Σ^{-1/2} U' L2'
        self.R = L1 * Vt.transpose() * &σisqrt;
        self.Rinv = σisqrt * U.transpose() * L2.transpose();
        self.λ = σ;
        true
    }

    fn get_λ(&self, λ: &mut [f64]) {
        λ.fill(0.0);
        self.add_diagonal(λ, |λi| λi);
    }

    fn affine_ds(&self, ds: &mut [f64]) {
        ds.fill(0.0);
        self.add_diagonal(ds, |λi| λi * λi);
    }

    fn combined_ds_shift(&self, shift: &mut [f64], step_z: &mut [f64], step_s: &mut [f64], σμ: f64) {
        self._combined_ds_shift_symmetric(shift, step_z, step_s, σμ);
    }

    fn step_length(&self, dz: &[f64], ds: &[f64], z: &[f64], s: &[f64], αmax: f64) -> (f64, f64) {
        let αz = self.step_length_component(z, dz, αmax);
        let αs = self.step_length_component(s, ds, αmax);
        (αz, αs)
    }
}

impl PSDCone {
    fn add_diagonal(&self, x: &mut [f64], f: impl Fn(f64) -> f64) {
        for (i, &λi) in self.λ.iter().enumerate() {
            x[i * self.n + i] += f(λi);
        }
    }

    // largest α ≤ αmax with X + αD ⪰ 0.  With X = LL', this is
    // governed by the smallest eigenvalue of L⁻¹DL⁻ᵀ
    fn step_length_component(&self, x: &[f64], dx: &[f64], αmax: f64) -> f64 {
        let L = match symmetric_part(&self.mat(x)).cholesky() {
            Some(f) => f.l(),
            None => return 0.0,
        };
        let D = symmetric_part(&self.mat(dx));

        let M = L
            .solve_lower_triangular(&D)
            .and_then(|LiD| L.solve_lower_triangular(&LiD.transpose()));
        let M = match M {
            Some(M) => M,
            None => return 0.0,
        };

        let γ = symmetric_part(&M).symmetric_eigenvalues().min();
        if γ < 0.0 {
            f64::min(αmax, -1.0 / γ)
        } else {
            αmax
        }
    }
}

impl SymmetricCone for PSDCone {
    fn mul_W(&self, is_transpose: MatrixShape, y: &mut [f64], x: &[f64], α: f64, β: f64) {
        let X = self.mat(x);
        let WX = match is_transpose {
            MatrixShape::N => self.R.transpose() * X * &self.R,
            MatrixShape::T => &self.R * X * self.R.transpose(),
        };
        _accumulate(y, &WX, α, β);
    }

    fn mul_Winv(&self, is_transpose: MatrixShape, y: &mut [f64], x: &[f64], α: f64, β: f64) {
        let X = self.mat(x);
        let WX = match is_transpose {
            MatrixShape::N => self.Rinv.transpose() * X * &self.Rinv,
            MatrixShape::T => &self.Rinv * X * self.Rinv.transpose(),
        };
        _accumulate(y, &WX, α, β);
    }

    fn λ_inv_circ_op(&self, x: &mut [f64], z: &[f64]) {
        let n = self.n;
        for (k, (x, &z)) in zip(x.iter_mut(), z).enumerate() {
            let (i, j) = (k / n, k % n);
            *x = 2.0 * z / (self.λ[i] + self.λ[j]);
        }
    }
}

impl JordanAlgebra for PSDCone {
    fn circ_op(&self, x: &mut [f64], y: &[f64], z: &[f64]) {
        let (Y, Z) = (self.mat(y), self.mat(z));
        let X = (&Y * &Z + &Z * &Y) * 0.5;
        rowmajor_from_mat(&X, x);
    }
}

// y = α vec(M) + βy
fn _accumulate(y: &mut [f64], M: &DMatrix<f64>, α: f64, β: f64) {
    let mut v = vec![0.0; y.len()];
    rowmajor_from_mat(M, &mut v);
    y.axpby(α, &v, β);
}
