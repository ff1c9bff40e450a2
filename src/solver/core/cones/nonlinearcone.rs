use super::*;

// -------------------------------------
// Nonlinear convex (epigraph) cone
// -------------------------------------
//
// Each row holds the slack of one linearized convex inequality
// f(x) ≤ 0.  The cone is the nonnegative orthant; the distinct type
// marks the rows whose Jacobian and offset are rebuilt every iteration.

pub struct NonlinearConvexCone {
    orthant: NonnegativeCone,
}

impl NonlinearConvexCone {
    pub fn new(dim: usize) -> Self {
        Self {
            orthant: NonnegativeCone::new(dim),
        }
    }
}

impl Cone for NonlinearConvexCone {
    fn dim(&self) -> usize {
        self.orthant.dim()
    }

    fn degree(&self) -> usize {
        self.orthant.degree()
    }

    fn numel(&self) -> usize {
        self.orthant.numel()
    }

    fn unit_initialization(&self, z: &mut [f64], s: &mut [f64]) {
        self.orthant.unit_initialization(z, s)
    }

    fn add_scaled_e(&self, x: &mut [f64], α: f64) {
        self.orthant.add_scaled_e(x, α)
    }

    fn inner_product(&self, x: &[f64], y: &[f64]) -> f64 {
        self.orthant.inner_product(x, y)
    }

    fn margin(&self, x: &[f64]) -> f64 {
        self.orthant.margin(x)
    }

    fn update_scaling(&mut self, s: &[f64], z: &[f64]) -> bool {
        self.orthant.update_scaling(s, z)
    }

    fn get_λ(&self, λ: &mut [f64]) {
        self.orthant.get_λ(λ)
    }

    fn affine_ds(&self, ds: &mut [f64]) {
        self.orthant.affine_ds(ds)
    }

    fn combined_ds_shift(&self, shift: &mut [f64], step_z: &mut [f64], step_s: &mut [f64], σμ: f64) {
        self.orthant.combined_ds_shift(shift, step_z, step_s, σμ)
    }

    fn step_length(&self, dz: &[f64], ds: &[f64], z: &[f64], s: &[f64], αmax: f64) -> (f64, f64) {
        self.orthant.step_length(dz, ds, z, s, αmax)
    }
}

impl SymmetricCone for NonlinearConvexCone {
    fn mul_W(&self, is_transpose: MatrixShape, y: &mut [f64], x: &[f64], α: f64, β: f64) {
        self.orthant.mul_W(is_transpose, y, x, α, β)
    }

    fn mul_Winv(&self, is_transpose: MatrixShape, y: &mut [f64], x: &[f64], α: f64, β: f64) {
        self.orthant.mul_Winv(is_transpose, y, x, α, β)
    }

    fn λ_inv_circ_op(&self, x: &mut [f64], z: &[f64]) {
        self.orthant.λ_inv_circ_op(x, z)
    }
}

impl JordanAlgebra for NonlinearConvexCone {
    fn circ_op(&self, x: &mut [f64], y: &[f64], z: &[f64]) {
        self.orthant.circ_op(x, y, z)
    }
}
