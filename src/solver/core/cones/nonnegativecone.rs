use super::*;
use crate::algebra::*;
use itertools::izip;
use std::iter::zip;

// -------------------------------------
// Nonnegative Cone
// -------------------------------------

pub struct NonnegativeCone {
    dim: usize,
    w: Vec<f64>,
    λ: Vec<f64>,
}

impl NonnegativeCone {
    pub fn new(dim: usize) -> Self {
        Self {
            dim,
            w: vec![1.0; dim],
            λ: vec![1.0; dim],
        }
    }
}

impl Cone for NonnegativeCone {
    fn dim(&self) -> usize {
        self.dim
    }

    fn degree(&self) -> usize {
        self.dim
    }

    fn numel(&self) -> usize {
        self.dim
    }

    fn unit_initialization(&self, z: &mut [f64], s: &mut [f64]) {
        z.fill(1.0);
        s.fill(1.0);
    }

    fn add_scaled_e(&self, x: &mut [f64], α: f64) {
        x.translate(α);
    }

    fn inner_product(&self, x: &[f64], y: &[f64]) -> f64 {
        x.dot(y)
    }

    fn margin(&self, x: &[f64]) -> f64 {
        x.minimum()
    }

    fn update_scaling(&mut self, s: &[f64], z: &[f64]) -> bool {
        if s.minimum() <= 0.0 || z.minimum() <= 0.0 {
            return false;
        }
        for (λ, w, s, z) in izip!(&mut self.λ, &mut self.w, s, z) {
            *λ = f64::sqrt((*s) * (*z));
            *w = f64::sqrt((*s) / (*z));
        }
        true
    }

    fn get_λ(&self, λ: &mut [f64]) {
        λ.copy_from(&self.λ);
    }

    fn affine_ds(&self, ds: &mut [f64]) {
        zip(ds, &self.λ).for_each(|(ds, λ)| *ds = λ * λ);
    }

    fn combined_ds_shift(&self, shift: &mut [f64], step_z: &mut [f64], step_s: &mut [f64], σμ: f64) {
        self._combined_ds_shift_symmetric(shift, step_z, step_s, σμ);
    }

    fn step_length(&self, dz: &[f64], ds: &[f64], z: &[f64], s: &[f64], αmax: f64) -> (f64, f64) {
        (
            _step_length_nn_component(z, dz, αmax),
            _step_length_nn_component(s, ds, αmax),
        )
    }
}

impl SymmetricCone for NonnegativeCone {
    fn mul_W(&self, _is_transpose: MatrixShape, y: &mut [f64], x: &[f64], α: f64, β: f64) {
        assert_eq!(y.len(), x.len());
        assert_eq!(y.len(), self.w.len());
        for (y, &x, &w) in izip!(y, x, &self.w) {
            *y = α * (x * w) + β * (*y);
        }
    }

    fn mul_Winv(&self, _is_transpose: MatrixShape, y: &mut [f64], x: &[f64], α: f64, β: f64) {
        assert_eq!(y.len(), x.len());
        assert_eq!(y.len(), self.w.len());
        for (y, &x, &w) in izip!(y, x, &self.w) {
            *y = α * (x / w) + β * (*y);
        }
    }

    fn λ_inv_circ_op(&self, x: &mut [f64], z: &[f64]) {
        for (x, &z, &λ) in izip!(x, z, &self.λ) {
            *x = z / λ;
        }
    }
}

impl JordanAlgebra for NonnegativeCone {
    fn circ_op(&self, x: &mut [f64], y: &[f64], z: &[f64]) {
        for (x, &y, &z) in izip!(x, y, z) {
            *x = y * z;
        }
    }
}

// largest α ≤ αmax with x + αdx ≥ 0
pub(super) fn _step_length_nn_component(x: &[f64], dx: &[f64], αmax: f64) -> f64 {
    assert_eq!(x.len(), dx.len());
    zip(x, dx).fold(αmax, |α, (&x, &dx)| {
        if dx < 0.0 {
            f64::min(α, -x / dx)
        } else {
            α
        }
    })
}
