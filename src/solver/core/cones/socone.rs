use super::*;
use crate::algebra::*;

// -------------------------------------
// Second order Cone
// -------------------------------------

pub struct SecondOrderCone {
    dim: usize,
    //scaling point (normalized) and its leading scalar
    w: Vec<f64>,
    η: f64,
    //scaled version of (s,z)
    λ: Vec<f64>,
}

impl SecondOrderCone {
    pub fn new(dim: usize) -> Self {
        assert!(dim >= 2);
        let mut w = vec![0.0; dim];
        w[0] = 1.0;
        Self {
            dim,
            w: w.clone(),
            η: 1.0,
            λ: w,
        }
    }
}

impl Cone for SecondOrderCone {
    fn dim(&self) -> usize {
        self.dim
    }

    fn degree(&self) -> usize {
        // degree = 1 for SOC, since e'*e = 1
        1
    }

    fn numel(&self) -> usize {
        self.dim
    }

    fn unit_initialization(&self, z: &mut [f64], s: &mut [f64]) {
        z.fill(0.0);
        s.fill(0.0);
        self.add_scaled_e(z, 1.0);
        self.add_scaled_e(s, 1.0);
    }

    fn add_scaled_e(&self, x: &mut [f64], α: f64) {
        //e is (1,0.0..0)
        x[0] += α;
    }

    fn inner_product(&self, x: &[f64], y: &[f64]) -> f64 {
        x.dot(y)
    }

    fn margin(&self, x: &[f64]) -> f64 {
        x[0] - x[1..].norm()
    }

    fn update_scaling(&mut self, s: &[f64], z: &[f64]) -> bool {
        let (res_s, res_z) = (_soc_residual(s), _soc_residual(z));
        if s[0] <= 0.0 || z[0] <= 0.0 || res_s <= 0.0 || res_z <= 0.0 {
            return false;
        }

        let zscale = f64::sqrt(res_z);
        let sscale = f64::sqrt(res_s);

        let gamma = f64::sqrt((1.0 + s.dot(z) / (zscale * sscale)) * 0.5);

        let w = &mut self.w;
        w.copy_from(s);
        w.scale(1.0 / (2.0 * sscale * gamma));
        w[0] += z[0] / (2.0 * zscale * gamma);
        w[1..].axpby(-1.0 / (2.0 * zscale * gamma), &z[1..], 1.0);

        self.η = f64::sqrt(sscale / zscale);

        //λ = Wz.  Use inner function here because can't
        //borrow self and self.λ at the same time
        _soc_mul_W_inner(&mut self.λ, z, 1.0, 0.0, &self.w, self.η);
        true
    }

    fn get_λ(&self, λ: &mut [f64]) {
        λ.copy_from(&self.λ);
    }

    fn affine_ds(&self, ds: &mut [f64]) {
        self.circ_op(ds, &self.λ, &self.λ);
    }

    fn combined_ds_shift(&self, shift: &mut [f64], step_z: &mut [f64], step_s: &mut [f64], σμ: f64) {
        self._combined_ds_shift_symmetric(shift, step_z, step_s, σμ);
    }

    fn step_length(&self, dz: &[f64], ds: &[f64], z: &[f64], s: &[f64], αmax: f64) -> (f64, f64) {
        let αz = _step_length_soc_component(z, dz, αmax);
        let αs = _step_length_soc_component(s, ds, αmax);
        (αz, αs)
    }
}

impl SymmetricCone for SecondOrderCone {
    fn mul_W(&self, _is_transpose: MatrixShape, y: &mut [f64], x: &[f64], α: f64, β: f64) {
        // symmetric, so ignore transpose
        _soc_mul_W_inner(y, x, α, β, &self.w, self.η);
    }

    fn mul_Winv(&self, _is_transpose: MatrixShape, y: &mut [f64], x: &[f64], α: f64, β: f64) {
        _soc_mul_Winv_inner(y, x, α, β, &self.w, self.η);
    }

    fn λ_inv_circ_op(&self, x: &mut [f64], z: &[f64]) {
        _soc_inv_circ_op(x, &self.λ, z);
    }
}

impl JordanAlgebra for SecondOrderCone {
    fn circ_op(&self, x: &mut [f64], y: &[f64], z: &[f64]) {
        x[0] = y.dot(z);
        let (y0, z0) = (y[0], z[0]);
        x[1..].waxpby(y0, &z[1..], z0, &y[1..]);
    }
}

// ---------------------------------------------
// internal operations for second order cones
// ---------------------------------------------

fn _soc_residual(z: &[f64]) -> f64 {
    let (z1, z2) = (z[0], &z[1..]);
    z1 * z1 - z2.sumsq()
}

// solves y ∘ x = z for x
fn _soc_inv_circ_op(x: &mut [f64], y: &[f64], z: &[f64]) {
    let pinv = 1.0 / _soc_residual(y);
    let v = y[1..].dot(&z[1..]);

    x[0] = (y[0] * z[0] - v) * pinv;

    let c1 = pinv * (v / y[0] - z[0]);
    let c2 = 1.0 / y[0];
    x[1..].waxpby(c1, &y[1..], c2, &z[1..]);
}

// find the maximum step length α≥0 so that
// x + αy stays in the SOC
fn _step_length_soc_component(x: &[f64], y: &[f64], αmax: f64) -> f64 {
    // assume that x is in the SOC, and find the minimum positive root
    // of the quadratic equation:  ||x₁+αy₁||^2 = (x₀ + αy₀)^2

    let a = _soc_residual(y);
    let b = 2.0 * (x[0] * y[0] - x[1..].dot(&y[1..]));
    let c = _soc_residual(x);
    let d = b * b - 4.0 * a * c;

    if c < 0.0 {
        // already outside
        return 0.0;
    }

    if (a > 0.0 && b > 0.0) || d < 0.0 {
        //all negative roots / complex root pair
        //-> infinite step length
        return αmax;
    } else if a == 0.0 {
        // direction exactly on the boundary, single root at -c/b
        return if b < 0.0 { f64::min(αmax, -c / b) } else { αmax };
    } else if c == 0.0 {
        // point exactly on the boundary
        return if a >= 0.0 { αmax } else { 0.0 };
    }

    // two real roots.  Avoid cancellation, see §1.4 of
    // Goldberg, ACM Computing Surveys, 1991
    let t = if b >= 0.0 {
        -b - f64::sqrt(d)
    } else {
        -b + f64::sqrt(d)
    };

    let r1 = (2.0 * c) / t;
    let r2 = t / (2.0 * a);

    // return the minimum positive root, up to αmax
    let r1 = if r1 < 0.0 { f64::INFINITY } else { r1 };
    let r2 = if r2 < 0.0 { f64::INFINITY } else { r2 };

    f64::min(αmax, f64::min(r1, r2))
}

// W and W⁻¹ products live outside the impl since λ = Wz
// would otherwise borrow self twice

fn _soc_mul_W_inner(y: &mut [f64], x: &[f64], α: f64, β: f64, w: &[f64], η: f64) {
    // fast product method from the ECOS ECC paper
    let ζ = w[1..].dot(&x[1..]);
    let c = x[0] + ζ / (1.0 + w[0]);

    y[0] = (α * η) * (w[0] * x[0] + ζ) + β * y[0];

    y[1..].axpby(α * η * c, &w[1..], β);
    y[1..].axpby(α * η, &x[1..], 1.0);
}

fn _soc_mul_Winv_inner(y: &mut [f64], x: &[f64], α: f64, β: f64, w: &[f64], η: f64) {
    let ζ = w[1..].dot(&x[1..]);
    let c = -x[0] + ζ / (1.0 + w[0]);

    y[0] = (α / η) * (w[0] * x[0] - ζ) + β * y[0];

    y[1..].axpby(α / η * c, &w[1..], β);
    y[1..].axpby(α / η, &x[1..], 1.0);
}
