use super::*;
use std::collections::BTreeMap;
use std::iter::zip;
use std::ops::Range;

// -------------------------------------
// composite cone type
// -------------------------------------

/// Product of cone blocks, with the index table mapping each block
/// to its rows of the stacked `s`, `z` and `h` vectors.
pub struct CompositeCone {
    cones: Vec<SupportedCone>,

    //Type count for each cone type
    pub(crate) type_counts: BTreeMap<SupportedConeTag, usize>,

    //overall size of the composite cone
    pub(crate) numel: usize,
    pub(crate) degree: usize,

    //ranges for the indices of the constituent cones
    pub(crate) rng_cones: Vec<Range<usize>>,
}

impl CompositeCone {
    pub fn new(types: &[SupportedConeT]) -> Self {
        let mut cones: Vec<SupportedCone> = Vec::with_capacity(types.len());
        let mut type_counts = BTreeMap::new();

        for t in types.iter() {
            let cone = make_cone(t);
            *type_counts.entry(cone.as_tag()).or_insert(0) += 1;
            cones.push(cone);
        }

        // count up elements and degree
        let numel = cones.iter().map(|c| c.numel()).sum();
        let degree = cones.iter().map(|c| c.degree()).sum();

        let rng_cones = _make_rng_cones(&cones);

        Self {
            cones,
            type_counts,
            numel,
            degree,
            rng_cones,
        }
    }

    pub fn len(&self) -> usize {
        self.cones.len()
    }
    pub fn is_empty(&self) -> bool {
        self.cones.is_empty()
    }
    pub fn iter(&self) -> std::slice::Iter<'_, SupportedCone> {
        self.cones.iter()
    }

    /// The block-index table
    pub fn ranges(&self) -> &[Range<usize>] {
        &self.rng_cones
    }

    fn blocks(&self) -> impl Iterator<Item = (&SupportedCone, Range<usize>)> {
        zip(&self.cones, self.rng_cones.iter().cloned())
    }

    // ---------------------------------------------
    // cone algebra over the stacked vectors
    // ---------------------------------------------

    /// Stacked identity element.
    pub fn sone(&self) -> Vec<f64> {
        let mut e = vec![0.0; self.numel];
        self.add_scaled_e(&mut e, 1.0);
        e
    }

    /// Blockwise inner products.
    pub fn sdot(&self, u: &[f64], v: &[f64]) -> Vec<f64> {
        self.blocks()
            .map(|(cone, rng)| cone.inner_product(&u[rng.clone()], &v[rng]))
            .collect()
    }

    /// Norm induced by [`sdot`](Self::sdot).
    pub fn snrm2(&self, v: &[f64]) -> f64 {
        self.inner_product(v, v).sqrt()
    }

    /// Blockwise Jordan product `out = u ∘ v`.
    pub fn sprd(&self, out: &mut [f64], u: &[f64], v: &[f64]) {
        self.circ_op(out, u, v)
    }

    /// Updates the Nesterov-Todd scaling of every block and writes the
    /// stacked scaled point `λ`.  Returns false if `s` or `z` is not
    /// strictly interior.
    pub fn ntsc(&mut self, s: &[f64], z: &[f64], λ: &mut [f64]) -> bool {
        if !self.update_scaling(s, z) {
            return false;
        }
        self.get_λ(λ);
        true
    }

    /// Per block, the largest `t` for which `v + t⋅e` lies on the cone
    /// boundary.  Negative exactly when the block of `v` is interior.
    pub fn smss(&self, v: &[f64]) -> Vec<f64> {
        self.blocks()
            .map(|(cone, rng)| -cone.margin(&v[rng]))
            .collect()
    }
}

fn _make_rng_cones(cones: &[SupportedCone]) -> Vec<Range<usize>> {
    let mut rngs = Vec::with_capacity(cones.len());
    let mut start = 0;
    for cone in cones {
        let stop = start + cone.numel();
        rngs.push(start..stop);
        start = stop;
    }
    rngs
}

impl Cone for CompositeCone {
    fn dim(&self) -> usize {
        self.numel
    }

    fn degree(&self) -> usize {
        self.degree
    }

    fn numel(&self) -> usize {
        self.numel
    }

    fn unit_initialization(&self, z: &mut [f64], s: &mut [f64]) {
        for (cone, rng) in self.blocks() {
            cone.unit_initialization(&mut z[rng.clone()], &mut s[rng]);
        }
    }

    fn add_scaled_e(&self, x: &mut [f64], α: f64) {
        for (cone, rng) in self.blocks() {
            cone.add_scaled_e(&mut x[rng], α);
        }
    }

    fn inner_product(&self, x: &[f64], y: &[f64]) -> f64 {
        self.sdot(x, y).iter().sum()
    }

    fn margin(&self, x: &[f64]) -> f64 {
        self.blocks()
            .map(|(cone, rng)| cone.margin(&x[rng]))
            .fold(f64::INFINITY, f64::min)
    }

    fn update_scaling(&mut self, s: &[f64], z: &[f64]) -> bool {
        zip(&mut self.cones, &self.rng_cones)
            .all(|(cone, rng)| cone.update_scaling(&s[rng.clone()], &z[rng.clone()]))
    }

    fn get_λ(&self, λ: &mut [f64]) {
        for (cone, rng) in self.blocks() {
            cone.get_λ(&mut λ[rng]);
        }
    }

    fn affine_ds(&self, ds: &mut [f64]) {
        for (cone, rng) in self.blocks() {
            cone.affine_ds(&mut ds[rng]);
        }
    }

    fn combined_ds_shift(&self, shift: &mut [f64], step_z: &mut [f64], step_s: &mut [f64], σμ: f64) {
        for (cone, rng) in self.blocks() {
            let shifti = &mut shift[rng.clone()];
            let step_zi = &mut step_z[rng.clone()];
            let step_si = &mut step_s[rng];
            cone.combined_ds_shift(shifti, step_zi, step_si, σμ);
        }
    }

    fn step_length(&self, dz: &[f64], ds: &[f64], z: &[f64], s: &[f64], αmax: f64) -> (f64, f64) {
        let mut α = (αmax, αmax);
        for (cone, rng) in self.blocks() {
            let (dzi, dsi) = (&dz[rng.clone()], &ds[rng.clone()]);
            let (zi, si) = (&z[rng.clone()], &s[rng]);
            let (nextαz, nextαs) = cone.step_length(dzi, dsi, zi, si, αmax);
            α = (f64::min(α.0, nextαz), f64::min(α.1, nextαs));
        }
        α
    }
}

impl SymmetricCone for CompositeCone {
    fn mul_W(&self, is_transpose: MatrixShape, y: &mut [f64], x: &[f64], α: f64, β: f64) {
        for (cone, rng) in self.blocks() {
            cone.mul_W(is_transpose, &mut y[rng.clone()], &x[rng], α, β);
        }
    }

    fn mul_Winv(&self, is_transpose: MatrixShape, y: &mut [f64], x: &[f64], α: f64, β: f64) {
        for (cone, rng) in self.blocks() {
            cone.mul_Winv(is_transpose, &mut y[rng.clone()], &x[rng], α, β);
        }
    }

    fn λ_inv_circ_op(&self, x: &mut [f64], z: &[f64]) {
        for (cone, rng) in self.blocks() {
            cone.λ_inv_circ_op(&mut x[rng.clone()], &z[rng]);
        }
    }
}

impl JordanAlgebra for CompositeCone {
    fn circ_op(&self, x: &mut [f64], y: &[f64], z: &[f64]) {
        for (cone, rng) in self.blocks() {
            cone.circ_op(&mut x[rng.clone()], &y[rng.clone()], &z[rng]);
        }
    }
}
