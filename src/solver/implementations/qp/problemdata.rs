use crate::algebra::*;
use crate::solver::core::cones::{CompositeCone, SupportedConeT};
use crate::solver::core::traits::{ConicProblem, Linearization};
use crate::solver::core::{
    check_dim, stack_constraints, ConeConstraint, PrimalDualVariables, ProblemDataError,
};
use std::ops::Range;

// ---------------
// Data type for quadratic programs
// ---------------

/// A validated quadratic program.
///
/// The data is immutable once constructed.  Solvers borrow it.
#[derive(Debug, Clone)]
pub struct QuadraticProgram {
    P: DMatrix<f64>,
    q: Vec<f64>,
    A: DMatrix<f64>,
    b: Vec<f64>,

    // stacked cone constraints
    cones: Vec<SupportedConeT>,
    G: DMatrix<f64>,
    h: Vec<f64>,
    rng_cones: Vec<Range<usize>>,
}

impl QuadraticProgram {
    /// Validates and stores the problem data.  An `A` without rows may
    /// have any number of columns.
    pub fn new(
        P: DMatrix<f64>,
        q: Vec<f64>,
        A: DMatrix<f64>,
        b: Vec<f64>,
        constraints: Vec<ConeConstraint>,
    ) -> Result<Self, ProblemDataError> {
        if !P.is_square() {
            return Err(ProblemDataError::NonSquareP {
                rows: P.nrows(),
                cols: P.ncols(),
            });
        }
        let n = P.nrows();

        check_dim("q", n, q.len())?;
        let A = if A.nrows() == 0 {
            DMatrix::zeros(0, n)
        } else {
            A
        };
        check_dim("A columns", n, A.ncols())?;
        check_dim("b", A.nrows(), b.len())?;

        if !P.iter().all(|v| v.is_finite()) {
            return Err(ProblemDataError::NonFinite("P"));
        }
        if !(q.is_finite() && b.is_finite() && A.iter().all(|v| v.is_finite())) {
            return Err(ProblemDataError::NonFinite("q, A or b"));
        }
        if !is_symmetric(&P, 1e-10) {
            return Err(ProblemDataError::NonSymmetricP);
        }

        for (i, c) in constraints.iter().enumerate() {
            c.check(i, n)?;
        }
        let (cones, G, h) = stack_constraints(&constraints, n);
        let rng_cones = CompositeCone::new(&cones).ranges().to_vec();

        Ok(Self {
            P,
            q,
            A,
            b,
            cones,
            G,
            h,
            rng_cones,
        })
    }

    /// number of variables
    pub fn n(&self) -> usize {
        self.P.nrows()
    }

    /// number of equality constraints
    pub fn p(&self) -> usize {
        self.A.nrows()
    }

    /// number of stacked cone rows
    pub fn m(&self) -> usize {
        self.h.len()
    }

    pub fn cones(&self) -> &[SupportedConeT] {
        &self.cones
    }

    // ---------------------------------------------
    // objective and residuals at an iterate
    // ---------------------------------------------

    /// Primal objective `½x'Px + q'x`
    pub fn pobj(&self, pdv: &PrimalDualVariables) -> f64 {
        self.primal_cost(&pdv.x)
    }

    /// Dual objective `pobj + y'(Ax - b) + z'(Gx - h)`
    pub fn dobj(&self, pdv: &PrimalDualVariables) -> f64 {
        let yterm = -pdv.y.dot(&self.rprim(pdv));

        let mut Gxh = self.h.clone();
        gemv(&self.G, MatrixShape::N, &mut Gxh, &pdv.x, 1.0, -1.0);
        let zterm = pdv.z.dot(&Gxh);

        self.pobj(pdv) + yterm + zterm
    }

    /// Primal residual `b - Ax`
    pub fn rprim(&self, pdv: &PrimalDualVariables) -> Vec<f64> {
        let mut r = self.b.clone();
        gemv(&self.A, MatrixShape::N, &mut r, &pdv.x, -1.0, 1.0);
        r
    }

    /// Centrality residuals `s_i + G_i x - h_i`, one per cone block
    pub fn rcent(&self, pdv: &PrimalDualVariables) -> Vec<Vec<f64>> {
        let mut r = pdv.s.clone();
        gemv(&self.G, MatrixShape::N, &mut r, &pdv.x, 1.0, 1.0);
        r.axpby(-1.0, &self.h, 1.0);

        self.rng_cones.iter().map(|rng| r[rng.clone()].to_vec()).collect()
    }

    /// Dual residual `Px + q + G'z + A'y`
    pub fn rdual(&self, pdv: &PrimalDualVariables) -> Vec<f64> {
        let mut r = self.q.clone();
        gemv(&self.P, MatrixShape::N, &mut r, &pdv.x, 1.0, 1.0);
        gemv(&self.G, MatrixShape::T, &mut r, &pdv.z, 1.0, 1.0);
        gemv(&self.A, MatrixShape::T, &mut r, &pdv.y, 1.0, 1.0);
        r
    }

    /// Primal certificate
    /// `max(‖rprim‖ / max(1,‖b‖), Σ‖rcent_i‖ / max(1,‖q‖))`
    pub fn certp(&self, pdv: &PrimalDualVariables) -> f64 {
        let eq = self.rprim(pdv).norm() / f64::max(1.0, self.b.norm());
        let cent: f64 = self.rcent(pdv).iter().map(|r| r.norm()).sum();
        let cent = cent / f64::max(1.0, self.q.norm());
        f64::max(eq, cent)
    }

    /// Dual certificate `‖rdual‖ / max(1,‖q‖)`
    pub fn certd(&self, pdv: &PrimalDualVariables) -> f64 {
        self.rdual(pdv).norm() / f64::max(1.0, self.q.norm())
    }

    /// Starting point with `s = z = e`
    pub fn initpdv(&self) -> PrimalDualVariables {
        PrimalDualVariables::initialize(self.n(), self.p(), &CompositeCone::new(&self.cones))
    }

    // data accessors for the closed form solutions
    pub(crate) fn P(&self) -> &DMatrix<f64> {
        &self.P
    }

    pub(crate) fn q(&self) -> &[f64] {
        &self.q
    }
}

impl ConicProblem for QuadraticProgram {
    fn nvars(&self) -> usize {
        self.n()
    }

    fn A(&self) -> &DMatrix<f64> {
        &self.A
    }

    fn b(&self) -> &[f64] {
        &self.b
    }

    fn cone_types(&self) -> &[SupportedConeT] {
        &self.cones
    }

    fn init_linearization(&self) -> Linearization {
        let mut lin = Linearization::new(self.n(), self.m());
        lin.H.copy_from(&self.P);
        lin.G.copy_from(&self.G);
        lin
    }

    fn linearize(&self, x: &[f64], _z: &[f64], lin: &mut Linearization) {
        // grad = Px + q
        lin.grad.copy_from(&self.q);
        gemv(&self.P, MatrixShape::N, &mut lin.grad, x, 1.0, 1.0);

        // g = Gx - h
        lin.g.copy_from(&self.h);
        gemv(&self.G, MatrixShape::N, &mut lin.g, x, 1.0, -1.0);
    }

    fn primal_cost(&self, x: &[f64]) -> f64 {
        0.5 * quad_form(&self.P, x) + self.q.dot(x)
    }
}
