use super::Posynomial;
use crate::algebra::*;
use crate::solver::core::cones::SupportedConeT;
use crate::solver::core::traits::{ConicProblem, ConvexFunction, Linearization};
use crate::solver::core::{check_dim, stack_constraints, ConeConstraint, ProblemDataError};

// ---------------
// Data type for geometric programs
// ---------------

/// A validated geometric program in convex form.
///
/// `functions[0]` is the objective and the remaining functions are the
/// inequality constraints `f_j(x) ≤ 0`.  `A` and the `G` matrices of the
/// linear cone constraints have one column per original variable.
///
/// Internally the variables are `(x, t)`.  The first cone block holds
/// one row per function, with row 0 being the epigraph constraint
/// `f_0(x) - t ≤ 0`, and the linear blocks follow.
#[derive(Debug, Clone)]
pub struct GeometricProgram<F: ConvexFunction = Posynomial> {
    functions: Vec<F>,

    // data padded with a zero column for t
    A: DMatrix<f64>,
    b: Vec<f64>,
    G: DMatrix<f64>,
    h: Vec<f64>,

    cones: Vec<SupportedConeT>,
}

impl<F: ConvexFunction> GeometricProgram<F> {
    pub fn new(
        functions: Vec<F>,
        A: DMatrix<f64>,
        b: Vec<f64>,
        constraints: Vec<ConeConstraint>,
    ) -> Result<Self, ProblemDataError> {
        let Some(objective) = functions.first() else {
            return Err(ProblemDataError::MissingObjective);
        };
        let ne = objective.nvars();
        for f in functions.iter() {
            check_dim("function arguments", ne, f.nvars())?;
        }

        let A = if A.nrows() == 0 {
            DMatrix::zeros(0, ne)
        } else {
            A
        };
        check_dim("A columns", ne, A.ncols())?;
        check_dim("b", A.nrows(), b.len())?;
        if !(b.is_finite() && A.iter().all(|v| v.is_finite())) {
            return Err(ProblemDataError::NonFinite("A or b"));
        }

        // block 0 is reserved for the nonlinear functions
        for (i, c) in constraints.iter().enumerate() {
            c.check(i + 1, ne)?;
        }
        let (linear_cones, G, h) = stack_constraints(&constraints, ne);

        let mut cones = vec![SupportedConeT::NonlinearConvexT(functions.len())];
        cones.extend(linear_cones);

        Ok(Self {
            A: pad_epigraph_column(&A),
            b,
            G: pad_epigraph_column(&G),
            h,
            functions,
            cones,
        })
    }

    /// number of original variables
    pub fn ne(&self) -> usize {
        self.A.ncols() - 1
    }

    /// number of functions, including the objective
    pub fn nfunctions(&self) -> usize {
        self.functions.len()
    }

    /// cone blocks of the epigraph form
    pub fn cones(&self) -> &[SupportedConeT] {
        &self.cones
    }
}

fn pad_epigraph_column(M: &DMatrix<f64>) -> DMatrix<f64> {
    M.clone().insert_column(M.ncols(), 0.0)
}

impl<F: ConvexFunction> ConicProblem for GeometricProgram<F> {
    fn nvars(&self) -> usize {
        self.ne() + 1
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
        let (ne, nnl) = (self.ne(), self.nfunctions());
        let mut lin = Linearization::new(ne + 1, nnl + self.h.len());

        // minimize t
        lin.grad[ne] = 1.0;
        // f_0(x) - t
        lin.G[(0, ne)] = -1.0;
        lin.G.view_mut((nnl, 0), self.G.shape()).copy_from(&self.G);
        lin
    }

    fn linearize(&self, x: &[f64], z: &[f64], lin: &mut Linearization) {
        let (ne, nnl) = (self.ne(), self.nfunctions());
        let xe = &x[..ne];

        let mut grad = vec![0.0; ne];
        let mut hess = DMatrix::zeros(ne, ne);
        lin.H.fill(0.0);

        for (j, f) in self.functions.iter().enumerate() {
            lin.g[j] = f.evaluate(xe, &mut grad, &mut hess);
            for (k, gk) in grad.iter().enumerate() {
                lin.G[(j, k)] = *gk;
            }
            let mut Hview = lin.H.view_mut((0, 0), (ne, ne));
            Hview += z[j] * &hess;
        }
        lin.g[0] -= x[ne];

        // linear blocks, g = Gx - h
        let glin = &mut lin.g[nnl..];
        glin.copy_from(&self.h);
        gemv(&self.G, MatrixShape::N, glin, x, 1.0, -1.0);
    }

    fn primal_cost(&self, x: &[f64]) -> f64 {
        x[self.ne()]
    }
}
