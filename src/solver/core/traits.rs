//! Seams between the problem families and the interior point driver.
//!
//! The driver works on a local [`Linearization`] of the problem at the
//! current iterate, so that quadratic programs (fixed data) and geometric
//! programs (data rebuilt every iteration) share one predictor-corrector
//! loop.

use crate::algebra::*;
use crate::solver::core::cones::SupportedConeT;

/// Local model of the problem at the current iterate.
///
/// With `A` and `b` from the problem, the residuals are
/// `rx = grad + G'z + A'y`, `ry = b - Ax` and `rz = s + g`.
#[derive(Debug, Clone)]
pub struct Linearization {
    /// Hessian of the Lagrangian
    pub H: DMatrix<f64>,
    /// gradient of the objective
    pub grad: Vec<f64>,
    /// Jacobian of the inequality constraints
    pub G: DMatrix<f64>,
    /// values of the inequality constraints, with `g + s = 0` at a
    /// feasible point
    pub g: Vec<f64>,
}

impl Linearization {
    pub fn new(n: usize, m: usize) -> Self {
        Self {
            H: DMatrix::zeros(n, n),
            grad: vec![0.0; n],
            G: DMatrix::zeros(m, n),
            g: vec![0.0; m],
        }
    }
}

/// A problem the conic driver can iterate on.
pub(crate) trait ConicProblem {
    /// number of variables seen by the driver
    fn nvars(&self) -> usize;

    /// equality constraints `Ax = b`
    fn A(&self) -> &DMatrix<f64>;
    fn b(&self) -> &[f64];

    /// cone blocks, in stacking order
    fn cone_types(&self) -> &[SupportedConeT];

    /// linearization with all iteration-independent parts filled in
    fn init_linearization(&self) -> Linearization;

    /// refresh the iteration-dependent parts at `(x, z)`
    fn linearize(&self, x: &[f64], z: &[f64], lin: &mut Linearization);

    /// primal objective at `x`
    fn primal_cost(&self, x: &[f64]) -> f64;
}

/// A twice differentiable convex function `f : ℝⁿ → ℝ`.
pub trait ConvexFunction {
    /// dimension of the argument
    fn nvars(&self) -> usize;

    /// Returns `f(x)`, and writes `∇f(x)` into `grad` and `∇²f(x)`
    /// into `hess`.
    fn evaluate(&self, x: &[f64], grad: &mut [f64], hess: &mut DMatrix<f64>) -> f64;
}
