use super::cones::{CompositeCone, Cone};
use super::traits::{ConicProblem, Linearization};
use super::variables::PrimalDualVariables;
use crate::algebra::*;

// ---------------
// Residuals at the current iterate
// ---------------

pub(crate) struct Residuals {
    // dual residual grad + G'z + A'y
    pub rx: Vec<f64>,
    // primal equality residual b - Ax
    pub ry: Vec<f64>,
    // centrality residual s + g
    pub rz: Vec<f64>,
    // duality gap s'z
    pub gap: f64,
}

impl Residuals {
    pub fn new(n: usize, p: usize, m: usize) -> Self {
        Self {
            rx: vec![0.0; n],
            ry: vec![0.0; p],
            rz: vec![0.0; m],
            gap: 0.0,
        }
    }

    pub fn update<P: ConicProblem>(
        &mut self,
        problem: &P,
        variables: &PrimalDualVariables,
        lin: &Linearization,
        cones: &CompositeCone,
    ) {
        let (x, y, s, z) = (&variables.x, &variables.y, &variables.s, &variables.z);

        self.rx.copy_from(&lin.grad);
        gemv(&lin.G, MatrixShape::T, &mut self.rx, z, 1.0, 1.0);
        gemv(problem.A(), MatrixShape::T, &mut self.rx, y, 1.0, 1.0);

        self.ry.copy_from(problem.b());
        gemv(problem.A(), MatrixShape::N, &mut self.ry, x, -1.0, 1.0);

        self.rz.waxpby(1.0, s, 1.0, &lin.g);

        self.gap = cones.inner_product(s, z);
    }
}
