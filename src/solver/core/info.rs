use super::cones::{CompositeCone, Cone};
use super::residuals::Residuals;
use super::settings::Control;
use super::solver::SolverStatus;
use super::variables::PrimalDualVariables;
use crate::algebra::*;

/// Per-iteration progress of an interior point solve.
///
/// A reference to this struct is passed to the progress callback
/// once per iteration, after the residuals and costs have been
/// computed and before the termination test.
#[derive(Default, Debug, Clone)]
pub struct SolveInfo {
    pub iterations: u32,
    pub pcost: f64,
    pub dcost: f64,
    /// duality gap `s'z`
    pub gap: f64,
    /// relative gap, when it is defined
    pub rgap: Option<f64>,
    /// primal residual, relative to its value at iteration 0
    pub pres: f64,
    /// dual residual, relative to its value at iteration 0
    pub dres: f64,
    pub pslack: f64,
    pub dslack: f64,
    pub μ: f64,
    pub σ: f64,
    pub step_length: f64,
    pub status: SolverStatus,
    pub solve_time: f64,

    // floor-one residual norms at iteration 0
    pres0: f64,
    dres0: f64,
}

impl SolveInfo {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn reset(&mut self) {
        *self = Self::default();
    }

    pub(crate) fn update(
        &mut self,
        iter: u32,
        pcost: f64,
        residuals: &Residuals,
        variables: &PrimalDualVariables,
        cones: &CompositeCone,
    ) {
        self.iterations = iter;
        let gap = residuals.gap;
        self.gap = gap;

        // dual objective of the local model, with ry = b - Ax
        self.pcost = pcost;
        self.dcost = pcost - residuals.ry.dot(&variables.y)
            + cones.inner_product(&residuals.rz, &variables.z)
            - gap;

        self.rgap = {
            if self.dcost > 0.0 {
                Some(gap / self.dcost)
            } else if pcost < 0.0 {
                Some(gap / -pcost)
            } else {
                None
            }
        };

        let resy = residuals.ry.norm();
        let resz = cones.snrm2(&residuals.rz);
        let pres = f64::sqrt(resy * resy + resz * resz);
        let dres = residuals.rx.norm();

        if iter == 0 {
            self.pres0 = f64::max(1.0, pres);
            self.dres0 = f64::max(1.0, dres);
        }
        self.pres = pres / self.pres0;
        self.dres = dres / self.dres0;

        self.pslack = -max_of(&cones.smss(&variables.s));
        self.dslack = -max_of(&cones.smss(&variables.z));

        self.μ = gap / f64::max(1.0, cones.degree() as f64);
    }

    /// Returns true if the convergence test passes.
    pub(crate) fn check_termination(&mut self, settings: &Control) -> bool {
        let gap_ok = self.gap <= settings.abstol
            || self.rgap.is_some_and(|rgap| rgap <= settings.reltol);

        if self.pres <= settings.feastol && self.dres <= settings.feastol && gap_ok {
            self.status = SolverStatus::Optimal;
            return true;
        }
        false
    }
}

// empty block lists give -∞, so the slacks read as +∞
fn max_of(v: &[f64]) -> f64 {
    v.iter().copied().fold(f64::NEG_INFINITY, f64::max)
}
