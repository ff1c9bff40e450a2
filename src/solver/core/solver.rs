use super::cones::{CompositeCone, Cone};
use super::errors::SingularSystemError;
use super::info::SolveInfo;
use super::kktsolvers::{DenseKKTSolver, KKTSolver};
use super::residuals::Residuals;
use super::settings::Control;
use super::traits::{ConicProblem, Linearization};
use super::variables::PrimalDualVariables;
use crate::algebra::*;
use std::io::Write;
use std::ops::Range;
use std::time::Instant;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ---------------------------------
// Solver status type
// ---------------------------------

/// Status of solver at termination
#[derive(PartialEq, Eq, Clone, Debug, Copy, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SolverStatus {
    /// Problem is not solved (solver hasn't run).
    #[default]
    Unsolved,
    /// Convergence test passed.
    Optimal,
    /// Iteration limit reached, or the closed-form solution failed its
    /// feasibility check.
    Unknown,
}

impl std::fmt::Display for SolverStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            SolverStatus::Unsolved => "unsolved",
            SolverStatus::Optimal => "optimal",
            SolverStatus::Unknown => "unknown",
        };
        write!(f, "{s}")
    }
}

/// Observer called once per interior point iteration.
pub type ProgressCallback<'a> = Box<dyn FnMut(&SolveInfo) + 'a>;

// ---------------------------------
// predictor-corrector driver
// ---------------------------------

/// Final state of an interior point solve
pub(crate) struct ConicOutcome {
    pub variables: PrimalDualVariables,
    pub info: SolveInfo,
    pub cone_ranges: Vec<Range<usize>>,
}

pub(crate) struct InteriorPoint<'p, P: ConicProblem> {
    problem: &'p P,
    cones: CompositeCone,
    variables: PrimalDualVariables,
    step: PrimalDualVariables,
    residuals: Residuals,
    lin: Linearization,
    kktsolver: DenseKKTSolver,
    info: SolveInfo,

    // scaled point and centrality right hand side
    λ: Vec<f64>,
    ds: Vec<f64>,
    // affine directions, consumed by the corrector shift
    work_z: Vec<f64>,
    work_s: Vec<f64>,
    shift: Vec<f64>,
}

impl<'p, P: ConicProblem> InteriorPoint<'p, P> {
    pub fn new(problem: &'p P) -> Self {
        let cones = CompositeCone::new(problem.cone_types());
        let (n, p, m) = (problem.nvars(), problem.b().len(), cones.numel());

        let variables = PrimalDualVariables::initialize(n, p, &cones);

        Self {
            problem,
            variables,
            step: PrimalDualVariables::new(n, p, m),
            residuals: Residuals::new(n, p, m),
            lin: problem.init_linearization(),
            kktsolver: DenseKKTSolver::new(n, p, m),
            info: SolveInfo::new(),
            λ: vec![0.0; m],
            ds: vec![0.0; m],
            work_z: vec![0.0; m],
            work_s: vec![0.0; m],
            shift: vec![0.0; m],
            cones,
        }
    }

    pub fn solve(
        mut self,
        settings: &Control,
        name: &str,
        out: &mut dyn Write,
        callback: &mut Option<ProgressCallback<'_>>,
    ) -> Result<ConicOutcome, SingularSystemError> {
        let timer = Instant::now();
        let (n, p) = (self.problem.nvars(), self.problem.b().len());

        self.info.reset();

        // trace output never interrupts a solve
        let _ = self
            .info
            .print_configuration(out, settings, name, n, p, &self.cones);
        let _ = self.info.print_status_header(out, settings);

        let mut σ = 1.0;
        let mut α = 0.0;
        let mut converged = false;

        for iter in 0..settings.maxiters {
            // model and residuals at the current point
            self.problem
                .linearize(&self.variables.x, &self.variables.z, &mut self.lin);
            self.residuals
                .update(self.problem, &self.variables, &self.lin, &self.cones);
            let pcost = self.problem.primal_cost(&self.variables.x);
            self.info
                .update(iter, pcost, &self.residuals, &self.variables, &self.cones);
            self.info.σ = σ;
            self.info.step_length = α;

            if let Some(callback) = callback.as_mut() {
                callback(&self.info);
            }
            let _ = self.info.print_status(out, settings);

            if self.info.check_termination(settings) {
                converged = true;
                break;
            }

            // scale and factor once, then solve twice
            if !self.cones.ntsc(&self.variables.s, &self.variables.z, &mut self.λ) {
                return Err(SingularSystemError::Scaling { iteration: iter });
            }
            if !self
                .kktsolver
                .update(&self.lin.H, self.problem.A(), &self.lin.G, &self.cones)
            {
                return Err(SingularSystemError::Kkt { iteration: iter });
            }

            // affine direction
            self.cones.affine_ds(&mut self.ds);
            if !self.solve_step(1.0) {
                return Err(SingularSystemError::Kkt { iteration: iter });
            }
            σ = self.centering_parameter(settings.beta);

            // combined direction
            self.combined_ds(σ * self.info.μ);
            if !self.solve_step(1.0 - σ) {
                return Err(SingularSystemError::Kkt { iteration: iter });
            }

            let (αz, αs) = self.cones.step_length(
                &self.step.z,
                &self.step.s,
                &self.variables.z,
                &self.variables.s,
                1.0 / settings.stepadj,
            );
            α = f64::min(1.0, settings.stepadj * f64::min(αz, αs));

            self.variables.add_step(&self.step, α);
        }

        if !converged {
            self.info.status = SolverStatus::Unknown;
            self.info.iterations = settings.maxiters;
        }

        self.info.solve_time = timer.elapsed().as_secs_f64();
        let _ = self.info.print_footer(out, settings);

        Ok(ConicOutcome {
            variables: self.variables,
            info: self.info,
            cone_ranges: self.cones.ranges().to_vec(),
        })
    }

    fn solve_step(&mut self, c: f64) -> bool {
        self.kktsolver
            .solve(&self.residuals, c, &self.ds, &self.cones, &mut self.step)
    }

    // σ = (gap_aff / gap)^β, clipped to [0,1]
    fn centering_parameter(&self, β: f64) -> f64 {
        let (αz, αs) = self.cones.step_length(
            &self.step.z,
            &self.step.s,
            &self.variables.z,
            &self.variables.s,
            1.0,
        );
        let α = f64::min(αz, αs);

        let gap = self.info.gap;
        if gap <= 0.0 {
            return 0.0;
        }
        let gap_aff = <[f64]>::dot_shifted(
            &self.variables.z,
            &self.variables.s,
            &self.step.z,
            &self.step.s,
            α,
        );
        f64::powf(f64::max(0.0, gap_aff / gap), β).clamp(0.0, 1.0)
    }

    // ds = λ∘λ + (W⁻ᵀΔs_aff)∘(WΔz_aff) - σμe
    fn combined_ds(&mut self, σμ: f64) {
        self.cones.affine_ds(&mut self.ds);
        self.work_z.copy_from(&self.step.z);
        self.work_s.copy_from(&self.step.s);
        self.cones
            .combined_ds_shift(&mut self.shift, &mut self.work_z, &mut self.work_s, σμ);
        self.ds.axpby(1.0, &self.shift, 1.0);
    }
}
