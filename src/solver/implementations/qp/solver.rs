use super::QuadraticProgram;
use crate::algebra::*;
use crate::io::{forward_print_target, PrintTarget};
use crate::solver::core::cones::CompositeCone;
use crate::solver::core::traits::ConicProblem;
use crate::solver::core::{
    Control, InteriorPoint, ProgressCallback, SingularSystemError,
    Solution, SolveInfo, SolverError, SolverStatus,
};
use std::time::Instant;

/// Solver for [`QuadraticProgram`]s.
///
/// The problem structure selects one of three methods:
/// * no equalities and no cones: `x = -P⁻¹q`,
/// * equalities only: elimination through the Schur complement
///   `-AP⁻¹A'`,
/// * at least one cone block: the predictor-corrector interior point
///   method.
pub struct QPSolver<'a> {
    problem: &'a QuadraticProgram,
    pub settings: Control,
    print_target: PrintTarget,
    callback: Option<ProgressCallback<'a>>,
}

forward_print_target!(QPSolver<'_>);

impl<'a> QPSolver<'a> {
    pub fn new(problem: &'a QuadraticProgram, settings: Control) -> Self {
        Self {
            problem,
            settings,
            print_target: PrintTarget::default(),
            callback: None,
        }
    }

    /// Installs an observer that is called once per interior point
    /// iteration.
    pub fn set_progress_callback(&mut self, callback: impl FnMut(&SolveInfo) + 'a) {
        self.callback = Some(Box::new(callback));
    }

    pub fn unset_progress_callback(&mut self) {
        self.callback = None;
    }

    pub fn solve(&mut self) -> Result<Solution, SolverError> {
        self.settings.validate()?;

        let problem = self.problem;
        let has_cones = !problem.cones().is_empty();
        let has_equalities = problem.p() > 0;

        match (has_cones, has_equalities) {
            (false, false) => self.solve_unconstrained(),
            (false, true) => self.solve_equality_constrained(),
            (true, _) => self.solve_conic(),
        }
    }

    fn solve_unconstrained(&mut self) -> Result<Solution, SolverError> {
        let timer = Instant::now();
        let problem = self.problem;
        self.print_banner("unconstrained QP");

        let mut pdv = problem.initpdv();
        let mut rhs = problem.q().to_vec();
        rhs.negate();
        pdv.x = solve_checked(problem.P(), &rhs).ok_or(SingularSystemError::CostMatrix)?;

        let mut solution = Solution::new(pdv, Vec::new());
        solution.state.insert("pobj", problem.pobj(&solution.pdv));
        solution.status = SolverStatus::Optimal;
        solution.solve_time = timer.elapsed().as_secs_f64();

        self.print_closed_form_footer(&solution);
        Ok(solution)
    }

    fn solve_equality_constrained(&mut self) -> Result<Solution, SolverError> {
        let timer = Instant::now();
        let problem = self.problem;
        self.print_banner("equality constrained QP");

        let (A, b) = (problem.A(), DVector::from_column_slice(problem.b()));
        let q = DVector::from_column_slice(problem.q());

        let Π = inverse_checked(problem.P()).ok_or(SingularSystemError::CostMatrix)?;
        let ΠAt = &Π * A.transpose();
        let S = -(A * &ΠAt);
        let Sinv = inverse_checked(&S).ok_or(SingularSystemError::SchurComplement)?;

        // y = S⁻¹(AΠq + b),  x = Π(-A'y - q)
        let y = &Sinv * (A * (&Π * &q) + b);
        let x = &Π * (-(A.tr_mul(&y)) - q);

        let mut pdv = problem.initpdv();
        pdv.x.copy_from(x.as_slice());
        pdv.y.copy_from(y.as_slice());

        let mut solution = Solution::new(pdv, Vec::new());
        let (certp, certd) = (problem.certp(&solution.pdv), problem.certd(&solution.pdv));
        solution.state.insert("pobj", problem.pobj(&solution.pdv));
        solution.state.insert("dobj", problem.dobj(&solution.pdv));
        solution.state.insert("certp", certp);
        solution.state.insert("certd", certd);

        let feastol = self.settings.feastol;
        solution.status = match certp <= feastol && certd <= feastol {
            true => SolverStatus::Optimal,
            false => SolverStatus::Unknown,
        };
        solution.solve_time = timer.elapsed().as_secs_f64();

        self.print_closed_form_footer(&solution);
        Ok(solution)
    }

    fn solve_conic(&mut self) -> Result<Solution, SolverError> {
        let problem = self.problem;

        let outcome = InteriorPoint::new(problem).solve(
            &self.settings,
            "conic QP",
            &mut self.print_target,
            &mut self.callback,
        )?;
        let info = outcome.info;

        let mut solution = Solution::new(outcome.variables, outcome.cone_ranges);
        let pdv = &solution.pdv;
        let state = &mut solution.state;
        state.insert("pobj", problem.pobj(pdv));
        state.insert("dobj", problem.dobj(pdv));
        state.insert("dgap", info.gap);
        state.insert("certp", problem.certp(pdv));
        state.insert("certd", problem.certd(pdv));
        state.insert("pslack", info.pslack);
        state.insert("dslack", info.dslack);
        if let Some(rgap) = info.rgap {
            state.insert("rgap", rgap);
        }

        solution.status = info.status;
        solution.iterations = info.iterations;
        solution.solve_time = info.solve_time;

        Ok(solution)
    }

    fn print_banner(&mut self, name: &str) {
        let problem = self.problem;
        let cones = CompositeCone::new(&[]);
        let _ = SolveInfo::new().print_configuration(
            &mut self.print_target,
            &self.settings,
            name,
            problem.n(),
            problem.p(),
            &cones,
        );
    }

    fn print_closed_form_footer(&mut self, solution: &Solution) {
        let mut info = SolveInfo::new();
        info.status = solution.status;
        info.solve_time = solution.solve_time;
        let _ = info.print_footer(&mut self.print_target, &self.settings);
    }
}
