use super::{GeometricProgram, Posynomial};
use crate::io::{forward_print_target, PrintTarget};
use crate::solver::core::traits::ConvexFunction;
use crate::solver::core::{
    ConicOutcome, Control, InteriorPoint, PrimalDualVariables, ProgressCallback, Solution,
    SolveInfo, SolverError,
};
use std::ops::Range;

/// Solver for [`GeometricProgram`]s.
pub struct GPSolver<'a, F: ConvexFunction = Posynomial> {
    problem: &'a GeometricProgram<F>,
    pub settings: Control,
    print_target: PrintTarget,
    callback: Option<ProgressCallback<'a>>,
}

forward_print_target!([F: ConvexFunction] GPSolver<'_, F>);

impl<'a, F: ConvexFunction> GPSolver<'a, F> {
    pub fn new(problem: &'a GeometricProgram<F>, settings: Control) -> Self {
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

    /// Solves the program.  On return `x`, `s`, `z` and `y` are in the
    /// original (exponentiated) variables, with the epigraph variable
    /// and its constraint row removed.
    pub fn solve(&mut self) -> Result<Solution, SolverError> {
        self.settings.validate()?;

        let outcome = InteriorPoint::new(self.problem).solve(
            &self.settings,
            "geometric program",
            &mut self.print_target,
            &mut self.callback,
        )?;

        Ok(finalize(outcome, self.problem.ne()))
    }
}

// Undo the epigraph form and return to the original variables
fn finalize(outcome: ConicOutcome, ne: usize) -> Solution {
    let ConicOutcome {
        variables,
        info,
        cone_ranges,
    } = outcome;

    let mut solution = Solution::new(strip_epigraph(&variables, ne), shift_ranges(&cone_ranges));

    let state = &mut solution.state;
    state.insert("pobj", info.pcost);
    state.insert("dobj", info.dcost);
    state.insert("dgap", info.gap);
    state.insert("certp", info.pres);
    state.insert("certd", info.dres);
    state.insert("pslack", info.pslack);
    state.insert("dslack", info.dslack);
    if let Some(rgap) = info.rgap {
        state.insert("rgap", rgap);
    }

    solution.status = info.status;
    solution.iterations = info.iterations;
    solution.solve_time = info.solve_time;
    solution
}

// drops t and the epigraph row 0 of s and z, then exponentiates
fn strip_epigraph(variables: &PrimalDualVariables, ne: usize) -> PrimalDualVariables {
    let exp = |v: &[f64]| -> Vec<f64> { v.iter().map(|v| v.exp()).collect() };

    let mut pdv = PrimalDualVariables::new(ne, variables.y.len(), variables.s.len() - 1);
    pdv.x = exp(&variables.x[..ne]);
    pdv.y = exp(&variables.y);
    pdv.s = exp(&variables.s[1..]);
    pdv.z = exp(&variables.z[1..]);
    pdv.τ = variables.τ;
    pdv.κ = variables.κ;
    pdv
}

// block 0 loses its first row, later blocks move down by one.  An
// objective-only block 0 disappears
fn shift_ranges(ranges: &[Range<usize>]) -> Vec<Range<usize>> {
    let mut out: Vec<Range<usize>> = Vec::with_capacity(ranges.len());
    for (i, rng) in ranges.iter().enumerate() {
        let start = if i == 0 { 0 } else { rng.start - 1 };
        let rng = start..(rng.end - 1);
        if !(i == 0 && rng.is_empty()) {
            out.push(rng);
        }
    }
    out
}
