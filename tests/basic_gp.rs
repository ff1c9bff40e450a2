#![allow(non_snake_case)]

use cccp::{algebra::*, solver::*};
use std::f64::consts::LN_2;

fn monomial(exponents: &[f64]) -> Posynomial {
    Posynomial::new(DMatrix::from_row_slice(1, exponents.len(), exponents), vec![0.]).unwrap()
}

fn quiet() -> Control {
    ControlBuilder::default().trace(false).build().unwrap()
}

#[test]
fn test_gp_univariate() {
    // minimize x  s.t.  1/x <= 1
    let functions = vec![monomial(&[1.]), monomial(&[-1.])];
    let problem = GeometricProgram::new(functions, DMatrix::zeros(0, 1), vec![], vec![]).unwrap();

    let solution = GPSolver::new(&problem, quiet()).solve().unwrap();

    assert_eq!(solution.status, SolverStatus::Optimal);
    assert!(f64::abs(solution.x()[0] - 1.) <= 1e-4);
    assert_eq!(solution.x().len(), 1);
    assert_eq!(solution.pdv.s.len(), 1);
    assert_eq!(solution.cone_ranges, vec![0..1]);
}

#[test]
fn test_gp_product_constraint() {
    // minimize x + y  s.t.  1/(xy) <= 1
    let objective = Posynomial::new(DMatrix::identity(2, 2), vec![0., 0.]).unwrap();
    let functions = vec![objective, monomial(&[-1., -1.])];
    let problem = GeometricProgram::new(functions, DMatrix::zeros(0, 2), vec![], vec![]).unwrap();
    assert_eq!(problem.ne(), 2);
    assert_eq!(problem.nfunctions(), 2);

    let solution = GPSolver::new(&problem, quiet()).solve().unwrap();

    assert_eq!(solution.status, SolverStatus::Optimal);
    assert!(solution.x().dist(&[1., 1.]) <= 1e-4);

    // objective values are reported in log space
    assert!(f64::abs(solution.state.get("pobj").unwrap() - LN_2) <= 1e-4);
    assert!(f64::abs(solution.state.get("dobj").unwrap() - LN_2) <= 1e-4);

    // exponentiated slacks and multipliers stay positive
    assert!(solution.pdv.s.iter().all(|&v| v > 0.));
    assert!(solution.pdv.z.iter().all(|&v| v > 0.));
}

#[test]
fn test_gp_with_linear_block() {
    // as above, with the extra bound log(x) >= log(2)
    let objective = Posynomial::new(DMatrix::identity(2, 2), vec![0., 0.]).unwrap();
    let functions = vec![objective, monomial(&[-1., -1.])];
    let constraints = vec![ConeConstraint::new(
        NonnegativeConeT(1),
        DMatrix::from_row_slice(1, 2, &[-1., 0.]),
        vec![-LN_2],
    )];
    let problem =
        GeometricProgram::new(functions, DMatrix::zeros(0, 2), vec![], constraints).unwrap();
    assert_eq!(
        problem.cones(),
        &[NonlinearConvexT(2), NonnegativeConeT(1)]
    );

    let solution = GPSolver::new(&problem, quiet()).solve().unwrap();

    assert_eq!(solution.status, SolverStatus::Optimal);
    assert!(solution.x().dist(&[2., 0.5]) <= 1e-4);
    assert!(f64::abs(solution.state.get("pobj").unwrap() - f64::ln(2.5)) <= 1e-4);

    // epigraph row removed from the reported blocks
    assert_eq!(solution.cone_ranges, vec![0..1, 1..2]);
    assert_eq!(solution.pdv.s.len(), 2);
    assert_eq!(solution.pdv.z.len(), 2);
}

#[test]
fn test_gp_equality_only() {
    // minimize x + y  s.t.  xy = 1
    let objective = Posynomial::new(DMatrix::identity(2, 2), vec![0., 0.]).unwrap();
    let A = DMatrix::from_row_slice(1, 2, &[1., 1.]);
    let problem = GeometricProgram::new(vec![objective], A, vec![0.], vec![]).unwrap();

    let solution = GPSolver::new(&problem, quiet()).solve().unwrap();

    assert_eq!(solution.status, SolverStatus::Optimal);
    assert!(solution.x().dist(&[1., 1.]) <= 1e-4);
    assert!(solution.cone_ranges.is_empty());
    assert!(solution.pdv.s.is_empty());
    assert_eq!(solution.pdv.y.len(), 1);
    assert!(solution.pdv.y[0] > 0.);
}

// f(x) = |x - c|², a convex function that is not a posynomial
struct ShiftedSquare {
    c: Vec<f64>,
}

impl ConvexFunction for ShiftedSquare {
    fn nvars(&self) -> usize {
        self.c.len()
    }

    fn evaluate(&self, x: &[f64], grad: &mut [f64], hess: &mut DMatrix<f64>) -> f64 {
        hess.fill_with_identity();
        hess.scale_mut(2.);
        let mut f = 0.;
        for i in 0..x.len() {
            grad[i] = 2. * (x[i] - self.c[i]);
            f += (x[i] - self.c[i]).powi(2);
        }
        f
    }
}

#[test]
fn test_gp_custom_function() {
    let functions = vec![ShiftedSquare { c: vec![0., 1.] }];
    let problem = GeometricProgram::new(functions, DMatrix::zeros(0, 2), vec![], vec![]).unwrap();

    let solution = GPSolver::new(&problem, quiet()).solve().unwrap();

    assert_eq!(solution.status, SolverStatus::Optimal);
    let refsol = [1., std::f64::consts::E];
    assert!(solution.x().dist(&refsol) <= 1e-3);
    assert!(f64::abs(solution.state.get("pobj").unwrap()) <= 1e-4);
}

#[test]
fn test_gp_bad_data() {
    let empty: Vec<Posynomial> = vec![];
    let result = GeometricProgram::new(empty, DMatrix::zeros(0, 1), vec![], vec![]);
    assert_eq!(result.unwrap_err(), ProblemDataError::MissingObjective);

    // functions of different arity
    let functions = vec![monomial(&[1.]), monomial(&[1., 1.])];
    let result = GeometricProgram::new(functions, DMatrix::zeros(0, 1), vec![], vec![]);
    assert!(matches!(
        result,
        Err(ProblemDataError::DimensionMismatch { .. })
    ));

    // linear data must not carry nonlinear blocks, and block 0 is the
    // epigraph block
    let constraints = vec![ConeConstraint::new(
        NonlinearConvexT(1),
        DMatrix::zeros(1, 1),
        vec![0.],
    )];
    let result =
        GeometricProgram::new(vec![monomial(&[1.])], DMatrix::zeros(0, 1), vec![], constraints);
    assert_eq!(
        result.unwrap_err(),
        ProblemDataError::UnexpectedNonlinearCone { index: 1 }
    );

    // b must match A
    let result = GeometricProgram::new(
        vec![monomial(&[1.])],
        DMatrix::from_row_slice(1, 1, &[1.]),
        vec![0., 1.],
        vec![],
    );
    assert_eq!(
        result.unwrap_err(),
        ProblemDataError::DimensionMismatch {
            field: "b",
            expected: 1,
            found: 2
        }
    );
}

#[test]
fn test_gp_max_iterations() {
    let objective = Posynomial::new(DMatrix::identity(2, 2), vec![0., 0.]).unwrap();
    let functions = vec![objective, monomial(&[-1., -1.])];
    let problem = GeometricProgram::new(functions, DMatrix::zeros(0, 2), vec![], vec![]).unwrap();

    let settings = ControlBuilder::default()
        .maxiters(2)
        .trace(false)
        .build()
        .unwrap();
    let solution = GPSolver::new(&problem, settings).solve().unwrap();

    assert_eq!(solution.status, SolverStatus::Unknown);
    assert_eq!(solution.iterations, 2);

    // the iterate is still reported in the original variables
    assert_eq!(solution.x().len(), problem.ne());
    assert_eq!(solution.pdv.s.len(), problem.nfunctions() - 1);
    assert_eq!(solution.pdv.z.len(), problem.nfunctions() - 1);
    assert_eq!(solution.cone_ranges, vec![0..1]);
    assert!(solution.x().iter().all(|&v| v > 0.));
    assert!(solution.pdv.s.iter().all(|&v| v > 0.));
    assert!(solution.pdv.z.iter().all(|&v| v > 0.));

    assert!(!solution.state.is_empty());
    assert!(solution.state.contains_key("pobj"));
    assert!(solution.state.contains_key("certp"));
}
