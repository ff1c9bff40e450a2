#![allow(non_snake_case)]

use cccp::{algebra::*, solver::*};

fn quiet() -> Control {
    ControlBuilder::default().trace(false).build().unwrap()
}

#[test]
fn test_unconstrained_feasible() {
    let P = DMatrix::identity(3, 3);
    let mut q = [1., 2., -3.];
    let A = DMatrix::zeros(0, 3); // <- no constraints
    let b = vec![];

    let problem = QuadraticProgram::new(P, q.to_vec(), A, b, vec![]).unwrap();
    let mut solver = QPSolver::new(&problem, quiet());
    let solution = solver.solve().unwrap();

    let refsol = q.negate();
    assert!(solution.x().dist(refsol) <= 1e-12);
    assert_eq!(solution.status, SolverStatus::Optimal);
    assert_eq!(solution.iterations, 0);

    // pobj = -q'q/2
    let pobj = solution.state.get("pobj").unwrap();
    assert!(f64::abs(pobj + 7.) <= 1e-12);
    assert_eq!(solution.state.len(), 1);
    assert!(!solution.state.contains_key("dobj"));
}

#[test]
fn test_unconstrained_nondiagonal() {
    // P = [4 1;1 2], x = -P⁻¹q
    let P = DMatrix::from_row_slice(2, 2, &[4., 1., 1., 2.]);
    let q = vec![1., 1.];

    let problem = QuadraticProgram::new(P, q, DMatrix::zeros(0, 0), vec![], vec![]).unwrap();
    let solution = QPSolver::new(&problem, quiet()).solve().unwrap();

    let refsol = [-1. / 7., -3. / 7.];
    assert!(solution.x().dist(&refsol) <= 1e-12);
    assert_eq!(solution.status, SolverStatus::Optimal);
}

#[test]
fn test_unconstrained_singular_P() {
    let P = DMatrix::zeros(3, 3);
    let q = vec![1., 0., 0.];

    let problem = QuadraticProgram::new(P, q, DMatrix::zeros(0, 3), vec![], vec![]).unwrap();
    let result = QPSolver::new(&problem, quiet()).solve();

    assert_eq!(
        result,
        Err(SolverError::SingularSystem(SingularSystemError::CostMatrix))
    );
    assert_eq!(
        result.unwrap_err().to_string(),
        "Inversion of P failed."
    );
}
