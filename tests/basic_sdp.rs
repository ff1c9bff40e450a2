#![allow(non_snake_case)]

use cccp::{algebra::*, solver::*};

// variables are the entries (00, 11, 22, 01, 02, 12) of a symmetric
// 3x3 matrix X.  Column k of G holds -B_k, where B_k is the basis
// matrix of variable k, so that h - Gx = X when h = 0
fn sdp_basis_G() -> DMatrix<f64> {
    let entries = [(0, 0), (1, 1), (2, 2), (0, 1), (0, 2), (1, 2)];
    let mut G = DMatrix::zeros(9, 6);
    for (k, (i, j)) in entries.iter().enumerate() {
        G[(3 * i + j, k)] = -1.;
        G[(3 * j + i, k)] = -1.;
    }
    G
}

// nearest PSD matrix to B = [1 2 0; 2 1 0; 0 0 -1] in Frobenius norm
fn basic_sdp_data() -> QuadraticProgram {
    let P = DMatrix::from_diagonal(&DVector::from_vec(vec![1., 1., 1., 2., 2., 2.]));
    let Bvec = [1., 1., -1., 2., 0., 0.];
    let q: Vec<f64> = Bvec
        .iter()
        .zip(P.diagonal().iter())
        .map(|(b, p)| -b * p)
        .collect();

    let constraints = vec![ConeConstraint::new(PSDConeT(3), sdp_basis_G(), vec![0.; 9])];

    QuadraticProgram::new(P, q, DMatrix::zeros(0, 6), vec![], constraints).unwrap()
}

#[test]
fn test_sdp_feasible() {
    let problem = basic_sdp_data();
    let settings = ControlBuilder::default().trace(false).build().unwrap();
    let solution = QPSolver::new(&problem, settings).solve().unwrap();

    assert_eq!(solution.status, SolverStatus::Optimal);

    // projection keeps the eigenvalue 3 with eigenvector (1,1,0)/√2
    let refsol = vec![1.5, 1.5, 0., 1.5, 0., 0.];
    assert!(solution.x().dist(&refsol) <= 1e-3);

    let refobj = -4.5;
    assert!(f64::abs(solution.state.get("pobj").unwrap() - refobj) <= 1e-4);

    // the slack is the solution matrix itself, stored row-major
    let S = mat_from_rowmajor(3, &solution.pdv.s);
    assert!(is_symmetric(&S, 1e-8));
    assert!(f64::abs(S[(0, 1)] - 1.5) <= 1e-3);
    assert_eq!(solution.cone_ranges, vec![0..9]);
}

#[test]
fn test_sdp_nonsymmetric_data() {
    let mut G = sdp_basis_G();
    G[(1, 3)] = 0.;
    let constraints = vec![ConeConstraint::new(PSDConeT(3), G, vec![0.; 9])];
    let result = QuadraticProgram::new(
        DMatrix::identity(6, 6),
        vec![0.; 6],
        DMatrix::zeros(0, 6),
        vec![],
        constraints,
    );
    assert_eq!(
        result.unwrap_err(),
        ProblemDataError::NonSymmetricPSDData { index: 0 }
    );
}

#[test]
fn test_sdp_with_orthant() {
    // adding X_00 <= 1 moves the solution off the projection
    let mut G = DMatrix::zeros(1, 6);
    G[(0, 0)] = 1.;
    let constraints = vec![
        ConeConstraint::new(PSDConeT(3), sdp_basis_G(), vec![0.; 9]),
        ConeConstraint::new(NonnegativeConeT(1), G, vec![1.]),
    ];

    let P = DMatrix::from_diagonal(&DVector::from_vec(vec![1., 1., 1., 2., 2., 2.]));
    let q = vec![-1., -1., 1., -4., 0., 0.];
    let problem = QuadraticProgram::new(P, q, DMatrix::zeros(0, 6), vec![], constraints).unwrap();

    let settings = ControlBuilder::default().trace(false).build().unwrap();
    let solution = QPSolver::new(&problem, settings).solve().unwrap();

    assert_eq!(solution.status, SolverStatus::Optimal);
    assert!(solution.x()[0] <= 1. + 1e-5);

    // the extra constraint can only increase the optimal value
    assert!(solution.state.get("pobj").unwrap() >= -4.5 - 1e-5);

    assert!(solution.state.get("pslack").unwrap() > 0.);
    assert_eq!(solution.cone_ranges, vec![0..9, 9..10]);
}
