#![allow(non_snake_case)]
#![allow(clippy::type_complexity)]
use cccp::{algebra::*, solver::*};

// a collection of tests to ensure that data of
// incompatible dimension won't be accepted

fn api_dim_check_data() -> (
    DMatrix<f64>,
    Vec<f64>,
    DMatrix<f64>,
    Vec<f64>,
    Vec<ConeConstraint>,
) {
    let P = DMatrix::identity(4, 4);
    let q = vec![0.; 4];
    let A = DMatrix::zeros(1, 4);
    let b = vec![0.; 1];
    let constraints = vec![
        ConeConstraint::new(NonnegativeConeT(2), DMatrix::zeros(2, 4), vec![0.; 2]),
        ConeConstraint::new(SecondOrderConeT(3), DMatrix::zeros(3, 4), vec![0.; 3]),
    ];
    (P, q, A, b, constraints)
}

#[test]
fn api_dim_check_working() {
    // This example should work because dimensions are
    // all compatible.  All following checks vary one
    // of these sizes to test dimension checks

    let (P, q, A, b, constraints) = api_dim_check_data();
    let problem = QuadraticProgram::new(P, q, A, b, constraints).unwrap();
    assert_eq!((problem.n(), problem.p(), problem.m()), (4, 1, 5));
}

#[test]
fn api_dim_check_bad_q() {
    let (P, _q, A, b, constraints) = api_dim_check_data();
    let q = vec![0.; 3];

    let result = QuadraticProgram::new(P, q, A, b, constraints);
    assert_eq!(
        result.unwrap_err(),
        ProblemDataError::DimensionMismatch {
            field: "q",
            expected: 4,
            found: 3
        }
    );
}

#[test]
fn api_dim_check_bad_A_cols() {
    let (P, q, _A, b, constraints) = api_dim_check_data();
    let A = DMatrix::zeros(1, 3);

    let result = QuadraticProgram::new(P, q, A, b, constraints);
    assert!(matches!(
        result,
        Err(ProblemDataError::DimensionMismatch {
            field: "A columns",
            ..
        })
    ));
}

#[test]
fn api_dim_check_bad_b() {
    let (P, q, A, _b, constraints) = api_dim_check_data();
    let b = vec![0.; 2];

    let result = QuadraticProgram::new(P, q, A, b, constraints);
    assert!(matches!(
        result,
        Err(ProblemDataError::DimensionMismatch { field: "b", .. })
    ));
}

#[test]
fn api_dim_check_empty_A_any_width() {
    // an A without rows is accepted whatever its width
    let (P, q, _A, _b, constraints) = api_dim_check_data();
    let problem = QuadraticProgram::new(P, q, DMatrix::zeros(0, 0), vec![], constraints).unwrap();
    assert_eq!(problem.p(), 0);
}

#[test]
fn api_dim_check_P_not_square() {
    let (_P, q, A, b, constraints) = api_dim_check_data();
    let P = DMatrix::zeros(4, 3);

    let result = QuadraticProgram::new(P, q, A, b, constraints);
    assert_eq!(
        result.unwrap_err(),
        ProblemDataError::NonSquareP { rows: 4, cols: 3 }
    );
}

#[test]
fn api_dim_check_P_not_symmetric() {
    let (mut P, q, A, b, constraints) = api_dim_check_data();
    P[(0, 1)] = 1.;

    let result = QuadraticProgram::new(P, q, A, b, constraints);
    assert_eq!(result.unwrap_err(), ProblemDataError::NonSymmetricP);
}

#[test]
fn api_dim_check_nonfinite() {
    let (P, mut q, A, b, constraints) = api_dim_check_data();
    q[2] = f64::NAN;

    let result = QuadraticProgram::new(P, q, A, b, constraints);
    assert!(matches!(result, Err(ProblemDataError::NonFinite(_))));
}

#[test]
fn api_dim_check_bad_G_rows() {
    let (P, q, A, b, mut constraints) = api_dim_check_data();
    constraints[1].G = DMatrix::zeros(2, 4);

    let result = QuadraticProgram::new(P, q, A, b, constraints);
    assert_eq!(
        result.unwrap_err(),
        ProblemDataError::DimensionMismatch {
            field: "G rows",
            expected: 3,
            found: 2
        }
    );
}

#[test]
fn api_dim_check_bad_h() {
    let (P, q, A, b, mut constraints) = api_dim_check_data();
    constraints[0].h = vec![0.; 3];

    let result = QuadraticProgram::new(P, q, A, b, constraints);
    assert!(matches!(
        result,
        Err(ProblemDataError::DimensionMismatch { field: "h", .. })
    ));
}

#[test]
fn api_dim_check_bad_cones() {
    let (P, q, A, b, _constraints) = api_dim_check_data();

    for cone in [NonnegativeConeT(0), SecondOrderConeT(1), PSDConeT(0)] {
        let nvars = cone.nvars();
        let constraints = vec![ConeConstraint::new(
            cone,
            DMatrix::zeros(nvars, 4),
            vec![0.; nvars],
        )];
        let result = QuadraticProgram::new(P.clone(), q.clone(), A.clone(), b.clone(), constraints);
        assert!(matches!(
            result,
            Err(ProblemDataError::BadConeDimension { index: 0, .. })
        ));
    }
}

#[test]
fn api_dim_check_nonlinear_block() {
    let (P, q, A, b, mut constraints) = api_dim_check_data();
    constraints.push(ConeConstraint::new(
        NonlinearConvexT(1),
        DMatrix::zeros(1, 4),
        vec![0.],
    ));

    let result = QuadraticProgram::new(P, q, A, b, constraints);
    assert_eq!(
        result.unwrap_err(),
        ProblemDataError::UnexpectedNonlinearCone { index: 2 }
    );
}

#[test]
fn api_bad_settings() {
    let (P, q, A, b, constraints) = api_dim_check_data();
    let problem = QuadraticProgram::new(P, q, A, b, constraints).unwrap();

    let settings = Control {
        stepadj: 0.,
        trace: false,
        ..Control::default()
    };
    let result = QPSolver::new(&problem, settings).solve();
    assert_eq!(
        result.unwrap_err(),
        SolverError::Settings(SettingsError::BadFieldValue("stepadj"))
    );
}
