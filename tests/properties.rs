#![allow(non_snake_case)]

// randomized checks of solution properties on well conditioned data

use cccp::{algebra::*, solver::*};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_matrix(rng: &mut StdRng, rows: usize, cols: usize) -> DMatrix<f64> {
    DMatrix::from_fn(rows, cols, |_, _| rng.gen_range(-1.0..1.0))
}

fn random_vector(rng: &mut StdRng, n: usize) -> Vec<f64> {
    (0..n).map(|_| rng.gen_range(-1.0..1.0)).collect()
}

// M'M + I
fn random_pd(rng: &mut StdRng, n: usize) -> DMatrix<f64> {
    let M = random_matrix(rng, n, n);
    M.tr_mul(&M) + DMatrix::identity(n, n)
}

fn quiet() -> Control {
    ControlBuilder::default().trace(false).build().unwrap()
}

#[test]
fn test_unconstrained_stationarity() {
    let mut rng = StdRng::seed_from_u64(1234);
    for n in [1, 3, 8] {
        let P = random_pd(&mut rng, n);
        let q = random_vector(&mut rng, n);
        let problem =
            QuadraticProgram::new(P.clone(), q.clone(), DMatrix::zeros(0, n), vec![], vec![])
                .unwrap();

        let solution = QPSolver::new(&problem, quiet()).solve().unwrap();
        assert_eq!(solution.status, SolverStatus::Optimal);
        assert_eq!(solution.iterations, 0);

        // Px + q = 0
        assert!(problem.rdual(&solution.pdv).norm() <= 1e-10);
    }
}

#[test]
fn test_equality_constrained_kkt() {
    let mut rng = StdRng::seed_from_u64(99);
    for (n, p) in [(2, 1), (6, 2), (8, 5)] {
        let P = random_pd(&mut rng, n);
        let q = random_vector(&mut rng, n);
        let A = random_matrix(&mut rng, p, n);
        let b = random_vector(&mut rng, p);
        let problem = QuadraticProgram::new(P, q, A, b, vec![]).unwrap();

        let settings = quiet();
        let feastol = settings.feastol;
        let solution = QPSolver::new(&problem, settings).solve().unwrap();

        assert_eq!(solution.status, SolverStatus::Optimal);
        assert!(solution.state.get("certp").unwrap() <= feastol);
        assert!(solution.state.get("certd").unwrap() <= feastol);
        assert!(problem.rprim(&solution.pdv).norm() <= 1e-8);
    }
}

#[test]
fn test_conic_weak_duality() {
    let mut rng = StdRng::seed_from_u64(2024);
    let n = 5;

    for _ in 0..5 {
        let P = random_pd(&mut rng, n);
        let q: Vec<f64> = random_vector(&mut rng, n).iter().map(|v| 4. * v).collect();

        // -1 <= x <= 1 and |x[1..]| <= 3
        let I = DMatrix::<f64>::identity(n, n);
        let mut Gbox = DMatrix::zeros(2 * n, n);
        Gbox.view_mut((0, 0), (n, n)).copy_from(&I);
        Gbox.view_mut((n, 0), (n, n)).copy_from(&(-&I));
        let mut Gsoc = DMatrix::zeros(n, n);
        for i in 1..n {
            Gsoc[(i, i)] = -1.;
        }
        let mut hsoc = vec![0.; n];
        hsoc[0] = 3.;

        let constraints = vec![
            ConeConstraint::new(NonnegativeConeT(2 * n), Gbox, vec![1.; 2 * n]),
            ConeConstraint::new(SecondOrderConeT(n), Gsoc, hsoc),
        ];
        let problem =
            QuadraticProgram::new(P, q, DMatrix::zeros(0, n), vec![], constraints).unwrap();

        let solution = QPSolver::new(&problem, quiet()).solve().unwrap();
        assert_eq!(solution.status, SolverStatus::Optimal);

        let state = &solution.state;
        let (pobj, dobj) = (state.get("pobj").unwrap(), state.get("dobj").unwrap());
        assert!(dobj <= pobj + 1e-5);
        assert!(state.get("dgap").unwrap() >= 0.);
        assert!(state.get("pslack").unwrap() > 0.);
        assert!(state.get("dslack").unwrap() > 0.);

        // solution stays in the box
        assert!(solution.x().norm_inf() <= 1. + 1e-6);
    }
}
