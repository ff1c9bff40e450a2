//! __cccp__ is a primal-dual interior point solver for convex programs
//! over products of cones.  It solves quadratic programs
//!
//! $$
//! \begin{array}{rl}
//! \text{minimize} & \frac{1}{2}x^T P x + q^T x\\\\\[2ex\]
//!  \text{subject to} & Ax = b \\\\\[1ex\]
//!         & h_i - G_i x \in \mathcal{K}_i
//!  \end{array}
//! $$
//!
//! and geometric programs in convex form, where a nonlinear
//! epigraph cone is linearized at every iteration.
//!
//! The supported cones are the nonnegative orthant, second order cones
//! and positive semidefinite cones (stored as full, row-major matrices).
//! Steps are computed with Nesterov-Todd scaling and a Mehrotra
//! predictor-corrector scheme.
//!
//! ```no_run
//! use cccp::algebra::*;
//! use cccp::solver::*;
//!
//! // minimize x'x/2 - x1 subject to x1 + x2 <= 1, x >= 0
//! let P = DMatrix::<f64>::identity(2, 2);
//! let q = vec![-1., 0.];
//! let constraints = vec![
//!     ConeConstraint::new(NonnegativeConeT(1), DMatrix::from_row_slice(1, 2, &[1., 1.]), vec![1.]),
//!     ConeConstraint::new(NonnegativeConeT(2), -DMatrix::<f64>::identity(2, 2), vec![0., 0.]),
//! ];
//! let problem = QuadraticProgram::new(P, q, DMatrix::zeros(0, 2), vec![], constraints).unwrap();
//!
//! let mut solver = QPSolver::new(&problem, Control::default());
//! let solution = solver.solve().unwrap();
//! assert_eq!(solution.status, SolverStatus::Optimal);
//! ```
//!
//! # License
//!
//! Licensed under Apache License, Version 2.0.

//Rust hates greek characters
#![allow(confusable_idents)]
#![allow(non_snake_case)]

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod algebra;
pub mod io;
pub mod solver;
