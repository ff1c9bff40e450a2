//! Solver main module.
//!
//! The interior point machinery lives in [`core`](crate::solver::core)
//! and is shared by the two problem classes in
//! [`implementations`](crate::solver::implementations):
//! [quadratic programs](crate::solver::implementations::qp) and
//! [geometric programs](crate::solver::implementations::gp).

// internal module structure
pub mod core;
pub mod implementations;

//Here we expose only part of the solver internals
//and rearrange public modules a bit to give a more
//user friendly API

//allows declaration of cone constraints
pub use crate::solver::core::cones::{SupportedConeT, SupportedConeT::*};

//user facing types required to interact with the solvers
pub use crate::solver::core::{
    ConeConstraint, Control, ControlBuilder, Diagnostics, PrimalDualVariables, ProblemDataError,
    ProgressCallback, SettingsError, SingularSystemError, Solution, SolveInfo, SolverError,
    SolverStatus,
};

//user facing traits required to define new nonlinear functions
pub use crate::solver::core::traits;
pub use crate::solver::core::traits::ConvexFunction;

pub use crate::solver::implementations::gp::{GPSolver, GeometricProgram, Posynomial};
pub use crate::solver::implementations::qp::{QPSolver, QuadraticProgram};
