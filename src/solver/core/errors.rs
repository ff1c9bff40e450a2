use super::settings::SettingsError;
use thiserror::Error;

/// Singular or indefinite systems met while solving.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SingularSystemError {
    /// The quadratic cost matrix `P` could not be inverted.
    #[error("Inversion of P failed.")]
    CostMatrix,
    /// The Schur complement `-AP⁻¹A'` could not be inverted, which
    /// indicates redundant or inconsistent equality constraints.
    #[error("Inversion of Schur complement failed.")]
    SchurComplement,
    /// The reduced KKT system could not be factored.  Infeasible or
    /// unbounded problems usually end here, once the iterates diverge,
    /// rather than with an `unknown` status.
    #[error("KKT system is singular at iteration {iteration}")]
    Kkt { iteration: u32 },
    /// The Nesterov-Todd scaling could not be formed because an
    /// iterate left the interior of its cone.
    #[error("Nesterov-Todd scaling failed at iteration {iteration}")]
    Scaling { iteration: u32 },
}

/// Malformed problem data, detected before any numerical work.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProblemDataError {
    #[error("P must be square, but has dimensions {rows}x{cols}")]
    NonSquareP { rows: usize, cols: usize },
    #[error("P must be symmetric")]
    NonSymmetricP,
    #[error("dimension mismatch in {field}: expected {expected}, found {found}")]
    DimensionMismatch {
        field: &'static str,
        expected: usize,
        found: usize,
    },
    #[error("cone block {index} has invalid dimension: {cone}")]
    BadConeDimension { index: usize, cone: String },
    #[error("cone block {index} describes a non-symmetric matrix")]
    NonSymmetricPSDData { index: usize },
    #[error("cone block {index}: nonlinear blocks cannot be given as linear constraint data")]
    UnexpectedNonlinearCone { index: usize },
    #[error("a geometric program needs at least one posynomial (the objective)")]
    MissingObjective,
    #[error("problem data contains non-finite values in {0}")]
    NonFinite(&'static str),
}

/// Error type returned by the solvers
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolverError {
    #[error("Invalid problem data: {0}")]
    Data(#[from] ProblemDataError),
    #[error("Invalid settings: {0}")]
    Settings(#[from] SettingsError),
    #[error(transparent)]
    SingularSystem(#[from] SingularSystemError),
}
