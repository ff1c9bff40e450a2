//! Newton step engines.
//!
//! The step equations at an iterate with scaling `W` and scaled point
//! `λ` are
//!
//! ```text
//! H Δx + A'Δy + G'Δz        = bx
//! A Δx                      = by
//! G Δx + Δs                 = bz
//! λ ∘ (W Δz + W⁻ᵀ Δs)       = -d
//! ```
//!
//! Eliminating `Δs` and `Δz` leaves a square system in `(Δx, Δy)` that
//! is factored once per iteration and reused for both the affine and
//! the combined directions.

use super::cones::{CompositeCone, SymmetricCone};
use super::residuals::Residuals;
use super::variables::PrimalDualVariables;
use crate::algebra::*;

mod densekktsolver;
pub(crate) use densekktsolver::*;

pub(crate) trait KKTSolver {
    /// Refactors the reduced system for the current scaling.  Returns
    /// false if the system is singular.
    fn update(
        &mut self,
        H: &DMatrix<f64>,
        A: &DMatrix<f64>,
        G: &DMatrix<f64>,
        cones: &CompositeCone,
    ) -> bool;

    /// Solves with right hand side `(-c⋅rx, c⋅ry, -c⋅rz, d)`.  Returns
    /// false if the solution is not finite.
    fn solve(
        &mut self,
        residuals: &Residuals,
        c: f64,
        d: &[f64],
        cones: &CompositeCone,
        step: &mut PrimalDualVariables,
    ) -> bool;
}
