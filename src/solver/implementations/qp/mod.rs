//! Quadratic programs
//!
//! ```text
//! minimize    ½x'Px + q'x
//! subject to  Ax = b
//!             h_i - G_i x ∈ K_i,   i = 1..K
//! ```

mod problemdata;
mod solver;

pub use problemdata::*;
pub use solver::*;
