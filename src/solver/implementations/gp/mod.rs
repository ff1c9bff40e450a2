//! Geometric programs in convex form
//!
//! ```text
//! minimize    f_0(x)
//! subject to  f_j(x) ≤ 0,      j = 1..J
//!             Ax = b
//!             h_i - G_i x ∈ K_i
//! ```
//!
//! where every `f_j` is convex, typically the logarithm of a posynomial
//! in the log-transformed variables.  The objective is moved into the
//! constraints through an epigraph variable `t`, so the solver works on
//! `(x, t)` and minimizes `t`.  Solutions are reported back in the
//! original, exponentiated variables.

mod posynomial;
mod problemdata;
mod solver;

pub use posynomial::*;
pub use problemdata::*;
pub use solver::*;
