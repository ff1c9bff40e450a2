//! Problem classes built on the interior point core.

pub mod gp;
pub mod qp;
