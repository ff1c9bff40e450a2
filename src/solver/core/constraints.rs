use super::cones::SupportedConeT;
use super::errors::ProblemDataError;
use crate::algebra::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One linear cone constraint `h - Gx ∈ K`.
///
/// For a [`PSDConeT`](SupportedConeT::PSDConeT) block of order `k`,
/// `G` has `k²` rows and every column of `G`, as well as `h`, holds a
/// symmetric `k×k` matrix flattened in row-major order.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ConeConstraint {
    pub cone: SupportedConeT,
    pub G: DMatrix<f64>,
    pub h: Vec<f64>,
}

impl ConeConstraint {
    pub fn new(cone: SupportedConeT, G: DMatrix<f64>, h: Vec<f64>) -> Self {
        Self { cone, G, h }
    }

    pub(crate) fn check(&self, index: usize, n: usize) -> Result<(), ProblemDataError> {
        if matches!(self.cone, SupportedConeT::NonlinearConvexT(_)) {
            return Err(ProblemDataError::UnexpectedNonlinearCone { index });
        }
        if !self.cone.has_valid_dim() {
            return Err(ProblemDataError::BadConeDimension {
                index,
                cone: self.cone.to_string(),
            });
        }

        let nvars = self.cone.nvars();
        check_dim("G rows", nvars, self.G.nrows())?;
        check_dim("G columns", n, self.G.ncols())?;
        check_dim("h", nvars, self.h.len())?;

        if !(self.G.iter().all(|v| v.is_finite()) && self.h.is_finite()) {
            return Err(ProblemDataError::NonFinite("G or h"));
        }

        if let SupportedConeT::PSDConeT(k) = self.cone {
            let symmetric = |v: &[f64]| is_symmetric(&mat_from_rowmajor(k, v), 1e-12);
            let columns_ok = self
                .G
                .column_iter()
                .all(|col| symmetric(&col.iter().copied().collect::<Vec<_>>()));
            if !(columns_ok && symmetric(&self.h)) {
                return Err(ProblemDataError::NonSymmetricPSDData { index });
            }
        }
        Ok(())
    }
}

/// Stacks validated constraints into a single `(types, G, h)` triple
/// with `n` columns.
pub(crate) fn stack_constraints(
    constraints: &[ConeConstraint],
    n: usize,
) -> (Vec<SupportedConeT>, DMatrix<f64>, Vec<f64>) {
    let m: usize = constraints.iter().map(|c| c.cone.nvars()).sum();
    let mut G = DMatrix::zeros(m, n);
    let mut h = Vec::with_capacity(m);

    let mut row = 0;
    for c in constraints {
        let rows = c.cone.nvars();
        G.view_mut((row, 0), (rows, n)).copy_from(&c.G);
        h.extend_from_slice(&c.h);
        row += rows;
    }

    let types = constraints.iter().map(|c| c.cone).collect();
    (types, G, h)
}

pub(crate) fn check_dim(
    field: &'static str,
    expected: usize,
    found: usize,
) -> Result<(), ProblemDataError> {
    if expected != found {
        return Err(ProblemDataError::DimensionMismatch {
            field,
            expected,
            found,
        });
    }
    Ok(())
}
