use super::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ---------------------------------------------------
// We define some machinery here for enumerating the
// different cone types that can live in the composite cone
// ---------------------------------------------------

/// API type describing the type of a conic constraint.
///  
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SupportedConeT {
    /// Rows holding linearized convex inequalities `f(x) ≤ 0`,
    /// rebuilt every iteration.  Geometric programs only.
    ///
    /// The parameter indicates the number of inequalities.
    NonlinearConvexT(usize),
    /// The nonnegative orthant.  
    ///
    /// The parameter indicates the cone dimension.
    NonnegativeConeT(usize),
    /// The second order cone / Lorenz cone / ice-cream cone.
    ///  
    /// The parameter indicates the cone dimension.
    SecondOrderConeT(usize),
    /// The positive semidefinite cone of order `n`, stored as a full
    /// `n×n` matrix flattened in row-major order.
    ///
    /// The parameter indicates the matrix order.
    PSDConeT(usize),
}

impl SupportedConeT {
    /// Number of entries the cone occupies in the stacked `s` and `z` vectors.
    pub fn nvars(&self) -> usize {
        match self {
            SupportedConeT::NonlinearConvexT(dim) => *dim,
            SupportedConeT::NonnegativeConeT(dim) => *dim,
            SupportedConeT::SecondOrderConeT(dim) => *dim,
            SupportedConeT::PSDConeT(n) => n * n,
        }
    }

    pub(crate) fn has_valid_dim(&self) -> bool {
        match self {
            SupportedConeT::SecondOrderConeT(dim) => *dim >= 2,
            SupportedConeT::NonlinearConvexT(dim)
            | SupportedConeT::NonnegativeConeT(dim)
            | SupportedConeT::PSDConeT(dim) => *dim >= 1,
        }
    }
}

impl std::fmt::Display for SupportedConeT {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Make a cone object from its description
pub fn make_cone(cone: &SupportedConeT) -> SupportedCone {
    match *cone {
        SupportedConeT::NonlinearConvexT(dim) => NonlinearConvexCone::new(dim).into(),
        SupportedConeT::NonnegativeConeT(dim) => NonnegativeCone::new(dim).into(),
        SupportedConeT::SecondOrderConeT(dim) => SecondOrderCone::new(dim).into(),
        SupportedConeT::PSDConeT(n) => PSDCone::new(n).into(),
    }
}

#[enum_dispatch(Cone, SymmetricCone, JordanAlgebra)]
pub enum SupportedCone {
    NonlinearConvexCone(NonlinearConvexCone),
    NonnegativeCone(NonnegativeCone),
    SecondOrderCone(SecondOrderCone),
    PSDCone(PSDCone),
}

// we put a tagging enum here so that we can count cone types
// for the iteration banner
#[derive(PartialEq, Eq, Clone, Debug, Copy, Hash, PartialOrd, Ord)]
pub(crate) enum SupportedConeTag {
    NonlinearConvexCone,
    NonnegativeCone,
    SecondOrderCone,
    PSDCone,
}

impl SupportedCone {
    pub(crate) fn as_tag(&self) -> SupportedConeTag {
        match self {
            SupportedCone::NonlinearConvexCone(_) => SupportedConeTag::NonlinearConvexCone,
            SupportedCone::NonnegativeCone(_) => SupportedConeTag::NonnegativeCone,
            SupportedCone::SecondOrderCone(_) => SupportedConeTag::SecondOrderCone,
            SupportedCone::PSDCone(_) => SupportedConeTag::PSDCone,
        }
    }
}

impl SupportedConeTag {
    pub(crate) fn name(&self) -> &'static str {
        match self {
            SupportedConeTag::NonlinearConvexCone => "nonlinear",
            SupportedConeTag::NonnegativeCone => "nonnegative",
            SupportedConeTag::SecondOrderCone => "secondorder",
            SupportedConeTag::PSDCone => "psd",
        }
    }
}
