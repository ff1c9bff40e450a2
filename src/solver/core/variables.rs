use crate::algebra::*;
use crate::solver::core::cones::{CompositeCone, Cone};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ---------------
// Primal-dual iterate
// ---------------

/// The primal-dual iterate `(x, y, s, z, τ, κ)`.
///
/// `s` and `z` are stacked over the cone blocks.  The homogeneous
/// embedding scalars `τ` and `κ` are carried at 1.0 and never drive
/// the iteration.
#[derive(Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PrimalDualVariables {
    /// primal variables
    pub x: Vec<f64>,
    /// equality multipliers
    pub y: Vec<f64>,
    /// slack variables
    pub s: Vec<f64>,
    /// cone multipliers
    pub z: Vec<f64>,
    /// homogenization scalar τ
    pub τ: f64,
    /// homogenization scalar κ
    pub κ: f64,
}

impl std::fmt::Debug for PrimalDualVariables {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "x: {:?}\ny: {:?}\ns: {:?}\nz: {:?}\nτ: {:?}\nκ: {:?}\n",
            self.x, self.y, self.s, self.z, self.τ, self.κ
        )
    }
}

impl PrimalDualVariables {
    /// All-zero iterate with `τ = κ = 1`
    pub fn new(n: usize, p: usize, m: usize) -> Self {
        Self {
            x: vec![0.0; n],
            y: vec![0.0; p],
            s: vec![0.0; m],
            z: vec![0.0; m],
            τ: 1.0,
            κ: 1.0,
        }
    }

    /// Starting point: `x = 0`, `y = 0` and `s = z = e`, the identity
    /// element of the cone.
    pub fn initialize(n: usize, p: usize, cones: &CompositeCone) -> Self {
        let mut pdv = Self::new(n, p, cones.numel());
        cones.unit_initialization(&mut pdv.z, &mut pdv.s);
        pdv
    }

    /// `self += α⋅step`
    pub(crate) fn add_step(&mut self, step: &Self, α: f64) {
        self.x.axpby(α, &step.x, 1.0);
        self.y.axpby(α, &step.y, 1.0);
        self.s.axpby(α, &step.s, 1.0);
        self.z.axpby(α, &step.z, 1.0);
    }
}

#[test]
fn test_initialize() {
    use crate::solver::core::cones::SupportedConeT::*;
    let cones = CompositeCone::new(&[NonnegativeConeT(2), SecondOrderConeT(2)]);
    let pdv = PrimalDualVariables::initialize(3, 1, &cones);
    assert_eq!(pdv.x, vec![0.; 3]);
    assert_eq!(pdv.y, vec![0.]);
    assert_eq!(pdv.s, vec![1., 1., 1., 0.]);
    assert_eq!(pdv.z, pdv.s);
    assert_eq!((pdv.τ, pdv.κ), (1., 1.));
}
