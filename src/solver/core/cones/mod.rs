#![allow(non_snake_case)]

use crate::algebra::MatrixShape;
use enum_dispatch::*;

//primitive cone types
mod nonlinearcone;
mod nonnegativecone;
mod psdcone;
mod socone;

//the supported cone wrapper type for primitives
//and the composite cone
mod compositecone;
mod supportedcone;

//blanket implementations shared by all symmetric cones
mod symmetric_common;

//flatten all cone implementations to appear in this module
pub use compositecone::*;
pub use nonlinearcone::*;
pub use nonnegativecone::*;
pub use psdcone::*;
pub use socone::*;
pub use supportedcone::*;
use symmetric_common::*;

#[enum_dispatch]
pub trait Cone {
    // functions relating to basic sizing
    fn dim(&self) -> usize;
    fn degree(&self) -> usize;
    fn numel(&self) -> usize;

    // identity element and shifts along it
    fn unit_initialization(&self, z: &mut [f64], s: &mut [f64]);
    fn add_scaled_e(&self, x: &mut [f64], α: f64);

    // block inner product, and the smallest eigenvalue of x in the
    // cone's Jordan algebra.  x is interior iff margin(x) > 0
    fn inner_product(&self, x: &[f64], y: &[f64]) -> f64;
    fn margin(&self, x: &[f64]) -> f64;

    // Nesterov-Todd scaling point.  Returns false if either
    // argument is not strictly interior.
    fn update_scaling(&mut self, s: &[f64], z: &[f64]) -> bool;

    // copy out the scaled point λ = Wz = W⁻ᵀs
    fn get_λ(&self, λ: &mut [f64]);

    // ---------------------------------------------------------
    // Linearized centrality condition
    //
    // The centrality condition is : (W(z + Δz) ∘ W⁻ᵀ(s + Δs) = μe
    //
    // The linearized version is :
    //     λ ∘ (WΔz + W⁻ᵀΔs) = -ds = - (affine_ds + combined_ds_shift)
    //
    // The affine term (computed in affine_ds) is λ ∘ λ
    // The shift term is W⁻ᵀΔs_aff ∘ WΔz_aff - σμe, where Δs_aff
    // and Δz_aff are the directions from the affine KKT solve.
    //
    // step_z and step_s are consumed as workspace by the shift.
    // ---------------------------------------------------------
    fn affine_ds(&self, ds: &mut [f64]);
    fn combined_ds_shift(&self, shift: &mut [f64], step_z: &mut [f64], step_s: &mut [f64], σμ: f64);

    // Find the maximum step length in some search direction
    fn step_length(&self, dz: &[f64], ds: &[f64], z: &[f64], s: &[f64], αmax: f64) -> (f64, f64);
}

// Operations supported on symmetric cones
#[enum_dispatch]
pub trait SymmetricCone: JordanAlgebra {
    // Multiplication by the scaling matrix
    fn mul_W(&self, is_transpose: MatrixShape, y: &mut [f64], x: &[f64], α: f64, β: f64);
    fn mul_Winv(&self, is_transpose: MatrixShape, y: &mut [f64], x: &[f64], α: f64, β: f64);

    // x = λ \ z
    fn λ_inv_circ_op(&self, x: &mut [f64], z: &[f64]);
}

#[enum_dispatch]
pub trait JordanAlgebra {
    // x = y ∘ z
    fn circ_op(&self, x: &mut [f64], y: &[f64], z: &[f64]);
}
