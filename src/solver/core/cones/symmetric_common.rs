use super::*;
use crate::algebra::VectorMath;

// --------------------------------------
// Trait with blanket implementation for all symmetric cones
// Provides functions that are identical across types

pub(super) trait SymmetricConeUtils {
    fn _combined_ds_shift_symmetric(
        &self,
        shift: &mut [f64],
        step_z: &mut [f64],
        step_s: &mut [f64],
        σμ: f64,
    );
}

impl<C> SymmetricConeUtils for C
where
    C: SymmetricCone + Cone,
{
    fn _combined_ds_shift_symmetric(
        &self,
        shift: &mut [f64],
        step_z: &mut [f64],
        step_s: &mut [f64],
        σμ: f64,
    ) {
        // shift doubles as workspace, since mul_W and mul_Winv
        // can't take aliasing arguments
        let tmp = shift;

        //Δz <- WΔz
        tmp.copy_from(step_z);
        self.mul_W(MatrixShape::N, step_z, tmp, 1.0, 0.0);

        //Δs <- W⁻ᵀΔs
        tmp.copy_from(step_s);
        self.mul_Winv(MatrixShape::T, step_s, tmp, 1.0, 0.0);

        //shift = W⁻ᵀΔs ∘ WΔz - σμe
        let shift = tmp;
        self.circ_op(shift, step_s, step_z);
        self.add_scaled_e(shift, -σμ);
    }
}
