/// Vector operations on slices of `f64`

pub trait VectorMath {
    /// Copy values from `src` to `self`
    fn copy_from(&mut self, src: &Self) -> &mut Self;

    /// Apply an elementwise operation on a vector.
    fn scalarop(&mut self, op: impl Fn(f64) -> f64) -> &mut Self;

    /// Apply an elementwise operation to `v` and assign the
    /// results to `self`.
    fn scalarop_from(&mut self, op: impl Fn(f64) -> f64, v: &Self) -> &mut Self;

    /// Elementwise translation.
    fn translate(&mut self, c: f64) -> &mut Self;

    /// set all elements to the same value
    fn set(&mut self, c: f64) -> &mut Self;

    /// Elementwise scaling.
    fn scale(&mut self, c: f64) -> &mut Self;

    /// Elementwise negation of entries.
    fn negate(&mut self) -> &mut Self;

    /// Elementwise scaling by another vector. Produces `self[i] = self[i] * y[i]`
    fn hadamard(&mut self, y: &Self) -> &mut Self;

    /// Dot product
    fn dot(&self, y: &Self) -> f64;

    // computes dot(z + αdz,s + αds) without intermediate allocation
    fn dot_shifted(z: &[f64], s: &[f64], dz: &[f64], ds: &[f64], α: f64) -> f64;

    /// Standard Euclidian or 2-norm distance from `self` to `y`
    fn dist(&self, y: &Self) -> f64;

    /// Sum of squares of the elements.
    fn sumsq(&self) -> f64;

    /// 2-norm
    fn norm(&self) -> f64;

    /// Infinity norm
    fn norm_inf(&self) -> f64;

    /// max absolute difference
    fn norm_inf_diff(&self, b: &Self) -> f64;

    /// Minimum value in vector
    fn minimum(&self) -> f64;

    /// Maximum value in vector
    fn maximum(&self) -> f64;

    /// Checks if all elements are finite, i.e. no Infs or NaNs
    fn is_finite(&self) -> bool;

    //blas-like vector ops
    //--------------------

    /// BLAS-like shift and scale in place.  Produces `self = a*x+b*self`
    fn axpby(&mut self, a: f64, x: &Self, b: f64) -> &mut Self;

    /// BLAS-like shift and scale, non in-place version.  Produces `self = a*x+b*y`
    fn waxpby(&mut self, a: f64, x: &Self, b: f64, y: &Self) -> &mut Self;
}
