use super::VectorMath;
use itertools::izip;
use std::iter::zip;

impl VectorMath for [f64] {
    fn copy_from(&mut self, src: &[f64]) -> &mut Self {
        self.copy_from_slice(src);
        self
    }

    fn scalarop(&mut self, op: impl Fn(f64) -> f64) -> &mut Self {
        for x in &mut *self {
            *x = op(*x);
        }
        self
    }

    fn scalarop_from(&mut self, op: impl Fn(f64) -> f64, v: &[f64]) -> &mut Self {
        for (x, v) in zip(&mut *self, v) {
            *x = op(*v);
        }
        self
    }

    fn translate(&mut self, c: f64) -> &mut Self {
        self.scalarop(|x| x + c)
    }

    fn set(&mut self, c: f64) -> &mut Self {
        self.scalarop(|_x| c)
    }

    fn scale(&mut self, c: f64) -> &mut Self {
        self.scalarop(|x| x * c)
    }

    fn negate(&mut self) -> &mut Self {
        self.scalarop(|x| -x)
    }

    fn hadamard(&mut self, y: &[f64]) -> &mut Self {
        zip(&mut *self, y).for_each(|(x, y)| *x *= *y);
        self
    }

    fn dot(&self, y: &[f64]) -> f64 {
        assert_eq!(self.len(), y.len());
        zip(self, y).fold(0.0, |acc, (&x, &y)| acc + x * y)
    }

    fn dot_shifted(z: &[f64], s: &[f64], dz: &[f64], ds: &[f64], α: f64) -> f64 {
        assert_eq!(z.len(), s.len());
        assert_eq!(z.len(), dz.len());
        assert_eq!(s.len(), ds.len());

        izip!(s, ds, z, dz).fold(0.0, |acc, (&s, &ds, &z, &dz)| {
            let si = s + α * ds;
            let zi = z + α * dz;
            acc + si * zi
        })
    }

    fn dist(&self, y: &Self) -> f64 {
        zip(self, y)
            .fold(0.0, |acc, (&x, &y)| acc + (x - y) * (x - y))
            .sqrt()
    }

    fn sumsq(&self) -> f64 {
        self.dot(self)
    }

    // 2-norm
    fn norm(&self) -> f64 {
        self.sumsq().sqrt()
    }

    fn norm_inf(&self) -> f64 {
        let mut out = 0.0;
        for v in self.iter().map(|v| v.abs()) {
            if v.is_nan() {
                return f64::NAN;
            }
            out = if v > out { v } else { out };
        }
        out
    }

    fn norm_inf_diff(&self, b: &[f64]) -> f64 {
        zip(self, b).fold(0.0, |acc, (x, y)| f64::max(acc, f64::abs(*x - *y)))
    }

    fn minimum(&self) -> f64 {
        self.iter().fold(f64::INFINITY, |r, &s| f64::min(r, s))
    }

    fn maximum(&self) -> f64 {
        self.iter().fold(f64::NEG_INFINITY, |r, &s| f64::max(r, s))
    }

    fn is_finite(&self) -> bool {
        self.iter().all(|&x| x.is_finite())
    }

    fn axpby(&mut self, a: f64, x: &[f64], b: f64) -> &mut Self {
        assert_eq!(self.len(), x.len());

        zip(&mut *self, x).for_each(|(y, x)| *y = a * (*x) + b * (*y));
        self
    }

    fn waxpby(&mut self, a: f64, x: &[f64], b: f64, y: &[f64]) -> &mut Self {
        assert_eq!(self.len(), x.len());
        assert_eq!(self.len(), y.len());

        for (w, (x, y)) in zip(&mut *self, zip(x, y)) {
            *w = a * (*x) + b * (*y);
        }
        self
    }
}
