use crate::algebra::*;
use std::iter::zip;

#[test]
fn test_copy_from() {
    let x = vec![3., 0., 2., 1.];
    let mut y = vec![0.; 4];
    y.copy_from(&x);
    assert_eq!(x, y);
}

#[test]
fn test_scalarop() {
    let mut x = vec![3., 0., 2., 1.];
    x.scalarop(|x| -2. * x);
    assert_eq!(x, vec![-6., 0., -4., -2.]);
}

#[test]
fn test_translate() {
    let mut x = [3., 0., 2., 1.];
    x.translate(-4.);
    assert_eq!(x, [-1., -4., -2., -3.]);
}

#[test]
fn test_hadamard() {
    let mut x = [1., 2., 3.];
    x.hadamard(&[4., 5., 6.]);
    assert_eq!(x, [4., 10., 18.]);
}

#[test]
fn test_dot_shifted() {
    let z: Vec<f64> = (1..=17).map(|z| z as f64).collect();
    let s: Vec<f64> = (1..=17).map(|s| (s as f64 - 3.0) / 2.0).collect();
    let dz = vec![1.0; z.len()];
    let ds = vec![0.5; s.len()];
    let α = 0.5;

    let dot1 = <[f64] as VectorMath>::dot_shifted(&z, &s, &dz, &ds, α);
    let dot2: f64 = zip(zip(&z, &s), zip(&dz, &ds))
        .map(|((z, s), (dz, ds))| (z + α * dz) * (s + α * ds))
        .sum();
    assert!((dot1 - dot2).abs() <= 1e-10);
}

#[test]
fn test_norms() {
    let x = [3., -4.];
    assert_eq!(x.norm(), 5.);
    assert_eq!(x.norm_inf(), 4.);
    assert_eq!(x.minimum(), -4.);
    assert_eq!(x.maximum(), 3.);
    assert_eq!(x.dist(&[0., 0.]), 5.);
    assert!([f64::NAN, 1.].norm_inf().is_nan());
    assert!(![f64::INFINITY, 1.].is_finite());
}

#[test]
fn test_axpby() {
    let mut y = vec![1., 1., 1.];
    y.axpby(2., &[1., 2., 3.], -1.);
    assert_eq!(y, vec![1., 3., 5.]);

    let mut w = vec![0.; 3];
    w.waxpby(1., &[1., 2., 3.], 2., &[1., 1., 1.]);
    assert_eq!(w, vec![3., 4., 5.]);
}
