//! Exponentials of multivectors.
//!
//! The scalar part is split off and exponentiated separately. For the
//! traceless remainder `b` we look at `b * b`: when the square is a
//! scalar (the usual case for bivectors) the closed trigonometric or
//! hyperbolic form is exact, otherwise we fall back to scaling and
//! squaring with a Taylor series.

use crate::{Identity, Norm, Trace};
use std::ops::{Add, Mul, Sub};

const EPS: f64 = 1e-12;

pub trait Exponential {
    /// Exponential of a general multivector.
    fn exp(self) -> Self;

    /// Exponential assuming a traceless argument, as produced by the
    /// bivector generators of rotations and translations.
    fn bivector_exp(self) -> Self;
}

impl<T> Exponential for T
where
    T: Clone
        + Identity
        + Trace
        + Norm
        + Mul<Output = T>
        + Add<Output = T>
        + Sub<Output = T>
        + Mul<f64, Output = T>,
{
    fn exp(self) -> Self {
        let s = self.tr();
        let traceless = self - T::one() * s;
        traceless_exp(traceless) * s.exp()
    }

    fn bivector_exp(self) -> Self {
        traceless_exp(self)
    }
}

fn traceless_exp<T>(b: T) -> T
where
    T: Clone
        + Identity
        + Trace
        + Norm
        + Mul<Output = T>
        + Add<Output = T>
        + Sub<Output = T>
        + Mul<f64, Output = T>,
{
    let b2 = b.clone() * b.clone();
    let t = b2.tr();
    let off = b2 - T::one() * t;
    if off.norm2() <= EPS * EPS * (1.0 + t * t) {
        // b * b = t, a scalar.
        if t < -EPS {
            let angle = (-t).sqrt();
            T::one() * angle.cos() + b * (angle.sin() / angle)
        } else if t > EPS {
            let angle = t.sqrt();
            T::one() * angle.cosh() + b * (angle.sinh() / angle)
        } else {
            // Null square: exp(b) = 1 + b exactly.
            T::one() + b
        }
    } else {
        series_exp(b)
    }
}

/// Scaling and squaring with a Taylor series in the scaled argument.
fn series_exp<T>(b: T) -> T
where
    T: Clone + Identity + Norm + Mul<Output = T> + Add<Output = T> + Mul<f64, Output = T>,
{
    let mut scaled = b;
    let mut squarings = 0;
    while scaled.norm2() > 0.25 {
        scaled = scaled * 0.5;
        squarings += 1;
    }

    let mut sum = T::one();
    let mut term = T::one();
    for k in 1..64 {
        term = term * scaled.clone() * (1.0 / k as f64);
        sum = sum + term.clone();
        if term.norm2() <= 1e-32 {
            break;
        }
    }

    for _ in 0..squarings {
        sum = sum.clone() * sum;
    }
    sum
}
