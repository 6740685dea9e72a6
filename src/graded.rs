//! Shared plumbing for the specialized even/odd multivector types.
//!
//! Every specialized type is a newtype over its isomorphic representation,
//! with a `coefficients` method mapping into the blade basis and back. The
//! macros here stamp out the operator impls and the coefficient-driven
//! traits so each algebra module only writes its product rules.

use crate::ScalarProduct;
use std::fmt;
use std::ops::{Add, Mul};

/// Blade coefficients of `m`, one per basis element. Each blade squares to
/// a nonzero sign under a nondegenerate metric, so the scalar product
/// against the basis recovers the coefficient.
pub(crate) fn extract<T, const N: usize>(
    m: T,
    basis: &[T; N],
    masks: &[u64; N],
    metric: blades::Metric,
) -> [f64; N]
where
    T: Copy + ScalarProduct<T>,
{
    let mut out = [0.0; N];
    for i in 0..N {
        let square = blades::product(metric, masks[i], masks[i]).1.as_f64();
        out[i] = basis[i].dot(m) / square;
    }
    out
}

pub(crate) fn combine<T, const N: usize>(coefficients: [f64; N], basis: &[T; N]) -> T
where
    T: Copy + Add<Output = T> + Mul<f64, Output = T>,
{
    let mut sum = basis[0] * coefficients[0];
    for i in 1..N {
        sum = sum + basis[i] * coefficients[i];
    }
    sum
}

/// Writes `terms` as a signed sum, naming each set generator bit via
/// `name`. Unit magnitudes are left implicit on non-scalar blades, and
/// terms below [`crate::DISPLAY_TOLERANCE`] are dropped.
pub(crate) fn fmt_terms(
    f: &mut fmt::Formatter,
    terms: impl Iterator<Item = (u64, f64)>,
    name: impl Fn(&mut fmt::Formatter, u32) -> fmt::Result,
) -> fmt::Result {
    let mut first = true;
    for (mask, coefficient) in terms {
        if coefficient.abs() <= crate::DISPLAY_TOLERANCE {
            continue;
        }
        if first {
            if coefficient < 0.0 {
                write!(f, "-")?;
            }
            first = false;
        } else if coefficient < 0.0 {
            write!(f, " - ")?;
        } else {
            write!(f, " + ")?;
        }
        let magnitude = coefficient.abs();
        if mask == 0 || (magnitude - 1.0).abs() > crate::DISPLAY_TOLERANCE {
            write!(f, "{magnitude}")?;
        }
        let mut bits = mask;
        while bits != 0 {
            let bit = bits.trailing_zeros();
            name(f, bit)?;
            bits &= bits - 1;
        }
    }
    if first {
        write!(f, "0")?;
    }
    Ok(())
}

/// Accumulates `coefficients` over blade `masks` into G(4,4), mapping each
/// generator bit through its image listed in `gens` as weighted G(4,4)
/// generator bits.
pub(crate) fn embed_terms<const N: usize>(
    coefficients: [f64; N],
    masks: &[u64; N],
    gens: &[&[(u8, f64)]],
) -> crate::ga44::Multivector {
    let images: Vec<crate::ga44::Multivector> = gens
        .iter()
        .map(|image| {
            crate::ga44::Multivector::new(
                image
                    .iter()
                    .map(|&(bit, weight)| (1u8 << bit, weight))
                    .collect(),
            )
        })
        .collect();

    let mut sum = crate::ga44::Multivector::default();
    for i in 0..N {
        if coefficients[i] == 0.0 {
            continue;
        }
        let mut blade = crate::ga44::Multivector::scalar(coefficients[i]);
        let mut bits = masks[i];
        while bits != 0 {
            let bit = bits.trailing_zeros();
            blade = blade * images[bit as usize].clone();
            bits &= bits - 1;
        }
        sum = sum + blade;
    }
    sum
}

/// Operator impls for a newtype over a linear representation.
macro_rules! linear_ops {
    ($ty:ident) => {
        impl std::ops::Add for $ty {
            type Output = Self;
            fn add(self, rhs: Self) -> Self {
                $ty(self.0 + rhs.0)
            }
        }

        impl std::ops::Sub for $ty {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self {
                $ty(self.0 - rhs.0)
            }
        }

        impl std::ops::Neg for $ty {
            type Output = Self;
            fn neg(self) -> Self {
                $ty(-self.0)
            }
        }

        impl std::ops::Mul<f64> for $ty {
            type Output = Self;
            fn mul(self, rhs: f64) -> Self {
                $ty(self.0 * rhs)
            }
        }

        impl std::ops::Mul<$ty> for f64 {
            type Output = $ty;
            fn mul(self, rhs: $ty) -> $ty {
                rhs * self
            }
        }

        impl std::ops::Div<f64> for $ty {
            type Output = Self;
            fn div(self, rhs: f64) -> Self {
                self * (1.0 / rhs)
            }
        }
    };
}

/// Coefficient extraction via the scalar product against the basis. Only
/// valid under a nondegenerate metric.
macro_rules! extracted {
    ($ty:ident, $n:expr, $masks:expr, $basis:expr, $metric:expr) => {
        impl $ty {
            pub fn coefficients(self) -> [f64; $n] {
                crate::graded::extract(self, &$basis, &$masks, $metric)
            }
        }
    };
}

/// Coefficient-driven traits: requires a `coefficients` method.
macro_rules! graded_ops {
    ($ty:ident, $n:expr, $masks:expr, $basis:expr, $names:expr) => {
        impl $ty {
            pub fn from_coefficients(coefficients: [f64; $n]) -> Self {
                crate::graded::combine(coefficients, &$basis)
            }
        }

        impl crate::Project for $ty {
            fn project(self, grade: u32) -> Self {
                let mut coefficients = self.coefficients();
                for (c, mask) in coefficients.iter_mut().zip($masks) {
                    if blades::grade(mask) != grade {
                        *c = 0.0;
                    }
                }
                Self::from_coefficients(coefficients)
            }
        }

        impl crate::Norm for $ty {
            fn norm2(&self) -> f64 {
                let slots: &[f64; $n] = bytemuck::cast_ref(self);
                slots.iter().map(|x| x * x).sum()
            }
        }

        impl std::fmt::Display for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                let terms = $masks.into_iter().zip(self.coefficients());
                crate::graded::fmt_terms(f, terms, |f, bit| {
                    write!(f, "{}", $names[bit as usize])
                })
            }
        }
    };
}

/// Embedding into G(4,4) through per-generator images.
macro_rules! embeds {
    ($ty:ident, $masks:expr, $gens:expr) => {
        impl crate::Embed for $ty {
            fn embed(self) -> crate::ga44::Multivector {
                crate::graded::embed_terms(self.coefficients(), &$masks, $gens)
            }
        }
    };
}

pub(crate) use {embeds, extracted, graded_ops, linear_ops};

/// Checks a specialized algebra's closed-form products against the blade
/// algebra over the full basis grid, one assertion per product and slot.
#[cfg(test)]
pub(crate) mod grid {
    use std::ops::Mul;

    fn assert_blade<const N: usize>(
        coefficients: [f64; N],
        masks: &[u64; N],
        product: (u64, blades::Sign),
        factors: (u64, u64),
    ) {
        for i in 0..N {
            let expected = if masks[i] == product.0 {
                product.1.as_f64()
            } else {
                0.0
            };
            assert!(
                (coefficients[i] - expected).abs() < 1e-9,
                "{:b} * {:b}: coefficient of {:b} is {}, expected {}",
                factors.0,
                factors.1,
                masks[i],
                coefficients[i],
                expected,
            );
        }
    }

    #[allow(clippy::too_many_arguments)]
    pub(crate) fn check<E, O, const N: usize>(
        metric: blades::Metric,
        even_masks: [u64; N],
        odd_masks: [u64; N],
        even_basis: [E; N],
        odd_basis: [O; N],
        even_coefficients: impl Fn(E) -> [f64; N],
        odd_coefficients: impl Fn(O) -> [f64; N],
    ) where
        E: Copy + Mul<E, Output = E> + Mul<O, Output = O>,
        O: Copy + Mul<O, Output = E> + Mul<E, Output = O>,
    {
        for i in 0..N {
            for j in 0..N {
                let factors = (even_masks[i], even_masks[j]);
                let product = blades::product(metric, factors.0, factors.1);
                assert_blade(
                    even_coefficients(even_basis[i] * even_basis[j]),
                    &even_masks,
                    product,
                    factors,
                );

                let factors = (even_masks[i], odd_masks[j]);
                let product = blades::product(metric, factors.0, factors.1);
                assert_blade(
                    odd_coefficients(even_basis[i] * odd_basis[j]),
                    &odd_masks,
                    product,
                    factors,
                );

                let factors = (odd_masks[i], even_masks[j]);
                let product = blades::product(metric, factors.0, factors.1);
                assert_blade(
                    odd_coefficients(odd_basis[i] * even_basis[j]),
                    &odd_masks,
                    product,
                    factors,
                );

                let factors = (odd_masks[i], odd_masks[j]);
                let product = blades::product(metric, factors.0, factors.1);
                assert_blade(
                    even_coefficients(odd_basis[i] * odd_basis[j]),
                    &even_masks,
                    product,
                    factors,
                );
            }
        }
    }
}
