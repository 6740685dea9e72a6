//! G(32,32): the large split algebra. With 2^64 blades a dense
//! accumulator is out of the question, so terms stay as sorted sparse
//! lists merged pairwise. Generators interleave by sign: bit `2k` is
//! `e(k+1)` squaring to +1, bit `2k + 1` is `f(k+1)` squaring to -1.

use crate::{sparse, Identity, Norm, Project, Reverse, ScalarProduct, Trace, TOLERANCE};
use itertools::{EitherOrBoth, Itertools};
use std::ops::{Add, Mul, Neg, Sub};

pub(crate) const METRIC: blades::Metric = blades::Metric::interleaved(32);

/// Sparse multivector over the blades of G(32,32), terms sorted by mask.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Multivector {
    terms: Vec<(u64, f64)>,
}

impl Multivector {
    /// Builds from (mask, coefficient) terms in any order, summing
    /// duplicates and dropping coefficients within tolerance.
    pub fn new(mut terms: Vec<(u64, f64)>) -> Self {
        terms.sort_unstable_by_key(|&(mask, _)| mask);
        let terms = terms
            .into_iter()
            .coalesce(|a, b| {
                if a.0 == b.0 {
                    Ok((a.0, a.1 + b.1))
                } else {
                    Err((a, b))
                }
            })
            .filter(|(_, c)| c.abs() > TOLERANCE)
            .collect();
        Multivector { terms }
    }

    pub fn scalar(value: f64) -> Self {
        Self::new(vec![(0, value)])
    }

    pub fn coefficient(&self, mask: u64) -> f64 {
        self.terms
            .binary_search_by_key(&mask, |&(m, _)| m)
            .map(|i| self.terms[i].1)
            .unwrap_or(0.0)
    }

    pub fn terms(&self) -> &[(u64, f64)] {
        &self.terms
    }

    /// The 64 generators in interleaved order `e1, f1, e2, f2, ...`.
    pub fn basis() -> Vec<Self> {
        (0..64).map(|i| Self::new(vec![(1 << i, 1.0)])).collect()
    }
}

impl Add for Multivector {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        let terms = self
            .terms
            .into_iter()
            .merge_join_by(rhs.terms, |a, b| a.0.cmp(&b.0))
            .map(|pair| match pair {
                EitherOrBoth::Both((mask, ca), (_, cb)) => (mask, ca + cb),
                EitherOrBoth::Left(term) | EitherOrBoth::Right(term) => term,
            })
            .filter(|(_, c)| c.abs() > TOLERANCE)
            .collect();
        Multivector { terms }
    }
}

impl Sub for Multivector {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        self + -rhs
    }
}

impl Neg for Multivector {
    type Output = Self;
    fn neg(mut self) -> Self {
        for (_, c) in &mut self.terms {
            *c = -*c;
        }
        self
    }
}

impl Mul for Multivector {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        let mut products = Vec::with_capacity(self.terms.len() * rhs.terms.len());
        for &(ma, ca) in &self.terms {
            for &(mb, cb) in &rhs.terms {
                let (mask, sign) = blades::product(METRIC, ma, mb);
                if sign != blades::Sign::Zero {
                    products.push((mask, ca * cb * sign.as_f64()));
                }
            }
        }
        Self::new(products)
    }
}

impl Mul<f64> for Multivector {
    type Output = Self;
    fn mul(self, rhs: f64) -> Self {
        Self::new(
            self.terms
                .into_iter()
                .map(|(mask, c)| (mask, c * rhs))
                .collect(),
        )
    }
}

impl Mul<Multivector> for f64 {
    type Output = Multivector;
    fn mul(self, rhs: Multivector) -> Multivector {
        rhs * self
    }
}

impl Trace for Multivector {
    fn tr(&self) -> f64 {
        self.coefficient(0)
    }
}

impl ScalarProduct for Multivector {
    fn dot(self, rhs: Self) -> f64 {
        sparse::scalar_product(&self.terms, &rhs.terms, METRIC)
    }
}

impl Project for Multivector {
    fn project(mut self, grade: u32) -> Self {
        sparse::retain_grade(&mut self.terms, grade);
        self
    }
}

impl Reverse for Multivector {
    fn rev(mut self) -> Self {
        sparse::apply_reversal(&mut self.terms);
        self
    }
}

impl Norm for Multivector {
    fn norm2(&self) -> f64 {
        sparse::norm2(&self.terms)
    }
}

impl Identity for Multivector {
    fn one() -> Self {
        Self::scalar(1.0)
    }
}

impl From<f64> for Multivector {
    fn from(value: f64) -> Self {
        Self::scalar(value)
    }
}

impl std::fmt::Display for Multivector {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let terms = self.terms.iter().copied();
        crate::graded::fmt_terms(f, terms, |f, bit| {
            let family = if bit % 2 == 0 { 'e' } else { 'f' };
            write!(f, "{}{}", family, bit / 2 + 1)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_masks_sum_on_construction() {
        let m = Multivector::new(vec![(1 << 40, 2.0), (1 << 40, 3.0), (1, -1.0)]);
        assert_eq!(m.terms(), &[(1, -1.0), (1 << 40, 5.0)]);
    }

    #[test]
    fn interleaved_generator_squares() {
        for (i, g) in Multivector::basis().into_iter().enumerate() {
            let expected = if i % 2 == 0 { 1.0 } else { -1.0 };
            assert_eq!(g.clone() * g, Multivector::scalar(expected), "bit {i}");
        }
    }

    #[test]
    fn high_bit_blades_multiply() {
        let a = Multivector::new(vec![(1 << 62, 1.0)]);
        let b = Multivector::new(vec![(1 << 63, 1.0)]);
        let ab = a.clone() * b.clone();
        assert_eq!(ab.coefficient((1 << 62) | (1 << 63)), 1.0);
        assert_eq!(a.clone() * a, Multivector::scalar(1.0));
        assert_eq!(b.clone() * b, Multivector::scalar(-1.0));
    }

    #[test]
    fn addition_merges_sorted_terms() {
        let a = Multivector::new(vec![(1, 1.0), (4, 2.0)]);
        let b = Multivector::new(vec![(2, 3.0), (4, -2.0)]);
        let sum = a + b;
        assert_eq!(sum.terms(), &[(1, 1.0), (2, 3.0)]);
    }

    #[test]
    fn display_interleaves_families() {
        let m = Multivector::new(vec![(0b11, 1.0), (1 << 4, -2.0)]);
        assert_eq!(m.to_string(), "e1f1 - 2e3");
    }
}
