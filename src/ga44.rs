//! G(4,4): the common target every specialized algebra embeds into. Small
//! enough for a dense accumulator over all 256 blades, so sums and
//! products collapse duplicate masks as they go.

use crate::{sparse, Identity, Norm, Project, Reverse, ScalarProduct, Trace, TOLERANCE};
use std::ops::{Add, Mul, Neg, Sub};

pub(crate) const METRIC: blades::Metric = blades::Metric::diagonal(4, 4, 0);

const DIM: usize = 256;

/// Sparse multivector over the 256 blades of G(4,4), terms sorted by
/// blade mask.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Multivector {
    terms: Vec<(u8, f64)>,
}

impl Multivector {
    /// Builds from (mask, coefficient) terms in any order, summing
    /// duplicates and dropping coefficients within tolerance.
    pub fn new(terms: Vec<(u8, f64)>) -> Self {
        let mut dense = [0.0; DIM];
        for (mask, coefficient) in terms {
            dense[mask as usize] += coefficient;
        }
        Self::from_dense(dense)
    }

    fn from_dense(dense: [f64; DIM]) -> Self {
        let terms = dense
            .into_iter()
            .enumerate()
            .filter(|(_, c)| c.abs() > TOLERANCE)
            .map(|(mask, c)| (mask as u8, c))
            .collect();
        Multivector { terms }
    }

    pub fn scalar(value: f64) -> Self {
        Self::new(vec![(0, value)])
    }

    pub fn coefficient(&self, mask: u8) -> f64 {
        self.terms
            .binary_search_by_key(&mask, |&(m, _)| m)
            .map(|i| self.terms[i].1)
            .unwrap_or(0.0)
    }

    pub fn terms(&self) -> &[(u8, f64)] {
        &self.terms
    }

    /// The eight generators: `e1..e4` on the low bits square to +1,
    /// `f1..f4` on the high bits square to -1.
    pub fn basis() -> [Self; 8] {
        std::array::from_fn(|i| Self::new(vec![(1 << i, 1.0)]))
    }
}

impl Add for Multivector {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        let mut dense = [0.0; DIM];
        for &(mask, c) in &self.terms {
            dense[mask as usize] += c;
        }
        for &(mask, c) in &rhs.terms {
            dense[mask as usize] += c;
        }
        Self::from_dense(dense)
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
        let mut dense = [0.0; DIM];
        for &(ma, ca) in &self.terms {
            for &(mb, cb) in &rhs.terms {
                let (mask, sign) = blades::product(METRIC, ma as u64, mb as u64);
                dense[mask as usize] += ca * cb * sign.as_f64();
            }
        }
        Self::from_dense(dense)
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
        let terms = self.terms.iter().map(|&(mask, c)| (mask as u64, c));
        crate::graded::fmt_terms(f, terms, |f, bit| {
            if bit < 4 {
                write!(f, "e{}", bit + 1)
            } else {
                write!(f, "f{}", bit - 3)
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_masks_sum_on_construction() {
        let m = Multivector::new(vec![(1, 2.0), (1, 3.0)]);
        assert_eq!(m.terms(), &[(1, 5.0)]);
    }

    #[test]
    fn cancelling_terms_vanish() {
        let m = Multivector::new(vec![(3, 1.0), (3, -1.0)]);
        assert_eq!(m, Multivector::default());
    }

    #[test]
    fn generator_squares() {
        let basis = Multivector::basis();
        for (i, g) in basis.into_iter().enumerate() {
            let expected = if i < 4 { 1.0 } else { -1.0 };
            assert_eq!(g.clone() * g, Multivector::scalar(expected));
        }
    }

    #[test]
    fn generators_anticommute() {
        let [e1, _, _, _, f1, ..] = Multivector::basis();
        let ef = e1.clone() * f1.clone();
        let fe = f1 * e1;
        assert_eq!(ef, -fe);
    }

    #[test]
    fn scalar_product_matches_product_trace() {
        let a = Multivector::new(vec![(0b0001, 2.0), (0b0110, -1.0), (0b10000, 0.5)]);
        let b = Multivector::new(vec![(0b0001, 1.0), (0b0110, 3.0), (0b11000, -2.0)]);
        let through_product = (a.clone() * b.clone()).tr();
        assert!((a.dot(b) - through_product).abs() < 1e-12);
    }

    #[test]
    fn display_names_split_generators() {
        let m = Multivector::new(vec![(0b00010001, 1.0), (0, 2.0)]);
        assert_eq!(m.to_string(), "2 + e1f1");
    }
}
