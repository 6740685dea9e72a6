//! Helpers shared by the sparse multivector types. Term lists are kept
//! sorted by blade mask with coefficients above [`crate::TOLERANCE`].

use itertools::{EitherOrBoth, Itertools};

pub(crate) fn apply_reversal<K: Copy + Into<u64>>(terms: &mut [(K, f64)]) {
    for (mask, coefficient) in terms.iter_mut() {
        let grade = blades::grade((*mask).into());
        if blades::reverse_sign(grade) == blades::Sign::Neg {
            *coefficient = -*coefficient;
        }
    }
}

pub(crate) fn retain_grade<K: Copy + Into<u64>>(terms: &mut Vec<(K, f64)>, grade: u32) {
    terms.retain(|&(mask, _)| blades::grade(mask.into()) == grade);
}

pub(crate) fn norm2<K>(terms: &[(K, f64)]) -> f64 {
    terms.iter().map(|&(_, c)| c * c).sum()
}

/// Scalar part of the product of two sorted term lists: only matching
/// masks land on the scalar blade, each weighted by its metric square.
pub(crate) fn scalar_product<K: Copy + Ord + Into<u64>>(
    a: &[(K, f64)],
    b: &[(K, f64)],
    metric: blades::Metric,
) -> f64 {
    a.iter()
        .merge_join_by(b.iter(), |x, y| x.0.cmp(&y.0))
        .filter_map(|pair| match pair {
            EitherOrBoth::Both(&(mask, ca), &(_, cb)) => {
                let sign = blades::product(metric, mask.into(), mask.into()).1;
                Some(ca * cb * sign.as_f64())
            }
            _ => None,
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalar_product_weighs_matching_masks() {
        let metric = blades::Metric::diagonal(1, 1, 0);
        let a = [(0b01u64, 2.0), (0b10, 3.0)];
        let b = [(0b01u64, 5.0), (0b11, 1.0)];
        assert_eq!(scalar_product(&a, &b, metric), 10.0);
        assert_eq!(scalar_product(&a, &a, metric), 4.0 - 9.0);
    }

    #[test]
    fn reversal_flips_grades_two_and_three() {
        let mut terms = vec![(0b1u64, 1.0), (0b11, 1.0), (0b111, 1.0), (0b1111, 1.0)];
        apply_reversal(&mut terms);
        let signs: Vec<f64> = terms.iter().map(|&(_, c)| c).collect();
        assert_eq!(signs, vec![1.0, -1.0, -1.0, 1.0]);
    }
}
