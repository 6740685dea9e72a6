//! G(1,3): spacetime algebra. Even multivectors are 2x2 complex matrices
//! through the Pauli construction, and odd multivectors ride on the same
//! matrices via right-multiplication by the time generator.

use crate::graded::{embeds, extracted, graded_ops, linear_ops};
use crate::matrix::{c, Mat2c};
use crate::{Identity, Reverse, ScalarProduct, Trace};
use bytemuck::{Pod, Zeroable};
use std::ops::Mul;

pub(crate) const METRIC: blades::Metric = blades::Metric::diagonal(1, 3, 0);

#[derive(Copy, Clone, Debug, Default, PartialEq, Pod, Zeroable)]
#[repr(C)]
pub struct Even(pub(crate) Mat2c);

#[derive(Copy, Clone, Debug, Default, PartialEq, Pod, Zeroable)]
#[repr(C)]
pub struct Odd(pub(crate) Mat2c);

pub(crate) const GEN_NAMES: [&str; 4] = ["g0", "g1", "g2", "g3"];

pub(crate) const EVEN_MASKS: [u64; 8] = [0b0000, 0b0011, 0b0101, 0b0110, 0b1001, 0b1010, 0b1100, 0b1111];
pub(crate) const EVEN_BASIS: [Even; 8] = [
    Even(Mat2c::new(c(1.0, 0.0), c(0.0, 0.0), c(0.0, 0.0), c(1.0, 0.0))), // scalar
    Even(Mat2c::new(c(0.0, 0.0), c(-1.0, 0.0), c(-1.0, 0.0), c(0.0, 0.0))), // g0g1
    Even(Mat2c::new(c(0.0, 0.0), c(0.0, 1.0), c(0.0, -1.0), c(0.0, 0.0))), // g0g2
    Even(Mat2c::new(c(0.0, -1.0), c(0.0, 0.0), c(0.0, 0.0), c(0.0, 1.0))), // g1g2
    Even(Mat2c::new(c(-1.0, 0.0), c(0.0, 0.0), c(0.0, 0.0), c(1.0, 0.0))), // g0g3
    Even(Mat2c::new(c(0.0, 0.0), c(1.0, 0.0), c(-1.0, 0.0), c(0.0, 0.0))), // g1g3
    Even(Mat2c::new(c(0.0, 0.0), c(0.0, -1.0), c(0.0, -1.0), c(0.0, 0.0))), // g2g3
    Even(Mat2c::new(c(0.0, 1.0), c(0.0, 0.0), c(0.0, 0.0), c(0.0, 1.0))), // g0g1g2g3
];

pub(crate) const ODD_MASKS: [u64; 8] = [0b0001, 0b0010, 0b0100, 0b0111, 0b1000, 0b1011, 0b1101, 0b1110];
pub(crate) const ODD_BASIS: [Odd; 8] = [
    Odd(Mat2c::new(c(1.0, 0.0), c(0.0, 0.0), c(0.0, 0.0), c(1.0, 0.0))), // g0
    Odd(Mat2c::new(c(0.0, 0.0), c(1.0, 0.0), c(1.0, 0.0), c(0.0, 0.0))), // g1
    Odd(Mat2c::new(c(0.0, 0.0), c(0.0, -1.0), c(0.0, 1.0), c(0.0, 0.0))), // g2
    Odd(Mat2c::new(c(0.0, -1.0), c(0.0, 0.0), c(0.0, 0.0), c(0.0, 1.0))), // g0g1g2
    Odd(Mat2c::new(c(1.0, 0.0), c(0.0, 0.0), c(0.0, 0.0), c(-1.0, 0.0))), // g3
    Odd(Mat2c::new(c(0.0, 0.0), c(1.0, 0.0), c(-1.0, 0.0), c(0.0, 0.0))), // g0g1g3
    Odd(Mat2c::new(c(0.0, 0.0), c(0.0, -1.0), c(0.0, -1.0), c(0.0, 0.0))), // g0g2g3
    Odd(Mat2c::new(c(0.0, -1.0), c(0.0, 0.0), c(0.0, 0.0), c(0.0, -1.0))), // g1g2g3
];

pub const G0: Odd = ODD_BASIS[0];
pub const G1: Odd = ODD_BASIS[1];
pub const G2: Odd = ODD_BASIS[2];
pub const G3: Odd = ODD_BASIS[4];
pub const I4: Even = EVEN_BASIS[7];

const GENS: [&[(u8, f64)]; 4] = [&[(0, 1.0)], &[(4, 1.0)], &[(5, 1.0)], &[(6, 1.0)]];

linear_ops!(Even);
linear_ops!(Odd);
extracted!(Even, 8, EVEN_MASKS, EVEN_BASIS, METRIC);
extracted!(Odd, 8, ODD_MASKS, ODD_BASIS, METRIC);
graded_ops!(Even, 8, EVEN_MASKS, EVEN_BASIS, GEN_NAMES);
graded_ops!(Odd, 8, ODD_MASKS, ODD_BASIS, GEN_NAMES);
embeds!(Even, EVEN_MASKS, &GENS);
embeds!(Odd, ODD_MASKS, &GENS);

impl Even {
    /// Conjugation by the time generator, `g0 M g0`. Fixes blades whose
    /// spatial generator count is even and negates the rest.
    pub fn bar(self) -> Self {
        G0 * self * G0
    }
}

impl Odd {
    /// Conjugation by the time generator, `g0 M g0`.
    pub fn bar(self) -> Self {
        G0 * self * G0
    }
}

impl Mul for Even {
    type Output = Even;
    fn mul(self, rhs: Even) -> Even {
        Even(self.0 * rhs.0)
    }
}

impl Mul<Odd> for Even {
    type Output = Odd;
    fn mul(self, rhs: Odd) -> Odd {
        Odd(self.0 * rhs.0)
    }
}

impl Mul<Even> for Odd {
    type Output = Odd;
    fn mul(self, rhs: Even) -> Odd {
        Odd(self.0 * rhs.0.bar())
    }
}

impl Mul for Odd {
    type Output = Even;
    fn mul(self, rhs: Odd) -> Even {
        Even(self.0 * rhs.0.bar())
    }
}

impl ScalarProduct for Even {
    fn dot(self, rhs: Self) -> f64 {
        self.0.sp(rhs.0)
    }
}

impl ScalarProduct for Odd {
    fn dot(self, rhs: Self) -> f64 {
        self.0.sp(rhs.0.bar())
    }
}

impl Reverse for Even {
    fn rev(self) -> Self {
        Even(self.0.adjugate())
    }
}

impl Reverse for Odd {
    fn rev(self) -> Self {
        Odd(self.0.conj_transpose())
    }
}

impl Identity for Even {
    fn one() -> Self {
        EVEN_BASIS[0]
    }
}

impl From<f64> for Even {
    fn from(value: f64) -> Self {
        Even::one() * value
    }
}

impl From<Odd> for Even {
    fn from(odd: Odd) -> Self {
        Even(odd.0)
    }
}

impl From<Even> for Odd {
    fn from(even: Even) -> Self {
        Odd(even.0)
    }
}

impl Trace for Even {
    fn tr(&self) -> f64 {
        Even::one().dot(*self)
    }
}

impl Trace for Odd {
    fn tr(&self) -> f64 {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graded::grid;

    #[test]
    fn products_match_blade_algebra() {
        grid::check(
            METRIC,
            EVEN_MASKS,
            ODD_MASKS,
            EVEN_BASIS,
            ODD_BASIS,
            |m: Even| m.coefficients(),
            |m: Odd| m.coefficients(),
        );
    }

    #[test]
    fn generator_squares_have_signature_plus_minus_minus_minus() {
        assert_eq!(G0 * G0, Even::from(1.0));
        assert_eq!(G1 * G1, Even::from(-1.0));
        assert_eq!(G2 * G2, Even::from(-1.0));
        assert_eq!(G3 * G3, Even::from(-1.0));
    }

    #[test]
    fn bar_fixes_time_and_negates_space() {
        assert_eq!(G0.bar(), G0);
        assert_eq!(G1.bar(), -G1);
        assert_eq!(G2.bar(), -G2);
        assert_eq!(G3.bar(), -G3);
        let m = Even::from_coefficients([1.0, -2.0, 0.5, 3.0, 0.25, -1.0, 2.0, -0.5]);
        assert_eq!(m.bar().bar(), m);
    }

    #[test]
    fn reversal_is_an_exact_involution() {
        let m = Even::from_coefficients([1.0, -2.0, 0.5, 3.0, 0.25, -1.0, 2.0, -0.5]);
        assert_eq!(m.rev().rev(), m);
        let o = Odd::from_coefficients([1.0, -2.0, 0.5, 3.0, 0.25, -1.0, 2.0, -0.5]);
        assert_eq!(o.rev().rev(), o);
        assert_eq!(G0.rev(), G0);
        assert_eq!(I4.rev(), I4);
    }

    #[test]
    fn reversal_flips_bivectors() {
        for (i, mask) in EVEN_MASKS.into_iter().enumerate() {
            let expected = blades::reverse_sign(blades::grade(mask)).as_f64();
            let c = EVEN_BASIS[i].rev().coefficients();
            for (j, value) in c.into_iter().enumerate() {
                let want = if j == i { expected } else { 0.0 };
                assert!((value - want).abs() < 1e-12);
            }
        }
    }

    #[test]
    fn parity_conversion_squares_to_plus_one() {
        for odd in ODD_BASIS {
            assert_eq!(Odd::from(Even::from(odd)), odd);
        }
    }
}
