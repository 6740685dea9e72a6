//! G(4,1): conformal geometric algebra of 3D space. Even multivectors
//! are 2x2 quaternionic matrices; the odd part shares the representation
//! and only differs by a sign in the odd-odd product.

use crate::graded::{embeds, extracted, graded_ops, linear_ops};
use crate::matrix::Mat2q;
use crate::quaternion::Quaternion;
use crate::{Identity, Reverse, ScalarProduct, Trace};
use bytemuck::{Pod, Zeroable};
use std::ops::Mul;

pub(crate) const METRIC: blades::Metric = blades::Metric::diagonal(4, 1, 0);

#[derive(Copy, Clone, Debug, Default, PartialEq, Pod, Zeroable)]
#[repr(C)]
pub struct Even(pub(crate) Mat2q);

#[derive(Copy, Clone, Debug, Default, PartialEq, Pod, Zeroable)]
#[repr(C)]
pub struct Odd(pub(crate) Mat2q);

pub(crate) const GEN_NAMES: [&str; 5] = ["e1", "e2", "e3", "e4", "f4"];

pub(crate) const EVEN_MASKS: [u64; 16] = [0b00000, 0b00011, 0b00101, 0b00110, 0b01001, 0b01010, 0b01100, 0b01111, 0b10001, 0b10010, 0b10100, 0b10111, 0b11000, 0b11011, 0b11101, 0b11110];
pub(crate) const EVEN_BASIS: [Even; 16] = [
    Even(Mat2q::new(Quaternion::new(1.0, 0.0, 0.0, 0.0), Quaternion::new(0.0, 0.0, 0.0, 0.0), Quaternion::new(0.0, 0.0, 0.0, 0.0), Quaternion::new(1.0, 0.0, 0.0, 0.0))), // scalar
    Even(Mat2q::new(Quaternion::new(0.0, 0.0, 0.0, -1.0), Quaternion::new(0.0, 0.0, 0.0, 0.0), Quaternion::new(0.0, 0.0, 0.0, 0.0), Quaternion::new(0.0, 0.0, 0.0, -1.0))), // e1e2
    Even(Mat2q::new(Quaternion::new(0.0, 0.0, 1.0, 0.0), Quaternion::new(0.0, 0.0, 0.0, 0.0), Quaternion::new(0.0, 0.0, 0.0, 0.0), Quaternion::new(0.0, 0.0, 1.0, 0.0))), // e1e3
    Even(Mat2q::new(Quaternion::new(0.0, -1.0, 0.0, 0.0), Quaternion::new(0.0, 0.0, 0.0, 0.0), Quaternion::new(0.0, 0.0, 0.0, 0.0), Quaternion::new(0.0, -1.0, 0.0, 0.0))), // e2e3
    Even(Mat2q::new(Quaternion::new(0.0, 1.0, 0.0, 0.0), Quaternion::new(0.0, 0.0, 0.0, 0.0), Quaternion::new(0.0, 0.0, 0.0, 0.0), Quaternion::new(0.0, -1.0, 0.0, 0.0))), // e1e4
    Even(Mat2q::new(Quaternion::new(0.0, 0.0, 1.0, 0.0), Quaternion::new(0.0, 0.0, 0.0, 0.0), Quaternion::new(0.0, 0.0, 0.0, 0.0), Quaternion::new(0.0, 0.0, -1.0, 0.0))), // e2e4
    Even(Mat2q::new(Quaternion::new(0.0, 0.0, 0.0, 1.0), Quaternion::new(0.0, 0.0, 0.0, 0.0), Quaternion::new(0.0, 0.0, 0.0, 0.0), Quaternion::new(0.0, 0.0, 0.0, -1.0))), // e3e4
    Even(Mat2q::new(Quaternion::new(1.0, 0.0, 0.0, 0.0), Quaternion::new(0.0, 0.0, 0.0, 0.0), Quaternion::new(0.0, 0.0, 0.0, 0.0), Quaternion::new(-1.0, 0.0, 0.0, 0.0))), // e1e2e3e4
    Even(Mat2q::new(Quaternion::new(0.0, 0.0, 0.0, 0.0), Quaternion::new(0.0, 1.0, 0.0, 0.0), Quaternion::new(0.0, -1.0, 0.0, 0.0), Quaternion::new(0.0, 0.0, 0.0, 0.0))), // e1f4
    Even(Mat2q::new(Quaternion::new(0.0, 0.0, 0.0, 0.0), Quaternion::new(0.0, 0.0, 1.0, 0.0), Quaternion::new(0.0, 0.0, -1.0, 0.0), Quaternion::new(0.0, 0.0, 0.0, 0.0))), // e2f4
    Even(Mat2q::new(Quaternion::new(0.0, 0.0, 0.0, 0.0), Quaternion::new(0.0, 0.0, 0.0, 1.0), Quaternion::new(0.0, 0.0, 0.0, -1.0), Quaternion::new(0.0, 0.0, 0.0, 0.0))), // e3f4
    Even(Mat2q::new(Quaternion::new(0.0, 0.0, 0.0, 0.0), Quaternion::new(1.0, 0.0, 0.0, 0.0), Quaternion::new(-1.0, 0.0, 0.0, 0.0), Quaternion::new(0.0, 0.0, 0.0, 0.0))), // e1e2e3f4
    Even(Mat2q::new(Quaternion::new(0.0, 0.0, 0.0, 0.0), Quaternion::new(1.0, 0.0, 0.0, 0.0), Quaternion::new(1.0, 0.0, 0.0, 0.0), Quaternion::new(0.0, 0.0, 0.0, 0.0))), // e4f4
    Even(Mat2q::new(Quaternion::new(0.0, 0.0, 0.0, 0.0), Quaternion::new(0.0, 0.0, 0.0, -1.0), Quaternion::new(0.0, 0.0, 0.0, -1.0), Quaternion::new(0.0, 0.0, 0.0, 0.0))), // e1e2e4f4
    Even(Mat2q::new(Quaternion::new(0.0, 0.0, 0.0, 0.0), Quaternion::new(0.0, 0.0, 1.0, 0.0), Quaternion::new(0.0, 0.0, 1.0, 0.0), Quaternion::new(0.0, 0.0, 0.0, 0.0))), // e1e3e4f4
    Even(Mat2q::new(Quaternion::new(0.0, 0.0, 0.0, 0.0), Quaternion::new(0.0, -1.0, 0.0, 0.0), Quaternion::new(0.0, -1.0, 0.0, 0.0), Quaternion::new(0.0, 0.0, 0.0, 0.0))), // e2e3e4f4
];

pub(crate) const ODD_MASKS: [u64; 16] = [0b00001, 0b00010, 0b00100, 0b00111, 0b01000, 0b01011, 0b01101, 0b01110, 0b10000, 0b10011, 0b10101, 0b10110, 0b11001, 0b11010, 0b11100, 0b11111];
pub(crate) const ODD_BASIS: [Odd; 16] = [
    Odd(Mat2q::new(Quaternion::new(0.0, 0.0, 0.0, 0.0), Quaternion::new(0.0, -1.0, 0.0, 0.0), Quaternion::new(0.0, -1.0, 0.0, 0.0), Quaternion::new(0.0, 0.0, 0.0, 0.0))), // e1
    Odd(Mat2q::new(Quaternion::new(0.0, 0.0, 0.0, 0.0), Quaternion::new(0.0, 0.0, -1.0, 0.0), Quaternion::new(0.0, 0.0, -1.0, 0.0), Quaternion::new(0.0, 0.0, 0.0, 0.0))), // e2
    Odd(Mat2q::new(Quaternion::new(0.0, 0.0, 0.0, 0.0), Quaternion::new(0.0, 0.0, 0.0, -1.0), Quaternion::new(0.0, 0.0, 0.0, -1.0), Quaternion::new(0.0, 0.0, 0.0, 0.0))), // e3
    Odd(Mat2q::new(Quaternion::new(0.0, 0.0, 0.0, 0.0), Quaternion::new(-1.0, 0.0, 0.0, 0.0), Quaternion::new(-1.0, 0.0, 0.0, 0.0), Quaternion::new(0.0, 0.0, 0.0, 0.0))), // e1e2e3
    Odd(Mat2q::new(Quaternion::new(0.0, 0.0, 0.0, 0.0), Quaternion::new(-1.0, 0.0, 0.0, 0.0), Quaternion::new(1.0, 0.0, 0.0, 0.0), Quaternion::new(0.0, 0.0, 0.0, 0.0))), // e4
    Odd(Mat2q::new(Quaternion::new(0.0, 0.0, 0.0, 0.0), Quaternion::new(0.0, 0.0, 0.0, 1.0), Quaternion::new(0.0, 0.0, 0.0, -1.0), Quaternion::new(0.0, 0.0, 0.0, 0.0))), // e1e2e4
    Odd(Mat2q::new(Quaternion::new(0.0, 0.0, 0.0, 0.0), Quaternion::new(0.0, 0.0, -1.0, 0.0), Quaternion::new(0.0, 0.0, 1.0, 0.0), Quaternion::new(0.0, 0.0, 0.0, 0.0))), // e1e3e4
    Odd(Mat2q::new(Quaternion::new(0.0, 0.0, 0.0, 0.0), Quaternion::new(0.0, 1.0, 0.0, 0.0), Quaternion::new(0.0, -1.0, 0.0, 0.0), Quaternion::new(0.0, 0.0, 0.0, 0.0))), // e2e3e4
    Odd(Mat2q::new(Quaternion::new(-1.0, 0.0, 0.0, 0.0), Quaternion::new(0.0, 0.0, 0.0, 0.0), Quaternion::new(0.0, 0.0, 0.0, 0.0), Quaternion::new(1.0, 0.0, 0.0, 0.0))), // f4
    Odd(Mat2q::new(Quaternion::new(0.0, 0.0, 0.0, 1.0), Quaternion::new(0.0, 0.0, 0.0, 0.0), Quaternion::new(0.0, 0.0, 0.0, 0.0), Quaternion::new(0.0, 0.0, 0.0, -1.0))), // e1e2f4
    Odd(Mat2q::new(Quaternion::new(0.0, 0.0, -1.0, 0.0), Quaternion::new(0.0, 0.0, 0.0, 0.0), Quaternion::new(0.0, 0.0, 0.0, 0.0), Quaternion::new(0.0, 0.0, 1.0, 0.0))), // e1e3f4
    Odd(Mat2q::new(Quaternion::new(0.0, 1.0, 0.0, 0.0), Quaternion::new(0.0, 0.0, 0.0, 0.0), Quaternion::new(0.0, 0.0, 0.0, 0.0), Quaternion::new(0.0, -1.0, 0.0, 0.0))), // e2e3f4
    Odd(Mat2q::new(Quaternion::new(0.0, -1.0, 0.0, 0.0), Quaternion::new(0.0, 0.0, 0.0, 0.0), Quaternion::new(0.0, 0.0, 0.0, 0.0), Quaternion::new(0.0, -1.0, 0.0, 0.0))), // e1e4f4
    Odd(Mat2q::new(Quaternion::new(0.0, 0.0, -1.0, 0.0), Quaternion::new(0.0, 0.0, 0.0, 0.0), Quaternion::new(0.0, 0.0, 0.0, 0.0), Quaternion::new(0.0, 0.0, -1.0, 0.0))), // e2e4f4
    Odd(Mat2q::new(Quaternion::new(0.0, 0.0, 0.0, -1.0), Quaternion::new(0.0, 0.0, 0.0, 0.0), Quaternion::new(0.0, 0.0, 0.0, 0.0), Quaternion::new(0.0, 0.0, 0.0, -1.0))), // e3e4f4
    Odd(Mat2q::new(Quaternion::new(-1.0, 0.0, 0.0, 0.0), Quaternion::new(0.0, 0.0, 0.0, 0.0), Quaternion::new(0.0, 0.0, 0.0, 0.0), Quaternion::new(-1.0, 0.0, 0.0, 0.0))), // e1e2e3e4f4
];

pub const E1: Odd = ODD_BASIS[0];
pub const E2: Odd = ODD_BASIS[1];
pub const E3: Odd = ODD_BASIS[2];
pub const E4: Odd = ODD_BASIS[4];
pub const F4: Odd = ODD_BASIS[8];
pub const I5: Odd = ODD_BASIS[15];

const GENS: [&[(u8, f64)]; 5] = [
    &[(0, 1.0)],
    &[(1, 1.0)],
    &[(2, 1.0)],
    &[(3, 1.0)],
    &[(4, 1.0)],
];

linear_ops!(Even);
linear_ops!(Odd);
extracted!(Even, 16, EVEN_MASKS, EVEN_BASIS, METRIC);
extracted!(Odd, 16, ODD_MASKS, ODD_BASIS, METRIC);
graded_ops!(Even, 16, EVEN_MASKS, EVEN_BASIS, GEN_NAMES);
graded_ops!(Odd, 16, ODD_MASKS, ODD_BASIS, GEN_NAMES);
embeds!(Even, EVEN_MASKS, &GENS);
embeds!(Odd, ODD_MASKS, &GENS);

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
        Odd(self.0 * rhs.0)
    }
}

impl Mul for Odd {
    type Output = Even;
    fn mul(self, rhs: Odd) -> Even {
        Even(-(self.0 * rhs.0))
    }
}

impl ScalarProduct for Even {
    fn dot(self, rhs: Self) -> f64 {
        self.0.sp(rhs.0)
    }
}

impl ScalarProduct for Odd {
    fn dot(self, rhs: Self) -> f64 {
        -self.0.sp(rhs.0)
    }
}

impl Reverse for Even {
    fn rev(self) -> Self {
        Even(self.0.conj_adjugate())
    }
}

impl Reverse for Odd {
    fn rev(self) -> Self {
        Odd(self.0.conj_adjugate())
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
        Odd(-even.0)
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
    fn null_points_square_to_zero() {
        // null basis of the conformal split: n = e4 + f4, nbar = f4 - e4
        let n = E4 + F4;
        let nbar = F4 - E4;
        let c = (n * n).coefficients();
        assert!(c.iter().all(|x| x.abs() < 1e-12));
        let inner = n.dot(nbar);
        assert!((inner + 2.0).abs() < 1e-12);
    }

    #[test]
    fn reversal_is_an_exact_involution() {
        let mut coefficients = [0.0; 16];
        for (i, c) in coefficients.iter_mut().enumerate() {
            *c = (i as f64) - 7.5;
        }
        let m = Even::from_coefficients(coefficients);
        assert_eq!(m.rev().rev(), m);
        let o = Odd::from_coefficients(coefficients);
        assert_eq!(o.rev().rev(), o);
        assert_eq!(E1.rev(), E1);
        assert_eq!(I5.rev(), I5);
    }

    #[test]
    fn parity_conversion_squares_to_minus_one() {
        for odd in ODD_BASIS {
            assert_eq!(Odd::from(Even::from(odd)), -odd);
        }
    }
}
