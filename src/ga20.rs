//! G(2,0): the Euclidean plane. Even multivectors are complex numbers
//! with `e1e2` as the imaginary unit, odd multivectors are vectors stored
//! through the same representation.

use crate::graded::{embeds, extracted, graded_ops, linear_ops};
use crate::matrix::c;
use crate::{Identity, Reverse, ScalarProduct, Trace};
use bytemuck::{Pod, Zeroable};
use num_complex::Complex;
use std::ops::{Div, Mul};

pub(crate) const METRIC: blades::Metric = blades::Metric::diagonal(2, 0, 0);

#[derive(Copy, Clone, Debug, Default, PartialEq, Pod, Zeroable)]
#[repr(C)]
pub struct Even(pub(crate) Complex<f64>);

#[derive(Copy, Clone, Debug, Default, PartialEq, Pod, Zeroable)]
#[repr(C)]
pub struct Odd(pub(crate) Complex<f64>);

pub(crate) const GEN_NAMES: [&str; 2] = ["e1", "e2"];

pub(crate) const EVEN_MASKS: [u64; 2] = [0b00, 0b11];
pub(crate) const EVEN_BASIS: [Even; 2] = [
    Even(c(1.0, 0.0)), // scalar
    Even(c(0.0, 1.0)), // e1e2
];

pub(crate) const ODD_MASKS: [u64; 2] = [0b01, 0b10];
pub(crate) const ODD_BASIS: [Odd; 2] = [
    Odd(c(1.0, 0.0)), // e1
    Odd(c(0.0, 1.0)), // e2
];

pub const E1: Odd = ODD_BASIS[0];
pub const E2: Odd = ODD_BASIS[1];
pub const I2: Even = EVEN_BASIS[1];

const GENS: [&[(u8, f64)]; 2] = [&[(0, 1.0)], &[(1, 1.0)]];

linear_ops!(Even);
linear_ops!(Odd);
extracted!(Even, 2, EVEN_MASKS, EVEN_BASIS, METRIC);
extracted!(Odd, 2, ODD_MASKS, ODD_BASIS, METRIC);
graded_ops!(Even, 2, EVEN_MASKS, EVEN_BASIS, GEN_NAMES);
graded_ops!(Odd, 2, ODD_MASKS, ODD_BASIS, GEN_NAMES);
embeds!(Even, EVEN_MASKS, &GENS);
embeds!(Odd, ODD_MASKS, &GENS);

impl Even {
    pub fn real(self) -> f64 {
        self.0.re
    }

    pub fn imag(self) -> f64 {
        self.0.im
    }

    /// Principal branch of the complex logarithm.
    pub fn log(self) -> Self {
        Even(self.0.ln())
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
        Odd(self.0.conj() * rhs.0)
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
        Even(self.0.conj() * rhs.0)
    }
}

impl Div for Even {
    type Output = Even;
    fn div(self, rhs: Even) -> Even {
        Even(self.0 / rhs.0)
    }
}

impl ScalarProduct for Even {
    fn dot(self, rhs: Self) -> f64 {
        self.0.re * rhs.0.re - self.0.im * rhs.0.im
    }
}

impl ScalarProduct for Odd {
    fn dot(self, rhs: Self) -> f64 {
        self.0.re * rhs.0.re + self.0.im * rhs.0.im
    }
}

impl Reverse for Even {
    fn rev(self) -> Self {
        Even(self.0.conj())
    }
}

impl Reverse for Odd {
    fn rev(self) -> Self {
        self
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
    fn vector_product_splits_into_dot_and_wedge() {
        let a = E1 + E2;
        let b = E1 * 2.0 + E2 * 3.0;
        let product = a * b;
        assert_eq!(product, Even::from(5.0) + I2);
        assert_eq!(product.tr(), 5.0);
        assert_eq!(a.dot(b), 5.0);
    }

    #[test]
    fn reversal_is_an_exact_involution() {
        let m = Even::from_coefficients([0.3, -1.7]);
        assert_eq!(m.rev().rev(), m);
        assert_eq!(I2.rev(), -I2);
        assert_eq!(E1.rev(), E1);
    }

    #[test]
    fn parity_conversion_squares_to_plus_one() {
        for odd in ODD_BASIS {
            assert_eq!(Odd::from(Even::from(odd)), odd);
        }
    }

    #[test]
    fn division_inverts_rotors() {
        let rotor = Even::from_coefficients([0.6, 0.8]);
        let quotient = Even::one() / rotor;
        let product = rotor * quotient;
        assert!((product - Even::one()).0.norm() < 1e-12);
    }

    #[test]
    fn log_recovers_the_rotation_angle() {
        let angle = 0.7f64;
        let rotor = Even::from_coefficients([angle.cos(), angle.sin()]);
        assert!((rotor.log().imag() - angle).abs() < 1e-12);
        assert!(rotor.log().real().abs() < 1e-12);
    }

    #[test]
    fn display_drops_unit_magnitudes() {
        assert_eq!((Even::from(5.0) + I2).to_string(), "5 + e1e2");
        assert_eq!((E1 - E2 * 2.0).to_string(), "e1 - 2e2");
        assert_eq!(Even::default().to_string(), "0");
    }
}
