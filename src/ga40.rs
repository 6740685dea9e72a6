//! G(4,0): 4D Euclidean space. The even subalgebra splits into two
//! commuting copies of the quaternions over the projectors `(1 ± I4)/2`,
//! so even multivectors are quaternion pairs multiplied componentwise.
//! Odd multivectors swap the two halves when multiplied from the right.

use crate::graded::{embeds, extracted, graded_ops, linear_ops};
use crate::quaternion::{QPair, Quaternion};
use crate::{Identity, Reverse, ScalarProduct, Trace};
use bytemuck::{Pod, Zeroable};
use std::ops::Mul;

pub(crate) const METRIC: blades::Metric = blades::Metric::diagonal(4, 0, 0);

#[derive(Copy, Clone, Debug, Default, PartialEq, Pod, Zeroable)]
#[repr(C)]
pub struct Even(pub(crate) QPair);

#[derive(Copy, Clone, Debug, Default, PartialEq, Pod, Zeroable)]
#[repr(C)]
pub struct Odd(pub(crate) QPair);

pub(crate) const GEN_NAMES: [&str; 4] = ["e1", "e2", "e3", "e4"];

pub(crate) const EVEN_MASKS: [u64; 8] = [0b0000, 0b0011, 0b0101, 0b0110, 0b1001, 0b1010, 0b1100, 0b1111];
pub(crate) const EVEN_BASIS: [Even; 8] = [
    Even(QPair { p: Quaternion::new(1.0, 0.0, 0.0, 0.0), m: Quaternion::new(1.0, 0.0, 0.0, 0.0) }), // scalar
    Even(QPair { p: Quaternion::new(0.0, 0.0, 0.0, -1.0), m: Quaternion::new(0.0, 0.0, 0.0, -1.0) }), // e1e2
    Even(QPair { p: Quaternion::new(0.0, 0.0, 1.0, 0.0), m: Quaternion::new(0.0, 0.0, 1.0, 0.0) }), // e1e3
    Even(QPair { p: Quaternion::new(0.0, -1.0, 0.0, 0.0), m: Quaternion::new(0.0, -1.0, 0.0, 0.0) }), // e2e3
    Even(QPair { p: Quaternion::new(0.0, 1.0, 0.0, 0.0), m: Quaternion::new(0.0, -1.0, 0.0, 0.0) }), // e1e4
    Even(QPair { p: Quaternion::new(0.0, 0.0, 1.0, 0.0), m: Quaternion::new(0.0, 0.0, -1.0, 0.0) }), // e2e4
    Even(QPair { p: Quaternion::new(0.0, 0.0, 0.0, 1.0), m: Quaternion::new(0.0, 0.0, 0.0, -1.0) }), // e3e4
    Even(QPair { p: Quaternion::new(1.0, 0.0, 0.0, 0.0), m: Quaternion::new(-1.0, 0.0, 0.0, 0.0) }), // e1e2e3e4
];

pub(crate) const ODD_MASKS: [u64; 8] = [0b0001, 0b0010, 0b0100, 0b0111, 0b1000, 0b1011, 0b1101, 0b1110];
pub(crate) const ODD_BASIS: [Odd; 8] = [
    Odd(QPair { p: Quaternion::new(0.0, 1.0, 0.0, 0.0), m: Quaternion::new(0.0, -1.0, 0.0, 0.0) }), // e1
    Odd(QPair { p: Quaternion::new(0.0, 0.0, 1.0, 0.0), m: Quaternion::new(0.0, 0.0, -1.0, 0.0) }), // e2
    Odd(QPair { p: Quaternion::new(0.0, 0.0, 0.0, 1.0), m: Quaternion::new(0.0, 0.0, 0.0, -1.0) }), // e3
    Odd(QPair { p: Quaternion::new(1.0, 0.0, 0.0, 0.0), m: Quaternion::new(-1.0, 0.0, 0.0, 0.0) }), // e1e2e3
    Odd(QPair { p: Quaternion::new(1.0, 0.0, 0.0, 0.0), m: Quaternion::new(1.0, 0.0, 0.0, 0.0) }), // e4
    Odd(QPair { p: Quaternion::new(0.0, 0.0, 0.0, -1.0), m: Quaternion::new(0.0, 0.0, 0.0, -1.0) }), // e1e2e4
    Odd(QPair { p: Quaternion::new(0.0, 0.0, 1.0, 0.0), m: Quaternion::new(0.0, 0.0, 1.0, 0.0) }), // e1e3e4
    Odd(QPair { p: Quaternion::new(0.0, -1.0, 0.0, 0.0), m: Quaternion::new(0.0, -1.0, 0.0, 0.0) }), // e2e3e4
];

pub const E1: Odd = ODD_BASIS[0];
pub const E2: Odd = ODD_BASIS[1];
pub const E3: Odd = ODD_BASIS[2];
pub const E4: Odd = ODD_BASIS[4];
pub const E12: Even = EVEN_BASIS[1];
pub const E13: Even = EVEN_BASIS[2];
pub const E23: Even = EVEN_BASIS[3];
pub const E14: Even = EVEN_BASIS[4];
pub const E24: Even = EVEN_BASIS[5];
pub const E34: Even = EVEN_BASIS[6];
pub const I4: Even = EVEN_BASIS[7];

const GENS: [&[(u8, f64)]; 4] = [&[(0, 1.0)], &[(1, 1.0)], &[(2, 1.0)], &[(3, 1.0)]];

linear_ops!(Even);
linear_ops!(Odd);
extracted!(Even, 8, EVEN_MASKS, EVEN_BASIS, METRIC);
extracted!(Odd, 8, ODD_MASKS, ODD_BASIS, METRIC);
graded_ops!(Even, 8, EVEN_MASKS, EVEN_BASIS, GEN_NAMES);
graded_ops!(Odd, 8, ODD_MASKS, ODD_BASIS, GEN_NAMES);
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
        Odd(self.0 * rhs.0.swap())
    }
}

impl Mul for Odd {
    type Output = Even;
    fn mul(self, rhs: Odd) -> Even {
        Even(self.0 * rhs.0.swap())
    }
}

impl ScalarProduct for Even {
    fn dot(self, rhs: Self) -> f64 {
        (self.0.p.sp(rhs.0.p) + self.0.m.sp(rhs.0.m)) / 2.0
    }
}

impl ScalarProduct for Odd {
    fn dot(self, rhs: Self) -> f64 {
        (self.0.p.sp(rhs.0.m) + self.0.m.sp(rhs.0.p)) / 2.0
    }
}

impl Reverse for Even {
    fn rev(self) -> Self {
        Even(self.0.conj())
    }
}

impl Reverse for Odd {
    fn rev(self) -> Self {
        Odd(self.0.swap().conj())
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
    fn pseudoscalar_squares_to_plus_one_and_anticommutes_with_odd() {
        assert_eq!(I4 * I4, Even::from(1.0));
        for odd in ODD_BASIS {
            assert_eq!(I4 * odd, -(odd * I4));
        }
    }

    #[test]
    fn reversal_is_an_exact_involution() {
        let m = Even::from_coefficients([1.0, -2.0, 0.5, 3.0, 0.25, -1.0, 2.0, -0.5]);
        assert_eq!(m.rev().rev(), m);
        let o = Odd::from_coefficients([1.0, -2.0, 0.5, 3.0, 0.25, -1.0, 2.0, -0.5]);
        assert_eq!(o.rev().rev(), o);
        assert_eq!(E12.rev(), -E12);
        assert_eq!(I4.rev(), I4);
        assert_eq!(E1.rev(), E1);
    }

    #[test]
    fn parity_conversion_squares_to_plus_one() {
        for odd in ODD_BASIS {
            assert_eq!(Odd::from(Even::from(odd)), odd);
        }
    }
}
