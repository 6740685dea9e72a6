//! G(3,0,1): 3D projective geometric algebra. Even multivectors are dual
//! quaternions, with the null generator `e0` landing in the dual part.
//! The degenerate metric means coefficients cannot be read off through
//! the scalar product, so extraction is spelled out against the stored
//! slots instead.

use crate::graded::{embeds, graded_ops, linear_ops};
use crate::quaternion::{DualQuaternion, Quaternion};
use crate::{Identity, Reverse, ScalarProduct, Trace};
use bytemuck::{Pod, Zeroable};
use std::ops::Mul;

pub(crate) const METRIC: blades::Metric = blades::Metric::diagonal(3, 0, 1);

#[derive(Copy, Clone, Debug, Default, PartialEq, Pod, Zeroable)]
#[repr(C)]
pub struct Even(pub(crate) DualQuaternion);

#[derive(Copy, Clone, Debug, Default, PartialEq, Pod, Zeroable)]
#[repr(C)]
pub struct Odd(pub(crate) DualQuaternion);

pub(crate) const GEN_NAMES: [&str; 4] = ["e1", "e2", "e3", "e0"];

pub(crate) const EVEN_MASKS: [u64; 8] = [0b0000, 0b0011, 0b0101, 0b0110, 0b1001, 0b1010, 0b1100, 0b1111];
pub(crate) const EVEN_BASIS: [Even; 8] = [
    Even(DualQuaternion { q: Quaternion::ONE, d: Quaternion::ZERO }), // scalar
    Even(DualQuaternion { q: Quaternion::new(0.0, 0.0, 0.0, -1.0), d: Quaternion::ZERO }), // e1e2
    Even(DualQuaternion { q: Quaternion::new(0.0, 0.0, 1.0, 0.0), d: Quaternion::ZERO }), // e1e3
    Even(DualQuaternion { q: Quaternion::new(0.0, -1.0, 0.0, 0.0), d: Quaternion::ZERO }), // e2e3
    Even(DualQuaternion { q: Quaternion::ZERO, d: Quaternion::new(0.0, -1.0, 0.0, 0.0) }), // e1e0
    Even(DualQuaternion { q: Quaternion::ZERO, d: Quaternion::new(0.0, 0.0, -1.0, 0.0) }), // e2e0
    Even(DualQuaternion { q: Quaternion::ZERO, d: Quaternion::new(0.0, 0.0, 0.0, -1.0) }), // e3e0
    Even(DualQuaternion { q: Quaternion::ZERO, d: Quaternion::new(-1.0, 0.0, 0.0, 0.0) }), // e1e2e3e0
];

pub(crate) const ODD_MASKS: [u64; 8] = [0b0001, 0b0010, 0b0100, 0b0111, 0b1000, 0b1011, 0b1101, 0b1110];
pub(crate) const ODD_BASIS: [Odd; 8] = [
    Odd(DualQuaternion { q: Quaternion::new(0.0, -1.0, 0.0, 0.0), d: Quaternion::ZERO }), // e1
    Odd(DualQuaternion { q: Quaternion::new(0.0, 0.0, -1.0, 0.0), d: Quaternion::ZERO }), // e2
    Odd(DualQuaternion { q: Quaternion::new(0.0, 0.0, 0.0, -1.0), d: Quaternion::ZERO }), // e3
    Odd(DualQuaternion { q: Quaternion::new(-1.0, 0.0, 0.0, 0.0), d: Quaternion::ZERO }), // e1e2e3
    Odd(DualQuaternion { q: Quaternion::ZERO, d: Quaternion::new(-1.0, 0.0, 0.0, 0.0) }), // e0
    Odd(DualQuaternion { q: Quaternion::ZERO, d: Quaternion::new(0.0, 0.0, 0.0, 1.0) }), // e1e2e0
    Odd(DualQuaternion { q: Quaternion::ZERO, d: Quaternion::new(0.0, 0.0, -1.0, 0.0) }), // e1e3e0
    Odd(DualQuaternion { q: Quaternion::ZERO, d: Quaternion::new(0.0, 1.0, 0.0, 0.0) }), // e2e3e0
];

pub const E1: Odd = ODD_BASIS[0];
pub const E2: Odd = ODD_BASIS[1];
pub const E3: Odd = ODD_BASIS[2];
pub const E0: Odd = ODD_BASIS[4];
pub const E12: Even = EVEN_BASIS[1];
pub const E13: Even = EVEN_BASIS[2];
pub const E23: Even = EVEN_BASIS[3];
pub const E10: Even = EVEN_BASIS[4];
pub const E20: Even = EVEN_BASIS[5];
pub const E30: Even = EVEN_BASIS[6];
pub const I3: Odd = ODD_BASIS[3];
pub const I4: Even = EVEN_BASIS[7];

const GENS: [&[(u8, f64)]; 4] = [
    &[(0, 1.0)],
    &[(1, 1.0)],
    &[(2, 1.0)],
    // e0 squares to zero as the difference of a positive and a negative
    // unit generator
    &[(3, 1.0), (7, -1.0)],
];

// Poincare dual, coefficient i scattering to (index, sign).
const EVEN_DUAL: [(usize, f64); 8] = [
    (7, -1.0),
    (6, -1.0),
    (5, 1.0),
    (4, -1.0),
    (3, -1.0),
    (2, 1.0),
    (1, -1.0),
    (0, -1.0),
];
const ODD_DUAL: [(usize, f64); 8] = [
    (7, -1.0),
    (6, 1.0),
    (5, -1.0),
    (4, -1.0),
    (3, 1.0),
    (2, 1.0),
    (1, -1.0),
    (0, 1.0),
];

linear_ops!(Even);
linear_ops!(Odd);
graded_ops!(Even, 8, EVEN_MASKS, EVEN_BASIS, GEN_NAMES);
graded_ops!(Odd, 8, ODD_MASKS, ODD_BASIS, GEN_NAMES);
embeds!(Even, EVEN_MASKS, &GENS);
embeds!(Odd, ODD_MASKS, &GENS);

impl Even {
    pub fn coefficients(self) -> [f64; 8] {
        let DualQuaternion { q, d } = self.0;
        [q.w, -q.z, q.y, -q.x, -d.x, -d.y, -d.z, -d.w]
    }

    /// Poincare dual, exchanging grade k with grade 4 - k.
    pub fn pdual(self) -> Self {
        let coefficients = self.coefficients();
        let mut out = [0.0; 8];
        for (i, &(index, sign)) in EVEN_DUAL.iter().enumerate() {
            out[index] = sign * coefficients[i];
        }
        Self::from_coefficients(out)
    }
}

impl Odd {
    pub fn coefficients(self) -> [f64; 8] {
        let DualQuaternion { q, d } = self.0;
        [-q.x, -q.y, -q.z, -q.w, -d.w, d.z, -d.y, d.x]
    }

    /// Poincare dual, exchanging grade k with grade 4 - k.
    pub fn pdual(self) -> Self {
        let coefficients = self.coefficients();
        let mut out = [0.0; 8];
        for (i, &(index, sign)) in ODD_DUAL.iter().enumerate() {
            out[index] = sign * coefficients[i];
        }
        Self::from_coefficients(out)
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
        Odd(self.0.dual_conj() * rhs.0)
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
        Even(-(self.0.dual_conj() * rhs.0))
    }
}

impl ScalarProduct for Even {
    fn dot(self, rhs: Self) -> f64 {
        self.0.q.sp(rhs.0.q)
    }
}

impl ScalarProduct for Odd {
    fn dot(self, rhs: Self) -> f64 {
        -self.0.q.sp(rhs.0.q)
    }
}

impl Reverse for Even {
    fn rev(self) -> Self {
        Even(DualQuaternion::new(self.0.q.conj(), self.0.d.conj()))
    }
}

impl Reverse for Odd {
    fn rev(self) -> Self {
        Odd(DualQuaternion::new(-self.0.q.conj(), self.0.d.conj()))
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
        self.0.q.w
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
    use crate::{Error, Inverse, Project};

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
    fn null_generator_squares_to_exactly_zero() {
        assert_eq!(E0 * E0, Even::default());
        assert_eq!((E1 + E0) * (E1 + E0), Even::from(1.0));
    }

    #[test]
    fn dual_of_the_null_generator_is_never_zero() {
        assert_eq!(E0.pdual(), I3);
        // the dual squares to a grade-dependent sign
        assert_eq!(I3.pdual(), -E0);
    }

    #[test]
    fn dual_is_grade_reversing() {
        assert_eq!(Even::from(1.0).pdual().project(4), Even::from(1.0).pdual());
        assert_eq!(E12.pdual().project(2), E12.pdual());
        assert_eq!(E1.pdual().project(3), E1.pdual());
    }

    #[test]
    fn null_generator_is_singular() {
        assert_eq!(E0.inv(), Err(Error::Singular));
        assert!(E1.inv().is_ok());
    }

    #[test]
    fn reversal_is_an_exact_involution() {
        let m = Even::from_coefficients([1.0, -2.0, 0.5, 3.0, 0.25, -1.0, 2.0, -0.5]);
        assert_eq!(m.rev().rev(), m);
        let o = Odd::from_coefficients([1.0, -2.0, 0.5, 3.0, 0.25, -1.0, 2.0, -0.5]);
        assert_eq!(o.rev().rev(), o);
        assert_eq!(E12.rev(), -E12);
        assert_eq!(E10.rev(), -E10);
        assert_eq!(I4.rev(), I4);
    }

    #[test]
    fn parity_conversion_squares_to_minus_one() {
        for odd in ODD_BASIS {
            assert_eq!(Odd::from(Even::from(odd)), -odd);
        }
    }

    #[test]
    fn motor_translates_a_point() {
        // a translator keeps the Euclidean part of a point and adds a
        // dual term
        let motor = Even::from(1.0) - E10;
        let moved = motor * I3 * motor.rev();
        let c = moved.coefficients();
        assert!((c[3] - 1.0).abs() < 1e-12, "{c:?}");
        assert!((c[7] - 2.0).abs() < 1e-12, "{c:?}");
    }
}
