//! G(3,0): 3D Euclidean space. Even multivectors are quaternions with the
//! bivectors mapped to `-i`, `-j`, `-k`; odd multivectors are stored
//! through the pseudoscalar, which commutes with everything and squares
//! to -1.

use crate::graded::{embeds, extracted, graded_ops, linear_ops};
use crate::quaternion::Quaternion;
use crate::{Identity, Reverse, ScalarProduct, Trace};
use bytemuck::{Pod, Zeroable};
use std::ops::Mul;

pub(crate) const METRIC: blades::Metric = blades::Metric::diagonal(3, 0, 0);

#[derive(Copy, Clone, Debug, Default, PartialEq, Pod, Zeroable)]
#[repr(C)]
pub struct Even(pub(crate) Quaternion);

#[derive(Copy, Clone, Debug, Default, PartialEq, Pod, Zeroable)]
#[repr(C)]
pub struct Odd(pub(crate) Quaternion);

pub(crate) const GEN_NAMES: [&str; 3] = ["e1", "e2", "e3"];

pub(crate) const EVEN_MASKS: [u64; 4] = [0b000, 0b011, 0b101, 0b110];
pub(crate) const EVEN_BASIS: [Even; 4] = [
    Even(Quaternion::new(1.0, 0.0, 0.0, 0.0)), // scalar
    Even(Quaternion::new(0.0, 0.0, 0.0, -1.0)), // e1e2
    Even(Quaternion::new(0.0, 0.0, 1.0, 0.0)), // e1e3
    Even(Quaternion::new(0.0, -1.0, 0.0, 0.0)), // e2e3
];

pub(crate) const ODD_MASKS: [u64; 4] = [0b001, 0b010, 0b100, 0b111];
pub(crate) const ODD_BASIS: [Odd; 4] = [
    Odd(Quaternion::new(0.0, -1.0, 0.0, 0.0)), // e1
    Odd(Quaternion::new(0.0, 0.0, -1.0, 0.0)), // e2
    Odd(Quaternion::new(0.0, 0.0, 0.0, -1.0)), // e3
    Odd(Quaternion::new(-1.0, 0.0, 0.0, 0.0)), // e1e2e3
];

pub const E1: Odd = ODD_BASIS[0];
pub const E2: Odd = ODD_BASIS[1];
pub const E3: Odd = ODD_BASIS[2];
pub const E12: Even = EVEN_BASIS[1];
pub const E13: Even = EVEN_BASIS[2];
pub const E23: Even = EVEN_BASIS[3];
pub const I3: Odd = ODD_BASIS[3];

const GENS: [&[(u8, f64)]; 3] = [&[(0, 1.0)], &[(1, 1.0)], &[(2, 1.0)]];

linear_ops!(Even);
linear_ops!(Odd);
extracted!(Even, 4, EVEN_MASKS, EVEN_BASIS, METRIC);
extracted!(Odd, 4, ODD_MASKS, ODD_BASIS, METRIC);
graded_ops!(Even, 4, EVEN_MASKS, EVEN_BASIS, GEN_NAMES);
graded_ops!(Odd, 4, ODD_MASKS, ODD_BASIS, GEN_NAMES);
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
        Even(self.0.conj())
    }
}

impl Reverse for Odd {
    fn rev(self) -> Self {
        Odd(-self.0.conj())
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
