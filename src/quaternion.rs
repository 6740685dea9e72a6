use bytemuck::{Pod, Zeroable};
use std::ops::{Add, Div, Mul, Neg, Sub};

/// Hamilton quaternion, `w + x i + y j + z k` with `ij = k`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Pod, Zeroable)]
#[repr(C)]
pub struct Quaternion {
    pub w: f64,
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Quaternion {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);
    pub const ONE: Self = Self::new(1.0, 0.0, 0.0, 0.0);

    pub const fn new(w: f64, x: f64, y: f64, z: f64) -> Self {
        Quaternion { w, x, y, z }
    }

    pub const fn conj(self) -> Self {
        Self::new(self.w, -self.x, -self.y, -self.z)
    }

    /// Scalar part of `self * rhs`.
    pub fn sp(self, rhs: Self) -> f64 {
        self.w * rhs.w - self.x * rhs.x - self.y * rhs.y - self.z * rhs.z
    }
}

impl Add for Quaternion {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(
            self.w + rhs.w,
            self.x + rhs.x,
            self.y + rhs.y,
            self.z + rhs.z,
        )
    }
}

impl Sub for Quaternion {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(
            self.w - rhs.w,
            self.x - rhs.x,
            self.y - rhs.y,
            self.z - rhs.z,
        )
    }
}

impl Neg for Quaternion {
    type Output = Self;
    fn neg(self) -> Self {
        Self::new(-self.w, -self.x, -self.y, -self.z)
    }
}

impl Mul<f64> for Quaternion {
    type Output = Self;
    fn mul(self, rhs: f64) -> Self {
        Self::new(self.w * rhs, self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl Div<f64> for Quaternion {
    type Output = Self;
    fn div(self, rhs: f64) -> Self {
        Self::new(self.w / rhs, self.x / rhs, self.y / rhs, self.z / rhs)
    }
}

impl Mul for Quaternion {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        Self::new(
            self.w * rhs.w - self.x * rhs.x - self.y * rhs.y - self.z * rhs.z,
            self.w * rhs.x + self.x * rhs.w + self.y * rhs.z - self.z * rhs.y,
            self.w * rhs.y - self.x * rhs.z + self.y * rhs.w + self.z * rhs.x,
            self.w * rhs.z + self.x * rhs.y - self.y * rhs.x + self.z * rhs.w,
        )
    }
}

/// Pair of quaternions multiplied componentwise, i.e. H x H.
#[derive(Copy, Clone, Debug, Default, PartialEq, Pod, Zeroable)]
#[repr(C)]
pub struct QPair {
    pub p: Quaternion,
    pub m: Quaternion,
}

impl QPair {
    pub const fn new(p: Quaternion, m: Quaternion) -> Self {
        QPair { p, m }
    }

    pub const fn swap(self) -> Self {
        Self::new(self.m, self.p)
    }

    pub const fn conj(self) -> Self {
        Self::new(self.p.conj(), self.m.conj())
    }
}

impl Add for QPair {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.p + rhs.p, self.m + rhs.m)
    }
}

impl Sub for QPair {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.p - rhs.p, self.m - rhs.m)
    }
}

impl Neg for QPair {
    type Output = Self;
    fn neg(self) -> Self {
        Self::new(-self.p, -self.m)
    }
}

impl Mul<f64> for QPair {
    type Output = Self;
    fn mul(self, rhs: f64) -> Self {
        Self::new(self.p * rhs, self.m * rhs)
    }
}

impl Mul for QPair {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        Self::new(self.p * rhs.p, self.m * rhs.m)
    }
}

/// Dual quaternion `q + eps d` with `eps^2 = 0`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Pod, Zeroable)]
#[repr(C)]
pub struct DualQuaternion {
    pub q: Quaternion,
    pub d: Quaternion,
}

impl DualQuaternion {
    pub const fn new(q: Quaternion, d: Quaternion) -> Self {
        DualQuaternion { q, d }
    }

    /// Dual conjugate: negates the dual part only.
    pub fn dual_conj(self) -> Self {
        Self::new(self.q, -self.d)
    }
}

impl Add for DualQuaternion {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.q + rhs.q, self.d + rhs.d)
    }
}

impl Sub for DualQuaternion {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.q - rhs.q, self.d - rhs.d)
    }
}

impl Neg for DualQuaternion {
    type Output = Self;
    fn neg(self) -> Self {
        Self::new(-self.q, -self.d)
    }
}

impl Mul<f64> for DualQuaternion {
    type Output = Self;
    fn mul(self, rhs: f64) -> Self {
        Self::new(self.q * rhs, self.d * rhs)
    }
}

impl Mul for DualQuaternion {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        Self::new(self.q * rhs.q, self.q * rhs.d + self.d * rhs.q)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const I: Quaternion = Quaternion::new(0.0, 1.0, 0.0, 0.0);
    const J: Quaternion = Quaternion::new(0.0, 0.0, 1.0, 0.0);
    const K: Quaternion = Quaternion::new(0.0, 0.0, 0.0, 1.0);

    #[test]
    fn hamilton_products() {
        assert_eq!(I * J, K);
        assert_eq!(J * K, I);
        assert_eq!(K * I, J);
        assert_eq!(I * I, -Quaternion::ONE);
        assert_eq!(J * I, -K);
    }

    #[test]
    fn scalar_part_of_product() {
        let a = Quaternion::new(1.0, 2.0, 3.0, 4.0);
        let b = Quaternion::new(-2.0, 0.5, 1.0, -1.0);
        assert_eq!(a.sp(b), (a * b).w);
    }

    #[test]
    fn dual_parts_nilpotent() {
        let eps = DualQuaternion::new(Quaternion::ZERO, Quaternion::ONE);
        assert_eq!(eps * eps, DualQuaternion::default());
    }
}
