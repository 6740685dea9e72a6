use crate::quaternion::Quaternion;
use bytemuck::{Pod, Zeroable};
use num_complex::Complex;
use std::ops::{Add, Mul, Neg, Sub};

pub(crate) const fn c(re: f64, im: f64) -> Complex<f64> {
    Complex::new(re, im)
}

/// 2x2 complex matrix.
#[derive(Copy, Clone, Debug, Default, PartialEq, Pod, Zeroable)]
#[repr(C)]
pub struct Mat2c {
    pub m11: Complex<f64>,
    pub m12: Complex<f64>,
    pub m21: Complex<f64>,
    pub m22: Complex<f64>,
}

impl Mat2c {
    pub const fn new(
        m11: Complex<f64>,
        m12: Complex<f64>,
        m21: Complex<f64>,
        m22: Complex<f64>,
    ) -> Self {
        Mat2c { m11, m12, m21, m22 }
    }

    /// Conjugation by the time generator: `bar(M)` swaps the conjugated
    /// diagonal and negates the conjugated off-diagonal, crosswise.
    pub fn bar(self) -> Self {
        Self::new(
            self.m22.conj(),
            -self.m21.conj(),
            -self.m12.conj(),
            self.m11.conj(),
        )
    }

    /// Adjugate: `M * adj(M) = det(M) * I`.
    pub fn adjugate(self) -> Self {
        Self::new(self.m22, -self.m12, -self.m21, self.m11)
    }

    pub fn conj_transpose(self) -> Self {
        Self::new(
            self.m11.conj(),
            self.m21.conj(),
            self.m12.conj(),
            self.m22.conj(),
        )
    }

    /// Real part of `tr(self * rhs) / 2`.
    pub fn sp(self, rhs: Self) -> f64 {
        (self.m11 * rhs.m11 + self.m12 * rhs.m21 + self.m21 * rhs.m12 + self.m22 * rhs.m22).re
            / 2.0
    }
}

impl Add for Mat2c {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(
            self.m11 + rhs.m11,
            self.m12 + rhs.m12,
            self.m21 + rhs.m21,
            self.m22 + rhs.m22,
        )
    }
}

impl Sub for Mat2c {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(
            self.m11 - rhs.m11,
            self.m12 - rhs.m12,
            self.m21 - rhs.m21,
            self.m22 - rhs.m22,
        )
    }
}

impl Neg for Mat2c {
    type Output = Self;
    fn neg(self) -> Self {
        Self::new(-self.m11, -self.m12, -self.m21, -self.m22)
    }
}

impl Mul<f64> for Mat2c {
    type Output = Self;
    fn mul(self, rhs: f64) -> Self {
        Self::new(
            self.m11 * rhs,
            self.m12 * rhs,
            self.m21 * rhs,
            self.m22 * rhs,
        )
    }
}

impl Mul for Mat2c {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        Self::new(
            self.m11 * rhs.m11 + self.m12 * rhs.m21,
            self.m11 * rhs.m12 + self.m12 * rhs.m22,
            self.m21 * rhs.m11 + self.m22 * rhs.m21,
            self.m21 * rhs.m12 + self.m22 * rhs.m22,
        )
    }
}

/// 2x2 quaternionic matrix.
#[derive(Copy, Clone, Debug, Default, PartialEq, Pod, Zeroable)]
#[repr(C)]
pub struct Mat2q {
    pub m11: Quaternion,
    pub m12: Quaternion,
    pub m21: Quaternion,
    pub m22: Quaternion,
}

impl Mat2q {
    pub const fn new(m11: Quaternion, m12: Quaternion, m21: Quaternion, m22: Quaternion) -> Self {
        Mat2q { m11, m12, m21, m22 }
    }

    /// Entrywise quaternion conjugate, transposed, off-diagonal negated.
    pub fn conj_adjugate(self) -> Self {
        Self::new(
            self.m11.conj(),
            -self.m21.conj(),
            -self.m12.conj(),
            self.m22.conj(),
        )
    }

    /// Scalar part of `tr(self * rhs) / 2`.
    pub fn sp(self, rhs: Self) -> f64 {
        (self.m11.sp(rhs.m11) + self.m12.sp(rhs.m21) + self.m21.sp(rhs.m12) + self.m22.sp(rhs.m22))
            / 2.0
    }
}

impl Add for Mat2q {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(
            self.m11 + rhs.m11,
            self.m12 + rhs.m12,
            self.m21 + rhs.m21,
            self.m22 + rhs.m22,
        )
    }
}

impl Sub for Mat2q {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(
            self.m11 - rhs.m11,
            self.m12 - rhs.m12,
            self.m21 - rhs.m21,
            self.m22 - rhs.m22,
        )
    }
}

impl Neg for Mat2q {
    type Output = Self;
    fn neg(self) -> Self {
        Self::new(-self.m11, -self.m12, -self.m21, -self.m22)
    }
}

impl Mul<f64> for Mat2q {
    type Output = Self;
    fn mul(self, rhs: f64) -> Self {
        Self::new(
            self.m11 * rhs,
            self.m12 * rhs,
            self.m21 * rhs,
            self.m22 * rhs,
        )
    }
}

impl Mul for Mat2q {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        Self::new(
            self.m11 * rhs.m11 + self.m12 * rhs.m21,
            self.m11 * rhs.m12 + self.m12 * rhs.m22,
            self.m21 * rhs.m11 + self.m22 * rhs.m21,
            self.m21 * rhs.m12 + self.m22 * rhs.m22,
        )
    }
}

/// 4x4 real matrix.
#[derive(Copy, Clone, Debug, Default, PartialEq, Pod, Zeroable)]
#[repr(C)]
pub struct Mat4(pub [[f64; 4]; 4]);

impl Mat4 {
    pub const ZERO: Self = Mat4([[0.0; 4]; 4]);

    /// `tr(self * rhs)`.
    pub fn tr_mul(self, rhs: Self) -> f64 {
        let mut sum = 0.0;
        for i in 0..4 {
            for j in 0..4 {
                sum += self.0[i][j] * rhs.0[j][i];
            }
        }
        sum
    }

    /// Conjugation by `diag(1, 1, -1, -1)`.
    pub fn split_conj(self) -> Self {
        const S: [f64; 4] = [1.0, 1.0, -1.0, -1.0];
        let mut out = Mat4::ZERO.0;
        for i in 0..4 {
            for j in 0..4 {
                out[i][j] = S[i] * S[j] * self.0[i][j];
            }
        }
        Mat4(out)
    }

    /// Signed transposition with both indices flipped in their pair,
    /// used by the reversal of the split algebras.
    pub fn rev_map(self, w: [f64; 4]) -> Self {
        let mut out = Mat4::ZERO.0;
        for i in 0..4 {
            for j in 0..4 {
                out[i][j] = w[i] * w[j] * self.0[j ^ 1][i ^ 1];
            }
        }
        Mat4(out)
    }
}

impl Add for Mat4 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        let mut out = self.0;
        for i in 0..4 {
            for j in 0..4 {
                out[i][j] += rhs.0[i][j];
            }
        }
        Mat4(out)
    }
}

impl Sub for Mat4 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        let mut out = self.0;
        for i in 0..4 {
            for j in 0..4 {
                out[i][j] -= rhs.0[i][j];
            }
        }
        Mat4(out)
    }
}

impl Neg for Mat4 {
    type Output = Self;
    fn neg(self) -> Self {
        self * -1.0
    }
}

impl Mul<f64> for Mat4 {
    type Output = Self;
    fn mul(self, rhs: f64) -> Self {
        let mut out = self.0;
        for row in out.iter_mut() {
            for x in row.iter_mut() {
                *x *= rhs;
            }
        }
        Mat4(out)
    }
}

impl Mul for Mat4 {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        let mut out = Mat4::ZERO.0;
        for i in 0..4 {
            for j in 0..4 {
                let mut sum = 0.0;
                for k in 0..4 {
                    sum += self.0[i][k] * rhs.0[k][j];
                }
                out[i][j] = sum;
            }
        }
        Mat4(out)
    }
}

/// Pair of 4x4 real matrices multiplied componentwise.
#[derive(Copy, Clone, Debug, Default, PartialEq, Pod, Zeroable)]
#[repr(C)]
pub struct M4Pair {
    pub a: Mat4,
    pub b: Mat4,
}

impl M4Pair {
    pub const fn new(a: Mat4, b: Mat4) -> Self {
        M4Pair { a, b }
    }

    /// Swaps the components and conjugates each by `diag(1, 1, -1, -1)`.
    pub fn kappa(self) -> Self {
        Self::new(self.b.split_conj(), self.a.split_conj())
    }
}

impl Add for M4Pair {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.a + rhs.a, self.b + rhs.b)
    }
}

impl Sub for M4Pair {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.a - rhs.a, self.b - rhs.b)
    }
}

impl Neg for M4Pair {
    type Output = Self;
    fn neg(self) -> Self {
        Self::new(-self.a, -self.b)
    }
}

impl Mul<f64> for M4Pair {
    type Output = Self;
    fn mul(self, rhs: f64) -> Self {
        Self::new(self.a * rhs, self.b * rhs)
    }
}

impl Mul for M4Pair {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        Self::new(self.a * rhs.a, self.b * rhs.b)
    }
}

/// 4x4 complex matrix.
#[derive(Copy, Clone, Debug, Default, PartialEq, Pod, Zeroable)]
#[repr(C)]
pub struct Mat4c(pub [[Complex<f64>; 4]; 4]);

impl Mat4c {
    pub const ZERO: Self = Mat4c([[c(0.0, 0.0); 4]; 4]);

    /// Real part of `tr(self * rhs)`.
    pub fn tr_mul_re(self, rhs: Self) -> f64 {
        let mut sum = 0.0;
        for i in 0..4 {
            for j in 0..4 {
                sum += (self.0[i][j] * rhs.0[j][i]).re;
            }
        }
        sum
    }

    /// Conjugation by the signed antidiagonal, entrywise
    /// `sigma_i sigma_j conj(m[3-i][3-j])` with `sigma = (-1, 1, -1, 1)`.
    pub fn bar(self) -> Self {
        const SIGMA: [f64; 4] = [-1.0, 1.0, -1.0, 1.0];
        let mut out = Mat4c::ZERO.0;
        for i in 0..4 {
            for j in 0..4 {
                out[i][j] = self.0[3 - i][3 - j].conj() * (SIGMA[i] * SIGMA[j]);
            }
        }
        Mat4c(out)
    }

    /// Conjugate transpose with both indices rotated by two.
    pub fn rev_even(self) -> Self {
        let mut out = Mat4c::ZERO.0;
        for i in 0..4 {
            for j in 0..4 {
                out[i][j] = self.0[(j + 2) % 4][(i + 2) % 4].conj();
            }
        }
        Mat4c(out)
    }

    /// Signed transposition with both indices flipped in their pair.
    pub fn rev_odd(self) -> Self {
        let mut out = Mat4c::ZERO.0;
        for i in 0..4 {
            for j in 0..4 {
                let sign = if (i + j) % 2 == 0 { 1.0 } else { -1.0 };
                out[i][j] = self.0[j ^ 1][i ^ 1] * sign;
            }
        }
        Mat4c(out)
    }
}

impl Add for Mat4c {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        let mut out = self.0;
        for i in 0..4 {
            for j in 0..4 {
                out[i][j] += rhs.0[i][j];
            }
        }
        Mat4c(out)
    }
}

impl Sub for Mat4c {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        let mut out = self.0;
        for i in 0..4 {
            for j in 0..4 {
                out[i][j] -= rhs.0[i][j];
            }
        }
        Mat4c(out)
    }
}

impl Neg for Mat4c {
    type Output = Self;
    fn neg(self) -> Self {
        self * -1.0
    }
}

impl Mul<f64> for Mat4c {
    type Output = Self;
    fn mul(self, rhs: f64) -> Self {
        let mut out = self.0;
        for row in out.iter_mut() {
            for x in row.iter_mut() {
                *x *= rhs;
            }
        }
        Mat4c(out)
    }
}

impl Mul for Mat4c {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        let mut out = Mat4c::ZERO.0;
        for i in 0..4 {
            for j in 0..4 {
                let mut sum = c(0.0, 0.0);
                for k in 0..4 {
                    sum += self.0[i][k] * rhs.0[k][j];
                }
                out[i][j] = sum;
            }
        }
        Mat4c(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bar_is_an_involution() {
        let m = Mat2c::new(c(1.0, 2.0), c(-0.5, 0.25), c(3.0, -1.0), c(0.0, 4.0));
        assert_eq!(m.bar().bar(), m);
    }

    #[test]
    fn adjugate_gives_determinant_times_identity() {
        let m = Mat2c::new(c(1.0, 2.0), c(-0.5, 0.25), c(3.0, -1.0), c(0.0, 4.0));
        let det = m.m11 * m.m22 - m.m12 * m.m21;
        let prod = m * m.adjugate();
        assert_eq!(prod.m11, det);
        assert_eq!(prod.m22, det);
        assert_eq!(prod.m12, c(0.0, 0.0));
        assert_eq!(prod.m21, c(0.0, 0.0));
    }

    #[test]
    fn kappa_is_an_involution() {
        let a = Mat4([
            [1.0, 2.0, 3.0, 4.0],
            [5.0, 6.0, 7.0, 8.0],
            [9.0, 10.0, 11.0, 12.0],
            [13.0, 14.0, 15.0, 16.0],
        ]);
        let b = a * -0.5 + Mat4::ZERO;
        let p = M4Pair::new(a, b);
        assert_eq!(p.kappa().kappa(), p);
    }

    #[test]
    fn tr_mul_matches_product_trace() {
        let a = Mat4([
            [1.0, 2.0, 0.0, -1.0],
            [0.5, -3.0, 1.0, 0.0],
            [2.0, 0.0, 1.0, 1.0],
            [0.0, 1.0, -1.0, 2.0],
        ]);
        let b = a.split_conj();
        let prod = a * b;
        let tr: f64 = (0..4).map(|i| prod.0[i][i]).sum();
        assert_eq!(a.tr_mul(b), tr);
    }

    #[test]
    fn mat4c_bar_is_an_involution() {
        let mut m = Mat4c::ZERO;
        for i in 0..4 {
            for j in 0..4 {
                m.0[i][j] = c((i * 4 + j) as f64, (i as f64) - (j as f64));
            }
        }
        assert_eq!(m.bar().bar(), m);
    }
}
