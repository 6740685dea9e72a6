//! Geometric algebra over the reals.
//!
//! Nine low-dimensional signatures get specialized even/odd multivector
//! types backed by their classical isomorphic representations (complex
//! numbers, quaternions, and small matrices), so products are a handful of
//! float ops instead of table walks. Larger signatures fall back to the
//! sparse [`ga44`] and [`ga3232`] multivectors driven by the [`blades`]
//! crate, and [`select`] picks the cheapest algebra covering a requested
//! signature.
//!
//! ```
//! use multor::ga20::{E1, E2};
//! use multor::ScalarProduct;
//!
//! let a = E1 + E2;
//! let b = E1 * 2.0 + E2 * 3.0;
//! assert_eq!(a.dot(b), 5.0);
//! ```

use std::ops::Mul;

mod graded;
mod matrix;
mod quaternion;
mod sparse;

pub mod cga;
pub mod exp;
pub mod ga20;
pub mod ga24;
pub mod ga30;
pub mod ga31;
pub mod ga33;
pub mod ga3232;
pub mod ga40;
pub mod ga44;
pub mod pga;
pub mod select;
pub mod sta;

pub use exp::Exponential;
pub use select::{select, AlgebraId};

/// Coefficients at or below this magnitude are treated as zero.
pub const TOLERANCE: f64 = 1e-14;

/// Threshold below which a term is not printed.
pub const DISPLAY_TOLERANCE: f64 = 1e-10;

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("no specialized algebra covers G({p},{q},{r})")]
    UnsupportedSignature { p: u32, q: u32, r: u32 },
    #[error("multivector is singular within tolerance")]
    Singular,
}

/// Grade projection.
pub trait Project: Sized {
    /// Keeps the grade-`grade` part, zeroing the rest.
    fn project(self, grade: u32) -> Self;
}

/// Scalar (grade-0) part.
pub trait Trace {
    fn tr(&self) -> f64;
}

/// Scalar part of the geometric product.
pub trait ScalarProduct<Rhs = Self> {
    fn dot(self, rhs: Rhs) -> f64;
}

/// Reversal, the anti-automorphism flipping generator order within each
/// blade. An exact involution: `m.rev().rev() == m` bit for bit.
pub trait Reverse {
    fn rev(self) -> Self;
}

/// The multiplicative identity.
pub trait Identity {
    fn one() -> Self;
}

/// Squared Frobenius norm of the underlying representation.
pub trait Norm {
    fn norm2(&self) -> f64;
}

/// Maps a multivector into the common G(4,4) algebra.
pub trait Embed {
    fn embed(self) -> ga44::Multivector;
}

/// Inverse with respect to the geometric product, defined for versors as
/// the reversal scaled by the inverse squared magnitude.
pub trait Inverse: Sized {
    fn inv(self) -> Result<Self, Error>;
}

impl<T> Inverse for T
where
    T: Clone + Reverse + ScalarProduct<T> + Mul<f64, Output = T>,
{
    fn inv(self) -> Result<Self, Error> {
        let rev = self.clone().rev();
        let mag2 = rev.clone().dot(self);
        if mag2.abs() <= TOLERANCE {
            return Err(Error::Singular);
        }
        Ok(rev * (1.0 / mag2))
    }
}
