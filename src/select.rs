//! Choosing a specialized algebra for a metric signature.

use crate::Error;
use strum::{Display, EnumIter, IntoEnumIterator};

/// The algebras this crate specializes, plus the two fallbacks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
pub enum AlgebraId {
    #[strum(serialize = "G(2,0)")]
    Ga20,
    #[strum(serialize = "G(3,0)")]
    Ga30,
    #[strum(serialize = "G(4,0)")]
    Ga40,
    #[strum(serialize = "G(1,3)")]
    Sta,
    #[strum(serialize = "G(3,1)")]
    Ga31,
    #[strum(serialize = "G(3,0,1)")]
    Pga,
    #[strum(serialize = "G(4,1)")]
    Cga,
    #[strum(serialize = "G(3,3)")]
    Ga33,
    #[strum(serialize = "G(2,4)")]
    Ga24,
    #[strum(serialize = "G(4,4)")]
    Ga44,
    #[strum(serialize = "G(32,32)")]
    Ga3232,
}

impl AlgebraId {
    /// Signature (p, q, r): positive, negative, and null generators.
    pub const fn signature(self) -> (u32, u32, u32) {
        match self {
            AlgebraId::Ga20 => (2, 0, 0),
            AlgebraId::Ga30 => (3, 0, 0),
            AlgebraId::Ga40 => (4, 0, 0),
            AlgebraId::Sta => (1, 3, 0),
            AlgebraId::Ga31 => (3, 1, 0),
            AlgebraId::Pga => (3, 0, 1),
            AlgebraId::Cga => (4, 1, 0),
            AlgebraId::Ga33 => (3, 3, 0),
            AlgebraId::Ga24 => (2, 4, 0),
            AlgebraId::Ga44 => (4, 4, 0),
            AlgebraId::Ga3232 => (32, 32, 0),
        }
    }

    pub const fn dim(self) -> u32 {
        let (p, q, r) = self.signature();
        p + q + r
    }
}

/// Picks the specialized algebra for a signature, or the smallest one
/// whose signature dominates it componentwise.
pub fn select(p: u32, q: u32, r: u32) -> Result<AlgebraId, Error> {
    if let Some(exact) = AlgebraId::iter().find(|id| id.signature() == (p, q, r)) {
        return Ok(exact);
    }
    AlgebraId::iter()
        .filter(|id| {
            let (sp, sq, sr) = id.signature();
            sp >= p && sq >= q && sr >= r
        })
        .min_by_key(|id| id.dim())
        .ok_or(Error::UnsupportedSignature { p, q, r })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_signatures_select_themselves() {
        for id in AlgebraId::iter() {
            let (p, q, r) = id.signature();
            assert_eq!(select(p, q, r), Ok(id));
        }
    }

    #[test]
    fn smallest_superset_wins() {
        assert_eq!(select(2, 1, 0), Ok(AlgebraId::Ga31));
        assert_eq!(select(1, 0, 0), Ok(AlgebraId::Ga20));
        assert_eq!(select(0, 2, 0), Ok(AlgebraId::Sta));
        assert_eq!(select(2, 0, 1), Ok(AlgebraId::Pga));
    }

    #[test]
    fn oversized_signatures_fail() {
        assert_eq!(
            select(40, 0, 0),
            Err(crate::Error::UnsupportedSignature { p: 40, q: 0, r: 0 })
        );
        assert_eq!(
            select(2, 2, 2),
            Err(crate::Error::UnsupportedSignature { p: 2, q: 2, r: 2 })
        );
    }

    #[test]
    fn names_render() {
        assert_eq!(AlgebraId::Pga.to_string(), "G(3,0,1)");
        assert_eq!(AlgebraId::Sta.to_string(), "G(1,3)");
    }
}
