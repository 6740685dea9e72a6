//! Basis blade arithmetic for real Clifford algebras.
//!
//! A blade is a `u64` bitmask over up to 64 generators, bit `i` standing for
//! the generator `e_{i+1}`. Products, grades, and involution signs are all
//! `const fn` over those masks so specialized algebras can build their tables
//! at compile time.

/// Sign of a blade product.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Sign {
    Pos,
    Neg,
    Zero,
}

impl Sign {
    pub const fn flip(self) -> Self {
        match self {
            Sign::Pos => Sign::Neg,
            Sign::Neg => Sign::Pos,
            Sign::Zero => Sign::Zero,
        }
    }

    pub const fn as_f64(self) -> f64 {
        match self {
            Sign::Pos => 1.0,
            Sign::Neg => -1.0,
            Sign::Zero => 0.0,
        }
    }
}

impl std::ops::Mul for Sign {
    type Output = Sign;
    fn mul(self, rhs: Sign) -> Sign {
        match (self, rhs) {
            (Sign::Zero, _) | (_, Sign::Zero) => Sign::Zero,
            (Sign::Pos, s) => s,
            (Sign::Neg, s) => s.flip(),
        }
    }
}

/// Diagonal metric: which generators square to -1, and which to 0.
/// Generators outside both masks square to +1.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Metric {
    neg: u64,
    null: u64,
}

const fn mask_range(start: u32, len: u32) -> u64 {
    if len == 0 {
        0
    } else {
        (!0u64 >> (64 - len)) << start
    }
}

impl Metric {
    /// Signature G(p, q, r): `p` positive generators first, then `q`
    /// negative, then `r` null.
    pub const fn diagonal(p: u32, q: u32, r: u32) -> Self {
        Metric {
            neg: mask_range(p, q),
            null: mask_range(p + q, r),
        }
    }

    /// `pairs` split-signature generators, alternating +, -, +, -, ...
    /// so that bit `2i` is positive and bit `2i + 1` is negative.
    pub const fn interleaved(pairs: u32) -> Self {
        let mut neg = 0u64;
        let mut i = 0;
        while i < pairs {
            neg |= 1 << (2 * i + 1);
            i += 1;
        }
        Metric { neg, null: 0 }
    }

    /// Metric straight from the sign masks, for generator orders that are
    /// not sorted by square.
    pub const fn from_masks(neg: u64, null: u64) -> Self {
        Metric { neg, null }
    }

    /// Square of generator `i`.
    pub const fn square(self, i: u32) -> Sign {
        if self.null >> i & 1 == 1 {
            Sign::Zero
        } else if self.neg >> i & 1 == 1 {
            Sign::Neg
        } else {
            Sign::Pos
        }
    }
}

/// Geometric product of two basis blades: the result mask is `a ^ b`, and
/// the sign counts the transpositions needed to sort the concatenated
/// generators plus the metric squares of the shared ones.
pub const fn product(metric: Metric, a: u64, b: u64) -> (u64, Sign) {
    if a & b & metric.null != 0 {
        return (0, Sign::Zero);
    }

    let mut sign = Sign::Pos;
    let mut i = 0;
    while i < 64 {
        if b >> i & 1 == 1 {
            // generators of `a` above bit i must commute past b's generator
            if (a >> i >> 1).count_ones() & 1 == 1 {
                sign = sign.flip();
            }
        }
        i += 1;
    }

    let mut shared = a & b;
    while shared != 0 {
        let i = shared.trailing_zeros();
        match metric.square(i) {
            Sign::Neg => sign = sign.flip(),
            Sign::Zero => return (0, Sign::Zero),
            Sign::Pos => {}
        }
        shared &= shared - 1;
    }

    (a ^ b, sign)
}

pub const fn grade(mask: u64) -> u32 {
    mask.count_ones()
}

/// Sign picked up by reversing a grade-k blade: (-1)^(k(k-1)/2).
pub const fn reverse_sign(grade: u32) -> Sign {
    if matches!(grade % 4, 2 | 3) {
        Sign::Neg
    } else {
        Sign::Pos
    }
}

/// Sign under the grade involution: (-1)^k.
pub const fn involution_sign(grade: u32) -> Sign {
    if grade % 2 == 1 {
        Sign::Neg
    } else {
        Sign::Pos
    }
}

/// Highest-grade blade of a `dim`-generator algebra.
pub const fn pseudoscalar(dim: u32) -> u64 {
    mask_range(0, dim)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::prelude::*;

    const EUCLIDEAN_3: Metric = Metric::diagonal(3, 0, 0);
    const SPACETIME: Metric = Metric::diagonal(1, 3, 0);
    const PROJECTIVE: Metric = Metric::diagonal(3, 0, 1);

    #[test]
    fn generators_anticommute() {
        let (e12, s12) = product(EUCLIDEAN_3, 0b001, 0b010);
        let (e21, s21) = product(EUCLIDEAN_3, 0b010, 0b001);
        assert_eq!(e12, 0b011);
        assert_eq!(e21, 0b011);
        assert_eq!(s12, Sign::Pos);
        assert_eq!(s21, Sign::Neg);
    }

    #[test]
    fn generator_squares_follow_the_metric() {
        assert_eq!(product(EUCLIDEAN_3, 0b001, 0b001), (0, Sign::Pos));
        assert_eq!(product(SPACETIME, 0b0010, 0b0010), (0, Sign::Neg));
        assert_eq!(product(PROJECTIVE, 0b1000, 0b1000), (0, Sign::Zero));
    }

    #[test]
    fn null_generator_annihilates_shared_blades() {
        assert_eq!(product(PROJECTIVE, 0b1001, 0b1010), (0, Sign::Zero));
        let (mask, sign) = product(PROJECTIVE, 0b1001, 0b0010);
        assert_eq!(mask, 0b1011);
        assert_ne!(sign, Sign::Zero);
    }

    #[test]
    fn interleaved_alternates_squares() {
        let m = Metric::interleaved(3);
        assert_eq!(m.square(0), Sign::Pos);
        assert_eq!(m.square(1), Sign::Neg);
        assert_eq!(m.square(4), Sign::Pos);
        assert_eq!(m.square(5), Sign::Neg);
    }

    #[test]
    fn product_is_associative() {
        let metric = Metric::diagonal(2, 3, 1);
        let mut rng = SmallRng::seed_from_u64(7);
        for _ in 0..1000 {
            let a = rng.gen_range(0..64u64);
            let b = rng.gen_range(0..64u64);
            let c = rng.gen_range(0..64u64);
            let (ab, s_ab) = product(metric, a, b);
            let (bc, s_bc) = product(metric, b, c);
            let left = product(metric, ab, c);
            let right = product(metric, a, bc);
            let left_sign = s_ab * left.1;
            let right_sign = s_bc * right.1;
            assert_eq!(left_sign, right_sign, "({a:b})({b:b})({c:b})");
            if left_sign != Sign::Zero {
                assert_eq!(left.0, right.0);
            }
        }
    }

    #[test]
    fn reverse_sign_period() {
        assert_eq!(reverse_sign(0), Sign::Pos);
        assert_eq!(reverse_sign(1), Sign::Pos);
        assert_eq!(reverse_sign(2), Sign::Neg);
        assert_eq!(reverse_sign(3), Sign::Neg);
        assert_eq!(reverse_sign(4), Sign::Pos);
        assert_eq!(reverse_sign(5), Sign::Pos);
    }

    #[test]
    fn involution_sign_alternates() {
        assert_eq!(involution_sign(0), Sign::Pos);
        assert_eq!(involution_sign(1), Sign::Neg);
        assert_eq!(involution_sign(2), Sign::Pos);
    }

    #[test]
    fn pseudoscalar_mask() {
        assert_eq!(pseudoscalar(3), 0b111);
        assert_eq!(pseudoscalar(0), 0);
        assert_eq!(grade(pseudoscalar(6)), 6);
    }

    #[test]
    fn reversal_matches_blade_by_blade_transposition() {
        let metric = Metric::diagonal(4, 2, 0);
        for mask in 0..64u64 {
            // reverse by multiplying the generators back in reverse order
            let mut acc = 0u64;
            let mut sign = Sign::Pos;
            let mut bit = 63i32;
            while bit >= 0 {
                if mask >> bit & 1 == 1 {
                    let (next, s) = product(metric, acc, 1 << bit);
                    acc = next;
                    sign = sign * s;
                }
                bit -= 1;
            }
            assert_eq!(acc, mask);
            assert_eq!(sign, reverse_sign(grade(mask)));
        }
    }
}
