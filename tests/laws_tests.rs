//! Algebra laws checked over random multivectors for every specialized
//! signature, mixing both parities.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

fn randoms<const N: usize>(rng: &mut SmallRng) -> [f64; N] {
    std::array::from_fn(|_| rng.gen_range(-1.0..1.0))
}

macro_rules! law_tests {
    ($name:ident, $module:ident, $n:expr, $dim:expr) => {
        mod $name {
            use super::randoms;
            use multor::$module::{Even, Odd};
            use multor::{Norm, Project, Reverse, ScalarProduct, Trace};
            use rand::rngs::SmallRng;
            use rand::SeedableRng;

            #[test]
            fn product_is_associative() {
                let mut rng = SmallRng::seed_from_u64(11);
                for _ in 0..20 {
                    let e = Even::from_coefficients(randoms::<$n>(&mut rng));
                    let a = Odd::from_coefficients(randoms::<$n>(&mut rng));
                    let b = Odd::from_coefficients(randoms::<$n>(&mut rng));
                    let left = (e * a) * b;
                    let right = e * (a * b);
                    assert!((left - right).norm2() < 1e-18);
                }
            }

            #[test]
            fn reversal_is_an_exact_involution() {
                let mut rng = SmallRng::seed_from_u64(12);
                let e = Even::from_coefficients(randoms::<$n>(&mut rng));
                let o = Odd::from_coefficients(randoms::<$n>(&mut rng));
                assert_eq!(e.rev().rev(), e);
                assert_eq!(o.rev().rev(), o);
            }

            #[test]
            fn reversal_reverses_products() {
                let mut rng = SmallRng::seed_from_u64(13);
                for _ in 0..20 {
                    let a = Even::from_coefficients(randoms::<$n>(&mut rng));
                    let b = Odd::from_coefficients(randoms::<$n>(&mut rng));
                    assert!(((a * b).rev() - b.rev() * a.rev()).norm2() < 1e-20);
                    assert!(((b * a).rev() - a.rev() * b.rev()).norm2() < 1e-20);
                }
            }

            #[test]
            fn scalar_product_is_the_trace_of_the_product() {
                let mut rng = SmallRng::seed_from_u64(14);
                for _ in 0..20 {
                    let a = Even::from_coefficients(randoms::<$n>(&mut rng));
                    let b = Even::from_coefficients(randoms::<$n>(&mut rng));
                    assert!((a.dot(b) - (a * b).tr()).abs() < 1e-10);

                    let a = Odd::from_coefficients(randoms::<$n>(&mut rng));
                    let b = Odd::from_coefficients(randoms::<$n>(&mut rng));
                    assert!((a.dot(b) - (a * b).tr()).abs() < 1e-10);
                }
            }

            #[test]
            fn projection_is_idempotent_and_complete() {
                let mut rng = SmallRng::seed_from_u64(15);
                let a = Even::from_coefficients(randoms::<$n>(&mut rng));
                let mut sum = Even::default();
                for grade in 0..=$dim {
                    let part = a.project(grade);
                    assert!((part.project(grade) - part).norm2() < 1e-24);
                    sum = sum + part;
                }
                assert!((sum - a).norm2() < 1e-22);
            }
        }
    };
}

law_tests!(ga20, ga20, 2, 2);
law_tests!(ga30, ga30, 4, 3);
law_tests!(ga40, ga40, 8, 4);
law_tests!(sta, sta, 8, 4);
law_tests!(ga31, ga31, 8, 4);
law_tests!(pga, pga, 8, 4);
law_tests!(cga, cga, 16, 5);
law_tests!(ga33, ga33, 32, 6);
law_tests!(ga24, ga24, 32, 6);
