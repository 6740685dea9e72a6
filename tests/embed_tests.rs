//! Embedding each specialized algebra into G(4,4) must be an algebra
//! homomorphism that preserves the scalar product.

use multor::{ga44, Embed, Identity, Norm, ScalarProduct, Trace};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

fn randoms<const N: usize>(rng: &mut SmallRng) -> [f64; N] {
    std::array::from_fn(|_| rng.gen_range(-1.0..1.0))
}

macro_rules! embed_tests {
    ($name:ident, $module:ident, $n:expr) => {
        mod $name {
            use super::*;
            use multor::$module::{Even, Odd};

            #[test]
            fn embedding_preserves_products() {
                let mut rng = SmallRng::seed_from_u64(21);
                for _ in 0..5 {
                    let a = Even::from_coefficients(randoms::<$n>(&mut rng));
                    let b = Odd::from_coefficients(randoms::<$n>(&mut rng));

                    let direct = (a * b).embed();
                    let mapped = a.embed() * b.embed();
                    assert!((direct - mapped).norm2() < 1e-18);

                    let direct = (b * b).embed();
                    let mapped = b.embed() * b.embed();
                    assert!((direct - mapped).norm2() < 1e-18);
                }
            }

            #[test]
            fn embedding_preserves_the_scalar_product() {
                let mut rng = SmallRng::seed_from_u64(22);
                let a = Even::from_coefficients(randoms::<$n>(&mut rng));
                let b = Even::from_coefficients(randoms::<$n>(&mut rng));
                let direct = a.dot(b);
                let mapped = a.embed().dot(b.embed());
                assert!((direct - mapped).abs() < 1e-10);
            }

            #[test]
            fn embedding_preserves_the_trace() {
                let mut rng = SmallRng::seed_from_u64(23);
                let a = Even::from_coefficients(randoms::<$n>(&mut rng));
                assert!((a.tr() - a.embed().tr()).abs() < 1e-12);
            }
        }
    };
}

macro_rules! round_trip_tests {
    ($name:ident, $module:ident, $n:expr) => {
        mod $name {
            use super::*;
            use multor::$module::{Even, Odd};

            // Every blade image has a nonzero self-product, so pairing
            // the embedded element against the embedded basis recovers
            // each coefficient.
            #[test]
            fn embedding_round_trips_through_the_basis() {
                let mut rng = SmallRng::seed_from_u64(31);
                let a = Even::from_coefficients(randoms::<$n>(&mut rng));
                let o = Odd::from_coefficients(randoms::<$n>(&mut rng));
                let even_image = a.embed();
                let odd_image = o.embed();

                let mut unit = [0.0; $n];
                for i in 0..$n {
                    unit[i] = 1.0;
                    let even_blade = Even::from_coefficients(unit).embed();
                    let odd_blade = Odd::from_coefficients(unit).embed();
                    unit[i] = 0.0;

                    let square = even_blade.clone().dot(even_blade.clone());
                    let recovered = even_image.clone().dot(even_blade) / square;
                    assert!((recovered - a.coefficients()[i]).abs() < 1e-9);

                    let square = odd_blade.clone().dot(odd_blade.clone());
                    let recovered = odd_image.clone().dot(odd_blade) / square;
                    assert!((recovered - o.coefficients()[i]).abs() < 1e-9);
                }
            }
        }
    };
}

embed_tests!(ga20, ga20, 2);
embed_tests!(ga30, ga30, 4);
embed_tests!(ga40, ga40, 8);
embed_tests!(sta, sta, 8);
embed_tests!(ga31, ga31, 8);
embed_tests!(pga, pga, 8);
embed_tests!(cga, cga, 16);
embed_tests!(ga33, ga33, 32);
embed_tests!(ga24, ga24, 32);

round_trip_tests!(ga20_round_trip, ga20, 2);
round_trip_tests!(ga30_round_trip, ga30, 4);
round_trip_tests!(ga40_round_trip, ga40, 8);
round_trip_tests!(sta_round_trip, sta, 8);
round_trip_tests!(ga31_round_trip, ga31, 8);
round_trip_tests!(cga_round_trip, cga, 16);
round_trip_tests!(ga33_round_trip, ga33, 32);
round_trip_tests!(ga24_round_trip, ga24, 32);

// G(3,0,1) blades containing e0 embed as null elements, so recovery
// pairs against dual images instead: e0 = e4 - f4 pairs to 1 with
// (e4 + f4) / 2.
#[test]
fn degenerate_embedding_round_trips_through_dual_images() {
    use multor::pga::{Even, Odd};

    const EVEN_MASKS: [u64; 8] = [0b0000, 0b0011, 0b0101, 0b0110, 0b1001, 0b1010, 0b1100, 0b1111];
    const ODD_MASKS: [u64; 8] = [0b0001, 0b0010, 0b0100, 0b0111, 0b1000, 0b1011, 0b1101, 0b1110];

    let dual_blade = |mask: u64| -> ga44::Multivector {
        let mut out = ga44::Multivector::one();
        for bit in 0..4 {
            if mask & (1 << bit) == 0 {
                continue;
            }
            let generator = if bit < 3 {
                ga44::Multivector::new(vec![(1 << bit, 1.0)])
            } else {
                ga44::Multivector::new(vec![(1 << 3, 0.5), (1 << 7, 0.5)])
            };
            out = out * generator;
        }
        out
    };

    let mut rng = SmallRng::seed_from_u64(32);
    let a = Even::from_coefficients(randoms::<8>(&mut rng));
    let o = Odd::from_coefficients(randoms::<8>(&mut rng));
    let even_image = a.embed();
    let odd_image = o.embed();

    let mut unit = [0.0; 8];
    for i in 0..8 {
        unit[i] = 1.0;
        let even_blade = Even::from_coefficients(unit).embed();
        let odd_blade = Odd::from_coefficients(unit).embed();
        unit[i] = 0.0;

        let dual = dual_blade(EVEN_MASKS[i]);
        let pairing = even_blade.dot(dual.clone());
        let recovered = even_image.clone().dot(dual) / pairing;
        assert!((recovered - a.coefficients()[i]).abs() < 1e-9);

        let dual = dual_blade(ODD_MASKS[i]);
        let pairing = odd_blade.dot(dual.clone());
        let recovered = odd_image.clone().dot(dual) / pairing;
        assert!((recovered - o.coefficients()[i]).abs() < 1e-9);
    }
}

#[test]
fn null_generator_squares_to_zero_after_embedding() {
    use multor::pga::E0;
    let image = E0.embed();
    assert_eq!(image.clone() * image, multor::ga44::Multivector::default());
}
