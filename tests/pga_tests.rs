//! Projective geometry in G(3,0,1): motors, duals, and the degenerate
//! generator, through the public API.

use multor::pga::*;
use multor::{Error, Exponential, Inverse, Norm, Reverse};

#[test]
fn degenerate_generator_is_exactly_null() {
    assert_eq!(E0 * E0, Even::default());
    assert_eq!(E0.inv(), Err(Error::Singular));
}

#[test]
fn rotor_inverse_is_its_reversal() {
    let theta = 0.4;
    let rotor = (E12 * (-theta / 2.0)).bivector_exp();
    let inv = rotor.inv().unwrap();
    assert!((inv - rotor.rev()).norm2() < 1e-24);
    assert!((rotor * inv - Even::from(1.0)).norm2() < 1e-24);
}

#[test]
fn rotor_rotates_a_plane() {
    let theta = std::f64::consts::FRAC_PI_2;
    let rotor = (E12 * (-theta / 2.0)).bivector_exp();
    let rotated = rotor * E1 * rotor.rev();
    let c = rotated.coefficients();
    assert!(c[0].abs() < 1e-12, "{c:?}");
    assert!((c[1] - 1.0).abs() < 1e-12, "{c:?}");
}

#[test]
fn translator_moves_the_origin() {
    // The origin is the pseudoscalar point e1e2e3; translating along e1
    // by d adds d to its e2e3e0 component.
    let d = 2.5;
    let translator = (E10 * (-d / 2.0)).bivector_exp();
    let moved = translator * I3 * translator.rev();
    let c = moved.coefficients();
    assert!((c[3] - 1.0).abs() < 1e-12, "{c:?}");
    assert!((c[7] - d).abs() < 1e-12, "{c:?}");
}

#[test]
fn translators_compose_additively() {
    let t1 = (E10 * -0.5).bivector_exp();
    let t2 = (E10 * -1.0).bivector_exp();
    let composed = t1 * t2;
    let direct = (E10 * -1.5).bivector_exp();
    assert!((composed - direct).norm2() < 1e-24);
}

#[test]
fn projective_dual_swaps_the_degenerate_direction() {
    assert_eq!(E0.pdual(), I3);
    assert_eq!(I3.pdual(), -E0);
    assert_eq!(E12.pdual(), -E30);
}

#[test]
fn projective_dual_is_linear() {
    let a = Even::from_coefficients([1.0, 2.0, -0.5, 0.0, 3.0, 0.0, 0.0, 1.5]);
    let b = Even::from_coefficients([0.5, -1.0, 0.0, 2.0, 0.0, 1.0, -2.0, 0.0]);
    let summed = (a + b).pdual();
    let mapped = a.pdual() + b.pdual();
    assert_eq!(summed.coefficients(), mapped.coefficients());
}
