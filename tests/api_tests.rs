use multor::{ga20, ga3232, ga44, select, AlgebraId, Identity, Norm, ScalarProduct, Trace};

#[test]
fn euclidean_plane_dot_product() {
    assert_eq!(select(2, 0, 0), Ok(AlgebraId::Ga20));
    let a = ga20::E1 + ga20::E2;
    let b = ga20::E1 * 2.0 + ga20::E2 * 3.0;
    assert_eq!(a.dot(b), 5.0);
}

#[test]
fn spacetime_signature_selects_sta() {
    assert_eq!(select(1, 3, 0), Ok(AlgebraId::Sta));
    assert_eq!(AlgebraId::Sta.to_string(), "G(1,3)");
}

#[test]
fn odd_signatures_fall_back_to_split_algebras() {
    assert_eq!(select(4, 2, 0), Ok(AlgebraId::Ga44));
    assert_eq!(select(7, 0, 0), Ok(AlgebraId::Ga3232));
}

#[test]
fn split_algebra_products_expand() {
    let e1 = ga44::Multivector::new(vec![(0b0001, 1.0)]);
    let f1 = ga44::Multivector::new(vec![(0b10000, 1.0)]);
    let bivector = e1.clone() * f1.clone();
    assert_eq!(bivector.coefficient(0b10001), 1.0);
    assert_eq!(f1.clone() * e1, -bivector.clone());
    assert_eq!(bivector.clone().dot(bivector), 1.0);
}

#[test]
fn large_algebra_keeps_high_generators() {
    let g = ga3232::Multivector::new(vec![(1 << 50, 2.0)]);
    assert_eq!(g.clone() * g.clone(), ga3232::Multivector::scalar(4.0));
    assert_eq!(g.norm2(), 4.0);
    assert_eq!(g.to_string(), "2e26");
}

#[test]
fn identities_multiply_as_units() {
    let one = ga44::Multivector::one();
    let m = ga44::Multivector::new(vec![(0b0011, 1.5), (0, -0.5)]);
    assert_eq!(one * m.clone(), m);
    assert_eq!(m.tr(), -0.5);
}
