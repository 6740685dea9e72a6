//! G(2,4): the conformal spacetime algebra. Even multivectors are 4x4
//! complex matrices; odd products thread through conjugation by the
//! signed antidiagonal. Generators are ordered `g0..g5` with `g0` and
//! `g5` squaring to +1.

use crate::graded::{embeds, extracted, graded_ops, linear_ops};
use crate::matrix::{c, Mat4c};
use crate::{Identity, Reverse, ScalarProduct, Trace};
use bytemuck::{Pod, Zeroable};
use std::ops::Mul;

pub(crate) const METRIC: blades::Metric = blades::Metric::from_masks(0b011110, 0);

#[derive(Copy, Clone, Debug, Default, PartialEq, Pod, Zeroable)]
#[repr(C)]
pub struct Even(pub(crate) Mat4c);

#[derive(Copy, Clone, Debug, Default, PartialEq, Pod, Zeroable)]
#[repr(C)]
pub struct Odd(pub(crate) Mat4c);

pub(crate) const GEN_NAMES: [&str; 6] = ["g0", "g1", "g2", "g3", "g4", "g5"];

pub(crate) const EVEN_MASKS: [u64; 32] = [0b000000, 0b000011, 0b000101, 0b000110, 0b001001, 0b001010, 0b001100, 0b001111, 0b010001, 0b010010, 0b010100, 0b010111, 0b011000, 0b011011, 0b011101, 0b011110, 0b100001, 0b100010, 0b100100, 0b100111, 0b101000, 0b101011, 0b101101, 0b101110, 0b110000, 0b110011, 0b110101, 0b110110, 0b111001, 0b111010, 0b111100, 0b111111];
pub(crate) const EVEN_BASIS: [Even; 32] = [
    Even(Mat4c([[c(1.0, 0.0), c(0.0, 0.0), c(0.0, 0.0), c(0.0, 0.0)],
        [c(0.0, 0.0), c(1.0, 0.0), c(0.0, 0.0), c(0.0, 0.0)],
        [c(0.0, 0.0), c(0.0, 0.0), c(1.0, 0.0), c(0.0, 0.0)],
        [c(0.0, 0.0), c(0.0, 0.0), c(0.0, 0.0), c(1.0, 0.0)]])), // scalar
    Even(Mat4c([[c(0.0, 0.0), c(0.0, 0.0), c(0.0, 0.0), c(0.0, -1.0)],
        [c(0.0, 0.0), c(0.0, 0.0), c(0.0, -1.0), c(0.0, 0.0)],
        [c(0.0, 0.0), c(0.0, 1.0), c(0.0, 0.0), c(0.0, 0.0)],
        [c(0.0, 1.0), c(0.0, 0.0), c(0.0, 0.0), c(0.0, 0.0)]])), // g0g1
    Even(Mat4c([[c(0.0, 0.0), c(0.0, 0.0), c(0.0, 0.0), c(-1.0, 0.0)],
        [c(0.0, 0.0), c(0.0, 0.0), c(1.0, 0.0), c(0.0, 0.0)],
        [c(0.0, 0.0), c(1.0, 0.0), c(0.0, 0.0), c(0.0, 0.0)],
        [c(-1.0, 0.0), c(0.0, 0.0), c(0.0, 0.0), c(0.0, 0.0)]])), // g0g2
    Even(Mat4c([[c(0.0, -1.0), c(0.0, 0.0), c(0.0, 0.0), c(0.0, 0.0)],
        [c(0.0, 0.0), c(0.0, 1.0), c(0.0, 0.0), c(0.0, 0.0)],
        [c(0.0, 0.0), c(0.0, 0.0), c(0.0, -1.0), c(0.0, 0.0)],
        [c(0.0, 0.0), c(0.0, 0.0), c(0.0, 0.0), c(0.0, 1.0)]])), // g1g2
    Even(Mat4c([[c(0.0, 0.0), c(0.0, 0.0), c(0.0, -1.0), c(0.0, 0.0)],
        [c(0.0, 0.0), c(0.0, 0.0), c(0.0, 0.0), c(0.0, 1.0)],
        [c(0.0, 1.0), c(0.0, 0.0), c(0.0, 0.0), c(0.0, 0.0)],
        [c(0.0, 0.0), c(0.0, -1.0), c(0.0, 0.0), c(0.0, 0.0)]])), // g0g3
    Even(Mat4c([[c(0.0, 0.0), c(1.0, 0.0), c(0.0, 0.0), c(0.0, 0.0)],
        [c(-1.0, 0.0), c(0.0, 0.0), c(0.0, 0.0), c(0.0, 0.0)],
        [c(0.0, 0.0), c(0.0, 0.0), c(0.0, 0.0), c(1.0, 0.0)],
        [c(0.0, 0.0), c(0.0, 0.0), c(-1.0, 0.0), c(0.0, 0.0)]])), // g1g3
    Even(Mat4c([[c(0.0, 0.0), c(0.0, -1.0), c(0.0, 0.0), c(0.0, 0.0)],
        [c(0.0, -1.0), c(0.0, 0.0), c(0.0, 0.0), c(0.0, 0.0)],
        [c(0.0, 0.0), c(0.0, 0.0), c(0.0, 0.0), c(0.0, -1.0)],
        [c(0.0, 0.0), c(0.0, 0.0), c(0.0, -1.0), c(0.0, 0.0)]])), // g2g3
    Even(Mat4c([[c(0.0, 0.0), c(0.0, 0.0), c(-1.0, 0.0), c(0.0, 0.0)],
        [c(0.0, 0.0), c(0.0, 0.0), c(0.0, 0.0), c(-1.0, 0.0)],
        [c(1.0, 0.0), c(0.0, 0.0), c(0.0, 0.0), c(0.0, 0.0)],
        [c(0.0, 0.0), c(1.0, 0.0), c(0.0, 0.0), c(0.0, 0.0)]])), // g0g1g2g3
    Even(Mat4c([[c(-1.0, 0.0), c(0.0, 0.0), c(0.0, 0.0), c(0.0, 0.0)],
        [c(0.0, 0.0), c(-1.0, 0.0), c(0.0, 0.0), c(0.0, 0.0)],
        [c(0.0, 0.0), c(0.0, 0.0), c(1.0, 0.0), c(0.0, 0.0)],
        [c(0.0, 0.0), c(0.0, 0.0), c(0.0, 0.0), c(1.0, 0.0)]])), // g0g4
    Even(Mat4c([[c(0.0, 0.0), c(0.0, 0.0), c(0.0, 0.0), c(0.0, 1.0)],
        [c(0.0, 0.0), c(0.0, 0.0), c(0.0, 1.0), c(0.0, 0.0)],
        [c(0.0, 0.0), c(0.0, 1.0), c(0.0, 0.0), c(0.0, 0.0)],
        [c(0.0, 1.0), c(0.0, 0.0), c(0.0, 0.0), c(0.0, 0.0)]])), // g1g4
    Even(Mat4c([[c(0.0, 0.0), c(0.0, 0.0), c(0.0, 0.0), c(1.0, 0.0)],
        [c(0.0, 0.0), c(0.0, 0.0), c(-1.0, 0.0), c(0.0, 0.0)],
        [c(0.0, 0.0), c(1.0, 0.0), c(0.0, 0.0), c(0.0, 0.0)],
        [c(-1.0, 0.0), c(0.0, 0.0), c(0.0, 0.0), c(0.0, 0.0)]])), // g2g4
    Even(Mat4c([[c(0.0, 1.0), c(0.0, 0.0), c(0.0, 0.0), c(0.0, 0.0)],
        [c(0.0, 0.0), c(0.0, -1.0), c(0.0, 0.0), c(0.0, 0.0)],
        [c(0.0, 0.0), c(0.0, 0.0), c(0.0, -1.0), c(0.0, 0.0)],
        [c(0.0, 0.0), c(0.0, 0.0), c(0.0, 0.0), c(0.0, 1.0)]])), // g0g1g2g4
    Even(Mat4c([[c(0.0, 0.0), c(0.0, 0.0), c(0.0, 1.0), c(0.0, 0.0)],
        [c(0.0, 0.0), c(0.0, 0.0), c(0.0, 0.0), c(0.0, -1.0)],
        [c(0.0, 1.0), c(0.0, 0.0), c(0.0, 0.0), c(0.0, 0.0)],
        [c(0.0, 0.0), c(0.0, -1.0), c(0.0, 0.0), c(0.0, 0.0)]])), // g3g4
    Even(Mat4c([[c(0.0, 0.0), c(-1.0, 0.0), c(0.0, 0.0), c(0.0, 0.0)],
        [c(1.0, 0.0), c(0.0, 0.0), c(0.0, 0.0), c(0.0, 0.0)],
        [c(0.0, 0.0), c(0.0, 0.0), c(0.0, 0.0), c(1.0, 0.0)],
        [c(0.0, 0.0), c(0.0, 0.0), c(-1.0, 0.0), c(0.0, 0.0)]])), // g0g1g3g4
    Even(Mat4c([[c(0.0, 0.0), c(0.0, 1.0), c(0.0, 0.0), c(0.0, 0.0)],
        [c(0.0, 1.0), c(0.0, 0.0), c(0.0, 0.0), c(0.0, 0.0)],
        [c(0.0, 0.0), c(0.0, 0.0), c(0.0, 0.0), c(0.0, -1.0)],
        [c(0.0, 0.0), c(0.0, 0.0), c(0.0, -1.0), c(0.0, 0.0)]])), // g0g2g3g4
    Even(Mat4c([[c(0.0, 0.0), c(0.0, 0.0), c(1.0, 0.0), c(0.0, 0.0)],
        [c(0.0, 0.0), c(0.0, 0.0), c(0.0, 0.0), c(1.0, 0.0)],
        [c(1.0, 0.0), c(0.0, 0.0), c(0.0, 0.0), c(0.0, 0.0)],
        [c(0.0, 0.0), c(1.0, 0.0), c(0.0, 0.0), c(0.0, 0.0)]])), // g1g2g3g4
    Even(Mat4c([[c(0.0, 0.0), c(0.0, 0.0), c(0.0, -1.0), c(0.0, 0.0)],
        [c(0.0, 0.0), c(0.0, 0.0), c(0.0, 0.0), c(0.0, -1.0)],
        [c(0.0, -1.0), c(0.0, 0.0), c(0.0, 0.0), c(0.0, 0.0)],
        [c(0.0, 0.0), c(0.0, -1.0), c(0.0, 0.0), c(0.0, 0.0)]])), // g0g5
    Even(Mat4c([[c(0.0, 0.0), c(1.0, 0.0), c(0.0, 0.0), c(0.0, 0.0)],
        [c(1.0, 0.0), c(0.0, 0.0), c(0.0, 0.0), c(0.0, 0.0)],
        [c(0.0, 0.0), c(0.0, 0.0), c(0.0, 0.0), c(-1.0, 0.0)],
        [c(0.0, 0.0), c(0.0, 0.0), c(-1.0, 0.0), c(0.0, 0.0)]])), // g1g5
    Even(Mat4c([[c(0.0, 0.0), c(0.0, -1.0), c(0.0, 0.0), c(0.0, 0.0)],
        [c(0.0, 1.0), c(0.0, 0.0), c(0.0, 0.0), c(0.0, 0.0)],
        [c(0.0, 0.0), c(0.0, 0.0), c(0.0, 0.0), c(0.0, 1.0)],
        [c(0.0, 0.0), c(0.0, 0.0), c(0.0, -1.0), c(0.0, 0.0)]])), // g2g5
    Even(Mat4c([[c(0.0, 0.0), c(0.0, 0.0), c(-1.0, 0.0), c(0.0, 0.0)],
        [c(0.0, 0.0), c(0.0, 0.0), c(0.0, 0.0), c(1.0, 0.0)],
        [c(-1.0, 0.0), c(0.0, 0.0), c(0.0, 0.0), c(0.0, 0.0)],
        [c(0.0, 0.0), c(1.0, 0.0), c(0.0, 0.0), c(0.0, 0.0)]])), // g0g1g2g5
    Even(Mat4c([[c(1.0, 0.0), c(0.0, 0.0), c(0.0, 0.0), c(0.0, 0.0)],
        [c(0.0, 0.0), c(-1.0, 0.0), c(0.0, 0.0), c(0.0, 0.0)],
        [c(0.0, 0.0), c(0.0, 0.0), c(-1.0, 0.0), c(0.0, 0.0)],
        [c(0.0, 0.0), c(0.0, 0.0), c(0.0, 0.0), c(1.0, 0.0)]])), // g3g5
    Even(Mat4c([[c(0.0, 0.0), c(0.0, 0.0), c(0.0, 0.0), c(0.0, -1.0)],
        [c(0.0, 0.0), c(0.0, 0.0), c(0.0, 1.0), c(0.0, 0.0)],
        [c(0.0, 0.0), c(0.0, -1.0), c(0.0, 0.0), c(0.0, 0.0)],
        [c(0.0, 1.0), c(0.0, 0.0), c(0.0, 0.0), c(0.0, 0.0)]])), // g0g1g3g5
    Even(Mat4c([[c(0.0, 0.0), c(0.0, 0.0), c(0.0, 0.0), c(-1.0, 0.0)],
        [c(0.0, 0.0), c(0.0, 0.0), c(-1.0, 0.0), c(0.0, 0.0)],
        [c(0.0, 0.0), c(-1.0, 0.0), c(0.0, 0.0), c(0.0, 0.0)],
        [c(-1.0, 0.0), c(0.0, 0.0), c(0.0, 0.0), c(0.0, 0.0)]])), // g0g2g3g5
    Even(Mat4c([[c(0.0, -1.0), c(0.0, 0.0), c(0.0, 0.0), c(0.0, 0.0)],
        [c(0.0, 0.0), c(0.0, -1.0), c(0.0, 0.0), c(0.0, 0.0)],
        [c(0.0, 0.0), c(0.0, 0.0), c(0.0, 1.0), c(0.0, 0.0)],
        [c(0.0, 0.0), c(0.0, 0.0), c(0.0, 0.0), c(0.0, 1.0)]])), // g1g2g3g5
    Even(Mat4c([[c(0.0, 0.0), c(0.0, 0.0), c(0.0, -1.0), c(0.0, 0.0)],
        [c(0.0, 0.0), c(0.0, 0.0), c(0.0, 0.0), c(0.0, -1.0)],
        [c(0.0, 1.0), c(0.0, 0.0), c(0.0, 0.0), c(0.0, 0.0)],
        [c(0.0, 0.0), c(0.0, 1.0), c(0.0, 0.0), c(0.0, 0.0)]])), // g4g5
    Even(Mat4c([[c(0.0, 0.0), c(1.0, 0.0), c(0.0, 0.0), c(0.0, 0.0)],
        [c(1.0, 0.0), c(0.0, 0.0), c(0.0, 0.0), c(0.0, 0.0)],
        [c(0.0, 0.0), c(0.0, 0.0), c(0.0, 0.0), c(1.0, 0.0)],
        [c(0.0, 0.0), c(0.0, 0.0), c(1.0, 0.0), c(0.0, 0.0)]])), // g0g1g4g5
    Even(Mat4c([[c(0.0, 0.0), c(0.0, -1.0), c(0.0, 0.0), c(0.0, 0.0)],
        [c(0.0, 1.0), c(0.0, 0.0), c(0.0, 0.0), c(0.0, 0.0)],
        [c(0.0, 0.0), c(0.0, 0.0), c(0.0, 0.0), c(0.0, -1.0)],
        [c(0.0, 0.0), c(0.0, 0.0), c(0.0, 1.0), c(0.0, 0.0)]])), // g0g2g4g5
    Even(Mat4c([[c(0.0, 0.0), c(0.0, 0.0), c(-1.0, 0.0), c(0.0, 0.0)],
        [c(0.0, 0.0), c(0.0, 0.0), c(0.0, 0.0), c(1.0, 0.0)],
        [c(1.0, 0.0), c(0.0, 0.0), c(0.0, 0.0), c(0.0, 0.0)],
        [c(0.0, 0.0), c(-1.0, 0.0), c(0.0, 0.0), c(0.0, 0.0)]])), // g1g2g4g5
    Even(Mat4c([[c(1.0, 0.0), c(0.0, 0.0), c(0.0, 0.0), c(0.0, 0.0)],
        [c(0.0, 0.0), c(-1.0, 0.0), c(0.0, 0.0), c(0.0, 0.0)],
        [c(0.0, 0.0), c(0.0, 0.0), c(1.0, 0.0), c(0.0, 0.0)],
        [c(0.0, 0.0), c(0.0, 0.0), c(0.0, 0.0), c(-1.0, 0.0)]])), // g0g3g4g5
    Even(Mat4c([[c(0.0, 0.0), c(0.0, 0.0), c(0.0, 0.0), c(0.0, -1.0)],
        [c(0.0, 0.0), c(0.0, 0.0), c(0.0, 1.0), c(0.0, 0.0)],
        [c(0.0, 0.0), c(0.0, 1.0), c(0.0, 0.0), c(0.0, 0.0)],
        [c(0.0, -1.0), c(0.0, 0.0), c(0.0, 0.0), c(0.0, 0.0)]])), // g1g3g4g5
    Even(Mat4c([[c(0.0, 0.0), c(0.0, 0.0), c(0.0, 0.0), c(-1.0, 0.0)],
        [c(0.0, 0.0), c(0.0, 0.0), c(-1.0, 0.0), c(0.0, 0.0)],
        [c(0.0, 0.0), c(1.0, 0.0), c(0.0, 0.0), c(0.0, 0.0)],
        [c(1.0, 0.0), c(0.0, 0.0), c(0.0, 0.0), c(0.0, 0.0)]])), // g2g3g4g5
    Even(Mat4c([[c(0.0, -1.0), c(0.0, 0.0), c(0.0, 0.0), c(0.0, 0.0)],
        [c(0.0, 0.0), c(0.0, -1.0), c(0.0, 0.0), c(0.0, 0.0)],
        [c(0.0, 0.0), c(0.0, 0.0), c(0.0, -1.0), c(0.0, 0.0)],
        [c(0.0, 0.0), c(0.0, 0.0), c(0.0, 0.0), c(0.0, -1.0)]])), // g0g1g2g3g4g5
];

pub(crate) const ODD_MASKS: [u64; 32] = [0b000001, 0b000010, 0b000100, 0b000111, 0b001000, 0b001011, 0b001101, 0b001110, 0b010000, 0b010011, 0b010101, 0b010110, 0b011001, 0b011010, 0b011100, 0b011111, 0b100000, 0b100011, 0b100101, 0b100110, 0b101001, 0b101010, 0b101100, 0b101111, 0b110001, 0b110010, 0b110100, 0b110111, 0b111000, 0b111011, 0b111101, 0b111110];
pub(crate) const ODD_BASIS: [Odd; 32] = [
    Odd(Mat4c([[c(1.0, 0.0), c(0.0, 0.0), c(0.0, 0.0), c(0.0, 0.0)],
        [c(0.0, 0.0), c(1.0, 0.0), c(0.0, 0.0), c(0.0, 0.0)],
        [c(0.0, 0.0), c(0.0, 0.0), c(1.0, 0.0), c(0.0, 0.0)],
        [c(0.0, 0.0), c(0.0, 0.0), c(0.0, 0.0), c(1.0, 0.0)]])), // g0
    Odd(Mat4c([[c(0.0, 0.0), c(0.0, 0.0), c(0.0, 0.0), c(0.0, 1.0)],
        [c(0.0, 0.0), c(0.0, 0.0), c(0.0, 1.0), c(0.0, 0.0)],
        [c(0.0, 0.0), c(0.0, -1.0), c(0.0, 0.0), c(0.0, 0.0)],
        [c(0.0, -1.0), c(0.0, 0.0), c(0.0, 0.0), c(0.0, 0.0)]])), // g1
    Odd(Mat4c([[c(0.0, 0.0), c(0.0, 0.0), c(0.0, 0.0), c(1.0, 0.0)],
        [c(0.0, 0.0), c(0.0, 0.0), c(-1.0, 0.0), c(0.0, 0.0)],
        [c(0.0, 0.0), c(-1.0, 0.0), c(0.0, 0.0), c(0.0, 0.0)],
        [c(1.0, 0.0), c(0.0, 0.0), c(0.0, 0.0), c(0.0, 0.0)]])), // g2
    Odd(Mat4c([[c(0.0, -1.0), c(0.0, 0.0), c(0.0, 0.0), c(0.0, 0.0)],
        [c(0.0, 0.0), c(0.0, 1.0), c(0.0, 0.0), c(0.0, 0.0)],
        [c(0.0, 0.0), c(0.0, 0.0), c(0.0, -1.0), c(0.0, 0.0)],
        [c(0.0, 0.0), c(0.0, 0.0), c(0.0, 0.0), c(0.0, 1.0)]])), // g0g1g2
    Odd(Mat4c([[c(0.0, 0.0), c(0.0, 0.0), c(0.0, 1.0), c(0.0, 0.0)],
        [c(0.0, 0.0), c(0.0, 0.0), c(0.0, 0.0), c(0.0, -1.0)],
        [c(0.0, -1.0), c(0.0, 0.0), c(0.0, 0.0), c(0.0, 0.0)],
        [c(0.0, 0.0), c(0.0, 1.0), c(0.0, 0.0), c(0.0, 0.0)]])), // g3
    Odd(Mat4c([[c(0.0, 0.0), c(1.0, 0.0), c(0.0, 0.0), c(0.0, 0.0)],
        [c(-1.0, 0.0), c(0.0, 0.0), c(0.0, 0.0), c(0.0, 0.0)],
        [c(0.0, 0.0), c(0.0, 0.0), c(0.0, 0.0), c(1.0, 0.0)],
        [c(0.0, 0.0), c(0.0, 0.0), c(-1.0, 0.0), c(0.0, 0.0)]])), // g0g1g3
    Odd(Mat4c([[c(0.0, 0.0), c(0.0, -1.0), c(0.0, 0.0), c(0.0, 0.0)],
        [c(0.0, -1.0), c(0.0, 0.0), c(0.0, 0.0), c(0.0, 0.0)],
        [c(0.0, 0.0), c(0.0, 0.0), c(0.0, 0.0), c(0.0, -1.0)],
        [c(0.0, 0.0), c(0.0, 0.0), c(0.0, -1.0), c(0.0, 0.0)]])), // g0g2g3
    Odd(Mat4c([[c(0.0, 0.0), c(0.0, 0.0), c(1.0, 0.0), c(0.0, 0.0)],
        [c(0.0, 0.0), c(0.0, 0.0), c(0.0, 0.0), c(1.0, 0.0)],
        [c(-1.0, 0.0), c(0.0, 0.0), c(0.0, 0.0), c(0.0, 0.0)],
        [c(0.0, 0.0), c(-1.0, 0.0), c(0.0, 0.0), c(0.0, 0.0)]])), // g1g2g3
    Odd(Mat4c([[c(1.0, 0.0), c(0.0, 0.0), c(0.0, 0.0), c(0.0, 0.0)],
        [c(0.0, 0.0), c(1.0, 0.0), c(0.0, 0.0), c(0.0, 0.0)],
        [c(0.0, 0.0), c(0.0, 0.0), c(-1.0, 0.0), c(0.0, 0.0)],
        [c(0.0, 0.0), c(0.0, 0.0), c(0.0, 0.0), c(-1.0, 0.0)]])), // g4
    Odd(Mat4c([[c(0.0, 0.0), c(0.0, 0.0), c(0.0, 0.0), c(0.0, 1.0)],
        [c(0.0, 0.0), c(0.0, 0.0), c(0.0, 1.0), c(0.0, 0.0)],
        [c(0.0, 0.0), c(0.0, 1.0), c(0.0, 0.0), c(0.0, 0.0)],
        [c(0.0, 1.0), c(0.0, 0.0), c(0.0, 0.0), c(0.0, 0.0)]])), // g0g1g4
    Odd(Mat4c([[c(0.0, 0.0), c(0.0, 0.0), c(0.0, 0.0), c(1.0, 0.0)],
        [c(0.0, 0.0), c(0.0, 0.0), c(-1.0, 0.0), c(0.0, 0.0)],
        [c(0.0, 0.0), c(1.0, 0.0), c(0.0, 0.0), c(0.0, 0.0)],
        [c(-1.0, 0.0), c(0.0, 0.0), c(0.0, 0.0), c(0.0, 0.0)]])), // g0g2g4
    Odd(Mat4c([[c(0.0, -1.0), c(0.0, 0.0), c(0.0, 0.0), c(0.0, 0.0)],
        [c(0.0, 0.0), c(0.0, 1.0), c(0.0, 0.0), c(0.0, 0.0)],
        [c(0.0, 0.0), c(0.0, 0.0), c(0.0, 1.0), c(0.0, 0.0)],
        [c(0.0, 0.0), c(0.0, 0.0), c(0.0, 0.0), c(0.0, -1.0)]])), // g1g2g4
    Odd(Mat4c([[c(0.0, 0.0), c(0.0, 0.0), c(0.0, 1.0), c(0.0, 0.0)],
        [c(0.0, 0.0), c(0.0, 0.0), c(0.0, 0.0), c(0.0, -1.0)],
        [c(0.0, 1.0), c(0.0, 0.0), c(0.0, 0.0), c(0.0, 0.0)],
        [c(0.0, 0.0), c(0.0, -1.0), c(0.0, 0.0), c(0.0, 0.0)]])), // g0g3g4
    Odd(Mat4c([[c(0.0, 0.0), c(1.0, 0.0), c(0.0, 0.0), c(0.0, 0.0)],
        [c(-1.0, 0.0), c(0.0, 0.0), c(0.0, 0.0), c(0.0, 0.0)],
        [c(0.0, 0.0), c(0.0, 0.0), c(0.0, 0.0), c(-1.0, 0.0)],
        [c(0.0, 0.0), c(0.0, 0.0), c(1.0, 0.0), c(0.0, 0.0)]])), // g1g3g4
    Odd(Mat4c([[c(0.0, 0.0), c(0.0, -1.0), c(0.0, 0.0), c(0.0, 0.0)],
        [c(0.0, -1.0), c(0.0, 0.0), c(0.0, 0.0), c(0.0, 0.0)],
        [c(0.0, 0.0), c(0.0, 0.0), c(0.0, 0.0), c(0.0, 1.0)],
        [c(0.0, 0.0), c(0.0, 0.0), c(0.0, 1.0), c(0.0, 0.0)]])), // g2g3g4
    Odd(Mat4c([[c(0.0, 0.0), c(0.0, 0.0), c(1.0, 0.0), c(0.0, 0.0)],
        [c(0.0, 0.0), c(0.0, 0.0), c(0.0, 0.0), c(1.0, 0.0)],
        [c(1.0, 0.0), c(0.0, 0.0), c(0.0, 0.0), c(0.0, 0.0)],
        [c(0.0, 0.0), c(1.0, 0.0), c(0.0, 0.0), c(0.0, 0.0)]])), // g0g1g2g3g4
    Odd(Mat4c([[c(0.0, 0.0), c(0.0, 0.0), c(0.0, 1.0), c(0.0, 0.0)],
        [c(0.0, 0.0), c(0.0, 0.0), c(0.0, 0.0), c(0.0, 1.0)],
        [c(0.0, 1.0), c(0.0, 0.0), c(0.0, 0.0), c(0.0, 0.0)],
        [c(0.0, 0.0), c(0.0, 1.0), c(0.0, 0.0), c(0.0, 0.0)]])), // g5
    Odd(Mat4c([[c(0.0, 0.0), c(1.0, 0.0), c(0.0, 0.0), c(0.0, 0.0)],
        [c(1.0, 0.0), c(0.0, 0.0), c(0.0, 0.0), c(0.0, 0.0)],
        [c(0.0, 0.0), c(0.0, 0.0), c(0.0, 0.0), c(-1.0, 0.0)],
        [c(0.0, 0.0), c(0.0, 0.0), c(-1.0, 0.0), c(0.0, 0.0)]])), // g0g1g5
    Odd(Mat4c([[c(0.0, 0.0), c(0.0, -1.0), c(0.0, 0.0), c(0.0, 0.0)],
        [c(0.0, 1.0), c(0.0, 0.0), c(0.0, 0.0), c(0.0, 0.0)],
        [c(0.0, 0.0), c(0.0, 0.0), c(0.0, 0.0), c(0.0, 1.0)],
        [c(0.0, 0.0), c(0.0, 0.0), c(0.0, -1.0), c(0.0, 0.0)]])), // g0g2g5
    Odd(Mat4c([[c(0.0, 0.0), c(0.0, 0.0), c(1.0, 0.0), c(0.0, 0.0)],
        [c(0.0, 0.0), c(0.0, 0.0), c(0.0, 0.0), c(-1.0, 0.0)],
        [c(1.0, 0.0), c(0.0, 0.0), c(0.0, 0.0), c(0.0, 0.0)],
        [c(0.0, 0.0), c(-1.0, 0.0), c(0.0, 0.0), c(0.0, 0.0)]])), // g1g2g5
    Odd(Mat4c([[c(1.0, 0.0), c(0.0, 0.0), c(0.0, 0.0), c(0.0, 0.0)],
        [c(0.0, 0.0), c(-1.0, 0.0), c(0.0, 0.0), c(0.0, 0.0)],
        [c(0.0, 0.0), c(0.0, 0.0), c(-1.0, 0.0), c(0.0, 0.0)],
        [c(0.0, 0.0), c(0.0, 0.0), c(0.0, 0.0), c(1.0, 0.0)]])), // g0g3g5
    Odd(Mat4c([[c(0.0, 0.0), c(0.0, 0.0), c(0.0, 0.0), c(0.0, 1.0)],
        [c(0.0, 0.0), c(0.0, 0.0), c(0.0, -1.0), c(0.0, 0.0)],
        [c(0.0, 0.0), c(0.0, 1.0), c(0.0, 0.0), c(0.0, 0.0)],
        [c(0.0, -1.0), c(0.0, 0.0), c(0.0, 0.0), c(0.0, 0.0)]])), // g1g3g5
    Odd(Mat4c([[c(0.0, 0.0), c(0.0, 0.0), c(0.0, 0.0), c(1.0, 0.0)],
        [c(0.0, 0.0), c(0.0, 0.0), c(1.0, 0.0), c(0.0, 0.0)],
        [c(0.0, 0.0), c(1.0, 0.0), c(0.0, 0.0), c(0.0, 0.0)],
        [c(1.0, 0.0), c(0.0, 0.0), c(0.0, 0.0), c(0.0, 0.0)]])), // g2g3g5
    Odd(Mat4c([[c(0.0, -1.0), c(0.0, 0.0), c(0.0, 0.0), c(0.0, 0.0)],
        [c(0.0, 0.0), c(0.0, -1.0), c(0.0, 0.0), c(0.0, 0.0)],
        [c(0.0, 0.0), c(0.0, 0.0), c(0.0, 1.0), c(0.0, 0.0)],
        [c(0.0, 0.0), c(0.0, 0.0), c(0.0, 0.0), c(0.0, 1.0)]])), // g0g1g2g3g5
    Odd(Mat4c([[c(0.0, 0.0), c(0.0, 0.0), c(0.0, -1.0), c(0.0, 0.0)],
        [c(0.0, 0.0), c(0.0, 0.0), c(0.0, 0.0), c(0.0, -1.0)],
        [c(0.0, 1.0), c(0.0, 0.0), c(0.0, 0.0), c(0.0, 0.0)],
        [c(0.0, 0.0), c(0.0, 1.0), c(0.0, 0.0), c(0.0, 0.0)]])), // g0g4g5
    Odd(Mat4c([[c(0.0, 0.0), c(-1.0, 0.0), c(0.0, 0.0), c(0.0, 0.0)],
        [c(-1.0, 0.0), c(0.0, 0.0), c(0.0, 0.0), c(0.0, 0.0)],
        [c(0.0, 0.0), c(0.0, 0.0), c(0.0, 0.0), c(-1.0, 0.0)],
        [c(0.0, 0.0), c(0.0, 0.0), c(-1.0, 0.0), c(0.0, 0.0)]])), // g1g4g5
    Odd(Mat4c([[c(0.0, 0.0), c(0.0, 1.0), c(0.0, 0.0), c(0.0, 0.0)],
        [c(0.0, -1.0), c(0.0, 0.0), c(0.0, 0.0), c(0.0, 0.0)],
        [c(0.0, 0.0), c(0.0, 0.0), c(0.0, 0.0), c(0.0, 1.0)],
        [c(0.0, 0.0), c(0.0, 0.0), c(0.0, -1.0), c(0.0, 0.0)]])), // g2g4g5
    Odd(Mat4c([[c(0.0, 0.0), c(0.0, 0.0), c(-1.0, 0.0), c(0.0, 0.0)],
        [c(0.0, 0.0), c(0.0, 0.0), c(0.0, 0.0), c(1.0, 0.0)],
        [c(1.0, 0.0), c(0.0, 0.0), c(0.0, 0.0), c(0.0, 0.0)],
        [c(0.0, 0.0), c(-1.0, 0.0), c(0.0, 0.0), c(0.0, 0.0)]])), // g0g1g2g4g5
    Odd(Mat4c([[c(-1.0, 0.0), c(0.0, 0.0), c(0.0, 0.0), c(0.0, 0.0)],
        [c(0.0, 0.0), c(1.0, 0.0), c(0.0, 0.0), c(0.0, 0.0)],
        [c(0.0, 0.0), c(0.0, 0.0), c(-1.0, 0.0), c(0.0, 0.0)],
        [c(0.0, 0.0), c(0.0, 0.0), c(0.0, 0.0), c(1.0, 0.0)]])), // g3g4g5
    Odd(Mat4c([[c(0.0, 0.0), c(0.0, 0.0), c(0.0, 0.0), c(0.0, -1.0)],
        [c(0.0, 0.0), c(0.0, 0.0), c(0.0, 1.0), c(0.0, 0.0)],
        [c(0.0, 0.0), c(0.0, 1.0), c(0.0, 0.0), c(0.0, 0.0)],
        [c(0.0, -1.0), c(0.0, 0.0), c(0.0, 0.0), c(0.0, 0.0)]])), // g0g1g3g4g5
    Odd(Mat4c([[c(0.0, 0.0), c(0.0, 0.0), c(0.0, 0.0), c(-1.0, 0.0)],
        [c(0.0, 0.0), c(0.0, 0.0), c(-1.0, 0.0), c(0.0, 0.0)],
        [c(0.0, 0.0), c(1.0, 0.0), c(0.0, 0.0), c(0.0, 0.0)],
        [c(1.0, 0.0), c(0.0, 0.0), c(0.0, 0.0), c(0.0, 0.0)]])), // g0g2g3g4g5
    Odd(Mat4c([[c(0.0, 1.0), c(0.0, 0.0), c(0.0, 0.0), c(0.0, 0.0)],
        [c(0.0, 0.0), c(0.0, 1.0), c(0.0, 0.0), c(0.0, 0.0)],
        [c(0.0, 0.0), c(0.0, 0.0), c(0.0, 1.0), c(0.0, 0.0)],
        [c(0.0, 0.0), c(0.0, 0.0), c(0.0, 0.0), c(0.0, 1.0)]])), // g1g2g3g4g5
];

pub const G0: Odd = ODD_BASIS[0];
pub const G1: Odd = ODD_BASIS[1];
pub const G2: Odd = ODD_BASIS[2];
pub const G3: Odd = ODD_BASIS[4];
pub const G4: Odd = ODD_BASIS[8];
pub const G5: Odd = ODD_BASIS[16];
pub const I6: Even = EVEN_BASIS[31];

const GENS: [&[(u8, f64)]; 6] = [
    &[(0, 1.0)],
    &[(4, 1.0)],
    &[(5, 1.0)],
    &[(6, 1.0)],
    &[(7, 1.0)],
    &[(1, 1.0)],
];

linear_ops!(Even);
linear_ops!(Odd);
extracted!(Even, 32, EVEN_MASKS, EVEN_BASIS, METRIC);
extracted!(Odd, 32, ODD_MASKS, ODD_BASIS, METRIC);
graded_ops!(Even, 32, EVEN_MASKS, EVEN_BASIS, GEN_NAMES);
graded_ops!(Odd, 32, ODD_MASKS, ODD_BASIS, GEN_NAMES);
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
        Odd(self.0 * rhs.0.bar())
    }
}

impl Mul for Odd {
    type Output = Even;
    fn mul(self, rhs: Odd) -> Even {
        Even(self.0 * rhs.0.bar())
    }
}

impl ScalarProduct for Even {
    fn dot(self, rhs: Self) -> f64 {
        self.0.tr_mul_re(rhs.0) / 4.0
    }
}

impl ScalarProduct for Odd {
    fn dot(self, rhs: Self) -> f64 {
        self.0.tr_mul_re(rhs.0.bar()) / 4.0
    }
}

impl Reverse for Even {
    fn rev(self) -> Self {
        Even(self.0.rev_even())
    }
}

impl Reverse for Odd {
    fn rev(self) -> Self {
        Odd(self.0.rev_odd())
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
        Odd(even.0)
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graded::grid;

    #[test]
    fn products_match_blade_algebra() {
        grid::check(
            METRIC,
            EVEN_MASKS,
            ODD_MASKS,
            EVEN_BASIS,
            ODD_BASIS,
            |m: Even| m.coefficients(),
            |m: Odd| m.coefficients(),
        );
    }

    #[test]
    fn generator_squares_follow_the_conformal_split() {
        assert_eq!(G0 * G0, Even::from(1.0));
        assert_eq!(G5 * G5, Even::from(1.0));
        assert_eq!(G1 * G1, Even::from(-1.0));
        assert_eq!(G4 * G4, Even::from(-1.0));
    }

    #[test]
    fn reversal_is_an_exact_involution() {
        let mut coefficients = [0.0; 32];
        for (i, c) in coefficients.iter_mut().enumerate() {
            *c = (i as f64) * 0.5 - 8.0;
        }
        let m = Even::from_coefficients(coefficients);
        assert_eq!(m.rev().rev(), m);
        let o = Odd::from_coefficients(coefficients);
        assert_eq!(o.rev().rev(), o);
        assert_eq!(I6.rev(), -I6);
        assert_eq!(G0.rev(), G0);
    }

    #[test]
    fn reversal_matches_blade_signs() {
        for (i, mask) in EVEN_MASKS.into_iter().enumerate() {
            let expected = blades::reverse_sign(blades::grade(mask)).as_f64();
            let c = EVEN_BASIS[i].rev().coefficients();
            for (j, value) in c.into_iter().enumerate() {
                let want = if j == i { expected } else { 0.0 };
                assert!((value - want).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn parity_conversion_squares_to_plus_one() {
        for odd in ODD_BASIS {
            assert_eq!(Odd::from(Even::from(odd)), odd);
        }
    }
}
