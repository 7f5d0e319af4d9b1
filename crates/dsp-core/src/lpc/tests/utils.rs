//! Shared helpers for the LPC test suite

use crate::types::{FixpDbl, FixpSgl};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Seeded generator so failures reproduce
pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

pub fn dbl(v: f64) -> FixpDbl {
    FixpDbl::from_f64(v)
}

pub fn sgl(v: f64) -> FixpSgl {
    FixpSgl::from_f64(v)
}

/// Uniform samples with `headroom` redundant sign bits
pub fn random_signal(rng: &mut StdRng, len: usize, headroom: u32) -> Vec<FixpDbl> {
    (0..len)
        .map(|_| FixpDbl(rng.r#gen::<i32>() >> headroom))
        .collect()
}

/// Full-range 32-bit coefficients; the filter may well saturate
pub fn random_coeffs(rng: &mut StdRng, order: usize) -> Vec<FixpDbl> {
    (0..order).map(|_| FixpDbl(rng.r#gen::<i32>())).collect()
}

/// Reflection coefficients bounded to `|k| < 0.9`
pub fn random_reflection(rng: &mut StdRng, order: usize) -> Vec<FixpSgl> {
    (0..order)
        .map(|_| FixpSgl::from_f64(rng.gen_range(-0.9..0.9)))
        .collect()
}

/// Direct-form history with a rotating index, as a caller would keep it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectState {
    pub state: Vec<FixpDbl>,
    pub index: usize,
}

impl DirectState {
    pub fn zeroed(order: usize) -> Self {
        Self {
            state: vec![FixpDbl::ZERO; order],
            index: 0,
        }
    }

    pub fn random(rng: &mut StdRng, order: usize) -> Self {
        Self {
            state: random_signal(rng, order, 2),
            index: rng.gen_range(0..order),
        }
    }
}

/// Reverse a buffer, run `f` on it, reverse the result back
pub fn on_reversed<F: FnOnce(&mut [FixpDbl])>(signal: &[FixpDbl], f: F) -> Vec<FixpDbl> {
    let mut reversed: Vec<FixpDbl> = signal.iter().rev().copied().collect();
    f(&mut reversed);
    reversed.reverse();
    reversed
}
