//! Block-split equivalence
//!
//! Filtering a signal in one call and filtering it in several calls with
//! carried state must give the same samples and the same final state.

use super::utils::*;
use crate::config::{LatticeConfig, SynthesisConfig};
use crate::lpc::{
    LatticeSynthesisFilter, LpcSynthesisFilter, lpc_synthesis, lpc_synthesis_lanes,
    lpc_synthesis_lattice,
};
use crate::types::{FixpDbl, Traversal};
use crate::utils::simd::KernelPath;
use rand::Rng;

/// Split points of `len` into blocks of random size
fn random_splits(rng: &mut rand::rngs::StdRng, len: usize) -> Vec<usize> {
    let mut splits = Vec::new();
    let mut at = 0;
    while at < len {
        let block = rng.gen_range(1..=(len - at).min(37));
        splits.push(block);
        at += block;
    }
    splits
}

#[test]
fn test_direct_form_split_equals_whole() {
    let mut rng = seeded_rng(0x5EED);
    for order in 1..=16 {
        let coeffs = random_coeffs(&mut rng, order);
        let input = random_signal(&mut rng, 200, 3);
        let start = DirectState::random(&mut rng, order);
        let split = rng.gen_range(1..200);

        let mut whole = input.clone();
        let mut end_whole = start.clone();
        lpc_synthesis(
            &mut whole,
            Traversal::Forward,
            &coeffs,
            1,
            &mut end_whole.state,
            &mut end_whole.index,
        );

        let mut parts = input.clone();
        let mut end_parts = start.clone();
        let (head, tail) = parts.split_at_mut(split);
        for block in [head, tail] {
            lpc_synthesis(
                block,
                Traversal::Forward,
                &coeffs,
                1,
                &mut end_parts.state,
                &mut end_parts.index,
            );
        }

        assert_eq!(whole, parts, "order {} split {}", order, split);
        assert_eq!(end_whole, end_parts);
    }
}

#[test]
fn test_backward_split_runs_tail_first() {
    let mut rng = seeded_rng(11);
    for order in [1, 5, 10, 16] {
        let coeffs = random_coeffs(&mut rng, order);
        let input = random_signal(&mut rng, 64, 2);

        let mut whole = input.clone();
        let mut s1 = DirectState::zeroed(order);
        lpc_synthesis_lanes(
            &mut whole,
            Traversal::Backward,
            &coeffs,
            0,
            &mut s1.state,
            &mut s1.index,
        );

        let mut parts = input;
        let mut s2 = DirectState::zeroed(order);
        let (head, tail) = parts.split_at_mut(23);
        for block in [tail, head] {
            lpc_synthesis_lanes(
                block,
                Traversal::Backward,
                &coeffs,
                0,
                &mut s2.state,
                &mut s2.index,
            );
        }

        assert_eq!(whole, parts);
        assert_eq!(s1, s2);
    }
}

#[test]
fn test_lattice_split_equals_whole() {
    let mut rng = seeded_rng(99);
    for order in 1..=16 {
        let coeffs = random_reflection(&mut rng, order);
        let input = random_signal(&mut rng, 150, 4);

        let mut whole = input.clone();
        let mut state_whole = vec![FixpDbl::ZERO; order];
        lpc_synthesis_lattice(&mut whole, 1, 0, Traversal::Forward, &coeffs, &mut state_whole);

        let mut parts = input;
        let mut state_parts = vec![FixpDbl::ZERO; order];
        let (head, tail) = parts.split_at_mut(order * 3);
        for block in [head, tail] {
            lpc_synthesis_lattice(block, 1, 0, Traversal::Forward, &coeffs, &mut state_parts);
        }

        assert_eq!(whole, parts, "order {}", order);
        assert_eq!(state_whole, state_parts);
    }
}

#[test]
fn test_filters_stream_in_random_blocks() {
    let mut rng = seeded_rng(2024);
    let input = random_signal(&mut rng, 512, 3);

    for order in [2, 8, 12, 16] {
        let coeffs = random_coeffs(&mut rng, order);
        let reflection = random_reflection(&mut rng, order);

        for path in [KernelPath::Scalar, KernelPath::Lanes4] {
            let config = SynthesisConfig::new(order)
                .with_coeff_exponent(2)
                .with_kernel_path(path);
            let mut one_shot = LpcSynthesisFilter::new(&config, &coeffs).unwrap();
            let mut streamed = one_shot.clone();

            let mut expected = input.clone();
            one_shot.process(&mut expected).unwrap();

            let mut actual = input.clone();
            let mut rest = actual.as_mut_slice();
            for len in random_splits(&mut rng, input.len()) {
                let (block, remainder) = std::mem::take(&mut rest).split_at_mut(len);
                streamed.process(block).unwrap();
                rest = remainder;
            }

            assert_eq!(expected, actual, "order {} path {}", order, path);
            assert_eq!(one_shot.state(), streamed.state());
        }

        let config = LatticeConfig::new(order).with_signal_exponents(0, 1);
        let mut one_shot = LatticeSynthesisFilter::new(&config, &reflection).unwrap();
        let mut streamed = one_shot.clone();

        let mut expected = input.clone();
        one_shot.process(&mut expected).unwrap();
        let mut actual = input.clone();
        for block in actual.chunks_mut(order + 5) {
            streamed.process(block).unwrap();
        }

        assert_eq!(expected, actual);
        assert_eq!(one_shot.state(), streamed.state());
    }
}

#[test]
fn test_reset_restarts_the_stream() {
    let mut rng = seeded_rng(3);
    let coeffs = random_coeffs(&mut rng, 6);
    let input = random_signal(&mut rng, 40, 2);
    let config = SynthesisConfig::new(6);
    let mut filter = LpcSynthesisFilter::new(&config, &coeffs).unwrap();

    let mut first = input.clone();
    filter.process(&mut first).unwrap();
    filter.reset();
    let mut second = input;
    filter.process(&mut second).unwrap();

    assert_eq!(first, second);
}
