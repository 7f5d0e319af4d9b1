//! Four-lane tap accumulation for the direct-form filter
//!
//! The history is copied into a zero-padded local buffer whose length is a
//! band width (8, 12 or 16), and the coefficients are laid out twice in a
//! row so that the taps for any rotating index form one contiguous window.
//! The inner loop then runs over fixed-size chunks of 4, which compilers
//! vectorize.
//!
//! Each tap product is truncated on its own and summed in `i64`, where
//! addition is exact, so the lane split and reduction order cannot change
//! the result. Padded taps multiply a zero history word and contribute 0.

use super::synthesis::LpcCoefficient;
use crate::fixed_point::{scale_value, scale_wide_saturate};
use crate::types::{FixpDbl, LPC_MAX_ORDER, Traversal};

const LANES: usize = 4;

/// Padded tap count for an order
pub(crate) const fn band_width(order: usize) -> usize {
    match order {
        0..=8 => 8,
        9..=12 => 12,
        _ => LPC_MAX_ORDER,
    }
}

/// Lane-parallel form of [`lpc_synthesis`](super::synthesis::lpc_synthesis).
///
/// Same arguments, same preconditions and bit-identical output.
pub fn lpc_synthesis_lanes<C: LpcCoefficient>(
    signal: &mut [FixpDbl],
    traversal: Traversal,
    lpc_coeff_m: &[C],
    lpc_coeff_e: i32,
    state: &mut [FixpDbl],
    state_index: &mut usize,
) {
    let order = lpc_coeff_m.len();
    debug_assert!((1..=LPC_MAX_ORDER).contains(&order));
    debug_assert!(state.len() >= order);
    debug_assert!(*state_index < order);
    debug_assert!(lpc_coeff_e + 1 >= 0);

    let width = band_width(order);
    let shift = lpc_coeff_e + 1;

    let mut history = [FixpDbl::ZERO; LPC_MAX_ORDER];
    history[..order].copy_from_slice(&state[..order]);

    // coeffs[k] = lpc_coeff_m[k % order]; window start is at most order and
    // the window is at most 16 long
    let mut coeffs = [C::default(); 2 * LPC_MAX_ORDER];
    for (k, c) in coeffs.iter_mut().enumerate() {
        *c = lpc_coeff_m[k % order];
    }

    let len = signal.len();
    let mut index = *state_index;

    for n in 0..len {
        let pos = traversal.position(n, len);
        let start = order - index;
        let window = &coeffs[start..start + width];

        let mut lanes = [0i64; LANES];
        for (s, c) in history[..width]
            .chunks_exact(LANES)
            .zip(window.chunks_exact(LANES))
        {
            for lane in 0..LANES {
                lanes[lane] += i64::from(c[lane].tap_div2(s[lane]).0);
            }
        }
        let taps = (lanes[0] + lanes[1]) + (lanes[2] + lanes[3]);

        let acc = i64::from(scale_value(signal[pos], -shift).0) - taps;
        let y = scale_wide_saturate(acc, shift);

        index = if index == 0 { order - 1 } else { index - 1 };
        history[index] = y;
        signal[pos] = y;
    }

    state[..order].copy_from_slice(&history[..order]);
    *state_index = index;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lpc::synthesis::lpc_synthesis;
    use crate::types::FixpSgl;

    #[test]
    fn test_band_width() {
        assert_eq!(band_width(1), 8);
        assert_eq!(band_width(8), 8);
        assert_eq!(band_width(9), 12);
        assert_eq!(band_width(12), 12);
        assert_eq!(band_width(13), 16);
        assert_eq!(band_width(16), 16);
    }

    #[test]
    fn test_lanes_match_scalar_every_order() {
        for order in 1..=LPC_MAX_ORDER {
            let coeffs: Vec<FixpDbl> = (0..order)
                .map(|k| FixpDbl(((k as i32).wrapping_mul(0x1357_9BDF) ^ 0x2468_ACE0) >> 2))
                .collect();
            let input: Vec<FixpDbl> = (0..64)
                .map(|i| FixpDbl((i * 0x0101_0101i32).wrapping_mul(37) >> 3))
                .collect();

            for traversal in [Traversal::Forward, Traversal::Backward] {
                let mut a = input.clone();
                let mut b = input.clone();
                let mut sa = vec![FixpDbl::ZERO; order];
                let mut sb = vec![FixpDbl::ZERO; order];
                let (mut ia, mut ib) = (order / 2, order / 2);

                lpc_synthesis(&mut a, traversal, &coeffs, 1, &mut sa, &mut ia);
                lpc_synthesis_lanes(&mut b, traversal, &coeffs, 1, &mut sb, &mut ib);

                assert_eq!(a, b, "order {} {:?}", order, traversal);
                assert_eq!(sa, sb);
                assert_eq!(ia, ib);
            }
        }
    }

    #[test]
    fn test_lanes_leave_extra_state_untouched() {
        let coeffs = [FixpSgl::from_f64(0.5); 3];
        let mut state = [FixpDbl(7); 6];
        let mut index = 0;
        let mut signal = [FixpDbl::from_f64(0.1); 5];
        lpc_synthesis_lanes(&mut signal, Traversal::Forward, &coeffs, 0, &mut state, &mut index);
        assert_eq!(&state[3..], &[FixpDbl(7); 3]);
    }
}
