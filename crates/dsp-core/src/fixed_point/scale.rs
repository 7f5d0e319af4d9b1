//! Scaling by powers of two
//!
//! A positive scale factor shifts left (multiplies by `2^e`), a negative one
//! shifts right arithmetically. Shift counts are limited to
//! `DFRACT_BITS - 1`; anything larger has the same effect on a 32-bit word.

use super::norm::f_normz;
use super::saturate::saturate_to_dbl;
use crate::types::{DFRACT_BITS, FixpDbl};

const MAX_SHIFT: i32 = DFRACT_BITS - 1;

/// Shift by `scalefactor` without saturation.
///
/// The caller guarantees the result fits; bits shifted out at the top are
/// lost.
#[inline]
pub fn scale_value(value: FixpDbl, scalefactor: i32) -> FixpDbl {
    if scalefactor > 0 {
        FixpDbl(value.0.wrapping_shl(scalefactor.min(MAX_SHIFT) as u32))
    } else {
        FixpDbl(value.0 >> (-scalefactor).min(MAX_SHIFT))
    }
}

/// Shift by `scalefactor`, clamping to `[MINVAL_DBL + 1, MAXVAL_DBL]`
#[inline]
pub fn scale_value_saturate(value: FixpDbl, scalefactor: i32) -> FixpDbl {
    scale_wide_saturate(i64::from(value.0), scalefactor)
}

/// Shift a wide accumulator and clamp it into the saturated 32-bit range.
///
/// Used where an intermediate sum may exceed 32 bits before rescaling; the
/// result equals [`scale_value_saturate`] whenever the sum fits in 32 bits.
#[inline]
pub fn scale_wide_saturate(acc: i64, scalefactor: i32) -> FixpDbl {
    let shifted = if scalefactor > 0 {
        let shifted = i128::from(acc) << scalefactor.min(MAX_SHIFT);
        shifted.clamp(i128::from(i64::MIN), i128::from(i64::MAX)) as i64
    } else {
        acc >> (-scalefactor).min(MAX_SHIFT)
    };
    saturate_to_dbl(shifted)
}

/// Common headroom of a buffer: how far every sample can be shifted left
/// without overflow. An all-zero buffer reports `DFRACT_BITS - 1`.
pub fn get_scalefactor(samples: &[FixpDbl]) -> i32 {
    let folded = samples
        .iter()
        .fold(0i32, |acc, s| acc | (s.0 ^ (s.0 >> (DFRACT_BITS - 1))));
    (f_normz(FixpDbl(folded)) - 1).max(0)
}

/// Apply [`scale_value`] to every sample
pub fn scale_values(samples: &mut [FixpDbl], scalefactor: i32) {
    if scalefactor == 0 {
        return;
    }
    for sample in samples.iter_mut() {
        *sample = scale_value(*sample, scalefactor);
    }
}

/// Apply [`scale_value_saturate`] to every sample
pub fn scale_values_saturate(samples: &mut [FixpDbl], scalefactor: i32) {
    for sample in samples.iter_mut() {
        *sample = scale_value_saturate(*sample, scalefactor);
    }
}
