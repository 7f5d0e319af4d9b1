//! Leading-bit counting and normalization
//!
//! Callers use these to find how far a signal can be shifted left before it
//! overflows, i.e. its headroom.

use crate::types::{DFRACT_BITS, FixpDbl, FixpSgl};

/// Remove the sign by folding negative words onto their one's complement
#[inline]
fn fold_sign(x: i32) -> u32 {
    (x ^ (x >> (DFRACT_BITS - 1))) as u32
}

/// Leading zeros of the sign-folded word.
///
/// Returns `DFRACT_BITS` for `0` and for `-1` (all-zero / all-one pattern).
/// For non-negative input this is the plain leading-zero count.
#[inline]
pub fn f_normz(x: FixpDbl) -> i32 {
    fold_sign(x.0).leading_zeros() as i32
}

/// Redundant sign bits: how far `x` can be shifted left without overflow.
///
/// Returns `0` for an input of exactly `0`.
#[inline]
pub fn f_norm(x: FixpDbl) -> i32 {
    if x.0 == 0 {
        return 0;
    }
    f_normz(x) - 1
}

/// Alias of [`f_norm`] under its toolbox name
#[inline]
pub fn count_leading_bits(x: FixpDbl) -> i32 {
    f_norm(x)
}

/// Redundant sign bits of a 16-bit word; `0` for `0`
#[inline]
pub fn f_norm_sgl(x: FixpSgl) -> i32 {
    if x.0 == 0 {
        return 0;
    }
    let folded = (x.0 ^ (x.0 >> 15)) as u16;
    folded.leading_zeros() as i32 - 1
}
