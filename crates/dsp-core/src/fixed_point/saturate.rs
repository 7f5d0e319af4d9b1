//! Saturating add/sub and clamping helpers
//!
//! The clamp range is `[MINVAL_DBL + 1, MAXVAL_DBL]`. The most negative word
//! is excluded so that every saturated result can be negated.

use crate::types::{FixpDbl, MAXVAL_DBL, MINVAL_DBL};

/// Clamp a wide accumulator into the saturated 32-bit range
#[inline]
pub fn saturate_to_dbl(acc: i64) -> FixpDbl {
    FixpDbl(acc.clamp(i64::from(MINVAL_DBL) + 1, i64::from(MAXVAL_DBL)) as i32)
}

/// `a + b`, saturated
#[inline]
pub fn f_add_saturate(a: FixpDbl, b: FixpDbl) -> FixpDbl {
    saturate_to_dbl(i64::from(a.0) + i64::from(b.0))
}

/// `a - b`, saturated
#[inline]
pub fn f_sub_saturate(a: FixpDbl, b: FixpDbl) -> FixpDbl {
    saturate_to_dbl(i64::from(a.0) - i64::from(b.0))
}

/// Absolute value; `|-1.0|` saturates to `MAXVAL_DBL`
#[inline]
pub fn f_abs(a: FixpDbl) -> FixpDbl {
    FixpDbl(a.0.saturating_abs())
}

/// Smaller of two values
#[inline]
pub fn f_min(a: FixpDbl, b: FixpDbl) -> FixpDbl {
    if a < b { a } else { b }
}

/// Larger of two values
#[inline]
pub fn f_max(a: FixpDbl, b: FixpDbl) -> FixpDbl {
    if a > b { a } else { b }
}
