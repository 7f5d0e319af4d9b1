//! Fractional multiplication
//!
//! All products are formed at full precision and truncated (floor) once.
//! The `*_div2` forms return half the product so that `MINVAL * MINVAL`
//! still fits; the plain forms double that result, which leaves bit 0 clear
//! and wraps for `-1.0 * -1.0` exactly like the 32-bit reference.

use crate::types::{FixpDbl, FixpSgl};

/// Fixed-point multiplication across word widths.
///
/// Every mixed-width implementation returns exactly what the 32×32 product
/// of the widened operands (`FixpSgl` shifted into the upper half) returns.
pub trait FixpMul<Rhs = Self>: Copy {
    /// `(self * rhs) / 2`, result as a 32-bit fraction
    fn mult_div2(self, rhs: Rhs) -> FixpDbl;

    /// `self * rhs`, result as a 32-bit fraction
    #[inline]
    fn mult(self, rhs: Rhs) -> FixpDbl {
        FixpDbl(self.mult_div2(rhs).0.wrapping_shl(1))
    }
}

impl FixpMul for FixpDbl {
    #[inline]
    fn mult_div2(self, rhs: FixpDbl) -> FixpDbl {
        FixpDbl(((i64::from(self.0) * i64::from(rhs.0)) >> 32) as i32)
    }
}

impl FixpMul<FixpSgl> for FixpDbl {
    #[inline]
    fn mult_div2(self, rhs: FixpSgl) -> FixpDbl {
        // (a * (b << 16)) >> 32 == (a * b) >> 16
        FixpDbl(((i64::from(self.0) * i64::from(rhs.0)) >> 16) as i32)
    }
}

impl FixpMul<FixpDbl> for FixpSgl {
    #[inline]
    fn mult_div2(self, rhs: FixpDbl) -> FixpDbl {
        rhs.mult_div2(self)
    }
}

impl FixpMul for FixpSgl {
    #[inline]
    fn mult_div2(self, rhs: FixpSgl) -> FixpDbl {
        FixpDbl(i32::from(self.0) * i32::from(rhs.0))
    }
}

/// `a * b`
#[inline]
pub fn f_mult<A: FixpMul<B>, B>(a: A, b: B) -> FixpDbl {
    a.mult(b)
}

/// `a * b / 2`
#[inline]
pub fn f_mult_div2<A: FixpMul<B>, B>(a: A, b: B) -> FixpDbl {
    a.mult_div2(b)
}

/// `x + a * b / 2` with a single truncation of the product
#[inline]
pub fn f_mult_add_div2<A: FixpMul<B>, B>(x: FixpDbl, a: A, b: B) -> FixpDbl {
    FixpDbl(x.0.wrapping_add(a.mult_div2(b).0))
}

/// `x - a * b / 2` with a single truncation of the product
#[inline]
pub fn f_mult_sub_div2<A: FixpMul<B>, B>(x: FixpDbl, a: A, b: B) -> FixpDbl {
    FixpDbl(x.0.wrapping_sub(a.mult_div2(b).0))
}

/// `x + a * b`
#[inline]
pub fn f_mult_add<A: FixpMul<B>, B>(x: FixpDbl, a: A, b: B) -> FixpDbl {
    FixpDbl(x.0.wrapping_add(a.mult(b).0))
}

/// `x - a * b`
#[inline]
pub fn f_mult_sub<A: FixpMul<B>, B>(x: FixpDbl, a: A, b: B) -> FixpDbl {
    FixpDbl(x.0.wrapping_sub(a.mult(b).0))
}

/// `a * a`
#[inline]
pub fn f_pow2(a: FixpDbl) -> FixpDbl {
    a.mult(a)
}

/// `a * a / 2`
#[inline]
pub fn f_pow2_div2(a: FixpDbl) -> FixpDbl {
    a.mult_div2(a)
}
