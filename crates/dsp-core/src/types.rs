//! Core fixed-point types shared by the numeric kernel and the filters
//!
//! A [`FixpDbl`] is a 32-bit fraction in `[-1, 1)`. It carries no scale of its
//! own: every sample buffer travels together with an exponent chosen by the
//! caller, and every kernel documents how that exponent changes. A mantissa
//! without its exponent is not a value.

use crate::error::{DspError, Result};
use bytemuck::{Pod, Zeroable};
use std::fmt;

/// Bits in a [`FixpDbl`] word
pub const DFRACT_BITS: i32 = 32;

/// Bits in a [`FixpSgl`] word
pub const SFRACT_BITS: i32 = 16;

/// Largest representable [`FixpDbl`] mantissa (just below `1.0`)
pub const MAXVAL_DBL: i32 = 0x7FFF_FFFF;

/// Most negative [`FixpDbl`] mantissa (`-1.0`)
pub const MINVAL_DBL: i32 = i32::MIN;

/// Largest representable [`FixpSgl`] mantissa
pub const MAXVAL_SGL: i16 = 0x7FFF;

/// Most negative [`FixpSgl`] mantissa
pub const MINVAL_SGL: i16 = i16::MIN;

/// Highest LPC order supported by the synthesis filters
pub const LPC_MAX_ORDER: usize = 16;

const FRACT_FIX_SCALE_DBL: f64 = 2_147_483_648.0;
const FRACT_FIX_SCALE_SGL: f64 = 32_768.0;

/// 32-bit signed fraction (Q1.31)
#[repr(transparent)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Pod, Zeroable)]
pub struct FixpDbl(pub i32);

impl FixpDbl {
    /// `0.0`
    pub const ZERO: FixpDbl = FixpDbl(0);
    /// Largest value, `1 - 2^-31`
    pub const MAX: FixpDbl = FixpDbl(MAXVAL_DBL);
    /// `-1.0`. Saturating operations never produce it.
    pub const MIN: FixpDbl = FixpDbl(MINVAL_DBL);
    /// Lower clamp bound of every saturating operation
    pub const MIN_SAT: FixpDbl = FixpDbl(MINVAL_DBL + 1);

    /// Convert a float constant, rounding half away from zero and clamping
    /// to the representable range.
    pub fn from_f64(value: f64) -> Self {
        if value >= 0.0 {
            let scaled = value * FRACT_FIX_SCALE_DBL + 0.5;
            if scaled >= f64::from(MAXVAL_DBL) {
                Self::MAX
            } else {
                Self(scaled as i32)
            }
        } else {
            let scaled = value * FRACT_FIX_SCALE_DBL - 0.5;
            if scaled <= f64::from(MINVAL_DBL) {
                Self::MIN
            } else {
                Self(scaled as i32)
            }
        }
    }

    /// Value of the mantissa alone, ignoring any exponent
    pub fn to_f64(self) -> f64 {
        f64::from(self.0) / FRACT_FIX_SCALE_DBL
    }

    /// Raw two's-complement word
    #[inline]
    pub const fn raw(self) -> i32 {
        self.0
    }

    /// Keep the upper 16 bits
    #[inline]
    pub const fn to_sgl(self) -> FixpSgl {
        FixpSgl((self.0 >> 16) as i16)
    }
}

impl fmt::Display for FixpDbl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.10}", self.to_f64())
    }
}

impl From<FixpSgl> for FixpDbl {
    fn from(value: FixpSgl) -> Self {
        value.to_dbl()
    }
}

/// 16-bit signed fraction (Q1.15)
#[repr(transparent)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Pod, Zeroable)]
pub struct FixpSgl(pub i16);

impl FixpSgl {
    /// `0.0`
    pub const ZERO: FixpSgl = FixpSgl(0);
    /// Largest value, `1 - 2^-15`
    pub const MAX: FixpSgl = FixpSgl(MAXVAL_SGL);
    /// `-1.0`
    pub const MIN: FixpSgl = FixpSgl(MINVAL_SGL);

    /// Convert a float constant, rounding half away from zero and clamping
    pub fn from_f64(value: f64) -> Self {
        if value >= 0.0 {
            let scaled = value * FRACT_FIX_SCALE_SGL + 0.5;
            if scaled >= f64::from(MAXVAL_SGL) {
                Self::MAX
            } else {
                Self(scaled as i16)
            }
        } else {
            let scaled = value * FRACT_FIX_SCALE_SGL - 0.5;
            if scaled <= f64::from(MINVAL_SGL) {
                Self::MIN
            } else {
                Self(scaled as i16)
            }
        }
    }

    /// Value of the mantissa alone
    pub fn to_f64(self) -> f64 {
        f64::from(self.0) / FRACT_FIX_SCALE_SGL
    }

    /// Raw two's-complement word
    #[inline]
    pub const fn raw(self) -> i16 {
        self.0
    }

    /// Widen into the upper half of a 32-bit word (exact)
    #[inline]
    pub const fn to_dbl(self) -> FixpDbl {
        FixpDbl((self.0 as i32) << 16)
    }
}

impl fmt::Display for FixpSgl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}", self.to_f64())
    }
}

/// A mantissa together with the power-of-two exponent it is scaled by.
///
/// The represented value is `mantissa * 2^exponent`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ScaledValue {
    /// Fractional part
    pub mantissa: FixpDbl,
    /// Power-of-two scale applied on top of the fraction
    pub exponent: i32,
}

impl ScaledValue {
    /// Pair a mantissa with its exponent
    pub const fn new(mantissa: FixpDbl, exponent: i32) -> Self {
        Self { mantissa, exponent }
    }

    /// Real value of the pair
    pub fn to_f64(self) -> f64 {
        self.mantissa.to_f64() * 2f64.powi(self.exponent)
    }
}

/// Direction in which a filter walks its sample buffer.
///
/// Samples are always processed one after the other; backward traversal
/// starts at the last sample and moves towards index 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Traversal {
    /// `inc = +1`, first sample processed is index 0
    #[default]
    Forward,
    /// `inc = -1`, first sample processed is the last one
    Backward,
}

impl Traversal {
    /// Parse a sample increment of `+1` or `-1`
    pub fn from_increment(inc: i32) -> Result<Self> {
        match inc {
            1 => Ok(Self::Forward),
            -1 => Ok(Self::Backward),
            other => Err(DspError::InvalidIncrement { increment: other }),
        }
    }

    /// Sample increment as used by the reference kernels
    pub const fn increment(self) -> i32 {
        match self {
            Self::Forward => 1,
            Self::Backward => -1,
        }
    }

    /// Buffer index of the `n`-th processed sample in a buffer of `len`
    #[inline]
    pub(crate) const fn position(self, n: usize, len: usize) -> usize {
        match self {
            Self::Forward => n,
            Self::Backward => len - 1 - n,
        }
    }
}

/// Validated LPC filter order in `1..=LPC_MAX_ORDER`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LpcOrder(usize);

impl LpcOrder {
    /// Check and wrap an order
    pub fn new(order: usize) -> Result<Self> {
        if order == 0 || order > LPC_MAX_ORDER {
            return Err(DspError::InvalidOrder {
                order,
                max: LPC_MAX_ORDER,
            });
        }
        Ok(Self(order))
    }

    /// Order as a plain count
    #[inline]
    pub const fn get(self) -> usize {
        self.0
    }
}

impl TryFrom<usize> for LpcOrder {
    type Error = DspError;

    fn try_from(order: usize) -> Result<Self> {
        Self::new(order)
    }
}

impl fmt::Display for LpcOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// View a sample buffer as raw 32-bit words without copying
pub fn as_raw_samples(samples: &[FixpDbl]) -> &[i32] {
    bytemuck::cast_slice(samples)
}

/// Mutable raw view of a sample buffer
pub fn as_raw_samples_mut(samples: &mut [FixpDbl]) -> &mut [i32] {
    bytemuck::cast_slice_mut(samples)
}

/// View raw 32-bit words (e.g. a reference vector) as samples
pub fn from_raw_samples(raw: &[i32]) -> &[FixpDbl] {
    bytemuck::cast_slice(raw)
}

/// Mutable sample view of raw 32-bit words
pub fn from_raw_samples_mut(raw: &mut [i32]) -> &mut [FixpDbl] {
    bytemuck::cast_slice_mut(raw)
}
