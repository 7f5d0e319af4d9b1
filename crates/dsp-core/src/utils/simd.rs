//! CPU capability detection and kernel path selection
//!
//! The synthesis kernels exist in two shapes: the scalar reference loop and a
//! 4-lane tap accumulation that compilers map onto SSE2/AVX2/NEON. Both
//! produce identical output, so selection only affects speed.

use once_cell::sync::Lazy;
use std::fmt;

/// SIMD support information
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimdSupport {
    /// x86_64 SSE2 support
    pub sse2: bool,
    /// x86_64 AVX2 support
    pub avx2: bool,
    /// AArch64 NEON support
    pub neon: bool,
}

impl SimdSupport {
    /// Any vector unit usable by the lane path
    pub fn any(self) -> bool {
        self.sse2 || self.avx2 || self.neon
    }
}

/// Detected once, on first use
static SIMD_SUPPORT: Lazy<SimdSupport> = Lazy::new(detect_simd_support);

fn detect_simd_support() -> SimdSupport {
    #[cfg(target_arch = "x86_64")]
    {
        SimdSupport {
            sse2: is_x86_feature_detected!("sse2"),
            avx2: is_x86_feature_detected!("avx2"),
            neon: false,
        }
    }
    #[cfg(target_arch = "aarch64")]
    {
        SimdSupport {
            sse2: false,
            avx2: false,
            neon: std::arch::is_aarch64_feature_detected!("neon"),
        }
    }
    #[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
    {
        SimdSupport {
            sse2: false,
            avx2: false,
            neon: false,
        }
    }
}

/// Force detection now instead of on the first filter construction
pub fn init_simd_support() {
    Lazy::force(&SIMD_SUPPORT);
}

/// Get SIMD support information
pub fn get_simd_support() -> SimdSupport {
    *SIMD_SUPPORT
}

/// Check if any SIMD support is available
pub fn has_simd_support() -> bool {
    get_simd_support().any()
}

/// Shape of the inner tap accumulation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum KernelPath {
    /// One accumulator, taps in ascending lag order
    #[default]
    Scalar,
    /// Four accumulators over taps padded to 8, 12 or 16
    Lanes4,
}

impl KernelPath {
    /// Short name for logs and benchmark ids
    pub fn name(self) -> &'static str {
        match self {
            Self::Scalar => "scalar",
            Self::Lanes4 => "lanes4",
        }
    }
}

impl fmt::Display for KernelPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Pick the kernel path for a filter of the given order.
///
/// Lanes only pay off once there is at least one full group of four taps.
pub fn select_kernel_path(order: usize) -> KernelPath {
    if cfg!(feature = "simd") && has_simd_support() && order >= 4 {
        KernelPath::Lanes4
    } else {
        KernelPath::Scalar
    }
}
