//! # MPEG-H DSP Core: Bit-Exact LPC Synthesis
//!
//! Fixed-point signal processing primitives for MPEG-H 3D Audio decoding.
//! Every operation reproduces the integer reference decoder bit for bit on
//! every platform, so conformance vectors pass unchanged.
//!
//! ## Features
//!
//! - **Fixed-point kernel**: Q1.31 / Q1.15 multiply, saturating add and
//!   shift, normalization and block scaling
//! - **Direct-form synthesis**: all-pole LPC filter of order 1 to 16 with a
//!   rotating history buffer
//! - **Lattice synthesis**: reflection-coefficient filter with separate
//!   input and output exponents
//! - **Lane-parallel kernel**: 4-wide tap accumulation, bit-identical to the
//!   scalar loop
//! - **Multichannel**: one filter per channel, optionally on the rayon pool
//!
//! ## Usage
//!
//! ```rust
//! use mpegh_dsp_core::{FixpDbl, LpcSynthesisFilter, SynthesisConfig};
//!
//! let config = SynthesisConfig::new(1);
//! let mut filter = LpcSynthesisFilter::new(&config, &[FixpDbl::from_f64(0.5)])?;
//!
//! let mut block = [FixpDbl::from_f64(0.25), FixpDbl::ZERO, FixpDbl::ZERO];
//! filter.process(&mut block)?;
//! assert_eq!(block[1], FixpDbl::from_f64(-0.125));
//! # Ok::<(), mpegh_dsp_core::DspError>(())
//! ```
//!
//! The free functions [`lpc_synthesis`] and [`lpc_synthesis_lattice`] work on
//! caller-owned state for decoders that manage their own buffers.
//!
//! ## Feature Flags
//!
//! - `simd`: pick the lane-parallel kernel when a vector unit is detected
//!   (enabled by default)

#![deny(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod fixed_point;
pub mod lpc;
pub mod types;
pub mod utils;

// Re-export commonly used types and functions
pub use config::{LatticeConfig, SynthesisConfig};
pub use error::{DspError, ErrorCategory, Result};
pub use lpc::{
    LatticeState, LatticeSynthesisFilter, LpcCoefficient, LpcState, LpcSynthesisFilter,
    MultiChannelSynthesis, lpc_synthesis, lpc_synthesis_dispatch, lpc_synthesis_lattice,
    try_lpc_synthesis, try_lpc_synthesis_lattice,
};
pub use types::{FixpDbl, FixpSgl, LPC_MAX_ORDER, LpcOrder, ScaledValue, Traversal};
pub use utils::simd::KernelPath;

/// Version information for the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the library
///
/// Installs a `tracing` subscriber if none is set and runs CPU feature
/// detection up front. Safe to call more than once.
///
/// Always returns `Ok`; a subscriber that is already installed is kept.
pub fn init() -> Result<()> {
    let _ = tracing_subscriber::fmt::try_init();

    utils::simd::init_simd_support();

    tracing::info!("MPEG-H DSP core v{} initialized", VERSION);
    tracing::info!(
        "Kernel path for order {}: {}",
        LPC_MAX_ORDER,
        utils::simd::select_kernel_path(LPC_MAX_ORDER)
    );
    Ok(())
}

/// Get library information
pub fn info() -> LibraryInfo {
    LibraryInfo {
        version: VERSION,
        max_order: LPC_MAX_ORDER,
        simd_support: utils::simd::get_simd_support(),
        default_kernel_path: utils::simd::select_kernel_path(LPC_MAX_ORDER),
    }
}

/// Library information structure
#[derive(Debug, Clone)]
pub struct LibraryInfo {
    /// Library version
    pub version: &'static str,
    /// Highest supported LPC order
    pub max_order: usize,
    /// SIMD support information
    pub simd_support: utils::simd::SimdSupport,
    /// Kernel path chosen for full-order filters
    pub default_kernel_path: KernelPath,
}
