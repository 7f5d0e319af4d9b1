//! LPC synthesis filters
//!
//! Two recursive structures share this module:
//!
//! - [`synthesis`]: direct-form all-pole filter with a rotating history
//!   buffer, plus the equivalent lane-parallel kernel in [`lanes`]
//! - [`lattice`]: reflection-coefficient lattice filter
//!
//! Both come as free functions over caller-owned buffers and as owned
//! filter types that keep their state between blocks.

pub mod lanes;
pub mod lattice;
pub mod multichannel;
pub mod state;
pub mod synthesis;

pub use lanes::lpc_synthesis_lanes;
pub use lattice::{LatticeSynthesisFilter, lpc_synthesis_lattice, try_lpc_synthesis_lattice};
pub use multichannel::MultiChannelSynthesis;
pub use state::{LatticeState, LpcState};
pub use synthesis::{
    LpcCoefficient, LpcSynthesisFilter, lpc_synthesis, lpc_synthesis_dispatch, try_lpc_synthesis,
};

#[cfg(test)]
mod tests;
