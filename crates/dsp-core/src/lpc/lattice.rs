//! Lattice-form LPC synthesis filter
//!
//! Driven by reflection coefficients in `[-1, 1)`, applied with a doubling
//! multiply. Each sample first runs a backward sweep over all stages to
//! resolve the output, then a second sweep feeds that output into every
//! stage state. No stage state changes before the output is known.

use super::state::LatticeState;
use crate::config::LatticeConfig;
use crate::error::Result;
use crate::fixed_point::{
    f_add_saturate, f_mult, f_sub_saturate, scale_value, scale_value_saturate,
};
use crate::types::{FixpDbl, FixpSgl, Traversal};
use crate::utils::validation::{
    validate_coefficients, validate_lattice_order, validate_signal, validate_state,
};
use tracing::{debug, trace};

/// Run the lattice synthesis filter over `signal` in place.
///
/// Input samples are scaled by `signal_e` on entry and output samples by
/// `-signal_e_out` (saturating) on exit. Any non-zero number of stages is
/// accepted. `state` holds one word per stage and must be at least
/// `coeff.len()` long.
pub fn lpc_synthesis_lattice(
    signal: &mut [FixpDbl],
    signal_e: i32,
    signal_e_out: i32,
    traversal: Traversal,
    coeff: &[FixpSgl],
    state: &mut [FixpDbl],
) {
    let order = coeff.len();
    debug_assert!(order >= 1);
    debug_assert!(state.len() >= order);

    let state = &mut state[..order];
    let len = signal.len();

    for n in 0..len {
        let pos = traversal.position(n, len);
        let mut tmp = scale_value(signal[pos], signal_e);

        for (k, s) in coeff.iter().zip(state.iter()).rev() {
            tmp = f_sub_saturate(tmp, f_mult(*k, *s));
        }

        for (k, s) in coeff.iter().zip(state.iter_mut()).rev() {
            *s = f_add_saturate(*s, f_mult(*k, tmp));
        }

        signal[pos] = scale_value_saturate(tmp, -signal_e_out);
    }
}

/// Checked variant of [`lpc_synthesis_lattice`]
pub fn try_lpc_synthesis_lattice(
    signal: &mut [FixpDbl],
    signal_e: i32,
    signal_e_out: i32,
    increment: i32,
    coeff: &[FixpSgl],
    state: &mut [FixpDbl],
) -> Result<()> {
    let traversal = Traversal::from_increment(increment)?;
    let order = validate_lattice_order(coeff.len())?;
    LatticeConfig::new(order)
        .with_signal_exponents(signal_e, signal_e_out)
        .validate()?;
    validate_signal(signal)?;
    validate_state(state, order)?;

    lpc_synthesis_lattice(signal, signal_e, signal_e_out, traversal, coeff, state);
    Ok(())
}

/// Lattice synthesis filter owning its reflection coefficients and state
#[derive(Debug, Clone)]
pub struct LatticeSynthesisFilter {
    coeffs: Vec<FixpSgl>,
    signal_e: i32,
    signal_e_out: i32,
    traversal: Traversal,
    state: LatticeState,
}

impl LatticeSynthesisFilter {
    /// Create a filter with zeroed stage states
    pub fn new(config: &LatticeConfig, coeffs: &[FixpSgl]) -> Result<Self> {
        let order = config.validate()?;
        validate_coefficients(coeffs.len(), order)?;

        debug!(
            "Created lattice synthesis filter: order={}, signal_e={}, signal_e_out={}",
            order, config.signal_e, config.signal_e_out
        );

        Ok(Self {
            coeffs: coeffs.to_vec(),
            signal_e: config.signal_e,
            signal_e_out: config.signal_e_out,
            traversal: config.traversal,
            state: LatticeState::new(order),
        })
    }

    /// Replace the reflection coefficients, keeping the stage states
    pub fn set_coefficients(&mut self, coeffs: &[FixpSgl]) -> Result<()> {
        validate_coefficients(coeffs.len(), self.order())?;
        self.coeffs.copy_from_slice(coeffs);
        trace!("Lattice coefficients updated: order={}", self.order());
        Ok(())
    }

    /// Filter one block in place
    pub fn process(&mut self, signal: &mut [FixpDbl]) -> Result<()> {
        validate_signal(signal)?;
        lpc_synthesis_lattice(
            signal,
            self.signal_e,
            self.signal_e_out,
            self.traversal,
            &self.coeffs,
            self.state.samples_mut(),
        );
        Ok(())
    }

    /// Zero every stage state
    pub fn reset(&mut self) {
        self.state.reset();
        debug!("Lattice synthesis state reset (order={})", self.order());
    }

    /// Current stage states
    pub fn state(&self) -> &LatticeState {
        &self.state
    }

    /// Active reflection coefficients
    pub fn coefficients(&self) -> &[FixpSgl] {
        &self.coeffs
    }

    /// Number of stages
    pub fn order(&self) -> usize {
        self.coeffs.len()
    }
}
