//! Direct-form LPC synthesis filter
//!
//! Implements the all-pole recursion
//!
//! ```text
//! y(n) = x(n) - a[1]*y(n-1) - a[2]*y(n-2) - ... - a[order]*y(n-order)
//! ```
//!
//! on a block of samples in place, continuing from the output history kept
//! in a rotating state buffer.
//!
//! # Scaling
//!
//! Coefficients share one exponent `lpc_coeff_e`. Each input sample is
//! shifted right by `lpc_coeff_e + 1` so that the half-products of the taps
//! line up with it, and the finished sum is shifted back left by the same
//! amount with saturation. The output therefore has the input's exponent.

use super::lanes::lpc_synthesis_lanes;
use super::state::LpcState;
use crate::config::SynthesisConfig;
use crate::error::Result;
use crate::fixed_point::{FixpMul, scale_value, scale_wide_saturate};
use crate::types::{FixpDbl, FixpSgl, LPC_MAX_ORDER, LpcOrder, Traversal};
use crate::utils::simd::KernelPath;
use crate::utils::validation::{
    validate_coeff_exponent, validate_coefficients, validate_order, validate_signal,
    validate_state, validate_state_index,
};
use std::fmt::Debug;
use tracing::{debug, trace};

/// Word type usable as a direct-form coefficient.
///
/// Implemented for 32-bit and 16-bit fractions. The 16-bit form yields the
/// same tap products as its widened 32-bit value.
pub trait LpcCoefficient: Copy + Default + Debug + Send + Sync + 'static {
    /// `state * self / 2`
    fn tap_div2(self, state: FixpDbl) -> FixpDbl;
}

impl LpcCoefficient for FixpDbl {
    #[inline]
    fn tap_div2(self, state: FixpDbl) -> FixpDbl {
        state.mult_div2(self)
    }
}

impl LpcCoefficient for FixpSgl {
    #[inline]
    fn tap_div2(self, state: FixpDbl) -> FixpDbl {
        state.mult_div2(self)
    }
}

/// Run the direct-form synthesis filter over `signal` in place.
///
/// * `lpc_coeff_m` - `order` coefficients, ascending lag
/// * `lpc_coeff_e` - their shared exponent, at least `-1`
/// * `state` - output history, at least `order` words
/// * `state_index` - rotating index into `state`, in `[0, order)`
///
/// Samples are processed strictly one after another in `traversal` order.
/// For each sample the taps are summed in ascending physical state order,
/// starting at `state[0]`. The sum is kept wide so that an overflowing
/// accumulation saturates instead of wrapping.
///
/// Preconditions are debug assertions only; use [`try_lpc_synthesis`] for
/// unchecked input.
pub fn lpc_synthesis<C: LpcCoefficient>(
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

    let shift = lpc_coeff_e + 1;
    let state = &mut state[..order];
    let len = signal.len();
    let mut index = *state_index;

    for n in 0..len {
        let pos = traversal.position(n, len);
        let mut acc = i64::from(scale_value(signal[pos], -shift).0);

        // state[j] pairs with coefficient (j - index) mod order
        let (older, newer) = state.split_at(index);
        let (tail, head) = lpc_coeff_m.split_at(order - index);
        for (s, c) in older.iter().zip(head) {
            acc -= i64::from(c.tap_div2(*s).0);
        }
        for (s, c) in newer.iter().zip(tail) {
            acc -= i64::from(c.tap_div2(*s).0);
        }

        let y = scale_wide_saturate(acc, shift);

        index = if index == 0 { order - 1 } else { index - 1 };
        state[index] = y;
        signal[pos] = y;
    }

    *state_index = index;
}

/// Route to the kernel matching `path`. All paths give identical output.
pub fn lpc_synthesis_dispatch<C: LpcCoefficient>(
    path: KernelPath,
    signal: &mut [FixpDbl],
    traversal: Traversal,
    lpc_coeff_m: &[C],
    lpc_coeff_e: i32,
    state: &mut [FixpDbl],
    state_index: &mut usize,
) {
    match path {
        KernelPath::Scalar => lpc_synthesis(
            signal,
            traversal,
            lpc_coeff_m,
            lpc_coeff_e,
            state,
            state_index,
        ),
        KernelPath::Lanes4 => lpc_synthesis_lanes(
            signal,
            traversal,
            lpc_coeff_m,
            lpc_coeff_e,
            state,
            state_index,
        ),
    }
}

/// Checked variant of [`lpc_synthesis`]: validates every precondition and
/// returns an error instead of running on malformed input.
pub fn try_lpc_synthesis<C: LpcCoefficient>(
    signal: &mut [FixpDbl],
    increment: i32,
    lpc_coeff_m: &[C],
    lpc_coeff_e: i32,
    state: &mut [FixpDbl],
    state_index: &mut usize,
) -> Result<()> {
    let traversal = Traversal::from_increment(increment)?;
    let order = validate_order(lpc_coeff_m.len())?.get();
    validate_coeff_exponent(lpc_coeff_e)?;
    validate_signal(signal)?;
    validate_state(state, order)?;
    validate_state_index(*state_index, order)?;

    lpc_synthesis(
        signal,
        traversal,
        lpc_coeff_m,
        lpc_coeff_e,
        state,
        state_index,
    );
    Ok(())
}

/// Direct-form synthesis filter owning its coefficients and state.
///
/// One instance per channel. Successive [`process`](Self::process) calls
/// continue the same recursion, so a stream can be filtered in blocks of
/// any size.
#[derive(Debug, Clone)]
pub struct LpcSynthesisFilter<C: LpcCoefficient = FixpDbl> {
    coeffs: [C; LPC_MAX_ORDER],
    coeff_e: i32,
    order: LpcOrder,
    traversal: Traversal,
    kernel_path: KernelPath,
    state: LpcState,
}

impl<C: LpcCoefficient> LpcSynthesisFilter<C> {
    /// Create a filter with zeroed state
    pub fn new(config: &SynthesisConfig, coeffs: &[C]) -> Result<Self> {
        let order = config.validate()?;
        validate_coefficients(coeffs.len(), order.get())?;

        let mut stored = [C::default(); LPC_MAX_ORDER];
        stored[..order.get()].copy_from_slice(coeffs);
        let kernel_path = config.resolved_kernel_path();

        debug!(
            "Created LPC synthesis filter: order={}, coeff_e={}, traversal={:?}, path={}",
            order, config.coeff_exponent, config.traversal, kernel_path
        );

        Ok(Self {
            coeffs: stored,
            coeff_e: config.coeff_exponent,
            order,
            traversal: config.traversal,
            kernel_path,
            state: LpcState::new(order),
        })
    }

    /// Replace the coefficient set, keeping the output history.
    ///
    /// The order cannot change; build a new filter for that.
    pub fn set_coefficients(&mut self, coeffs: &[C], coeff_e: i32) -> Result<()> {
        validate_coefficients(coeffs.len(), self.order.get())?;
        validate_coeff_exponent(coeff_e)?;
        self.coeffs[..self.order.get()].copy_from_slice(coeffs);
        self.coeff_e = coeff_e;
        trace!("LPC coefficients updated: order={}, coeff_e={}", self.order, coeff_e);
        Ok(())
    }

    /// Filter one block in place
    pub fn process(&mut self, signal: &mut [FixpDbl]) -> Result<()> {
        validate_signal(signal)?;
        let order = self.order.get();
        let (state, index) = self.state.parts_mut();
        lpc_synthesis_dispatch(
            self.kernel_path,
            signal,
            self.traversal,
            &self.coeffs[..order],
            self.coeff_e,
            state,
            index,
        );
        Ok(())
    }

    /// Zero the output history
    pub fn reset(&mut self) {
        self.state.reset();
        debug!("LPC synthesis state reset (order={})", self.order);
    }

    /// Current filter state
    pub fn state(&self) -> &LpcState {
        &self.state
    }

    /// Active coefficients
    pub fn coefficients(&self) -> &[C] {
        &self.coeffs[..self.order.get()]
    }

    /// Shared coefficient exponent
    pub fn coeff_exponent(&self) -> i32 {
        self.coeff_e
    }

    /// Filter order
    pub fn order(&self) -> LpcOrder {
        self.order
    }

    /// Traversal direction used by [`process`](Self::process)
    pub fn traversal(&self) -> Traversal {
        self.traversal
    }

    /// Kernel path in use
    pub fn kernel_path(&self) -> KernelPath {
        self.kernel_path
    }
}
