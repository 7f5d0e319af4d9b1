//! Input validation for the checked API
//!
//! The kernels only debug-assert their preconditions. Everything reachable
//! from configuration or a `try_*` entry point goes through these checks
//! first.

use crate::error::{DspError, Result};
use crate::types::{DFRACT_BITS, FixpDbl, LpcOrder};

/// Validate a direct-form filter order
pub fn validate_order(order: usize) -> Result<LpcOrder> {
    LpcOrder::new(order)
}

/// Validate a lattice stage count; any non-zero count is accepted
pub fn validate_lattice_order(order: usize) -> Result<usize> {
    if order == 0 {
        return Err(DspError::invalid_config(
            "lattice filter needs at least one stage",
        ));
    }
    Ok(order)
}

/// Validate the shared direct-form coefficient exponent.
///
/// Input samples are shifted right by `exponent + 1`, which must lie in
/// `[0, DFRACT_BITS)`.
pub fn validate_coeff_exponent(exponent: i32) -> Result<()> {
    if exponent
        .checked_add(1)
        .is_none_or(|shift| !(0..DFRACT_BITS).contains(&shift))
    {
        return Err(DspError::InvalidCoefficientExponent { exponent });
    }
    Ok(())
}

/// Validate that exactly `order` coefficients were supplied
pub fn validate_coefficients(count: usize, order: usize) -> Result<()> {
    if count != order {
        return Err(DspError::CoefficientCountMismatch {
            expected: order,
            actual: count,
        });
    }
    Ok(())
}

/// Validate a caller-owned state buffer
pub fn validate_state(state: &[FixpDbl], order: usize) -> Result<()> {
    if state.len() < order {
        return Err(DspError::StateSizeMismatch {
            needed: order,
            actual: state.len(),
        });
    }
    Ok(())
}

/// Validate a rotating state index
pub fn validate_state_index(index: usize, order: usize) -> Result<()> {
    if index >= order {
        return Err(DspError::StateIndexOutOfRange { index, order });
    }
    Ok(())
}

/// Validate a signal block
pub fn validate_signal(signal: &[FixpDbl]) -> Result<()> {
    if signal.is_empty() {
        return Err(DspError::EmptySignal);
    }
    Ok(())
}
