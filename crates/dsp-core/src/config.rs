//! Filter configuration
//!
//! Configurations are plain values with builder-style setters. They are
//! checked once, when a filter is constructed, so that the per-block path
//! never has to.

use crate::error::{DspError, Result};
use crate::types::{DFRACT_BITS, LpcOrder, Traversal};
use crate::utils::simd::{KernelPath, select_kernel_path};
use crate::utils::validation::{validate_coeff_exponent, validate_lattice_order, validate_order};

/// Direct-form synthesis filter configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SynthesisConfig {
    /// Filter order, `1..=16`
    pub order: usize,
    /// Exponent shared by all coefficients
    pub coeff_exponent: i32,
    /// Sample traversal direction
    pub traversal: Traversal,
    /// Inner accumulation shape; `None` selects automatically
    pub kernel_path: Option<KernelPath>,
}

impl SynthesisConfig {
    /// Create a configuration with coefficient exponent 0, forward traversal
    /// and automatic kernel selection
    pub fn new(order: usize) -> Self {
        Self {
            order,
            coeff_exponent: 0,
            traversal: Traversal::Forward,
            kernel_path: None,
        }
    }

    /// Set the shared coefficient exponent
    pub fn with_coeff_exponent(mut self, coeff_exponent: i32) -> Self {
        self.coeff_exponent = coeff_exponent;
        self
    }

    /// Set the traversal direction
    pub fn with_traversal(mut self, traversal: Traversal) -> Self {
        self.traversal = traversal;
        self
    }

    /// Pin the kernel path instead of selecting it from CPU support
    pub fn with_kernel_path(mut self, kernel_path: KernelPath) -> Self {
        self.kernel_path = Some(kernel_path);
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<LpcOrder> {
        let order = validate_order(self.order)?;
        validate_coeff_exponent(self.coeff_exponent)?;
        Ok(order)
    }

    /// Kernel path the filter will run with
    pub fn resolved_kernel_path(&self) -> KernelPath {
        self.kernel_path.unwrap_or_else(|| select_kernel_path(self.order))
    }
}

/// Lattice synthesis filter configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LatticeConfig {
    /// Number of lattice stages, at least 1
    pub order: usize,
    /// Exponent of the incoming samples
    pub signal_e: i32,
    /// Exponent the outgoing samples are written at
    pub signal_e_out: i32,
    /// Sample traversal direction
    pub traversal: Traversal,
}

impl LatticeConfig {
    /// Create a configuration with unit input/output scale and forward traversal
    pub fn new(order: usize) -> Self {
        Self {
            order,
            signal_e: 0,
            signal_e_out: 0,
            traversal: Traversal::Forward,
        }
    }

    /// Set input and output exponents
    pub fn with_signal_exponents(mut self, signal_e: i32, signal_e_out: i32) -> Self {
        self.signal_e = signal_e;
        self.signal_e_out = signal_e_out;
        self
    }

    /// Set the traversal direction
    pub fn with_traversal(mut self, traversal: Traversal) -> Self {
        self.traversal = traversal;
        self
    }

    /// Validate the configuration, returning the stage count
    pub fn validate(&self) -> Result<usize> {
        let order = validate_lattice_order(self.order)?;
        let exponents = [("signal_e", self.signal_e), ("signal_e_out", self.signal_e_out)];
        for (name, exponent) in exponents {
            if exponent.unsigned_abs() >= DFRACT_BITS as u32 {
                return Err(DspError::invalid_config(format!(
                    "{} = {} exceeds the word width",
                    name, exponent
                )));
            }
        }
        Ok(order)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_synthesis_config_builder() {
        let config = SynthesisConfig::new(10)
            .with_coeff_exponent(2)
            .with_traversal(Traversal::Backward)
            .with_kernel_path(KernelPath::Scalar);
        assert_eq!(config.order, 10);
        assert_eq!(config.coeff_exponent, 2);
        assert_eq!(config.traversal, Traversal::Backward);
        assert_eq!(config.resolved_kernel_path(), KernelPath::Scalar);
        assert_eq!(config.validate().unwrap().get(), 10);
    }

    #[test]
    fn test_synthesis_config_validation() {
        assert!(SynthesisConfig::new(0).validate().is_err());
        assert!(SynthesisConfig::new(17).validate().is_err());
        assert!(matches!(
            SynthesisConfig::new(4).with_coeff_exponent(-2).validate(),
            Err(DspError::InvalidCoefficientExponent { exponent: -2 })
        ));
        assert!(SynthesisConfig::new(4).with_coeff_exponent(-1).validate().is_ok());
        assert!(matches!(
            SynthesisConfig::new(4).with_coeff_exponent(31).validate(),
            Err(DspError::InvalidCoefficientExponent { exponent: 31 })
        ));
    }

    #[test]
    fn test_automatic_kernel_path() {
        assert_eq!(
            SynthesisConfig::new(2).resolved_kernel_path(),
            KernelPath::Scalar
        );
        assert_eq!(
            SynthesisConfig::new(16).resolved_kernel_path(),
            select_kernel_path(16)
        );
    }

    #[test]
    fn test_lattice_config() {
        let config = LatticeConfig::new(12)
            .with_signal_exponents(3, 1)
            .with_traversal(Traversal::Backward);
        assert_eq!(config.validate().unwrap(), 12);
        assert_eq!(config.signal_e, 3);
        assert_eq!(config.signal_e_out, 1);
        assert!(LatticeConfig::new(0).validate().is_err());
        assert_eq!(LatticeConfig::new(20).validate().unwrap(), 20);
        assert!(LatticeConfig::new(4).with_signal_exponents(32, 0).validate().is_err());
        assert!(LatticeConfig::new(4).with_signal_exponents(0, -40).validate().is_err());
    }
}
