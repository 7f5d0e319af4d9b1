//! One synthesis filter per channel
//!
//! Channels never share state, so they can be filtered in any order or on
//! separate threads with identical results. Within a channel the samples
//! are always processed in sequence.

use super::synthesis::{LpcCoefficient, LpcSynthesisFilter};
use crate::config::SynthesisConfig;
use crate::error::{DspError, Result};
use crate::types::FixpDbl;
use rayon::prelude::*;
use tracing::debug;

/// Bank of direct-form filters, one per channel
#[derive(Debug, Clone)]
pub struct MultiChannelSynthesis<C: LpcCoefficient = FixpDbl> {
    filters: Vec<LpcSynthesisFilter<C>>,
}

impl<C: LpcCoefficient> MultiChannelSynthesis<C> {
    /// Create one filter per coefficient set, all sharing `config`
    pub fn new<S: AsRef<[C]>>(config: &SynthesisConfig, channel_coeffs: &[S]) -> Result<Self> {
        if channel_coeffs.is_empty() {
            return Err(DspError::invalid_config("at least one channel is required"));
        }
        let filters = channel_coeffs
            .iter()
            .map(|coeffs| LpcSynthesisFilter::new(config, coeffs.as_ref()))
            .collect::<Result<Vec<_>>>()?;

        debug!(
            "Created multichannel LPC synthesis: {} channels, order={}",
            filters.len(),
            config.order
        );
        Ok(Self { filters })
    }

    /// Number of channels
    pub fn channels(&self) -> usize {
        self.filters.len()
    }

    /// Per-channel filters
    pub fn filters(&self) -> &[LpcSynthesisFilter<C>] {
        &self.filters
    }

    /// Mutable per-channel filters, e.g. for coefficient updates
    pub fn filters_mut(&mut self) -> &mut [LpcSynthesisFilter<C>] {
        &mut self.filters
    }

    /// Filter every channel buffer in turn
    pub fn process<B: AsMut<[FixpDbl]>>(&mut self, buffers: &mut [B]) -> Result<()> {
        self.check_channels(buffers.len())?;
        for (filter, buffer) in self.filters.iter_mut().zip(buffers.iter_mut()) {
            filter.process(buffer.as_mut())?;
        }
        Ok(())
    }

    /// Filter the channel buffers on the rayon thread pool
    pub fn process_par<B: AsMut<[FixpDbl]> + Send>(&mut self, buffers: &mut [B]) -> Result<()> {
        self.check_channels(buffers.len())?;
        self.filters
            .par_iter_mut()
            .zip(buffers.par_iter_mut())
            .try_for_each(|(filter, buffer)| filter.process(buffer.as_mut()))
    }

    /// Reset every channel
    pub fn reset(&mut self) {
        for filter in &mut self.filters {
            filter.reset();
        }
    }

    fn check_channels(&self, buffers: usize) -> Result<()> {
        if buffers != self.filters.len() {
            return Err(DspError::ChannelCountMismatch {
                filters: self.filters.len(),
                buffers,
            });
        }
        Ok(())
    }
}
