//! LPC filter state
//!
//! State buffers are created once per channel, start zeroed, and are mutated
//! in place by every filter call so that consecutive blocks behave like one
//! long signal.

use crate::types::{FixpDbl, LPC_MAX_ORDER, LpcOrder};

/// Direct-form synthesis memory.
///
/// Holds the last `order` output samples as a circular buffer. Logical
/// index 0 (the most recent output) is `samples()[index()]`; each new output
/// moves the index one step down, wrapping from 0 to `order - 1`. The index
/// always lies in `[0, order)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LpcState {
    /// Output history; only the first `order` words are in use
    state: [FixpDbl; LPC_MAX_ORDER],

    /// Physical position of the most recent output
    index: usize,

    order: usize,
}

impl LpcState {
    /// Create a zeroed state for the given order
    pub fn new(order: LpcOrder) -> Self {
        Self {
            state: [FixpDbl::ZERO; LPC_MAX_ORDER],
            index: 0,
            order: order.get(),
        }
    }

    /// Clear the history and rewind the index
    pub fn reset(&mut self) {
        self.state = [FixpDbl::ZERO; LPC_MAX_ORDER];
        self.index = 0;
    }

    /// Filter order this state was created for
    pub fn order(&self) -> usize {
        self.order
    }

    /// Current rotating index
    pub fn index(&self) -> usize {
        self.index
    }

    /// Physical history buffer (`order` words)
    pub fn samples(&self) -> &[FixpDbl] {
        &self.state[..self.order]
    }

    /// Most recent output sample
    pub fn newest(&self) -> FixpDbl {
        self.state[self.index]
    }

    /// History in logical order, newest first
    pub fn history(&self) -> impl Iterator<Item = FixpDbl> + '_ {
        let (older, newer) = self.samples().split_at(self.index);
        newer.iter().chain(older.iter()).copied()
    }

    /// Buffer and index, borrowed together for the kernels
    pub fn parts_mut(&mut self) -> (&mut [FixpDbl], &mut usize) {
        (&mut self.state[..self.order], &mut self.index)
    }
}

/// Lattice synthesis memory: one word per stage, sized at construction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LatticeState {
    state: Vec<FixpDbl>,
}

impl LatticeState {
    /// Create a zeroed state with `order` stages
    pub fn new(order: usize) -> Self {
        Self {
            state: vec![FixpDbl::ZERO; order],
        }
    }

    /// Zero every stage
    pub fn reset(&mut self) {
        self.state.fill(FixpDbl::ZERO);
    }

    /// Number of lattice stages
    pub fn order(&self) -> usize {
        self.state.len()
    }

    /// Per-stage state words
    pub fn samples(&self) -> &[FixpDbl] {
        &self.state
    }

    /// Mutable per-stage state words
    pub fn samples_mut(&mut self) -> &mut [FixpDbl] {
        &mut self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order(n: usize) -> LpcOrder {
        LpcOrder::new(n).unwrap()
    }

    #[test]
    fn test_lpc_state_init() {
        let state = LpcState::new(order(5));
        assert_eq!(state.order(), 5);
        assert_eq!(state.index(), 0);
        assert_eq!(state.samples().len(), 5);
        assert!(state.samples().iter().all(|s| *s == FixpDbl::ZERO));
    }

    #[test]
    fn test_lpc_state_history_order() {
        let mut state = LpcState::new(order(4));
        {
            let (buf, index) = state.parts_mut();
            buf.copy_from_slice(&[FixpDbl(10), FixpDbl(11), FixpDbl(12), FixpDbl(13)]);
            *index = 2;
        }
        assert_eq!(state.newest(), FixpDbl(12));
        let history: Vec<_> = state.history().map(|s| s.raw()).collect();
        assert_eq!(history, vec![12, 13, 10, 11]);
    }

    #[test]
    fn test_lpc_state_reset() {
        let mut state = LpcState::new(order(3));
        {
            let (buf, index) = state.parts_mut();
            buf[1] = FixpDbl(99);
            *index = 2;
        }
        state.reset();
        assert_eq!(state, LpcState::new(order(3)));
    }

    #[test]
    fn test_lattice_state() {
        let mut state = LatticeState::new(24);
        assert_eq!(state.samples().len(), 24);
        state.samples_mut()[23] = FixpDbl(1);
        assert_eq!(state.samples()[23], FixpDbl(1));
        state.reset();
        assert!(state.samples().iter().all(|s| *s == FixpDbl::ZERO));
        assert_eq!(state.order(), 24);
    }
}
