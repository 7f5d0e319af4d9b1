//! LPC synthesis test suite
//!
//! Hand-computed vectors, block streaming, and randomized comparisons
//! between kernel paths.

mod utils;

mod streaming_tests;
