//! Utility modules for kernel path selection and input validation

pub mod simd;
pub mod validation;
