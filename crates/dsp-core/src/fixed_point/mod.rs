//! Bit-exact fixed-point arithmetic kernel
//!
//! Pure functions over [`FixpDbl`](crate::types::FixpDbl) and
//! [`FixpSgl`](crate::types::FixpSgl). Nothing here can fail: overflow either
//! saturates (where documented) or is excluded by the caller's headroom
//! bookkeeping.

pub mod mult;
pub mod norm;
pub mod saturate;
pub mod scale;

pub use mult::{
    FixpMul, f_mult, f_mult_add, f_mult_add_div2, f_mult_div2, f_mult_sub, f_mult_sub_div2,
    f_pow2, f_pow2_div2,
};
pub use norm::{count_leading_bits, f_norm, f_norm_sgl, f_normz};
pub use saturate::{f_abs, f_add_saturate, f_max, f_min, f_sub_saturate, saturate_to_dbl};
pub use scale::{
    get_scalefactor, scale_value, scale_value_saturate, scale_values, scale_values_saturate,
    scale_wide_saturate,
};
