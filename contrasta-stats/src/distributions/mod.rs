//! Distribution CDFs backing the p-value computations

mod special;
mod f;
mod t;

pub use f::f_cdf;
pub use t::t_cdf;

pub(crate) use special::regularized_incomplete_beta;
