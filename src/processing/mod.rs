//! Subnet set calculations.
//!
//! This module contains the two fixed-point rewrite loops:
//! - [`optimize`] - minimization of a subnet list
//! - [`difference`] - carving excluded coverage out of included coverage

mod difference;
mod optimize;

// Re-export public functions
pub use difference::subtract_subnets;
pub use optimize::optimize_subnets;
