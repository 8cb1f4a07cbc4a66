//! Domain models for subnet-difference.
//!
//! This module contains the core data structures used throughout the
//! application:
//! - [`Subnet`] - a CIDR block in the unified 128-bit address space
//! - [`Family`] - the IPv4/IPv6 address family marker

mod subnet;

// Re-export public types
pub use subnet::{
    get_cidr_mask, precedence_order, print_order, Family, Subnet, MAX_LENGTH_V4, MAX_LENGTH_V6,
    V4_PREFIX_OFFSET,
};
