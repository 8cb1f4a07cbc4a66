//! Error types for subnet-difference.
//!
//! Every variant is terminal: the binary reports it on stderr and exits
//! with code 1. Violated algebra preconditions (merging non-siblings,
//! splitting a /128) are caller bugs and panic instead of surfacing here.

use thiserror::Error;

use crate::models::Family;

/// User-facing errors; all abort the run.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SubnetError {
    /// No subnets given on the command line.
    #[error("Usage: {program} [{{+|-}}]subnet1 [[{{+|-}}]subnet2] ...")]
    Usage { program: String },

    /// Address or prefix length could not be parsed.
    #[error("Unable to parse cidr subnet {token}.")]
    Parse { token: String },

    /// Subnet family conflicts with the family locked by the first subnet.
    #[error("Unable to add {} subnet after {} subnet: {token}.", .expected.other(), .expected)]
    FamilyMismatch { token: String, expected: Family },
}
