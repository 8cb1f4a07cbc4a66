//! Subnet model over a unified 128-bit address space.
//!
//! Provides [`Subnet`] for representing IPv4 and IPv6 CIDR blocks with a
//! single 128-bit arithmetic, along with the mask / contains / split /
//! merge algebra the set calculations are built on. IPv4 subnets are
//! embedded at the bottom of the IPv6 space: a `/p` IPv4 prefix is stored
//! internally as `/(p + 96)` and the address occupies the low 32 bits.

use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::cmp::Ordering;
use std::net::{Ipv4Addr, Ipv6Addr};
use std::str::FromStr;

use crate::error::SubnetError;

/// Maximum prefix length for an IPv4 subnet (32 bits).
pub const MAX_LENGTH_V4: u8 = 32;
/// Maximum prefix length for an IPv6 subnet (128 bits).
pub const MAX_LENGTH_V6: u8 = 128;
/// Offset at which the 32-bit IPv4 space sits inside the 128-bit space.
pub const V4_PREFIX_OFFSET: u8 = 96;

/// Address family of a [`Subnet`].
#[derive(Eq, PartialEq, Debug, Copy, Clone, Hash)]
pub enum Family {
    V4,
    V6,
}

impl Family {
    /// The opposite family.
    pub fn other(&self) -> Family {
        match self {
            Family::V4 => Family::V6,
            Family::V6 => Family::V4,
        }
    }
}

impl std::fmt::Display for Family {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Family::V4 => write!(f, "IPv4"),
            Family::V6 => write!(f, "IPv6"),
        }
    }
}

/// Convert a prefix length to a 128-bit network mask.
///
/// The top `len` bits are set, the rest are zero; `len == 0` yields the
/// all-zero mask matching the entire address space.
pub fn get_cidr_mask(len: u8) -> u128 {
    assert!(len <= MAX_LENGTH_V6, "Prefix length {len} out of range");
    if len == 0 {
        0
    } else {
        u128::MAX << (128 - u32::from(len))
    }
}

/// A CIDR block, stored in canonical masked form.
///
/// All bits of `network` beyond `prefix_length` are zero; the constructor
/// enforces this, so two subnets cover the same range iff they are equal.
#[derive(Eq, PartialEq, Debug, Copy, Clone, Hash)]
pub struct Subnet {
    network: u128,
    prefix_length: u8,
    family: Family,
}

impl Subnet {
    /// Create a new [`Subnet`] from a CIDR string (e.g. "10.0.0.0/24" or
    /// "fc00::/7").
    ///
    /// The family is detected from the address text; IPv4 addresses are
    /// embedded into the 128-bit space with the `+96` prefix offset.
    /// The prefix length is validated against the detected family.
    pub fn new(cidr: &str) -> Result<Subnet, SubnetError> {
        let cidr = cidr.trim();
        let parse_err = || SubnetError::Parse {
            token: cidr.to_string(),
        };

        let (addr_str, len_str) = cidr.split_once('/').ok_or_else(parse_err)?;
        let prefix_length: u8 = len_str.parse().map_err(|_| parse_err())?;

        if let Ok(addr) = Ipv6Addr::from_str(addr_str) {
            if prefix_length > MAX_LENGTH_V6 {
                return Err(parse_err());
            }
            Ok(Subnet::from_parts(
                u128::from(addr),
                prefix_length,
                Family::V6,
            ))
        } else if let Ok(addr) = Ipv4Addr::from_str(addr_str) {
            if prefix_length > MAX_LENGTH_V4 {
                return Err(parse_err());
            }
            Ok(Subnet::from_parts(
                u128::from(u32::from(addr)),
                prefix_length + V4_PREFIX_OFFSET,
                Family::V4,
            ))
        } else {
            Err(parse_err())
        }
    }

    /// Create a [`Subnet`] from its raw parts, masking the network address
    /// into canonical form. `prefix_length` is the internal value (already
    /// offset by +96 for IPv4).
    pub fn from_parts(network: u128, prefix_length: u8, family: Family) -> Subnet {
        Subnet {
            network: network & get_cidr_mask(prefix_length),
            prefix_length,
            family,
        }
    }

    /// The network address in the unified 128-bit space.
    pub fn network(&self) -> u128 {
        self.network
    }

    /// The internal prefix length (0-128, offset by +96 for IPv4).
    pub fn prefix_length(&self) -> u8 {
        self.prefix_length
    }

    /// The address family.
    pub fn family(&self) -> Family {
        self.family
    }

    /// Check if this subnet's range covers `other`'s range.
    ///
    /// A subnet contains itself. Both subnets are assumed to belong to the
    /// same run and therefore to the same family.
    pub fn contains(&self, other: &Subnet) -> bool {
        self.prefix_length <= other.prefix_length
            && other.network & get_cidr_mask(self.prefix_length) == self.network
    }

    /// Check whether two subnets are the sibling halves of a common parent
    /// and can be merged into it. Symmetric in its arguments.
    pub fn can_merge(first: &Subnet, second: &Subnet) -> bool {
        if first.family != second.family {
            return false;
        }
        if first.prefix_length != second.prefix_length {
            return false;
        }
        if first.prefix_length == 0 {
            // The whole address space has no sibling.
            return false;
        }
        if first.prefix_length == 1 {
            // Both halves of the whole space.
            return true;
        }
        let parent_mask = get_cidr_mask(first.prefix_length - 1);
        first.network & parent_mask == second.network & parent_mask
    }

    /// Merge two sibling subnets into their common parent.
    ///
    /// # Panics
    /// Panics if [`Subnet::can_merge`] does not hold; the callers in the
    /// set calculations check it first, so a panic here is a caller bug.
    pub fn merge(first: &Subnet, second: &Subnet) -> Subnet {
        assert!(
            Subnet::can_merge(first, second),
            "merge called on non-mergeable subnets {first} and {second}"
        );
        Subnet::from_parts(
            first.network.min(second.network),
            first.prefix_length - 1,
            first.family,
        )
    }

    /// Split this subnet into its two halves, one prefix bit longer each.
    /// The halves are disjoint and their union is exactly this subnet.
    ///
    /// # Panics
    /// Panics on a single-address subnet (internal prefix length 128).
    pub fn split(&self) -> (Subnet, Subnet) {
        assert!(
            self.prefix_length < MAX_LENGTH_V6,
            "Cannot split single-address subnet {self}"
        );
        let new_prefix_length = self.prefix_length + 1;
        let low = Subnet::from_parts(self.network, new_prefix_length, self.family);
        let high = Subnet::from_parts(
            self.network | 1u128 << (128 - u32::from(new_prefix_length)),
            new_prefix_length,
            self.family,
        );
        (low, high)
    }
}

/// Print order: network address ascending, then prefix length ascending.
/// Used for the human-facing listings.
pub fn print_order(first: &Subnet, second: &Subnet) -> Ordering {
    first
        .network
        .cmp(&second.network)
        .then(first.prefix_length.cmp(&second.prefix_length))
}

/// Precedence order: prefix length ascending (coarsest subnets first),
/// then network address ascending. Used before the set calculations.
pub fn precedence_order(first: &Subnet, second: &Subnet) -> Ordering {
    first
        .prefix_length
        .cmp(&second.prefix_length)
        .then(first.network.cmp(&second.network))
}

impl std::fmt::Display for Subnet {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.family {
            Family::V6 => write!(f, "{}/{}", Ipv6Addr::from(self.network), self.prefix_length),
            Family::V4 => write!(
                f,
                "{}/{}",
                Ipv4Addr::from(self.network as u32),
                self.prefix_length - V4_PREFIX_OFFSET
            ),
        }
    }
}

impl Serialize for Subnet {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Subnet {
    fn deserialize<D>(deserializer: D) -> Result<Subnet, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Subnet::new(&s).map_err(de::Error::custom)
    }
}
