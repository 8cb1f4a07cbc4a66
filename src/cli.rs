//! Command-line token handling.
//!
//! Splits each argument into its include/exclude sign and CIDR text,
//! enforces the single-family rule, and injects the default included
//! subnets when only exclusions are given.

use lazy_static::lazy_static;
use regex::Regex;

use crate::error::SubnetError;
use crate::models::{Family, Subnet};

lazy_static! {
    // Optional +/- sign, then address text and a prefix length.
    static ref TOKEN_RE: Regex =
        Regex::new(r"^(?P<sign>[+-]?)(?P<cidr>[0-9A-Fa-f:.]+/[0-9]{1,3})$").expect("Invalid Regex?");
}

/// The two subnet lists recovered from the command line.
#[derive(Debug, PartialEq, Eq)]
pub struct ParsedArgs {
    pub included: Vec<Subnet>,
    pub excluded: Vec<Subnet>,
}

/// Parse the command-line tokens into included and excluded subnet lists.
///
/// A leading `+` (or no sign) marks inclusion, `-` marks exclusion. The
/// family of the first subnet locks the run's mode; any later subnet of
/// the other family is a [`SubnetError::FamilyMismatch`]. If no subnet
/// was included, the family's private-use defaults are injected.
pub fn parse_args(args: &[String]) -> Result<ParsedArgs, SubnetError> {
    let mut included: Vec<Subnet> = Vec::new();
    let mut excluded: Vec<Subnet> = Vec::new();
    let mut mode: Option<Family> = None;

    for arg in args {
        let caps = TOKEN_RE.captures(arg).ok_or_else(|| SubnetError::Parse {
            token: arg.clone(),
        })?;
        let include_subnet = &caps["sign"] != "-";
        let cidr = &caps["cidr"];

        let subnet = Subnet::new(cidr)?;
        match mode {
            Some(expected) if subnet.family() != expected => {
                return Err(SubnetError::FamilyMismatch {
                    token: cidr.to_string(),
                    expected,
                });
            }
            Some(_) => {}
            None => mode = Some(subnet.family()),
        }

        log::debug!(
            "parsed {} subnet {subnet}",
            if include_subnet { "included" } else { "excluded" }
        );
        if include_subnet {
            included.push(subnet);
        } else {
            excluded.push(subnet);
        }
    }

    if included.is_empty() {
        if let Some(family) = mode {
            included = default_included_subnets(family)?;
            log::info!(
                "No included subnets given, using {} {family} defaults",
                included.len()
            );
        }
    }

    Ok(ParsedArgs { included, excluded })
}

/// Good defaults for the included list: the private-use ranges of the
/// locked family.
fn default_included_subnets(family: Family) -> Result<Vec<Subnet>, SubnetError> {
    let cidrs: &[&str] = match family {
        Family::V4 => &["10.0.0.0/8", "172.16.0.0/12", "192.168.0.0/16"],
        Family::V6 => &["fc00::/7"],
    };
    cidrs.iter().map(|cidr| Subnet::new(cidr)).collect()
}
