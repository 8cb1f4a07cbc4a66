// cargo watch -x 'fmt' -x 'test'

//! Calculate the minimal set of subnets covering the included CIDRs
//! minus the excluded CIDRs, for IPv4 or IPv6 (one family per run).

pub mod cli;
pub mod error;
pub mod models;
pub mod output;
pub mod processing;

use cli::ParsedArgs;
use error::SubnetError;
use models::{precedence_order, print_order, Subnet};
use processing::{optimize_subnets, subtract_subnets};

/// The computed result of one run: the optimized input lists in print
/// order, and their difference in the order the optimizer produced.
#[derive(Debug, PartialEq, Eq)]
pub struct SubnetReport {
    pub included: Vec<Subnet>,
    pub excluded: Vec<Subnet>,
    pub difference: Vec<Subnet>,
}

/// Run the whole calculation: parse the arguments, optimize both lists,
/// and subtract the excluded coverage from the included coverage.
pub fn run(program: &str, args: &[String]) -> Result<SubnetReport, SubnetError> {
    if args.is_empty() {
        return Err(SubnetError::Usage {
            program: program.to_string(),
        });
    }

    let ParsedArgs {
        mut included,
        mut excluded,
    } = cli::parse_args(args)?;

    optimize_subnets(&mut included);
    optimize_subnets(&mut excluded);

    // Snapshot the given lists for display before the difference
    // calculation consumes the included list.
    let mut given_included = included.clone();
    let mut given_excluded = excluded.clone();
    given_included.sort_by(print_order);
    given_excluded.sort_by(print_order);

    excluded.sort_by(precedence_order);
    let mut difference = included;
    subtract_subnets(&mut difference, &excluded);

    Ok(SubnetReport {
        included: given_included,
        excluded: given_excluded,
        difference,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(tokens: &[&str]) -> Vec<String> {
        tokens.iter().map(|s| s.to_string()).collect()
    }

    fn subnets(cidrs: &[&str]) -> Vec<Subnet> {
        cidrs
            .iter()
            .map(|s| Subnet::new(s).expect("Invalid test cidr"))
            .collect()
    }

    #[test]
    fn test_run_no_args_is_usage_error() {
        assert_eq!(
            run("subnet-difference", &[]),
            Err(SubnetError::Usage {
                program: "subnet-difference".to_string()
            })
        );
    }

    #[test]
    fn test_run_simple_difference() {
        let report = run("prog", &args(&["10.0.0.0/8", "-10.1.0.0/16"])).unwrap();
        assert_eq!(report.included, subnets(&["10.0.0.0/8"]));
        assert_eq!(report.excluded, subnets(&["10.1.0.0/16"]));

        let removed = Subnet::new("10.1.0.0/16").unwrap();
        let whole = Subnet::new("10.0.0.0/8").unwrap();
        for subnet in &report.difference {
            assert!(whole.contains(subnet));
            assert!(!subnet.contains(&removed));
        }
    }

    #[test]
    fn test_run_given_lists_are_optimized_and_print_ordered() {
        let report = run(
            "prog",
            &args(&["192.168.1.0/24", "10.0.0.0/8", "192.168.0.0/24"]),
        )
        .unwrap();
        // Siblings merged, then sorted by network address.
        assert_eq!(report.included, subnets(&["10.0.0.0/8", "192.168.0.0/23"]));
    }
}
