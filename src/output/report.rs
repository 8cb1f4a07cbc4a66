//! Report rendering.
//!
//! Formats the three stdout sections: the optimized included subnets,
//! the optimized excluded subnets, and the calculated difference.

use itertools::Itertools;

use crate::models::Subnet;
use crate::SubnetReport;

/// Render the full three-section report as printed on stdout.
pub fn render_report(report: &SubnetReport) -> String {
    let mut out = String::new();
    out.push_str(&render_section(
        "Given Included Subnets:",
        '+',
        &report.included,
    ));
    out.push('\n');
    out.push_str(&render_section(
        "Given Excluded Subnets:",
        '-',
        &report.excluded,
    ));
    out.push('\n');
    out.push_str(&render_section(
        "Included Subnets without Excluded Subnets:",
        '=',
        &report.difference,
    ));
    out
}

fn render_section(title: &str, sign: char, subnets: &[Subnet]) -> String {
    let mut section = format!("{title}\n");
    if !subnets.is_empty() {
        section.push_str(&subnets.iter().map(|s| format!("{sign} {s}")).join("\n"));
        section.push('\n');
    }
    section
}

#[cfg(test)]
mod tests {
    use super::*;

    fn subnets(cidrs: &[&str]) -> Vec<Subnet> {
        cidrs
            .iter()
            .map(|s| Subnet::new(s).expect("Invalid test cidr"))
            .collect()
    }

    #[test]
    fn test_render_section() {
        assert_eq!(
            render_section("Given Included Subnets:", '+', &subnets(&["10.0.0.0/8"])),
            "Given Included Subnets:\n+ 10.0.0.0/8\n"
        );
        assert_eq!(
            render_section("Given Excluded Subnets:", '-', &[]),
            "Given Excluded Subnets:\n"
        );
    }

    #[test]
    fn test_render_report() {
        let report = SubnetReport {
            included: subnets(&["10.0.0.0/8"]),
            excluded: subnets(&["10.1.0.0/16"]),
            difference: subnets(&["10.128.0.0/9"]),
        };
        assert_eq!(
            render_report(&report),
            "Given Included Subnets:\n\
             + 10.0.0.0/8\n\
             \n\
             Given Excluded Subnets:\n\
             - 10.1.0.0/16\n\
             \n\
             Included Subnets without Excluded Subnets:\n\
             = 10.128.0.0/9\n"
        );
    }
}
