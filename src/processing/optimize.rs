//! Fixed-point subnet list optimizer.
//!
//! Rewrites a subnet list to its minimal canonical form: exact duplicates
//! dropped, subnets contained in another member dropped, sibling pairs
//! merged into their parent. Each rewrite restarts the scan, so the loop
//! only ends once no rule applies anywhere in the list.

use crate::models::{precedence_order, Subnet};

/// Minimize a subnet list in place while preserving its covered range.
///
/// Sorts by precedence order before and after the rewrite loop, so the
/// coarsest subnets are considered first and the result comes out
/// coarsest-first. Idempotent on the set of subnet values.
pub fn optimize_subnets(subnets: &mut Vec<Subnet>) {
    let before = subnets.len();
    subnets.sort_by(precedence_order);

    let mut found_optimization = true;
    while found_optimization {
        found_optimization = false;
        'scan: for i in 0..subnets.len() {
            for j in 0..subnets.len() {
                if i == j {
                    continue;
                }
                if subnets[i] == subnets[j] || subnets[i].contains(&subnets[j]) {
                    subnets.remove(j);
                    found_optimization = true;
                    break 'scan;
                } else if subnets[j].contains(&subnets[i]) {
                    subnets.remove(i);
                    found_optimization = true;
                    break 'scan;
                } else if Subnet::can_merge(&subnets[i], &subnets[j]) {
                    let merged = Subnet::merge(&subnets[i], &subnets[j]);
                    // Remove the higher index first so the lower stays valid.
                    subnets.remove(i.max(j));
                    subnets.remove(i.min(j));
                    subnets.push(merged);
                    found_optimization = true;
                    break 'scan;
                }
            }
        }
    }

    subnets.sort_by(precedence_order);
    log::debug!(
        "optimize_subnets: {} subnets in, {} subnets out",
        before,
        subnets.len()
    );
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

    /// Check whether a single address (given as a /32 or /128) is covered.
    fn covers(list: &[Subnet], addr: &str) -> bool {
        let probe = Subnet::new(addr).expect("Invalid probe address");
        list.iter().any(|s| s.contains(&probe))
    }

    #[test]
    fn test_merge_adjacent_siblings() {
        let mut list = subnets(&["10.0.0.0/24", "10.0.1.0/24"]);
        optimize_subnets(&mut list);
        assert_eq!(list, subnets(&["10.0.0.0/23"]));
    }

    #[test]
    fn test_drop_duplicates() {
        let mut list = subnets(&["192.168.0.0/16", "192.168.0.0/16"]);
        optimize_subnets(&mut list);
        assert_eq!(list, subnets(&["192.168.0.0/16"]));
    }

    #[test]
    fn test_drop_contained() {
        let mut list = subnets(&["10.1.0.0/16", "10.0.0.0/8", "10.2.3.0/24"]);
        optimize_subnets(&mut list);
        assert_eq!(list, subnets(&["10.0.0.0/8"]));
    }

    #[test]
    fn test_merge_cascades() {
        // Four /26 quarters collapse all the way to the /24.
        let mut list = subnets(&[
            "10.0.0.0/26",
            "10.0.0.64/26",
            "10.0.0.128/26",
            "10.0.0.192/26",
        ]);
        optimize_subnets(&mut list);
        assert_eq!(list, subnets(&["10.0.0.0/24"]));
    }

    #[test]
    fn test_disjoint_subnets_kept() {
        let mut list = subnets(&["192.168.0.0/16", "10.0.0.0/8", "172.16.0.0/12"]);
        optimize_subnets(&mut list);
        // Precedence order: coarsest first.
        assert_eq!(
            list,
            subnets(&["10.0.0.0/8", "172.16.0.0/12", "192.168.0.0/16"])
        );
    }

    #[test]
    fn test_ipv6_siblings() {
        let mut list = subnets(&["fd00::/8", "fc00::/8"]);
        optimize_subnets(&mut list);
        assert_eq!(list, subnets(&["fc00::/7"]));
    }

    #[test]
    fn test_empty_list() {
        let mut list: Vec<Subnet> = Vec::new();
        optimize_subnets(&mut list);
        assert!(list.is_empty());
    }

    #[test]
    fn test_idempotent() {
        let mut list = subnets(&[
            "10.0.0.0/24",
            "10.0.1.0/24",
            "10.0.0.0/25",
            "172.16.0.0/12",
            "172.16.1.0/24",
        ]);
        optimize_subnets(&mut list);
        let once = list.clone();
        optimize_subnets(&mut list);
        assert_eq!(list, once);
    }

    #[test]
    fn test_preserves_coverage() {
        let input = subnets(&["10.0.0.0/24", "10.0.1.0/24", "10.0.1.128/25", "10.9.0.0/16"]);
        let mut optimized = input.clone();
        optimize_subnets(&mut optimized);

        for addr in [
            "10.0.0.1/32",
            "10.0.1.7/32",
            "10.0.1.200/32",
            "10.9.255.255/32",
            "10.0.2.1/32",
            "11.0.0.1/32",
        ] {
            assert_eq!(
                covers(&input, addr),
                covers(&optimized, addr),
                "coverage changed for {addr}"
            );
        }
    }
}
