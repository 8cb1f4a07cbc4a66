//! Subnet set difference.
//!
//! Removes the coverage of the excluded subnets from the included
//! subnets by recursive splitting. Because every subnet is aligned on a
//! power-of-two boundary, two subnets are always identical, disjoint or
//! nested; the loop below resolves every nesting either by removing the
//! included subnet or by splitting it until its halves fall into one of
//! the other two cases.

use crate::models::{precedence_order, Subnet};
use crate::processing::optimize_subnets;

/// Reduce `included` in place so that it covers exactly its original
/// range minus the range covered by `excluded`.
///
/// Each split raises the prefix length of the affected subnet, and a
/// subnet can only be split down to single addresses, so the rewrite
/// loop terminates. The result is passed through the optimizer to merge
/// leftover halves back together.
pub fn subtract_subnets(included: &mut Vec<Subnet>, excluded: &[Subnet]) {
    let before = included.len();
    included.sort_by(precedence_order);

    let mut found_collision = true;
    while found_collision {
        found_collision = false;
        'scan: for i in 0..included.len() {
            for excluded_subnet in excluded {
                if included[i] == *excluded_subnet || excluded_subnet.contains(&included[i]) {
                    // Fully excluded.
                    included.remove(i);
                    found_collision = true;
                    break 'scan;
                } else if included[i].contains(excluded_subnet) {
                    // Partially excluded: split and re-evaluate the halves.
                    let (low, high) = included[i].split();
                    included.remove(i);
                    included.push(low);
                    included.push(high);
                    found_collision = true;
                    break 'scan;
                }
            }
        }
    }

    optimize_subnets(included);
    log::debug!(
        "subtract_subnets: {} included minus {} excluded leaves {} subnets",
        before,
        excluded.len(),
        included.len()
    );
}
