//! Greedy profit-density heuristic.
//!
//! Fast and usually close to the optimum, but not exact: it can leave a
//! better combination on the table when a dense package crowds out two
//! slightly less dense ones.

use std::cmp::Ordering;

use super::{Item, Solution};

/// Compare two packages by profit per kg.
///
/// Ratios are compared by cross-multiplication so no floating point is
/// involved. Weightless packages are always affordable and rank above every
/// weighted one.
pub fn compare_density(a: &Item, b: &Item) -> Ordering {
    match (a.weight, b.weight) {
        (0, 0) => Ordering::Equal,
        (0, _) => Ordering::Greater,
        (_, 0) => Ordering::Less,
        (a_weight, b_weight) => {
            let lhs = u64::from(a.profit) * u64::from(b_weight);
            let rhs = u64::from(b.profit) * u64::from(a_weight);
            lhs.cmp(&rhs)
        }
    }
}

/// Load packages in descending profit density, skipping any that no longer fit.
///
/// Density ties keep instance order (stable sort). The returned packages are
/// listed in instance order.
pub fn solve_greedy(items: &[Item], capacity: u32) -> Solution {
    let mut order: Vec<usize> = (0..items.len()).collect();
    order.sort_by(|&a, &b| compare_density(&items[b], &items[a]));

    let mut used_weight: u64 = 0;
    let mut taken: Vec<usize> = Vec::new();
    for idx in order {
        let weight = u64::from(items[idx].weight);
        if used_weight + weight <= u64::from(capacity) {
            used_weight += weight;
            taken.push(idx);
        }
    }

    taken.sort_unstable();
    Solution::from_items(taken.into_iter().map(|idx| items[idx]).collect())
}
