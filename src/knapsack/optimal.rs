//! Exact 0/1 knapsack via dynamic programming over integer weights.

use super::{Item, Solution};

/// Compute a maximum-profit subset of `items` whose weight fits `capacity`.
///
/// Builds the full `(n + 1) x (capacity + 1)` table where `table[i][w]` is the
/// best profit using the first `i` items within budget `w`, then walks it
/// backwards. When several subsets tie for the optimum, the backward walk picks
/// item `i` whenever the residual profit differs from `table[i - 1][w]`; that
/// choice is canonical and callers rely on it for stable golden results.
///
/// Runs in O(n * capacity) time and space.
pub fn solve_optimal(items: &[Item], capacity: u32) -> Solution {
    if items.is_empty() || capacity == 0 {
        return Solution::empty();
    }

    let table = build_table(items, capacity as usize);
    let chosen_items = backtrack(items, &table, capacity as usize);

    Solution {
        total_profit: table[items.len()][capacity as usize],
        chosen_items,
    }
}

fn build_table(items: &[Item], capacity: usize) -> Vec<Vec<u32>> {
    let n = items.len();
    let mut table = vec![vec![0u32; capacity + 1]; n + 1];

    for i in 1..=n {
        let weight = items[i - 1].weight as usize;
        let profit = items[i - 1].profit;
        for w in 1..=capacity {
            let skip = table[i - 1][w];
            table[i][w] = if weight <= w {
                skip.max(profit + table[i - 1][w - weight])
            } else {
                skip
            };
        }
    }

    table
}

fn backtrack(items: &[Item], table: &[Vec<u32>], capacity: usize) -> Vec<Item> {
    let mut residual = table[items.len()][capacity];
    let mut w = capacity;
    let mut chosen = Vec::new();

    let mut i = items.len();
    while i > 0 && residual > 0 {
        if residual != table[i - 1][w] {
            let item = items[i - 1];
            chosen.push(item);
            residual -= item.profit;
            w -= item.weight as usize;
        }
        i -= 1;
    }

    // Collected back to front.
    chosen.reverse();
    chosen
}

#[cfg(test)]
mod tests {
    use super::*;

    fn golden_items() -> Vec<Item> {
        vec![
            Item::new(1, 2, 10),
            Item::new(2, 3, 14),
            Item::new(3, 4, 16),
            Item::new(4, 5, 18),
        ]
    }

    #[test]
    fn test_empty_items() {
        assert_eq!(solve_optimal(&[], 10), Solution::empty());
    }

    #[test]
    fn test_zero_capacity() {
        assert_eq!(solve_optimal(&golden_items(), 0), Solution::empty());
    }

    #[test]
    fn test_golden_instance() {
        let solution = solve_optimal(&golden_items(), 10);
        assert_eq!(solution.total_profit, 42);
        assert_eq!(solution.item_ids(), vec![1, 2, 4]);
        assert_eq!(solution.total_weight(), 10);
    }

    #[test]
    fn test_all_items_fit() {
        let solution = solve_optimal(&golden_items(), 100);
        assert_eq!(solution.total_profit, 58);
        assert_eq!(solution.item_ids(), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_nothing_fits() {
        let items = vec![Item::new(1, 5, 10), Item::new(2, 6, 20)];
        let solution = solve_optimal(&items, 4);
        assert_eq!(solution, Solution::empty());
    }

    #[test]
    fn test_tie_break_prefers_earlier_item() {
        // Only one of two identical packages fits. Row 2 matches row 1, so the
        // backward walk skips item 2 and takes item 1.
        let items = vec![Item::new(1, 3, 9), Item::new(2, 3, 9)];
        let solution = solve_optimal(&items, 4);
        assert_eq!(solution.total_profit, 9);
        assert_eq!(solution.item_ids(), vec![1]);
    }

    #[test]
    fn test_zero_profit_items_skipped() {
        let items = vec![Item::new(1, 1, 0), Item::new(2, 2, 5)];
        let solution = solve_optimal(&items, 3);
        assert_eq!(solution.total_profit, 5);
        assert_eq!(solution.item_ids(), vec![2]);
    }

    #[test]
    fn test_output_in_instance_order() {
        let items = vec![
            Item::new(5, 1, 3),
            Item::new(2, 1, 4),
            Item::new(9, 1, 5),
        ];
        let solution = solve_optimal(&items, 3);
        assert_eq!(solution.item_ids(), vec![5, 2, 9]);
    }

    #[test]
    fn test_deterministic() {
        let a = solve_optimal(&golden_items(), 9);
        let b = solve_optimal(&golden_items(), 9);
        assert_eq!(a, b);
    }
}
