//! Package generation for each delivery stop.

use rand::Rng;

use crate::constants::{
    BASE_PACKAGE_COUNT, MAX_PACKAGE_COUNT, MAX_PACKAGE_WEIGHT, MAX_PROFIT_BONUS,
    MIN_PACKAGE_WEIGHT, PROFIT_GROWTH_PER_LEVEL, PROFIT_PER_KG,
};
use crate::knapsack::{Item, ProblemInstance};

/// Number of packages offered at a level: one more per level, capped at 12.
pub fn package_count(level: u32) -> u32 {
    BASE_PACKAGE_COUNT.saturating_add(level).min(MAX_PACKAGE_COUNT)
}

/// Profit multiplier for a level (+10% per level).
pub fn profit_multiplier(level: u32) -> f64 {
    1.0 + f64::from(level) * PROFIT_GROWTH_PER_LEVEL
}

/// Roll a single package.
///
/// Weight is 1-8kg. Base profit is two per kg plus a 0-29 bonus, then scaled
/// by the level multiplier and floored.
pub fn generate_item<R: Rng>(id: u32, level: u32, rng: &mut R) -> Item {
    let weight = rng.gen_range(MIN_PACKAGE_WEIGHT..=MAX_PACKAGE_WEIGHT);
    let base_profit = weight * PROFIT_PER_KG + rng.gen_range(0..=MAX_PROFIT_BONUS);
    let profit = (f64::from(base_profit) * profit_multiplier(level)).floor() as u32;
    Item::new(id, weight, profit)
}

/// Generate a fresh instance for `level`. Ids run from 1 in generation order.
pub fn generate_instance<R: Rng>(level: u32, capacity: u32, rng: &mut R) -> ProblemInstance {
    let items = (1..=package_count(level))
        .map(|id| generate_item(id, level, rng))
        .collect();
    ProblemInstance::new(items, capacity)
}
