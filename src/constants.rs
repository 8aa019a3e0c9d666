// Truck capacity progression
pub const STARTING_CAPACITY: u32 = 15;
pub const CAPACITY_PER_LEVEL: u32 = 2;

// Package generation
pub const BASE_PACKAGE_COUNT: u32 = 6;
pub const MAX_PACKAGE_COUNT: u32 = 12;
pub const MIN_PACKAGE_WEIGHT: u32 = 1;
pub const MAX_PACKAGE_WEIGHT: u32 = 8;
pub const PROFIT_PER_KG: u32 = 2;
pub const MAX_PROFIT_BONUS: u32 = 29;
pub const PROFIT_GROWTH_PER_LEVEL: f64 = 0.1;

// Rewards
pub const PROFIT_PER_COIN: u32 = 10;

// Star tiers (efficiency percent)
pub const THREE_STAR_EFFICIENCY: f64 = 100.0;
pub const TWO_STAR_EFFICIENCY: f64 = 80.0;
pub const ONE_STAR_EFFICIENCY: f64 = 50.0;

// Number of past deliveries shown in the history panel
pub const RECENT_HISTORY_LEN: usize = 5;
