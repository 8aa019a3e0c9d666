//! Progression engine data structures.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::{CAPACITY_PER_LEVEL, STARTING_CAPACITY};
use crate::engine::scoring::{star_rating, DeliveryRating};

/// Where the game currently is in the delivery loop.
///
/// `Playing -> Completed -> Transitioning -> Playing` for the next stop, with
/// replay and reset both landing back on `Playing`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// The player is choosing packages.
    Playing,
    /// The delivery was scored; waiting for continue or replay.
    Completed,
    /// The truck is on the road to the next stop.
    Transitioning,
}

impl Phase {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Playing => "playing",
            Self::Completed => "completed",
            Self::Transitioning => "transitioning",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Score for one completed delivery. Never modified once recorded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelRecord {
    pub level: u32,
    pub achieved_profit: u32,
    pub optimal_profit: u32,
    /// Achieved profit as a percentage of the optimum (0 when the optimum is 0).
    pub efficiency_percent: f64,
}

impl LevelRecord {
    pub fn stars(&self) -> u8 {
        star_rating(self.efficiency_percent)
    }

    pub fn is_perfect(&self) -> bool {
        self.achieved_profit == self.optimal_profit
    }

    pub fn rating(&self) -> DeliveryRating {
        DeliveryRating::rate(self.achieved_profit, self.optimal_profit)
    }
}

/// Level, truck capacity, wallet and score history for one game lifecycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressionState {
    pub level: u32,
    pub capacity: u32,
    pub coins: u64,
    pub phase: Phase,
    /// Append-only, one entry per completed delivery since the last reset.
    pub history: Vec<LevelRecord>,
}

impl ProgressionState {
    pub fn new(starting_capacity: u32) -> Self {
        Self {
            level: 1,
            capacity: starting_capacity,
            coins: 0,
            phase: Phase::Playing,
            history: Vec::new(),
        }
    }

    pub fn levels_completed(&self) -> usize {
        self.history.len()
    }
}

/// The player's currently loaded packages, by id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    ids: HashSet<u32>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip membership of `id`. Returns true if the package is now loaded.
    pub fn toggle(&mut self, id: u32) -> bool {
        if self.ids.remove(&id) {
            false
        } else {
            self.ids.insert(id);
            true
        }
    }

    pub fn contains(&self, id: u32) -> bool {
        self.ids.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    /// Loaded ids in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        self.ids.iter().copied()
    }
}

/// Truck gauge for the current selection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoadSummary {
    pub used_weight: u32,
    pub capacity: u32,
    /// Profit of the loaded packages, or 0 when the truck is overweight.
    pub loaded_profit: u32,
    pub over_capacity: bool,
    /// How full the truck is, capped at 100.
    pub fill_percent: f64,
}

impl LoadSummary {
    pub fn new(used_weight: u32, selected_profit: u32, capacity: u32) -> Self {
        let over_capacity = used_weight > capacity;
        let fill_percent = if capacity == 0 {
            100.0
        } else {
            (f64::from(used_weight) / f64::from(capacity) * 100.0).min(100.0)
        };
        Self {
            used_weight,
            capacity,
            loaded_profit: if over_capacity { 0 } else { selected_profit },
            over_capacity,
            fill_percent,
        }
    }

    pub fn remaining_capacity(&self) -> u32 {
        self.capacity.saturating_sub(self.used_weight)
    }
}

/// Tunable starting conditions for a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Truck capacity at level 1 and after every reset.
    pub starting_capacity: u32,
    /// Capacity gained on each arrival at a new stop.
    pub capacity_step: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            starting_capacity: STARTING_CAPACITY,
            capacity_step: CAPACITY_PER_LEVEL,
        }
    }
}
