//! Knapsack data structures: packages, problem instances and solutions.

use serde::{Deserialize, Serialize};

/// A single package that can be loaded onto the truck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Item {
    /// Unique within one instance, starting at 1.
    pub id: u32,
    /// Weight in kg. Always positive for generated items.
    pub weight: u32,
    /// Delivery payout.
    pub profit: u32,
}

impl Item {
    pub fn new(id: u32, weight: u32, profit: u32) -> Self {
        Self { id, weight, profit }
    }
}

/// One level's packages plus the truck capacity.
///
/// Instances are replaced wholesale on regeneration, never edited in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProblemInstance {
    /// Packages in generation order.
    pub items: Vec<Item>,
    pub capacity: u32,
}

impl ProblemInstance {
    pub fn new(items: Vec<Item>, capacity: u32) -> Self {
        Self { items, capacity }
    }

    /// Look up a package by id.
    pub fn item(&self, id: u32) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn contains(&self, id: u32) -> bool {
        self.item(id).is_some()
    }

    pub fn total_weight(&self) -> u32 {
        self.items.iter().map(|item| item.weight).sum()
    }
}

/// A chosen subset of packages and its combined profit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Solution {
    pub total_profit: u32,
    /// Chosen packages in instance order.
    pub chosen_items: Vec<Item>,
}

impl Solution {
    /// The empty load: no packages, no profit.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a solution from chosen packages, summing their profit.
    pub fn from_items(chosen_items: Vec<Item>) -> Self {
        let total_profit = chosen_items.iter().map(|item| item.profit).sum();
        Self {
            total_profit,
            chosen_items,
        }
    }

    pub fn total_weight(&self) -> u32 {
        self.chosen_items.iter().map(|item| item.weight).sum()
    }

    pub fn item_ids(&self) -> Vec<u32> {
        self.chosen_items.iter().map(|item| item.id).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.chosen_items.is_empty()
    }
}
