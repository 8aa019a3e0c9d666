//! The delivery game state machine.
//!
//! `DeliveryGame` owns every piece of mutable game state. Its transition
//! methods are the only way to change it, and each one either applies fully
//! or is rejected with the state left exactly as it was.

use rand::Rng;
use tracing::{debug, info};

use super::error::{EngineError, EngineResult};
use super::generation::generate_instance;
use super::locations::{location_for_level, next_location_for_level};
use super::scoring::{coins_for_profit, efficiency_percent};
use super::{GameConfig, LevelRecord, LoadSummary, Phase, ProgressionState, Selection};
use crate::knapsack::{solve_greedy, solve_optimal, Item, ProblemInstance, Solution};

/// A running game session.
#[derive(Debug, Clone)]
pub struct DeliveryGame {
    config: GameConfig,
    state: ProgressionState,
    instance: ProblemInstance,
    selection: Selection,
}

impl DeliveryGame {
    /// Start a new game at level 1 with the default configuration.
    pub fn new<R: Rng>(rng: &mut R) -> Self {
        Self::with_config(GameConfig::default(), rng)
    }

    pub fn with_config<R: Rng>(config: GameConfig, rng: &mut R) -> Self {
        let state = ProgressionState::new(config.starting_capacity);
        let instance = generate_instance(state.level, state.capacity, rng);
        Self {
            config,
            state,
            instance,
            selection: Selection::new(),
        }
    }

    // === Queries ===

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn state(&self) -> &ProgressionState {
        &self.state
    }

    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    pub fn level(&self) -> u32 {
        self.state.level
    }

    pub fn capacity(&self) -> u32 {
        self.state.capacity
    }

    pub fn coins(&self) -> u64 {
        self.state.coins
    }

    pub fn history(&self) -> &[LevelRecord] {
        &self.state.history
    }

    pub fn instance(&self) -> &ProblemInstance {
        &self.instance
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn is_selected(&self, id: u32) -> bool {
        self.selection.contains(id)
    }

    /// Loaded packages in instance order.
    pub fn selected_items(&self) -> Vec<Item> {
        self.instance
            .items
            .iter()
            .filter(|item| self.selection.contains(item.id))
            .copied()
            .collect()
    }

    /// Current truck gauge.
    pub fn load(&self) -> LoadSummary {
        let (weight, profit) = self
            .selected_items()
            .iter()
            .fold((0u32, 0u32), |(w, p), item| (w + item.weight, p + item.profit));
        LoadSummary::new(weight, profit, self.state.capacity)
    }

    /// Best possible load for the current stop. Recomputed on every call.
    pub fn optimal_solution(&self) -> Solution {
        solve_optimal(&self.instance.items, self.instance.capacity)
    }

    /// Greedy load for the current stop, for comparison hints.
    pub fn greedy_solution(&self) -> Solution {
        solve_greedy(&self.instance.items, self.instance.capacity)
    }

    pub fn last_record(&self) -> Option<&LevelRecord> {
        self.state.history.last()
    }

    /// The most recent `count` deliveries, oldest first.
    pub fn recent_history(&self, count: usize) -> &[LevelRecord] {
        let history = &self.state.history;
        &history[history.len().saturating_sub(count)..]
    }

    pub fn current_location(&self) -> &'static str {
        location_for_level(self.state.level)
    }

    pub fn next_location(&self) -> &'static str {
        next_location_for_level(self.state.level)
    }

    // === Transitions ===

    /// Set up a stop: fresh packages, empty truck, back to `Playing`.
    pub fn start_level<R: Rng>(&mut self, level: u32, capacity: u32, rng: &mut R) {
        let level = level.max(1);
        self.state.level = level;
        self.state.capacity = capacity;
        self.instance = generate_instance(level, capacity, rng);
        self.selection.clear();
        self.state.phase = Phase::Playing;
        debug!(
            level,
            capacity,
            packages = self.instance.items.len(),
            "level started"
        );
    }

    /// Load or unload a package. Returns true if the package is now on the truck.
    pub fn toggle_item(&mut self, id: u32) -> EngineResult<bool> {
        self.require_phase("toggle a package", &[Phase::Playing])?;
        if !self.instance.contains(id) {
            debug!(id, "ignoring toggle of unknown package");
            return Err(EngineError::UnknownItem(id));
        }
        Ok(self.selection.toggle(id))
    }

    /// Unload every package.
    pub fn clear_selection(&mut self) -> EngineResult<()> {
        self.require_phase("clear the truck", &[Phase::Playing])?;
        self.selection.clear();
        Ok(())
    }

    /// Deliver the current load and score it against the optimum.
    pub fn complete_level(&mut self) -> EngineResult<LevelRecord> {
        self.require_phase("complete the level", &[Phase::Playing])?;

        let load = self.load();
        if load.over_capacity {
            debug!(
                used_weight = load.used_weight,
                capacity = load.capacity,
                "delivery rejected: overweight"
            );
            return Err(EngineError::OverCapacity {
                used_weight: load.used_weight,
                capacity: load.capacity,
            });
        }
        if self.selection.is_empty() {
            debug!("delivery rejected: empty truck");
            return Err(EngineError::EmptySelection);
        }

        let achieved_profit = load.loaded_profit;
        let optimal_profit = self.optimal_solution().total_profit;
        let record = LevelRecord {
            level: self.state.level,
            achieved_profit,
            optimal_profit,
            efficiency_percent: efficiency_percent(achieved_profit, optimal_profit),
        };

        let coins_earned = coins_for_profit(achieved_profit);
        self.state.coins += coins_earned;
        self.state.history.push(record.clone());
        self.state.phase = Phase::Completed;

        info!(
            level = record.level,
            achieved_profit,
            optimal_profit,
            efficiency = record.efficiency_percent,
            coins_earned,
            "delivery completed"
        );
        Ok(record)
    }

    /// Hit the road. The caller decides how long the trip takes and reports
    /// arrival with [`DeliveryGame::arrive_next_level`].
    pub fn advance(&mut self) -> EngineResult<()> {
        self.require_phase("advance", &[Phase::Completed])?;
        self.state.phase = Phase::Transitioning;
        debug!(destination = self.next_location(), "truck departed");
        Ok(())
    }

    /// Reach the next stop: one level up, a roomier truck, fresh packages.
    pub fn arrive_next_level<R: Rng>(&mut self, rng: &mut R) -> EngineResult<()> {
        self.require_phase("arrive at the next stop", &[Phase::Transitioning])?;
        let level = self.state.level + 1;
        let capacity = self.state.capacity + self.config.capacity_step;
        self.start_level(level, capacity, rng);
        info!(level, capacity, location = self.current_location(), "arrived at next stop");
        Ok(())
    }

    /// Reroll the packages at the current stop without touching the score.
    pub fn replay<R: Rng>(&mut self, rng: &mut R) -> EngineResult<()> {
        self.require_phase("replay", &[Phase::Playing, Phase::Completed])?;
        self.start_level(self.state.level, self.state.capacity, rng);
        Ok(())
    }

    /// Throw away all progress and start over at level 1. Allowed from any phase.
    pub fn reset_game<R: Rng>(&mut self, rng: &mut R) {
        self.state = ProgressionState::new(self.config.starting_capacity);
        self.start_level(1, self.config.starting_capacity, rng);
        info!("game reset");
    }

    fn require_phase(&self, action: &'static str, allowed: &[Phase]) -> EngineResult<()> {
        if allowed.contains(&self.state.phase) {
            Ok(())
        } else {
            debug!(action, phase = %self.state.phase, "ignoring out-of-phase action");
            Err(EngineError::InvalidTransition {
                action,
                phase: self.state.phase,
            })
        }
    }
}
