//! Simulation configuration.

use serde::{Deserialize, Serialize};

use crate::engine::GameConfig;

/// How the simulated player picks packages at each stop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Strategy {
    /// Always loads the optimal solution.
    Optimal,
    /// Loads by profit density, like a player eyeballing $/kg.
    Greedy,
    /// Loads packages in random order while they fit.
    Random,
}

impl Strategy {
    pub const ALL: [Strategy; 3] = [Strategy::Optimal, Strategy::Greedy, Strategy::Random];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Optimal => "optimal",
            Self::Greedy => "greedy",
            Self::Random => "random",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|strategy| strategy.name().eq_ignore_ascii_case(name))
    }
}

/// Configuration for a simulation run.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Number of simulated playthroughs
    pub num_runs: u32,

    /// Random seed for reproducibility (None = random)
    pub seed: Option<u64>,

    /// Deliveries attempted per playthrough
    pub levels_per_run: u32,

    /// Package picking strategy for the simulated player
    pub strategy: Strategy,

    /// Starting truck and capacity growth
    pub game: GameConfig,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_runs: 200,
            seed: None,
            levels_per_run: 10,
            strategy: Strategy::Greedy,
            game: GameConfig::default(),
        }
    }
}

impl SimConfig {
    /// Quick config for measuring how far a density-minded player falls short
    pub fn greedy_gap(num_runs: u32) -> Self {
        Self {
            num_runs,
            strategy: Strategy::Greedy,
            ..Default::default()
        }
    }

    /// Quick config for a random-loading baseline
    pub fn random_baseline(num_runs: u32) -> Self {
        Self {
            num_runs,
            strategy: Strategy::Random,
            ..Default::default()
        }
    }
}
