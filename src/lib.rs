//! Delivery - Package Allocation Puzzle Library
//!
//! Load the truck, beat the optimum. This crate holds the game rules: the
//! knapsack solvers, the level progression engine and a headless balance
//! simulator. Presentation lives in the binaries.

pub mod constants;
pub mod engine;
pub mod knapsack;
pub mod simulator;

pub use engine::{DeliveryGame, EngineError, GameConfig, LevelRecord, Phase};
pub use knapsack::{solve_greedy, solve_optimal, Item, ProblemInstance, Solution};
