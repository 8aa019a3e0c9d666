//! Delivery balance simulator for Monte Carlo analysis.
//!
//! Plays thousands of seeded games with a scripted player to analyze:
//! - How close common loading strategies get to the optimum
//! - Coin income per run
//! - Star distribution as levels add packages and capacity

mod config;
mod playthrough;
mod report;
mod runner;

pub use config::{SimConfig, Strategy};
pub use playthrough::{pick_packages, simulate_single_run, RunStats};
pub use report::SimReport;
pub use runner::run_simulation;
