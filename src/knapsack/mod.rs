//! Package optimizer: exact and greedy 0/1 knapsack solvers.
//!
//! Both solvers are pure functions over their arguments and hold no state,
//! so they can be called from anywhere at any time.

mod greedy;
mod optimal;
mod types;

pub use greedy::{compare_density, solve_greedy};
pub use optimal::solve_optimal;
pub use types::{Item, ProblemInstance, Solution};
