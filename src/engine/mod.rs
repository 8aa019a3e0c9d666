//! Progression engine: level generation, delivery scoring and the game loop.

mod error;
pub mod generation;
pub mod locations;
mod logic;
pub mod scoring;
mod types;

pub use error::{EngineError, EngineResult};
pub use generation::generate_instance;
pub use locations::{location_for_level, next_location_for_level, LOCATIONS};
pub use logic::DeliveryGame;
pub use scoring::{coins_for_profit, efficiency_percent, star_rating, DeliveryRating};
pub use types::{GameConfig, LevelRecord, LoadSummary, Phase, ProgressionState, Selection};
