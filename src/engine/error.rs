//! Rejections reported by the progression engine.
//!
//! None of these are fatal. Every rejected call leaves the game untouched.

use thiserror::Error;

use super::Phase;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// The loaded packages weigh more than the truck can carry.
    #[error("truck is overweight: {used_weight}kg loaded, capacity {capacity}kg")]
    OverCapacity { used_weight: u32, capacity: u32 },

    /// Nothing was loaded before trying to deliver.
    #[error("no packages selected")]
    EmptySelection,

    /// The action is not allowed in the current phase.
    #[error("cannot {action} while {phase}")]
    InvalidTransition { action: &'static str, phase: Phase },

    /// The package id is not part of the current level.
    #[error("no package with id {0} at this stop")]
    UnknownItem(u32),
}

pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = EngineError::OverCapacity {
            used_weight: 17,
            capacity: 15,
        };
        assert_eq!(
            err.to_string(),
            "truck is overweight: 17kg loaded, capacity 15kg"
        );

        let err = EngineError::InvalidTransition {
            action: "advance",
            phase: Phase::Playing,
        };
        assert_eq!(err.to_string(), "cannot advance while playing");

        assert_eq!(
            EngineError::UnknownItem(42).to_string(),
            "no package with id 42 at this stop"
        );
    }
}
