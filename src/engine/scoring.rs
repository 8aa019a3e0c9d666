//! Delivery scoring: efficiency, stars, coins and the end-of-level verdict.

use serde::{Deserialize, Serialize};

use crate::constants::{
    ONE_STAR_EFFICIENCY, PROFIT_PER_COIN, THREE_STAR_EFFICIENCY, TWO_STAR_EFFICIENCY,
};

/// Achieved profit as a percentage of the optimum. Zero when the optimum is zero.
pub fn efficiency_percent(achieved: u32, optimal: u32) -> f64 {
    if optimal > 0 {
        f64::from(achieved) / f64::from(optimal) * 100.0
    } else {
        0.0
    }
}

/// Stars (0-3) awarded for a given efficiency.
pub fn star_rating(efficiency: f64) -> u8 {
    if efficiency >= THREE_STAR_EFFICIENCY {
        3
    } else if efficiency >= TWO_STAR_EFFICIENCY {
        2
    } else if efficiency >= ONE_STAR_EFFICIENCY {
        1
    } else {
        0
    }
}

/// Coins paid out for a delivery: one per full 10 profit.
pub fn coins_for_profit(profit: u32) -> u64 {
    u64::from(profit / PROFIT_PER_COIN)
}

/// End-of-level verdict shown to the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeliveryRating {
    Perfect,
    Excellent,
    Good,
    KeepTrying,
}

impl DeliveryRating {
    /// Rate a delivery. Matching the optimum exactly is always perfect.
    pub fn rate(achieved: u32, optimal: u32) -> Self {
        if achieved == optimal {
            return Self::Perfect;
        }
        let efficiency = efficiency_percent(achieved, optimal);
        if efficiency >= TWO_STAR_EFFICIENCY {
            Self::Excellent
        } else if efficiency >= ONE_STAR_EFFICIENCY {
            Self::Good
        } else {
            Self::KeepTrying
        }
    }

    pub fn headline(&self) -> &'static str {
        match self {
            Self::Perfect => "PERFECT DELIVERY!",
            Self::Excellent => "EXCELLENT WORK!",
            Self::Good => "GOOD JOB!",
            Self::KeepTrying => "KEEP TRYING!",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Self::Perfect => "You found the optimal solution!",
            Self::Excellent => "Nearly perfect optimization!",
            Self::Good => "Room for improvement, but solid!",
            Self::KeepTrying => "Practice makes perfect!",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_efficiency_percent() {
        assert_eq!(efficiency_percent(50, 100), 50.0);
        assert_eq!(efficiency_percent(100, 100), 100.0);
        assert_eq!(efficiency_percent(10, 0), 0.0);
        assert!((efficiency_percent(1, 3) - 33.333_333).abs() < 1e-4);
    }

    #[test]
    fn test_star_tiers() {
        assert_eq!(star_rating(100.0), 3);
        assert_eq!(star_rating(99.9), 2);
        assert_eq!(star_rating(80.0), 2);
        assert_eq!(star_rating(79.9), 1);
        assert_eq!(star_rating(50.0), 1);
        assert_eq!(star_rating(49.9), 0);
        assert_eq!(star_rating(0.0), 0);
    }

    #[test]
    fn test_coins_floor() {
        assert_eq!(coins_for_profit(0), 0);
        assert_eq!(coins_for_profit(9), 0);
        assert_eq!(coins_for_profit(10), 1);
        assert_eq!(coins_for_profit(87), 8);
    }

    #[test]
    fn test_rating() {
        assert_eq!(DeliveryRating::rate(40, 40), DeliveryRating::Perfect);
        assert_eq!(DeliveryRating::rate(0, 0), DeliveryRating::Perfect);
        assert_eq!(DeliveryRating::rate(36, 40), DeliveryRating::Excellent);
        assert_eq!(DeliveryRating::rate(20, 40), DeliveryRating::Good);
        assert_eq!(DeliveryRating::rate(10, 40), DeliveryRating::KeepTrying);
    }

    #[test]
    fn test_rating_text() {
        assert_eq!(DeliveryRating::Perfect.headline(), "PERFECT DELIVERY!");
        assert_eq!(
            DeliveryRating::KeepTrying.message(),
            "Practice makes perfect!"
        );
    }
}
