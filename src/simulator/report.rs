//! Simulation report generation.

use serde::Serialize;

use super::config::SimConfig;
use super::playthrough::RunStats;

/// Aggregated results from multiple simulation runs.
#[derive(Debug, Clone, Serialize)]
pub struct SimReport {
    pub num_runs: u32,
    pub strategy: &'static str,
    pub levels_per_run: u32,

    // Aggregated stats
    pub avg_levels_completed: f64,
    pub avg_coins: f64,
    pub avg_efficiency: f64,
    pub min_efficiency: f64,
    /// Percent of deliveries matching the optimum exactly
    pub perfect_rate: f64,
    pub rejected_deliveries: u32,

    /// Percent of deliveries earning 0, 1, 2 and 3 stars
    pub star_distribution: [f64; 4],

    /// Mean efficiency of the n-th delivery across runs
    pub avg_efficiency_per_level: Vec<f64>,

    // Individual run stats for detailed analysis
    #[serde(skip)]
    pub run_stats: Vec<RunStats>,
}

impl SimReport {
    /// Create a new report from completed run stats.
    pub fn from_runs(runs: Vec<RunStats>, config: &SimConfig) -> Self {
        let num_runs = runs.len() as u32;
        let runs_divisor = f64::from(num_runs.max(1));

        let avg_levels_completed = runs
            .iter()
            .map(|r| f64::from(r.levels_completed))
            .sum::<f64>()
            / runs_divisor;
        let avg_coins = runs.iter().map(|r| r.total_coins as f64).sum::<f64>() / runs_divisor;

        let all_efficiencies: Vec<f64> = runs
            .iter()
            .flat_map(|r| r.efficiencies.iter().copied())
            .collect();
        let deliveries = all_efficiencies.len().max(1) as f64;
        let avg_efficiency = all_efficiencies.iter().sum::<f64>() / deliveries;
        let min_efficiency = all_efficiencies
            .iter()
            .copied()
            .reduce(f64::min)
            .unwrap_or(0.0);

        let perfect = runs.iter().map(|r| r.perfect_deliveries).sum::<u32>();
        let perfect_rate = f64::from(perfect) / deliveries * 100.0;
        let rejected_deliveries: u32 = runs.iter().map(|r| r.rejected_deliveries).sum();

        let mut star_distribution = [0.0; 4];
        for (tier, share) in star_distribution.iter_mut().enumerate() {
            let count: u32 = runs.iter().map(|r| r.star_counts[tier]).sum();
            *share = f64::from(count) / deliveries * 100.0;
        }

        let longest = runs.iter().map(|r| r.efficiencies.len()).max().unwrap_or(0);
        let avg_efficiency_per_level = (0..longest)
            .map(|idx| {
                let values: Vec<f64> = runs
                    .iter()
                    .filter_map(|r| r.efficiencies.get(idx).copied())
                    .collect();
                values.iter().sum::<f64>() / values.len().max(1) as f64
            })
            .collect();

        Self {
            num_runs,
            strategy: config.strategy.name(),
            levels_per_run: config.levels_per_run,
            avg_levels_completed,
            avg_coins,
            avg_efficiency,
            min_efficiency,
            perfect_rate,
            rejected_deliveries,
            star_distribution,
            avg_efficiency_per_level,
            run_stats: runs,
        }
    }

    /// Generate a text report.
    pub fn to_text(&self) -> String {
        let mut report = String::new();

        report.push_str("═══════════════════════════════════════════════════════════════\n");
        report.push_str("                  DELIVERY SIMULATION REPORT\n");
        report.push_str("═══════════════════════════════════════════════════════════════\n\n");

        report.push_str(&format!(
            "Runs: {} with the {} strategy, {} deliveries each\n\n",
            self.num_runs, self.strategy, self.levels_per_run
        ));

        report.push_str("── SCORING ──────────────────────────────────────────────────────\n");
        report.push_str(&format!(
            "  Avg Deliveries:      {:.1}\n",
            self.avg_levels_completed
        ));
        report.push_str(&format!("  Avg Coins:           {:.1}\n", self.avg_coins));
        report.push_str(&format!(
            "  Avg Efficiency:      {:.1}%\n",
            self.avg_efficiency
        ));
        report.push_str(&format!(
            "  Worst Efficiency:    {:.1}%\n",
            self.min_efficiency
        ));
        report.push_str(&format!("  Perfect Deliveries:  {:.1}%\n", self.perfect_rate));
        report.push_str(&format!(
            "  Refused Deliveries:  {}\n\n",
            self.rejected_deliveries
        ));

        report.push_str("── STARS ────────────────────────────────────────────────────────\n");
        for stars in (0..4).rev() {
            let pct = self.star_distribution[stars];
            let bar: String = "█".repeat((pct / 5.0) as usize);
            report.push_str(&format!("  {} star: {:>5.1}% {}\n", stars, pct, bar));
        }
        report.push('\n');

        report.push_str("── PER-LEVEL EFFICIENCY ─────────────────────────────────────────\n");
        for (idx, efficiency) in self.avg_efficiency_per_level.iter().enumerate() {
            report.push_str(&format!("  Level {:2}: {:>5.1}%\n", idx + 1, efficiency));
        }
        report.push('\n');

        report.push_str("── BALANCE ASSESSMENT ───────────────────────────────────────────\n");
        let rating = if self.avg_efficiency >= 95.0 {
            "TOO EASY - Hardly any room to improve"
        } else if self.avg_efficiency >= 80.0 {
            "GOOD - Close calls reward careful packing"
        } else if self.avg_efficiency >= 50.0 {
            "HARD - Big gap to the optimum"
        } else {
            "TOO HARD - Most loads score poorly"
        };
        report.push_str(&format!("  Difficulty: {}\n", rating));

        if let (Some(first), Some(last)) = (
            self.avg_efficiency_per_level.first(),
            self.avg_efficiency_per_level.last(),
        ) {
            if last + 5.0 < *first {
                report.push_str("  ⚠️  Efficiency drops in later levels - more packages hurt?\n");
            }
        }
        if self.rejected_deliveries > 0 {
            report.push_str("  ⚠️  Some deliveries were refused - strategy overloads the truck?\n");
        }

        report.push_str("\n═══════════════════════════════════════════════════════════════\n");

        report
    }

    /// Generate a JSON report for further analysis.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }

    /// Text chart of average efficiency by level.
    pub fn level_curve_text(&self) -> String {
        let mut text = String::from("── EFFICIENCY CURVE ─────────────────────────────────────────────\n");
        for (idx, efficiency) in self.avg_efficiency_per_level.iter().enumerate() {
            let bar: String = "▇".repeat((efficiency / 2.0) as usize);
            text.push_str(&format!("  L{:<3} {}\n", idx + 1, bar));
        }
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(efficiencies: Vec<f64>, star_counts: [u32; 4], perfect: u32, coins: u64) -> RunStats {
        RunStats {
            levels_completed: efficiencies.len() as u32,
            final_level: efficiencies.len() as u32 + 1,
            final_capacity: 15,
            total_coins: coins,
            achieved_profit: 0,
            optimal_profit: 0,
            efficiencies,
            star_counts,
            perfect_deliveries: perfect,
            rejected_deliveries: 0,
        }
    }

    #[test]
    fn test_report_generation() {
        let runs = vec![
            run(vec![100.0, 80.0], [0, 0, 1, 1], 1, 10),
            run(vec![50.0, 90.0], [0, 1, 1, 0], 0, 20),
        ];

        let report = SimReport::from_runs(runs, &SimConfig::default());
        assert_eq!(report.num_runs, 2);
        assert_eq!(report.strategy, "greedy");
        assert!((report.avg_coins - 15.0).abs() < 1e-9);
        assert!((report.avg_efficiency - 80.0).abs() < 1e-9);
        assert_eq!(report.min_efficiency, 50.0);
        assert!((report.perfect_rate - 25.0).abs() < 1e-9);
        assert_eq!(report.star_distribution, [0.0, 25.0, 50.0, 25.0]);
        assert_eq!(report.avg_efficiency_per_level, vec![75.0, 85.0]);
    }

    #[test]
    fn test_empty_report() {
        let report = SimReport::from_runs(Vec::new(), &SimConfig::default());
        assert_eq!(report.num_runs, 0);
        assert_eq!(report.avg_efficiency, 0.0);
        assert!(report.avg_efficiency_per_level.is_empty());
        assert!(report.to_text().contains("DELIVERY SIMULATION REPORT"));
    }

    #[test]
    fn test_json_skips_run_details() {
        let runs = vec![run(vec![100.0], [0, 0, 0, 1], 1, 5)];
        let report = SimReport::from_runs(runs, &SimConfig::default());
        let json: serde_json::Value = serde_json::from_str(&report.to_json()).unwrap();
        assert_eq!(json["num_runs"], 1);
        assert_eq!(json["strategy"], "greedy");
        assert!(json.get("run_stats").is_none());
    }
}
