//! Main simulation runner.
//!
//! Every run drives a real `DeliveryGame` through its public transitions, so
//! the numbers reflect actual gameplay rules rather than a parallel model.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{info, warn};

use super::config::SimConfig;
use super::playthrough::simulate_single_run;
use super::report::SimReport;

/// Run the full simulation and return a report.
pub fn run_simulation(config: &SimConfig) -> SimReport {
    let mut all_runs = Vec::with_capacity(config.num_runs as usize);

    for run_idx in 0..config.num_runs {
        let mut rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed.wrapping_add(u64::from(run_idx))),
            None => ChaCha8Rng::from_entropy(),
        };

        match simulate_single_run(config, &mut rng) {
            Ok(stats) => {
                info!(
                    run = run_idx + 1,
                    of = config.num_runs,
                    final_level = stats.final_level,
                    coins = stats.total_coins,
                    efficiency = stats.avg_efficiency(),
                    "run finished"
                );
                all_runs.push(stats);
            }
            Err(err) => warn!(run = run_idx + 1, %err, "run aborted"),
        }
    }

    SimReport::from_runs(all_runs, config)
}
