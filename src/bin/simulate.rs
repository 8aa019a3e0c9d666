//! Delivery balance simulator CLI.
//!
//! Run Monte Carlo playthroughs to see how loading strategies score.
//!
//! Usage:
//!   cargo run --bin simulate -- [OPTIONS]
//!
//! Examples:
//!   cargo run --bin simulate                         # Default: 200 greedy runs, 10 levels
//!   cargo run --bin simulate -- -n 50 -l 20          # 50 runs of 20 levels
//!   cargo run --bin simulate -- --strategy random    # Random loading baseline
//!   cargo run --bin simulate -- --seed 42 --json     # Reproducible run, JSON saved

use delivery::simulator::{run_simulation, SimConfig, Strategy};
use std::env;
use tracing_subscriber::EnvFilter;

fn main() -> std::io::Result<()> {
    let args: Vec<String> = env::args().collect();
    let options = parse_args(&args);
    let config = options.config;

    let default_level = if options.verbose { "info" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    println!("╔═══════════════════════════════════════════════════════════════╗");
    println!("║              DELIVERY BALANCE SIMULATOR                       ║");
    println!("╚═══════════════════════════════════════════════════════════════╝");
    println!();
    println!("Configuration:");
    println!("  Runs:           {}", config.num_runs);
    println!("  Levels per Run: {}", config.levels_per_run);
    println!("  Strategy:       {}", config.strategy.name());
    println!(
        "  Capacity:       {} (+{} per level)",
        config.game.starting_capacity, config.game.capacity_step
    );
    if let Some(seed) = config.seed {
        println!("  Seed:           {}", seed);
    }
    println!();
    println!("Running simulation...");
    println!();

    let report = run_simulation(&config);

    println!("{}", report.to_text());

    if options.show_level_curve {
        println!("{}", report.level_curve_text());
    }

    if options.json {
        let json = report.to_json();
        let filename = format!(
            "sim_report_{}.json",
            chrono::Utc::now().format("%Y%m%d_%H%M%S")
        );
        std::fs::write(&filename, json)?;
        println!("JSON report saved to: {}", filename);
    }

    Ok(())
}

struct CliOptions {
    config: SimConfig,
    show_level_curve: bool,
    json: bool,
    verbose: bool,
}

fn parse_args(args: &[String]) -> CliOptions {
    let mut options = CliOptions {
        config: SimConfig::default(),
        show_level_curve: false,
        json: false,
        verbose: false,
    };
    let config = &mut options.config;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-n" | "--runs" => {
                if i + 1 < args.len() {
                    config.num_runs = args[i + 1].parse().unwrap_or(200);
                    i += 1;
                }
            }
            "-l" | "--levels" => {
                if i + 1 < args.len() {
                    config.levels_per_run = args[i + 1].parse().unwrap_or(10);
                    i += 1;
                }
            }
            "-s" | "--seed" => {
                if i + 1 < args.len() {
                    config.seed = args[i + 1].parse().ok();
                    i += 1;
                }
            }
            "--strategy" => {
                if i + 1 < args.len() {
                    match Strategy::from_name(&args[i + 1]) {
                        Some(strategy) => config.strategy = strategy,
                        None => eprintln!(
                            "Unknown strategy '{}', using {}",
                            args[i + 1],
                            config.strategy.name()
                        ),
                    }
                    i += 1;
                }
            }
            "--capacity" => {
                if i + 1 < args.len() {
                    if let Ok(capacity) = args[i + 1].parse::<u32>() {
                        config.game.starting_capacity = capacity;
                    }
                    i += 1;
                }
            }
            "--level-curve" => {
                options.show_level_curve = true;
            }
            "--json" => {
                options.json = true;
            }
            "-v" | "--verbose" => {
                options.verbose = true;
            }
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            _ => {
                eprintln!("Unknown argument: {}", args[i]);
                print_help();
                std::process::exit(1);
            }
        }
        i += 1;
    }

    options
}

fn print_help() {
    println!("Delivery Balance Simulator");
    println!();
    println!("Usage: simulate [OPTIONS]");
    println!();
    println!("Options:");
    println!("  -n, --runs <N>        Number of simulation runs (default: 200)");
    println!("  -l, --levels <N>      Deliveries per run (default: 10)");
    println!("  -s, --seed <N>        Random seed for reproducibility");
    println!("  --strategy <NAME>     optimal, greedy or random (default: greedy)");
    println!("  --capacity <N>        Starting truck capacity (default: 15)");
    println!("  --level-curve         Show efficiency by level");
    println!("  --json                Save JSON report to file");
    println!("  -v, --verbose         Log every run");
    println!("  -h, --help            Show this help");
}
