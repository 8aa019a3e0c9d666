//! Line-mode driver for the delivery puzzle.
//!
//! Reads one command per line from stdin and prints the game state after
//! each action. All rules live in the library; this file only translates
//! text into transitions.

use std::io::{self, BufRead, Write};

use delivery::constants::RECENT_HISTORY_LEN;
use delivery::engine::{DeliveryGame, EngineError, LevelRecord, Phase};
use delivery::knapsack::Solution;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing_subscriber::EnvFilter;

/// A parsed player command (UI-agnostic).
#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Toggle(Vec<u32>),
    Deliver,
    Next,
    Replay,
    Clear,
    ShowOptimal,
    ShowGreedy,
    History,
    NewGame,
    Help,
    Quit,
}

fn parse_command(line: &str) -> Option<Command> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    let ids: Result<Vec<u32>, _> = line.split_whitespace().map(str::parse::<u32>).collect();
    if let Ok(ids) = ids {
        return Some(Command::Toggle(ids));
    }

    match line.to_ascii_lowercase().as_str() {
        "d" | "deliver" => Some(Command::Deliver),
        "n" | "next" => Some(Command::Next),
        "r" | "replay" => Some(Command::Replay),
        "c" | "clear" => Some(Command::Clear),
        "o" | "optimal" => Some(Command::ShowOptimal),
        "g" | "greedy" => Some(Command::ShowGreedy),
        "h" | "history" => Some(Command::History),
        "new" => Some(Command::NewGame),
        "?" | "help" => Some(Command::Help),
        "q" | "quit" | "exit" => Some(Command::Quit),
        _ => None,
    }
}

fn main() -> io::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let mut seed: Option<u64> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-s" | "--seed" => {
                if i + 1 < args.len() {
                    seed = args[i + 1].parse().ok();
                    i += 1;
                }
            }
            "--version" | "-v" => {
                println!("delivery {}", env!("CARGO_PKG_VERSION"));
                return Ok(());
            }
            "--help" | "-h" => {
                println!("Delivery - Package Allocation Puzzle\n");
                println!("Usage: delivery [--seed N]\n");
                println!("Options:");
                println!("  -s, --seed N   Reproducible package rolls");
                println!("  --version      Show version information");
                println!("  --help         Show this help message");
                return Ok(());
            }
            other => {
                eprintln!("Unknown option: {}", other);
                eprintln!("Run 'delivery --help' for usage.");
                std::process::exit(1);
            }
        }
        i += 1;
    }

    init_logging();

    let mut rng = match seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };
    let mut game = DeliveryGame::new(&mut rng);

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    println!("🚚 DELIVERY ADVENTURE 📦");
    print_help();
    print_stop(&game);

    loop {
        print!("> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        let Some(command) = parse_command(&line) else {
            if !line.trim().is_empty() {
                println!("Unknown command. Type 'help' for a list.");
            }
            continue;
        };

        match command {
            Command::Toggle(ids) => {
                for id in ids {
                    if let Err(err) = game.toggle_item(id) {
                        report_rejection(&err);
                    }
                }
                print_truck(&game);
            }
            Command::Deliver => match game.complete_level() {
                Ok(record) => print_level_complete(&game, &record),
                Err(err) => report_rejection(&err),
            },
            Command::Next => {
                if game.advance().is_ok() {
                    println!("🚚💨 Traveling to {}...", game.next_location());
                    if game.arrive_next_level(&mut rng).is_ok() {
                        print_stop(&game);
                    }
                } else {
                    println!("Finish this delivery first.");
                }
            }
            Command::Replay => {
                if game.replay(&mut rng).is_ok() {
                    print_stop(&game);
                }
            }
            Command::Clear => {
                if game.clear_selection().is_ok() {
                    print_truck(&game);
                }
            }
            Command::ShowOptimal => print_solution("💡 OPTIMAL LOAD", &game.optimal_solution()),
            Command::ShowGreedy => print_solution("📐 GREEDY LOAD", &game.greedy_solution()),
            Command::History => print_history(&game),
            Command::NewGame => {
                game.reset_game(&mut rng);
                println!("🏠 New game!");
                print_stop(&game);
            }
            Command::Help => print_help(),
            Command::Quit => break,
        }
    }

    println!("Thanks for driving! Final coins: {}", game.coins());
    Ok(())
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn report_rejection(err: &EngineError) {
    match err {
        EngineError::OverCapacity { .. } => {
            println!("🚨 Your truck is overweight! Remove some packages first.")
        }
        EngineError::EmptySelection => println!("📦 Select some packages to deliver first!"),
        EngineError::UnknownItem(id) => println!("There is no package #{} here.", id),
        // Out-of-phase actions are ignored silently.
        EngineError::InvalidTransition { .. } => {}
    }
}

fn print_help() {
    println!();
    println!("Commands:");
    println!("  <ids>     Load/unload packages, e.g. '1 4 5'");
    println!("  d         Deliver the current load");
    println!("  n         Drive to the next stop");
    println!("  r         Replay this stop with new packages");
    println!("  c         Unload everything");
    println!("  o / g     Show the optimal / greedy load");
    println!("  h         Delivery history");
    println!("  new       Start a new game");
    println!("  q         Quit");
    println!();
}

fn print_stop(game: &DeliveryGame) {
    println!();
    println!(
        "🏆 Level {}   🪙 Coins {}   📍 {}",
        game.level(),
        game.coins(),
        game.current_location()
    );
    println!("📊 Capacity: {}kg", game.capacity());
    println!();
    for item in &game.instance().items {
        let mark = if game.is_selected(item.id) { "✅" } else { "📦" };
        println!(
            "  {} #{:<2}  {:>2}kg  ${:<4}  ({:.1} $/kg)",
            mark,
            item.id,
            item.weight,
            item.profit,
            f64::from(item.profit) / f64::from(item.weight.max(1))
        );
    }
    print_truck(game);
}

fn print_truck(game: &DeliveryGame) {
    if game.phase() != Phase::Playing {
        return;
    }
    let load = game.load();
    let filled = (load.fill_percent / 5.0) as usize;
    let bar = format!("{}{}", "█".repeat(filled), "░".repeat(20 - filled.min(20)));
    println!(
        "🚚 [{}] {}/{}kg  ${}{}",
        bar,
        load.used_weight,
        load.capacity,
        load.loaded_profit,
        if load.over_capacity { "  ⚠️ OVERWEIGHT" } else { "" }
    );
}

fn print_solution(title: &str, solution: &Solution) {
    let ids: Vec<String> = solution.item_ids().iter().map(|id| format!("#{}", id)).collect();
    println!(
        "{}: {} ({}kg, ${})",
        title,
        if ids.is_empty() { "-".to_string() } else { ids.join(" ") },
        solution.total_weight(),
        solution.total_profit
    );
}

fn print_level_complete(game: &DeliveryGame, record: &LevelRecord) {
    let rating = record.rating();
    println!();
    println!("🎉 LEVEL {} COMPLETE!", record.level);
    println!(
        "  {}",
        "🌟".repeat(usize::from(record.stars())) + &"☆".repeat(3 - usize::from(record.stars()))
    );
    println!(
        "  💰 Profit: ${} / ${}",
        record.achieved_profit, record.optimal_profit
    );
    println!("  ⚡ Efficiency: {:.1}%", record.efficiency_percent);
    println!("  {} {}", rating.headline(), rating.message());
    println!("  🪙 Coins: {}", game.coins());
    println!("  Next stop: {} ('n' to drive, 'r' to replay)", game.next_location());
}

fn print_history(game: &DeliveryGame) {
    let recent = game.recent_history(RECENT_HISTORY_LEN);
    if recent.is_empty() {
        println!("No deliveries yet.");
        return;
    }
    println!("📊 DELIVERY HISTORY");
    for record in recent {
        println!(
            "  Level {:<3} ${}/{}  {:.1}%  {}",
            record.level,
            record.achieved_profit,
            record.optimal_profit,
            record.efficiency_percent,
            "🌟".repeat(usize::from(record.stars()))
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_toggle_ids() {
        assert_eq!(parse_command("3"), Some(Command::Toggle(vec![3])));
        assert_eq!(
            parse_command("  1 4 5 "),
            Some(Command::Toggle(vec![1, 4, 5]))
        );
    }

    #[test]
    fn test_parse_words() {
        assert_eq!(parse_command("d"), Some(Command::Deliver));
        assert_eq!(parse_command("NEXT"), Some(Command::Next));
        assert_eq!(parse_command("o"), Some(Command::ShowOptimal));
        assert_eq!(parse_command("new"), Some(Command::NewGame));
        assert_eq!(parse_command("quit"), Some(Command::Quit));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(parse_command(""), None);
        assert_eq!(parse_command("   "), None);
        assert_eq!(parse_command("fly"), None);
        assert_eq!(parse_command("1 x"), None);
    }
}
