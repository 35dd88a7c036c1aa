//! Tournament CLI
//!
//! Run matches between dama engines and track Elo ratings.

use dama_core::{Engine, Player};
use minimax_engine::MinimaxEngine;
use random_engine::RandomEngine;
use std::env;
use std::path::Path;
use tournament::{
    MatchConfig, MatchRunner, Standings, TournamentConfig, TournamentResults, parse_difficulty,
    quick_match,
};

const STANDINGS_FILE: &str = "tournament_elo.json";

fn print_usage() {
    println!("Dama Tournament Runner");
    println!();
    println!("Usage:");
    println!("  tournament match <engine1> <engine2> [--games N] [--difficulty D] [--config FILE]");
    println!("  tournament gauntlet <challenger> [--games N] [--difficulty D]");
    println!("  tournament leaderboard");
    println!();
    println!("Engines:");
    println!("  minimax       - Alpha-beta search with positional eval");
    println!("  minimax:SEED  - Same, with a fixed root-shuffle seed");
    println!("  random        - Uniform random legal moves");
    println!();
    println!("Difficulties: beginner, normal, expert");
    println!();
    println!("Examples:");
    println!("  tournament match minimax random --games 20 --difficulty normal");
    println!("  tournament gauntlet minimax:42 --games 10");
}

/// Build an engine from its spec string. `side` anchors the minimax
/// engine's evaluation perspective; with alternating colors it still
/// answers for either side.
fn create_engine(spec: &str, side: Player) -> Box<dyn Engine> {
    let parts: Vec<&str> = spec.split(':').collect();
    match parts[0].to_lowercase().as_str() {
        "minimax" | "ai" => {
            if parts.len() > 1 {
                match parts[1].parse::<u64>() {
                    Ok(seed) => Box::new(MinimaxEngine::with_seed(side, seed)),
                    Err(_) => {
                        eprintln!("Warning: bad seed '{}', using entropy", parts[1]);
                        Box::new(MinimaxEngine::new(side))
                    }
                }
            } else {
                Box::new(MinimaxEngine::new(side))
            }
        }
        "random" => Box::new(RandomEngine::new()),
        _ => {
            eprintln!("Unknown engine: {}, using random", spec);
            Box::new(RandomEngine::new())
        }
    }
}

/// Apply `--games`, `--difficulty` and `--config` flags onto a config
fn parse_flags(args: &[String], start: usize, config: &mut MatchConfig) {
    let mut i = start;
    while i < args.len() {
        match args[i].as_str() {
            "--games" | "-g" => {
                if i + 1 < args.len() {
                    config.num_games = args[i + 1].parse().unwrap_or(config.num_games);
                    i += 1;
                }
            }
            "--difficulty" | "-d" => {
                if i + 1 < args.len() {
                    match parse_difficulty(&args[i + 1]) {
                        Some(d) => config.difficulty = d,
                        None => eprintln!("Warning: unknown difficulty '{}'", args[i + 1]),
                    }
                    i += 1;
                }
            }
            "--config" | "-c" => {
                if i + 1 < args.len() {
                    match TournamentConfig::load_toml(Path::new(&args[i + 1])) {
                        Ok(tc) => *config = tc.match_config(),
                        Err(e) => eprintln!("Warning: {}", e),
                    }
                    i += 1;
                }
            }
            _ => {}
        }
        i += 1;
    }
}

fn run_match(args: &[String]) {
    if args.len() < 2 {
        eprintln!("Error: match requires two engine specifications");
        print_usage();
        return;
    }

    let engine1_spec = &args[0];
    let engine2_spec = &args[1];

    let mut config = MatchConfig::default();
    parse_flags(args, 2, &mut config);

    println!("=== Match: {} vs {} ===", engine1_spec, engine2_spec);
    println!(
        "Games: {}, Difficulty: {:?}",
        config.num_games, config.difficulty
    );
    println!();

    let mut engine1 = create_engine(engine1_spec, Player::White);
    let mut engine2 = create_engine(engine2_spec, Player::Black);

    let runner = MatchRunner::new(config);
    let result = runner.run_match(engine1.as_mut(), engine2.as_mut());

    println!();
    println!("=== Final Result ===");
    println!(
        "{}: {} wins, {} losses, {} draws",
        engine1_spec, result.wins, result.losses, result.draws
    );
    println!("Score: {:.1}%", result.score() * 100.0);

    let mut standings = Standings::load(STANDINGS_FILE).unwrap_or_default();
    standings.update_ratings(engine1_spec, engine2_spec, &result);
    standings.print_leaderboard();

    if let Err(e) = standings.save(STANDINGS_FILE) {
        eprintln!("Warning: Failed to save standings: {}", e);
    }
}

fn run_gauntlet(args: &[String]) {
    if args.is_empty() {
        eprintln!("Error: gauntlet requires a challenger engine");
        print_usage();
        return;
    }

    let challenger_spec = &args[0];

    let mut config = MatchConfig::default();
    parse_flags(args, 1, &mut config);

    let opponents = vec!["minimax", "random"];

    println!("=== Gauntlet: {} vs all ===", challenger_spec);
    println!("Opponents: {:?}", opponents);
    println!(
        "Games per match: {}, Difficulty: {:?}",
        config.num_games, config.difficulty
    );

    let mut standings = Standings::load(STANDINGS_FILE).unwrap_or_default();
    let mut results = TournamentResults::new(
        &format!("Gauntlet: {}", challenger_spec),
        std::iter::once(challenger_spec.to_string())
            .chain(opponents.iter().map(|s| s.to_string()))
            .collect(),
        TournamentConfig {
            games_per_match: config.num_games,
            difficulty: format!("{:?}", config.difficulty).to_lowercase(),
            max_moves_per_game: config.max_moves,
        },
    );

    for opponent in opponents {
        println!("\n--- {} vs {} ---", challenger_spec, opponent);

        let mut challenger = create_engine(challenger_spec, Player::White);
        let mut opp_engine = create_engine(opponent, Player::Black);

        let result = quick_match(
            challenger.as_mut(),
            opp_engine.as_mut(),
            config.num_games,
            config.difficulty,
        );

        println!(
            "Result: {}-{}-{} (Score: {:.1}%)",
            result.wins,
            result.losses,
            result.draws,
            result.score() * 100.0
        );

        standings.update_ratings(challenger_spec, opponent, &result);
        results.add_match(challenger_spec, opponent, result);
    }

    println!();
    standings.print_leaderboard();
    results.print_report();

    if let Err(e) = standings.save(STANDINGS_FILE) {
        eprintln!("Warning: Failed to save standings: {}", e);
    }
}

fn show_leaderboard() {
    match Standings::load(STANDINGS_FILE) {
        Ok(standings) => standings.print_leaderboard(),
        Err(_) => {
            println!("No tournament data found. Run some matches first!");
        }
    }
}

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    match args[1].as_str() {
        "match" => run_match(&args[2..]),
        "gauntlet" => run_gauntlet(&args[2..]),
        "leaderboard" | "elo" => show_leaderboard(),
        "help" | "--help" | "-h" => print_usage(),
        _ => {
            eprintln!("Unknown command: {}", args[1]);
            print_usage();
        }
    }
}
