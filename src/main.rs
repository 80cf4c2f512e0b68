//! Command line entry point for adaptive-elo
//!
//! Exposes the rating update, opponent profile selection and game replay
//! for scripting and for checking tuning changes against recorded games.

use adaptive_elo::config::AppConfig;
use adaptive_elo::difficulty::DifficultySelector;
use adaptive_elo::rating::{win_probability, EloCalculator, RatingCalculator, RatingStats};
use adaptive_elo::training::TrainingSession;
use adaptive_elo::types::{CompletedGame, GameResult, PlayerColor, PlayerId, Rating};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info};

/// Adaptive Elo - accuracy-aware rating and engine difficulty selection
#[derive(Parser)]
#[command(
    name = "adaptive-elo",
    version,
    about = "Rate chess games and pick the next engine opponent",
    long_about = "Rates a player after each game against an engine, blending move accuracy \
                 into the Elo update, and selects the engine strength profile for the next game."
)]
struct Args {
    /// Configuration file path
    #[arg(
        short,
        long,
        value_name = "FILE",
        help = "Path to configuration file (TOML format)"
    )]
    config: Option<PathBuf>,

    /// Log level override
    #[arg(
        short,
        long,
        value_name = "LEVEL",
        help = "Override log level (trace, debug, info, warn, error)"
    )]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Compute the rating after a single game
    Rate {
        /// Player's rating before the game
        #[arg(long)]
        rating: Rating,
        /// Opponent's configured rating
        #[arg(long)]
        opponent: Rating,
        /// PGN result tag (1-0, 0-1, 1/2-1/2)
        #[arg(long, allow_hyphen_values = true)]
        result: String,
        /// Side the player held (white or black)
        #[arg(long, default_value = "white")]
        color: PlayerColor,
        /// Player's move accuracy percentage
        #[arg(long, default_value_t = 50.0)]
        accuracy: f64,
    },
    /// Show the engine profile for the next opponent of a player
    Profile {
        /// Player's current rating
        #[arg(long)]
        rating: Rating,
    },
    /// Replay a TOML file of completed games through a training session
    Replay {
        /// Games file
        file: PathBuf,
    },
}

/// Games file accepted by `replay`
#[derive(Debug, Deserialize)]
struct ReplayFile {
    #[serde(default = "default_player_id")]
    player_id: PlayerId,
    /// Statistics to resume from instead of a fresh start
    stats: Option<RatingStats>,
    #[serde(default)]
    games: Vec<CompletedGame>,
}

fn default_player_id() -> PlayerId {
    "player".to_string()
}

#[derive(Serialize)]
struct RateOutput {
    result: GameResult,
    expected_score: f64,
    win_probability: f64,
    old_rating: Rating,
    new_rating: Rating,
    change: Rating,
}

#[derive(Serialize)]
struct ProfileOutput {
    opponent_rating: Rating,
    depth: u32,
    skill_level: u32,
    thinking_time_ms: u64,
    directives: Vec<String>,
    search_command: String,
}

#[derive(Serialize)]
struct ReplayOutput {
    player_id: PlayerId,
    stats: RatingStats,
    win_rate: f64,
    draw_rate: f64,
    loss_rate: f64,
    provisional: bool,
    rating_range: (Rating, Rating),
    next_opponent_rating: Rating,
}

/// Initialize structured logging with the configured level
fn init_logging(log_level: &str) -> Result<()> {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| log_level.into()),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}

/// Load configuration from file or environment, then apply CLI overrides
fn load_config(args: &Args) -> Result<AppConfig> {
    let mut config = if let Some(config_path) = &args.config {
        AppConfig::from_file(config_path)?
    } else {
        AppConfig::from_env()?
    };

    if let Some(log_level) = &args.log_level {
        config.service.log_level = log_level.clone();
    }

    adaptive_elo::config::validate_config(&config)?;
    Ok(config)
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn run_replay(
    file: &Path,
    calculator: Arc<dyn RatingCalculator>,
    selector: DifficultySelector,
) -> Result<()> {
    let raw = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read games file {}", file.display()))?;
    let replay: ReplayFile = toml::from_str(&raw)
        .with_context(|| format!("Invalid games file {}", file.display()))?;

    let mut session = match replay.stats {
        Some(stats) => TrainingSession::with_stats(replay.player_id, calculator, selector, stats),
        None => TrainingSession::new(replay.player_id, calculator, selector),
    };

    info!(games = replay.games.len(), "Replaying games");
    for game in &replay.games {
        let record = session.record_game(game);
        debug!(
            rating = record.stats.current_rating,
            next_opponent = record.next_profile.target_rating,
            "Replayed game"
        );
    }

    let stats = *session.stats();
    print_json(&ReplayOutput {
        player_id: session.player_id().clone(),
        stats,
        win_rate: stats.win_rate(),
        draw_rate: stats.draw_rate(),
        loss_rate: stats.loss_rate(),
        provisional: stats.is_provisional(),
        rating_range: stats.rating_range(),
        next_opponent_rating: session.next_opponent().target_rating,
    })
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = load_config(&args).unwrap_or_else(|e| {
        eprintln!("Configuration error: {}", e);
        std::process::exit(1);
    });

    if let Err(e) = init_logging(&config.service.log_level) {
        eprintln!("Failed to initialize logging: {}", e);
        std::process::exit(1);
    }

    let calculator = EloCalculator::new(config.rating.clone())?;
    let selector = DifficultySelector::new(config.difficulty.clone())?;

    match &args.command {
        Command::Rate {
            rating,
            opponent,
            result,
            color,
            accuracy,
        } => {
            let result = GameResult::from_pgn_result(result, *color);
            let update = calculator.rate_game(*rating, *opponent, result, *accuracy);
            print_json(&RateOutput {
                result,
                expected_score: update.expected_score,
                win_probability: win_probability(*rating, *opponent),
                old_rating: update.old_rating,
                new_rating: update.new_rating,
                change: update.change,
            })
        }
        Command::Profile { rating } => {
            let profile = selector.next_profile(*rating);
            print_json(&ProfileOutput {
                opponent_rating: profile.target_rating,
                depth: profile.depth,
                skill_level: profile.skill_level,
                thinking_time_ms: profile.thinking_time_ms,
                directives: profile.engine_directives(),
                search_command: profile.search_command(),
            })
        }
        Command::Replay { file } => run_replay(file, Arc::new(calculator), selector),
    }
}
