#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Command-line adapter that generates and plays mazes.

mod config;
mod play;

use std::{
    io::{self, Write},
    path::PathBuf,
};

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use maze_game_system_connectivity::shortest_path;
use maze_game_system_generation::generate;
use tracing_subscriber::EnvFilter;

use crate::config::GameConfig;

/// Generate and play procedurally carved mazes.
#[derive(Debug, Parser)]
#[command(name = "maze-game", version)]
struct Cli {
    /// TOML file providing `width`, `height` and `seed`.
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,
    /// Number of maze columns.
    #[arg(long, global = true)]
    width: Option<u32>,
    /// Number of maze rows.
    #[arg(long, global = true)]
    height: Option<u32>,
    /// Seed of the first maze.
    #[arg(long, global = true)]
    seed: Option<u64>,
    /// Increase log verbosity; repeat for more detail.
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
    #[command(subcommand)]
    mode: Option<Mode>,
}

#[derive(Clone, Copy, Debug, Subcommand)]
enum Mode {
    /// Generate a maze and print its statistics.
    Generate,
    /// Play interactively over standard input (the default).
    Play,
}

/// Entry point for the maze game command-line interface.
fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = GameConfig::load(cli.config.as_deref())?
        .with_overrides(cli.width, cli.height, cli.seed)
        .validate()?;
    tracing::debug!(?config, "resolved configuration");

    match cli.mode.unwrap_or(Mode::Play) {
        Mode::Generate => report(&config, io::stdout().lock()),
        Mode::Play => play::run(&config, io::stdin().lock(), io::stdout().lock()),
    }
}

fn init_tracing(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn report<W: Write>(config: &GameConfig, mut output: W) -> Result<()> {
    let seed = config.seed_or_random();
    let maze = generate(config.width, config.height, seed).context("failed to generate maze")?;
    let walls = maze.walls();
    let solution = shortest_path(walls, maze.start(), maze.goal())
        .map(|path| path.len() - 1)
        .context("generated maze has no solution")?;

    writeln!(output, "size: {}", maze.size())?;
    writeln!(output, "seed: {seed}")?;
    writeln!(output, "walls: {}", walls.len())?;
    writeln!(output, "open passages: {}", walls.open_passage_count())?;
    writeln!(output, "solution steps: {solution}")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_lists_maze_statistics() {
        let config = GameConfig {
            width: 3,
            height: 2,
            seed: Some(4),
        };
        let mut output = Vec::new();

        report(&config, &mut output).expect("report succeeds");

        let text = String::from_utf8(output).expect("utf-8 output");
        assert!(text.starts_with("size: 3x2\nseed: 4\nwalls: 2\nopen passages: 5\n"));
        assert!(text.contains("solution steps: "));
    }

    #[test]
    fn report_rejects_empty_mazes() {
        let config = GameConfig {
            width: 0,
            height: 2,
            seed: Some(4),
        };
        assert!(report(&config, Vec::new()).is_err());
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["maze-game", "generate", "--width", "9", "-vv"])
            .expect("arguments parse");
        assert!(matches!(cli.mode, Some(Mode::Generate)));
        assert_eq!(cli.width, Some(9));
        assert_eq!(cli.verbose, 2);
    }
}
