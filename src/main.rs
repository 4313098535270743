#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
use std::io;
use std::path::PathBuf;

use clap::Parser;
use color_eyre::Result;

use racingcar::{ConsoleView, RacingCarGame, RandomMovingStrategy};

#[derive(Debug, Parser)]
#[command(name = "racingcar", version)]
#[command(about = "Race named cars for a number of rounds and announce the winners")]
struct Args {
    /// Car names, comma-separated (asked interactively when omitted or invalid)
    #[arg(long)]
    names: Option<String>,

    /// Number of rounds (asked interactively when omitted or invalid)
    #[arg(long)]
    rounds: Option<String>,

    /// Seed for the movement rule, for reproducible races
    #[arg(long)]
    seed: Option<u64>,

    /// Directory to export the race log to as JSON
    #[arg(long)]
    log_dir: Option<PathBuf>,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    env_logger::init();
    let args = Args::parse();

    let view = ConsoleView::new(io::stdin().lock(), io::stdout().lock())
        .with_presets(args.names, args.rounds);
    let seed = args.seed;
    let mut game = RacingCarGame::with_strategies(view, move || match seed {
        Some(seed) => RandomMovingStrategy::seeded(seed),
        None => RandomMovingStrategy::from_entropy(),
    });

    let controller = game.play()?;

    if let Some(dir) = args.log_dir {
        let path = controller.export_log(&dir)?;
        log::info!("race log written to {}", path.display());
    }

    Ok(())
}
