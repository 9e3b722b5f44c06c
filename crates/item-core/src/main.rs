//! Item Showcase
//!
//! Builds a row of items from a roster, levels them, sorts the row by item id
//! and writes the swap trace and its timeline for the visualization layer.

use clap::Parser;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use item_core::{build_items, Roster, Showcase, ShowcaseError, Tuning, DEFAULT_TUNING_PATH};
use showcase_events::{generate_snapshot_id, RowSnapshot};
use sort_director::{Director, DirectorConfig};

/// Command line arguments for the showcase
#[derive(Parser, Debug)]
#[command(name = "showcase")]
#[command(about = "Sorts a row of leveled items and records every swap")]
struct Args {
    /// Roster TOML describing the items and their abilities
    #[arg(long)]
    roster: PathBuf,

    /// Tuning TOML (defaults are used when the file is missing)
    #[arg(long, default_value = DEFAULT_TUNING_PATH)]
    tuning: PathBuf,

    /// Director TOML with playback settings
    #[arg(long)]
    director_config: Option<PathBuf>,

    /// Random seed for item ids
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Experience awarded to every item before sorting
    #[arg(long, default_value_t = 0.0)]
    experience: f32,

    /// Directory the run files are written to
    #[arg(long, default_value = "output")]
    output: PathBuf,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("showcase=info,item_core=info")),
        )
        .init();

    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), ShowcaseError> {
    tracing::info!("Seed: {}", args.seed);

    let tuning = Tuning::load_or_default(&args.tuning)?;
    let roster = Roster::from_file(&args.roster)?;
    let director = match &args.director_config {
        Some(path) => Director::from_config_file(path)?,
        None => Director::new(DirectorConfig::default()),
    };

    let mut rng = SmallRng::seed_from_u64(args.seed);
    let items = build_items(roster, &tuning, &mut rng);
    let mut showcase = Showcase::new(items, tuning);

    if args.experience > 0.0 {
        let leveled = showcase.award_experience(args.experience);
        tracing::info!("{} items leveled up", leveled);
    }

    let before = showcase.snapshots();
    let trace = showcase.sort_items().with_run_id();
    let row = RowSnapshot::new(generate_snapshot_id(1), before, showcase.snapshots());

    let timeline = director.direct(&row, &trace, &args.output)?;
    tracing::info!(
        "Sorted ids: {:?} ({} swaps, {:.2}s of playback)",
        row.sorted_ids(),
        trace.swap_count(),
        timeline.total_secs()
    );
    Ok(())
}
