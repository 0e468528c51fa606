use std::{io, path::PathBuf};

use anyhow::Context;
use campus::{
    console::Console,
    models::{EventManager, Seed},
};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Campus event management console.
#[derive(Debug, Parser)]
#[command(version)]
struct Args {
    /// RON file with the users and events to start with. The built-in campus
    /// data is used when omitted.
    #[arg(long, env = "CAMPUS_SEED")]
    seed: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    // A missing .env file is fine.
    dotenv::dotenv().ok();
    // Logs go to stderr so they never land between a prompt and its answer.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let seed = match &args.seed {
        Some(path) => Seed::from_path(path)
            .with_context(|| format!("failed to load seed data from {}", path.display()))?,
        None => Seed::default(),
    };

    let mut manager = EventManager::new();
    seed.apply(&mut manager);
    info!(events = manager.list_all_events().len(), "ready");

    let stdin = io::stdin();
    Console::new(&mut manager, stdin.lock(), io::stdout()).run()?;
    Ok(())
}
