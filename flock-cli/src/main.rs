use std::fs::File;
use std::io::{self, BufWriter};

use anyhow::{Context, Result};
use clap::Parser;
use flock_cli::{build_simulator, load_settings, Args, Runner};

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    if args.debug {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Debug)
            .init();
    } else {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();
    }

    log::info!("Flock simulation starting...");
    log::info!("Ticks: {}, dt: {}", args.ticks, args.dt);

    let settings = load_settings(&args).context("Failed to load settings")?;
    let flock = build_simulator(&settings).context("Failed to initialize flock")?;
    let mut runner = Runner::new(flock, args.dt, args.every);

    match &args.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            runner.run(args.ticks, &mut BufWriter::new(file))?;
        }
        None => {
            let stdout = io::stdout();
            runner.run(args.ticks, &mut BufWriter::new(stdout.lock()))?;
        }
    }

    Ok(())
}
