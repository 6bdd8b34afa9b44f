//! tle-build - generate the pg_tle installer
//!
//! Usage: tle-build [-v...]
//!
//! Reads `sql/metagration.sql` and `install-tle.sql.template` from the
//! current directory and writes `install-tle.sql`.

mod ui;

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

use tle_builder::{BuildConfig, Pipeline};

/// tle-build - generate the pg_tle installer script
#[derive(Parser, Debug)]
#[command(name = "tle-build")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn setup_logging(verbose: u8) {
    let level = match verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .format_timestamp(None)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            ui::error::print_error(&err);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    // Paths are relative to the working directory.
    let config = BuildConfig::default();

    println!("Building TLE installer v{}", config.version);
    log::info!(
        "source {}, template {}",
        config.source_path.display(),
        config.template_path.display()
    );

    let mut pipeline = Pipeline::new(config);
    let report = pipeline.run()?;

    println!("Generated: {}", report.output_path.display());
    println!(
        "Success! Install with: psql -f {}",
        report.output_path.display()
    );

    Ok(())
}
