use std::path::PathBuf;

use anyhow::{Context, Result};
use compass_core::writer::{WriteReport, write_outputs};
use compass_core::{generate, loader};
use owo_colors::OwoColorize;
use tracing::warn;

use crate::config::Config;

/// Load speakers, build every link and calendar, then write them out.
pub fn run(config: &Config, input: Option<PathBuf>, out_dir: Option<PathBuf>) -> Result<()> {
    let report = execute(config, input, out_dir)?;

    println!(
        "{}",
        format!("✅ Calendar links added to {}", report.augmented.display()).green()
    );
    println!(
        "{}",
        format!("✅ {} individual .ics files created", report.calendars.len()).green()
    );
    println!(
        "{}",
        format!("✅ Series .ics file created at {}", report.series.display()).green()
    );

    Ok(())
}

fn execute(config: &Config, input: Option<PathBuf>, out_dir: Option<PathBuf>) -> Result<WriteReport> {
    let input = config.input(input);
    let layout = config.layout(out_dir);

    let speakers = loader::load_speakers(&input)?;
    if speakers.is_empty() {
        warn!(path = %input.display(), "no speakers found, the series calendar will be empty");
    }

    let generated = generate(speakers, &config.series)
        .with_context(|| format!("Failed to generate calendars from {}", input.display()))?;

    let report = write_outputs(&generated, &layout)?;
    Ok(report)
}
