mod commands;
mod config;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "compass")]
#[command(about = "Generate calendar links and .ics files for the Career Compass speaker series")]
struct Cli {
    /// Config file (defaults to ./compass.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Write calendar links, per-speaker .ics files and the series .ics file (default)
    Generate {
        /// Speaker list (JSON array)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Directory to write the generated files to
        #[arg(short, long)]
        out_dir: Option<PathBuf>,
    },
    /// Show the next upcoming session
    Next {
        /// Speaker list (JSON array)
        #[arg(short, long)]
        input: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!("{}=info,compass_core=info", env!("CARGO_CRATE_NAME")).into()
            }),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = config::load_config(cli.config.as_deref())?;

    match cli.command {
        None => commands::generate::run(&config, None, None),
        Some(Commands::Generate { input, out_dir }) => commands::generate::run(&config, input, out_dir),
        Some(Commands::Next { input }) => commands::next::run(&config, input),
    }
}
