use anyhow::{Context, Result};
use compass_core::SeriesOptions;
use compass_core::loader::DEFAULT_INPUT_FILE;
use compass_core::writer::{DEFAULT_AUGMENTED_FILE, DEFAULT_SERIES_FILE, OutputLayout};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Config file looked up in the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "compass.toml";

/// Optional settings from compass.toml. Every key falls back to the
/// defaults of the original series, so the file itself is optional.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Speaker list to read
    #[serde(default = "default_input")]
    pub input: PathBuf,

    /// Directory the calendars and augmented JSON are written to
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    #[serde(default = "default_series_file")]
    pub series_file: String,

    #[serde(default = "default_augmented_file")]
    pub augmented_file: String,

    /// Event title prefix, PRODID and calendar link endpoint
    #[serde(default)]
    pub series: SeriesOptions,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            input: default_input(),
            output_dir: default_output_dir(),
            series_file: default_series_file(),
            augmented_file: default_augmented_file(),
            series: SeriesOptions::default(),
        }
    }
}

impl Config {
    /// Output layout, with `out_dir` overriding the configured directory.
    pub fn layout(&self, out_dir: Option<PathBuf>) -> OutputLayout {
        OutputLayout {
            dir: out_dir.unwrap_or_else(|| self.output_dir.clone()),
            series_file: self.series_file.clone(),
            augmented_file: self.augmented_file.clone(),
        }
    }

    /// Input path, with `input` overriding the configured one.
    pub fn input(&self, input: Option<PathBuf>) -> PathBuf {
        input.unwrap_or_else(|| self.input.clone())
    }
}

fn default_input() -> PathBuf {
    PathBuf::from(DEFAULT_INPUT_FILE)
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_series_file() -> String {
    DEFAULT_SERIES_FILE.to_string()
}

fn default_augmented_file() -> String {
    DEFAULT_AUGMENTED_FILE.to_string()
}

/// Load the config.
///
/// An explicit path must exist. Without one, compass.toml in the working
/// directory is used if present, and built-in defaults otherwise.
pub fn load_config(explicit: Option<&Path>) -> Result<Config> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => {
            let path = PathBuf::from(DEFAULT_CONFIG_FILE);
            if !path.exists() {
                return Ok(Config::default());
            }
            path
        }
    };

    let contents = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    parse_config(&contents).with_context(|| format!("Failed to parse config file: {}", path.display()))
}

fn parse_config(contents: &str) -> Result<Config> {
    let config: Config = toml::from_str(contents)?;
    Ok(config)
}
