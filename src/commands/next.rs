use std::path::PathBuf;

use anyhow::Result;
use chrono::{Local, NaiveDateTime};
use compass_core::loader;
use compass_core::schedule::{Countdown, next_up};
use compass_core::speaker::Speaker;
use owo_colors::OwoColorize;

use crate::config::Config;

/// Show the next upcoming session and how long until it starts.
pub fn run(config: &Config, input: Option<PathBuf>) -> Result<()> {
    let speakers = loader::load_speakers(&config.input(input))?;
    let now = Local::now().naive_local();

    for line in render(&speakers, now) {
        println!("{line}");
    }

    Ok(())
}

fn render(speakers: &[Speaker], now: NaiveDateTime) -> Vec<String> {
    let Some((speaker, time)) = next_up(speakers, now) else {
        return vec!["No upcoming sessions.".dimmed().to_string()];
    };

    let mut lines = vec![
        format!("Next: {}", speaker.name.bold()),
        format!("  {} at {}", speaker.role, speaker.organization),
        format!("  📅 {} | 🕒 {}", speaker.session.date, speaker.session.time),
    ];
    if let Some(countdown) = Countdown::until(now, time.start) {
        lines.push(format!("  Starts in {}", countdown.to_string().cyan()));
    }
    if !speaker.session.link.is_empty() {
        lines.push(format!("  Join: {}", speaker.session.link));
    }
    lines
}
