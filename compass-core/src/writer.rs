//! Persisting generated calendars and the augmented speaker list.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::info;

use crate::error::{CompassError, CompassResult};
use crate::generate::Generated;
use crate::speaker::Speaker;

pub const DEFAULT_SERIES_FILE: &str = "career_compass_series.ics";
pub const DEFAULT_AUGMENTED_FILE: &str = "speakers_with_calendar.json";

/// Where a run writes its files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputLayout {
    pub dir: PathBuf,
    pub series_file: String,
    pub augmented_file: String,
}

impl Default for OutputLayout {
    fn default() -> Self {
        OutputLayout {
            dir: PathBuf::from("."),
            series_file: DEFAULT_SERIES_FILE.to_string(),
            augmented_file: DEFAULT_AUGMENTED_FILE.to_string(),
        }
    }
}

impl OutputLayout {
    pub fn series_path(&self) -> PathBuf {
        self.dir.join(&self.series_file)
    }

    pub fn augmented_path(&self) -> PathBuf {
        self.dir.join(&self.augmented_file)
    }
}

/// Paths written by [`write_outputs`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteReport {
    pub calendars: Vec<PathBuf>,
    pub series: PathBuf,
    pub augmented: PathBuf,
}

/// Write every individual calendar, the series calendar and the augmented
/// speaker list. Existing files are overwritten.
///
/// Name checks and serialization happen before the first file is touched.
pub fn write_outputs(generated: &Generated, layout: &OutputLayout) -> CompassResult<WriteReport> {
    for calendar in &generated.calendars {
        if calendar.file_name == layout.series_file || calendar.file_name == layout.augmented_file {
            return Err(CompassError::ReservedFileName {
                file_name: calendar.file_name.clone(),
                index: calendar.index,
                name: calendar.name.clone(),
            });
        }
    }

    let augmented = render_speakers(&generated.speakers)?;

    std::fs::create_dir_all(&layout.dir).map_err(|source| CompassError::Write {
        path: layout.dir.clone(),
        source,
    })?;

    let mut calendars = Vec::with_capacity(generated.calendars.len());
    for calendar in &generated.calendars {
        let path = layout.dir.join(&calendar.file_name);
        write_file(&path, &calendar.ics)?;
        info!(speaker = %calendar.name, path = %path.display(), "wrote calendar");
        calendars.push(path);
    }

    let series = layout.series_path();
    write_file(&series, &generated.series)?;
    info!(path = %series.display(), "wrote series calendar");

    let augmented_path = layout.augmented_path();
    write_file(&augmented_path, &augmented)?;
    info!(path = %augmented_path.display(), "wrote augmented speakers");

    Ok(WriteReport {
        calendars,
        series,
        augmented: augmented_path,
    })
}

/// Pretty-print speakers as JSON with a four-space indent and a trailing
/// newline.
pub fn render_speakers(speakers: &[Speaker]) -> CompassResult<Vec<u8>> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    speakers.serialize(&mut serializer)?;
    buf.push(b'\n');
    Ok(buf)
}

fn write_file(path: &Path, contents: impl AsRef<[u8]>) -> CompassResult<()> {
    std::fs::write(path, contents).map_err(|source| CompassError::Write {
        path: path.to_path_buf(),
        source,
    })
}
