//! Error types for calendar generation.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while generating the speaker calendars.
///
/// Every variant is fatal to a run: nothing is written once one of these is
/// returned.
#[derive(Error, Debug)]
pub enum CompassError {
    #[error("Could not read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not parse speakers from {}: {source}", path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("{}", render_record_errors(.0))]
    InvalidRecords(Vec<RecordError>),

    #[error(
        "Speakers #{} ({}) and #{} ({}) would both be written to {file_name}",
        first.0, first.1, second.0, second.1
    )]
    SlugCollision {
        file_name: String,
        first: (usize, String),
        second: (usize, String),
    },

    #[error("Speaker #{index} ({name}) would overwrite the reserved output file {file_name}")]
    ReservedFileName {
        file_name: String,
        index: usize,
        name: String,
    },

    #[error("Could not write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not serialize speakers: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid calendar URL '{url}': {source}")]
    CalendarUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
}

/// Result type alias for calendar generation.
pub type CompassResult<T> = Result<T, CompassError>;

/// The record field a [`RecordError`] points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Date,
    Time,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::Name => "name",
            Field::Date => "session.date",
            Field::Time => "session.time",
        };
        f.write_str(name)
    }
}

/// A single malformed field in the input, located by record index (1-based)
/// and speaker name.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("speaker #{index} ({name}): {field} '{value}' {reason}")]
pub struct RecordError {
    pub index: usize,
    pub name: String,
    pub field: Field,
    pub value: String,
    pub reason: String,
}

fn render_record_errors(errors: &[RecordError]) -> String {
    let mut out = match errors.len() {
        1 => "1 invalid speaker record:".to_string(),
        n => format!("{n} invalid speaker records:"),
    };
    for error in errors {
        out.push_str("\n  ");
        out.push_str(&error.to_string());
    }
    out
}
