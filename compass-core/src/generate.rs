//! Turn speaker records into calendar links and ICS documents.
//!
//! Nothing here touches the filesystem; [`crate::writer`] persists the
//! result.

use std::collections::HashMap;

use serde::Deserialize;
use tracing::debug;

use crate::datetime::TimeError;
use crate::error::{CompassError, CompassResult, Field, RecordError};
use crate::event::CalendarEvent;
use crate::ics::{CalendarBuilder, DEFAULT_PRODID, render_single};
use crate::link::{CalendarLinkBuilder, GOOGLE_CALENDAR_URL};
use crate::speaker::Speaker;

pub const DEFAULT_LABEL: &str = "VT Seva Career Compass";

/// Series-wide settings shared by every generated event.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SeriesOptions {
    /// Prefix of every event title, e.g. `VT Seva Career Compass: Jane Doe`.
    pub label: String,
    pub prodid: String,
    /// Endpoint the "add to calendar" links point at.
    pub calendar_url: String,
}

impl Default for SeriesOptions {
    fn default() -> Self {
        SeriesOptions {
            label: DEFAULT_LABEL.to_string(),
            prodid: DEFAULT_PRODID.to_string(),
            calendar_url: GOOGLE_CALENDAR_URL.to_string(),
        }
    }
}

/// The one-event calendar written for a single speaker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpeakerCalendar {
    /// 1-based position in the input.
    pub index: usize,
    pub name: String,
    pub file_name: String,
    pub ics: String,
}

/// Everything a run produces, ready to be written.
#[derive(Debug, Clone)]
pub struct Generated {
    /// Input records with `session.addToCalendar` filled in.
    pub speakers: Vec<Speaker>,
    /// Individual calendars, in input order.
    pub calendars: Vec<SpeakerCalendar>,
    /// The series calendar with one event per speaker.
    pub series: String,
}

/// Filesystem-safe form of a speaker name: lowercase ASCII words joined by
/// `_`. `Jane Doe` becomes `jane_doe`, `José Núñez` becomes `jose_nunez`.
pub fn speaker_slug(name: &str) -> String {
    slug::slugify(name).replace('-', "_")
}

/// Build links and calendars for every speaker.
///
/// Every malformed record is reported at once in
/// [`CompassError::InvalidRecords`]; if there are none, the first file name
/// clash is reported as [`CompassError::SlugCollision`].
pub fn generate(mut speakers: Vec<Speaker>, options: &SeriesOptions) -> CompassResult<Generated> {
    let links = CalendarLinkBuilder::new(&options.calendar_url)?;

    let mut errors = Vec::new();
    let mut collision = None;
    let mut owners: HashMap<String, (usize, String)> = HashMap::new();
    let mut series = CalendarBuilder::new(&options.prodid);
    let mut calendars = Vec::with_capacity(speakers.len());

    for (i, speaker) in speakers.iter_mut().enumerate() {
        let index = i + 1;

        let slug = speaker_slug(&speaker.name);
        let file_name = if slug.is_empty() {
            errors.push(RecordError {
                index,
                name: speaker.name.clone(),
                field: Field::Name,
                value: speaker.name.clone(),
                reason: "has no characters usable in a file name".to_string(),
            });
            None
        } else {
            Some(format!("{slug}.ics"))
        };

        let time = match speaker.session_time() {
            Ok(time) => Some(time),
            Err(err) => {
                errors.push(time_error(index, speaker, err));
                None
            }
        };

        let (Some(file_name), Some(time)) = (file_name, time) else {
            continue;
        };

        if let Some(first) = owners.get(&file_name) {
            if collision.is_none() {
                collision = Some(CompassError::SlugCollision {
                    file_name,
                    first: first.clone(),
                    second: (index, speaker.name.clone()),
                });
            }
            continue;
        }
        owners.insert(file_name.clone(), (index, speaker.name.clone()));

        let event = CalendarEvent::for_speaker(speaker, &slug, time, &options.label);
        speaker.session.add_to_calendar = Some(links.link(&event));
        series.push(&event);

        debug!(index, speaker = %speaker.name, start = %event.time.start_stamp(), "built calendar");

        calendars.push(SpeakerCalendar {
            index,
            name: speaker.name.clone(),
            file_name,
            ics: render_single(&options.prodid, &event),
        });
    }

    if !errors.is_empty() {
        return Err(CompassError::InvalidRecords(errors));
    }
    if let Some(err) = collision {
        return Err(err);
    }

    Ok(Generated {
        speakers,
        calendars,
        series: series.finish(),
    })
}

fn time_error(index: usize, speaker: &Speaker, err: TimeError) -> RecordError {
    let (field, value, reason) = match err {
        TimeError::Date(value) => (Field::Date, value, "is not a valid YYYY-MM-DD date"),
        TimeError::Time(value) => (Field::Time, value, "is not a valid HH:MM time"),
    };
    RecordError {
        index,
        name: speaker.name.clone(),
        field,
        value,
        reason: reason.to_string(),
    }
}
