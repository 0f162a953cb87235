//! The calendar event derived from a speaker record.

use crate::datetime::SessionTime;
use crate::speaker::Speaker;

/// Everything a calendar link or a VEVENT needs, in plain (unencoded) text.
///
/// Encoding for a particular target format happens at the point of
/// insertion, see [`crate::link`] and [`crate::ics`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarEvent {
    /// Stable identifier, unique within a run because slugs are.
    pub uid: String,
    pub summary: String,
    pub time: SessionTime,
    pub description: String,
    pub location: String,
}

impl CalendarEvent {
    /// Build the event for a speaker whose session time has already been
    /// parsed. `slug` is the speaker's file-name slug and `label` is the
    /// series name used to prefix the title.
    pub fn for_speaker(speaker: &Speaker, slug: &str, time: SessionTime, label: &str) -> Self {
        CalendarEvent {
            uid: format!("{slug}@career-compass"),
            summary: format!("{}: {}", label, speaker.name),
            time,
            description: speaker.details(),
            location: speaker.session.link.clone(),
        }
    }
}
