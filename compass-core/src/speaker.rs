//! Speaker and session records, as read from and written back to JSON.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::datetime::{SessionTime, TimeError};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Speaker {
    pub name: String,
    pub role: String,
    pub organization: String,
    pub blurb: String,
    pub session: Session,

    /// Fields the generator does not use (photo, category, ...), carried
    /// through to the augmented output untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    /// `YYYY-MM-DD`
    pub date: String,
    /// 24-hour `HH:MM`
    pub time: String,
    /// Meeting link, used as the event location.
    pub link: String,

    /// Generated "add to calendar" link.
    #[serde(
        rename = "addToCalendar",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub add_to_calendar: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Speaker {
    pub fn session_time(&self) -> Result<SessionTime, TimeError> {
        SessionTime::parse(&self.session.date, &self.session.time)
    }

    /// Event description: who the speaker is, followed by their blurb.
    pub fn details(&self) -> String {
        format!(
            "{} is a {} at {}. {}",
            self.name, self.role, self.organization, self.blurb
        )
    }
}
