//! Session date/time parsing and calendar timestamp formatting.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use thiserror::Error;

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMAT: &str = "%H:%M";

/// Compact UTC-style form used by both DTSTART/DTEND and the `dates`
/// parameter of calendar links.
pub const STAMP_FORMAT: &str = "%Y%m%dT%H%M%SZ";

/// Every session lasts one hour.
pub fn session_length() -> Duration {
    Duration::hours(1)
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TimeError {
    #[error("'{0}' is not a valid YYYY-MM-DD date")]
    Date(String),

    #[error("'{0}' is not a valid HH:MM time")]
    Time(String),
}

/// A parsed session slot: start time and the derived end one hour later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct SessionTime {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl SessionTime {
    /// Parse a session from its `YYYY-MM-DD` date and `HH:MM` time.
    ///
    /// The end is always exactly one hour after the start, so a 23:30 start
    /// ends at 00:30 the next day.
    pub fn parse(date: &str, time: &str) -> Result<Self, TimeError> {
        let start = parse_date(date)?.and_time(parse_time(time)?);
        Ok(SessionTime {
            start,
            end: start + session_length(),
        })
    }

    pub fn start_stamp(&self) -> String {
        format_stamp(&self.start)
    }

    pub fn end_stamp(&self) -> String {
        format_stamp(&self.end)
    }
}

/// Format a session date and time as `YYYYMMDDTHHMMSSZ`.
pub fn format_datetime(date: &str, time: &str) -> Result<String, TimeError> {
    SessionTime::parse(date, time).map(|session| session.start_stamp())
}

pub fn format_stamp(dt: &NaiveDateTime) -> String {
    dt.format(STAMP_FORMAT).to_string()
}

// chrono accepts single-digit fields, so the canonical rendering has to match
// the input exactly.
fn parse_date(input: &str) -> Result<NaiveDate, TimeError> {
    NaiveDate::parse_from_str(input, DATE_FORMAT)
        .ok()
        .filter(|date| date.format(DATE_FORMAT).to_string() == input)
        .ok_or_else(|| TimeError::Date(input.to_string()))
}

fn parse_time(input: &str) -> Result<NaiveTime, TimeError> {
    NaiveTime::parse_from_str(input, TIME_FORMAT)
        .ok()
        .filter(|time| time.format(TIME_FORMAT).to_string() == input)
        .ok_or_else(|| TimeError::Time(input.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_stamp(stamp: &str) -> Option<NaiveDateTime> {
        NaiveDateTime::parse_from_str(stamp, STAMP_FORMAT).ok()
    }

    fn is_stamp_shaped(stamp: &str) -> bool {
        let bytes = stamp.as_bytes();
        bytes.len() == 16
            && bytes[..8].iter().all(u8::is_ascii_digit)
            && bytes[8] == b'T'
            && bytes[9..15].iter().all(u8::is_ascii_digit)
            && bytes[15] == b'Z'
    }

    #[test]
    fn formats_start_stamp() {
        assert_eq!(format_datetime("2024-05-01", "14:00").unwrap(), "20240501T140000Z");
        assert_eq!(format_datetime("2025-03-23", "09:30").unwrap(), "20250323T093000Z");
    }

    #[test]
    fn end_is_one_hour_after_start() {
        let session = SessionTime::parse("2024-05-01", "14:00").unwrap();
        assert_eq!(session.end_stamp(), "20240501T150000Z");
        assert_eq!((session.end - session.start).num_seconds(), 3600);
    }

    #[test]
    fn end_keeps_start_minutes() {
        let session = SessionTime::parse("2024-05-01", "14:30").unwrap();
        assert_eq!(session.end_stamp(), "20240501T153000Z");
    }

    #[test]
    fn end_rolls_over_midnight() {
        let session = SessionTime::parse("2024-05-01", "23:00").unwrap();
        assert_eq!(session.end_stamp(), "20240502T000000Z");
    }

    #[test]
    fn end_rolls_over_month_and_year() {
        assert_eq!(
            SessionTime::parse("2024-02-29", "23:15").unwrap().end_stamp(),
            "20240301T001500Z"
        );
        assert_eq!(
            SessionTime::parse("2024-12-31", "23:59").unwrap().end_stamp(),
            "20250101T005900Z"
        );
    }

    #[test]
    fn every_slot_of_a_day_round_trips() {
        for hour in 0..24 {
            for minute in [0, 1, 30, 59] {
                let time = format!("{hour:02}:{minute:02}");
                let session = SessionTime::parse("2025-03-23", &time).unwrap();

                let start = session.start_stamp();
                let end = session.end_stamp();
                assert!(is_stamp_shaped(&start), "bad stamp {start}");
                assert!(is_stamp_shaped(&end), "bad stamp {end}");

                let start_back = parse_stamp(&start).unwrap();
                let end_back = parse_stamp(&end).unwrap();
                assert_eq!(start_back, session.start);
                assert_eq!((end_back - start_back).num_seconds(), 3600, "{time}");
            }
        }
    }

    #[test]
    fn rejects_malformed_dates() {
        for date in ["2024-5-1", "24-05-01", "2024/05/01", "2024-13-01", "2023-02-29", "", "tomorrow"] {
            assert_eq!(
                SessionTime::parse(date, "14:00"),
                Err(TimeError::Date(date.to_string())),
                "{date:?} should be rejected"
            );
        }
    }

    #[test]
    fn rejects_malformed_times() {
        for time in ["9:00", "24:00", "14:60", "14", "14:00:00", "2pm", ""] {
            assert_eq!(
                SessionTime::parse("2024-05-01", time),
                Err(TimeError::Time(time.to_string())),
                "{time:?} should be rejected"
            );
        }
    }

    #[test]
    fn date_error_reported_before_time_error() {
        assert_eq!(
            SessionTime::parse("nope", "nope"),
            Err(TimeError::Date("nope".into()))
        );
    }
}
