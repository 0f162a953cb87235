//! Upcoming-session lookup.

use std::fmt;

use chrono::NaiveDateTime;

use crate::datetime::SessionTime;
use crate::speaker::Speaker;

/// The speaker whose session starts soonest after `now`.
///
/// Records with an unparseable session are skipped. Ties go to the earlier
/// record.
pub fn next_up(speakers: &[Speaker], now: NaiveDateTime) -> Option<(&Speaker, SessionTime)> {
    speakers
        .iter()
        .filter_map(|speaker| speaker.session_time().ok().map(|time| (speaker, time)))
        .filter(|(_, time)| time.start > now)
        .min_by_key(|(_, time)| time.start)
}

/// Time remaining until a session starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Countdown {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl Countdown {
    /// `None` once `target` is not in the future anymore.
    pub fn until(now: NaiveDateTime, target: NaiveDateTime) -> Option<Self> {
        let total = (target - now).num_seconds();
        if total <= 0 {
            return None;
        }
        Some(Countdown {
            days: total / 86_400,
            hours: total % 86_400 / 3_600,
            minutes: total % 3_600 / 60,
            seconds: total % 60,
        })
    }
}

impl fmt::Display for Countdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}d {}h {}m {}s",
            self.days, self.hours, self.minutes, self.seconds
        )
    }
}
