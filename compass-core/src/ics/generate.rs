//! VCALENDAR documents built from calendar events.

use icalendar::{Calendar, Component, EventLike};

use crate::event::CalendarEvent;

pub const DEFAULT_PRODID: &str = "-//VT Seva Career Compass//EN";

/// Accumulates VEVENTs under a single VCALENDAR header and footer.
///
/// Used both for the one-event document of each speaker and for the series
/// document holding every session.
#[derive(Debug, Clone)]
pub struct CalendarBuilder {
    calendar: Calendar,
    prodid: String,
}

impl CalendarBuilder {
    pub fn new(prodid: &str) -> Self {
        CalendarBuilder {
            calendar: Calendar::new(),
            prodid: prodid.to_string(),
        }
    }

    /// Append one VEVENT. Events keep the order they are pushed in.
    pub fn push(&mut self, event: &CalendarEvent) -> &mut Self {
        self.calendar.push(to_vevent(event));
        self
    }

    /// Close the calendar and return the document text.
    pub fn finish(self) -> String {
        rewrite_header(&self.calendar.to_string(), &self.prodid)
    }
}

/// Render a complete calendar holding a single event.
pub fn render_single(prodid: &str, event: &CalendarEvent) -> String {
    let mut builder = CalendarBuilder::new(prodid);
    builder.push(event);
    builder.finish()
}

fn to_vevent(event: &CalendarEvent) -> icalendar::Event {
    let start = event.time.start_stamp();

    let mut ics_event = icalendar::Event::new();
    ics_event.uid(&event.uid);
    // DTSTAMP pinned to the session start so reruns are byte-identical
    ics_event.add_property("DTSTAMP", &start);
    ics_event.summary(&event.summary);
    ics_event.add_property("DTSTART", &start);
    ics_event.add_property("DTEND", event.time.end_stamp());
    ics_event.description(&event.description);
    ics_event.location(&event.location);

    ics_event.done()
}

/// Replace the icalendar crate's header with ours:
/// - VERSION and PRODID right after BEGIN:VCALENDAR
/// - drop CALSCALE:GREGORIAN (it's the default)
fn rewrite_header(ics: &str, prodid: &str) -> String {
    let mut result = String::with_capacity(ics.len());

    for line in ics.lines() {
        if line == "BEGIN:VCALENDAR" {
            result.push_str("BEGIN:VCALENDAR\r\nVERSION:2.0\r\n");
            result.push_str(&format!("PRODID:{}\r\n", prodid));
            continue;
        }

        if line.starts_with("VERSION:") || line.starts_with("PRODID:") || line == "CALSCALE:GREGORIAN" {
            continue;
        }

        result.push_str(line);
        result.push_str("\r\n");
    }

    result
}
