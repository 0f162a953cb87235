//! ICS file generation.
//!
//! This module builds .ics documents with the icalendar crate, which handles
//! RFC 5545 text escaping and line folding.

mod generate;

pub use generate::{CalendarBuilder, DEFAULT_PRODID, render_single};

#[cfg(test)]
pub(crate) use generate::tests::read_property;
