//! "Add to calendar" links for web calendars.

use url::Url;

use crate::error::{CompassError, CompassResult};
use crate::event::CalendarEvent;

/// Google Calendar's event template endpoint.
pub const GOOGLE_CALENDAR_URL: &str = "https://calendar.google.com/calendar/render";

/// Builds event-template links against a validated base URL.
#[derive(Debug, Clone)]
pub struct CalendarLinkBuilder {
    base: Url,
}

impl CalendarLinkBuilder {
    pub fn new(base: &str) -> CompassResult<Self> {
        let base = Url::parse(base).map_err(|source| CompassError::CalendarUrl {
            url: base.to_string(),
            source,
        })?;
        Ok(CalendarLinkBuilder { base })
    }

    /// Build the link for one event. Every query value is form-urlencoded,
    /// so reserved characters, newlines and non-ASCII text survive intact.
    pub fn link(&self, event: &CalendarEvent) -> String {
        let dates = format!("{}/{}", event.time.start_stamp(), event.time.end_stamp());

        let mut url = self.base.clone();
        url.query_pairs_mut()
            .clear()
            .append_pair("action", "TEMPLATE")
            .append_pair("text", &event.summary)
            .append_pair("dates", &dates)
            .append_pair("details", &event.description)
            .append_pair("location", &event.location);

        url.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datetime::SessionTime;
    use std::collections::HashMap;

    fn make_event(description: &str) -> CalendarEvent {
        CalendarEvent {
            uid: "jane_doe@career-compass".to_string(),
            summary: "VT Seva Career Compass: Jane Doe".to_string(),
            time: SessionTime::parse("2024-05-01", "14:00").unwrap(),
            description: description.to_string(),
            location: "https://meet.example/abc?pwd=a&b#room".to_string(),
        }
    }

    fn decoded_params(link: &str) -> HashMap<String, String> {
        Url::parse(link)
            .unwrap()
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect()
    }

    fn google() -> CalendarLinkBuilder {
        CalendarLinkBuilder::new(GOOGLE_CALENDAR_URL).unwrap()
    }

    #[test]
    fn link_points_at_template_endpoint() {
        let link = google().link(&make_event("Hello"));
        assert!(
            link.starts_with("https://calendar.google.com/calendar/render?action=TEMPLATE&text="),
            "{link}"
        );
    }

    #[test]
    fn link_params_decode_to_original_text() {
        let details = "Jane Doe is a Engineer at Acme. Loves Go & Rust";
        let params = decoded_params(&google().link(&make_event(details)));

        assert_eq!(params["action"], "TEMPLATE");
        assert_eq!(params["text"], "VT Seva Career Compass: Jane Doe");
        assert_eq!(params["dates"], "20240501T140000Z/20240501T150000Z");
        assert_eq!(params["details"], details);
        assert_eq!(params["location"], "https://meet.example/abc?pwd=a&b#room");
        assert_eq!(params.len(), 5);
    }

    #[test]
    fn reserved_and_unicode_characters_round_trip() {
        let awkward = [
            "C++ & Rust = fun?",
            "100% #1 choice",
            "line one\nline two",
            "Zoë Ångström, 東京 🚀",
            "a+b plus c",
        ];

        for text in awkward {
            let link = google().link(&make_event(text));
            assert!(!link.contains(' '), "unencoded space in {link}");
            assert!(!link.contains('\n'), "unencoded newline in {link}");
            assert_eq!(decoded_params(&link)["details"], text);
        }
    }

    #[test]
    fn title_with_reserved_characters_round_trips() {
        let mut event = make_event("x");
        event.summary = "VT Seva Career Compass: Doe, Jane; Jr. \\ & Co #1".to_string();

        let link = google().link(&event);
        assert!(!link.contains(" & "), "unencoded ampersand in {link}");
        assert!(!link.contains('#'), "unencoded hash in {link}");

        let params = decoded_params(&link);
        assert_eq!(params["text"], "VT Seva Career Compass: Doe, Jane; Jr. \\ & Co #1");
        assert_eq!(params.len(), 5);
    }

    #[test]
    fn base_query_is_replaced() {
        let builder = CalendarLinkBuilder::new("https://cal.example/new?stale=1").unwrap();
        let params = decoded_params(&builder.link(&make_event("x")));
        assert!(!params.contains_key("stale"));
        assert_eq!(params["action"], "TEMPLATE");
    }

    #[test]
    fn invalid_base_url_is_rejected() {
        let err = CalendarLinkBuilder::new("not a url").unwrap_err();
        assert!(matches!(err, CompassError::CalendarUrl { .. }), "{err}");
    }
}
