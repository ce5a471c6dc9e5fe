// Shared test fixture for RawEvent.
//
// The default event is a one hour meeting with two attendees on 2024-01-01, which passes the
// meeting filter. Setters override one aspect at a time.

use chrono::{DateTime, NaiveDate, Utc};

use crate::modules::meeting_invoices::core::raw_event::{EventTime, RawEvent};

pub struct RawEventBuilder {
    inner: RawEvent,
}

impl Default for RawEventBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl RawEventBuilder {
    pub fn new() -> Self {
        Self {
            inner: RawEvent {
                id: "evt-fixed-0001".to_string(),
                title: Some("Weekly Sync".to_string()),
                start: Some(EventTime::At(instant("2024-01-01T10:00:00Z"))),
                end: Some(EventTime::At(instant("2024-01-01T11:00:00Z"))),
                attendee_count: 2,
            },
        }
    }

    pub fn id(mut self, v: impl Into<String>) -> Self {
        self.inner.id = v.into();
        self
    }

    pub fn title(mut self, v: impl Into<String>) -> Self {
        self.inner.title = Some(v.into());
        self
    }

    pub fn untitled(mut self) -> Self {
        self.inner.title = None;
        self
    }

    pub fn starts_at(mut self, rfc3339: &str) -> Self {
        self.inner.start = Some(EventTime::At(instant(rfc3339)));
        self
    }

    pub fn ends_at(mut self, rfc3339: &str) -> Self {
        self.inner.end = Some(EventTime::At(instant(rfc3339)));
        self
    }

    pub fn all_day(mut self, start: &str, end: &str) -> Self {
        self.inner.start = Some(EventTime::AllDay(date(start)));
        self.inner.end = Some(EventTime::AllDay(date(end)));
        self
    }

    pub fn without_start(mut self) -> Self {
        self.inner.start = None;
        self
    }

    pub fn without_end(mut self) -> Self {
        self.inner.end = None;
        self
    }

    pub fn attendees(mut self, v: u32) -> Self {
        self.inner.attendee_count = v;
        self
    }

    pub fn build(self) -> RawEvent {
        self.inner
    }
}

pub fn instant(rfc3339: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(rfc3339)
        .unwrap()
        .with_timezone(&Utc)
}

fn date(ymd: &str) -> NaiveDate {
    NaiveDate::parse_from_str(ymd, "%Y-%m-%d").unwrap()
}

#[cfg(test)]
mod raw_event_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn default_delegates_to_new_and_builds_a_meeting() {
        let built = RawEventBuilder::default().build();
        assert_eq!(built.id, "evt-fixed-0001");
        assert_eq!(built.title.as_deref(), Some("Weekly Sync"));
        assert_eq!(built.attendee_count, 2);
        assert!(built.meeting_interval().is_some());
    }

    #[rstest]
    fn setters_override_fields() {
        let built = RawEventBuilder::new()
            .id("evt-2")
            .title("Planning")
            .attendees(5)
            .all_day("2024-02-01", "2024-02-02")
            .build();
        assert_eq!(built.id, "evt-2");
        assert_eq!(built.title.as_deref(), Some("Planning"));
        assert_eq!(built.attendee_count, 5);
        assert_eq!(built.start, Some(EventTime::AllDay(date("2024-02-01"))));
    }
}
