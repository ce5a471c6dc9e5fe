// Calendar record as received from a data source, before any filtering.
//
// Purpose
// - Give the core a strictly typed view of an event. Adapters map provider payloads into it and
//   drop what they cannot parse, so nothing downstream touches a partial record.
//
// Boundaries
// - No input or output. Framework free.

use chrono::{DateTime, NaiveDate, Utc};

/// Minimum number of attendees for an event to count as a meeting.
pub const MIN_MEETING_ATTENDEES: u32 = 2;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventTime {
    /// A concrete instant.
    At(DateTime<Utc>),
    /// A date without a time of day, as used by all-day events.
    AllDay(NaiveDate),
}

impl EventTime {
    pub fn instant(&self) -> Option<DateTime<Utc>> {
        match self {
            EventTime::At(instant) => Some(*instant),
            EventTime::AllDay(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawEvent {
    pub id: String,
    pub title: Option<String>,
    pub start: Option<EventTime>,
    pub end: Option<EventTime>,
    pub attendee_count: u32,
}

impl RawEvent {
    /// Start and end instants when the event is a billable meeting.
    ///
    /// Returns `None` for events with fewer than two attendees, for all-day or open-ended
    /// events, and for events whose end precedes their start.
    pub fn meeting_interval(&self) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
        if self.attendee_count < MIN_MEETING_ATTENDEES {
            return None;
        }
        let start = self.start.as_ref()?.instant()?;
        let end = self.end.as_ref()?.instant()?;
        (end >= start).then_some((start, end))
    }
}
