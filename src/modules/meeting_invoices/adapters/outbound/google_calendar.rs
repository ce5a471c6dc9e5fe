// Google Calendar v3 implementation of the CalendarSource port.
//
// Responsibilities
// - List single (expanded) events of one calendar from the start of the lookback window.
// - Map the provider payload into RawEvent, dropping timestamps that do not parse.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use reqwest::Client;
use serde::Deserialize;
use serde::de::IgnoredAny;

use crate::modules::meeting_invoices::core::ports::{
    AccessToken, CalendarError, CalendarSource, LookbackWindow,
};
use crate::modules::meeting_invoices::core::raw_event::{EventTime, RawEvent};
use crate::shared::core::primitives::iso_millis;

pub const GOOGLE_CALENDAR_API_BASE: &str = "https://www.googleapis.com/calendar/v3";
pub const PRIMARY_CALENDAR: &str = "primary";
pub const MAX_RESULTS: u32 = 250;

pub struct GoogleCalendarSource {
    client: Client,
    api_base: String,
    calendar_id: String,
    max_results: u32,
}

impl GoogleCalendarSource {
    pub fn new(
        client: Client,
        api_base: impl Into<String>,
        calendar_id: impl Into<String>,
        max_results: u32,
    ) -> Self {
        Self {
            client,
            api_base: api_base.into().trim_end_matches('/').to_string(),
            calendar_id: calendar_id.into(),
            max_results,
        }
    }
}

#[async_trait]
impl CalendarSource for GoogleCalendarSource {
    async fn fetch_events(
        &self,
        token: &AccessToken,
        window: LookbackWindow,
    ) -> Result<Vec<RawEvent>, CalendarError> {
        let url = format!("{}/calendars/{}/events", self.api_base, self.calendar_id);
        let query = [
            ("timeMin", iso_millis(&window.since)),
            ("maxResults", self.max_results.to_string()),
            ("singleEvents", "true".to_string()),
            ("orderBy", "startTime".to_string()),
        ];

        let response = self
            .client
            .get(&url)
            .bearer_auth(token.as_str())
            .query(&query)
            .send()
            .await
            .map_err(|e| CalendarError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            tracing::error!(status = status.as_u16(), %body, "google calendar request failed");
            return Err(CalendarError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        let listing: GoogleEventsResponse = response
            .json()
            .await
            .map_err(|e| CalendarError::Decode(e.to_string()))?;

        Ok(listing.items.into_iter().map(RawEvent::from).collect())
    }
}

#[derive(Debug, Deserialize)]
struct GoogleEventsResponse {
    #[serde(default)]
    items: Vec<GoogleCalendarEvent>,
}

#[derive(Debug, Deserialize)]
struct GoogleCalendarEvent {
    #[serde(default)]
    id: String,
    summary: Option<String>,
    start: Option<GoogleEventDateTime>,
    end: Option<GoogleEventDateTime>,
    attendees: Option<Vec<IgnoredAny>>,
}

#[derive(Debug, Deserialize)]
struct GoogleEventDateTime {
    #[serde(rename = "dateTime")]
    date_time: Option<String>,
    date: Option<String>,
}

impl GoogleEventDateTime {
    fn into_event_time(self, event_id: &str) -> Option<EventTime> {
        if let Some(raw) = self.date_time {
            return match DateTime::parse_from_rfc3339(&raw) {
                Ok(instant) => Some(EventTime::At(instant.with_timezone(&Utc))),
                Err(err) => {
                    tracing::warn!(event_id, %raw, %err, "unparseable event dateTime");
                    None
                }
            };
        }
        let raw = self.date?;
        match NaiveDate::parse_from_str(&raw, "%Y-%m-%d") {
            Ok(day) => Some(EventTime::AllDay(day)),
            Err(err) => {
                tracing::warn!(event_id, %raw, %err, "unparseable event date");
                None
            }
        }
    }
}

impl From<GoogleCalendarEvent> for RawEvent {
    fn from(event: GoogleCalendarEvent) -> Self {
        let start = event.start.and_then(|s| s.into_event_time(&event.id));
        let end = event.end.and_then(|e| e.into_event_time(&event.id));
        let attendee_count = event
            .attendees
            .map_or(0, |list| u32::try_from(list.len()).unwrap_or(u32::MAX));
        RawEvent {
            id: event.id,
            title: event.summary.filter(|s| !s.is_empty()),
            start,
            end,
            attendee_count,
        }
    }
}
