// In memory implementation of the CalendarSource port.
//
// Purpose
// - Support handler and router tests, and local development without Google credentials.
//
// Responsibilities
// - Serve a fixed list of events for every token.
// - Record each requested window so tests can assert on it.
// - Simulate an upstream outage when toggled offline.

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::modules::meeting_invoices::core::ports::{
    AccessToken, CalendarError, CalendarSource, LookbackWindow,
};
use crate::modules::meeting_invoices::core::raw_event::RawEvent;

#[derive(Default)]
pub struct InMemoryCalendarSource {
    events: Vec<RawEvent>,
    windows: Mutex<Vec<LookbackWindow>>,
    offline: bool,
}

impl InMemoryCalendarSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_events(events: Vec<RawEvent>) -> Self {
        Self {
            events,
            ..Self::default()
        }
    }

    pub fn toggle_offline(&mut self) {
        self.offline = !self.offline;
    }

    pub async fn fetched_windows(&self) -> Vec<LookbackWindow> {
        self.windows.lock().await.clone()
    }
}

#[async_trait]
impl CalendarSource for InMemoryCalendarSource {
    async fn fetch_events(
        &self,
        _token: &AccessToken,
        window: LookbackWindow,
    ) -> Result<Vec<RawEvent>, CalendarError> {
        if self.offline {
            return Err(CalendarError::Transport("Calendar source offline".into()));
        }
        self.windows.lock().await.push(window);
        Ok(self.events.clone())
    }
}
