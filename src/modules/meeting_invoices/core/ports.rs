// Ports define what the invoice use cases need from the outside world, without implementing it.
//
// Purpose
// - Describe the calendar data source as a trait and the credential it needs as a value.
//
// Boundaries
// - No concrete input or output here. Adapters implement these traits in the adapters layer.
//
// Testing guidance
// - Use the in memory calendar source for handler and router tests.

use std::fmt;

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use thiserror::Error;

use crate::modules::meeting_invoices::core::raw_event::RawEvent;

#[derive(Debug, Error)]
pub enum CalendarError {
    #[error("calendar request failed: {0}")]
    Transport(String),

    #[error("calendar responded with {status}: {body}")]
    Upstream { status: u16, body: String },

    #[error("calendar response could not be decoded: {0}")]
    Decode(String),
}

/// Bearer access token for the calendar provider. Never printed.
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(<redacted>)")
    }
}

/// What the identity provider handed us for this request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Credential {
    Bearer(AccessToken),
    Absent,
}

impl Credential {
    pub fn token(&self) -> Option<&AccessToken> {
        match self {
            Credential::Bearer(token) => Some(token),
            Credential::Absent => None,
        }
    }
}

/// Events starting at or after `since` are requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LookbackWindow {
    pub since: DateTime<Utc>,
}

impl LookbackWindow {
    pub fn trailing_days(now: DateTime<Utc>, days: i64) -> Self {
        Self {
            since: now - Duration::days(days),
        }
    }
}

#[async_trait]
pub trait CalendarSource: Send + Sync {
    async fn fetch_events(
        &self,
        token: &AccessToken,
        window: LookbackWindow,
    ) -> Result<Vec<RawEvent>, CalendarError>;
}
