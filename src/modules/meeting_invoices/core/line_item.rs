use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::shared::core::primitives::serialize_iso_millis;

/// Title used when a meeting has none.
pub const UNTITLED_MEETING: &str = "Untitled Meeting";

/// One accepted meeting. Serialized with the field names the renderer reads.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    pub id: String,
    #[serde(rename = "summary")]
    pub title: String,
    pub duration_hours: f64,
    #[serde(rename = "date", serialize_with = "serialize_iso_millis")]
    pub occurred_at: DateTime<Utc>,
}

impl LineItem {
    pub fn new(
        id: impl Into<String>,
        title: Option<String>,
        duration_hours: f64,
        occurred_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.unwrap_or_else(|| UNTITLED_MEETING.to_string()),
            duration_hours,
            occurred_at,
        }
    }
}
