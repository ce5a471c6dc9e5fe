// Command data type for generating an invoice.
//
// Purpose
// - Express the caller's intent: bill at this rate, optionally with synthetic data.
//
// Responsibilities
// - Carry input data for the handler. The rate is already coerced to a number.
// - Be independent of transport layer details (not tied to HTTP or GraphQL).

use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq)]
pub struct GenerateInvoice {
    pub hourly_rate: f64,
    pub demo_mode: bool,
    pub requested_at: DateTime<Utc>,
}
