use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::modules::meeting_invoices::core::invoice::Invoice;
use crate::modules::meeting_invoices::core::ports::Credential;
use crate::modules::meeting_invoices::use_cases::generate_invoice::command::GenerateInvoice;
use crate::modules::meeting_invoices::use_cases::generate_invoice::hourly_rate::{
    coerce_hourly_rate, deserialize_present,
};
use crate::shell::state::AppState;

pub const GENERIC_FAILURE: &str = "Failed to generate invoice.";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateInvoiceBody {
    #[serde(default, deserialize_with = "deserialize_present")]
    pub hourly_rate: Option<Value>,
    #[serde(default)]
    pub demo_mode: Option<bool>,
}

impl GenerateInvoiceBody {
    pub fn into_command(self, default_rate: f64, requested_at: DateTime<Utc>) -> GenerateInvoice {
        GenerateInvoice {
            hourly_rate: coerce_hourly_rate(self.hourly_rate.as_ref(), default_rate),
            demo_mode: self.demo_mode.unwrap_or(false),
            requested_at,
        }
    }
}

#[derive(Serialize)]
pub struct GenerateInvoiceResponse {
    pub invoice: Invoice,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: &'static str,
}

pub fn failure_response() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            error: GENERIC_FAILURE,
        }),
    )
        .into_response()
}

/// Shared by every inbound route that needs an invoice computed from a request body.
/// Failures are logged here and collapse into `None`.
pub async fn invoice_from_body(
    state: &AppState,
    credential: &Credential,
    body: Result<Json<GenerateInvoiceBody>, JsonRejection>,
) -> Option<Invoice> {
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => {
            tracing::error!(error = %rejection, "error generating invoice: invalid request body");
            return None;
        }
    };

    let command = body.into_command(state.default_hourly_rate, Utc::now());
    match state.generate_invoice_handler.handle(command, credential).await {
        Ok(invoice) => Some(invoice),
        Err(err) => {
            tracing::error!(error = %err, "error generating invoice");
            None
        }
    }
}

pub async fn handle(
    State(state): State<AppState>,
    credential: Credential,
    body: Result<Json<GenerateInvoiceBody>, JsonRejection>,
) -> Response {
    match invoice_from_body(&state, &credential, body).await {
        Some(invoice) => Json(GenerateInvoiceResponse { invoice }).into_response(),
        None => failure_response(),
    }
}
