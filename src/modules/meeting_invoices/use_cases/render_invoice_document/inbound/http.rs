use askama::Template;
use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    response::{Html, IntoResponse, Response},
};
use chrono::Utc;

use crate::modules::meeting_invoices::core::ports::Credential;
use crate::modules::meeting_invoices::use_cases::generate_invoice::inbound::http::{
    GenerateInvoiceBody, failure_response, invoice_from_body,
};
use crate::modules::meeting_invoices::use_cases::render_invoice_document::document::InvoiceDocument;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    credential: Credential,
    body: Result<Json<GenerateInvoiceBody>, JsonRejection>,
) -> Response {
    let Some(invoice) = invoice_from_body(&state, &credential, body).await else {
        return failure_response();
    };

    let document = InvoiceDocument::from_invoice(&invoice, Utc::now().date_naive());
    match document.render() {
        Ok(html) => Html(html).into_response(),
        Err(err) => {
            tracing::error!(error = %err, "error rendering invoice document");
            failure_response()
        }
    }
}
