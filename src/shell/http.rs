use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::modules::meeting_invoices::use_cases::generate_invoice::inbound::http as generate_http;
use crate::modules::meeting_invoices::use_cases::render_invoice_document::inbound::http as document_http;
use crate::shell::graphql;
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/invoice/generate", post(generate_http::handle))
        .route("/api/invoice/document", post(document_http::handle))
        .route("/health", get(health))
        .with_state(state.clone())
        .merge(graphql::router(state))
        .layer(TraceLayer::new_for_http())
}

async fn health() -> &'static str {
    "ok"
}
