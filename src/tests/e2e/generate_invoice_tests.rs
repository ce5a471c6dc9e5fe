use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde_json::{Value, json};
use std::sync::Arc;
use std::time::Duration;
use tower::ServiceExt;

use crate::modules::meeting_invoices::adapters::outbound::calendar_in_memory::InMemoryCalendarSource;
use crate::shell::config::AppConfig;
use crate::shell::http::router;
use crate::shell::state::AppState;
use crate::tests::fixtures::raw_events::RawEventBuilder;

fn app(calendar: InMemoryCalendarSource) -> Router {
    let config = AppConfig {
        demo_delay: Duration::ZERO,
        ..AppConfig::default()
    };
    router(AppState::new(
        Arc::new(calendar),
        StdRng::seed_from_u64(11),
        &config,
    ))
}

async fn post_json(app: Router, uri: &str, token: Option<&str>, body: &str) -> (StatusCode, Value) {
    let mut request = Request::post(uri).header("content-type", "application/json");
    if let Some(token) = token {
        request = request.header("authorization", format!("Bearer {token}"));
    }
    let response = app
        .oneshot(request.body(Body::from(body.to_string())).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

fn standup_calendar() -> InMemoryCalendarSource {
    InMemoryCalendarSource::with_events(vec![
        RawEventBuilder::new()
            .id("standup")
            .title("Standup")
            .starts_at("2024-01-02T09:00:00Z")
            .ends_at("2024-01-02T09:30:00Z")
            .attendees(5)
            .build(),
        RawEventBuilder::new()
            .id("solo-focus")
            .title("Focus time")
            .starts_at("2024-01-03T09:00:00Z")
            .ends_at("2024-01-03T12:00:00Z")
            .attendees(1)
            .build(),
        RawEventBuilder::new()
            .id("planning")
            .title("Planning")
            .starts_at("2024-01-04T13:00:00Z")
            .ends_at("2024-01-04T14:00:00Z")
            .attendees(3)
            .build(),
        RawEventBuilder::new()
            .id("offsite")
            .title("Offsite")
            .all_day("2024-01-05", "2024-01-06")
            .attendees(10)
            .build(),
    ])
}

#[tokio::test]
async fn it_should_bill_only_timed_meetings_with_enough_attendees() {
    let (status, body) = post_json(
        app(standup_calendar()),
        "/api/invoice/generate",
        Some("token-0001"),
        r#"{"hourlyRate":150}"#,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let invoice = &body["invoice"];
    assert_eq!(invoice["lineItemCount"], 2);
    assert_eq!(invoice["totalHours"], 1.5);
    assert_eq!(invoice["hourlyRate"], 150.0);
    assert_eq!(invoice["totalCost"], 225.0);
    assert_eq!(invoice["dateRange"], "Last 30 Days");
    assert_eq!(
        invoice["lineItems"],
        json!([
            {
                "id": "planning",
                "summary": "Planning",
                "durationHours": 1.0,
                "date": "2024-01-04T13:00:00.000Z"
            },
            {
                "id": "standup",
                "summary": "Standup",
                "durationHours": 0.5,
                "date": "2024-01-02T09:00:00.000Z"
            }
        ])
    );
}

#[tokio::test]
async fn it_should_return_a_zero_invoice_for_an_empty_calendar() {
    let (status, body) = post_json(
        app(InMemoryCalendarSource::new()),
        "/api/invoice/generate",
        Some("token-0001"),
        r#"{"hourlyRate":150}"#,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["invoice"]["lineItemCount"], 0);
    assert_eq!(body["invoice"]["totalHours"], 0.0);
    assert_eq!(body["invoice"]["totalCost"], 0.0);
    assert_eq!(body["invoice"]["lineItems"], json!([]));
}

#[tokio::test]
async fn it_should_fall_back_to_synthetic_data_without_a_token() {
    let (status, body) = post_json(
        app(standup_calendar()),
        "/api/invoice/generate",
        None,
        r#"{"hourlyRate":100}"#,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let invoice = &body["invoice"];
    let count = invoice["lineItemCount"].as_u64().unwrap();
    assert!((5..=19).contains(&count));
    let items = invoice["lineItems"].as_array().unwrap();
    assert_eq!(items.len() as u64, count);
    assert!(items.iter().all(|item| item["id"].as_str().unwrap().starts_with("demo-")));

    let dates: Vec<&str> = items.iter().map(|item| item["date"].as_str().unwrap()).collect();
    let mut newest_first = dates.clone();
    newest_first.sort_by(|a, b| b.cmp(a));
    assert_eq!(dates, newest_first);
}

#[tokio::test]
async fn it_should_prefer_demo_mode_over_a_present_token() {
    let calendar = Arc::new(standup_calendar());
    let config = AppConfig {
        demo_delay: Duration::ZERO,
        ..AppConfig::default()
    };
    let app = router(AppState::new(
        calendar.clone(),
        StdRng::seed_from_u64(12),
        &config,
    ));

    let (status, body) = post_json(
        app,
        "/api/invoice/generate",
        Some("token-0001"),
        r#"{"demoMode":true}"#,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["invoice"]["hourlyRate"], 150.0);
    assert!(calendar.fetched_windows().await.is_empty());
}

#[tokio::test]
async fn it_should_answer_500_with_the_generic_error_when_the_calendar_fails() {
    let mut calendar = standup_calendar();
    calendar.toggle_offline();

    let (status, body) = post_json(
        app(calendar),
        "/api/invoice/generate",
        Some("token-0001"),
        r#"{"hourlyRate":150}"#,
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "Failed to generate invoice." }));
}

#[tokio::test]
async fn it_should_report_healthy() {
    let response = app(InMemoryCalendarSource::new())
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&bytes[..], b"ok");
}

#[tokio::test]
async fn it_should_serve_the_same_invoice_over_graphql() {
    let query = json!({
        "query": "{ generateInvoice(hourlyRate: 150) { lineItemCount totalHours totalCost lineItems { id durationHours } } }"
    });

    let (status, body) = post_json(
        app(standup_calendar()),
        "/gql",
        Some("token-0001"),
        &query.to_string(),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let invoice = &body["data"]["generateInvoice"];
    assert_eq!(invoice["lineItemCount"], 2);
    assert_eq!(invoice["totalHours"], 1.5);
    assert_eq!(invoice["totalCost"], 225.0);
    assert_eq!(invoice["lineItems"][0]["id"], "planning");
}
