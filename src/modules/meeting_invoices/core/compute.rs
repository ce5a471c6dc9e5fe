// Pure invoice computation.
//
// Purpose
// - Turn a rate plus either raw events or a synthetic request into an Invoice.
//
// Responsibilities
// - Live mode: keep timed events with at least two attendees, round each duration to two
//   places, sum the unrounded durations and round the total to one place.
// - Synthetic mode: fabricate items and total their durations the same way.
// - Cost is always the rounded total times the rate, never the sum of per-item costs.
//
// Boundaries
// - No input or output. The rate is taken as-is, including negative or NaN values.

use chrono::{DateTime, Utc};
use rand::Rng;

use crate::modules::meeting_invoices::core::invoice::Invoice;
use crate::modules::meeting_invoices::core::line_item::LineItem;
use crate::modules::meeting_invoices::core::raw_event::RawEvent;
use crate::modules::meeting_invoices::core::synthetic::synthesize_line_items;
use crate::shared::core::primitives::{hours_between, round_to_places};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvoiceMode {
    Live(Vec<RawEvent>),
    Synthetic,
}

pub fn compute_invoice<R: Rng>(
    hourly_rate: f64,
    mode: InvoiceMode,
    rng: &mut R,
    now: DateTime<Utc>,
) -> Invoice {
    match mode {
        InvoiceMode::Live(events) => compute_live_invoice(hourly_rate, &events),
        InvoiceMode::Synthetic => compute_synthetic_invoice(hourly_rate, rng, now),
    }
}

pub fn compute_live_invoice(hourly_rate: f64, events: &[RawEvent]) -> Invoice {
    let meetings: Vec<(&RawEvent, DateTime<Utc>, f64)> = events
        .iter()
        .filter_map(|event| {
            let (start, end) = event.meeting_interval()?;
            Some((event, start, hours_between(start, end)))
        })
        .collect();

    let unrounded_total: f64 = meetings.iter().map(|(_, _, hours)| hours).sum();

    let line_items = meetings
        .into_iter()
        .map(|(event, start, hours)| {
            LineItem::new(
                event.id.clone(),
                event.title.clone(),
                round_to_places(hours, 2),
                start,
            )
        })
        .collect();

    Invoice::assemble(hourly_rate, round_to_places(unrounded_total, 1), line_items)
}

pub fn compute_synthetic_invoice<R: Rng>(
    hourly_rate: f64,
    rng: &mut R,
    now: DateTime<Utc>,
) -> Invoice {
    let line_items = synthesize_line_items(rng, now);
    let total: f64 = line_items.iter().map(|item| item.duration_hours).sum();
    Invoice::assemble(hourly_rate, round_to_places(total, 1), line_items)
}
