// The single output value of the invoice computation.
//
// Invariants
// - line_items is sorted by occurred_at, newest first. Equal timestamps keep their input order.
// - line_item_count == line_items.len().
// - total_cost == total_hours * hourly_rate, where total_hours is already rounded.

use serde::Serialize;

use crate::modules::meeting_invoices::core::line_item::LineItem;

/// Label for the lookback window every invoice covers.
pub const DATE_RANGE_LABEL: &str = "Last 30 Days";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    pub line_item_count: usize,
    pub total_hours: f64,
    pub hourly_rate: f64,
    pub total_cost: f64,
    pub date_range: String,
    pub line_items: Vec<LineItem>,
}

impl Invoice {
    /// Assemble an invoice from already rounded `total_hours` and unordered line items.
    pub fn assemble(hourly_rate: f64, total_hours: f64, mut line_items: Vec<LineItem>) -> Self {
        line_items.sort_by(|a, b| b.occurred_at.cmp(&a.occurred_at));
        Self {
            line_item_count: line_items.len(),
            total_hours,
            hourly_rate,
            total_cost: total_hours * hourly_rate,
            date_range: DATE_RANGE_LABEL.to_string(),
            line_items,
        }
    }
}
