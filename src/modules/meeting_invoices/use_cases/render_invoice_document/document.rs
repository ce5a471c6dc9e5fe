// Printable invoice document built from an Invoice.
//
// Responsibilities
// - Lay out already computed numbers: header, summary block, table of line items.
// - Recompute each row's cost as duration times rate. Row costs are rounded for display on
//   their own and only approximately add up to the invoice total.

use askama::Template;
use chrono::NaiveDate;

use crate::modules::meeting_invoices::core::invoice::Invoice;
use crate::modules::meeting_invoices::use_cases::render_invoice_document::format::{
    format_money, format_total,
};

pub const DOCUMENT_TITLE: &str = "Meeting Invoice";
pub const BILLED_TO: &str = "The Universe (and your calendar)";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentRow {
    pub date: String,
    pub title: String,
    pub duration: String,
    pub cost: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Template)]
#[template(path = "invoice_document.html")]
pub struct InvoiceDocument {
    pub title: String,
    pub generated_on: String,
    pub billed_to: String,
    pub total_meetings: String,
    pub time_wasted: String,
    pub hourly_rate: String,
    pub total_owed: String,
    pub rows: Vec<DocumentRow>,
}

impl InvoiceDocument {
    pub fn from_invoice(invoice: &Invoice, generated_on: NaiveDate) -> Self {
        let rows = invoice
            .line_items
            .iter()
            .map(|item| DocumentRow {
                date: short_date(item.occurred_at.date_naive()),
                title: item.title.clone(),
                duration: format!("{} hrs", item.duration_hours),
                cost: format_money(item.duration_hours * invoice.hourly_rate),
            })
            .collect();

        Self {
            title: DOCUMENT_TITLE.to_string(),
            generated_on: format!("Generated on: {}", short_date(generated_on)),
            billed_to: format!("Billed to: {BILLED_TO}"),
            total_meetings: format!("Total Meetings: {}", invoice.line_item_count),
            time_wasted: format!("Time Wasted: {} hrs", invoice.total_hours),
            hourly_rate: format!("Hourly Rate: ${}", invoice.hourly_rate),
            total_owed: format!("Total Owed: {}", format_total(invoice.total_cost)),
            rows,
        }
    }
}

fn short_date(day: NaiveDate) -> String {
    day.format("%-m/%-d/%Y").to_string()
}
