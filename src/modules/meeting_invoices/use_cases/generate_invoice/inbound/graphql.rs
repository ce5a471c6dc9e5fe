use async_graphql::{Context, Object, Result as GqlResult, SimpleObject};
use chrono::Utc;

use crate::modules::meeting_invoices::core::invoice::Invoice;
use crate::modules::meeting_invoices::core::line_item::LineItem;
use crate::modules::meeting_invoices::core::ports::Credential;
use crate::modules::meeting_invoices::use_cases::generate_invoice::command::GenerateInvoice;
use crate::shared::core::primitives::iso_millis;
use crate::shell::state::AppState;

#[derive(SimpleObject, Clone)]
pub struct GqlLineItem {
    pub id: String,
    pub summary: String,
    pub duration_hours: f64,
    pub date: String,
}

impl From<LineItem> for GqlLineItem {
    fn from(item: LineItem) -> Self {
        Self {
            date: iso_millis(&item.occurred_at),
            id: item.id,
            summary: item.title,
            duration_hours: item.duration_hours,
        }
    }
}

#[derive(SimpleObject, Clone)]
pub struct GqlInvoice {
    pub line_item_count: u64,
    pub total_hours: f64,
    pub hourly_rate: f64,
    pub total_cost: f64,
    pub date_range: String,
    pub line_items: Vec<GqlLineItem>,
}

impl From<Invoice> for GqlInvoice {
    fn from(invoice: Invoice) -> Self {
        Self {
            line_item_count: invoice.line_item_count as u64,
            total_hours: invoice.total_hours,
            hourly_rate: invoice.hourly_rate,
            total_cost: invoice.total_cost,
            date_range: invoice.date_range,
            line_items: invoice.line_items.into_iter().map(Into::into).collect(),
        }
    }
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    async fn generate_invoice(
        &self,
        context: &Context<'_>,
        hourly_rate: Option<f64>,
        demo_mode: Option<bool>,
    ) -> GqlResult<GqlInvoice> {
        let state = context.data_unchecked::<AppState>();
        let credential = context
            .data_opt::<Credential>()
            .cloned()
            .unwrap_or(Credential::Absent);

        let command = GenerateInvoice {
            hourly_rate: hourly_rate.unwrap_or(state.default_hourly_rate),
            demo_mode: demo_mode.unwrap_or(false),
            requested_at: Utc::now(),
        };

        let invoice = state
            .generate_invoice_handler
            .handle(command, &credential)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "error generating invoice");
                async_graphql::Error::new(e.to_string())
            })?;

        Ok(invoice.into())
    }
}
