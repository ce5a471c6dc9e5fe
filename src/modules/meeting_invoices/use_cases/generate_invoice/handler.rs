// Generate invoice handler orchestrates the read flow.
//
// Responsibilities
// - Pick synthetic mode when demo mode is requested or no credential is present.
// - Otherwise fetch the lookback window from the calendar source and compute a live invoice.
// - Surface fetch failures as ApplicationError. No retries and no partial invoices.

use std::sync::Arc;
use std::time::Duration;

use rand::rngs::StdRng;
use thiserror::Error;
use tokio::sync::Mutex;

use crate::modules::meeting_invoices::core::compute::{InvoiceMode, compute_invoice};
use crate::modules::meeting_invoices::core::invoice::Invoice;
use crate::modules::meeting_invoices::core::ports::{
    CalendarError, CalendarSource, Credential, LookbackWindow,
};
use crate::modules::meeting_invoices::use_cases::generate_invoice::command::GenerateInvoice;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Calendar(#[from] CalendarError),
}

#[derive(Debug, Clone, Copy)]
pub struct GenerateInvoiceSettings {
    pub lookback_days: i64,
    pub demo_delay: Duration,
}

impl Default for GenerateInvoiceSettings {
    fn default() -> Self {
        Self {
            lookback_days: 30,
            demo_delay: Duration::from_millis(1500),
        }
    }
}

pub struct GenerateInvoiceHandler {
    calendar: Arc<dyn CalendarSource>,
    random: Mutex<StdRng>,
    settings: GenerateInvoiceSettings,
}

impl GenerateInvoiceHandler {
    pub fn new(
        calendar: Arc<dyn CalendarSource>,
        random: StdRng,
        settings: GenerateInvoiceSettings,
    ) -> Self {
        Self {
            calendar,
            random: Mutex::new(random),
            settings,
        }
    }

    pub async fn handle(
        &self,
        command: GenerateInvoice,
        credential: &Credential,
    ) -> Result<Invoice, ApplicationError> {
        let mode = match credential.token() {
            Some(token) if !command.demo_mode => {
                let window =
                    LookbackWindow::trailing_days(command.requested_at, self.settings.lookback_days);
                let events = self.calendar.fetch_events(token, window).await?;
                tracing::info!(fetched = events.len(), "generating live invoice");
                InvoiceMode::Live(events)
            }
            _ => {
                tracing::info!(
                    demo_mode = command.demo_mode,
                    "generating synthetic invoice"
                );
                if !self.settings.demo_delay.is_zero() {
                    tokio::time::sleep(self.settings.demo_delay).await;
                }
                InvoiceMode::Synthetic
            }
        };

        let mut rng = self.random.lock().await;
        let invoice = compute_invoice(command.hourly_rate, mode, &mut *rng, command.requested_at);
        tracing::info!(
            line_items = invoice.line_item_count,
            total_hours = invoice.total_hours,
            "invoice generated"
        );
        Ok(invoice)
    }
}
