use std::sync::Arc;

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::modules::meeting_invoices::adapters::outbound::google_calendar::GoogleCalendarSource;
use crate::modules::meeting_invoices::core::ports::CalendarSource;
use crate::modules::meeting_invoices::use_cases::generate_invoice::handler::{
    GenerateInvoiceHandler, GenerateInvoiceSettings,
};
use crate::shell::config::AppConfig;

#[derive(Clone)]
pub struct AppState {
    pub generate_invoice_handler: Arc<GenerateInvoiceHandler>,
    pub default_hourly_rate: f64,
}

impl AppState {
    pub fn new(calendar: Arc<dyn CalendarSource>, random: StdRng, config: &AppConfig) -> Self {
        let settings = GenerateInvoiceSettings {
            lookback_days: config.lookback_days,
            demo_delay: config.demo_delay,
        };
        Self {
            generate_invoice_handler: Arc::new(GenerateInvoiceHandler::new(
                calendar, random, settings,
            )),
            default_hourly_rate: config.default_hourly_rate,
        }
    }

    /// Production wiring: Google Calendar over HTTPS and an entropy seeded random source.
    pub fn from_config(config: &AppConfig) -> Self {
        let calendar = GoogleCalendarSource::new(
            reqwest::Client::new(),
            config.calendar_api_base.clone(),
            config.calendar_id.clone(),
            config.max_results,
        );
        Self::new(Arc::new(calendar), StdRng::from_entropy(), config)
    }
}
