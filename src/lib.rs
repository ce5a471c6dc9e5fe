// Crate entry point. Declares the module tree so the binary and the tests reach the same code.
//
// Layout
// - shared: helpers with no knowledge of invoices.
// - modules/meeting_invoices/core: the pure invoice computation and the ports it depends on.
// - modules/meeting_invoices/use_cases: one folder per use case, with its inbound adapters.
// - modules/meeting_invoices/adapters: credential extraction and calendar data sources.
// - shell: configuration, state and router composition.

pub mod shared {
    pub mod core {
        pub mod primitives;
    }
}

pub mod modules {
    pub mod meeting_invoices {
        pub mod core {
            pub mod compute;
            pub mod invoice;
            pub mod line_item;
            pub mod ports;
            pub mod raw_event;
            pub mod synthetic;
        }
        pub mod use_cases {
            pub mod generate_invoice {
                pub mod command;
                pub mod handler;
                pub mod hourly_rate;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod render_invoice_document {
                pub mod document;
                pub mod format;
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod inbound {
                pub mod bearer_credential;
            }
            pub mod outbound {
                pub mod calendar_in_memory;
                pub mod google_calendar;
            }
        }
    }
}

pub mod shell;
