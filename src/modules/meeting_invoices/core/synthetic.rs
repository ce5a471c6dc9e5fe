// Fabricated line items for when no live calendar is available.
//
// Responsibilities
// - Draw a bounded item count, per-item durations and timestamps within the lookback window.
// - Take the random source as a parameter so tests can pass a seeded generator.

use chrono::{DateTime, Duration, Utc};
use rand::Rng;

use crate::modules::meeting_invoices::core::line_item::LineItem;
use crate::shared::core::primitives::round_to_places;

pub const MIN_SYNTHETIC_ITEMS: usize = 5;
pub const MAX_SYNTHETIC_ITEMS: usize = 19;
pub const MIN_SYNTHETIC_HOURS: f64 = 0.5;
pub const MAX_SYNTHETIC_HOURS: f64 = 2.5;
pub const SYNTHETIC_LOOKBACK_DAYS: i64 = 30;

pub fn synthesize_line_items<R: Rng>(rng: &mut R, now: DateTime<Utc>) -> Vec<LineItem> {
    let count = rng.gen_range(MIN_SYNTHETIC_ITEMS..=MAX_SYNTHETIC_ITEMS);
    let window_ms = Duration::days(SYNTHETIC_LOOKBACK_DAYS).num_milliseconds();

    (0..count)
        .map(|index| {
            let hours = round_to_places(
                rng.gen_range(MIN_SYNTHETIC_HOURS..MAX_SYNTHETIC_HOURS),
                1,
            );
            let occurred_at = now - Duration::milliseconds(rng.gen_range(0..window_ms));
            LineItem::new(
                format!("demo-{index}"),
                Some(format!("Mock Sync - Project {}", project_letter(index))),
                hours,
                occurred_at,
            )
        })
        .collect()
}

fn project_letter(index: usize) -> char {
    char::from(b'A' + (index % 26) as u8)
}
