use chrono::{DateTime, Local};

use crate::utils::numerals::to_persian_digits;

/// Formats epoch seconds as a zero-padded `HH:MM` clock in Persian digits.
///
/// The timestamp is interpreted in the host's configured local time zone,
/// matching what users of the deployed bot already see. Unrepresentable
/// timestamps fall back to midnight rather than failing.
pub fn format_clock(epoch_secs: i64) -> String {
    let clock = DateTime::from_timestamp(epoch_secs, 0)
        .map(|utc| utc.with_timezone(&Local).format("%H:%M").to_string())
        .unwrap_or_else(|| "00:00".to_string());
    to_persian_digits(&clock)
}
