use crate::error::ProviderError;
use crate::utils::numerals::to_ascii_digits;

/// Solar Hijri month names, Farvardin through Esfand.
const IRANIAN_MONTHS: [&str; 12] = [
    "فروردین",
    "اردیبهشت",
    "خرداد",
    "تیر",
    "مرداد",
    "شهریور",
    "مهر",
    "آبان",
    "آذر",
    "دی",
    "بهمن",
    "اسفند",
];

/// Resolves a 1-based month index, given in Persian digits, to its name.
///
/// The provider is trusted to send 1 through 12; anything else is treated as
/// a malformed response rather than read out of range.
pub fn month_name(raw: &str) -> Result<&'static str, ProviderError> {
    let index: usize = to_ascii_digits(raw.trim())
        .parse()
        .map_err(|_| ProviderError::Malformed(format!("month index not numeric: {raw:?}")))?;
    index
        .checked_sub(1)
        .and_then(|i| IRANIAN_MONTHS.get(i))
        .copied()
        .ok_or_else(|| ProviderError::Malformed(format!("month index out of range: {index}")))
}
