//! Conversion between Eastern Arabic (Persian) digit glyphs and ASCII digits.
//!
//! The provider reports day and month numbers in Persian digits, and replies
//! are rendered back in them. Both conversions are total: characters outside
//! the ten digit glyphs pass through untouched.

/// The ten Persian digit glyphs; index `k` holds the glyph for digit `k`.
const PERSIAN_DIGITS: [char; 10] = ['۰', '۱', '۲', '۳', '۴', '۵', '۶', '۷', '۸', '۹'];

/// Replaces every Persian digit glyph with its ASCII equivalent.
pub fn to_ascii_digits(s: &str) -> String {
    s.chars()
        .map(|c| match PERSIAN_DIGITS.iter().position(|&glyph| glyph == c) {
            Some(k) => char::from(b'0' + k as u8),
            None => c,
        })
        .collect()
}

/// Replaces every ASCII digit with the corresponding Persian glyph.
pub fn to_persian_digits(s: &str) -> String {
    s.chars()
        .map(|c| {
            if c.is_ascii_digit() {
                PERSIAN_DIGITS[(c as u8 - b'0') as usize]
            } else {
                c
            }
        })
        .collect()
}
