//! Odds and line text normalization.
//!
//! The sportsbook frontend renders American odds with a mix of ASCII and
//! typographic signs ("+150", "-110", "−110") and leaves the points cell
//! blank for moneyline buttons. Everything funnels through [`normalize`],
//! which maps that mess onto a signed f64 with 0.0 as the silent fallback
//! for blank or unparseable text.

/// Unicode minus sign (U+2212), used by the frontend interchangeably with
/// the ASCII hyphen-minus.
const UNICODE_MINUS: char = '\u{2212}';

/// Split off at most one leading sign marker.
///
/// Returns whether the value is negative plus the remaining magnitude
/// text. Input carries at most one sign marker, but its representation
/// (ASCII vs Unicode) varies by rendering, so exactly one of `+`, `-`,
/// or `−` is consumed.
fn split_sign(s: &str) -> (bool, &str) {
    if let Some(rest) = s.strip_prefix('+') {
        (false, rest)
    } else if let Some(rest) = s.strip_prefix('-') {
        (true, rest)
    } else if let Some(rest) = s.strip_prefix(UNICODE_MINUS) {
        (true, rest)
    } else {
        (false, s)
    }
}

/// Normalize raw odds or line text into a signed numeric value.
///
/// Blank input means "no value here" (the points cell of a moneyline
/// button) and unparseable input is treated the same way: both produce
/// 0.0 rather than an error. Downstream code therefore cannot tell a
/// genuine zero from an absent or garbled cell.
pub fn normalize(raw: &str) -> f64 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return 0.0;
    }

    let (negative, magnitude) = split_sign(trimmed);

    match magnitude.parse::<f64>() {
        Ok(value) if negative => -value,
        Ok(value) => value,
        Err(_) => 0.0,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
