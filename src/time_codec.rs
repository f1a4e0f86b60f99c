//! Elapsed-time parsing and display.
//!
//! Timing exports write lap times either as `H:MM:SS.f` or, for laps under an
//! hour, as `MM:SS.f`. Both parse into a [`Duration`] with microsecond
//! resolution. Display always uses `HH:MM:SS.T` with a single tenths digit
//! that is truncated, never rounded, so `format` is only an inverse of `parse`
//! down to a tenth of a second.

use std::time::Duration;

use crate::{Result, ResultsError};

const MICROS_PER_SECOND: u32 = 1_000_000;
const MAX_FRACTION_DIGITS: usize = 6;

/// Parse an elapsed-time cell into a [`Duration`].
///
/// `H:MM:SS.f` is tried first and `MM:SS.f` second. Anything else is a
/// [`ResultsError::TimeFormat`].
pub fn parse_elapsed(text: &str) -> Result<Duration> {
    let trimmed = text.trim();
    parse_with_hours(trimmed)
        .or_else(|| parse_without_hours(trimmed))
        .ok_or_else(|| ResultsError::time_format(text))
}

/// Render a [`Duration`] as `HH:MM:SS.T`.
pub fn format_elapsed(elapsed: Duration) -> String {
    let total = elapsed.as_secs();
    let tenths = elapsed.subsec_millis() / 100;
    format!("{:02}:{:02}:{:02}.{}", total / 3600, (total % 3600) / 60, total % 60, tenths)
}

fn parse_with_hours(text: &str) -> Option<Duration> {
    let mut parts = text.splitn(3, ':');
    let hours = parse_clock_field(parts.next()?, 99)?;
    let minutes = parse_clock_field(parts.next()?, 59)?;
    let seconds = parse_seconds(parts.next()?)?;
    Some(Duration::from_secs(hours * 3600 + minutes * 60) + seconds)
}

fn parse_without_hours(text: &str) -> Option<Duration> {
    let (minutes, seconds) = text.split_once(':')?;
    let minutes = parse_clock_field(minutes, 59)?;
    let seconds = parse_seconds(seconds)?;
    Some(Duration::from_secs(minutes * 60) + seconds)
}

/// One or two ASCII digits, bounded above by `max`.
fn parse_clock_field(text: &str, max: u64) -> Option<u64> {
    if text.is_empty() || text.len() > 2 || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let value: u64 = text.parse().ok()?;
    (value <= max).then_some(value)
}

/// `SS.f` where the fraction carries one to six digits.
fn parse_seconds(text: &str) -> Option<Duration> {
    let (whole, fraction) = text.split_once('.')?;
    let whole = parse_clock_field(whole, 59)?;
    if fraction.is_empty()
        || fraction.len() > MAX_FRACTION_DIGITS
        || !fraction.bytes().all(|b| b.is_ascii_digit())
    {
        return None;
    }

    let digits: u32 = fraction.parse().ok()?;
    let scale = 10u32.pow((MAX_FRACTION_DIGITS - fraction.len()) as u32);
    let micros = digits * scale;
    debug_assert!(micros < MICROS_PER_SECOND);

    Some(Duration::from_secs(whole) + Duration::from_micros(u64::from(micros)))
}
