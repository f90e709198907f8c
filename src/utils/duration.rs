//! Human-readable duration strings such as `10s`, `5m` or `1h 30m`.
use std::time::Duration;

use humantime::DurationError;

/// Parse a duration expression.
///
/// A single `<number><unit>` term is matched against the unit labels below,
/// ignoring case and whitespace before the unit. A bare integer is
/// milliseconds. Anything else, such as `1h 30m` or `2weeks`, goes through
/// [`humantime::parse_duration`] after lowercasing.
pub fn parse_duration(text: &str) -> Result<Duration, DurationError> {
    let text = text.trim().to_lowercase();
    let digits = text.bytes().take_while(u8::is_ascii_digit).count();
    let (number, label) = text.split_at(digits);
    if !number.is_empty() {
        if let Some((unit, factor)) = unit_of(label.trim_start()) {
            return number
                .parse::<u64>()
                .ok()
                .and_then(|n| n.checked_mul(factor))
                .map(unit)
                .ok_or(DurationError::NumberOverflow);
        }
    }
    humantime::parse_duration(&text)
}

/// Constructor and multiplier for a lowercased unit label.
fn unit_of(label: &str) -> Option<(fn(u64) -> Duration, u64)> {
    let unit: (fn(u64) -> Duration, u64) = match label {
        "ns" | "nano" | "nanos" | "nanosecond" | "nanoseconds" => (Duration::from_nanos, 1),
        "µs" | "us" | "micro" | "micros" | "microsecond" | "microseconds" => {
            (Duration::from_micros, 1)
        }
        "" | "ms" | "milli" | "millis" | "millisecond" | "milliseconds" => {
            (Duration::from_millis, 1)
        }
        "s" | "sec" | "secs" | "second" | "seconds" => (Duration::from_secs, 1),
        "m" | "min" | "mins" | "minute" | "minutes" => (Duration::from_secs, 60),
        "h" | "hour" | "hours" => (Duration::from_secs, 60 * 60),
        "d" | "day" | "days" => (Duration::from_secs, 24 * 60 * 60),
        _ => return None,
    };
    Some(unit)
}
