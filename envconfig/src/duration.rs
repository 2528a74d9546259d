//! Duration text parsing (`300ms`, `1.5h`, `2h45m`)

use std::time::Duration;

/// Errors from [`parse_duration`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DurationError {
    #[error("invalid duration \"{0}\"")]
    Invalid(String),

    #[error("missing unit in duration \"{0}\"")]
    MissingUnit(String),

    #[error("unknown unit \"{unit}\" in duration \"{input}\"")]
    UnknownUnit { unit: String, input: String },

    #[error("negative duration \"{0}\"")]
    Negative(String),

    #[error("duration \"{0}\" overflows")]
    Overflow(String),
}

const NANOS_PER_MICRO: u128 = 1_000;
const NANOS_PER_MILLI: u128 = 1_000_000;
const NANOS_PER_SECOND: u128 = 1_000_000_000;

/// Fraction digits beyond this are validated but ignored.
const MAX_FRACTION_DIGITS: u32 = 18;

/// Parse a sequence of decimal numbers, each with an optional fraction and a
/// unit suffix. Valid units are `ns`, `us` (or `µs`), `ms`, `s`, `m`, `h`.
/// A bare `0` is accepted without a unit.
pub fn parse_duration(input: &str) -> Result<Duration, DurationError> {
    let invalid = || DurationError::Invalid(input.to_string());

    let (negative, mut rest) = match input.as_bytes().first() {
        Some(b'-') => (true, &input[1..]),
        Some(b'+') => (false, &input[1..]),
        _ => (false, input),
    };

    if rest == "0" {
        return Ok(Duration::ZERO);
    }
    if rest.is_empty() {
        return Err(invalid());
    }

    let mut total: u128 = 0;
    while !rest.is_empty() {
        let (whole, after) = take_digits(rest);
        let (fraction, after) = match after.strip_prefix('.') {
            Some(after) => take_digits(after),
            None => ("", after),
        };
        if whole.is_empty() && fraction.is_empty() {
            return Err(invalid());
        }

        let unit_len = after
            .find(|c: char| c == '.' || c.is_ascii_digit())
            .unwrap_or(after.len());
        let (unit, after) = after.split_at(unit_len);
        if unit.is_empty() {
            return Err(DurationError::MissingUnit(input.to_string()));
        }
        let scale = unit_nanos(unit).ok_or_else(|| DurationError::UnknownUnit {
            unit: unit.to_string(),
            input: input.to_string(),
        })?;

        let overflow = || DurationError::Overflow(input.to_string());
        let whole: u128 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| overflow())?
        };
        let mut nanos = whole.checked_mul(scale).ok_or_else(overflow)?;
        nanos = nanos
            .checked_add(fraction_nanos(fraction, scale))
            .ok_or_else(overflow)?;
        total = total.checked_add(nanos).ok_or_else(overflow)?;

        rest = after;
    }

    if negative && total != 0 {
        return Err(DurationError::Negative(input.to_string()));
    }

    let secs = u64::try_from(total / NANOS_PER_SECOND)
        .map_err(|_| DurationError::Overflow(input.to_string()))?;
    // remainder is below one second, always fits
    let subsec = (total % NANOS_PER_SECOND) as u32;
    Ok(Duration::new(secs, subsec))
}

fn take_digits(s: &str) -> (&str, &str) {
    let end = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
    s.split_at(end)
}

fn unit_nanos(unit: &str) -> Option<u128> {
    let nanos = match unit {
        "ns" => 1,
        "us" | "µs" | "μs" => NANOS_PER_MICRO,
        "ms" => NANOS_PER_MILLI,
        "s" => NANOS_PER_SECOND,
        "m" => 60 * NANOS_PER_SECOND,
        "h" => 3600 * NANOS_PER_SECOND,
        _ => return None,
    };
    Some(nanos)
}

fn fraction_nanos(fraction: &str, scale: u128) -> u128 {
    let digits = &fraction[..fraction.len().min(MAX_FRACTION_DIGITS as usize)];
    if digits.is_empty() {
        return 0;
    }
    // at most 18 ascii digits, always fits
    let value: u128 = digits.parse().unwrap_or(0);
    value * scale / 10u128.pow(digits.len() as u32)
}
