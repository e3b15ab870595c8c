//! Parsing of `<value> <unit>` duration arguments

use crate::error::DurationError;

/// Seconds per unit, or `None` for an unrecognized unit name
fn unit_seconds(unit: &str) -> Option<u64> {
    match unit.to_ascii_lowercase().as_str() {
        "h" | "hr" | "hrs" | "hour" | "hours" => Some(3600),
        "m" | "min" | "mins" | "minute" | "minutes" => Some(60),
        "s" | "sec" | "secs" | "second" | "seconds" => Some(1),
        _ => None,
    }
}

fn parse_number(text: &str) -> Result<u64, DurationError> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(DurationError::InvalidNumber(text.to_string()));
    }
    text.parse().map_err(|_| DurationError::Overflow)
}

fn add_component(total: u64, value: u64, unit: &str) -> Result<u64, DurationError> {
    let multiplier = unit_seconds(unit).ok_or_else(|| DurationError::UnknownUnit(unit.to_string()))?;
    value
        .checked_mul(multiplier)
        .and_then(|seconds| total.checked_add(seconds))
        .ok_or(DurationError::Overflow)
}

/// Sum duration arguments into whole seconds.
///
/// Accepts `5 min 2 sec` style pairs as well as compact tokens like `5min`
/// or `90s`. A number without a unit is rejected. The total may be zero.
pub fn parse_duration<S: AsRef<str>>(args: &[S]) -> Result<u64, DurationError> {
    if args.is_empty() {
        return Err(DurationError::Empty);
    }

    let mut total = 0u64;
    let mut tokens = args.iter().map(AsRef::as_ref);

    while let Some(token) = tokens.next() {
        let split = token
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(token.len());
        let (digits, suffix) = token.split_at(split);

        if digits.is_empty() {
            return Err(DurationError::InvalidNumber(token.to_string()));
        }
        let value = parse_number(digits)?;

        if suffix.is_empty() {
            let unit = tokens
                .next()
                .ok_or_else(|| DurationError::MissingUnit(token.to_string()))?;
            total = add_component(total, value, unit)?;
        } else {
            total = add_component(total, value, suffix)?;
        }
    }

    Ok(total)
}
