// src/cli/parsers.rs
use std::{fmt::Display, str::FromStr, time::Duration};

/// Wrapper type to parse durations with an optional unit suffix (e.g. 250ms, 5s, 2m).
///
/// A bare number is taken as seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DurationArg(pub Duration);

impl FromStr for DurationArg {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().replace('_', "");
        let lower = s.to_ascii_lowercase();
        let (num_str, unit) = split_unit(&lower);
        let num: u64 = num_str
            .parse()
            .map_err(|_| format!("Invalid duration number: {num_str}"))?;
        let nanos = num
            .checked_mul(unit)
            .ok_or_else(|| format!("Duration too large: {s}"))?;
        Ok(Self(Duration::from_nanos(nanos)))
    }
}

fn split_unit(s: &str) -> (&str, u64) {
    const US: u64 = 1_000;
    const MS: u64 = US * 1_000;
    const SEC: u64 = MS * 1_000;
    const MIN: u64 = SEC * 60;
    const HOUR: u64 = MIN * 60;
    // Longer suffixes first so "ms" is not read as "s".
    const SUFFIXES: &[(&str, u64)] = &[
        ("ns", 1),
        ("us", US),
        ("ms", MS),
        ("h", HOUR),
        ("m", MIN),
        ("s", SEC),
    ];
    for (suffix, multiplier) in SUFFIXES {
        if let Some(stripped) = s.strip_suffix(suffix) {
            return (stripped.trim(), *multiplier);
        }
    }
    (s, SEC)
}

fn parse_bounded_number<T>(s: &str, min: T, max: Option<T>) -> Result<T, String>
where
    T: Copy + PartialOrd + Display + FromStr,
    <T as FromStr>::Err: Display,
{
    let value = s
        .parse::<T>()
        .map_err(|err| format!("invalid number '{s}': {err}"))?;
    if value < min {
        return Err(format!("value must be at least {min}"));
    }
    if let Some(max_bound) = max
        && value > max_bound
    {
        return Err(format!("value must be at most {max_bound}"));
    }
    Ok(value)
}

/// Parse a positive `usize` (>= 1) from CLI input.
///
/// # Errors
/// Returns an error if the input string is not a valid number or is less than 1.
pub fn parse_positive_usize(s: &str) -> Result<usize, String> {
    parse_bounded_number(s, 1, None)
}
