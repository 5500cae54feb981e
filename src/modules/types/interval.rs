//! Grafana interval strings (`"500ms"`, `"30s"`, `"1m"`, ...)

use once_cell::sync::Lazy;
use regex::Regex;
use std::time::Duration;

/// Pattern for a single interval literal: amount followed by unit
static INTERVAL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*(\d+)\s*(ms|s|m|h|d|w|y)\s*$").unwrap());

/// Parse an interval string into a duration
pub fn parse_interval(input: &str) -> Result<Duration, String> {
    let captures = INTERVAL_PATTERN
        .captures(input)
        .ok_or_else(|| format!("Invalid interval: '{}'", input))?;

    let amount: u64 = captures[1]
        .parse()
        .map_err(|_| format!("Invalid interval amount: '{}'", input))?;

    let unit_ms: u64 = match &captures[2] {
        "ms" => 1,
        "s" => 1_000,
        "m" => 60_000,
        "h" => 3_600_000,
        "d" => 86_400_000,
        "w" => 604_800_000,
        "y" => 31_536_000_000,
        unit => return Err(format!("Unknown interval unit: '{}'", unit)),
    };

    amount
        .checked_mul(unit_ms)
        .map(Duration::from_millis)
        .ok_or_else(|| format!("Interval out of range: '{}'", input))
}
