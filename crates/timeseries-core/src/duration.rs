// File: crates/timeseries-core/src/duration.rs
// Summary: Human duration strings ("10s", "5m", "1.5h") to milliseconds and back.

use crate::types::format_number;

pub const SECOND: f64 = 1000.0;
pub const MINUTE: f64 = SECOND * 60.0;
pub const HOUR: f64 = MINUTE * 60.0;
pub const DAY: f64 = HOUR * 24.0;
pub const YEAR: f64 = DAY * 365.25;

/// Parse a duration such as `"100"`, `".5s"`, `"2 minutes"` or `"1Y"` into
/// milliseconds. A bare number is milliseconds. Returns `None` when the
/// input does not match `<number> *<unit>?`.
pub fn parse(input: &str) -> Option<f64> {
    let (number, rest) = split_number(input)?;
    let unit = rest.trim_start_matches(' ');
    Some(number * unit_factor(unit)?)
}

/// Short form: `"3d"`, `"2h"`, `"10m"`, `"5s"`, `"250ms"`.
pub fn format_short(ms: f64) -> String {
    for (span, suffix) in [(DAY, "d"), (HOUR, "h"), (MINUTE, "m"), (SECOND, "s")] {
        if ms >= span {
            return format!("{}{}", format_number(round_half_up(ms / span)), suffix);
        }
    }
    format!("{}ms", format_number(ms))
}

/// Long form: `"1 day"`, `"3 days"`, `"1 second"`, `"250 ms"`.
pub fn format_long(ms: f64) -> String {
    for (span, unit) in [(DAY, "day"), (HOUR, "hour"), (MINUTE, "minute"), (SECOND, "second")] {
        if ms == span {
            return format!("1 {unit}");
        }
        if ms > span {
            return format!("{} {}s", format_number(round_half_up(ms / span)), unit);
        }
    }
    format!("{} ms", format_number(ms))
}

// `\d*\.?\d+` with no sign and no exponent.
fn split_number(input: &str) -> Option<(f64, &str)> {
    let bytes = input.as_bytes();
    let int_end = bytes.iter().take_while(|b| b.is_ascii_digit()).count();
    let mut end = int_end;
    if bytes.get(end) == Some(&b'.') {
        let frac = bytes[end + 1..].iter().take_while(|b| b.is_ascii_digit()).count();
        if frac == 0 {
            return None;
        }
        end += 1 + frac;
    } else if int_end == 0 {
        return None;
    }
    let number = input[..end].parse::<f64>().ok()?;
    Some((number, &input[end..]))
}

fn unit_factor(unit: &str) -> Option<f64> {
    let factor = match unit.to_ascii_lowercase().as_str() {
        "" | "ms" => 1.0,
        "s" | "second" | "seconds" => SECOND,
        "m" | "minute" | "minutes" => MINUTE,
        "h" | "hour" | "hours" => HOUR,
        "d" | "day" | "days" => DAY,
        "y" | "year" | "years" => YEAR,
        _ => return None,
    };
    Some(factor)
}

#[inline]
fn round_half_up(v: f64) -> f64 {
    (v + 0.5).floor()
}
