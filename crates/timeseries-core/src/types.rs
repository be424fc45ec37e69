// File: crates/timeseries-core/src/types.rs
// Summary: Shared types and constants (default sizes, buffer points, number formatting).

use std::fmt;

/// Default surface width in pixels.
pub const WIDTH: u32 = 600;
/// Default surface height in pixels.
pub const HEIGHT: u32 = 150;

/// One buffered sample: pixel x and a y that is either a raw value or,
/// after `ValueScale::rescale`, a pixel row.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: i64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: i64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(i64, f64)> for Point {
    fn from((x, y): (i64, f64)) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, format_number(self.y))
    }
}

/// Format a number the way SVG attribute values are usually written:
/// integral values carry no fractional part (`5`, not `5.0`).
pub fn format_number(v: f64) -> String {
    if v.is_nan() {
        return "NaN".to_string();
    }
    if v.is_infinite() {
        return if v > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if v.fract() == 0.0 && v.abs() < 1e15 {
        return format!("{}", v as i64);
    }
    format!("{v}")
}
