// File: crates/timeseries-core/src/path.rs
// Summary: SVG path data serialization ("M x,y L x,y ...") for polylines.

use std::fmt::Write as _;

use crate::types::Point;

/// Serialize points as `M{x0},{y0}L{x1},{y1}...`. Empty input yields an
/// empty string, which callers treat as "no visible path".
pub fn serialize(points: &[Point]) -> String {
    serialize_iter(points.iter().copied().map(Some))
}

/// Like [`serialize`] but skips holes; the first present point still
/// opens the path with `M`.
pub fn serialize_sparse(points: &[Option<Point>]) -> String {
    serialize_iter(points.iter().copied())
}

fn serialize_iter(points: impl Iterator<Item = Option<Point>>) -> String {
    let mut d = String::new();
    for p in points.flatten() {
        let cmd = if d.is_empty() { 'M' } else { 'L' };
        let _ = write!(d, "{cmd}{p}");
    }
    d
}
