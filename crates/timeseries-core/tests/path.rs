// File: crates/timeseries-core/tests/path.rs
// Purpose: Path data serialization (moveto/lineto sequencing, holes, empty input).

use timeseries_core::{serialize, serialize_sparse, Point};

fn pts(raw: &[(i64, f64)]) -> Vec<Point> {
    raw.iter().copied().map(Point::from).collect()
}

#[test]
fn moveto_then_linetos() {
    assert_eq!(serialize(&pts(&[(0, 0.0), (5, 10.0), (12, 3.0)])), "M0,0L5,10L12,3");
}

#[test]
fn empty_is_empty_string() {
    assert_eq!(serialize(&[]), "");
    assert_eq!(serialize_sparse(&[None, None]), "");
}

#[test]
fn holes_do_not_break_sequencing() {
    let sparse = [None, Some(Point::new(-10, 3.0)), None, Some(Point::new(100, 4.0))];
    assert_eq!(serialize_sparse(&sparse), "M-10,3L100,4");
}

#[test]
fn fractional_values_keep_their_digits() {
    assert_eq!(serialize(&pts(&[(0, 12.5), (20, -0.25)])), "M0,12.5L20,-0.25");
}
