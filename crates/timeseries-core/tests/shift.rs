// File: crates/timeseries-core/tests/shift.rs
// Purpose: Horizontal scrolling of the visible window and the retained leading point.

use timeseries_core::{shift, Point};

fn pts(raw: &[(i64, f64)]) -> Vec<Point> {
    raw.iter().copied().map(Point::from).collect()
}

#[test]
fn inside_window_is_unchanged() {
    let input = pts(&[(10, 5.0), (50, 7.0)]);
    assert_eq!(shift(input.clone(), 50, 100), input);
    // Exactly at the right edge still counts as inside.
    let edge = pts(&[(0, 1.0), (100, 2.0)]);
    assert_eq!(shift(edge.clone(), 100, 100), edge);
}

#[test]
fn keeps_one_predecessor_past_the_left_edge() {
    let input = pts(&[(-20, 1.0), (-5, 2.0), (30, 3.0), (140, 4.0)]);
    assert_eq!(shift(input, 140, 100), pts(&[(-10, 3.0), (100, 4.0)]));
}

#[test]
fn no_predecessor_when_nothing_scrolled_out() {
    let input = pts(&[(40, 1.0), (60, 2.0), (110, 3.0)]);
    assert_eq!(shift(input, 110, 100), pts(&[(30, 1.0), (50, 2.0), (100, 3.0)]));
}

#[test]
fn point_landing_on_left_edge_is_kept_with_its_predecessor() {
    let input = pts(&[(0, 1.0), (50, 2.0), (150, 3.0)]);
    assert_eq!(shift(input, 150, 100), pts(&[(-50, 1.0), (0, 2.0), (100, 3.0)]));
}
