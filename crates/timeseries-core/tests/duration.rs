// File: crates/timeseries-core/tests/duration.rs
// Purpose: Human duration parsing and short/long formatting.

use timeseries_core::duration::{format_long, format_short, parse, DAY, HOUR, MINUTE, SECOND, YEAR};

#[test]
fn parses_units_and_aliases() {
    assert_eq!(parse("100"), Some(100.0));
    assert_eq!(parse("250ms"), Some(250.0));
    assert_eq!(parse("10s"), Some(10_000.0));
    assert_eq!(parse("2 seconds"), Some(2.0 * SECOND));
    assert_eq!(parse("1 minute"), Some(MINUTE));
    assert_eq!(parse("5m"), Some(5.0 * MINUTE));
    assert_eq!(parse("1.5h"), Some(1.5 * HOUR));
    assert_eq!(parse("2 DAYS"), Some(2.0 * DAY));
    assert_eq!(parse(".5d"), Some(0.5 * DAY));
    assert_eq!(parse("1y"), Some(YEAR));
    assert_eq!(parse("1y"), Some(31_557_600_000.0));
}

#[test]
fn rejects_malformed_input() {
    for bad in ["", "s", "-1s", "1.s", "10 parsecs", " 10s", "10s ", "1e3", "1,000"] {
        assert_eq!(parse(bad), None, "{bad:?} should not parse");
    }
}

#[test]
fn short_format_picks_largest_unit() {
    assert_eq!(format_short(500.0), "500ms");
    assert_eq!(format_short(SECOND), "1s");
    assert_eq!(format_short(10_000.0), "10s");
    assert_eq!(format_short(90_000.0), "2m");
    assert_eq!(format_short(5.0 * HOUR), "5h");
    assert_eq!(format_short(36.0 * HOUR), "2d");
}

#[test]
fn long_format_pluralizes() {
    assert_eq!(format_long(500.0), "500 ms");
    assert_eq!(format_long(SECOND), "1 second");
    assert_eq!(format_long(10_000.0), "10 seconds");
    assert_eq!(format_long(MINUTE), "1 minute");
    assert_eq!(format_long(3.0 * HOUR), "3 hours");
    assert_eq!(format_long(DAY), "1 day");
    assert_eq!(format_long(4.0 * DAY), "4 days");
}

#[test]
fn short_format_round_trips_through_parse() {
    for ms in [250.0, SECOND, 45.0 * SECOND, 3.0 * MINUTE, 7.0 * HOUR, 2.0 * DAY] {
        assert_eq!(parse(&format_short(ms)), Some(ms));
    }
}
