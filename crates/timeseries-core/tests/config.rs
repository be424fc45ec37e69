// File: crates/timeseries-core/tests/config.rs
// Purpose: Building a series from TOML config.

use timeseries_core::{Error, Series, SeriesConfig, StrokeWidth};

const CFG: &str = r#"
width = 400
height = 120
window = "30s"

[[lines]]
name = "cpu"
color = "steelblue"
stroke_width = 1.5

[[lines]]
name = "load"
stroke_width = "3px"
keep_zero = true
"#;

#[test]
fn parses_lines_and_defaults() {
    let cfg = SeriesConfig::from_toml_str(CFG).expect("valid config");
    assert_eq!((cfg.width, cfg.height), (400, 120));
    assert!(cfg.autoscale);
    assert_eq!(cfg.lines.len(), 2);
    assert_eq!(cfg.lines[0].stroke_width, Some(StrokeWidth::Number(1.5)));
    assert_eq!(cfg.lines[1].stroke_width, Some(StrokeWidth::Text("3px".into())));
    assert!(cfg.lines[1].keep_zero);

    let empty = SeriesConfig::from_toml_str("").expect("all defaults");
    assert_eq!(empty.window, "10s");
    assert!(empty.lines.is_empty());
}

#[test]
fn builds_series_from_config() {
    let cfg = SeriesConfig::from_toml_str(CFG).unwrap();
    let series = Series::from_config(&cfg).expect("build series");
    assert_eq!(series.width(), 400);
    assert_eq!(series.px_per_ms(), Some(400.0 / 30_000.0));

    let cpu = series.find_line("cpu").expect("cpu line");
    let load = series.find_line("load").expect("load line");
    let cpu_path = series.surface().element(series.get_line(cpu).unwrap().path_id()).unwrap();
    assert_eq!(cpu_path.attr("stroke"), Some("steelblue"));
    assert_eq!(cpu_path.attr("stroke-width"), Some("1.5"));
    let load_path = series.surface().element(series.get_line(load).unwrap().path_id()).unwrap();
    assert_eq!(load_path.attr("stroke"), Some("black"));
    assert_eq!(load_path.attr("stroke-width"), Some("3px"));
    assert_eq!(series.line_ids().count(), 2);
}

#[test]
fn rejects_bad_configs() {
    assert!(matches!(SeriesConfig::from_toml_str("width = \"wide\""), Err(Error::Toml(_))));

    let dup = "[[lines]]\nname = \"a\"\n[[lines]]\nname = \"a\"\n";
    assert!(matches!(SeriesConfig::from_toml_str(dup), Err(Error::InvalidConfig(_))));

    let cfg = SeriesConfig { window: "soon".into(), ..SeriesConfig::default() };
    assert!(matches!(Series::from_config(&cfg), Err(Error::InvalidDuration(_))));
}
