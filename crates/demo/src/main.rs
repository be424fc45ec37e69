// File: crates/demo/src/main.rs
// Summary: Demo replays a CSV of timestamped samples into a live series (one line per
// value column) and writes the scrolled chart, plus optional intermediate frames, to SVG.

use anyhow::{Context, Result};
use chrono::{DateTime, TimeZone, Utc};
use std::path::{Path, PathBuf};
use timeseries_core::{Error, LineConfig, LineId, Series, SeriesConfig};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

const PALETTE: [&str; 6] = ["#4080ff", "#e08030", "#40b060", "#d04060", "#9060c0", "#808080"];

struct Args {
    csv: String,
    config: String,
    every: Option<usize>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = parse_args()?;
    let path = input_path(&args.csv)?;
    info!(path = %path.display(), "using input file");

    let mut cfg = load_config(&args.config)?;
    let samples = load_samples_csv(&path)
        .with_context(|| format!("failed to load CSV '{}'", path.display()))?;
    info!(rows = samples.rows.len(), columns = samples.columns.len(), "loaded samples");
    if samples.rows.is_empty() {
        anyhow::bail!("no samples loaded; check the timestamp column and delimiter");
    }

    // Columns without a configured line get one with a palette color.
    for (i, name) in samples.columns.iter().enumerate() {
        if !cfg.lines.iter().any(|l| &l.name == name) {
            cfg.lines.push(LineConfig {
                name: name.clone(),
                color: Some(PALETTE[i % PALETTE.len()].to_string()),
                stroke_width: None,
                keep_zero: false,
            });
        }
    }

    let mut series = Series::from_config(&cfg).context("building series from config")?;
    let ids = samples
        .columns
        .iter()
        .map(|name| series.find_line(name).context("line missing after config"))
        .collect::<Result<Vec<LineId>>>()?;

    let frames_dir = out_name_with(&path, "frames").with_extension("");
    for (row_no, row) in samples.rows.iter().enumerate() {
        feed_row(&mut series, &ids, row, row_no + 2)?;
        if let Some(every) = args.every {
            if (row_no + 1) % every == 0 {
                std::fs::create_dir_all(&frames_dir)?;
                let frame = frames_dir.join(format!("frame_{:05}.svg", row_no + 1));
                std::fs::write(&frame, series.to_svg_string())?;
            }
        }
    }

    let (vmin, vmax) = series.range();
    info!(vmin, vmax, "observed value range");

    let out = out_name_with(&path, "chart");
    std::fs::write(&out, series.to_svg_string()).with_context(|| format!("writing {}", out.display()))?;
    info!(path = %out.display(), "wrote chart");
    Ok(())
}

/// Add one CSV row to its lines. Cells whose timestamp runs backwards are
/// skipped with a warning, like rows with unparseable timestamps.
fn feed_row(series: &mut Series, ids: &[LineId], row: &Row, csv_row: usize) -> Result<()> {
    for (id, value) in ids.iter().zip(&row.values) {
        match series.line_mut(*id)?.add_at(*value, row.at) {
            Ok(_) => {}
            Err(Error::OutOfOrder { last, got }) => {
                warn!(row = csv_row, %last, %got, "timestamp earlier than previous sample; cell skipped");
            }
            Err(e) => return Err(e.into()),
        }
    }
    Ok(())
}

/// The CSV path exactly as given; a missing file is an error.
fn input_path(arg: &str) -> Result<PathBuf> {
    let path = PathBuf::from(arg);
    if !path.exists() {
        anyhow::bail!("file not found: {}", path.display());
    }
    Ok(path)
}

/// `timeseries-demo [samples.csv] [config] [--every N]`
fn parse_args() -> Result<Args> {
    let mut positional = Vec::new();
    let mut every = None;
    let mut it = std::env::args().skip(1);
    while let Some(arg) = it.next() {
        if arg == "--every" {
            let n = it.next().context("--every needs a row count")?;
            let n: usize = n.parse().with_context(|| format!("bad --every value {n:?}"))?;
            every = Some(n.max(1));
        } else {
            positional.push(arg);
        }
    }
    let mut positional = positional.into_iter();
    Ok(Args {
        csv: positional.next().unwrap_or_else(|| "crates/demo/data/sample.csv".to_string()),
        config: positional.next().unwrap_or_else(|| "crates/demo/config/series".to_string()),
        every,
    })
}

/// Config file (optional) overlaid with `TIMESERIES_*` environment variables.
fn load_config(name: &str) -> Result<SeriesConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name(name).required(false))
        .add_source(config::Environment::with_prefix("TIMESERIES").try_parsing(true))
        .build()?;
    let cfg: SeriesConfig = settings.try_deserialize()?;
    cfg.validate()?;
    Ok(cfg)
}

/// Produce output file name like target/out/<stem>_<suffix>.svg
fn out_name_with(input: &Path, suffix: &str) -> PathBuf {
    let stem = input.file_stem().and_then(|s| s.to_str()).unwrap_or("series");
    let mut out = PathBuf::from("target/out");
    std::fs::create_dir_all(&out).ok();
    out.push(format!("{stem}_{suffix}.svg"));
    out
}

struct Samples {
    columns: Vec<String>,
    rows: Vec<Row>,
}

struct Row {
    at: DateTime<Utc>,
    values: Vec<Option<f64>>,
}

/// Load `timestamp,<name>,<name>...` rows. Empty cells become missing samples.
fn load_samples_csv(path: &Path) -> Result<Samples> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr.headers()?.iter().map(|h| h.to_string()).collect::<Vec<_>>();
    let i_time = headers
        .iter()
        .position(|h| matches!(h.to_lowercase().as_str(), "time" | "timestamp" | "date" | "datetime"))
        .context("no time/timestamp column")?;
    let value_cols: Vec<usize> = (0..headers.len()).filter(|&i| i != i_time).collect();
    let columns = value_cols.iter().map(|&i| headers[i].clone()).collect();

    let mut rows = Vec::new();
    for (line_no, rec) in rdr.records().enumerate() {
        let rec = rec?;
        let Some(at) = rec.get(i_time).and_then(parse_time) else {
            warn!(row = line_no + 2, "unparseable timestamp; row skipped");
            continue;
        };
        let values = value_cols
            .iter()
            .map(|&i| match rec.get(i).unwrap_or("") {
                "" => None,
                s => s.parse::<f64>().map_err(|_| warn!(row = line_no + 2, cell = s, "not a number")).ok(),
            })
            .collect();
        rows.push(Row { at, values });
    }
    Ok(Samples { columns, rows })
}

/// RFC 3339, or integer epoch seconds / milliseconds.
fn parse_time(s: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    let n = s.parse::<i64>().ok()?;
    if n > 10_i64.pow(12) {
        Utc.timestamp_millis_opt(n).single()
    } else {
        Utc.timestamp_opt(n, 0).single()
    }
}
