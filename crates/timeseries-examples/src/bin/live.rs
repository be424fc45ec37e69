// File: crates/timeseries-examples/src/bin/live.rs
// Summary: Minimal example that streams two synthetic signals into a 10s window
// and writes the scrolled chart to SVG.

use anyhow::Result;
use chrono::{Duration, Utc};
use timeseries_core::{LineOptions, Series, ZeroPolicy};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut series = Series::new(600, 150);
    series.scale("10s")?;
    let sine = series.line(LineOptions::new().name("sine").color("#4080ff")).id();
    let square = series
        .line(LineOptions::new().name("square").color("#e05050").stroke_width(1).zero(ZeroPolicy::Keep))
        .id();

    // 30s of samples at 10Hz, so the window has scrolled twice over.
    let start = Utc::now();
    for i in 0..300i64 {
        let at = start + Duration::milliseconds(i * 100);
        let phase = i as f64 * 0.1;
        series.line_mut(sine)?.add_at(phase.sin() * 40.0 + 50.0, at)?;
        let level = if (i / 25) % 2 == 0 { 0.0 } else { 80.0 };
        series.line_mut(square)?.add_at(level, at)?;
    }

    let out = std::path::PathBuf::from("target/out/example_live.svg");
    if let Some(parent) = out.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(&out, series.to_svg_string())?;
    tracing::info!(path = %out.display(), "wrote chart");
    Ok(())
}
