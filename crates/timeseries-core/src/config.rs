// File: crates/timeseries-core/src/config.rs
// Summary: Serde config for building a series and its lines from TOML (or any
// serde source such as the `config` crate).

use std::fmt;

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::line::{LineOptions, ZeroPolicy};
use crate::types::{HEIGHT, WIDTH};

#[derive(Debug, Deserialize, Clone)]
pub struct SeriesConfig {
    #[serde(default = "default_width")]
    pub width: u32,
    #[serde(default = "default_height")]
    pub height: u32,
    /// Visible time window, e.g. `"10s"`.
    #[serde(default = "default_window")]
    pub window: String,
    #[serde(default = "default_autoscale")]
    pub autoscale: bool,
    #[serde(default)]
    pub lines: Vec<LineConfig>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LineConfig {
    pub name: String,
    pub color: Option<String>,
    pub stroke_width: Option<StrokeWidth>,
    /// Plot zero samples instead of skipping them.
    #[serde(default)]
    pub keep_zero: bool,
}

/// Stroke width given either as a number (`2.5`) or as CSS text (`"2px"`).
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(untagged)]
pub enum StrokeWidth {
    Number(f64),
    Text(String),
}

impl fmt::Display for StrokeWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StrokeWidth::Number(n) => f.write_str(&crate::types::format_number(*n)),
            StrokeWidth::Text(s) => f.write_str(s),
        }
    }
}

impl SeriesConfig {
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let cfg: SeriesConfig = toml::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Reject configs that cannot produce a usable chart.
    pub fn validate(&self) -> Result<()> {
        let mut seen = std::collections::HashSet::new();
        for line in &self.lines {
            if line.name.is_empty() {
                return Err(Error::InvalidConfig("line name must not be empty".into()));
            }
            if !seen.insert(line.name.as_str()) {
                return Err(Error::InvalidConfig(format!("duplicate line name {:?}", line.name)));
            }
        }
        Ok(())
    }
}

impl Default for SeriesConfig {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            window: default_window(),
            autoscale: true,
            lines: Vec::new(),
        }
    }
}

impl LineConfig {
    pub fn to_options(&self) -> LineOptions {
        let mut opts = LineOptions::new().name(&self.name);
        if let Some(color) = &self.color {
            opts = opts.color(color);
        }
        if let Some(width) = &self.stroke_width {
            opts = opts.stroke_width(width);
        }
        if self.keep_zero {
            opts = opts.zero(ZeroPolicy::Keep);
        }
        opts
    }
}

fn default_width() -> u32 {
    WIDTH
}

fn default_height() -> u32 {
    HEIGHT
}

fn default_window() -> String {
    "10s".to_string()
}

fn default_autoscale() -> bool {
    true
}
