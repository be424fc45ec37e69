// File: crates/timeseries-core/src/scale.rs
// Summary: Time (X) and value (Y) scales: elapsed milliseconds to pixel columns,
// and an autoscaling value range mapped onto the fixed pixel height.

use tracing::debug;

use crate::duration;
use crate::error::{Error, Result};
use crate::types::Point;

/// Horizontal scale: a visible window of `width_px` pixels covering a fixed
/// duration, expressed as pixels per millisecond.
#[derive(Clone, Copy, Debug)]
pub struct TimeScale {
    pub width_px: u32,
    px_per_ms: Option<f64>,
}

impl TimeScale {
    pub fn new(width_px: u32) -> Self {
        Self { width_px, px_per_ms: None }
    }

    /// Fit `window` (e.g. `"10s"`) into the pixel width.
    pub fn set_window(&mut self, window: &str) -> Result<()> {
        let ms = duration::parse(window).ok_or_else(|| Error::InvalidDuration(window.to_string()))?;
        self.set_window_ms(ms).map_err(|_| Error::InvalidDuration(window.to_string()))
    }

    pub fn set_window_ms(&mut self, ms: f64) -> Result<()> {
        if !ms.is_finite() || ms <= 0.0 {
            return Err(Error::InvalidDuration(duration::format_short(ms)));
        }
        let px_per_ms = self.width_px as f64 / ms;
        debug!(width = self.width_px, window_ms = ms, px_per_ms, "time scale set");
        self.px_per_ms = Some(px_per_ms);
        Ok(())
    }

    /// `None` until a window has been set.
    pub fn px_per_ms(&self) -> Option<f64> {
        self.px_per_ms
    }

    /// Pixel column for `elapsed_ms` after the line's anchor.
    pub fn to_px(&self, elapsed_ms: f64) -> Result<i64> {
        let px_per_ms = self.px_per_ms.ok_or(Error::ScaleUnset)?;
        Ok((elapsed_ms * px_per_ms).floor() as i64)
    }
}

/// Vertical scale: an observed `[vmin, vmax]` range stretched over
/// `height_px`. With autoscale on the range only ever widens.
#[derive(Clone, Copy, Debug)]
pub struct ValueScale {
    pub height_px: u32,
    pub autoscale: bool,
    vmin: f64,
    vmax: f64,
}

impl ValueScale {
    pub fn new(height_px: u32) -> Self {
        Self { height_px, autoscale: true, vmin: 0.0, vmax: height_px as f64 }
    }

    pub fn range(&self) -> (f64, f64) {
        (self.vmin, self.vmax)
    }

    /// Widen the range to include `y`.
    pub fn observe(&mut self, y: f64) {
        self.vmax = self.vmax.max(y);
        self.vmin = self.vmin.min(y);
    }

    /// Pixel row for `y` under the current range, truncated toward zero.
    #[inline]
    pub fn to_px(&self, y: f64) -> f64 {
        let span = self.vmax - self.vmin;
        if span <= 0.0 {
            return 0.0;
        }
        ((y - self.vmin) * (self.height_px as f64 / span)).trunc()
    }

    /// Widen with `latest_y`, then remap every y in `points` to a pixel row.
    /// With autoscale off the points are returned as given: their y is
    /// already in pixel space.
    pub fn rescale(&mut self, points: &[Point], latest_y: f64) -> Vec<Point> {
        if !self.autoscale {
            return points.to_vec();
        }
        self.observe(latest_y);
        points.iter().map(|p| Point::new(p.x, self.to_px(p.y))).collect()
    }
}
