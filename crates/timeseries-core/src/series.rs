// File: crates/timeseries-core/src/series.rs
// Summary: The chart widget: fixed pixel size, time scale, autoscale policy,
// drawing surface, and the lines plotted on it.

use tracing::warn;

use crate::config::SeriesConfig;
use crate::error::{Error, Result};
use crate::line::{Line, LineId, LineMut, LineOptions};
use crate::scale::{TimeScale, ValueScale};
use crate::surface::Surface;
use crate::types::Point;

pub struct Series {
    time: TimeScale,
    values: ValueScale,
    surface: Surface,
    lines: Vec<Line>,
}

impl Series {
    /// Attach to a host whose rendered size is `width_px` x `height_px`.
    /// The size is fixed for the life of the series. A zero-sized host is
    /// accepted so layout can happen later, but nothing will be visible.
    pub fn new(width_px: u32, height_px: u32) -> Self {
        if width_px == 0 || height_px == 0 {
            warn!(width_px, height_px, "series attached to a zero-sized host");
        }
        Self {
            time: TimeScale::new(width_px),
            values: ValueScale::new(height_px),
            surface: Surface::new(width_px, height_px),
            lines: Vec::new(),
        }
    }

    /// Build a series, its time window and its lines from config.
    pub fn from_config(cfg: &SeriesConfig) -> Result<Self> {
        cfg.validate()?;
        let mut series = Series::new(cfg.width, cfg.height);
        series.scale(&cfg.window)?.autoscale(cfg.autoscale);
        for line in &cfg.lines {
            series.line(line.to_options());
        }
        Ok(series)
    }

    pub fn width(&self) -> u32 {
        self.time.width_px
    }

    pub fn height(&self) -> u32 {
        self.values.height_px
    }

    /// Set the visible time window, e.g. `"10s"` or `"5m"`.
    pub fn scale(&mut self, window: &str) -> Result<&mut Self> {
        self.time.set_window(window)?;
        Ok(self)
    }

    /// Set the visible time window in milliseconds.
    pub fn scale_ms(&mut self, window_ms: f64) -> Result<&mut Self> {
        self.time.set_window_ms(window_ms)?;
        Ok(self)
    }

    pub fn px_per_ms(&self) -> Option<f64> {
        self.time.px_per_ms()
    }

    pub fn autoscale(&mut self, enabled: bool) -> &mut Self {
        self.values.autoscale = enabled;
        self
    }

    pub fn is_autoscale(&self) -> bool {
        self.values.autoscale
    }

    /// Observed value range `(min, max)`.
    pub fn range(&self) -> (f64, f64) {
        self.values.range()
    }

    /// See [`ValueScale::rescale`].
    pub fn rescale(&mut self, points: &[Point], latest_y: f64) -> Vec<Point> {
        self.values.rescale(points, latest_y)
    }

    /// Create a line and return a handle to it.
    pub fn line(&mut self, opts: LineOptions) -> LineMut<'_> {
        let id = LineId(self.lines.len());
        let line = Line::create(id, opts, &mut self.surface);
        self.lines.push(line);
        let Series { time, values, surface, lines } = self;
        LineMut { time, values, surface, line: &mut lines[id.0] }
    }

    pub fn line_mut(&mut self, id: LineId) -> Result<LineMut<'_>> {
        let Series { time, values, surface, lines } = self;
        let line = lines.get_mut(id.0).ok_or(Error::UnknownLine(id.0))?;
        Ok(LineMut { time, values, surface, line })
    }

    pub fn get_line(&self, id: LineId) -> Option<&Line> {
        self.lines.get(id.0)
    }

    pub fn find_line(&self, name: &str) -> Option<LineId> {
        self.lines.iter().find(|l| l.name() == Some(name)).map(Line::id)
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub fn line_ids(&self) -> impl Iterator<Item = LineId> + '_ {
        self.lines.iter().map(Line::id)
    }

    /// Current `d` attribute of a line's path.
    pub fn path_data(&self, id: LineId) -> Option<&str> {
        let line = self.lines.get(id.0)?;
        self.surface.element(line.path_id())?.attr("d")
    }

    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut Surface {
        &mut self.surface
    }

    pub fn to_svg_string(&self) -> String {
        self.surface.to_svg_string()
    }
}
