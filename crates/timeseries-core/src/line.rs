// File: crates/timeseries-core/src/line.rs
// Summary: One plotted trace: sample buffer, anchor time, and the per-sample
// append → rescale → shift → serialize pipeline that rewrites its <path>.

use std::fmt;

use chrono::{DateTime, Utc};
use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::path;
use crate::scale::{TimeScale, ValueScale};
use crate::style::PathStyle;
use crate::surface::{Element, ElementId, Surface};
use crate::types::Point;

/// Index of a line within its series.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct LineId(pub(crate) usize);

impl LineId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// What `add` does with a sample whose value is exactly zero.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ZeroPolicy {
    /// Treat zero like a missing value.
    #[default]
    Skip,
    /// Plot zero like any other value.
    Keep,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineState {
    /// No sample accepted yet.
    Uninitialized,
    /// Anchor time fixed by the first accepted sample.
    Anchored,
}

#[derive(Clone, Debug, Default)]
pub struct LineOptions {
    pub name: Option<String>,
    pub color: Option<String>,
    pub stroke_width: Option<String>,
    pub zero: ZeroPolicy,
    pub style: PathStyle,
}

impl LineOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn stroke_width(mut self, width: impl fmt::Display) -> Self {
        self.stroke_width = Some(width.to_string());
        self
    }

    pub fn zero(mut self, zero: ZeroPolicy) -> Self {
        self.zero = zero;
        self
    }

    pub fn style(mut self, style: PathStyle) -> Self {
        self.style = style;
        self
    }
}

#[derive(Clone, Debug)]
pub struct Line {
    id: LineId,
    name: Option<String>,
    path: ElementId,
    zero: ZeroPolicy,
    points: Vec<Point>,
    anchor: Option<DateTime<Utc>>,
    last: Option<DateTime<Utc>>,
}

impl Line {
    pub(crate) fn create(id: LineId, opts: LineOptions, surface: &mut Surface) -> Self {
        let path = surface.create("path");
        if let Some(el) = surface.element_mut(path) {
            el.set_attrs(opts.style.attributes());
            if let Some(color) = &opts.color {
                el.set_attr("stroke", color);
            }
            if let Some(width) = &opts.stroke_width {
                el.set_attr("stroke-width", width);
            }
        }
        Self {
            id,
            name: opts.name,
            path,
            zero: opts.zero,
            points: Vec::new(),
            anchor: None,
            last: None,
        }
    }

    pub fn id(&self) -> LineId {
        self.id
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn path_id(&self) -> ElementId {
        self.path
    }

    /// Raw buffer: pixel x and unscaled value, oldest first.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn anchor(&self) -> Option<DateTime<Utc>> {
        self.anchor
    }

    pub fn state(&self) -> LineState {
        if self.anchor.is_some() { LineState::Anchored } else { LineState::Uninitialized }
    }
}

/// Mutable view of one line together with the series state it draws against.
pub struct LineMut<'a> {
    pub(crate) time: &'a TimeScale,
    pub(crate) values: &'a mut ValueScale,
    pub(crate) surface: &'a mut Surface,
    pub(crate) line: &'a mut Line,
}

impl<'a> LineMut<'a> {
    pub fn id(&self) -> LineId {
        self.line.id
    }

    pub fn line(&self) -> &Line {
        self.line
    }

    /// Current `d` attribute of the line's path.
    pub fn path_data(&self) -> &str {
        self.path().and_then(|el| el.attr("d")).unwrap_or("")
    }

    pub fn path(&self) -> Option<&Element> {
        self.surface.element(self.line.path)
    }

    pub fn color(&mut self, color: &str) -> &mut Self {
        self.set_path_attr("stroke", color);
        self
    }

    pub fn stroke_width(&mut self, width: impl fmt::Display) -> &mut Self {
        self.set_path_attr("stroke-width", width);
        self
    }

    /// Add a sample stamped with the current time.
    pub fn add(&mut self, value: impl Into<Option<f64>>) -> Result<&mut Self> {
        self.add_at(value, Utc::now())
    }

    /// Add a sample taken at `at`. Missing values (and zero under
    /// `ZeroPolicy::Skip`) leave the line untouched.
    pub fn add_at(&mut self, value: impl Into<Option<f64>>, at: DateTime<Utc>) -> Result<&mut Self> {
        let Some(y) = value.into().filter(|y| !y.is_nan()) else {
            trace!(line = self.line.id.0, "missing sample skipped");
            return Ok(self);
        };
        if y == 0.0 && self.line.zero == ZeroPolicy::Skip {
            trace!(line = self.line.id.0, "zero sample skipped");
            return Ok(self);
        }
        if self.time.px_per_ms().is_none() {
            return Err(Error::ScaleUnset);
        }
        if let Some(last) = self.line.last {
            if at < last {
                return Err(Error::OutOfOrder { last, got: at });
            }
        }

        let anchor = *self.line.anchor.get_or_insert(at);
        let elapsed_ms = (at - anchor).num_milliseconds() as f64;
        let x = self.time.to_px(elapsed_ms)?;
        self.line.last = Some(at);
        self.line.points.push(Point::new(x, y));

        let mut scaled = self.values.rescale(&self.line.points, y);
        let width = self.time.width_px;
        let start = visible_start(&scaled, x, width);
        if start > 0 {
            self.line.points.drain(..start);
            scaled.drain(..start);
            debug!(line = self.line.id.0, evicted = start, kept = self.line.points.len(), "evicted off-screen points");
        }

        let d = path::serialize(&shift(scaled, x, width));
        self.set_path_attr("d", d);
        Ok(self)
    }

    fn set_path_attr(&mut self, key: &str, value: impl fmt::Display) {
        if let Some(el) = self.surface.element_mut(self.line.path) {
            el.set_attr(key, value);
        }
    }
}

/// Scroll `points` left so the newest sample at `x_px` sits on the right
/// edge of a `width`-pixel window. Points pushed past the left edge are
/// dropped except the last one, which stays as the leading point so the
/// trace enters from off-screen instead of starting mid-segment.
pub fn shift(points: Vec<Point>, x_px: i64, width: u32) -> Vec<Point> {
    let offset = x_px - width as i64;
    if offset <= 0 {
        return points;
    }
    let start = visible_start(&points, x_px, width);
    points
        .into_iter()
        .skip(start)
        .map(|p| Point::new(p.x - offset, p.y))
        .collect()
}

/// Index of the first point still drawn once the window scrolls to `x_px`:
/// the last point left of the window, or 0 when nothing has scrolled out.
fn visible_start(points: &[Point], x_px: i64, width: u32) -> usize {
    let offset = x_px - width as i64;
    if offset <= 0 {
        return 0;
    }
    let first_kept = points.partition_point(|p| p.x - offset < 0);
    first_kept.saturating_sub(1)
}
