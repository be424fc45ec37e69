// File: crates/timeseries-core/src/surface.rs
// Summary: Scoped SVG drawing surface: a root <svg> plus typed child elements with
// attribute get/set and transform helpers, rendered to an SVG document string.

use std::fmt::{self, Write as _};

use crate::types::format_number;

pub const SVG_NS: &str = "http://www.w3.org/2000/svg";
pub const XLINK_NS: &str = "http://www.w3.org/1999/xlink";

/// Handle to a child element owned by a `Surface`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ElementId(usize);

/// Accumulated transform state of an element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    pub x: f64,
    pub y: f64,
    pub scale_x: f64,
    pub scale_y: f64,
    pub rotation: f64,
    /// Rotation center; `None` rotates about the user-space origin.
    pub center: Option<(f64, f64)>,
    pub skew_x: f64,
    pub skew_y: f64,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            scale_x: 1.0,
            scale_y: 1.0,
            rotation: 0.0,
            center: None,
            skew_x: 0.0,
            skew_y: 0.0,
        }
    }
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.rotation != 0.0 {
            match self.center {
                Some((cx, cy)) => write!(
                    f,
                    "rotate({},{},{}) ",
                    format_number(self.rotation),
                    format_number(cx),
                    format_number(cy)
                )?,
                None => write!(f, "rotate({}) ", format_number(self.rotation))?,
            }
        }
        write!(f, "scale({},{})", format_number(self.scale_x), format_number(self.scale_y))?;
        if self.skew_x != 0.0 {
            write!(f, " skewX({})", format_number(self.skew_x))?;
        }
        if self.skew_y != 0.0 {
            write!(f, " skewY({})", format_number(self.skew_y))?;
        }
        write!(f, " translate({},{})", format_number(self.x), format_number(self.y))
    }
}

#[derive(Clone, Debug)]
pub struct Element {
    tag: String,
    attrs: Vec<(String, String)>,
    transform: Transform,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self { tag: tag.into(), attrs: Vec::new(), transform: Transform::default() }
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn attr(&self, key: &str) -> Option<&str> {
        self.attrs.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str())
    }

    /// Attributes in insertion order.
    pub fn attrs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attrs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn set_attr(&mut self, key: &str, value: impl fmt::Display) -> &mut Self {
        let value = value.to_string();
        match self.attrs.iter_mut().find(|(k, _)| k == key) {
            Some((_, v)) => *v = value,
            None => self.attrs.push((key.to_string(), value)),
        }
        self
    }

    pub fn set_attrs<K, V>(&mut self, attrs: impl IntoIterator<Item = (K, V)>) -> &mut Self
    where
        K: AsRef<str>,
        V: fmt::Display,
    {
        for (k, v) in attrs {
            self.set_attr(k.as_ref(), v);
        }
        self
    }

    /// Set `width`/`height`; a missing height makes the element square.
    pub fn size(&mut self, width: f64, height: impl Into<Option<f64>>) -> &mut Self {
        let height = height.into().unwrap_or(width);
        self.set_attr("width", format_number(width));
        self.set_attr("height", format_number(height))
    }

    /// Set `x`/`y`.
    pub fn move_to(&mut self, x: f64, y: f64) -> &mut Self {
        self.set_attr("x", format_number(x));
        self.set_attr("y", format_number(y))
    }

    pub fn transform_state(&self) -> Transform {
        self.transform
    }

    /// Merge `update` into the transform state and write the `transform`
    /// attribute. Neutral components (zero offset/rotation/skew, unit scale,
    /// no center) leave the current value in place.
    pub fn transform(&mut self, update: Transform) -> &mut Self {
        let t = &mut self.transform;
        let merge = |cur: &mut f64, new: f64, neutral: f64| {
            if new != neutral {
                *cur = new;
            }
        };
        merge(&mut t.x, update.x, 0.0);
        merge(&mut t.y, update.y, 0.0);
        merge(&mut t.scale_x, update.scale_x, 1.0);
        merge(&mut t.scale_y, update.scale_y, 1.0);
        merge(&mut t.rotation, update.rotation, 0.0);
        merge(&mut t.skew_x, update.skew_x, 0.0);
        merge(&mut t.skew_y, update.skew_y, 0.0);
        if update.center.is_some() {
            t.center = update.center;
        }
        let rendered = self.transform.to_string();
        self.set_attr("transform", rendered)
    }

    pub fn translate(&mut self, x: f64, y: f64) -> &mut Self {
        self.transform(Transform { x, y, ..Transform::default() })
    }

    /// Scale both axes; a missing `sy` scales uniformly.
    pub fn scale(&mut self, sx: f64, sy: impl Into<Option<f64>>) -> &mut Self {
        let sy = sy.into().unwrap_or(sx);
        self.transform(Transform { scale_x: sx, scale_y: sy, ..Transform::default() })
    }

    pub fn rotate(&mut self, degrees: f64, center: Option<(f64, f64)>) -> &mut Self {
        self.transform(Transform { rotation: degrees, center, ..Transform::default() })
    }

    pub fn skew(&mut self, x: f64, y: f64) -> &mut Self {
        self.transform(Transform { skew_x: x, skew_y: y, ..Transform::default() })
    }

    fn write_open(&self, out: &mut String) {
        out.push('<');
        out.push_str(&self.tag);
        for (k, v) in &self.attrs {
            let _ = write!(out, " {}=\"{}\"", k, escape_attr(v));
        }
    }
}

/// The widget's drawing surface: an `<svg>` root sized to its host plus
/// the child elements created on it.
#[derive(Clone, Debug)]
pub struct Surface {
    width: u32,
    height: u32,
    root: Element,
    children: Vec<Element>,
}

impl Surface {
    pub fn new(width: u32, height: u32) -> Self {
        let mut root = Element::new("svg");
        root.set_attrs([
            ("xmlns", SVG_NS),
            ("version", "1.1"),
            ("width", "100%"),
            ("height", "100%"),
            ("xlink", XLINK_NS),
            ("style", "position:relative;"),
        ]);
        Self { width, height, root, children: Vec::new() }
    }

    /// Rendered width of the host, in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Rendered height of the host, in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn root(&self) -> &Element {
        &self.root
    }

    pub fn root_mut(&mut self) -> &mut Element {
        &mut self.root
    }

    /// Create a child element and append it to the root.
    pub fn create(&mut self, tag: &str) -> ElementId {
        self.children.push(Element::new(tag));
        ElementId(self.children.len() - 1)
    }

    pub fn element(&self, id: ElementId) -> Option<&Element> {
        self.children.get(id.0)
    }

    pub fn element_mut(&mut self, id: ElementId) -> Option<&mut Element> {
        self.children.get_mut(id.0)
    }

    pub fn elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter()
    }

    pub fn to_svg_string(&self) -> String {
        let mut out = String::new();
        self.root.write_open(&mut out);
        out.push_str(">\n  <defs></defs>\n");
        for el in &self.children {
            out.push_str("  ");
            el.write_open(&mut out);
            out.push_str("/>\n");
        }
        out.push_str("</svg>\n");
        out
    }
}

fn escape_attr(v: &str) -> String {
    let mut out = String::with_capacity(v.len());
    for c in v.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transform_writes_only_active_parts() {
        let mut el = Element::new("path");
        el.translate(-40.0, 0.0);
        assert_eq!(el.attr("transform"), Some("scale(1,1) translate(-40,0)"));
        el.rotate(90.0, Some((5.0, 5.0))).skew(10.0, 0.0);
        assert_eq!(
            el.attr("transform"),
            Some("rotate(90,5,5) scale(1,1) skewX(10) translate(-40,0)")
        );
    }

    #[test]
    fn escapes_attribute_values() {
        assert_eq!(escape_attr("a<\"b\">&"), "a&lt;&quot;b&quot;&gt;&amp;");
    }
}
