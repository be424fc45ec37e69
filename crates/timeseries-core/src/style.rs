// File: crates/timeseries-core/src/style.rs
// Summary: Presentation defaults applied to every line's <path> element.

/// Immutable path presentation attributes handed to a line at construction.
#[derive(Clone, Debug, PartialEq)]
pub struct PathStyle {
    pub fill: String,
    pub stroke: String,
    /// Path data written before the first sample arrives.
    pub initial_d: String,
    pub stroke_width: String,
    pub stroke_linecap: String,
    pub stroke_linejoin: String,
}

impl PathStyle {
    /// Attribute name/value pairs in the order they are written to the element.
    pub fn attributes(&self) -> [(&'static str, &str); 6] {
        [
            ("fill", self.fill.as_str()),
            ("stroke", self.stroke.as_str()),
            ("d", self.initial_d.as_str()),
            ("stroke-width", self.stroke_width.as_str()),
            ("stroke-linecap", self.stroke_linecap.as_str()),
            ("stroke-linejoin", self.stroke_linejoin.as_str()),
        ]
    }
}

impl Default for PathStyle {
    fn default() -> Self {
        Self {
            fill: "none".into(),
            stroke: "black".into(),
            initial_d: "M0,0".into(),
            stroke_width: "2".into(),
            stroke_linecap: "round".into(),
            stroke_linejoin: "round".into(),
        }
    }
}
