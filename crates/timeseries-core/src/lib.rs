// File: crates/timeseries-core/src/lib.rs
// Summary: Core library entry point; exports the live series/line pipeline and its SVG surface.

pub mod config;
pub mod duration;
pub mod error;
pub mod line;
pub mod path;
pub mod scale;
pub mod series;
pub mod style;
pub mod surface;
pub mod types;

pub use config::{LineConfig, SeriesConfig, StrokeWidth};
pub use error::{Error, Result};
pub use line::{shift, Line, LineId, LineMut, LineOptions, LineState, ZeroPolicy};
pub use path::{serialize, serialize_sparse};
pub use scale::{TimeScale, ValueScale};
pub use series::Series;
pub use style::PathStyle;
pub use surface::{Element, ElementId, Surface, Transform};
pub use types::Point;
