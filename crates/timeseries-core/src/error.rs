// File: crates/timeseries-core/src/error.rs
// Summary: Error type shared by the series, line and config layers.

use chrono::{DateTime, Utc};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// Duration string did not parse, or parsed to a non-positive span.
    #[error("invalid duration {0:?}: expected a positive span such as \"10s\" or \"5m\"")]
    InvalidDuration(String),

    #[error("time scale is not set; call Series::scale before adding samples")]
    ScaleUnset,

    #[error("sample at {got} is earlier than the previous sample at {last}")]
    OutOfOrder {
        last: DateTime<Utc>,
        got: DateTime<Utc>,
    },

    #[error("no line with id {0}")]
    UnknownLine(usize),

    #[error("invalid series config: {0}")]
    InvalidConfig(String),

    #[error(transparent)]
    Toml(#[from] toml::de::Error),
}
