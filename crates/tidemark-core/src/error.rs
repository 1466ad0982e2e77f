// File: crates/tidemark-core/src/error.rs
// Summary: Error types for dataset loading, domain computation and scale construction.

/// Why a single CSV row was rejected. Rejections never abort a load.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum RowError {
    #[error("missing value for `{field}`")]
    Missing { field: &'static str },

    #[error("`{field}` is not a finite number: {value:?}")]
    Parse { field: &'static str, value: String },

    #[error("`{field}` = {value} is below the threshold {threshold}")]
    BelowThreshold {
        field: &'static str,
        value: f64,
        threshold: f64,
    },

    #[error("malformed row: {reason}")]
    Malformed { reason: String },
}

/// Failures surfaced to the caller while building a chart.
#[derive(Debug, thiserror::Error)]
pub enum ChartError {
    #[error("no records available to compute the `{field}` domain")]
    EmptyDataset { field: &'static str },

    #[error("invalid extent [{min}, {max}]: bounds must be finite with min <= max")]
    InvalidExtent { min: f64, max: f64 },

    #[error("band padding must lie in [0, 1), got {0}")]
    InvalidPadding(f64),

    #[error("ordinal scale needs at least one output value")]
    EmptyRange,

    #[error("input has no column named `{0}`")]
    MissingColumn(&'static str),

    #[error("invalid color {0:?}")]
    InvalidColor(String),

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T, E = ChartError> = std::result::Result<T, E>;
