// File: crates/tidemark-core/src/lib.rs
// Summary: Core library entry point; records -> domains -> scales -> renderer-agnostic scenes.

pub mod axis;
pub mod chart;
pub mod domain;
pub mod error;
pub mod format;
pub mod geometry;
pub mod grid;
pub mod legend;
pub mod record;
pub mod scale;
pub mod scene;
pub mod theme;
pub mod tooltip;
pub mod types;

pub use chart::{BarChart, BarChartConfig, ChartContext, LollipopChart, LollipopConfig, ScatterConfig, ScatterPlot};
pub use domain::{compute_categories, compute_domain, Categories, Extent};
pub use error::{ChartError, RowError};
pub use record::{load_records, load_records_from_path, CountryTemperature, Dataset, SeaLevel};
pub use scale::{BandScale, LinearScale, OrdinalScale, Scale, SqrtScale};
pub use scene::Scene;
pub use theme::Theme;
pub use tooltip::{hover_state, Hover, TooltipContent};
