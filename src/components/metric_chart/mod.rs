//! Baseline vs optimized error-rate bar chart.

mod component;
mod state;

pub use component::MetricChart;
pub use state::{
	DatasetKey, MAX_SCALE, MetricPair, OPTIMIZED_FLOOR_PERCENT, bar_ratio, format_percent,
};
