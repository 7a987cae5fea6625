/// Value that maps to a full-height bar.
pub const MAX_SCALE: f64 = 8.0;
/// Smallest height, in percent, the optimized bar is drawn at.
pub const OPTIMIZED_FLOOR_PERCENT: f64 = 1.0;

/// One of the three selectable model versions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum DatasetKey {
	/// Model Ver. A.
	A,
	/// Model Ver. B, selected on load.
	#[default]
	B,
	/// Model Ver. C.
	C,
}

/// Error rates (percent) before and after optimization.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MetricPair {
	/// Error rate of the unoptimized model.
	pub baseline: f64,
	/// Error rate after optimization.
	pub optimized: f64,
}

impl DatasetKey {
	/// Selector order.
	pub const ALL: [DatasetKey; 3] = [DatasetKey::A, DatasetKey::B, DatasetKey::C];

	/// Single-letter key, also used as the `data-dataset` attribute.
	pub fn letter(self) -> &'static str {
		match self {
			DatasetKey::A => "A",
			DatasetKey::B => "B",
			DatasetKey::C => "C",
		}
	}

	/// Button caption.
	pub fn label(self) -> String {
		format!("Model Ver. {}", self.letter())
	}

	/// The preset error-rate pair.
	pub fn values(self) -> MetricPair {
		let (baseline, optimized) = match self {
			DatasetKey::A => (4.5, 2.9),
			DatasetKey::B => (5.2, 2.1),
			DatasetKey::C => (6.8, 1.5),
		};
		MetricPair {
			baseline,
			optimized,
		}
	}
}

/// Fraction of the chart height a value occupies.
pub fn bar_ratio(value: f64) -> f64 {
	value / MAX_SCALE
}

impl MetricPair {
	/// Baseline bar height as a percentage of the chart.
	pub fn baseline_height_percent(self) -> f64 {
		bar_ratio(self.baseline) * 100.0
	}

	/// Optimized bar height, never below [`OPTIMIZED_FLOOR_PERCENT`].
	pub fn optimized_height_percent(self) -> f64 {
		(bar_ratio(self.optimized) * 100.0).max(OPTIMIZED_FLOOR_PERCENT)
	}
}

/// Value label drawn above a bar, e.g. `6.8%`.
pub fn format_percent(value: f64) -> String {
	format!("{value}%")
}

#[cfg(test)]
mod tests {
	use super::*;

	const EPS: f64 = 1e-9;

	#[test]
	fn default_selection_is_b() {
		assert_eq!(DatasetKey::default(), DatasetKey::B);
		assert_eq!(DatasetKey::default().values().baseline, 5.2);
	}

	#[test]
	fn dataset_c_values_and_heights() {
		let pair = DatasetKey::C.values();
		assert_eq!(format_percent(pair.baseline), "6.8%");
		assert_eq!(format_percent(pair.optimized), "1.5%");
		assert!((bar_ratio(pair.baseline) - 6.8 / 8.0).abs() < EPS);
		assert!((bar_ratio(pair.optimized) - 1.5 / 8.0).abs() < EPS);
		assert!((pair.baseline_height_percent() - 85.0).abs() < EPS);
		assert!((pair.optimized_height_percent() - 18.75).abs() < EPS);
	}

	#[test]
	fn every_preset_scales_linearly() {
		for key in DatasetKey::ALL {
			let pair = key.values();
			assert!(pair.optimized < pair.baseline, "{key:?} must improve on baseline");
			assert!((pair.baseline_height_percent() / 100.0 - pair.baseline / MAX_SCALE).abs() < EPS);
			assert!(pair.baseline_height_percent() <= 100.0);
		}
	}

	#[test]
	fn optimized_bar_never_collapses() {
		let tiny = MetricPair {
			baseline: 1.0,
			optimized: 0.01,
		};
		assert_eq!(tiny.optimized_height_percent(), OPTIMIZED_FLOOR_PERCENT);
	}

	#[test]
	fn labels() {
		let labels: Vec<String> = DatasetKey::ALL.iter().map(|k| k.label()).collect();
		assert_eq!(labels, ["Model Ver. A", "Model Ver. B", "Model Ver. C"]);
	}
}
