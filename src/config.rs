//! Tunables for layout, drawing and the data-flow animation.

use std::time::Duration;

/// Colors used when drawing a topology.
#[derive(Clone, Debug, PartialEq)]
pub struct Palette {
	/// Fill of every node circle.
	pub node: String,
	/// Text color of node labels.
	pub label: String,
	/// Resting edge color.
	pub edge: String,
	/// Color of the edge currently carrying data.
	pub active_edge: String,
	/// Canvas background.
	pub background: String,
	/// Diagram title color.
	pub title: String,
}

impl Default for Palette {
	fn default() -> Self {
		Self {
			node: "#66ccff".into(),
			label: "#000000".into(),
			edge: "#3399ff".into(),
			active_edge: "red".into(),
			background: "#e6f7ff".into(),
			title: "#003366".into(),
		}
	}
}

/// Parameters of the force-directed layout.
#[derive(Clone, Debug, PartialEq)]
pub struct LayoutConfig {
	/// Seed for the initial node placement. Equal seeds give equal layouts.
	pub seed: u64,
	/// Number of simulation steps to run before reading positions.
	pub iterations: usize,
	/// Simulated seconds per step.
	pub step: f32,
	/// Radius of the circle nodes start on, in simulation units.
	pub initial_radius: f32,
}

impl Default for LayoutConfig {
	fn default() -> Self {
		Self {
			seed: 42,
			iterations: 400,
			step: 0.016,
			initial_radius: 100.0,
		}
	}
}

/// Everything the simulator needs to know up front.
#[derive(Clone, Debug, PartialEq)]
pub struct SimulatorConfig {
	/// Drawing colors.
	pub palette: Palette,
	/// Force layout parameters.
	pub layout: LayoutConfig,
	/// How long an edge stays highlighted.
	pub step_delay: Duration,
	/// Node circle radius in canvas pixels.
	pub node_radius: f64,
	/// Margin kept free around the diagram, in canvas pixels.
	pub margin: f64,
	/// Canvas width in pixels.
	pub canvas_width: f64,
	/// Canvas height in pixels.
	pub canvas_height: f64,
}

impl Default for SimulatorConfig {
	fn default() -> Self {
		Self {
			palette: Palette::default(),
			layout: LayoutConfig::default(),
			step_delay: Duration::from_millis(1000),
			node_radius: 16.0,
			margin: 48.0,
			canvas_width: 700.0,
			canvas_height: 500.0,
		}
	}
}

impl SimulatorConfig {
	/// Replace the highlight hold time.
	pub fn with_step_delay(mut self, delay: Duration) -> Self {
		self.step_delay = delay;
		self
	}

	/// Replace the layout seed.
	pub fn with_seed(mut self, seed: u64) -> Self {
		self.layout.seed = seed;
		self
	}
}
