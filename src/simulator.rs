//! The controller behind the page: selection, current diagram and the
//! data-flow run.

use std::time::Duration;

use log::{debug, info, warn};

use crate::animator::{FlowAnimator, FlowState};
use crate::config::SimulatorConfig;
use crate::layout::Layout;
use crate::scene::{EdgeVisual, Projection, Scene};
use crate::topology::{Topology, TopologyGraph};

/// Application state for one simulator window.
///
/// Graph, layout and animation always belong to the same draw; `draw`
/// replaces all three together.
pub struct TopologySimulator {
	config: SimulatorConfig,
	selected: Option<Topology>,
	drawn: Option<Topology>,
	graph: TopologyGraph,
	layout: Layout,
	animator: FlowAnimator,
}

impl TopologySimulator {
	/// Create a simulator showing the default shape.
	pub fn new(config: SimulatorConfig) -> Self {
		let animator = FlowAnimator::new(config.step_delay);
		let mut sim = Self {
			config,
			selected: Some(Topology::default()),
			drawn: None,
			graph: TopologyGraph::default(),
			layout: Layout::default(),
			animator,
		};
		sim.draw();
		sim
	}

	/// Configuration the simulator was created with.
	pub fn config(&self) -> &SimulatorConfig {
		&self.config
	}

	/// Shape picked in the menu; shown after the next [`draw`](Self::draw).
	/// `None` after an unrecognised name was selected.
	pub fn selected(&self) -> Option<Topology> {
		self.selected
	}

	/// Shape currently on screen.
	pub fn drawn(&self) -> Option<Topology> {
		self.drawn
	}

	/// Graph of the shape on screen.
	pub fn graph(&self) -> &TopologyGraph {
		&self.graph
	}

	/// Node positions of the shape on screen.
	pub fn layout(&self) -> &Layout {
		&self.layout
	}

	/// Where the data-flow run currently is.
	pub fn flow_state(&self) -> FlowState {
		self.animator.state()
	}

	/// Pick a shape for the next draw.
	pub fn select(&mut self, topology: Topology) {
		self.selected = Some(topology);
	}

	/// Select by menu name. An unrecognised name selects nothing, so the
	/// next draw shows an empty diagram.
	pub fn select_name(&mut self, name: &str) {
		self.selected = match name.parse() {
			Ok(topology) => Some(topology),
			Err(e) => {
				warn!("{e}");
				None
			}
		};
	}

	/// Rebuild the diagram for the selected shape, abandoning any run.
	pub fn draw(&mut self) {
		self.animator.cancel();
		self.drawn = self.selected;
		self.graph = self.selected.map(TopologyGraph::build).unwrap_or_default();
		self.layout = Layout::compute(&self.graph, &self.config.layout);
		info!(
			"drew {} topology: {} nodes, {} edges",
			self.drawn.map_or("empty", Topology::name),
			self.graph.node_count(),
			self.graph.edge_count()
		);
	}

	/// Start the data-flow run from the first edge.
	///
	/// Returns the delay before the next [`advance`](Self::advance), or
	/// `None` when there is nothing to animate.
	pub fn simulate(&mut self) -> Option<Duration> {
		let delay = self.animator.start(self.graph.edge_count())?;
		info!(
			"simulating data flow over {} edges",
			self.graph.edge_count()
		);
		self.log_step();
		Some(delay)
	}

	/// Feed an elapsed timer into the run.
	pub fn advance(&mut self) -> Option<Duration> {
		let next = self.animator.advance();
		match self.animator.state() {
			FlowState::Done if next.is_none() => info!("data flow complete"),
			_ => self.log_step(),
		}
		next
	}

	fn log_step(&self) {
		if let Some(i) = self.animator.active_edge() {
			if let Some(&(u, v)) = self.graph.edges().get(i) {
				debug!("edge {i}: {u} -> {v}");
			}
		}
	}

	/// Current color of edge `i`.
	pub fn edge_color(&self, i: usize) -> &str {
		if self.animator.active_edge() == Some(i) {
			&self.config.palette.active_edge
		} else {
			&self.config.palette.edge
		}
	}

	/// Progress line for the status bar.
	pub fn flow_status(&self) -> String {
		match self.animator.state() {
			FlowState::Idle => String::new(),
			FlowState::Done => "Data flow complete".into(),
			FlowState::Highlighting(i) => match self.graph.edges().get(i) {
				Some(&(u, v)) => format!(
					"Edge {} of {}: {u} - {v}",
					i + 1,
					self.graph.edge_count()
				),
				None => String::new(),
			},
		}
	}

	/// Drawable snapshot for a `width` x `height` canvas.
	pub fn scene(&self, width: f64, height: f64) -> Scene {
		let palette = &self.config.palette;
		let projection = Projection::fit(width, height, self.config.margin);
		let nodes =
			Scene::project_nodes(&self.layout, &projection, self.config.node_radius, palette);
		let edges = self
			.graph
			.edges()
			.iter()
			.enumerate()
			.filter_map(|(i, &(u, v))| {
				Some(EdgeVisual {
					from: projection.apply(self.layout.position(u)?),
					to: projection.apply(self.layout.position(v)?),
					color: self.edge_color(i).to_owned(),
				})
			})
			.collect();
		Scene {
			title: match self.drawn {
				Some(topology) => format!("{topology} Topology"),
				None => "Topology".into(),
			},
			width,
			height,
			background: palette.background.clone(),
			title_color: palette.title.clone(),
			nodes,
			edges,
		}
	}
}
