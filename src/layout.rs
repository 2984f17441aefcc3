//! Force-directed node placement.

use std::f64::consts::PI;

use force_graph::{EdgeData, ForceGraph, NodeData, SimulationParameters};

use crate::config::LayoutConfig;
use crate::topology::TopologyGraph;

/// Node positions in layout space, indexed by node id.
///
/// Positions are centred on the origin and fit the `[-1, 1]` square.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Layout {
	positions: Vec<(f64, f64)>,
}

impl Layout {
	/// Run the force simulation for `graph` and normalise the result.
	pub fn compute(graph: &TopologyGraph, config: &LayoutConfig) -> Self {
		let n = graph.node_count();
		if n == 0 {
			return Self::default();
		}

		let mut sim: ForceGraph<usize, ()> = ForceGraph::new(SimulationParameters {
			force_charge: 150.0,
			force_spring: 0.05,
			force_max: 100.0,
			node_speed: 3000.0,
			damping_factor: 0.9,
		});

		let radius = config.initial_radius as f64;
		let idx: Vec<_> = (0..n)
			.map(|id| {
				let angle = (id as f64) * 2.0 * PI / n as f64;
				let wobble = 1.0 + 0.2 * (jitter(config.seed, id) - 0.5);
				sim.add_node(NodeData {
					x: (radius * wobble * angle.cos()) as f32,
					y: (radius * wobble * angle.sin()) as f32,
					mass: 10.0,
					is_anchor: false,
					user_data: id,
				})
			})
			.collect();

		for &(a, b) in graph.edges() {
			sim.add_edge(idx[a], idx[b], EdgeData::default());
		}

		for _ in 0..config.iterations {
			sim.update(config.step);
		}

		let mut positions = vec![(0.0, 0.0); n];
		sim.visit_nodes(|node| {
			positions[node.data.user_data] = (node.x() as f64, node.y() as f64);
		});

		Self::normalised(positions)
	}

	fn normalised(mut positions: Vec<(f64, f64)>) -> Self {
		let n = positions.len() as f64;
		let (cx, cy) = positions
			.iter()
			.fold((0.0, 0.0), |(sx, sy), &(x, y)| (sx + x / n, sy + y / n));
		let extent = positions
			.iter()
			.map(|&(x, y)| (x - cx).abs().max((y - cy).abs()))
			.fold(0.0_f64, f64::max);
		let scale = if extent > f64::EPSILON {
			1.0 / extent
		} else {
			0.0
		};
		for p in &mut positions {
			*p = ((p.0 - cx) * scale, (p.1 - cy) * scale);
		}
		Self { positions }
	}

	/// Position of `node`, if it is part of the layout.
	pub fn position(&self, node: usize) -> Option<(f64, f64)> {
		self.positions.get(node).copied()
	}

	/// All positions, indexed by node id.
	pub fn positions(&self) -> &[(f64, f64)] {
		&self.positions
	}

	/// Number of laid out nodes.
	pub fn len(&self) -> usize {
		self.positions.len()
	}

	/// Whether the layout has no nodes.
	pub fn is_empty(&self) -> bool {
		self.positions.is_empty()
	}
}

/// Deterministic value in `[0, 1)` for a seed and node id.
fn jitter(seed: u64, id: usize) -> f64 {
	let x = seed
		.wrapping_add(id as u64 + 1)
		.wrapping_mul(9301)
		.wrapping_add(49297)
		% 233280;
	(x as f64) / 233280.0
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::topology::Topology;

	#[test]
	fn one_position_per_node_inside_the_unit_square() {
		let config = LayoutConfig::default();
		for t in Topology::ALL {
			let graph = TopologyGraph::build(t);
			let layout = Layout::compute(&graph, &config);
			assert_eq!(layout.len(), graph.node_count(), "{t}");
			for &(x, y) in layout.positions() {
				assert!(x.is_finite() && y.is_finite());
				assert!(x.abs() <= 1.0 + 1e-9 && y.abs() <= 1.0 + 1e-9);
			}
		}
	}

	#[test]
	fn same_seed_same_layout() {
		let graph = TopologyGraph::build(Topology::Tree);
		let config = LayoutConfig::default();
		assert_eq!(
			Layout::compute(&graph, &config),
			Layout::compute(&graph, &config)
		);
	}

	#[test]
	fn nodes_do_not_collapse_onto_each_other() {
		let graph = TopologyGraph::build(Topology::Mesh);
		let layout = Layout::compute(&graph, &LayoutConfig::default());
		let p = layout.positions();
		for i in 0..p.len() {
			for j in i + 1..p.len() {
				let d = ((p[i].0 - p[j].0).powi(2) + (p[i].1 - p[j].1).powi(2)).sqrt();
				assert!(d > 1e-3, "{i} and {j} overlap");
			}
		}
	}

	#[test]
	fn empty_graph_empty_layout() {
		let layout = Layout::compute(&TopologyGraph::default(), &LayoutConfig::default());
		assert!(layout.is_empty());
		assert_eq!(layout.position(0), None);
	}

	#[test]
	fn normalising_a_single_point_centres_it() {
		let layout = Layout::normalised(vec![(12.0, -3.0)]);
		assert_eq!(layout.position(0), Some((0.0, 0.0)));
	}

	#[test]
	fn jitter_stays_in_range() {
		for id in 0..100 {
			let j = jitter(42, id);
			assert!((0.0..1.0).contains(&j));
		}
	}
}
