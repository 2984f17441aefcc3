//! Topology shapes and the small graphs they produce.

use std::fmt;
use std::str::FromStr;

use crate::error::SimulatorError;

/// Node count of the flat shapes (star, bus, ring, mesh).
pub const FLAT_NODES: usize = 6;
/// Upper bound on node ids in the tree shape.
pub const TREE_NODES: usize = 10;

/// A selectable network shape.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Topology {
	/// One hub, every other node attached to it.
	#[default]
	Star,
	/// A single path through all nodes.
	Bus,
	/// A path whose ends are joined.
	Ring,
	/// Every node connected to every other node.
	Mesh,
	/// A binary tree rooted at node 0.
	Tree,
}

impl Topology {
	/// All shapes in menu order.
	pub const ALL: [Topology; 5] = [
		Topology::Star,
		Topology::Bus,
		Topology::Ring,
		Topology::Mesh,
		Topology::Tree,
	];

	/// Menu name of the shape.
	pub fn name(self) -> &'static str {
		match self {
			Topology::Star => "Star",
			Topology::Bus => "Bus",
			Topology::Ring => "Ring",
			Topology::Mesh => "Mesh",
			Topology::Tree => "Tree",
		}
	}
}

impl fmt::Display for Topology {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

impl FromStr for Topology {
	type Err = SimulatorError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Topology::ALL
			.into_iter()
			.find(|t| t.name() == s)
			.ok_or_else(|| SimulatorError::UnknownTopology(s.to_owned()))
	}
}

/// Undirected graph on nodes `0..node_count`.
///
/// `edges` keeps the order edges were added in; drawing and the data-flow
/// animation both walk it front to back.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TopologyGraph {
	node_count: usize,
	edges: Vec<(usize, usize)>,
}

impl TopologyGraph {
	/// Build the graph for `topology`.
	pub fn build(topology: Topology) -> Self {
		let mut graph = Self::default();
		match topology {
			Topology::Star => {
				graph.add_node(0);
				for i in 1..FLAT_NODES {
					graph.add_edge(0, i);
				}
			}
			Topology::Bus => {
				for i in 1..FLAT_NODES {
					graph.add_edge(i - 1, i);
				}
			}
			Topology::Ring => {
				for i in 0..FLAT_NODES {
					graph.add_edge(i, (i + 1) % FLAT_NODES);
				}
			}
			Topology::Mesh => {
				for i in 0..FLAT_NODES {
					for j in i + 1..FLAT_NODES {
						graph.add_edge(i, j);
					}
				}
			}
			Topology::Tree => {
				for parent in 0..TREE_NODES / 2 {
					let left = 2 * parent + 1;
					graph.add_edge(parent, left);
					let right = left + 1;
					if right < TREE_NODES {
						graph.add_edge(parent, right);
					}
				}
			}
		}
		graph
	}

	fn add_node(&mut self, node: usize) {
		self.node_count = self.node_count.max(node + 1);
	}

	fn add_edge(&mut self, a: usize, b: usize) {
		if self.contains_edge(a, b) {
			return;
		}
		self.add_node(a);
		self.add_node(b);
		self.edges.push((a, b));
	}

	/// Number of nodes; ids run from 0 to `node_count - 1`.
	pub fn node_count(&self) -> usize {
		self.node_count
	}

	/// Edges in the order they were added.
	pub fn edges(&self) -> &[(usize, usize)] {
		&self.edges
	}

	/// Number of edges.
	pub fn edge_count(&self) -> usize {
		self.edges.len()
	}

	/// Whether the graph has no nodes.
	pub fn is_empty(&self) -> bool {
		self.node_count == 0
	}

	/// Whether `a` and `b` are connected, in either direction.
	pub fn contains_edge(&self, a: usize, b: usize) -> bool {
		self.edges
			.iter()
			.any(|&(u, v)| (u, v) == (a, b) || (u, v) == (b, a))
	}

	/// Number of edges touching `node`.
	pub fn degree(&self, node: usize) -> usize {
		self.edges
			.iter()
			.filter(|&&(u, v)| u == node || v == node)
			.count()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn star_hangs_everything_off_node_zero() {
		let g = TopologyGraph::build(Topology::Star);
		assert_eq!(g.node_count(), 6);
		assert_eq!(g.edge_count(), 5);
		assert!(g.edges().iter().all(|&(u, v)| u == 0 || v == 0));
		assert_eq!(g.degree(0), 5);
	}

	#[test]
	fn bus_is_a_simple_path() {
		let g = TopologyGraph::build(Topology::Bus);
		assert_eq!(g.node_count(), 6);
		assert_eq!(g.edges(), &[(0, 1), (1, 2), (2, 3), (3, 4), (4, 5)]);
		assert_eq!(g.degree(0), 1);
		assert_eq!(g.degree(5), 1);
		assert!((1..5).all(|n| g.degree(n) == 2));
	}

	#[test]
	fn ring_closes_the_loop() {
		let g = TopologyGraph::build(Topology::Ring);
		assert_eq!(g.edge_count(), 6);
		assert_eq!(g.edges().last(), Some(&(5, 0)));
		assert!((0..6).all(|n| g.degree(n) == 2));
		assert!(g.contains_edge(0, 5));
	}

	#[test]
	fn mesh_connects_every_pair() {
		let g = TopologyGraph::build(Topology::Mesh);
		assert_eq!(g.edge_count(), 15);
		for i in 0..6 {
			for j in 0..6 {
				if i != j {
					assert!(g.contains_edge(i, j), "{i}-{j} missing");
				}
			}
		}
	}

	#[test]
	fn tree_is_a_bounded_binary_tree() {
		let g = TopologyGraph::build(Topology::Tree);
		assert_eq!(g.node_count(), 10);
		assert_eq!(g.edge_count(), 9);
		assert_eq!(
			g.edges(),
			&[
				(0, 1),
				(0, 2),
				(1, 3),
				(1, 4),
				(2, 5),
				(2, 6),
				(3, 7),
				(3, 8),
				(4, 9)
			]
		);
		// every node but the root has exactly one parent
		for child in 1..10 {
			let parents = g.edges().iter().filter(|&&(_, c)| c == child).count();
			assert_eq!(parents, 1);
		}
	}

	#[test]
	fn names_round_trip_through_the_menu() {
		for t in Topology::ALL {
			assert_eq!(t.to_string().parse::<Topology>(), Ok(t));
		}
	}

	#[test]
	fn unknown_name_fails_to_parse() {
		assert_eq!(
			"Hypercube".parse::<Topology>(),
			Err(SimulatorError::UnknownTopology("Hypercube".into()))
		);
	}

	#[test]
	fn default_graph_is_empty() {
		let g = TopologyGraph::default();
		assert!(g.is_empty());
		assert_eq!(g.edge_count(), 0);
	}
}
