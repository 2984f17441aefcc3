//! Drawable description of a topology, independent of any canvas.

use crate::config::Palette;
use crate::layout::Layout;

/// Maps layout space (`[-1, 1]` square, y up) onto a canvas (y down).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projection {
	cx: f64,
	cy: f64,
	scale: f64,
}

impl Projection {
	/// Fit the unit square into `width` x `height`, leaving `margin` on every
	/// side and keeping the aspect ratio.
	pub fn fit(width: f64, height: f64, margin: f64) -> Self {
		let usable = ((width - 2.0 * margin).min(height - 2.0 * margin) / 2.0).max(0.0);
		Self {
			cx: width / 2.0,
			cy: height / 2.0,
			scale: usable,
		}
	}

	/// Canvas coordinates of a layout-space point.
	pub fn apply(&self, (x, y): (f64, f64)) -> (f64, f64) {
		(self.cx + x * self.scale, self.cy - y * self.scale)
	}
}

/// A node circle with its label, in canvas coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct NodeVisual {
	/// Centre x.
	pub x: f64,
	/// Centre y.
	pub y: f64,
	/// Circle radius in pixels.
	pub radius: f64,
	/// Fill color.
	pub color: String,
	/// Text drawn in the middle of the circle (the node id).
	pub label: String,
	/// Label text color.
	pub label_color: String,
}

/// One line segment per edge, in edge order.
#[derive(Clone, Debug, PartialEq)]
pub struct EdgeVisual {
	/// Centre of the first endpoint's node.
	pub from: (f64, f64),
	/// Centre of the second endpoint's node.
	pub to: (f64, f64),
	/// Stroke color, active or resting.
	pub color: String,
}

impl EdgeVisual {
	/// The segment shortened by `inset` at both ends, or `None` if the
	/// endpoints are too close for anything to remain visible.
	pub fn trimmed(&self, inset: f64) -> Option<((f64, f64), (f64, f64))> {
		let (dx, dy) = (self.to.0 - self.from.0, self.to.1 - self.from.1);
		let dist = (dx * dx + dy * dy).sqrt();
		if dist <= 2.0 * inset {
			return None;
		}
		let (ux, uy) = (dx / dist, dy / dist);
		Some((
			(self.from.0 + ux * inset, self.from.1 + uy * inset),
			(self.to.0 - ux * inset, self.to.1 - uy * inset),
		))
	}
}

/// Everything needed to paint one frame.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Scene {
	/// Heading drawn above the diagram, e.g. "Ring Topology".
	pub title: String,
	/// Canvas width in pixels.
	pub width: f64,
	/// Canvas height in pixels.
	pub height: f64,
	/// Canvas fill color.
	pub background: String,
	/// Heading color.
	pub title_color: String,
	/// Node visuals, indexed by node id.
	pub nodes: Vec<NodeVisual>,
	/// Edge visuals in edge order.
	pub edges: Vec<EdgeVisual>,
}

impl Scene {
	/// Project every laid out node onto the canvas, labelled with its id.
	pub fn project_nodes(
		layout: &Layout,
		projection: &Projection,
		radius: f64,
		palette: &Palette,
	) -> Vec<NodeVisual> {
		layout
			.positions()
			.iter()
			.enumerate()
			.map(|(id, &p)| {
				let (x, y) = projection.apply(p);
				NodeVisual {
					x,
					y,
					radius,
					color: palette.node.clone(),
					label: id.to_string(),
					label_color: palette.label.clone(),
				}
			})
			.collect()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn projection_keeps_aspect_and_flips_y() {
		let p = Projection::fit(700.0, 500.0, 50.0);
		assert_eq!(p.apply((0.0, 0.0)), (350.0, 250.0));
		// limited by the height: (500 - 100) / 2
		assert_eq!(p.apply((1.0, 1.0)), (550.0, 50.0));
		assert_eq!(p.apply((-1.0, -1.0)), (150.0, 450.0));
	}

	#[test]
	fn projection_of_a_tiny_canvas_collapses_to_the_centre() {
		let p = Projection::fit(40.0, 40.0, 50.0);
		assert_eq!(p.apply((1.0, -1.0)), (20.0, 20.0));
	}

	#[test]
	fn trimming_stops_at_the_node_boundary() {
		let edge = EdgeVisual {
			from: (0.0, 0.0),
			to: (100.0, 0.0),
			color: "red".into(),
		};
		assert_eq!(edge.trimmed(10.0), Some(((10.0, 0.0), (90.0, 0.0))));
		assert_eq!(edge.trimmed(60.0), None);
	}
}
