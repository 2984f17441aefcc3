use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use crate::scene::{EdgeVisual, NodeVisual, Scene};

const TITLE_FONT: &str = "16px Helvetica, sans-serif";
const LABEL_FONT: &str = "bold 10px Helvetica, sans-serif";
const EDGE_WIDTH: f64 = 2.0;

/// Paint `scene`, replacing whatever the canvas showed before.
pub fn render(scene: &Scene, ctx: &CanvasRenderingContext2d) {
	ctx.set_fill_style_str(&scene.background);
	ctx.fill_rect(0.0, 0.0, scene.width, scene.height);

	ctx.set_fill_style_str(&scene.title_color);
	ctx.set_font(TITLE_FONT);
	ctx.set_text_align("center");
	ctx.set_text_baseline("top");
	let _ = ctx.fill_text(&scene.title, scene.width / 2.0, 12.0);

	draw_nodes(&scene.nodes, ctx);
	let inset = scene.nodes.first().map_or(0.0, |n| n.radius);
	draw_edges(&scene.edges, inset, ctx);
}

fn draw_nodes(nodes: &[NodeVisual], ctx: &CanvasRenderingContext2d) {
	ctx.set_font(LABEL_FONT);
	ctx.set_text_align("center");
	ctx.set_text_baseline("middle");
	for node in nodes {
		ctx.begin_path();
		let _ = ctx.arc(node.x, node.y, node.radius, 0.0, 2.0 * PI);
		ctx.set_fill_style_str(&node.color);
		ctx.fill();

		ctx.set_fill_style_str(&node.label_color);
		let _ = ctx.fill_text(&node.label, node.x, node.y);
	}
}

// Edges go on top of the nodes but stop at their rim, so labels stay clear.
fn draw_edges(edges: &[EdgeVisual], inset: f64, ctx: &CanvasRenderingContext2d) {
	ctx.set_line_width(EDGE_WIDTH);
	for edge in edges {
		let Some(((x1, y1), (x2, y2))) = edge.trimmed(inset) else {
			continue;
		};
		ctx.set_stroke_style_str(&edge.color);
		ctx.begin_path();
		ctx.move_to(x1, y1);
		ctx.line_to(x2, y2);
		ctx.stroke();
	}
}
