use leptos::prelude::*;
use log::warn;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::render;
use crate::error::{Result, SimulatorError};
use crate::scene::Scene;

/// Canvas that repaints whenever `scene` changes.
#[component]
pub fn TopologyCanvas(#[prop(into)] scene: Signal<Scene>) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();

	Effect::new(move |_| {
		let scene = scene.get();
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		if let Err(e) = paint(&canvas, &scene) {
			warn!("{e}");
		}
	});

	view! {
		<canvas
			node_ref=canvas_ref
			class="topology-canvas"
			style="display: block; margin: 0 auto;"
		/>
	}
}

fn paint(canvas: &HtmlCanvasElement, scene: &Scene) -> Result<()> {
	canvas.set_width(scene.width as u32);
	canvas.set_height(scene.height as u32);
	let ctx = context_2d(canvas)?;
	render::render(scene, &ctx);
	Ok(())
}

fn context_2d(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d> {
	canvas
		.get_context("2d")
		.map_err(|e| SimulatorError::Canvas(format!("{e:?}")))?
		.ok_or_else(|| SimulatorError::Canvas("no 2d context".into()))?
		.dyn_into()
		.map_err(|_| SimulatorError::Canvas("context is not 2d".into()))
}
