use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;

use crate::components::flow_timer::FlowTimer;
use crate::components::topology_canvas::TopologyCanvas;
use crate::config::SimulatorConfig;
use crate::scene::Scene;
use crate::simulator::TopologySimulator;
use crate::topology::Topology;

/// Glue between the page widgets, the simulator and the timer.
#[derive(Clone)]
struct Controls {
	sim: Rc<RefCell<TopologySimulator>>,
	scene: RwSignal<Scene>,
	status: RwSignal<String>,
	timer: FlowTimer,
}

impl Controls {
	fn new(config: SimulatorConfig) -> Self {
		let sim = TopologySimulator::new(config);
		let config = sim.config();
		let scene = RwSignal::new(sim.scene(config.canvas_width, config.canvas_height));
		let controls = Self {
			sim: Rc::new(RefCell::new(sim)),
			scene,
			status: RwSignal::new(String::new()),
			timer: FlowTimer::new(),
		};
		let on_fire = controls.clone();
		controls.timer.set_callback(move || on_fire.step());
		controls
	}

	fn publish(&self) {
		let sim = self.sim.borrow();
		let config = sim.config();
		self.scene.set(sim.scene(config.canvas_width, config.canvas_height));
		self.status.set(sim.flow_status());
	}

	fn select(&self, name: &str) {
		self.sim.borrow_mut().select_name(name);
	}

	fn draw(&self) {
		self.timer.cancel();
		self.sim.borrow_mut().draw();
		self.publish();
	}

	fn simulate(&self) {
		let next = self.sim.borrow_mut().simulate();
		if let Some(delay) = next {
			self.timer.schedule(delay);
			self.publish();
		}
	}

	fn step(&self) {
		let next = self.sim.borrow_mut().advance();
		self.publish();
		if let Some(delay) = next {
			self.timer.schedule(delay);
		}
	}
}

/// The simulator window: shape menu, buttons, status line and diagram.
#[component]
pub fn Home() -> impl IntoView {
	let controls = Controls::new(SimulatorConfig::default());
	let (scene, status) = (controls.scene, controls.status);

	// The timer callback holds `Controls`, which holds the timer: break the
	// cycle and drop any pending step when the page goes away.
	let timer = StoredValue::new_local(controls.timer.clone());
	on_cleanup(move || {
		timer.try_with_value(FlowTimer::shutdown);
	});
	let (on_select, on_draw, on_simulate) = (controls.clone(), controls.clone(), controls);

	view! {
		<div class="page">
			<h1 class="title">"Network Simulator"</h1>

			<div class="selector">
				<label for="topology">"Select Topology:"</label>
				<select
					id="topology"
					on:change=move |ev| on_select.select(&event_target_value(&ev))
				>
					{Topology::ALL
						.into_iter()
						.map(|t| {
							view! {
								<option value=t.name() selected={t == Topology::default()}>
									{t.name()}
								</option>
							}
						})
						.collect_view()}
				</select>
			</div>

			<div class="buttons">
				<button on:click=move |_| on_draw.draw()>"Draw Topology"</button>
				<button on:click=move |_| on_simulate.simulate()>"Simulate Data Flow"</button>
			</div>

			<p class="status">{move || status.get()}</p>

			<TopologyCanvas scene=scene />
		</div>
	}
}
