//! Browser entry point: mounts the simulator app.

use topology_simulator::{App, init_logging};

fn main() {
	init_logging();
	leptos::mount::mount_to_body(App);
}
