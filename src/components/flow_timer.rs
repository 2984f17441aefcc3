//! Browser timer that drives the data-flow animation.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

use log::warn;
use wasm_bindgen::prelude::*;

/// One persistent callback and at most one pending `setTimeout` for it.
///
/// Scheduling always clears the previous timeout first, so two steps of
/// the animation can never be in flight at once.
#[derive(Clone, Default)]
pub struct FlowTimer {
	callback: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
	pending: Rc<Cell<Option<i32>>>,
}

impl FlowTimer {
	pub fn new() -> Self {
		Self::default()
	}

	/// Install the function run each time the timer fires.
	pub fn set_callback(&self, mut on_fire: impl FnMut() + 'static) {
		let pending = self.pending.clone();
		*self.callback.borrow_mut() = Some(Closure::new(move || {
			pending.set(None);
			on_fire();
		}));
	}

	pub fn schedule(&self, delay: Duration) {
		self.cancel();
		let Some(window) = web_sys::window() else {
			warn!("no window, data flow step dropped");
			return;
		};
		let callback = self.callback.borrow();
		let Some(cb) = callback.as_ref() else {
			return;
		};
		let millis = i32::try_from(delay.as_millis()).unwrap_or(i32::MAX);
		match window.set_timeout_with_callback_and_timeout_and_arguments_0(
			cb.as_ref().unchecked_ref(),
			millis,
		) {
			Ok(handle) => self.pending.set(Some(handle)),
			Err(e) => warn!("failed to schedule data flow step: {e:?}"),
		}
	}

	/// Clear the pending timeout, if any.
	pub fn cancel(&self) {
		let Some(handle) = self.pending.take() else {
			return;
		};
		if let Some(window) = web_sys::window() {
			window.clear_timeout_with_handle(handle);
		}
	}

	/// Cancel and drop the callback, releasing whatever it captured.
	pub fn shutdown(&self) {
		self.cancel();
		self.callback.borrow_mut().take();
	}
}


#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
	use std::rc::Rc;

	use wasm_bindgen_test::*;

	use super::*;

	#[wasm_bindgen_test]
	fn shutdown_releases_the_callback_captures() {
		let timer = FlowTimer::new();
		let captured = Rc::new(());
		let held = captured.clone();
		timer.set_callback(move || {
			let _ = &held;
		});
		assert_eq!(Rc::strong_count(&captured), 2);

		timer.shutdown();
		assert_eq!(Rc::strong_count(&captured), 1);
		assert_eq!(timer.pending.get(), None);
	}
}
