//! Sequential edge highlighting.
//!
//! The animator never touches a timer itself. Each transition returns the
//! delay after which the caller should call [`FlowAnimator::advance`] again,
//! or `None` when nothing needs scheduling.

use std::time::Duration;

/// Where the data-flow animation currently is.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FlowState {
	/// No run in progress.
	#[default]
	Idle,
	/// Walking the edge order; the payload is the current edge index.
	Highlighting(usize),
	/// The last run reached the end of the edge order.
	Done,
}

/// State machine walking the edge order one edge at a time.
#[derive(Clone, Debug)]
pub struct FlowAnimator {
	state: FlowState,
	edge_count: usize,
	lit: bool,
	hold: Duration,
}

impl FlowAnimator {
	/// New idle animator that keeps each edge lit for `hold`.
	pub fn new(hold: Duration) -> Self {
		Self {
			state: FlowState::Idle,
			edge_count: 0,
			lit: false,
			hold,
		}
	}

	/// Current state of the run.
	pub fn state(&self) -> FlowState {
		self.state
	}

	/// Index of the edge currently drawn in the active color.
	pub fn active_edge(&self) -> Option<usize> {
		match self.state {
			FlowState::Highlighting(i) if self.lit => Some(i),
			_ => None,
		}
	}

	/// Start a run over `edge_count` edges, abandoning any run in progress.
	///
	/// With no edges this is a no-op and the state is left alone.
	pub fn start(&mut self, edge_count: usize) -> Option<Duration> {
		if edge_count == 0 {
			return None;
		}
		self.edge_count = edge_count;
		self.state = FlowState::Highlighting(0);
		self.lit = true;
		Some(self.hold)
	}

	/// Handle an elapsed delay.
	///
	/// A lit edge is turned off and the next step follows immediately
	/// (`Duration::ZERO`). An unlit edge hands over to the next one, or ends
	/// the run once the edge order is exhausted. Outside a run this does
	/// nothing, so a tick that outlived its run is harmless.
	pub fn advance(&mut self) -> Option<Duration> {
		let FlowState::Highlighting(i) = self.state else {
			return None;
		};
		if self.lit {
			self.lit = false;
			return Some(Duration::ZERO);
		}
		let next = i + 1;
		if next >= self.edge_count {
			self.state = FlowState::Done;
			return None;
		}
		self.state = FlowState::Highlighting(next);
		self.lit = true;
		Some(self.hold)
	}

	/// Drop the current run.
	pub fn cancel(&mut self) {
		self.state = FlowState::Idle;
		self.lit = false;
		self.edge_count = 0;
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	const HOLD: Duration = Duration::from_millis(1000);

	/// Drive a run to completion, collecting lit edges in order.
	fn lit_sequence(anim: &mut FlowAnimator) -> Vec<usize> {
		let mut seen = Vec::new();
		let mut next = Some(HOLD);
		while next.is_some() {
			if let Some(i) = anim.active_edge() {
				seen.push(i);
			}
			next = anim.advance();
		}
		seen
	}

	#[test]
	fn starts_idle() {
		let anim = FlowAnimator::new(HOLD);
		assert_eq!(anim.state(), FlowState::Idle);
		assert_eq!(anim.active_edge(), None);
	}

	#[test]
	fn lights_each_edge_once_in_order() {
		let mut anim = FlowAnimator::new(HOLD);
		assert_eq!(anim.start(4), Some(HOLD));
		assert_eq!(lit_sequence(&mut anim), vec![0, 1, 2, 3]);
		assert_eq!(anim.state(), FlowState::Done);
		assert_eq!(anim.active_edge(), None);
	}

	#[test]
	fn hold_then_immediate_handover() {
		let mut anim = FlowAnimator::new(HOLD);
		anim.start(2);
		assert_eq!(anim.active_edge(), Some(0));
		assert_eq!(anim.advance(), Some(Duration::ZERO));
		assert_eq!(anim.state(), FlowState::Highlighting(0));
		assert_eq!(anim.active_edge(), None);
		assert_eq!(anim.advance(), Some(HOLD));
		assert_eq!(anim.active_edge(), Some(1));
	}

	#[test]
	fn no_edges_is_a_no_op() {
		let mut anim = FlowAnimator::new(HOLD);
		assert_eq!(anim.start(0), None);
		assert_eq!(anim.state(), FlowState::Idle);
	}

	#[test]
	fn restarting_goes_back_to_the_first_edge() {
		let mut anim = FlowAnimator::new(HOLD);
		anim.start(5);
		anim.advance();
		anim.advance();
		assert_eq!(anim.active_edge(), Some(1));
		assert_eq!(anim.start(5), Some(HOLD));
		assert_eq!(anim.active_edge(), Some(0));
		assert_eq!(lit_sequence(&mut anim), vec![0, 1, 2, 3, 4]);
	}

	#[test]
	fn ticks_after_cancel_do_nothing() {
		let mut anim = FlowAnimator::new(HOLD);
		anim.start(3);
		anim.cancel();
		assert_eq!(anim.advance(), None);
		assert_eq!(anim.state(), FlowState::Idle);
		assert_eq!(anim.active_edge(), None);
	}

	#[test]
	fn ticks_after_done_do_nothing() {
		let mut anim = FlowAnimator::new(HOLD);
		anim.start(1);
		lit_sequence(&mut anim);
		assert_eq!(anim.advance(), None);
		assert_eq!(anim.state(), FlowState::Done);
	}
}
