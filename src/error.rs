//! Error type shared by the simulator and the canvas view.

use thiserror::Error;

/// Failures the simulator can run into.
///
/// None of these reach the user: the view logs them and carries on with
/// whatever is still drawable.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SimulatorError {
	/// A topology name that is not one of the menu entries.
	#[error("unknown topology `{0}`")]
	UnknownTopology(String),
	/// The canvas element or its 2D context could not be obtained.
	#[error("canvas unavailable: {0}")]
	Canvas(String),
}

/// Convenience alias for results carrying a [`SimulatorError`].
pub type Result<T> = std::result::Result<T, SimulatorError>;
