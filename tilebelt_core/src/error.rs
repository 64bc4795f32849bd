//! Error type shared by all tile operations.

use thiserror::Error;

/// Errors raised by tile construction, navigation and the quadkey codec.
///
/// Geographic inputs are never rejected: extreme latitudes or degenerate
/// bounding boxes produce a deterministic result instead of an error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TileError {
	/// The zoom level is outside the range the operation supports,
	/// e.g. asking the root tile for its parent.
	#[error("invalid zoom level {zoom}: {reason}")]
	InvalidZoom { zoom: usize, reason: &'static str },

	/// A quadkey contained a character other than `0`, `1`, `2` or `3`.
	#[error("invalid quadkey digit {digit:?} at position {position}")]
	InvalidQuadkeyDigit { digit: char, position: usize },

	/// `x` or `y` does not fit into the grid of zoom level `z`.
	#[error("tile ({x}, {y}) is out of bounds for zoom level {z}")]
	OutOfBounds { x: u32, y: u32, z: u8 },

	/// Text could not be parsed into a tile or bounding box.
	#[error("{0}")]
	Parse(String),
}
