use crate::{TileCoord, TileError, bbox_to_tile};
use serde::{Deserialize, Serialize};
use std::{fmt::Debug, str::FromStr};

/// A geographical bounding box (`GeoBBox`) represents a rectangular area on a map
/// defined by its `west`, `south`, `east` and `north` edges in degrees.
///
/// No ordering is enforced: a box may cross the antimeridian (`west > east`)
/// or collapse to a single point. Boxes derived from a tile always have
/// `west < east` and `south < north`. Serialized as `[west, south, east, north]`.
///
/// # Examples
///
/// ```
/// use tilebelt_core::GeoBBox;
///
/// let bbox: GeoBBox = "-10,-5,10,5".parse().unwrap();
/// assert_eq!(bbox.as_array(), [-10.0, -5.0, 10.0, 5.0]);
/// assert_eq!(bbox.to_tile().as_array(), [0, 0, 0]);
/// ```
#[derive(Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(into = "[f64; 4]", from = "[f64; 4]")]
pub struct GeoBBox {
	pub west: f64,
	pub south: f64,
	pub east: f64,
	pub north: f64,
}

impl GeoBBox {
	/// Creates a new `GeoBBox` from `west, south, east, north`.
	#[must_use]
	pub fn new(west: f64, south: f64, east: f64, north: f64) -> GeoBBox {
		GeoBBox {
			west,
			south,
			east,
			north,
		}
	}

	/// The smallest single tile that fully contains this box.
	#[must_use]
	pub fn to_tile(&self) -> TileCoord {
		bbox_to_tile(self)
	}

	/// Returns the bounding box as a fixed‑size array `[f64; 4]` in the order
	/// `[west, south, east, north]`.
	#[must_use]
	pub fn as_array(&self) -> [f64; 4] {
		[self.west, self.south, self.east, self.north]
	}

	/// Returns the bounding box as a string in the form `[west,south,east,north]`.
	///
	/// # Examples
	/// ```
	/// use tilebelt_core::GeoBBox;
	///
	/// let bbox = GeoBBox::new(-10.0, -5.0, 10.0, 5.5);
	/// assert_eq!(bbox.as_string_json(), "[-10,-5,10,5.5]");
	/// ```
	#[must_use]
	pub fn as_string_json(&self) -> String {
		format!("[{},{},{},{}]", self.west, self.south, self.east, self.north)
	}
}

impl Debug for GeoBBox {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "[{}, {}, {}, {}]", self.west, self.south, self.east, self.north)
	}
}

impl From<[f64; 4]> for GeoBBox {
	fn from([west, south, east, north]: [f64; 4]) -> Self {
		GeoBBox::new(west, south, east, north)
	}
}

impl From<GeoBBox> for [f64; 4] {
	fn from(bbox: GeoBBox) -> Self {
		bbox.as_array()
	}
}

impl TryFrom<Vec<f64>> for GeoBBox {
	type Error = TileError;

	/// Builds a box from exactly four values `[west, south, east, north]`.
	fn try_from(input: Vec<f64>) -> Result<Self, Self::Error> {
		let values: [f64; 4] = input.try_into().map_err(|input: Vec<f64>| {
			TileError::Parse(format!(
				"bbox must have 4 elements [west, south, east, north], but has {}",
				input.len()
			))
		})?;
		Ok(GeoBBox::from(values))
	}
}

impl FromStr for GeoBBox {
	type Err = TileError;

	/// Parses `west,south,east,north`, optionally wrapped in brackets.
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let inner = s.trim().trim_start_matches('[').trim_end_matches(']');
		let values = inner
			.split(',')
			.map(|value| {
				value
					.trim()
					.parse::<f64>()
					.map_err(|e| TileError::Parse(format!("bbox {s:?} contains an invalid number {value:?}: {e}")))
			})
			.collect::<Result<Vec<f64>, TileError>>()?;
		GeoBBox::try_from(values)
	}
}
