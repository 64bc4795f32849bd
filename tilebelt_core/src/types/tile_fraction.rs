use crate::{TileCoord, point_to_tile_fraction};
use std::fmt::{self, Debug};

/// A position inside the tile grid of zoom level `z`, before quantization.
///
/// `x` lies in `[0, 2^z)`. `y` is not wrapped and leaves `[0, 2^z)` for
/// latitudes beyond the Web Mercator limit.
#[derive(Clone, Copy, PartialEq)]
pub struct TileFraction {
	pub x: f64,
	pub y: f64,
	pub z: u8,
}

impl TileFraction {
	/// Projects `lon`, `lat` (degrees) into the grid of zoom level `z`.
	///
	/// ```
	/// use tilebelt_core::TileFraction;
	///
	/// let fraction = TileFraction::from_geo(-95.93965530395508, 41.26000108568697, 9);
	/// assert_eq!(fraction.floor().as_array(), [119, 191, 9]);
	/// ```
	#[must_use]
	pub fn from_geo(lon: f64, lat: f64, z: u8) -> TileFraction {
		point_to_tile_fraction(lon, lat, z)
	}

	/// The tile containing this position.
	///
	/// Coordinates outside the grid saturate to the nearest edge tile, NaN
	/// maps to 0.
	#[must_use]
	pub fn floor(&self) -> TileCoord {
		let max = ((1u64 << self.z.min(crate::MAX_ZOOM)) - 1) as f64;
		TileCoord {
			x: self.x.floor().clamp(0.0, max) as u32,
			y: self.y.floor().clamp(0.0, max) as u32,
			z: self.z,
		}
	}

	/// The position as `[x, y, z]`.
	#[must_use]
	pub fn as_array(&self) -> [f64; 3] {
		[self.x, self.y, f64::from(self.z)]
	}
}

impl Debug for TileFraction {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "TileFraction({}, [{}, {}])", self.z, self.x, self.y)
	}
}
