//! Tile addresses in a Web Mercator tile pyramid
//!
//! This module provides the [`TileCoord`] type, an `(x, y, z)` address of a node in
//! the quadtree used by slippy maps. It includes methods for:
//! - Creating and validating tile coordinates
//! - Converting between tiles, geographic coordinates, bounding boxes and quadkeys
//! - Walking the quadtree (parent, children, siblings)
//!
//! # Examples
//!
//! ```
//! use tilebelt_core::TileCoord;
//!
//! let tile = TileCoord::new(292, 391, 10).unwrap();
//! assert_eq!(tile.to_quadkey(), "0320100322");
//! assert_eq!(tile.parent().unwrap(), TileCoord::new(146, 195, 9).unwrap());
//! assert_eq!(tile.to_string(), "10/292/391");
//! ```

use crate::{
	GeoBBox, GeoPolygon, MAX_ZOOM, TileError, bbox_to_tile, get_children, get_parent, get_siblings, point_to_tile,
	quadkey_to_tile, tile_to_bbox, tile_to_geojson, tile_to_quadkey,
};
use serde::{Deserialize, Serialize};
use std::{
	fmt::{self, Debug, Display},
	str::FromStr,
};

/// A tile address with column `x`, row `y` and zoom level `z`.
///
/// Rows count from the north edge of the map (XYZ scheme). A valid tile has
/// `z <= 32` and `x, y < 2^z`. Serialized as `[x, y, z]`.
#[derive(Eq, PartialEq, Clone, Copy, Hash, Serialize, Deserialize)]
#[serde(into = "[u32; 3]", try_from = "[u32; 3]")]
pub struct TileCoord {
	/// The column of the tile.
	pub x: u32,
	/// The row of the tile.
	pub y: u32,
	/// The zoom level of the tile.
	pub z: u8,
}

impl TileCoord {
	/// Create a new `TileCoord`, checking that it addresses a tile of the grid.
	///
	/// # Errors
	/// Returns [`TileError::InvalidZoom`] if `z` > 32 and
	/// [`TileError::OutOfBounds`] if `x` or `y` is not below `2^z`.
	pub fn new(x: u32, y: u32, z: u8) -> Result<TileCoord, TileError> {
		if z > MAX_ZOOM {
			return Err(TileError::InvalidZoom {
				zoom: usize::from(z),
				reason: "tiles can not be deeper than zoom level 32",
			});
		}
		let max = (1u64 << z) - 1;
		if u64::from(x) > max || u64::from(y) > max {
			return Err(TileError::OutOfBounds { x, y, z });
		}
		Ok(TileCoord { x, y, z })
	}

	/// The tile containing the point `lon`, `lat` (degrees) at zoom level `z`.
	///
	/// See [`point_to_tile`] for the handling of out of range coordinates.
	///
	/// ```
	/// use tilebelt_core::TileCoord;
	///
	/// let tile = TileCoord::from_geo(-77.03239381313323, 38.91326516559442, 10);
	/// assert_eq!(tile.as_array(), [292, 391, 10]);
	/// ```
	#[must_use]
	pub fn from_geo(lon: f64, lat: f64, z: u8) -> TileCoord {
		point_to_tile(lon, lat, z)
	}

	/// Decode a quadkey, see [`quadkey_to_tile`].
	pub fn from_quadkey(quadkey: &str) -> Result<TileCoord, TileError> {
		quadkey_to_tile(quadkey)
	}

	/// The smallest tile fully containing `bbox`, see [`bbox_to_tile`].
	#[must_use]
	pub fn from_geo_bbox(bbox: &GeoBBox) -> TileCoord {
		bbox_to_tile(bbox)
	}

	#[must_use]
	pub fn to_quadkey(&self) -> String {
		tile_to_quadkey(self)
	}

	/// Geographic extent of this tile.
	#[must_use]
	pub fn to_geo_bbox(&self) -> GeoBBox {
		tile_to_bbox(self)
	}

	/// Outline of this tile as a GeoJSON polygon.
	#[must_use]
	pub fn to_geojson(&self) -> GeoPolygon {
		tile_to_geojson(self)
	}

	/// The tile one zoom level up that contains this one.
	///
	/// # Errors
	/// Fails with [`TileError::InvalidZoom`] for the root tile.
	pub fn parent(&self) -> Result<TileCoord, TileError> {
		get_parent(self)
	}

	/// The four tiles one zoom level down, ordered NW, NE, SE, SW.
	///
	/// # Errors
	/// Fails with [`TileError::InvalidZoom`] at zoom level 32.
	pub fn children(&self) -> Result<[TileCoord; 4], TileError> {
		get_children(self)
	}

	/// The four children of this tile's parent, including the tile itself.
	///
	/// # Errors
	/// Fails with [`TileError::InvalidZoom`] for the root tile.
	pub fn siblings(&self) -> Result<[TileCoord; 4], TileError> {
		get_siblings(self)
	}

	/// The largest valid `x` or `y` at this zoom level, `2^z - 1`.
	///
	/// ```
	/// use tilebelt_core::TileCoord;
	///
	/// assert_eq!(TileCoord::new(10, 15, 5).unwrap().max_value(), 31);
	/// ```
	#[must_use]
	pub fn max_value(&self) -> u32 {
		((1u64 << self.z) - 1) as u32
	}

	/// The tile as `[x, y, z]`.
	#[must_use]
	pub fn as_array(&self) -> [u32; 3] {
		[self.x, self.y, u32::from(self.z)]
	}
}

/// Custom `Debug` format as `TileCoord(z, [x, y])` for readability.
impl Debug for TileCoord {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "TileCoord({}, [{}, {}])", self.z, self.x, self.y)
	}
}

/// Formats the tile as the slippy map path `z/x/y`.
impl Display for TileCoord {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}/{}/{}", self.z, self.x, self.y)
	}
}

impl FromStr for TileCoord {
	type Err = TileError;

	/// Parses a slippy map path `z/x/y` and validates the result.
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let parts: Vec<&str> = s.trim().split('/').collect();
		if parts.len() != 3 {
			return Err(TileError::Parse(format!("tile {s:?} must have the form z/x/y")));
		}
		let number = |name: &str, value: &str| {
			value
				.trim()
				.parse::<u32>()
				.map_err(|e| TileError::Parse(format!("{name} of tile {s:?} is not a valid number: {e}")))
		};
		let z = number("z", parts[0])?;
		let x = number("x", parts[1])?;
		let y = number("y", parts[2])?;
		let z = u8::try_from(z).map_err(|_| TileError::InvalidZoom {
			zoom: z as usize,
			reason: "tiles can not be deeper than zoom level 32",
		})?;
		TileCoord::new(x, y, z)
	}
}

impl From<TileCoord> for [u32; 3] {
	fn from(tile: TileCoord) -> Self {
		tile.as_array()
	}
}

impl TryFrom<[u32; 3]> for TileCoord {
	type Error = TileError;

	/// Builds a tile from `[x, y, z]`.
	fn try_from([x, y, z]: [u32; 3]) -> Result<Self, Self::Error> {
		let z = u8::try_from(z).map_err(|_| TileError::InvalidZoom {
			zoom: z as usize,
			reason: "tiles can not be deeper than zoom level 32",
		})?;
		TileCoord::new(x, y, z)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use std::{
		collections::hash_map::DefaultHasher,
		hash::{Hash, Hasher},
	};

	#[test]
	fn partial_eq() {
		let c = TileCoord::new(2, 2, 2).unwrap();
		assert!(c.eq(&c));
		assert!(c.eq(&c.clone()));
		assert!(c.ne(&TileCoord::new(3, 2, 2).unwrap()));
		assert!(c.ne(&TileCoord::new(2, 3, 2).unwrap()));
		assert!(c.ne(&TileCoord::new(2, 2, 3).unwrap()));
	}

	#[test]
	fn equal_tiles_hash_equally() {
		let hash = |tile: TileCoord| {
			let mut hasher = DefaultHasher::new();
			tile.hash(&mut hasher);
			hasher.finish()
		};
		assert_eq!(
			hash(TileCoord::new(5, 10, 10).unwrap()),
			hash(TileCoord::new(5, 10, 10).unwrap())
		);
	}

	#[rstest]
	#[case(0, 0, 0)]
	#[case(1, 1, 1)]
	#[case(1023, 0, 10)]
	#[case(u32::MAX, u32::MAX, 32)]
	fn new_accepts_valid_tiles(#[case] x: u32, #[case] y: u32, #[case] z: u8) {
		let tile = TileCoord::new(x, y, z).unwrap();
		assert_eq!(tile.as_array(), [x, y, u32::from(z)]);
	}

	#[rstest]
	#[case(1, 0, 0)]
	#[case(0, 1, 0)]
	#[case(4, 0, 2)]
	#[case(0, 1024, 10)]
	fn new_rejects_out_of_bounds(#[case] x: u32, #[case] y: u32, #[case] z: u8) {
		assert_eq!(TileCoord::new(x, y, z), Err(TileError::OutOfBounds { x, y, z }));
	}

	#[test]
	fn new_rejects_deep_zoom() {
		assert!(matches!(
			TileCoord::new(0, 0, 33),
			Err(TileError::InvalidZoom { zoom: 33, .. })
		));
	}

	#[rstest]
	#[case(0, 0)]
	#[case(5, 31)]
	#[case(32, u32::MAX)]
	fn max_value(#[case] z: u8, #[case] expected: u32) {
		assert_eq!(TileCoord::new(0, 0, z).unwrap().max_value(), expected);
	}

	#[test]
	fn debug_and_display_format() {
		let tile = TileCoord::new(7, 8, 4).unwrap();
		assert_eq!(format!("{tile:?}"), "TileCoord(4, [7, 8])");
		assert_eq!(tile.to_string(), "4/7/8");
	}

	#[rstest]
	#[case("10/5/10", [5, 10, 10])]
	#[case(" 0/0/0 ", [0, 0, 0])]
	#[case("28/71582788/125964677", [71582788, 125964677, 28])]
	fn parse_tile(#[case] input: &str, #[case] expected: [u32; 3]) {
		let tile: TileCoord = input.parse().unwrap();
		assert_eq!(tile.as_array(), expected);
	}

	#[rstest]
	#[case("10/5")]
	#[case("10/5/10/1")]
	#[case("a/5/10")]
	#[case("10/-5/10")]
	fn parse_tile_malformed(#[case] input: &str) {
		assert!(matches!(input.parse::<TileCoord>(), Err(TileError::Parse(_))));
	}

	#[test]
	fn parse_tile_validates() {
		assert!(matches!(
			"2/4/0".parse::<TileCoord>(),
			Err(TileError::OutOfBounds { x: 4, y: 0, z: 2 })
		));
		assert!(matches!(
			"300/0/0".parse::<TileCoord>(),
			Err(TileError::InvalidZoom { zoom: 300, .. })
		));
	}

	#[test]
	fn array_conversion() {
		let tile = TileCoord::try_from([5, 10, 10]).unwrap();
		assert_eq!(tile, TileCoord { x: 5, y: 10, z: 10 });
		assert_eq!(<[u32; 3]>::from(tile), [5, 10, 10]);
		assert!(TileCoord::try_from([0, 0, 256]).is_err());
	}

	#[test]
	fn serde_as_array() {
		let tile = TileCoord::new(11, 3, 8).unwrap();
		assert_eq!(serde_json::to_string(&tile).unwrap(), "[11,3,8]");
		assert_eq!(serde_json::from_str::<TileCoord>("[11,3,8]").unwrap(), tile);
		assert!(serde_json::from_str::<TileCoord>("[4,0,2]").is_err());
	}

	#[test]
	fn delegating_methods() {
		let tile = TileCoord::new(5, 10, 10).unwrap();
		assert_eq!(tile.to_quadkey(), tile_to_quadkey(&tile));
		assert_eq!(TileCoord::from_quadkey(&tile.to_quadkey()).unwrap(), tile);
		assert_eq!(tile.to_geo_bbox(), tile_to_bbox(&tile));
		assert_eq!(tile.to_geojson(), tile_to_geojson(&tile));
		assert_eq!(tile.parent().unwrap(), TileCoord::new(2, 5, 9).unwrap());
		assert_eq!(tile.children().unwrap()[0], TileCoord::new(10, 20, 11).unwrap());
		assert!(tile.siblings().unwrap().contains(&tile));
		// the east and south edges touch the neighbouring tiles
		assert!(TileCoord::from_geo_bbox(&tile.to_geo_bbox()).z <= 10);
	}
}
