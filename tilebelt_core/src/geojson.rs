//! Geographic extent and outline of a tile.

use crate::{GeoBBox, GeoPolygon, TileCoord, tile_x_to_lon, tile_y_to_lat};

/// The `[west, south, east, north]` extent of `tile` in degrees.
///
/// ```
/// use tilebelt_core::{TileCoord, tile_to_bbox};
///
/// let bbox = tile_to_bbox(&TileCoord::new(0, 0, 1).unwrap());
/// assert_eq!(bbox.west, -180.0);
/// assert_eq!(bbox.south, 0.0);
/// assert_eq!(bbox.east, 0.0);
/// ```
#[must_use]
pub fn tile_to_bbox(tile: &TileCoord) -> GeoBBox {
	let x = f64::from(tile.x);
	let y = f64::from(tile.y);
	GeoBBox {
		west: tile_x_to_lon(x, tile.z),
		south: tile_y_to_lat(y + 1.0, tile.z),
		east: tile_x_to_lon(x + 1.0, tile.z),
		north: tile_y_to_lat(y, tile.z),
	}
}

/// The outline of `tile` as a GeoJSON polygon.
///
/// The ring starts and ends at the north-west corner and runs
/// NW, SW, SE, NE, NW.
#[must_use]
pub fn tile_to_geojson(tile: &TileCoord) -> GeoPolygon {
	let GeoBBox {
		west,
		south,
		east,
		north,
	} = tile_to_bbox(tile);
	GeoPolygon::from_ring(vec![
		[west, north],
		[west, south],
		[east, south],
		[east, north],
		[west, north],
	])
}
