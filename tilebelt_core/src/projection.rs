//! Spherical Web Mercator projection between degrees and the tile grid.

use crate::{D2R, MAX_ZOOM, R2D, TileCoord, TileFraction};
use std::f64::consts::PI;

/// Number of tiles along one axis at zoom level `z`, as `f64`.
#[inline]
fn grid_size(z: u8) -> f64 {
	2.0f64.powi(i32::from(z))
}

/// Projects `lon`, `lat` (degrees) into the tile grid of zoom level `z`.
///
/// `x` is wrapped into `[0, 2^z)`, so longitudes outside `[-180, 180]` land
/// on the matching tile column. `y` is not wrapped: latitudes beyond the
/// Mercator limit (about ±85.0511°) produce a `y` outside the grid.
///
/// Zoom levels above [`MAX_ZOOM`] are clamped to it.
///
/// ```
/// use tilebelt_core::point_to_tile_fraction;
///
/// let fraction = point_to_tile_fraction(-95.93965530395508, 41.26000108568697, 9);
/// assert_eq!(fraction.z, 9);
/// assert!((fraction.x - 119.552490234375).abs() < 1e-9);
/// ```
#[must_use]
pub fn point_to_tile_fraction(lon: f64, lat: f64, z: u8) -> TileFraction {
	let z = z.min(MAX_ZOOM);
	let sin = (lat * D2R).sin();
	let z2 = grid_size(z);
	let x = z2 * (lon / 360.0 + 0.5);
	let y = z2 * (0.5 - (0.25 * ((1.0 + sin) / (1.0 - sin)).ln()) / PI);

	// wrap tile x
	let mut x = x % z2;
	if x < 0.0 {
		x += z2;
	}

	TileFraction { x, y, z }
}

/// The tile containing `lon`, `lat` (degrees) at zoom level `z`.
///
/// Rows beyond the Mercator limit saturate to the first or last row, see
/// [`TileFraction::floor`]. Zoom levels above [`MAX_ZOOM`] are clamped to it.
///
/// ```
/// use tilebelt_core::point_to_tile;
///
/// assert_eq!(point_to_tile(-185.0, 85.0, 2).as_array(), [3, 0, 2]);
/// ```
#[must_use]
pub fn point_to_tile(lon: f64, lat: f64, z: u8) -> TileCoord {
	point_to_tile_fraction(lon, lat, z).floor()
}

/// Longitude of the western edge of tile column `x` at zoom level `z`.
#[must_use]
pub fn tile_x_to_lon(x: f64, z: u8) -> f64 {
	x / grid_size(z) * 360.0 - 180.0
}

/// Latitude of the northern edge of tile row `y` at zoom level `z`.
#[must_use]
pub fn tile_y_to_lat(y: f64, z: u8) -> f64 {
	let n = PI - 2.0 * PI * y / grid_size(z);
	R2D * (0.5 * (n.exp() - (-n).exp())).atan()
}
