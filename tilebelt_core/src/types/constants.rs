//! Web Mercator and tile grid constants.

use std::f64::consts::PI;

/// Degrees to radians.
pub const D2R: f64 = PI / 180.0;

/// Radians to degrees.
pub const R2D: f64 = 180.0 / PI;

/// Deepest zoom level a [`TileCoord`](crate::TileCoord) can address.
///
/// At zoom 32 the grid has `2^32` columns and rows, which is exactly the
/// range of `u32`.
pub const MAX_ZOOM: u8 = 32;

/// Deepest zoom level [`bbox_to_tile`](crate::bbox_to_tile) resolves to.
pub const MAX_BBOX_ZOOM: u8 = 28;
