//! Smallest single tile covering a bounding box.
//!
//! Both corners of the box are projected into the zoom 32 grid, where a tile
//! column or row is a 32 bit number whose leading `z` bits are the column or
//! row at zoom `z`. The covering tile lives at the deepest zoom level up to
//! which the corners share that prefix.

use crate::{GeoBBox, MAX_BBOX_ZOOM, TileCoord, point_to_tile};

/// Reference zoom level the corners are projected to.
const REFERENCE_ZOOM: u8 = 32;

/// Returns the smallest tile, at zoom 0 to 28, that fully contains `bbox`.
///
/// A box collapsed to a point resolves to zoom 28. Boxes spanning (nearly)
/// the whole world resolve to the root tile.
///
/// ```
/// use tilebelt_core::{GeoBBox, bbox_to_tile};
///
/// let bbox = GeoBBox::new(-77.04615354537964, 38.899967510782346, -77.03664779663086, 38.90728142481329);
/// assert_eq!(bbox_to_tile(&bbox).to_string(), "15/9371/12534");
/// ```
#[must_use]
pub fn bbox_to_tile(bbox: &GeoBBox) -> TileCoord {
	let min = point_to_tile(bbox.west, bbox.south, REFERENCE_ZOOM);
	let max = point_to_tile(bbox.east, bbox.north, REFERENCE_ZOOM);

	let z = bbox_zoom(&min, &max);
	let tile = if z == 0 {
		TileCoord { x: 0, y: 0, z: 0 }
	} else {
		let shift = REFERENCE_ZOOM - z;
		TileCoord {
			x: min.x >> shift,
			y: min.y >> shift,
			z,
		}
	};

	log::trace!("bbox {bbox:?} resolves to tile {tile}");
	tile
}

/// The number of leading bits both corner columns and both corner rows share,
/// capped at [`MAX_BBOX_ZOOM`].
fn bbox_zoom(min: &TileCoord, max: &TileCoord) -> u8 {
	for z in 0..MAX_BBOX_ZOOM {
		let mask = 1u32 << (REFERENCE_ZOOM - (z + 1));
		if (min.x & mask) != (max.x & mask) || (min.y & mask) != (max.y & mask) {
			return z;
		}
	}
	MAX_BBOX_ZOOM
}
