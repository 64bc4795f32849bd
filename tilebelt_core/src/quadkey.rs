//! Quadkeys: one base-4 digit per zoom level, most significant first.
//!
//! Digit `d` at zoom level `z` combines bit `z - 1` of the column and row:
//! `d = bit(x) + 2 * bit(y)`, so `0` is the north-west, `1` the north-east,
//! `2` the south-west and `3` the south-east quadrant.

use crate::{MAX_ZOOM, TileCoord, TileError};

/// Encodes a tile as its quadkey. The root tile encodes as `""`.
///
/// ```
/// use tilebelt_core::{TileCoord, tile_to_quadkey};
///
/// assert_eq!(tile_to_quadkey(&TileCoord::new(11, 3, 8).unwrap()), "00001033");
/// ```
#[must_use]
pub fn tile_to_quadkey(tile: &TileCoord) -> String {
	let mut quadkey = String::with_capacity(usize::from(tile.z));
	for z in (1..=tile.z).rev() {
		let mask = 1u32 << (z - 1);
		let mut digit = b'0';
		if tile.x & mask != 0 {
			digit += 1;
		}
		if tile.y & mask != 0 {
			digit += 2;
		}
		quadkey.push(char::from(digit));
	}
	quadkey
}

/// Decodes a quadkey into its tile. The zoom level is the quadkey's length.
///
/// # Errors
/// [`TileError::InvalidQuadkeyDigit`] for any character outside `0..=3` and
/// [`TileError::InvalidZoom`] for quadkeys longer than 32 digits.
///
/// ```
/// use tilebelt_core::quadkey_to_tile;
///
/// assert_eq!(quadkey_to_tile("03").unwrap().as_array(), [1, 1, 2]);
/// assert!(quadkey_to_tile("04").is_err());
/// ```
pub fn quadkey_to_tile(quadkey: &str) -> Result<TileCoord, TileError> {
	let len = quadkey.chars().count();
	if len > usize::from(MAX_ZOOM) {
		return Err(TileError::InvalidZoom {
			zoom: len,
			reason: "quadkeys can not be longer than 32 digits",
		});
	}

	let mut x = 0u32;
	let mut y = 0u32;
	for (position, digit) in quadkey.chars().enumerate() {
		let mask = 1u32 << (len - 1 - position);
		match digit {
			'0' => {}
			'1' => x |= mask,
			'2' => y |= mask,
			'3' => {
				x |= mask;
				y |= mask;
			}
			_ => return Err(TileError::InvalidQuadkeyDigit { digit, position }),
		}
	}

	Ok(TileCoord { x, y, z: len as u8 })
}
