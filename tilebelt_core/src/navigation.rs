//! Quadtree navigation: parents, children, siblings and tile membership.

use crate::{MAX_ZOOM, TileCoord, TileError};

/// The four tiles one zoom level down covering `tile`, ordered NW, NE, SE, SW.
///
/// # Errors
/// Fails with [`TileError::InvalidZoom`] at zoom level 32, whose children do
/// not fit into the `u32` grid.
///
/// ```
/// use tilebelt_core::{TileCoord, get_children};
///
/// let children = get_children(&TileCoord::new(0, 0, 0).unwrap()).unwrap();
/// assert_eq!(children.map(|t| t.as_array()), [[0, 0, 1], [1, 0, 1], [1, 1, 1], [0, 1, 1]]);
/// ```
pub fn get_children(tile: &TileCoord) -> Result<[TileCoord; 4], TileError> {
	if tile.z >= MAX_ZOOM {
		return Err(TileError::InvalidZoom {
			zoom: usize::from(tile.z),
			reason: "tiles at the deepest zoom level have no children",
		});
	}
	let (x, y, z) = (tile.x * 2, tile.y * 2, tile.z + 1);
	Ok([
		TileCoord { x, y, z },
		TileCoord { x: x + 1, y, z },
		TileCoord { x: x + 1, y: y + 1, z },
		TileCoord { x, y: y + 1, z },
	])
}

/// The tile one zoom level up containing `tile`.
///
/// # Errors
/// Fails with [`TileError::InvalidZoom`] for the root tile.
pub fn get_parent(tile: &TileCoord) -> Result<TileCoord, TileError> {
	if tile.z == 0 {
		return Err(TileError::InvalidZoom {
			zoom: 0,
			reason: "the root tile has no parent",
		});
	}
	Ok(TileCoord {
		x: tile.x >> 1,
		y: tile.y >> 1,
		z: tile.z - 1,
	})
}

/// All children of `tile`'s parent. The result contains `tile` itself.
///
/// # Errors
/// Fails with [`TileError::InvalidZoom`] for the root tile.
pub fn get_siblings(tile: &TileCoord) -> Result<[TileCoord; 4], TileError> {
	get_children(&get_parent(tile)?)
}

/// Component-wise equality of two tiles.
#[must_use]
pub fn tiles_equal(a: &TileCoord, b: &TileCoord) -> bool {
	a.x == b.x && a.y == b.y && a.z == b.z
}

/// Whether `tiles` contains `tile`. `tiles` may be unordered and contain duplicates.
#[must_use]
pub fn has_tile(tiles: &[TileCoord], tile: &TileCoord) -> bool {
	tiles.iter().any(|t| tiles_equal(t, tile))
}

/// Whether all four siblings of `tile` (including itself) are in `tiles`.
///
/// The root tile has no siblings, so this is `false` at zoom level 0.
#[must_use]
pub fn has_siblings(tile: &TileCoord, tiles: &[TileCoord]) -> bool {
	match get_siblings(tile) {
		Ok(siblings) => siblings.iter().all(|sibling| has_tile(tiles, sibling)),
		Err(_) => false,
	}
}
