//! Web Mercator tile math for slippy map pyramids.
//!
//! Converts between `(x, y, z)` tile addresses, geographic bounding boxes and
//! quadkeys, walks the quadtree and finds the smallest tile covering a box.
//! Every operation is a pure function over small `Copy` values.
//!
//! ```
//! use tilebelt_core::{GeoBBox, TileCoord, bbox_to_tile, point_to_tile, tile_to_quadkey};
//!
//! let tile = point_to_tile(-77.03239381313323, 38.91326516559442, 10);
//! assert_eq!(tile, TileCoord::new(292, 391, 10).unwrap());
//! assert_eq!(tile_to_quadkey(&tile), "0320100322");
//!
//! let bbox = GeoBBox::new(-84.72656249999999, 11.178401873711785, -5.625, 61.60639637138628);
//! assert_eq!(bbox_to_tile(&bbox).as_array(), [1, 1, 2]);
//! ```

pub mod error;
pub use error::TileError;

mod geojson;
pub use geojson::*;

mod navigation;
pub use navigation::*;

mod projection;
pub use projection::*;

mod quadkey;
pub use quadkey::*;

mod resolver;
pub use resolver::*;

pub mod types;
pub use types::*;
