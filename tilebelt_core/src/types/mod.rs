//! Value types: tiles, fractional tiles, bounding boxes, polygons and constants.

mod constants;
pub use constants::*;

mod geo_bbox;
pub use geo_bbox::*;

mod geo_polygon;
pub use geo_polygon::*;

mod tile_coord;
pub use tile_coord::*;

mod tile_fraction;
pub use tile_fraction::*;
