pub mod bbox;
pub mod cover;
pub mod family;
pub mod geojson;
pub mod point;
pub mod quadkey;
pub mod tile;
