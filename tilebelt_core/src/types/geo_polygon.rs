use serde::{Deserialize, Serialize};

/// A GeoJSON Polygon geometry (RFC 7946, section 3.1.6).
///
/// Serializes as `{"type":"Polygon","coordinates":[[[lon,lat],...]]}`. Each
/// ring is closed: its first position is repeated as the last one.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename = "Polygon")]
pub struct GeoPolygon {
	pub coordinates: Vec<Vec<[f64; 2]>>,
}

impl GeoPolygon {
	/// A polygon made of a single exterior ring.
	#[must_use]
	pub fn from_ring(ring: Vec<[f64; 2]>) -> GeoPolygon {
		GeoPolygon {
			coordinates: vec![ring],
		}
	}

	/// The exterior ring.
	#[must_use]
	pub fn exterior(&self) -> &[[f64; 2]] {
		self.coordinates.first().map_or(&[], Vec::as_slice)
	}
}
