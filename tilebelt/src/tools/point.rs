use anyhow::{Result, ensure};
use clap::Args;
use tilebelt_core::{MAX_ZOOM, TileFraction};

#[derive(Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true, allow_negative_numbers = true)]
pub struct Subcommand {
	/// longitude in degrees, wrapped around the antimeridian
	#[arg(required = true)]
	lon: f64,

	/// latitude in degrees
	#[arg(required = true)]
	lat: f64,

	/// zoom level, 0 to 32
	#[arg(required = true)]
	zoom: u8,

	/// print the unrounded position in the tile grid as [x,y,z]
	#[arg(long, short)]
	fraction: bool,
}

pub fn run(arguments: &Subcommand) -> Result<String> {
	ensure!(
		arguments.zoom <= MAX_ZOOM,
		"zoom ({}) must be <= {MAX_ZOOM}",
		arguments.zoom
	);

	let fraction = TileFraction::from_geo(arguments.lon, arguments.lat, arguments.zoom);
	log::debug!("point ({}, {}) projects to {fraction:?}", arguments.lon, arguments.lat);

	if arguments.fraction {
		let [x, y, z] = fraction.as_array();
		Ok(format!("[{x},{y},{z}]"))
	} else {
		Ok(fraction.floor().to_string())
	}
}
