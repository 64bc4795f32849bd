use anyhow::Result;
use clap::Args;
use tilebelt_core::GeoBBox;

#[derive(Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
pub struct Subcommand {
	/// bounding box as west,south,east,north in degrees
	#[arg(required = true, allow_hyphen_values = true)]
	bbox: GeoBBox,
}

pub fn run(arguments: &Subcommand) -> Result<String> {
	let tile = arguments.bbox.to_tile();
	log::debug!("smallest tile covering {:?} is {tile:?}", arguments.bbox);
	Ok(tile.to_string())
}
