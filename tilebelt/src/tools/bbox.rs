use anyhow::Result;
use clap::Args;
use tilebelt_core::TileCoord;

#[derive(Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
pub struct Subcommand {
	/// tile as z/x/y
	#[arg(required = true)]
	tile: TileCoord,
}

pub fn run(arguments: &Subcommand) -> Result<String> {
	Ok(arguments.tile.to_geo_bbox().as_string_json())
}
