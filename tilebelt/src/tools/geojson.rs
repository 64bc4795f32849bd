use anyhow::Result;
use clap::Args;
use tilebelt_core::TileCoord;

#[derive(Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
pub struct Subcommand {
	/// tile as z/x/y
	#[arg(required = true)]
	tile: TileCoord,

	/// indent the output
	#[arg(long, short)]
	pretty: bool,
}

pub fn run(arguments: &Subcommand) -> Result<String> {
	let polygon = arguments.tile.to_geojson();
	Ok(if arguments.pretty {
		serde_json::to_string_pretty(&polygon)?
	} else {
		serde_json::to_string(&polygon)?
	})
}
