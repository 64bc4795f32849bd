use anyhow::{Context, Result};
use clap::Args;
use tilebelt_core::TileCoord;

#[derive(Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
pub struct Subcommand {
	/// quadkey made of the digits 0 to 3, one per zoom level
	#[arg(required = true)]
	quadkey: String,
}

pub fn run(arguments: &Subcommand) -> Result<String> {
	let tile = TileCoord::from_quadkey(arguments.quadkey.trim())
		.with_context(|| format!("Failed to decode quadkey {:?}", arguments.quadkey))?;
	Ok(tile.to_string())
}
