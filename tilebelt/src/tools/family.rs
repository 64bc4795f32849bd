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

pub fn run_parent(arguments: &Subcommand) -> Result<String> {
	Ok(arguments.tile.parent()?.to_string())
}

pub fn run_children(arguments: &Subcommand) -> Result<String> {
	Ok(lines(&arguments.tile.children()?))
}

pub fn run_siblings(arguments: &Subcommand) -> Result<String> {
	Ok(lines(&arguments.tile.siblings()?))
}

fn lines(tiles: &[TileCoord]) -> String {
	tiles.iter().map(TileCoord::to_string).collect::<Vec<_>>().join("\n")
}
