mod tools;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_verbosity_flag::{ErrorLevel, Verbosity};

// Define the command-line interface using the clap crate
#[derive(Parser, Debug)]
#[command(
	author,
	version,
	about,
	long_about = None,
	propagate_version = true,
	disable_help_subcommand = true,
)]
struct Cli {
	#[command(subcommand)]
	command: Commands,

	#[command(flatten)]
	verbose: Verbosity<ErrorLevel>,
}

// Tiles are given as z/x/y, bounding boxes as west,south,east,north
#[derive(Subcommand, Debug)]
enum Commands {
	/// Find the tile containing a point
	Point(tools::point::Subcommand),

	/// Encode a tile as quadkey
	Quadkey(tools::quadkey::Subcommand),

	/// Decode a quadkey into a tile
	Tile(tools::tile::Subcommand),

	/// Print the bounding box of a tile
	Bbox(tools::bbox::Subcommand),

	/// Print the outline of a tile as GeoJSON polygon
	Geojson(tools::geojson::Subcommand),

	#[command(alias = "bbox-to-tile")]
	/// Find the smallest tile covering a bounding box
	Cover(tools::cover::Subcommand),

	/// Print the parent of a tile
	Parent(tools::family::Subcommand),

	/// Print the four children of a tile
	Children(tools::family::Subcommand),

	/// Print a tile and its three siblings
	Siblings(tools::family::Subcommand),
}

fn main() -> Result<()> {
	let cli = Cli::parse();

	// Initialize logger and set log level based on verbosity flag
	env_logger::Builder::new()
		.filter_level(cli.verbose.log_level_filter())
		.format_timestamp(None)
		.init();

	log::debug!("{cli:?}");
	println!("{}", run(&cli)?);
	Ok(())
}

fn run(cli: &Cli) -> Result<String> {
	match &cli.command {
		Commands::Point(arguments) => tools::point::run(arguments),
		Commands::Quadkey(arguments) => tools::quadkey::run(arguments),
		Commands::Tile(arguments) => tools::tile::run(arguments),
		Commands::Bbox(arguments) => tools::bbox::run(arguments),
		Commands::Geojson(arguments) => tools::geojson::run(arguments),
		Commands::Cover(arguments) => tools::cover::run(arguments),
		Commands::Parent(arguments) => tools::family::run_parent(arguments),
		Commands::Children(arguments) => tools::family::run_children(arguments),
		Commands::Siblings(arguments) => tools::family::run_siblings(arguments),
	}
}
