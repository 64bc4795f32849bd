use assert_cmd::{Command, cargo};
use predicates::str;
use rstest::rstest;

fn tilebelt() -> Command {
	Command::new(cargo::cargo_bin!("tilebelt"))
}

#[test]
fn command() -> Result<(), Box<dyn std::error::Error>> {
	tilebelt()
		.assert()
		.failure()
		.code(2)
		.stdout(str::is_empty())
		.stderr(str::contains("Usage: tilebelt [OPTIONS] <COMMAND>"));
	Ok(())
}

#[rstest]
#[case("point", "[OPTIONS] <LON> <LAT> <ZOOM>")]
#[case("quadkey", "[OPTIONS] <TILE>")]
#[case("tile", "[OPTIONS] <QUADKEY>")]
#[case("bbox", "[OPTIONS] <TILE>")]
#[case("geojson", "[OPTIONS] <TILE>")]
#[case("cover", "[OPTIONS] <BBOX>")]
#[case("parent", "[OPTIONS] <TILE>")]
#[case("children", "[OPTIONS] <TILE>")]
#[case("siblings", "[OPTIONS] <TILE>")]
fn subcommand(#[case] sub_command: &str, #[case] usage: &str) -> Result<(), Box<dyn std::error::Error>> {
	tilebelt()
		.arg(sub_command)
		.assert()
		.failure()
		.code(2)
		.stdout(str::is_empty())
		.stderr(str::contains(format!("Usage: tilebelt {sub_command} {usage}")));
	Ok(())
}

#[rstest]
#[case(&["point", "-77.03239381313323", "38.91326516559442", "10"], "10/292/391\n")]
#[case(&["point", "-175", "-95", "2"], "2/0/3\n")]
#[case(&["quadkey", "10/292/391"], "0320100322\n")]
#[case(&["tile", "00001033"], "8/11/3\n")]
#[case(&["cover", "-77.04615354537964,38.899967510782346,-77.03664779663086,38.90728142481329"], "15/9371/12534\n")]
#[case(&["cover", "[-0.000001,-85,1000000,85]"], "0/0/0\n")]
#[case(&["cover", "170,-5,-170,5"], "0/0/0\n")]
#[case(&["parent", "10/5/10"], "9/2/5\n")]
#[case(&["children", "0/0/0"], "1/0/0\n1/1/0\n1/1/1\n1/0/1\n")]
fn prints_result(#[case] args: &[&str], #[case] expected: &str) -> Result<(), Box<dyn std::error::Error>> {
	tilebelt()
		.args(args)
		.assert()
		.success()
		.stdout(expected.to_string())
		.stderr(str::is_empty());
	Ok(())
}

#[test]
fn geojson_is_valid_json() -> Result<(), Box<dyn std::error::Error>> {
	let output = tilebelt().args(["geojson", "10/5/10"]).assert().success().get_output().stdout.clone();
	let json: serde_json::Value = serde_json::from_slice(&output)?;
	assert_eq!(json["type"], "Polygon");
	assert_eq!(json["coordinates"][0][0][0], -178.2421875);
	assert_eq!(json["coordinates"][0][0], json["coordinates"][0][4]);
	Ok(())
}

#[rstest]
#[case(&["tile", "0123x"], "invalid quadkey digit 'x' at position 4")]
#[case(&["parent", "0/0/0"], "the root tile has no parent")]
#[case(&["children", "32/0/0"], "tiles at the deepest zoom level have no children")]
fn reports_errors(#[case] args: &[&str], #[case] message: &str) -> Result<(), Box<dyn std::error::Error>> {
	tilebelt()
		.args(args)
		.assert()
		.failure()
		.code(1)
		.stdout(str::is_empty())
		.stderr(str::contains(message));
	Ok(())
}

#[test]
fn rejects_malformed_tile() -> Result<(), Box<dyn std::error::Error>> {
	tilebelt()
		.args(["bbox", "10/5"])
		.assert()
		.failure()
		.code(2)
		.stderr(str::contains("must have the form z/x/y"));
	Ok(())
}

#[test]
fn quiet_by_default() -> Result<(), Box<dyn std::error::Error>> {
	tilebelt()
		.args(["cover", "-10,-10,10,10"])
		.assert()
		.success()
		.stdout("0/0/0\n")
		.stderr(str::is_empty());
	Ok(())
}

#[test]
fn trace_logging() -> Result<(), Box<dyn std::error::Error>> {
	tilebelt()
		.args([
			"-vvvv",
			"cover",
			"-77.04615354537964,38.899967510782346,-77.03664779663086,38.90728142481329",
		])
		.assert()
		.success()
		.stdout("15/9371/12534\n")
		.stderr(str::contains("resolves to tile 15/9371/12534"));
	Ok(())
}
