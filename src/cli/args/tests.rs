use clap::{CommandFactory, FromArgMatches, Parser};

use super::options::{SortArg, ViewArg};
use super::{CliArgs, OutputFormat};

#[test]
fn command_definition_is_consistent() {
	CliArgs::command().debug_assert();
	assert!(CliArgs::command().get_about().is_some());
}

#[test]
fn parse_cli_accepts_default_arguments() {
	let command = CliArgs::command();
	let mut matches = command.get_matches_from(vec!["geojob"]);
	let parsed = CliArgs::from_arg_matches_mut(&mut matches).expect("parses");
	assert_eq!(parsed.output, OutputFormat::Plain);
	assert!(parsed.sort.is_none());
	assert!(!parsed.no_config);
}

#[test]
fn browse_options_parse() {
	let cli = CliArgs::parse_from([
		"geojob",
		"-b",
		"http://jobs.internal:9000",
		"--timeout",
		"5",
		"-q",
		"rust",
		"--sort",
		"salary",
		"--view",
		"map",
		"-o",
		"json",
	]);
	assert_eq!(cli.base_url.as_deref(), Some("http://jobs.internal:9000"));
	assert_eq!(cli.timeout, Some(5));
	assert_eq!(cli.keyword.as_deref(), Some("rust"));
	assert_eq!(cli.sort, Some(SortArg::Salary));
	assert_eq!(cli.view, Some(ViewArg::Map));
	assert_eq!(cli.output, OutputFormat::Json);
}

#[test]
fn unknown_sort_is_rejected() {
	assert!(CliArgs::try_parse_from(["geojob", "--sort", "random"]).is_err());
}
