use std::path::PathBuf;

use clap::{ArgAction, ColorChoice, Parser};

use super::options::{OutputFormat, SortArg, ViewArg};
use super::styles::{cli_styles, long_version};

/// Command-line arguments accepted by the `geojob` binary.
#[derive(Parser, Debug)]
#[command(
	name = "geojob",
	version,
	long_version = long_version(),
	about = "Browse GeoJobSearch postings from the terminal",
	color = ColorChoice::Auto,
	styles = cli_styles()
)]
pub(crate) struct CliArgs {
	#[arg(
		short,
		long = "config",
		value_name = "FILE",
		env = "GEOJOB_CONFIG",
		action = ArgAction::Append,
		help = "Additional configuration file to merge (default: none)"
	)]
	pub(crate) config: Vec<PathBuf>,
	#[arg(
		short = 'n',
		long = "no-config",
		help = "Skip loading default configuration files (default: disabled)"
	)]
	pub(crate) no_config: bool,
	#[arg(
		short = 'b',
		long = "base-url",
		value_name = "URL",
		help = "Base URL of the jobs API (default: http://localhost:8080)"
	)]
	pub(crate) base_url: Option<String>,
	#[arg(
		long,
		value_name = "SECS",
		help = "Request timeout in seconds (default: 10)"
	)]
	pub(crate) timeout: Option<u64>,
	#[arg(
		short = 'q',
		long,
		value_name = "TEXT",
		help = "Search for a keyword on start (default: show every job)"
	)]
	pub(crate) keyword: Option<String>,
	#[arg(long, value_enum, help = "Initial sort order (default: default)")]
	pub(crate) sort: Option<SortArg>,
	#[arg(long, value_enum, help = "View shown on start (default: list)")]
	pub(crate) view: Option<ViewArg>,
	#[arg(
		long,
		value_name = "THEME",
		help = "Select a theme by name (default: library theme)"
	)]
	pub(crate) theme: Option<String>,
	#[arg(
		long,
		value_name = "TEXT",
		help = "Set the prompt title (default: GeoJobSearch)"
	)]
	pub(crate) title: Option<String>,
	#[arg(
		long = "log-level",
		value_name = "LEVEL",
		help = "Log level: off, error, warn, info, debug or trace (default: info)"
	)]
	pub(crate) log_level: Option<String>,
	#[arg(
		short = 'p',
		long = "print-config",
		help = "Print the resolved configuration before running (default: disabled)"
	)]
	pub(crate) print_config: bool,
	#[arg(
		short = 'l',
		long = "list-themes",
		help = "List supported themes and exit (default: disabled)"
	)]
	pub(crate) list_themes: bool,
	#[arg(
		short = 'o',
		long = "output",
		value_enum,
		default_value_t = OutputFormat::Plain,
		help = "Choose how to print the result"
	)]
	pub(crate) output: OutputFormat,
}
