use std::time::Duration;

use clap::Parser;
use geojob::{DEFAULT_BASE_URL, SortBy, View};

use super::RawConfig;
use crate::cli::CliArgs;

#[test]
fn cli_overrides_take_precedence() {
	let cli = CliArgs::parse_from([
		"geojob",
		"--base-url",
		"http://cli.example",
		"--timeout",
		"4",
		"--keyword",
		"go",
		"--sort",
		"date",
		"--view",
		"map",
		"--theme",
		"forest",
		"--title",
		"Board",
		"--log-level",
		"warn",
	]);

	let mut config = RawConfig::default();
	config.api.base_url = Some("http://file.example".into());
	config.ui.sort = Some("salary".into());
	config.apply_cli_overrides(&cli);

	assert_eq!(config.api.base_url, cli.base_url);
	assert_eq!(config.api.timeout_secs, Some(4));
	assert_eq!(config.ui.initial_keyword.as_deref(), Some("go"));
	assert_eq!(config.ui.sort.as_deref(), Some("date"));
	assert_eq!(config.ui.start_view.as_deref(), Some("map"));
	assert_eq!(config.ui.theme, cli.theme);
	assert_eq!(config.ui.title, cli.title);
	assert_eq!(config.logging.level, cli.log_level);
}

#[test]
fn defaults_fill_missing_values() {
	let cli = CliArgs::parse_from(["geojob"]);
	let resolved = RawConfig::default().resolve(&cli).expect("defaults resolve");

	assert_eq!(resolved.base_url, DEFAULT_BASE_URL);
	assert_eq!(resolved.timeout, Duration::from_secs(10));
	assert_eq!(resolved.initial_keyword, None);
	assert_eq!(resolved.sort, SortBy::Default);
	assert_eq!(resolved.start_view, View::List);
	assert_eq!(resolved.theme, None);
	assert_eq!(resolved.ui.title, "GeoJobSearch");
	assert_eq!(resolved.log_level, log::LevelFilter::Info);
}

#[test]
fn invalid_sort_reports_its_origin() {
	let cli = CliArgs::parse_from(["geojob"]);
	let mut config = RawConfig::default();
	config.ui.sort = Some("random".into());

	let message = config.resolve(&cli).expect_err("invalid sort").to_string();
	assert!(message.contains("ui.sort"), "{message}");
	assert!(message.contains("value: random"), "{message}");
	assert!(message.contains("configuration key"), "{message}");
}
