use anyhow::{Result, anyhow};

use super::raw::RawConfig;
use super::resolved::ResolvedConfig;
use super::sources::build_config;
use crate::cli::CliArgs;

/// Load configuration by combining CLI arguments, config files and environment
/// variables.
pub fn load(cli: &CliArgs) -> Result<ResolvedConfig> {
	let builder = build_config(cli)?;
	let mut raw: RawConfig = builder
		.try_deserialize()
		.map_err(|err| anyhow!("failed to deserialize configuration: {err}"))?;
	raw.apply_cli_overrides(cli);
	raw.resolve(cli)
}

#[cfg(test)]
mod tests {
	use std::fs;
	use std::time::Duration;

	use clap::Parser;
	use geojob::{SortBy, View};
	use tempfile::tempdir;

	use super::*;

	fn cli_with_file(contents: &str, extra: &[&str]) -> (tempfile::TempDir, CliArgs) {
		let dir = tempdir().expect("tempdir");
		let path = dir.path().join("geojob.toml");
		fs::write(&path, contents).expect("write config");
		let path = path.display().to_string();
		let mut args = vec!["geojob", "--no-config", "--config", path.as_str()];
		args.extend_from_slice(extra);
		let cli = CliArgs::parse_from(args);
		(dir, cli)
	}

	#[test]
	fn file_values_are_resolved() {
		let (_dir, cli) = cli_with_file(
			r#"
[api]
base_url = "https://jobs.example.com/"
timeout_secs = 3

[ui]
title = "Jobs"
initial_keyword = "  rust  "
sort = "date"
start_view = "map"
theme = "paper"

[logging]
level = "debug"
"#,
			&[],
		);

		let config = load(&cli).expect("config loads");
		assert_eq!(config.base_url, "https://jobs.example.com/");
		assert_eq!(config.timeout, Duration::from_secs(3));
		assert_eq!(config.initial_keyword.as_deref(), Some("rust"));
		assert_eq!(config.sort, SortBy::Date);
		assert_eq!(config.start_view, View::Map);
		assert_eq!(config.theme.as_deref(), Some("paper"));
		assert_eq!(config.ui.title, "Jobs");
		assert_eq!(config.log_level, log::LevelFilter::Debug);
	}

	#[test]
	fn cli_flags_override_files() {
		let (_dir, cli) = cli_with_file(
			"[api]\ntimeout_secs = 3\n[ui]\nsort = \"date\"\n",
			&["--timeout", "7", "--sort", "salary"],
		);

		let config = load(&cli).expect("config loads");
		assert_eq!(config.timeout, Duration::from_secs(7));
		assert_eq!(config.sort, SortBy::Salary);
	}

	#[test]
	fn zero_timeout_names_the_config_key() {
		let (_dir, cli) = cli_with_file("[api]\ntimeout_secs = 0\n", &[]);

		let message = load(&cli).expect_err("zero timeout").to_string();
		assert!(message.contains("api.timeout_secs"), "{message}");
		assert!(message.contains("configuration key"), "{message}");
	}

	#[test]
	fn bad_base_url_from_cli_names_the_flag() {
		let (_dir, cli) = cli_with_file("", &["--base-url", "ftp://jobs.example.com"]);

		let message = load(&cli).expect_err("bad url").to_string();
		assert!(message.contains("--base-url"), "{message}");
	}

	#[test]
	fn unknown_values_are_rejected() {
		for contents in [
			"[ui]\nsort = \"random\"\n",
			"[ui]\nstart_view = \"grid\"\n",
			"[logging]\nlevel = \"loud\"\n",
			"[ui]\ntheme = \"no-such-theme\"\n",
		] {
			let (_dir, cli) = cli_with_file(contents, &[]);
			assert!(load(&cli).is_err(), "accepted {contents}");
		}
	}

	#[test]
	fn missing_explicit_file_is_an_error() {
		let cli = CliArgs::parse_from(["geojob", "-n", "-c", "/definitely/missing/geojob.toml"]);
		assert!(load(&cli).is_err());
	}
}
