use std::env;

use anyhow::{Error, Result};
use serde::Deserialize;

use crate::cli::CliArgs;

use super::resolved::{ConfigSources, ResolvedConfig, SettingSource};

mod api;
mod logging;
mod ui;

use api::ApiSection;
use logging::LoggingSection;
use ui::UiSection;

/// Mirror of the configuration file representation before CLI overrides and
/// validation are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
	api: ApiSection,
	ui: UiSection,
	logging: LoggingSection,
}

impl RawConfig {
	/// Apply CLI overrides on top of the raw configuration values.
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		self.api.apply_cli_overrides(cli);
		self.ui.apply_cli_overrides(cli);
		self.logging.apply_cli_overrides(cli);
	}

	/// Convert the raw configuration into a [`ResolvedConfig`], validating and
	/// filling defaults where required.
	pub(super) fn resolve(self, cli: &CliArgs) -> Result<ResolvedConfig> {
		let sources = ConfigSources {
			base_url: detect_source(
				cli.base_url.is_some(),
				self.api.base_url.is_some(),
				"GEOJOB__API__BASE_URL",
				"--base-url",
				"api.base_url",
			),
			timeout: detect_source(
				cli.timeout.is_some(),
				self.api.timeout_secs.is_some(),
				"GEOJOB__API__TIMEOUT_SECS",
				"--timeout",
				"api.timeout_secs",
			),
			theme: detect_source(
				cli.theme.is_some(),
				self.ui.theme.is_some(),
				"GEOJOB__UI__THEME",
				"--theme",
				"ui.theme",
			),
			sort: detect_source(
				cli.sort.is_some(),
				self.ui.sort.is_some(),
				"GEOJOB__UI__SORT",
				"--sort",
				"ui.sort",
			),
			start_view: detect_source(
				cli.view.is_some(),
				self.ui.start_view.is_some(),
				"GEOJOB__UI__START_VIEW",
				"--view",
				"ui.start_view",
			),
			log_level: detect_source(
				cli.log_level.is_some(),
				self.logging.level.is_some(),
				"GEOJOB__LOGGING__LEVEL",
				"--log-level",
				"logging.level",
			),
		};

		let api = self.api.finalize();
		let ui = self.ui.finalize(&sources).map_err(Error::new)?;
		let log_level = self.logging.finalize(&sources).map_err(Error::new)?;

		let config = ResolvedConfig {
			base_url: api.base_url,
			timeout: api.timeout,
			initial_keyword: ui.initial_keyword,
			sort: ui.sort,
			start_view: ui.start_view,
			theme: ui.theme,
			ui: ui.labels,
			log_level,
		};

		config.validate(&sources).map_err(Error::new)?;

		Ok(config)
	}
}

fn detect_source(
	cli_present: bool,
	value_present: bool,
	env_var: &'static str,
	cli_flag: &'static str,
	key: &'static str,
) -> Option<SettingSource> {
	if !value_present {
		return None;
	}

	if cli_present {
		return Some(SettingSource::CliFlag(cli_flag));
	}

	if env::var_os(env_var).is_some() {
		return Some(SettingSource::Environment(env_var));
	}

	Some(SettingSource::ConfigKey(key))
}

#[cfg(test)]
mod tests;
