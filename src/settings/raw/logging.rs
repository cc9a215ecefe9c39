use geojob::logging::parse_level;
use log::LevelFilter;
use serde::Deserialize;

use super::super::resolved::{ConfigError, ConfigSources};
use crate::cli::CliArgs;

/// `[logging]` values prior to validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct LoggingSection {
	pub(super) level: Option<String>,
}

impl LoggingSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(level) = cli.log_level.clone() {
			self.level = Some(level);
		}
	}

	pub(super) fn finalize(self, sources: &ConfigSources) -> Result<LevelFilter, ConfigError> {
		let Some(level) = self.level else {
			return Ok(LevelFilter::Info);
		};
		parse_level(&level).ok_or_else(|| {
			ConfigError::invalid(
				"logging.level",
				level,
				sources.source_for_log_level(),
				"expected off, error, warn, info, debug or trace",
			)
		})
	}
}
