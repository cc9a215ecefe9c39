use std::time::Duration;

use geojob::{SortBy, UiLabels, View};
use log::LevelFilter;

mod errors;
mod sources;
mod summary;
mod validation;

pub(crate) use errors::ConfigError;
pub(crate) use sources::{ConfigSources, SettingSource};

/// Application-ready configuration derived from user input, config files and
/// built-in defaults.
#[derive(Debug)]
pub struct ResolvedConfig {
	pub base_url: String,
	pub timeout: Duration,
	pub initial_keyword: Option<String>,
	pub sort: SortBy,
	pub start_view: View,
	pub theme: Option<String>,
	pub ui: UiLabels,
	pub log_level: LevelFilter,
}

impl ResolvedConfig {
	pub(super) fn validate(&self, sources: &ConfigSources) -> Result<(), ConfigError> {
		validation::validate(self, sources)
	}

	/// Print a human readable summary of the effective configuration.
	pub fn print_summary(&self) {
		summary::print_summary(self);
	}
}
