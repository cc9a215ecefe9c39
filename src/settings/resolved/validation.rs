use geojob::{theme, validate_base_url};

use super::{ConfigError, ConfigSources, ResolvedConfig};

pub(super) fn validate(
	config: &ResolvedConfig,
	sources: &ConfigSources,
) -> Result<(), ConfigError> {
	if config.timeout.is_zero() {
		return Err(ConfigError::invalid(
			"api.timeout_secs",
			config.timeout.as_secs().to_string(),
			sources.source_for_timeout(),
			"must be greater than zero",
		));
	}

	if let Err(err) = validate_base_url(&config.base_url) {
		return Err(ConfigError::invalid(
			"api.base_url",
			config.base_url.clone(),
			sources.source_for_base_url(),
			err.to_string(),
		));
	}

	if let Some(name) = config.theme.as_deref() {
		let known = theme::by_name(name).map_err(|err| {
			ConfigError::invalid(
				"ui.theme",
				name,
				sources.source_for_theme(),
				format!("failed to load bundled themes: {err}"),
			)
		})?;
		if known.is_none() {
			let available = theme::names().unwrap_or_default().join(", ");
			return Err(ConfigError::invalid(
				"ui.theme",
				name,
				sources.source_for_theme(),
				format!("unknown theme (available: {available})"),
			));
		}
	}

	Ok(())
}

#[cfg(test)]
mod tests {
	use std::time::Duration;

	use geojob::{DEFAULT_BASE_URL, SortBy, UiLabels, View};
	use log::LevelFilter;

	use super::super::SettingSource;
	use super::*;

	fn config() -> ResolvedConfig {
		ResolvedConfig {
			base_url: DEFAULT_BASE_URL.to_string(),
			timeout: Duration::from_secs(10),
			initial_keyword: None,
			sort: SortBy::Default,
			start_view: View::List,
			theme: None,
			ui: UiLabels::default(),
			log_level: LevelFilter::Info,
		}
	}

	#[test]
	fn defaults_are_valid() {
		validate(&config(), &ConfigSources::default()).expect("valid");
	}

	#[test]
	fn validation_rejects_zero_timeout() {
		let config = ResolvedConfig {
			timeout: Duration::ZERO,
			..config()
		};
		let sources = ConfigSources {
			timeout: Some(SettingSource::CliFlag("--timeout")),
			..ConfigSources::default()
		};

		let err = validate(&config, &sources).unwrap_err();
		assert_eq!(err.key, "api.timeout_secs");
		let message = err.to_string();
		assert!(message.contains("value: 0"), "{message}");
		assert!(message.contains("CLI flag"), "{message}");
	}

	#[test]
	fn validation_rejects_relative_base_url() {
		let config = ResolvedConfig {
			base_url: "localhost:8080".into(),
			..config()
		};
		let sources = ConfigSources {
			base_url: Some(SettingSource::Environment("GEOJOB__API__BASE_URL")),
			..ConfigSources::default()
		};

		let err = validate(&config, &sources).unwrap_err();
		assert_eq!(err.key, "api.base_url");
		assert!(err.to_string().contains("environment variable"));
	}

	#[test]
	fn validation_rejects_unknown_theme() {
		let config = ResolvedConfig {
			theme: Some("no-such-theme".into()),
			..config()
		};

		let err = validate(&config, &ConfigSources::default()).unwrap_err();
		assert_eq!(err.key, "ui.theme");
		let message = err.to_string();
		assert!(message.contains("unknown theme"), "{message}");
		assert!(message.contains("configuration key `ui.theme`"), "{message}");
	}
}
