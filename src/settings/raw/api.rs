use std::time::Duration;

use geojob::{ClientOptions, DEFAULT_BASE_URL};
use serde::Deserialize;

use super::super::util::non_blank;
use crate::cli::CliArgs;

/// `[api]` values prior to validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct ApiSection {
	pub(super) base_url: Option<String>,
	pub(super) timeout_secs: Option<u64>,
}

pub(super) struct ApiResolution {
	pub(super) base_url: String,
	pub(super) timeout: Duration,
}

impl ApiSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(url) = cli.base_url.clone() {
			self.base_url = Some(url);
		}
		if let Some(timeout) = cli.timeout {
			self.timeout_secs = Some(timeout);
		}
	}

	pub(super) fn finalize(self) -> ApiResolution {
		let timeout = self
			.timeout_secs
			.map(Duration::from_secs)
			.unwrap_or_else(|| ClientOptions::default().timeout);
		ApiResolution {
			base_url: non_blank(self.base_url).unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
			timeout,
		}
	}
}
