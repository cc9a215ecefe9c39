use std::sync::Arc;

use anyhow::{Context, Result};
use geojob::{BrowseOutcome, ClientOptions, HttpJobsClient, JobBrowser, JobsApi};
use log::info;

use crate::settings::ResolvedConfig;

/// Coordinates building and running the interactive job browser.
pub(crate) struct BrowseWorkflow {
	browser: JobBrowser,
}

impl BrowseWorkflow {
	pub(crate) fn from_config(config: ResolvedConfig) -> Result<Self> {
		let browser = BrowserFactory::build(config)?;
		Ok(Self { browser })
	}

	pub(crate) fn run(self) -> Result<BrowseOutcome> {
		self.browser.run()
	}
}

/// Translates resolved configuration into a configured [`JobBrowser`].
struct BrowserFactory {
	browser: JobBrowser,
}

impl BrowserFactory {
	fn build(config: ResolvedConfig) -> Result<JobBrowser> {
		let ResolvedConfig {
			base_url,
			timeout,
			initial_keyword,
			sort,
			start_view,
			theme,
			ui,
			log_level: _,
		} = config;

		let client = HttpJobsClient::new(ClientOptions { base_url, timeout })
			.context("failed to create the jobs API client")?;
		info!("using jobs API at {}", client.base_url());
		let api: Arc<dyn JobsApi> = Arc::new(client);

		let factory = Self {
			browser: JobBrowser::new(api)
				.with_ui_labels(ui)
				.with_sort(sort)
				.with_start_view(start_view),
		}
		.with_initial_keyword(initial_keyword)
		.with_theme(theme)?;

		Ok(factory.browser)
	}

	fn with_initial_keyword(mut self, keyword: Option<String>) -> Self {
		if let Some(keyword) = keyword {
			self.browser = self.browser.with_initial_keyword(keyword);
		}
		self
	}

	fn with_theme(mut self, theme: Option<String>) -> Result<Self> {
		if let Some(theme) = theme {
			self.browser = self.browser.with_theme_name(&theme)?;
		}
		Ok(self)
	}
}
