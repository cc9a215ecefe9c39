use std::sync::Arc;

use anyhow::{Result, anyhow};
use geojob_api::{JobsApi, SortBy};

use crate::app::{App, BrowseOutcome, View};
use crate::config::UiLabels;
use crate::style::{Theme, by_name, default_theme};

/// Configures the interactive job browser before running it.
pub struct JobBrowser {
	api: Arc<dyn JobsApi>,
	ui: Option<UiLabels>,
	theme: Option<Theme>,
	initial_keyword: Option<String>,
	sort: SortBy,
	start_view: View,
}

impl JobBrowser {
	/// Create a browser that fetches through `api`.
	pub fn new(api: Arc<dyn JobsApi>) -> Self {
		Self {
			api,
			ui: None,
			theme: None,
			initial_keyword: None,
			sort: SortBy::Default,
			start_view: View::List,
		}
	}

	#[must_use]
	pub fn with_ui_labels(mut self, ui: UiLabels) -> Self {
		self.ui = Some(ui);
		self
	}

	#[must_use]
	pub fn with_theme(mut self, theme: Theme) -> Self {
		self.theme = Some(theme);
		self
	}

	/// Select a built-in theme by name or alias.
	pub fn with_theme_name(mut self, name: &str) -> Result<Self> {
		let theme = by_name(name)?.ok_or_else(|| anyhow!("unknown theme '{name}'"))?;
		self.theme = Some(theme);
		Ok(self)
	}

	#[must_use]
	pub fn with_initial_keyword(mut self, keyword: impl Into<String>) -> Self {
		self.initial_keyword = Some(keyword.into());
		self
	}

	#[must_use]
	pub fn with_sort(mut self, sort: SortBy) -> Self {
		self.sort = sort;
		self
	}

	#[must_use]
	pub fn with_start_view(mut self, view: View) -> Self {
		self.start_view = view;
		self
	}

	/// Build the [`App`] without starting it.
	pub fn build<'a>(self) -> Result<App<'a>> {
		let theme = match self.theme {
			Some(theme) => theme,
			None => default_theme()?,
		};
		let mut app = App::new(self.api, theme);
		if let Some(ui) = self.ui {
			app.set_ui_labels(ui);
		}
		if let Some(keyword) = self.initial_keyword.as_deref() {
			app.set_initial_keyword(keyword);
		}
		app.set_sort(self.sort);
		app.set_view(self.start_view);
		Ok(app)
	}

	/// Run the browser until the user exits.
	pub fn run(self) -> Result<BrowseOutcome> {
		let mut app = self.build()?;
		app.run()
	}
}

#[cfg(test)]
mod tests {
	use geojob_api::{ApiError, JobsRequest, JobsResponse};

	use super::*;

	struct NoApi;

	impl JobsApi for NoApi {
		fn fetch(&self, request: &JobsRequest) -> Result<JobsResponse, ApiError> {
			Err(ApiError::Status {
				endpoint: request.endpoint().path(),
				status: 503,
			})
		}
	}

	#[test]
	fn build_applies_configuration() {
		let app = JobBrowser::new(Arc::new(NoApi))
			.with_initial_keyword(" rust ")
			.with_sort(SortBy::Salary)
			.with_start_view(View::Map)
			.build()
			.expect("app builds");

		assert_eq!(app.selection().keyword(), Some("rust"));
		assert_eq!(app.sort(), SortBy::Salary);
		assert_eq!(app.view(), View::Map);
		assert!(!app.is_loading());
	}

	#[test]
	fn unknown_theme_is_rejected() {
		assert!(JobBrowser::new(Arc::new(NoApi)).with_theme_name("nope").is_err());
		assert!(JobBrowser::new(Arc::new(NoApi)).with_theme_name("Light").is_ok());
	}
}
