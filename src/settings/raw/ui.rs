use std::str::FromStr;

use geojob::{SortBy, UiLabels, View};
use serde::Deserialize;

use super::super::resolved::{ConfigError, ConfigSources};
use super::super::util::non_blank;
use crate::cli::CliArgs;

/// `[ui]` values prior to validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct UiSection {
	pub(super) theme: Option<String>,
	pub(super) title: Option<String>,
	pub(super) initial_keyword: Option<String>,
	pub(super) sort: Option<String>,
	pub(super) start_view: Option<String>,
	pub(super) search_placeholder: Option<String>,
	pub(super) detail_title: Option<String>,
}

pub(super) struct UiResolution {
	pub(super) labels: UiLabels,
	pub(super) initial_keyword: Option<String>,
	pub(super) theme: Option<String>,
	pub(super) sort: SortBy,
	pub(super) start_view: View,
}

impl UiSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(theme) = cli.theme.clone() {
			self.theme = Some(theme);
		}
		if let Some(title) = cli.title.clone() {
			self.title = Some(title);
		}
		if let Some(keyword) = cli.keyword.clone() {
			self.initial_keyword = Some(keyword);
		}
		if let Some(sort) = cli.sort {
			self.sort = Some(sort.as_str().to_string());
		}
		if let Some(view) = cli.view {
			self.start_view = Some(view.as_str().to_string());
		}
	}

	pub(super) fn finalize(self, sources: &ConfigSources) -> Result<UiResolution, ConfigError> {
		let sort = match self.sort {
			Some(value) => SortBy::from_str(&value).map_err(|reason| {
				ConfigError::invalid("ui.sort", value.clone(), sources.source_for_sort(), reason)
			})?,
			None => SortBy::Default,
		};
		let start_view = match self.start_view {
			Some(value) => View::from_str(&value).map_err(|reason| {
				ConfigError::invalid(
					"ui.start_view",
					value.clone(),
					sources.source_for_start_view(),
					reason,
				)
			})?,
			None => View::List,
		};

		let mut labels = UiLabels::default();
		if let Some(title) = non_blank(self.title) {
			labels = labels.with_title(title);
		}
		if let Some(placeholder) = non_blank(self.search_placeholder) {
			labels = labels.with_search_placeholder(placeholder);
		}
		if let Some(detail_title) = non_blank(self.detail_title) {
			labels = labels.with_detail_title(detail_title);
		}

		Ok(UiResolution {
			labels,
			initial_keyword: non_blank(self.initial_keyword),
			theme: non_blank(self.theme),
			sort,
			start_view,
		})
	}
}
