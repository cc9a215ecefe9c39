/// Human-readable labels and titles rendered around the panes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiLabels {
	/// Title shown on the search prompt row.
	pub title: String,
	/// Placeholder text displayed while the search prompt is empty.
	pub search_placeholder: String,
	/// Title of the detail pane.
	pub detail_title: String,
	/// Title of the job table.
	pub results_title: String,
	/// Title of the map pane.
	pub map_title: String,
	/// Title of the map's marker list.
	pub markers_title: String,
	/// Message rendered when the job list is empty.
	pub empty_message: String,
	/// Message rendered in the detail pane when nothing is selected.
	pub no_selection_message: String,
}

impl Default for UiLabels {
	fn default() -> Self {
		Self {
			title: "GeoJobSearch".to_string(),
			search_placeholder: "Search jobs...".to_string(),
			detail_title: "Job details".to_string(),
			results_title: "Jobs".to_string(),
			map_title: "Map".to_string(),
			markers_title: "Markers".to_string(),
			empty_message: "No results".to_string(),
			no_selection_message: "Select a job to see the details".to_string(),
		}
	}
}

impl UiLabels {
	#[must_use]
	pub fn with_title(mut self, title: impl Into<String>) -> Self {
		self.title = title.into();
		self
	}

	#[must_use]
	pub fn with_search_placeholder(mut self, placeholder: impl Into<String>) -> Self {
		self.search_placeholder = placeholder.into();
		self
	}

	#[must_use]
	pub fn with_detail_title(mut self, title: impl Into<String>) -> Self {
		self.detail_title = title.into();
		self
	}
}
