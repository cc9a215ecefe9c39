//! Core crate exports for building and running the `geojob` terminal client.
//!
//! The root module re-exports the API client and the job browser so that
//! embedders can drive the application without digging through the workspace.

pub mod app_dirs;
pub mod logging;

pub use geojob_api::{
	ApiError, ClientOptions, DEFAULT_BASE_URL, FilterSelection, HttpJobsClient, Job, JobsApi,
	SortBy, validate_base_url,
};
pub use geojob_tui::{BrowseOutcome, JobBrowser, Theme, UiLabels, View};
pub use geojob_tui::style as theme;
