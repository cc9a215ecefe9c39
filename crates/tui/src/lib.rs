//! Interactive terminal UI for browsing GeoJobSearch postings.
//!
//! This crate contains the full TUI application: the builder, the event loop,
//! background fetching with stale-response protection, the rendering pipeline
//! and the reusable widgets and themes behind it.

mod app;
mod builder;
pub mod components;
mod config;
mod fetch;
pub mod format;
pub mod geo;
pub mod input;
pub mod pagination;
mod runtime;
pub mod style;

pub use app::{App, AppEvent, BrowseOutcome, Focus, SelectionChange, View, planned_requests};
pub use builder::JobBrowser;
pub use config::UiLabels;
pub use fetch::{FetchChannel, JobsSource, Sequencer, Ticket};
pub use style::{Theme, default_theme};
