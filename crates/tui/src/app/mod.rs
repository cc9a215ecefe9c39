//! Core application state and behavior for the job browser.
//!
//! The [`App`] type aggregates the filter selection, the fetched data and the
//! UI state. Supporting modules partition the implementation into focused
//! pieces: input handling, event reduction, response handling and rendering.

mod actions;
mod events;
mod facets;
mod fetching;
mod jobs;
mod map;
mod render;
mod state;

pub use events::{AppEvent, SelectionChange, planned_requests};
pub use state::{App, BrowseOutcome, Focus, View};
