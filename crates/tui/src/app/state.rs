//! Core state container for the job browser.
//!
//! [`App`] owns the filter selection, the loaded data and the UI affordances.
//! Every change to the selection goes through [`App::dispatch`], which also
//! issues the follow-up requests.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use geojob_api::{FilterSelection, Job, JobsApi, SortBy};
use ratatui::layout::Rect;
use serde::Serialize;
use throbber_widgets_tui::ThrobberState;

use super::events::{AppEvent, SelectionChange, planned_requests};
use super::facets::{FacetLists, Picker, PickerKind};
use super::jobs::JobBoard;
use super::map::MapState;
use crate::components::{LogConsole, PageHitbox, ScrollMetrics};
use crate::config::UiLabels;
use crate::fetch::FetchRuntime;
use crate::format::html_to_text;
use crate::input::SearchInput;
use crate::pagination::Pagination;
use crate::style::Theme;

/// Lines the description moves per `PageUp`/`PageDown`.
pub(crate) const DETAIL_PAGE: isize = 10;

/// Which pane receives key input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
	Search,
	Results,
	Picker,
}

/// Main body layout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
	#[default]
	List,
	Map,
}

impl View {
	#[must_use]
	pub fn as_str(self) -> &'static str {
		match self {
			View::List => "list",
			View::Map => "map",
		}
	}

	#[must_use]
	pub fn toggled(self) -> Self {
		match self {
			View::List => View::Map,
			View::Map => View::List,
		}
	}
}

impl fmt::Display for View {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for View {
	type Err = String;

	fn from_str(value: &str) -> Result<Self, Self::Err> {
		match value.trim().to_ascii_lowercase().as_str() {
			"" | "list" => Ok(View::List),
			"map" => Ok(View::Map),
			other => Err(format!("unknown view '{other}' (expected list or map)")),
		}
	}
}

/// Result of a browsing session.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BrowseOutcome {
	/// Whether the user chose a job to apply to.
	pub accepted: bool,
	/// Keyword in effect when the session ended.
	pub keyword: Option<String>,
	pub job: Option<Job>,
}

impl BrowseOutcome {
	/// Apply URL of the accepted job.
	#[must_use]
	pub fn apply_link(&self) -> Option<&str> {
		self.job.as_ref().and_then(Job::apply_link)
	}
}

/// Description pane state. The converted description is cached per job.
#[derive(Default)]
pub(crate) struct DetailState {
	pub scroll: usize,
	pub metrics: ScrollMetrics,
	pub area: Option<Rect>,
	cached: Option<(i64, Vec<String>)>,
}

impl DetailState {
	/// Plain-text description of `job`, converting it on first use.
	pub(crate) fn lines_for(&mut self, job: &Job) -> &[String] {
		let stale = self.cached.as_ref().is_none_or(|(id, _)| *id != job.id);
		if stale {
			self.scroll = 0;
			let lines = job.description.as_deref().map(html_to_text).unwrap_or_default();
			self.cached = Some((job.id, lines));
		}
		self.cached.as_ref().map_or(&[], |(_, lines)| lines.as_slice())
	}

	pub(crate) fn scroll_by(&mut self, delta: isize) {
		self.scroll = self.metrics.clamp(self.scroll.saturating_add_signed(delta));
	}

	pub(crate) fn reset(&mut self) {
		self.scroll = 0;
		self.cached = None;
	}
}

impl<'a> Drop for App<'a> {
	fn drop(&mut self) {
		self.fetch.shutdown();
	}
}

/// Aggregate state shared across the terminal UI.
pub struct App<'a> {
	/// Text input for the keyword search.
	pub search_input: SearchInput<'a>,
	pub(crate) ui: UiLabels,
	pub(crate) theme: Theme,
	pub(crate) focus: Focus,
	pub(crate) view: View,
	pub(crate) selection: FilterSelection,
	pub(crate) sort: SortBy,
	pub(crate) board: JobBoard,
	pub(crate) facets: FacetLists,
	pub(crate) picker: Option<Picker>,
	pub(crate) map: MapState,
	pub(crate) details: DetailState,
	pub(crate) logs: LogConsole,
	pub(crate) fetch: FetchRuntime,
	pub(crate) throbber_state: ThrobberState,
	pub(crate) pager_hitboxes: Vec<PageHitbox>,
	pub(crate) prompt_area: Option<Rect>,
	pub(crate) picker_area: Option<Rect>,
}

impl<'a> App<'a> {
	/// Construct an [`App`] that fetches through `api`. Nothing is requested
	/// until [`App::start`].
	pub fn new(api: Arc<dyn JobsApi>, theme: Theme) -> Self {
		let mut search_input = SearchInput::new("");
		search_input.set_focused(false);
		Self {
			search_input,
			ui: UiLabels::default(),
			theme,
			focus: Focus::Results,
			view: View::List,
			selection: FilterSelection::new(),
			sort: SortBy::Default,
			board: JobBoard::default(),
			facets: FacetLists::default(),
			picker: None,
			map: MapState::default(),
			details: DetailState::default(),
			logs: LogConsole::default(),
			fetch: FetchRuntime::new(api),
			throbber_state: ThrobberState::default(),
			pager_hitboxes: Vec::new(),
			prompt_area: None,
			picker_area: None,
		}
	}

	pub fn set_ui_labels(&mut self, ui: UiLabels) {
		self.ui = ui;
	}

	pub fn set_view(&mut self, view: View) {
		self.view = view;
	}

	pub fn set_sort(&mut self, sort: SortBy) {
		self.sort = sort;
	}

	/// Seed the keyword searched for on start.
	pub fn set_initial_keyword(&mut self, keyword: &str) {
		self.selection.set_keyword(keyword);
		self.search_input
			.set_text(self.selection.keyword().unwrap_or_default().to_string());
	}

	/// Issue the initial requests.
	pub fn start(&mut self) {
		let change = if self.selection.keyword().is_some() {
			SelectionChange::Keyword
		} else {
			SelectionChange::Startup
		};
		self.refresh(change);
	}

	#[must_use]
	pub fn selection(&self) -> &FilterSelection {
		&self.selection
	}

	#[must_use]
	pub fn sort(&self) -> SortBy {
		self.sort
	}

	#[must_use]
	pub fn view(&self) -> View {
		self.view
	}

	#[must_use]
	pub fn focus(&self) -> Focus {
		self.focus
	}

	#[must_use]
	pub fn jobs(&self) -> &[Job] {
		self.board.jobs()
	}

	#[must_use]
	pub fn pagination(&self) -> &Pagination {
		&self.board.pagination
	}

	/// Job shown in the detail pane: the selected row in the list view, the
	/// selected marker in the map view.
	#[must_use]
	pub fn current_job(&self) -> Option<&Job> {
		match self.view {
			View::List => self.board.selected_job(),
			View::Map => self.map.selected_job(),
		}
	}

	/// Whether requests are still in flight.
	#[must_use]
	pub fn is_loading(&self) -> bool {
		self.fetch.is_busy()
	}

	/// Reduce `event` into the state. Returns an outcome when the session ends.
	pub fn dispatch(&mut self, event: AppEvent) -> Option<BrowseOutcome> {
		match event {
			AppEvent::SubmitKeyword(text) => {
				self.selection.set_keyword(&text);
				self.selection.clear_facets();
				self.search_input
					.set_text(self.selection.keyword().unwrap_or_default().to_string());
				self.picker = None;
				self.refresh(SelectionChange::Keyword);
			}
			AppEvent::SelectLocation(location) => {
				self.selection.location = location;
				self.refresh(SelectionChange::Location);
			}
			AppEvent::SelectJobType(job_type) => {
				self.selection.job_type = job_type;
				self.refresh(SelectionChange::JobType);
			}
			AppEvent::SelectSalary(band) => {
				self.selection.salary = band;
				self.refresh(SelectionChange::Salary);
			}
			AppEvent::SelectSort(sort) => {
				self.sort = sort;
				self.refresh(SelectionChange::Sort);
			}
			AppEvent::ClearFilters => {
				self.selection.clear_facets();
				self.refresh(SelectionChange::Cleared);
			}
			AppEvent::NextPage => {
				self.board.turn_page(Pagination::next);
			}
			AppEvent::PrevPage => {
				self.board.turn_page(Pagination::prev);
			}
			AppEvent::FirstPage => {
				self.board.turn_page(Pagination::first);
			}
			AppEvent::LastPage => {
				self.board.turn_page(Pagination::last);
			}
			AppEvent::ShowPage(page) => {
				self.board.turn_page(|pagination| pagination.select(page));
			}
			AppEvent::SelectRow(row) => {
				self.board.select_row(row);
			}
			AppEvent::MoveSelection(delta) => match self.view {
				View::List => {
					self.board.move_selection(delta);
				}
				View::Map => {
					self.map.move_selection(delta);
				}
			},
			AppEvent::ScrollDetails(delta) => self.details.scroll_by(delta),
			AppEvent::ToggleView => {
				self.view = self.view.toggled();
				self.details.scroll = 0;
			}
			AppEvent::ToggleLogs => self.logs.toggle(),
			AppEvent::ZoomIn => self.map.viewport.zoom_in(),
			AppEvent::ZoomOut => self.map.viewport.zoom_out(),
			AppEvent::RefitMap => {
				self.map.refit();
			}
			AppEvent::Apply => return self.apply(),
			AppEvent::Quit => {
				return Some(BrowseOutcome {
					accepted: false,
					keyword: self.selection.search.clone(),
					job: None,
				});
			}
		}
		None
	}

	fn apply(&self) -> Option<BrowseOutcome> {
		let job = self.current_job()?;
		if job.apply_link().is_none() {
			log::warn!("\"{}\" has no apply URL; apply is unavailable", job.title);
			return None;
		}
		Some(BrowseOutcome {
			accepted: true,
			keyword: self.selection.search.clone(),
			job: Some(job.clone()),
		})
	}

	/// Start a new selection generation and issue the requests `change` needs.
	fn refresh(&mut self, change: SelectionChange) {
		self.fetch.begin_generation();
		for (channel, request) in planned_requests(change, &self.selection, self.sort) {
			self.fetch.issue(channel, request);
		}
	}

	pub(crate) fn open_picker(&mut self, kind: PickerKind) {
		self.picker = Some(Picker::open(kind, &self.facets, &self.selection, self.sort));
		self.focus = Focus::Picker;
	}

	pub(crate) fn close_picker(&mut self) {
		self.picker = None;
		self.picker_area = None;
		if self.focus == Focus::Picker {
			self.focus = Focus::Results;
		}
	}

	/// Dispatch the event of the highlighted picker entry and close the picker.
	pub(crate) fn choose_picker_entry(&mut self) -> Option<BrowseOutcome> {
		let event = self.picker.as_ref().and_then(Picker::chosen);
		self.close_picker();
		event.and_then(|event| self.dispatch(event))
	}

	/// Clear the refinement the open picker controls.
	pub(crate) fn clear_picker_facet(&mut self) -> Option<BrowseOutcome> {
		let event = self.picker.as_ref().map(|picker| picker.kind.clear_event());
		self.close_picker();
		event.and_then(|event| self.dispatch(event))
	}

	pub(crate) fn focus_search(&mut self) {
		self.close_picker();
		self.focus = Focus::Search;
		self.search_input.set_focused(true);
	}

	pub(crate) fn focus_results(&mut self) {
		self.focus = Focus::Results;
		self.search_input.set_focused(false);
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn view_parses_and_toggles() {
		assert_eq!("MAP".parse::<View>(), Ok(View::Map));
		assert_eq!("".parse::<View>(), Ok(View::List));
		assert!("grid".parse::<View>().is_err());
		assert_eq!(View::List.toggled(), View::Map);
		assert_eq!(View::Map.to_string(), "map");
	}

	#[test]
	fn description_cache_resets_scroll_for_a_new_job() {
		let mut details = DetailState::default();
		let first = Job::new(1, "A", "X").with_description("<p>One</p><p>Two</p>");
		assert_eq!(details.lines_for(&first), ["One", "", "Two"]);

		details.metrics = ScrollMetrics::compute(3, 1);
		details.scroll_by(5);
		assert_eq!(details.scroll, 2);
		details.lines_for(&first);
		assert_eq!(details.scroll, 2);

		let second = Job::new(2, "B", "Y");
		assert!(details.lines_for(&second).is_empty());
		assert_eq!(details.scroll, 0);
	}
}
