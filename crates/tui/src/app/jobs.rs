use geojob_api::Job;
use ratatui::layout::Rect;
use ratatui::widgets::TableState;

use crate::fetch::JobsSource;
use crate::pagination::Pagination;

/// The active job list, its paging and the selected job.
#[derive(Default)]
pub(crate) struct JobBoard {
	jobs: Vec<Job>,
	pub(crate) pagination: Pagination,
	/// Absolute index of the selected job.
	selected: Option<usize>,
	/// Request that produced the current list.
	pub(crate) source: Option<JobsSource>,
	pub(crate) table_state: TableState,
	/// Inner area of the rendered table, for mouse hit-testing.
	pub(crate) area: Option<Rect>,
}

impl JobBoard {
	/// Replace the list, return to the first page and select the first job.
	pub(crate) fn replace(&mut self, jobs: Vec<Job>, source: JobsSource) {
		self.pagination.reset(jobs.len());
		self.selected = (!jobs.is_empty()).then_some(0);
		self.jobs = jobs;
		self.source = Some(source);
		self.sync_table();
	}

	pub(crate) fn jobs(&self) -> &[Job] {
		&self.jobs
	}

	pub(crate) fn len(&self) -> usize {
		self.jobs.len()
	}

	pub(crate) fn is_empty(&self) -> bool {
		self.jobs.is_empty()
	}

	/// Jobs on the current page.
	pub(crate) fn page(&self) -> &[Job] {
		&self.jobs[self.pagination.item_range()]
	}

	#[cfg(test)]
	pub(crate) fn selected_index(&self) -> Option<usize> {
		self.selected
	}

	pub(crate) fn selected_job(&self) -> Option<&Job> {
		self.selected.and_then(|index| self.jobs.get(index))
	}

	/// Select row `offset` of the visible page. Returns `true` if it exists.
	pub(crate) fn select_row(&mut self, offset: usize) -> bool {
		let range = self.pagination.item_range();
		let index = range.start + offset;
		if !range.contains(&index) {
			return false;
		}
		self.selected = Some(index);
		self.sync_table();
		true
	}

	/// Move the selection by `delta`, turning the page when it leaves the
	/// visible one. Returns `true` if the selection changed.
	pub(crate) fn move_selection(&mut self, delta: isize) -> bool {
		let Some(current) = self.selected else {
			return false;
		};
		let last = self.jobs.len().saturating_sub(1);
		let target = current.saturating_add_signed(delta).min(last);
		if target == current {
			return false;
		}
		self.selected = Some(target);
		self.pagination.select(Pagination::page_of(target));
		self.sync_table();
		true
	}

	/// Apply a page change made through `change` and select the page's first job.
	pub(crate) fn turn_page(&mut self, change: impl FnOnce(&mut Pagination) -> bool) -> bool {
		if !change(&mut self.pagination) {
			return false;
		}
		let range = self.pagination.item_range();
		self.selected = (!range.is_empty()).then_some(range.start);
		self.sync_table();
		true
	}

	fn sync_table(&mut self) {
		let start = self.pagination.item_range().start;
		let row = self.selected.and_then(|index| index.checked_sub(start));
		self.table_state = TableState::default();
		self.table_state.select(row);
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn board(count: i64) -> JobBoard {
		let mut board = JobBoard::default();
		let jobs = (1..=count).map(|id| Job::new(id, format!("Job {id}"), "Acme")).collect();
		board.replace(jobs, JobsSource::All);
		board
	}

	#[test]
	fn replacing_selects_first_job_on_first_page() {
		let mut board = board(12);
		board.turn_page(Pagination::last);
		board.replace(vec![Job::new(99, "New", "Initech")], JobsSource::Filter);
		assert_eq!(board.pagination.current(), 1);
		assert_eq!(board.selected_job().map(|job| job.id), Some(99));
		assert_eq!(board.table_state.selected(), Some(0));
	}

	#[test]
	fn empty_list_has_no_selection() {
		let board = board(0);
		assert!(board.selected_job().is_none());
		assert!(board.page().is_empty());
	}

	#[test]
	fn moving_past_the_page_turns_it() {
		let mut board = board(12);
		for _ in 0..5 {
			assert!(board.move_selection(1));
		}
		assert_eq!(board.pagination.current(), 2);
		assert_eq!(board.selected_index(), Some(5));
		assert_eq!(board.table_state.selected(), Some(0));

		assert!(board.move_selection(-1));
		assert_eq!(board.pagination.current(), 1);
		assert_eq!(board.table_state.selected(), Some(4));
	}

	#[test]
	fn selection_stops_at_the_ends() {
		let mut board = board(3);
		assert!(!board.move_selection(-1));
		assert!(board.move_selection(10));
		assert_eq!(board.selected_index(), Some(2));
		assert!(!board.move_selection(1));
	}

	#[test]
	fn turning_the_page_selects_its_first_job() {
		let mut board = board(12);
		assert!(board.turn_page(Pagination::next));
		assert_eq!(board.selected_index(), Some(5));
		assert!(board.turn_page(|pagination| pagination.select(3)));
		assert_eq!(board.page().len(), 2);
		assert!(!board.turn_page(Pagination::next));
		assert!(!board.select_row(2));
		assert!(board.select_row(1));
		assert_eq!(board.selected_job().map(|job| job.id), Some(12));
	}
}
