//! Fixed-size paging over the active job list.
//!
//! The page-button bar shows a window of at most five page numbers, padded
//! with the first/last page and ellipses when the list is long. The window and
//! the full control sequence are plain data so rendering and mouse hit-testing
//! agree on what is on screen.

use std::ops::{Range, RangeInclusive};

/// Jobs shown per page.
pub const PAGE_SIZE: usize = 5;

/// Up to this many pages are listed without a window.
const MAX_UNWINDOWED_PAGES: usize = 9;
/// Width of the window anchored to the first or last page.
const EDGE_WINDOW: usize = 5;

/// Contiguous run of page numbers shown between the optional edge buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
	pub start: usize,
	pub end: usize,
	pub total: usize,
}

impl PageWindow {
	/// Compute the window for `total` pages with `current` selected (1-indexed).
	///
	/// `current` is clamped into `1..=total`. With no pages the window is empty.
	#[must_use]
	pub fn compute(total: usize, current: usize) -> Self {
		if total == 0 {
			return Self {
				start: 1,
				end: 0,
				total,
			};
		}
		let current = current.clamp(1, total);
		let (start, end) = if total <= MAX_UNWINDOWED_PAGES {
			(1, total)
		} else if current <= EDGE_WINDOW {
			(1, EDGE_WINDOW)
		} else if current + EDGE_WINDOW - 1 >= total {
			(total - (EDGE_WINDOW - 1), total)
		} else {
			(current - 1, current + 1)
		};
		Self { start, end, total }
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.end < self.start
	}

	#[must_use]
	pub fn pages(&self) -> RangeInclusive<usize> {
		self.start..=self.end
	}

	/// Whether a standalone "1" button precedes the window.
	#[must_use]
	pub fn shows_first(&self) -> bool {
		!self.is_empty() && self.start > 1
	}

	#[must_use]
	pub fn leading_ellipsis(&self) -> bool {
		!self.is_empty() && self.start > 2
	}

	/// Whether a standalone last-page button follows the window.
	#[must_use]
	pub fn shows_last(&self) -> bool {
		!self.is_empty() && self.end < self.total
	}

	#[must_use]
	pub fn trailing_ellipsis(&self) -> bool {
		!self.is_empty() && self.end + 1 < self.total
	}
}

/// One button of the page bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageControl {
	Previous,
	Page(usize),
	Ellipsis,
	Next,
}

impl PageControl {
	#[must_use]
	pub fn label(&self) -> String {
		match self {
			PageControl::Previous => "‹ Prev".to_string(),
			PageControl::Page(page) => page.to_string(),
			PageControl::Ellipsis => "…".to_string(),
			PageControl::Next => "Next ›".to_string(),
		}
	}
}

/// Current page over a list of `total_items` entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pagination {
	current: usize,
	total_items: usize,
}

impl Default for Pagination {
	fn default() -> Self {
		Self::new(0)
	}
}

impl Pagination {
	#[must_use]
	pub fn new(total_items: usize) -> Self {
		Self {
			current: 1,
			total_items,
		}
	}

	/// Start over on page one for a freshly received list.
	pub fn reset(&mut self, total_items: usize) {
		self.total_items = total_items;
		self.current = 1;
	}

	#[must_use]
	pub fn current(&self) -> usize {
		self.current
	}

	#[must_use]
	pub fn total_items(&self) -> usize {
		self.total_items
	}

	#[must_use]
	pub fn page_count(&self) -> usize {
		self.total_items.div_ceil(PAGE_SIZE)
	}

	#[must_use]
	pub fn window(&self) -> PageWindow {
		PageWindow::compute(self.page_count(), self.current)
	}

	/// Indices of the jobs on the current page.
	#[must_use]
	pub fn item_range(&self) -> Range<usize> {
		let start = (self.current - 1) * PAGE_SIZE;
		let start = start.min(self.total_items);
		let end = (start + PAGE_SIZE).min(self.total_items);
		start..end
	}

	/// Page containing the item at `index`.
	#[must_use]
	pub fn page_of(index: usize) -> usize {
		index / PAGE_SIZE + 1
	}

	/// Jump to `page`. Returns `false` when the page does not exist or is
	/// already current.
	pub fn select(&mut self, page: usize) -> bool {
		if page == 0 || page > self.page_count() || page == self.current {
			return false;
		}
		self.current = page;
		true
	}

	pub fn next(&mut self) -> bool {
		self.select(self.current + 1)
	}

	pub fn prev(&mut self) -> bool {
		match self.current.checked_sub(1) {
			Some(page) => self.select(page),
			None => false,
		}
	}

	pub fn first(&mut self) -> bool {
		self.select(1)
	}

	pub fn last(&mut self) -> bool {
		self.select(self.page_count())
	}

	/// Button sequence: previous, optional first page and ellipsis, the window,
	/// optional ellipsis and last page, next.
	#[must_use]
	pub fn controls(&self) -> Vec<PageControl> {
		let window = self.window();
		let mut controls = vec![PageControl::Previous];
		if window.shows_first() {
			controls.push(PageControl::Page(1));
		}
		if window.leading_ellipsis() {
			controls.push(PageControl::Ellipsis);
		}
		controls.extend(window.pages().map(PageControl::Page));
		if window.trailing_ellipsis() {
			controls.push(PageControl::Ellipsis);
		}
		if window.shows_last() {
			controls.push(PageControl::Page(window.total));
		}
		controls.push(PageControl::Next);
		controls
	}
}
