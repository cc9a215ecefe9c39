use anyhow::Result;
use ratatui::crossterm::event::{
	KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use super::events::AppEvent;
use super::facets::PickerKind;
use super::state::{DETAIL_PAGE, Focus, View};
use super::{App, BrowseOutcome};
use crate::components::{control_at, point_in_rect, row_at};
use crate::pagination::PageControl;

/// Lines the description moves per wheel notch.
const WHEEL_SCROLL: isize = 3;

impl<'a> App<'a> {
	/// Process a keyboard event and return an outcome if the session ends.
	pub(crate) fn handle_key(&mut self, key: KeyEvent) -> Result<Option<BrowseOutcome>> {
		if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
			return Ok(self.dispatch(AppEvent::Quit));
		}
		let outcome = match self.focus {
			Focus::Search => self.handle_search_key(key),
			Focus::Picker => self.handle_picker_key(key),
			Focus::Results => self.handle_results_key(key),
		};
		Ok(outcome)
	}

	fn handle_search_key(&mut self, key: KeyEvent) -> Option<BrowseOutcome> {
		match key.code {
			KeyCode::Enter => {
				self.focus_results();
				let keyword = self.search_input.text().to_string();
				self.dispatch(AppEvent::SubmitKeyword(keyword))
			}
			KeyCode::Esc => {
				self.focus_results();
				None
			}
			_ => {
				self.search_input.input(key);
				None
			}
		}
	}

	fn handle_picker_key(&mut self, key: KeyEvent) -> Option<BrowseOutcome> {
		match key.code {
			KeyCode::Up => {
				if let Some(picker) = self.picker.as_mut() {
					picker.move_cursor(-1);
				}
				None
			}
			KeyCode::Down => {
				if let Some(picker) = self.picker.as_mut() {
					picker.move_cursor(1);
				}
				None
			}
			KeyCode::Enter => self.choose_picker_entry(),
			KeyCode::Backspace | KeyCode::Delete => self.clear_picker_facet(),
			KeyCode::Esc => {
				self.close_picker();
				None
			}
			_ => None,
		}
	}

	fn handle_results_key(&mut self, key: KeyEvent) -> Option<BrowseOutcome> {
		let event = match key.code {
			KeyCode::Esc | KeyCode::Char('q') => AppEvent::Quit,
			KeyCode::Enter => AppEvent::Apply,
			KeyCode::Up => AppEvent::MoveSelection(-1),
			KeyCode::Down => AppEvent::MoveSelection(1),
			KeyCode::Left => AppEvent::PrevPage,
			KeyCode::Right => AppEvent::NextPage,
			KeyCode::Home => AppEvent::FirstPage,
			KeyCode::End => AppEvent::LastPage,
			KeyCode::PageUp => AppEvent::ScrollDetails(-DETAIL_PAGE),
			KeyCode::PageDown => AppEvent::ScrollDetails(DETAIL_PAGE),
			KeyCode::Char('c') => AppEvent::ClearFilters,
			KeyCode::Char('m') => AppEvent::ToggleView,
			KeyCode::Char('g') => AppEvent::ToggleLogs,
			KeyCode::Char('+') | KeyCode::Char('=') => AppEvent::ZoomIn,
			KeyCode::Char('-') => AppEvent::ZoomOut,
			KeyCode::Char('0') => AppEvent::RefitMap,
			KeyCode::Char('/') => {
				self.focus_search();
				return None;
			}
			KeyCode::Char('l') => return self.show_picker(PickerKind::Location),
			KeyCode::Char('t') => return self.show_picker(PickerKind::JobType),
			KeyCode::Char('s') => return self.show_picker(PickerKind::Salary),
			KeyCode::Char('o') => return self.show_picker(PickerKind::Sort),
			_ => return None,
		};
		self.dispatch(event)
	}

	fn show_picker(&mut self, kind: PickerKind) -> Option<BrowseOutcome> {
		self.open_picker(kind);
		None
	}

	/// Process a mouse event.
	pub(crate) fn handle_mouse(&mut self, mouse: MouseEvent) -> Option<BrowseOutcome> {
		let (column, row) = (mouse.column, mouse.row);
		match mouse.kind {
			MouseEventKind::Down(MouseButton::Left) => self.handle_click(column, row),
			MouseEventKind::ScrollUp => self.handle_wheel(column, row, -1),
			MouseEventKind::ScrollDown => self.handle_wheel(column, row, 1),
			_ => None,
		}
	}

	fn handle_click(&mut self, column: u16, row: u16) -> Option<BrowseOutcome> {
		if self.focus == Focus::Picker {
			let hit = self
				.picker_area
				.filter(|area| point_in_rect(column, row, *area))
				.and_then(|area| list_row(area, row));
			return match hit {
				Some(index) => {
					let chosen = self
						.picker
						.as_mut()
						.is_some_and(|picker| picker.select_index(picker.state.offset() + index));
					if chosen { self.choose_picker_entry() } else { None }
				}
				None => {
					self.close_picker();
					None
				}
			};
		}

		if self.prompt_area.is_some_and(|area| point_in_rect(column, row, area)) {
			self.focus_search();
			return None;
		}
		if self.focus == Focus::Search {
			self.focus_results();
		}

		if let Some(control) = control_at(&self.pager_hitboxes, column, row) {
			return page_event(control).and_then(|event| self.dispatch(event));
		}

		match self.view {
			View::List => {
				if let Some(index) = self
					.board
					.area
					.and_then(|area| row_at(area, row).filter(|_| point_in_rect(column, row, area)))
				{
					return self.dispatch(AppEvent::SelectRow(index));
				}
			}
			View::Map => {
				if let Some(index) = self
					.map
					.list_area
					.filter(|area| point_in_rect(column, row, *area))
					.and_then(|area| list_row(area, row))
				{
					let offset = self.map.list_state.offset();
					self.map.select_marker(offset + index);
				}
			}
		}
		None
	}

	fn handle_wheel(&mut self, column: u16, row: u16, direction: isize) -> Option<BrowseOutcome> {
		if self.focus == Focus::Picker {
			if let Some(picker) = self.picker.as_mut() {
				picker.move_cursor(direction);
			}
			return None;
		}
		if self
			.details
			.area
			.is_some_and(|area| point_in_rect(column, row, area))
		{
			return self.dispatch(AppEvent::ScrollDetails(direction * WHEEL_SCROLL));
		}
		self.dispatch(AppEvent::MoveSelection(direction))
	}
}

/// Event a pager control stands for. Ellipses are inert.
fn page_event(control: PageControl) -> Option<AppEvent> {
	match control {
		PageControl::Previous => Some(AppEvent::PrevPage),
		PageControl::Next => Some(AppEvent::NextPage),
		PageControl::Page(page) => Some(AppEvent::ShowPage(page)),
		PageControl::Ellipsis => None,
	}
}

/// Row index inside a bordered list at `area`.
fn list_row(area: ratatui::layout::Rect, row: u16) -> Option<usize> {
	let top = area.y.saturating_add(1);
	let bottom = area.y.saturating_add(area.height).saturating_sub(1);
	(row >= top && row < bottom).then(|| usize::from(row - top))
}
