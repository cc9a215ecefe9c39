//! Filter summary bar and the facet picker popup.

use geojob_api::{FilterSelection, SortBy};
use ratatui::Frame;
use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState};
use unicode_width::UnicodeWidthStr;

use crate::format::format_salary_band;
use crate::style::Theme;

const KEY_HINTS: &str = "l location · t type · s salary · o sort · m map · g logs";
/// Only offered while a facet is set.
const CLEAR_HINT: &str = " · c clear";
const PICKER_HINT: &str = " Enter choose · ⌫ clear · Esc close ";

/// Render the active filters followed by the key hints.
pub fn render_filter_bar(
	frame: &mut Frame,
	area: Rect,
	selection: &FilterSelection,
	sort: SortBy,
	theme: &Theme,
) {
	let value = |text: Option<String>| match text {
		Some(text) => Span::styled(text, theme.highlight_style()),
		None => Span::styled("any", theme.empty_style()),
	};
	let salary = selection
		.salary
		.map(|band| format_salary_band(band.min as f64, band.max as f64));
	let sort_text = (sort != SortBy::Default).then(|| sort.label().to_string());
	let mut hints = format!("    {KEY_HINTS}");
	if selection.has_facets() {
		hints.push_str(CLEAR_HINT);
	}

	let separator = || Span::styled(" · ", theme.empty_style());
	let spans = vec![
		Span::raw("Location: "),
		value(selection.location.clone()),
		separator(),
		Span::raw("Type: "),
		value(selection.job_type.clone()),
		separator(),
		Span::raw("Salary: "),
		value(salary),
		separator(),
		Span::raw("Sort: "),
		value(sort_text),
		Span::styled(hints, theme.empty_style()),
	];
	frame.render_widget(Line::from(spans), area);
}

/// Centred popup rectangle of at most `width` x `height` cells.
#[must_use]
pub fn popup_area(area: Rect, width: u16, height: u16) -> Rect {
	let [vertical] = Layout::vertical([Constraint::Length(height.min(area.height))])
		.flex(Flex::Center)
		.areas(area);
	let [popup] = Layout::horizontal([Constraint::Length(width.min(area.width))])
		.flex(Flex::Center)
		.areas(vertical);
	popup
}

pub struct PickerView<'a> {
	pub title: &'a str,
	pub entries: &'a [String],
	pub theme: &'a Theme,
}

/// Render the picker popup over `area` and return the list area.
pub fn render_picker(
	frame: &mut Frame,
	area: Rect,
	view: PickerView<'_>,
	state: &mut ListState,
) -> Rect {
	let longest = view
		.entries
		.iter()
		.map(|entry| entry.chars().count())
		.max()
		.unwrap_or(0)
		.max(view.title.chars().count());
	// Wide enough for the bottom hint between the corners.
	let min_width = (PICKER_HINT.width() as u16).saturating_add(2);
	let width = (longest as u16).saturating_add(6).max(min_width);
	let height = (view.entries.len() as u16).saturating_add(2).min(16);
	let popup = popup_area(area, width, height);

	frame.render_widget(Clear, popup);
	let items: Vec<ListItem> = view
		.entries
		.iter()
		.map(|entry| ListItem::new(entry.as_str()))
		.collect();
	let list = List::new(items)
		.block(
			Block::default()
				.borders(Borders::ALL)
				.border_set(ratatui::symbols::border::ROUNDED)
				.border_style(view.theme.focus_border_style())
				.title(format!(" {} ", view.title))
				.title_bottom(Line::from(PICKER_HINT).right_aligned()),
		)
		.highlight_style(view.theme.row_highlight)
		.highlight_symbol("▶ ");
	frame.render_stateful_widget(list, popup, state);
	popup
}
