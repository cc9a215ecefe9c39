use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use throbber_widgets_tui::{Throbber, ThrobberState};
use unicode_width::UnicodeWidthStr;

use crate::input::SearchInput;
use crate::style::Theme;

/// Argument bundle for rendering the prompt row.
pub struct InputContext<'a> {
	pub search_input: &'a SearchInput<'a>,
	/// Title rendered before the prompt.
	pub title: &'a str,
	/// Placeholder text shown when input is empty.
	pub placeholder: Option<&'a str>,
	pub area: Rect,
	pub theme: &'a Theme,
}

/// Request activity for the right-aligned status indicator.
pub struct ProgressState<'a> {
	pub progress_text: &'a str,
	/// Hides the spinner when nothing is in flight.
	pub progress_complete: bool,
	pub throbber_state: &'a ThrobberState,
}

/// Render the title, the search prompt and the request status. Returns the
/// area occupied by the editable input.
pub fn render_input(frame: &mut Frame, input: InputContext<'_>, progress: ProgressState<'_>) -> Rect {
	let InputContext {
		search_input,
		title,
		placeholder,
		area,
		theme,
	} = input;

	let prefix = format!("{title} ❯ ");
	let [prefix_area, input_area] = Layout::horizontal([
		Constraint::Length(prefix.width() as u16),
		Constraint::Fill(1),
	])
	.areas(area);
	frame.render_widget(Line::from(Span::styled(prefix, theme.header)), prefix_area);

	search_input.render_textarea(frame, input_area);

	if search_input.text().is_empty()
		&& let Some(placeholder_text) = placeholder
	{
		render_placeholder(frame, input_area, placeholder_text, theme);
	}

	render_progress(frame, input_area, progress, theme);
	input_area
}

fn render_placeholder(frame: &mut Frame, area: Rect, text: &str, theme: &Theme) {
	if area.width <= 1 || area.height == 0 || text.is_empty() {
		return;
	}
	// Leave the first cell to the cursor.
	let display_text: String = text.chars().take(usize::from(area.width) - 1).collect();
	frame.buffer_mut().set_line(
		area.left() + 1,
		area.top(),
		&Line::from(Span::styled(display_text, theme.empty_style())),
		area.width - 1,
	);
}

fn render_progress(frame: &mut Frame, area: Rect, progress: ProgressState<'_>, theme: &Theme) {
	let ProgressState {
		progress_text,
		progress_complete,
		throbber_state,
	} = progress;
	if area.width == 0 || area.height == 0 || progress_text.is_empty() {
		return;
	}

	let muted_style = theme.empty_style();
	let mut line = Line::default();
	if !progress_complete {
		let spinner = Throbber::default()
			.style(muted_style)
			.throbber_style(theme.highlight_style());
		line.spans.push(spinner.to_symbol_span(throbber_state));
	}
	line.spans
		.push(Span::styled(progress_text.to_string(), muted_style));

	let line_width = line.width() as u16;
	let buffer = frame.buffer_mut();
	let input_row = area.top();

	// Keep a gap after whatever is typed.
	let mut start_x = area.right().saturating_sub(line_width).max(area.left());
	let last_char_x = (area.left()..area.right())
		.filter(|&x| {
			buffer
				.cell((x, input_row))
				.is_some_and(|cell| !cell.symbol().trim().is_empty())
		})
		.last();
	if let Some(last_x) = last_char_x {
		start_x = start_x.max(last_x.saturating_add(3));
	}
	if start_x >= area.right() {
		return;
	}

	let max_width = area.right().saturating_sub(start_x).min(line_width);
	buffer.set_line(start_x, input_row, &line, max_width);
}
