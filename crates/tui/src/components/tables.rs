use ratatui::Frame;
use ratatui::layout::{Constraint, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, HighlightSpacing, Paragraph, Row, Table, TableState};

use crate::style::Theme;

pub(crate) const HIGHLIGHT_SYMBOL: &str = "▶ ";
pub(crate) const TABLE_COLUMN_SPACING: u16 = 1;
/// Header row + separator height inside the table's viewport.
pub(crate) const TABLE_HEADER_ROWS: u16 = 2;

/// Fully materialized table configuration.
pub struct TableSpec<'a> {
	pub headers: Vec<&'a str>,
	pub widths: Vec<Constraint>,
	pub rows: Vec<Row<'a>>,
	pub title: Option<String>,
	/// Whether the pane holding the table has keyboard focus.
	pub focused: bool,
}

/// Render a bordered table and return the inner area the rows occupy, header included.
pub fn render_table(
	frame: &mut Frame,
	area: Rect,
	table_state: &mut TableState,
	spec: TableSpec<'_>,
	theme: &Theme,
) -> Rect {
	let border_style = if spec.focused {
		theme.focus_border_style()
	} else {
		theme.border_style()
	};
	let mut block = Block::default()
		.borders(Borders::ALL)
		.border_set(ratatui::symbols::border::ROUNDED)
		.border_style(border_style);
	if let Some(title) = spec.title {
		block = block.title(title);
	}

	let inner = block.inner(area);
	frame.render_widget(block, area);

	let header = Row::new(spec.headers.into_iter().map(Cell::from).collect::<Vec<_>>())
		.style(theme.header)
		.height(1)
		.bottom_margin(1);

	let widths = if spec.widths.is_empty() {
		vec![Constraint::Fill(1)]
	} else {
		spec.widths
	};

	let table = Table::new(spec.rows, widths)
		.header(header)
		.column_spacing(TABLE_COLUMN_SPACING)
		.highlight_spacing(HighlightSpacing::Always)
		.row_highlight_style(theme.row_highlight)
		.highlight_symbol(HIGHLIGHT_SYMBOL);
	frame.render_stateful_widget(table, inner, table_state);

	render_header_separator(frame, inner, theme);
	inner
}

fn render_header_separator(frame: &mut Frame, area: Rect, theme: &Theme) {
	if area.height <= 1 || area.width <= 2 {
		return;
	}
	let separator = Rect {
		x: area.x,
		y: area.y + 1,
		width: area.width,
		height: 1,
	};
	let middle = "─".repeat(usize::from(area.width) - 2);
	let line = Line::from(vec![
		Span::raw(" "),
		Span::styled(middle, theme.border_style()),
		Span::raw(" "),
	]);
	frame.render_widget(Paragraph::new(line), separator);
}

/// Row offset (0-based, into the table rows) under a click at `row`, if any.
#[must_use]
pub fn row_at(inner: Rect, row: u16) -> Option<usize> {
	let first_row = inner.y.saturating_add(TABLE_HEADER_ROWS);
	if row < first_row || row >= inner.y.saturating_add(inner.height) {
		return None;
	}
	Some(usize::from(row - first_row))
}
