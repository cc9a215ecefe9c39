use ratatui::layout::{Constraint, Layout, Margin, Rect};

use crate::app::View;

/// Height of the log console when shown.
const LOG_CONSOLE_HEIGHT: u16 = 8;

/// Screen regions for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct AppLayout {
	pub prompt: Rect,
	pub filters: Rect,
	/// Job table (list view) or canvas (map view).
	pub primary: Rect,
	/// Pager row under the table; empty in the map view.
	pub pager: Rect,
	/// Marker list in the map view; empty in the list view.
	pub markers: Rect,
	pub details: Rect,
	pub logs: Option<Rect>,
}

impl AppLayout {
	pub(crate) fn compute(area: Rect, view: View, show_logs: bool) -> Self {
		let area = area.inner(Margin {
			vertical: 0,
			horizontal: 1,
		});
		let logs_height = if show_logs { LOG_CONSOLE_HEIGHT } else { 0 };
		let [prompt, filters, body, logs] = Layout::vertical([
			Constraint::Length(1),
			Constraint::Length(1),
			Constraint::Min(3),
			Constraint::Length(logs_height),
		])
		.areas(area);
		let logs = show_logs.then_some(logs);

		match view {
			View::List => {
				let [left, details] =
					Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
						.areas(body);
				let [primary, pager] =
					Layout::vertical([Constraint::Min(3), Constraint::Length(1)]).areas(left);
				Self {
					prompt,
					filters,
					primary,
					pager,
					markers: Rect::default(),
					details,
					logs,
				}
			}
			View::Map => {
				let [primary, side] =
					Layout::horizontal([Constraint::Percentage(60), Constraint::Percentage(40)])
						.areas(body);
				let [markers, details] =
					Layout::vertical([Constraint::Percentage(40), Constraint::Percentage(60)])
						.areas(side);
				Self {
					prompt,
					filters,
					primary,
					pager: Rect::default(),
					markers,
					details,
					logs,
				}
			}
		}
	}
}
