//! Scrollbar shared by the job table and the description pane.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::widgets::{Scrollbar, ScrollbarOrientation, ScrollbarState};

use crate::style::Theme;

/// Scroll limits for a viewport over `content_length` lines.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScrollMetrics {
	pub content_length: usize,
	pub viewport_len: usize,
	pub max_scroll: usize,
}

impl ScrollMetrics {
	/// Returns empty metrics if either value is zero.
	#[must_use]
	pub fn compute(content_length: usize, viewport_height: usize) -> Self {
		if content_length == 0 || viewport_height == 0 {
			return Self::default();
		}
		let viewport_len = viewport_height.min(content_length);
		Self {
			content_length,
			viewport_len,
			max_scroll: content_length - viewport_len,
		}
	}

	#[must_use]
	pub fn needs_scrollbar(&self) -> bool {
		self.max_scroll > 0
	}

	#[must_use]
	pub fn clamp(&self, scroll: usize) -> usize {
		scroll.min(self.max_scroll)
	}

	#[must_use]
	pub fn state(&self, scroll: usize) -> ScrollbarState {
		ScrollbarState::new(self.max_scroll.saturating_add(1)).position(self.clamp(scroll))
	}
}

/// Check if a point (column, row) is inside a rectangle.
#[must_use]
pub fn point_in_rect(column: u16, row: u16, area: Rect) -> bool {
	if area.width == 0 || area.height == 0 {
		return false;
	}
	let inside_x = column >= area.x && column < area.x.saturating_add(area.width);
	let inside_y = row >= area.y && row < area.y.saturating_add(area.height);
	inside_x && inside_y
}

/// Render a vertical scrollbar on the right edge of `area` and return the
/// remaining content area.
pub fn render_scrollbar(
	frame: &mut Frame,
	area: Rect,
	scrollbar_state: &mut ScrollbarState,
	theme: &Theme,
) -> Rect {
	let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
		.begin_symbol(None)
		.end_symbol(None)
		.track_symbol(Some("│"))
		.style(theme.border_style());

	let [content, bar] = ratatui::layout::Layout::horizontal([
		ratatui::layout::Constraint::Fill(1),
		ratatui::layout::Constraint::Length(1),
	])
	.areas(area);
	frame.render_stateful_widget(scrollbar, bar, scrollbar_state);
	content
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn metrics_for_overflowing_content() {
		let metrics = ScrollMetrics::compute(30, 8);
		assert_eq!(metrics.viewport_len, 8);
		assert_eq!(metrics.max_scroll, 22);
		assert!(metrics.needs_scrollbar());
		assert_eq!(metrics.clamp(100), 22);
	}

	#[test]
	fn short_content_does_not_scroll() {
		let metrics = ScrollMetrics::compute(3, 8);
		assert!(!metrics.needs_scrollbar());
		assert_eq!(metrics.clamp(5), 0);
		assert_eq!(ScrollMetrics::compute(0, 8), ScrollMetrics::default());
	}

	#[test]
	fn points_on_the_edge_are_outside() {
		let area = Rect::new(2, 2, 4, 3);
		assert!(point_in_rect(2, 2, area));
		assert!(point_in_rect(5, 4, area));
		assert!(!point_in_rect(6, 4, area));
		assert!(!point_in_rect(0, 0, Rect::new(0, 0, 0, 0)));
	}
}
