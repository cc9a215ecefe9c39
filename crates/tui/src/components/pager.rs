//! Page-button bar under the job table.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

use crate::pagination::{PageControl, Pagination};
use crate::style::Theme;

/// Screen cells occupied by one clickable control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageHitbox {
	pub area: Rect,
	pub control: PageControl,
}

/// Lay the controls out left to right, one space apart, and return where
/// each landed. Controls that do not fit are dropped from the end.
#[must_use]
pub fn layout_controls(area: Rect, controls: &[PageControl]) -> Vec<PageHitbox> {
	let mut hitboxes = Vec::with_capacity(controls.len());
	let mut x = area.x;
	let right = area.right();
	for control in controls {
		let width = button_label(*control).width() as u16;
		if x.saturating_add(width) > right {
			break;
		}
		hitboxes.push(PageHitbox {
			area: Rect::new(x, area.y, width, 1),
			control: *control,
		});
		x = x.saturating_add(width + 1);
	}
	hitboxes
}

fn button_label(control: PageControl) -> String {
	match control {
		PageControl::Page(_) => format!("[{}]", control.label()),
		_ => control.label(),
	}
}

/// Render the pager for `pagination`, returning the hitboxes for mouse input.
pub fn render_pager(
	frame: &mut Frame,
	area: Rect,
	pagination: &Pagination,
	theme: &Theme,
) -> Vec<PageHitbox> {
	if area.width == 0 || area.height == 0 {
		return Vec::new();
	}
	let controls = pagination.controls();
	let hitboxes = layout_controls(area, &controls);
	let last_page = pagination.page_count();

	let mut spans = Vec::with_capacity(hitboxes.len() * 2);
	for (index, hitbox) in hitboxes.iter().enumerate() {
		if index > 0 {
			spans.push(Span::raw(" "));
		}
		let style = match hitbox.control {
			PageControl::Page(page) if page == pagination.current() => theme.highlight_style(),
			PageControl::Previous if pagination.current() <= 1 => theme.empty_style(),
			PageControl::Next if pagination.current() >= last_page => theme.empty_style(),
			PageControl::Ellipsis => theme.empty_style(),
			_ => Style::default(),
		};
		spans.push(Span::styled(button_label(hitbox.control), style));
	}
	if last_page > 0 {
		spans.push(Span::styled(
			format!("  {} jobs", pagination.total_items()),
			theme.empty_style(),
		));
	}
	frame.render_widget(Line::from(spans), area);
	hitboxes
}

/// Control under the mouse, if any.
#[must_use]
pub fn control_at(hitboxes: &[PageHitbox], column: u16, row: u16) -> Option<PageControl> {
	hitboxes
		.iter()
		.find(|hitbox| super::point_in_rect(column, row, hitbox.area))
		.map(|hitbox| hitbox.control)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn hitboxes_follow_label_widths() {
		let controls = [
			PageControl::Previous,
			PageControl::Page(1),
			PageControl::Ellipsis,
			PageControl::Page(12),
			PageControl::Next,
		];
		let hitboxes = layout_controls(Rect::new(0, 5, 80, 1), &controls);
		let spans: Vec<(u16, u16)> = hitboxes.iter().map(|hb| (hb.area.x, hb.area.width)).collect();
		// "‹ Prev" "[1]" "…" "[12]" "Next ›"
		assert_eq!(spans, vec![(0, 6), (7, 3), (11, 1), (13, 4), (18, 6)]);
		assert_eq!(control_at(&hitboxes, 14, 5), Some(PageControl::Page(12)));
		assert_eq!(control_at(&hitboxes, 10, 5), None);
		assert_eq!(control_at(&hitboxes, 14, 4), None);
	}

	#[test]
	fn narrow_bars_truncate() {
		let hitboxes = layout_controls(
			Rect::new(0, 0, 10, 1),
			&[PageControl::Previous, PageControl::Page(1), PageControl::Next],
		);
		let kept: Vec<PageControl> = hitboxes.iter().map(|hb| hb.control).collect();
		assert_eq!(kept, vec![PageControl::Previous, PageControl::Page(1)]);
	}
}
