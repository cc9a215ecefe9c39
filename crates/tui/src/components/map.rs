//! World map with job markers.

use geojob_api::JobCoordinate;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::symbols::Marker;
use ratatui::text::Span;
use ratatui::widgets::canvas::{Canvas, Map, MapResolution, Points};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState};

use crate::geo::MapViewport;
use crate::style::Theme;

pub struct MapContext<'a> {
	pub title: &'a str,
	pub viewport: &'a MapViewport,
	pub coords: &'a [JobCoordinate],
	/// Indices into `coords` that have a position.
	pub markers: &'a [usize],
	/// Index into `markers` of the highlighted marker.
	pub selected: Option<usize>,
	pub theme: &'a Theme,
}

pub fn render_map(frame: &mut Frame, area: Rect, ctx: MapContext<'_>) {
	let bounds = ctx.viewport.bounds();
	let theme = ctx.theme;

	let positions: Vec<(f64, f64)> = ctx
		.markers
		.iter()
		.filter_map(|&index| ctx.coords.get(index))
		.filter_map(JobCoordinate::position)
		.map(|(lat, lon)| (lon, lat))
		.collect();
	let selected = ctx
		.selected
		.and_then(|marker| ctx.markers.get(marker))
		.and_then(|&index| ctx.coords.get(index))
		.and_then(|coord| coord.position().map(|(lat, lon)| (coord.job().title.clone(), lon, lat)));

	let canvas = Canvas::default()
		.block(
			Block::default()
				.borders(Borders::ALL)
				.border_set(ratatui::symbols::border::ROUNDED)
				.border_style(theme.border_style())
				.title(format!(
					"{} · {} of {} jobs located",
					ctx.title,
					ctx.markers.len(),
					ctx.coords.len()
				)),
		)
		.marker(Marker::Braille)
		.x_bounds([bounds.west, bounds.east])
		.y_bounds([bounds.south, bounds.north])
		.paint(move |painter| {
			painter.draw(&Map {
				resolution: MapResolution::High,
				color: theme.empty.fg.unwrap_or(ratatui::style::Color::Reset),
			});
			painter.layer();
			painter.draw(&Points {
				coords: &positions,
				color: theme.marker_color(false),
			});
			if let Some((title, lon, lat)) = &selected {
				painter.draw(&Points {
					coords: &[(*lon, *lat)],
					color: theme.marker_color(true),
				});
				painter.print(
					*lon,
					*lat,
					Span::styled(format!(" ◆ {title}"), theme.marker_selected),
				);
			}
		});
	frame.render_widget(canvas, area);
}

/// List of located jobs; the highlighted entry is the selected marker.
pub fn render_marker_list(
	frame: &mut Frame,
	area: Rect,
	title: &str,
	entries: Vec<String>,
	state: &mut ListState,
	theme: &Theme,
) {
	let items: Vec<ListItem> = entries.into_iter().map(ListItem::new).collect();
	let list = List::new(items)
		.block(
			Block::default()
				.borders(Borders::ALL)
				.border_set(ratatui::symbols::border::ROUNDED)
				.border_style(theme.border_style())
				.title(title.to_string()),
		)
		.style(Style::default())
		.highlight_style(theme.row_highlight)
		.highlight_symbol("◆ ");
	frame.render_stateful_widget(list, area, state);
}
