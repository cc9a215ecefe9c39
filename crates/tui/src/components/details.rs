//! Detail pane for the selected job.

use geojob_api::Job;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use unicode_width::UnicodeWidthStr;

use super::scrollbar::{ScrollMetrics, render_scrollbar};
use crate::format::{format_date, format_salary, location_label};
use crate::style::Theme;

pub struct DetailsContext<'a> {
	pub job: Option<&'a Job>,
	/// Description already converted to plain lines.
	pub description: &'a [String],
	pub scroll: usize,
	pub title: &'a str,
	pub no_selection_message: &'a str,
	pub theme: &'a Theme,
}

/// Render the pane and return the scroll limits of its content.
pub fn render_details(frame: &mut Frame, area: Rect, ctx: DetailsContext<'_>) -> ScrollMetrics {
	let block = Block::default()
		.borders(Borders::ALL)
		.border_set(ratatui::symbols::border::ROUNDED)
		.border_style(ctx.theme.border_style())
		.title(ctx.title.to_string());
	let inner = block.inner(area);
	frame.render_widget(block, area);

	let Some(job) = ctx.job else {
		let message = Paragraph::new(Span::styled(
			ctx.no_selection_message.to_string(),
			ctx.theme.empty_style(),
		))
		.alignment(ratatui::layout::Alignment::Center);
		frame.render_widget(message, inner);
		return ScrollMetrics::default();
	};

	// One column is reserved for the scrollbar so wrapping never reflows.
	let wrap_width = usize::from(inner.width.saturating_sub(1)).max(1);
	let mut lines = summary_lines(job, ctx.theme);
	lines.push(Line::default());
	lines.extend(
		wrap_lines(ctx.description, wrap_width)
			.into_iter()
			.map(Line::from),
	);

	let metrics = ScrollMetrics::compute(lines.len(), usize::from(inner.height));
	let scroll = metrics.clamp(ctx.scroll);
	let content = if metrics.needs_scrollbar() {
		let mut state = metrics.state(scroll);
		render_scrollbar(frame, inner, &mut state, ctx.theme)
	} else {
		inner
	};

	let paragraph = Paragraph::new(lines).scroll((scroll.min(usize::from(u16::MAX)) as u16, 0));
	frame.render_widget(paragraph, content);
	metrics
}

fn summary_lines(job: &Job, theme: &Theme) -> Vec<Line<'static>> {
	let label = |text: &'static str| Span::styled(text, theme.empty_style());
	let posted = job
		.date
		.and_then(format_date)
		.unwrap_or_else(|| "—".to_string());
	let salary = job
		.salary
		.map(format_salary)
		.unwrap_or_else(|| "—".to_string());
	let apply = match job.apply_link() {
		Some(url) => Span::styled(url.to_string(), theme.highlight_style()),
		None => Span::styled("Apply unavailable", theme.empty_style()),
	};

	vec![
		Line::from(Span::styled(
			job.title.clone(),
			Style::default().add_modifier(Modifier::BOLD),
		)),
		Line::from(vec![label("Company   "), Span::raw(job.company.clone())]),
		Line::from(vec![label("Location  "), Span::raw(location_label(job))]),
		Line::from(vec![
			label("Type      "),
			Span::raw(job.job_type.clone().unwrap_or_else(|| "—".to_string())),
		]),
		Line::from(vec![label("Posted    "), Span::raw(posted)]),
		Line::from(vec![label("Salary    "), Span::raw(salary)]),
		Line::from(vec![label("Apply     "), apply]),
	]
}

/// Greedy word wrap on display width. Words wider than `width` are split.
#[must_use]
pub fn wrap_lines(lines: &[String], width: usize) -> Vec<String> {
	let width = width.max(1);
	let mut wrapped = Vec::with_capacity(lines.len());
	for line in lines {
		if line.is_empty() {
			wrapped.push(String::new());
			continue;
		}
		let mut current = String::new();
		for word in line.split(' ').filter(|word| !word.is_empty()) {
			let needed = if current.is_empty() {
				word.width()
			} else {
				current.width() + 1 + word.width()
			};
			if needed > width && !current.is_empty() {
				wrapped.push(std::mem::take(&mut current));
			}
			if word.width() > width {
				for ch in word.chars() {
					if current.width() + ch.to_string().width() > width {
						wrapped.push(std::mem::take(&mut current));
					}
					current.push(ch);
				}
				continue;
			}
			if !current.is_empty() {
				current.push(' ');
			}
			current.push_str(word);
		}
		if !current.is_empty() {
			wrapped.push(current);
		}
	}
	wrapped
}
