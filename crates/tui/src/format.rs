//! Display formatting for job fields.

use chrono::{DateTime, Utc};
use geojob_api::Job;
use scraper::{ElementRef, Html, Node};

/// Render a salary as whole dollars with thousands separators, e.g. `$85,000`.
#[must_use]
pub fn format_salary(amount: f64) -> String {
	if !amount.is_finite() {
		return String::from("—");
	}
	let negative = amount < 0.0;
	let cents = (amount.abs() * 100.0).round() as u64;
	let mut text = format!("${}", group_thousands(cents / 100));
	if cents % 100 != 0 {
		text.push_str(&format!(".{:02}", cents % 100));
	}
	if negative {
		text.insert(0, '-');
	}
	text
}

/// `min - max` salary band label.
#[must_use]
pub fn format_salary_band(min: f64, max: f64) -> String {
	format!("{} - {}", format_salary(min), format_salary(max))
}

fn group_thousands(value: u64) -> String {
	let digits = value.to_string();
	let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
	for (index, ch) in digits.chars().enumerate() {
		if index > 0 && (digits.len() - index) % 3 == 0 {
			grouped.push(',');
		}
		grouped.push(ch);
	}
	grouped
}

/// Posting date as `YYYY-MM-DD` in UTC.
#[must_use]
pub fn format_date(millis: i64) -> Option<String> {
	DateTime::<Utc>::from_timestamp_millis(millis).map(|date| date.format("%Y-%m-%d").to_string())
}

/// Best available location text for a job.
#[must_use]
pub fn location_label(job: &Job) -> String {
	if let Some(location) = job.location.as_deref().filter(|loc| !loc.trim().is_empty()) {
		return location.trim().to_string();
	}
	let parts: Vec<&str> = [job.city.as_deref(), job.province.as_deref()]
		.into_iter()
		.flatten()
		.map(str::trim)
		.filter(|part| !part.is_empty())
		.collect();
	if parts.is_empty() {
		String::from("—")
	} else {
		parts.join(", ")
	}
}

const BLOCK_ELEMENTS: &[&str] = &[
	"p", "div", "section", "article", "header", "footer", "blockquote", "pre", "table", "tr",
	"ul", "ol", "h1", "h2", "h3", "h4", "h5", "h6", "hr",
];
const SKIPPED_ELEMENTS: &[&str] = &["script", "style", "head", "title"];

/// Convert a rich-text description into plain lines.
///
/// Block elements start new lines, list items get a bullet and runs of
/// whitespace collapse to a single space. Input without markup keeps its own
/// line breaks.
#[must_use]
pub fn html_to_text(source: &str) -> Vec<String> {
	if !source.contains('<') {
		return plain_lines(source);
	}

	let fragment = Html::parse_fragment(source);
	let mut collector = TextCollector::default();
	collector.walk(fragment.root_element());
	collector.finish()
}

fn plain_lines(source: &str) -> Vec<String> {
	let mut collector = TextCollector::default();
	for line in source.lines() {
		if line.trim().is_empty() {
			collector.paragraph();
		} else {
			collector.push_text(line);
			collector.break_line();
		}
	}
	collector.finish()
}

#[derive(Default)]
struct TextCollector {
	lines: Vec<String>,
	current: String,
}

impl TextCollector {
	fn walk(&mut self, element: ElementRef<'_>) {
		for child in element.children() {
			match child.value() {
				Node::Text(text) => self.push_text(text),
				Node::Element(_) => {
					if let Some(child) = ElementRef::wrap(child) {
						self.element(child);
					}
				}
				_ => {}
			}
		}
	}

	fn element(&mut self, element: ElementRef<'_>) {
		let name = element.value().name();
		if SKIPPED_ELEMENTS.contains(&name) {
			return;
		}
		match name {
			"br" => self.break_line(),
			"li" => {
				self.break_line();
				self.current.push_str("• ");
				self.walk(element);
				self.break_line();
			}
			name if BLOCK_ELEMENTS.contains(&name) => {
				self.paragraph();
				self.walk(element);
				self.paragraph();
			}
			_ => self.walk(element),
		}
	}

	fn push_text(&mut self, text: &str) {
		for ch in text.chars() {
			if ch.is_whitespace() {
				if !self.current.is_empty() && !self.current.ends_with(' ') {
					self.current.push(' ');
				}
			} else {
				self.current.push(ch);
			}
		}
	}

	fn break_line(&mut self) {
		let line = self.current.trim_end();
		if !line.is_empty() {
			self.lines.push(line.to_string());
		}
		self.current.clear();
	}

	/// End the current line and leave one blank line before the next block.
	fn paragraph(&mut self) {
		self.break_line();
		if self.lines.last().is_some_and(|line| !line.is_empty()) {
			self.lines.push(String::new());
		}
	}

	fn finish(mut self) -> Vec<String> {
		self.break_line();
		while self.lines.last().is_some_and(String::is_empty) {
			self.lines.pop();
		}
		self.lines
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn salary_uses_thousands_separators() {
		assert_eq!(format_salary(85_000.0), "$85,000");
		assert_eq!(format_salary(1_234_567.0), "$1,234,567");
		assert_eq!(format_salary(999.0), "$999");
		assert_eq!(format_salary(52_000.5), "$52,000.50");
		assert_eq!(format_salary_band(50_000.0, 100_000.0), "$50,000 - $100,000");
	}

	#[test]
	fn date_is_rendered_in_utc() {
		assert_eq!(format_date(1_717_200_000_000).as_deref(), Some("2024-06-01"));
		assert_eq!(format_date(0).as_deref(), Some("1970-01-01"));
	}

	#[test]
	fn location_falls_back_to_city_and_province() {
		let job = Job::new(1, "Dev", "Acme");
		assert_eq!(location_label(&job), "—");

		let mut job = job;
		job.city = Some("Ottawa".into());
		job.province = Some("ON".into());
		assert_eq!(location_label(&job), "Ottawa, ON");

		let job = job.with_location("Remote");
		assert_eq!(location_label(&job), "Remote");
	}

	#[test]
	fn html_blocks_and_lists_become_lines() {
		let html = "<p>We are <b>hiring</b>.</p><ul><li>Rust</li><li>SQL\n  and   Kafka</li></ul><p>Apply<br>today</p>";
		assert_eq!(
			html_to_text(html),
			vec![
				"We are hiring.",
				"",
				"• Rust",
				"• SQL and Kafka",
				"",
				"Apply",
				"today",
			]
		);
	}

	#[test]
	fn scripts_are_dropped() {
		let html = "<div>Visible<script>alert(1)</script></div>";
		assert_eq!(html_to_text(html), vec!["Visible"]);
	}

	#[test]
	fn plain_text_keeps_line_breaks() {
		assert_eq!(
			html_to_text("First line\nSecond   line\n\nNew paragraph"),
			vec!["First line", "Second line", "", "New paragraph"]
		);
	}
}
