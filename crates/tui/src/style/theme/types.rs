use ratatui::style::{Color, Modifier, Style};

/// Styles for every themed element of the UI.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
	/// Borders, table headers and separators.
	pub header: Style,
	/// Selected table row.
	pub row_highlight: Style,
	/// Search prompt text.
	pub prompt: Style,
	/// Placeholders, hints and other muted text.
	pub empty: Style,
	/// Active filters and the current page.
	pub highlight: Style,
	/// Job markers on the map.
	pub marker: Style,
	/// The marker whose job is shown in the detail pane.
	pub marker_selected: Style,
}

impl Theme {
	#[must_use]
	pub fn border_style(&self) -> Style {
		Style::new().fg(self.header.fg.unwrap_or(Color::Reset))
	}

	#[must_use]
	pub fn empty_style(&self) -> Style {
		self.empty
	}

	#[must_use]
	pub fn highlight_style(&self) -> Style {
		self.highlight
	}

	/// Style for the focused pane's border.
	#[must_use]
	pub fn focus_border_style(&self) -> Style {
		self.border_style().add_modifier(Modifier::BOLD)
	}

	#[must_use]
	pub fn marker_color(&self, selected: bool) -> Color {
		let style = if selected {
			self.marker_selected
		} else {
			self.marker
		};
		style.fg.unwrap_or(Color::Reset)
	}
}

/// A named theme with its alternate names.
#[derive(Debug, Clone, PartialEq)]
pub struct ThemeDescriptor {
	pub name: String,
	pub aliases: Vec<String>,
	pub theme: Theme,
	pub is_default: bool,
}

impl ThemeDescriptor {
	/// Whether `name` refers to this theme, ignoring case and surrounding spaces.
	#[must_use]
	pub fn matches(&self, name: &str) -> bool {
		let wanted = name.trim();
		self.name.eq_ignore_ascii_case(wanted)
			|| self
				.aliases
				.iter()
				.any(|alias| alias.eq_ignore_ascii_case(wanted))
	}
}
