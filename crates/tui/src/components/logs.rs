//! In-app log console.

use log::LevelFilter;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::widgets::{Block, Borders, Clear};
use tui_logger::{TuiLoggerLevelOutput, TuiLoggerWidget, TuiWidgetState};

use crate::style::Theme;

/// Visibility and widget state of the console.
pub struct LogConsole {
	visible: bool,
	widget: TuiWidgetState,
}

impl Default for LogConsole {
	fn default() -> Self {
		Self {
			visible: false,
			widget: TuiWidgetState::new().set_default_display_level(LevelFilter::Debug),
		}
	}
}

impl LogConsole {
	#[must_use]
	pub fn is_visible(&self) -> bool {
		self.visible
	}

	pub fn toggle(&mut self) {
		self.visible = !self.visible;
	}

	pub fn render(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
		if area.width == 0 || area.height == 0 {
			return;
		}
		frame.render_widget(Clear, area);
		let widget = TuiLoggerWidget::default()
			.block(
				Block::default()
					.borders(Borders::ALL)
					.border_set(ratatui::symbols::border::ROUNDED)
					.border_style(theme.border_style())
					.title(" Log (g to hide) "),
			)
			.output_level(Some(TuiLoggerLevelOutput::Abbreviated))
			.output_target(false)
			.output_file(false)
			.output_line(false)
			.output_timestamp(Some("%H:%M:%S".to_string()))
			.style_error(theme.marker_selected)
			.style_warn(theme.highlight)
			.style_info(theme.prompt)
			.style_debug(theme.empty)
			.style_trace(theme.empty)
			.state(&self.widget);
		frame.render_widget(widget, area);
	}
}
