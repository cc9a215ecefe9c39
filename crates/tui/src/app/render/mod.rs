pub(crate) mod layout;

use geojob_api::Job;
use layout::AppLayout;
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Rect};
use ratatui::text::Span;
use ratatui::widgets::{Paragraph, Row};

use super::{App, View};
use crate::components::tables::TABLE_HEADER_ROWS;
use crate::components::{
	DetailsContext, InputContext, MapContext, PickerView, ProgressState, TableSpec,
	render_details, render_filter_bar, render_input, render_map, render_marker_list,
	render_pager, render_picker, render_table,
};
use crate::format::{format_salary, location_label};

impl App<'_> {
	pub(crate) fn draw(&mut self, frame: &mut Frame) {
		let layout = AppLayout::compute(frame.area(), self.view, self.logs.is_visible());

		let progress_text = self.progress_text();
		let input_ctx = InputContext {
			search_input: &self.search_input,
			title: &self.ui.title,
			placeholder: Some(self.ui.search_placeholder.as_str()),
			area: layout.prompt,
			theme: &self.theme,
		};
		let progress_state = ProgressState {
			progress_text: &progress_text,
			progress_complete: !self.fetch.is_busy(),
			throbber_state: &self.throbber_state,
		};
		self.prompt_area = Some(render_input(frame, input_ctx, progress_state));
		render_filter_bar(frame, layout.filters, &self.selection, self.sort, &self.theme);

		match self.view {
			View::List => {
				self.render_results(frame, layout.primary);
				self.pager_hitboxes =
					render_pager(frame, layout.pager, &self.board.pagination, &self.theme);
				self.map.list_area = None;
			}
			View::Map => {
				self.render_map_pane(frame, layout.primary, layout.markers);
				self.pager_hitboxes.clear();
				self.board.area = None;
			}
		}
		self.render_details_pane(frame, layout.details);

		if let Some(area) = layout.logs {
			self.logs.render(frame, area, &self.theme);
		}
		self.render_picker_popup(frame);
	}

	fn progress_text(&self) -> String {
		if self.fetch.is_busy() {
			format!("Fetching ({})…", self.fetch.pending())
		} else {
			format!("{} jobs", self.board.len())
		}
	}

	fn render_results(&mut self, frame: &mut Frame, area: Rect) {
		let rows: Vec<Row> = self.board.page().iter().map(job_row).collect();
		let spec = TableSpec {
			headers: vec!["Title", "Company", "Location", "Salary"],
			widths: vec![
				Constraint::Fill(3),
				Constraint::Fill(2),
				Constraint::Fill(2),
				Constraint::Length(12),
			],
			rows,
			title: Some(format!(
				" {} · page {} of {} ",
				self.ui.results_title,
				self.board.pagination.current(),
				self.board.pagination.page_count().max(1)
			)),
			focused: self.focus == super::Focus::Results,
		};
		let inner = render_table(frame, area, &mut self.board.table_state, spec, &self.theme);
		self.board.area = Some(inner);

		if self.board.is_empty() && inner.height > TABLE_HEADER_ROWS {
			let message_area = Rect {
				y: inner.y + TABLE_HEADER_ROWS,
				height: 1,
				..inner
			};
			let message = Paragraph::new(Span::styled(
				self.ui.empty_message.as_str(),
				self.theme.empty_style(),
			))
			.alignment(Alignment::Center);
			frame.render_widget(message, message_area);
		}
	}

	fn render_map_pane(&mut self, frame: &mut Frame, canvas: Rect, markers: Rect) {
		render_map(
			frame,
			canvas,
			MapContext {
				title: &self.ui.map_title,
				viewport: &self.map.viewport,
				coords: &self.map.coords,
				markers: &self.map.markers,
				selected: self.map.selected_marker(),
				theme: &self.theme,
			},
		);
		let labels = self.map.labels();
		render_marker_list(
			frame,
			markers,
			&self.ui.markers_title,
			labels,
			&mut self.map.list_state,
			&self.theme,
		);
		self.map.list_area = Some(markers);
	}

	fn render_details_pane(&mut self, frame: &mut Frame, area: Rect) {
		let job = self.current_job().cloned();
		let description = match &job {
			Some(job) => self.details.lines_for(job).to_vec(),
			None => Vec::new(),
		};
		let metrics = render_details(
			frame,
			area,
			DetailsContext {
				job: job.as_ref(),
				description: &description,
				scroll: self.details.scroll,
				title: &self.ui.detail_title,
				no_selection_message: &self.ui.no_selection_message,
				theme: &self.theme,
			},
		);
		self.details.metrics = metrics;
		self.details.scroll = metrics.clamp(self.details.scroll);
		self.details.area = Some(area);
	}

	fn render_picker_popup(&mut self, frame: &mut Frame) {
		let area = frame.area();
		let Some(picker) = self.picker.as_mut() else {
			self.picker_area = None;
			return;
		};
		let popup = render_picker(
			frame,
			area,
			PickerView {
				title: picker.kind.title(),
				entries: &picker.labels,
				theme: &self.theme,
			},
			&mut picker.state,
		);
		self.picker_area = Some(popup);
	}
}

fn job_row(job: &Job) -> Row<'static> {
	Row::new(vec![
		job.title.clone(),
		job.company.clone(),
		location_label(job),
		job.salary.map(format_salary).unwrap_or_default(),
	])
}
