use geojob_api::{Job, JobCoordinate};
use ratatui::layout::Rect;
use ratatui::widgets::ListState;

use crate::geo::{GeoPoint, MapViewport};

/// Coordinates for the current selection and the marker cursor.
#[derive(Default)]
pub(crate) struct MapState {
	pub coords: Vec<JobCoordinate>,
	/// Indices into `coords` with a usable position.
	pub markers: Vec<usize>,
	pub viewport: MapViewport,
	pub list_state: ListState,
	pub list_area: Option<Rect>,
}

impl MapState {
	/// Install new coordinates. The viewport is refitted when at least one
	/// entry has a position and left alone otherwise.
	pub(crate) fn replace(&mut self, coords: Vec<JobCoordinate>) {
		self.markers = coords
			.iter()
			.enumerate()
			.filter(|(_, coord)| coord.position().is_some())
			.map(|(index, _)| index)
			.collect();
		self.viewport.fit_to(&coords);
		self.coords = coords;
		self.list_state = ListState::default();
		self.list_state
			.select((!self.markers.is_empty()).then_some(0));
	}

	pub(crate) fn refit(&mut self) -> bool {
		self.viewport.fit_to(&self.coords)
	}

	pub(crate) fn selected_marker(&self) -> Option<usize> {
		self.list_state.selected()
	}

	pub(crate) fn selected_job(&self) -> Option<&Job> {
		self.selected_marker()
			.and_then(|marker| self.markers.get(marker))
			.and_then(|&index| self.coords.get(index))
			.map(JobCoordinate::job)
	}

	pub(crate) fn select_marker(&mut self, marker: usize) -> bool {
		if marker >= self.markers.len() {
			return false;
		}
		self.list_state.select(Some(marker));
		let position = self
			.coords
			.get(self.markers[marker])
			.and_then(JobCoordinate::position);
		if let Some((lat, lon)) = position {
			let point = GeoPoint::new(lat, lon);
			if !self.viewport.bounds().contains(point) {
				self.viewport.center_on(point);
			}
		}
		true
	}

	pub(crate) fn move_selection(&mut self, delta: isize) -> bool {
		let Some(current) = self.selected_marker() else {
			return false;
		};
		let last = self.markers.len().saturating_sub(1);
		let target = current.saturating_add_signed(delta).min(last);
		target != current && self.select_marker(target)
	}

	/// Marker list labels in marker order.
	pub(crate) fn labels(&self) -> Vec<String> {
		self.markers
			.iter()
			.filter_map(|&index| self.coords.get(index))
			.map(|coord| {
				let job = coord.job();
				format!("{} · {}", job.title, job.company)
			})
			.collect()
	}
}
