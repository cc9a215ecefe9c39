use geojob_api::{FilterSelection, JobTypeCount, LocationCount, SalaryRange, SortBy};
use ratatui::widgets::ListState;

use super::events::AppEvent;
use crate::format::format_salary_band;

/// Server-provided counts backing the pickers.
#[derive(Debug, Default)]
pub(crate) struct FacetLists {
	pub locations: Vec<LocationCount>,
	pub job_types: Vec<JobTypeCount>,
	pub salaries: Vec<SalaryRange>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PickerKind {
	Location,
	JobType,
	Salary,
	Sort,
}

impl PickerKind {
	pub(crate) fn title(self) -> &'static str {
		match self {
			PickerKind::Location => "Location",
			PickerKind::JobType => "Job type",
			PickerKind::Salary => "Salary",
			PickerKind::Sort => "Sort by",
		}
	}

	/// Event that removes this refinement.
	pub(crate) fn clear_event(self) -> AppEvent {
		match self {
			PickerKind::Location => AppEvent::SelectLocation(None),
			PickerKind::JobType => AppEvent::SelectJobType(None),
			PickerKind::Salary => AppEvent::SelectSalary(None),
			PickerKind::Sort => AppEvent::SelectSort(SortBy::Default),
		}
	}
}

/// Open picker popup: labels plus the event each entry dispatches.
pub(crate) struct Picker {
	pub kind: PickerKind,
	pub labels: Vec<String>,
	events: Vec<AppEvent>,
	pub state: ListState,
}

impl Picker {
	/// Build the entries for `kind`, preselecting the active choice.
	pub(crate) fn open(
		kind: PickerKind,
		facets: &FacetLists,
		selection: &FilterSelection,
		sort: SortBy,
	) -> Self {
		let mut picker = Self {
			kind,
			labels: Vec::new(),
			events: Vec::new(),
			state: ListState::default(),
		};
		picker.rebuild(facets, selection, sort);
		picker
	}

	/// Recompute entries after new counts arrive, keeping the cursor on the
	/// same entry when it is still listed.
	pub(crate) fn rebuild(&mut self, facets: &FacetLists, selection: &FilterSelection, sort: SortBy) {
		let mut entries: Vec<(String, AppEvent, bool)> = Vec::new();
		match self.kind {
			PickerKind::Location => {
				entries.push(any_entry(self.kind, selection.location.is_none()));
				entries.extend(facets.locations.iter().map(|facet| {
					(
						format!("{} ({})", facet.location, facet.count),
						AppEvent::SelectLocation(Some(facet.location.clone())),
						selection.location.as_deref() == Some(facet.location.as_str()),
					)
				}));
			}
			PickerKind::JobType => {
				entries.push(any_entry(self.kind, selection.job_type.is_none()));
				entries.extend(facets.job_types.iter().map(|facet| {
					(
						format!("{} ({})", facet.job_type, facet.count),
						AppEvent::SelectJobType(Some(facet.job_type.clone())),
						selection.job_type.as_deref() == Some(facet.job_type.as_str()),
					)
				}));
			}
			PickerKind::Salary => {
				entries.push(any_entry(self.kind, selection.salary.is_none()));
				entries.extend(facets.salaries.iter().map(|range| {
					(
						format!(
							"{} ({})",
							format_salary_band(range.min_salary, range.max_salary),
							range.count
						),
						AppEvent::SelectSalary(Some(range.band())),
						selection.salary == Some(range.band()),
					)
				}));
			}
			PickerKind::Sort => {
				entries.extend(SortBy::ALL.iter().map(|order| {
					(
						order.label().to_string(),
						AppEvent::SelectSort(*order),
						*order == sort,
					)
				}));
			}
		}

		let active = entries.iter().position(|(_, _, active)| *active);
		let highlighted = self
			.state
			.selected()
			.and_then(|index| self.events.get(index))
			.cloned();
		self.labels = entries.iter().map(|(label, _, _)| label.clone()).collect();
		self.events = entries.into_iter().map(|(_, event, _)| event).collect();

		// Follow the highlighted entry to wherever the new counts put it.
		let anchored = highlighted
			.and_then(|event| self.events.iter().position(|entry| *entry == event));
		let cursor = anchored.or(active).unwrap_or(0).min(self.labels.len().saturating_sub(1));
		self.state.select((!self.labels.is_empty()).then_some(cursor));
	}

	pub(crate) fn move_cursor(&mut self, delta: isize) {
		if self.labels.is_empty() {
			return;
		}
		let current = self.state.selected().unwrap_or(0);
		let last = self.labels.len() - 1;
		self.state
			.select(Some(current.saturating_add_signed(delta).min(last)));
	}

	/// Event for the entry under the cursor.
	pub(crate) fn chosen(&self) -> Option<AppEvent> {
		self.state
			.selected()
			.and_then(|index| self.events.get(index))
			.cloned()
	}

	pub(crate) fn select_index(&mut self, index: usize) -> bool {
		if index >= self.labels.len() {
			return false;
		}
		self.state.select(Some(index));
		true
	}
}

fn any_entry(kind: PickerKind, active: bool) -> (String, AppEvent, bool) {
	("(any)".to_string(), kind.clear_event(), active)
}

#[cfg(test)]
mod tests {
	use geojob_api::SalaryBand;

	use super::*;

	fn facets() -> FacetLists {
		FacetLists {
			locations: vec![
				LocationCount::new("Toronto", 12),
				LocationCount::new("Ottawa", 4),
			],
			job_types: vec![JobTypeCount::new("Full-time", 9)],
			salaries: vec![SalaryRange::new(50_000.0, 100_000.0, 3)],
		}
	}

	#[test]
	fn entries_show_counts_after_any() {
		let picker = Picker::open(
			PickerKind::Location,
			&facets(),
			&FilterSelection::new(),
			SortBy::Default,
		);
		assert_eq!(picker.labels, vec!["(any)", "Toronto (12)", "Ottawa (4)"]);
		assert_eq!(picker.chosen(), Some(AppEvent::SelectLocation(None)));
	}

	#[test]
	fn salary_entries_use_dollar_bands() {
		let mut selection = FilterSelection::new();
		selection.salary = Some(SalaryBand::new(50_000, 100_000));
		let picker = Picker::open(PickerKind::Salary, &facets(), &selection, SortBy::Default);
		assert_eq!(picker.labels[1], "$50,000 - $100,000 (3)");
		assert_eq!(
			picker.chosen(),
			Some(AppEvent::SelectSalary(Some(SalaryBand::new(50_000, 100_000))))
		);
	}

	#[test]
	fn active_choice_is_preselected_and_cursor_is_clamped() {
		let mut selection = FilterSelection::new();
		selection.location = Some("Ottawa".into());
		let mut picker = Picker::open(PickerKind::Location, &facets(), &selection, SortBy::Default);
		assert_eq!(picker.state.selected(), Some(2));

		picker.move_cursor(10);
		assert_eq!(picker.state.selected(), Some(2));
		picker.rebuild(&FacetLists::default(), &selection, SortBy::Default);
		assert_eq!(picker.labels, vec!["(any)"]);
		assert_eq!(picker.state.selected(), Some(0));
	}

	#[test]
	fn cursor_follows_its_entry_when_counts_reorder() {
		let selection = FilterSelection::new();
		let mut picker = Picker::open(PickerKind::Location, &facets(), &selection, SortBy::Default);
		picker.move_cursor(2);
		assert_eq!(picker.chosen(), Some(AppEvent::SelectLocation(Some("Ottawa".into()))));

		let reordered = FacetLists {
			locations: vec![
				LocationCount::new("Ottawa", 20),
				LocationCount::new("Montreal", 15),
				LocationCount::new("Toronto", 3),
			],
			..facets()
		};
		picker.rebuild(&reordered, &selection, SortBy::Default);
		assert_eq!(picker.state.selected(), Some(1));
		assert_eq!(picker.chosen(), Some(AppEvent::SelectLocation(Some("Ottawa".into()))));
	}

	#[test]
	fn sort_picker_lists_every_order() {
		let picker = Picker::open(PickerKind::Sort, &facets(), &FilterSelection::new(), SortBy::Date);
		assert_eq!(picker.labels.len(), 3);
		assert_eq!(picker.chosen(), Some(AppEvent::SelectSort(SortBy::Date)));
	}
}
