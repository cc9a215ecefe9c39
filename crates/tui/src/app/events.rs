//! Typed messages reduced by the [`App`](super::App) and the request plan
//! each selection change triggers.

use geojob_api::{FilterSelection, JobsRequest, SalaryBand, SortBy};

use crate::fetch::{FetchChannel, JobsSource};

/// Every state change the UI can make. Key and mouse handlers translate input
/// into these; nothing else mutates the job data.
#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
	SubmitKeyword(String),
	SelectLocation(Option<String>),
	SelectJobType(Option<String>),
	SelectSalary(Option<SalaryBand>),
	SelectSort(SortBy),
	ClearFilters,
	NextPage,
	PrevPage,
	FirstPage,
	LastPage,
	ShowPage(usize),
	/// Select a row of the visible page.
	SelectRow(usize),
	/// Move the selection up or down, crossing page boundaries.
	MoveSelection(isize),
	ScrollDetails(isize),
	ToggleView,
	ToggleLogs,
	ZoomIn,
	ZoomOut,
	RefitMap,
	Apply,
	Quit,
}

/// What changed about the selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionChange {
	Startup,
	Keyword,
	Location,
	JobType,
	Salary,
	Cleared,
	Sort,
}

/// Requests to issue after `change`, with the channel each one reports on.
///
/// Facet lists are refreshed for every facet except the one that changed, so
/// the changed list keeps offering the alternatives. A sort change only
/// re-sorts.
#[must_use]
pub fn planned_requests(
	change: SelectionChange,
	selection: &FilterSelection,
	sort: SortBy,
) -> Vec<(FetchChannel, JobsRequest)> {
	let mut plan = Vec::new();
	let filter = || (FetchChannel::Jobs(JobsSource::Filter), JobsRequest::Filter(selection.clone()));
	let sorted = || {
		(
			FetchChannel::Jobs(JobsSource::Sort),
			JobsRequest::Sort {
				selection: selection.clone(),
				sort_by: sort,
			},
		)
	};

	match change {
		SelectionChange::Startup => {
			plan.push((FetchChannel::Jobs(JobsSource::All), JobsRequest::All));
			if sort != SortBy::Default {
				plan.push(sorted());
			}
		}
		SelectionChange::Keyword => {
			plan.push((
				FetchChannel::Jobs(JobsSource::Search),
				JobsRequest::Search {
					keyword: selection.search.clone(),
				},
			));
			plan.push(filter());
			plan.push(sorted());
		}
		SelectionChange::Location
		| SelectionChange::JobType
		| SelectionChange::Salary
		| SelectionChange::Cleared => {
			plan.push(filter());
			plan.push(sorted());
		}
		SelectionChange::Sort => {
			plan.push(sorted());
			return plan;
		}
	}

	if change != SelectionChange::Location {
		plan.push((FetchChannel::Locations, JobsRequest::Locations(selection.clone())));
	}
	if change != SelectionChange::JobType {
		plan.push((FetchChannel::JobTypes, JobsRequest::JobTypes(selection.clone())));
	}
	if change != SelectionChange::Salary {
		plan.push((FetchChannel::Salaries, JobsRequest::Salaries(selection.clone())));
	}
	plan.push((FetchChannel::Coordinates, JobsRequest::Coordinates(selection.clone())));
	plan
}

#[cfg(test)]
mod tests {
	use geojob_api::Endpoint;

	use super::*;

	fn endpoints(change: SelectionChange, sort: SortBy) -> Vec<Endpoint> {
		planned_requests(change, &FilterSelection::with_keyword("rust"), sort)
			.into_iter()
			.map(|(_, request)| request.endpoint())
			.collect()
	}

	#[test]
	fn startup_fetches_everything_once() {
		assert_eq!(
			endpoints(SelectionChange::Startup, SortBy::Default),
			vec![
				Endpoint::Jobs,
				Endpoint::Locations,
				Endpoint::JobTypes,
				Endpoint::Salaries,
				Endpoint::Coordinates,
			]
		);
	}

	#[test]
	fn startup_with_an_order_also_sorts() {
		assert!(endpoints(SelectionChange::Startup, SortBy::Date).contains(&Endpoint::Sort));
	}

	#[test]
	fn keyword_refreshes_lists_facets_and_map() {
		assert_eq!(
			endpoints(SelectionChange::Keyword, SortBy::Default),
			vec![
				Endpoint::Search,
				Endpoint::FilterSearch,
				Endpoint::Sort,
				Endpoint::Locations,
				Endpoint::JobTypes,
				Endpoint::Salaries,
				Endpoint::Coordinates,
			]
		);
	}

	#[test]
	fn facet_change_skips_its_own_list() {
		assert_eq!(
			endpoints(SelectionChange::Location, SortBy::Default),
			vec![
				Endpoint::FilterSearch,
				Endpoint::Sort,
				Endpoint::JobTypes,
				Endpoint::Salaries,
				Endpoint::Coordinates,
			]
		);
		assert!(!endpoints(SelectionChange::JobType, SortBy::Default).contains(&Endpoint::JobTypes));
		assert!(!endpoints(SelectionChange::Salary, SortBy::Default).contains(&Endpoint::Salaries));
	}

	#[test]
	fn clearing_filters_refreshes_every_facet() {
		let plan = endpoints(SelectionChange::Cleared, SortBy::Default);
		for endpoint in [Endpoint::Locations, Endpoint::JobTypes, Endpoint::Salaries] {
			assert!(plan.contains(&endpoint));
		}
	}

	#[test]
	fn sort_change_only_sorts() {
		assert_eq!(
			endpoints(SelectionChange::Sort, SortBy::Salary),
			vec![Endpoint::Sort]
		);
	}
}
