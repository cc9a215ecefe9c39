//! Request composition for the jobs endpoints.
//!
//! Each [`JobsRequest`] knows its [`Endpoint`] and the query parameters it
//! carries. Absent selections are never sent, and every facet request leaves
//! out the facet it enumerates so the counts describe the alternatives to the
//! current choice.

use crate::types::{FilterSelection, SortBy};

/// The read-only endpoints exposed under `/api/jobs`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
	Jobs,
	Search,
	FilterSearch,
	Sort,
	Locations,
	JobTypes,
	Salaries,
	Coordinates,
}

impl Endpoint {
	#[must_use]
	pub fn path(self) -> &'static str {
		match self {
			Endpoint::Jobs => "/api/jobs",
			Endpoint::Search => "/api/jobs/search",
			Endpoint::FilterSearch => "/api/jobs/filter/search",
			Endpoint::Sort => "/api/jobs/sort",
			Endpoint::Locations => "/api/jobs/locations/search",
			Endpoint::JobTypes => "/api/jobs/job-types/search",
			Endpoint::Salaries => "/api/jobs/salary/search",
			Endpoint::Coordinates => "/api/jobs/coordinates",
		}
	}
}

/// A single GET against the jobs API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JobsRequest {
	/// Every posting, unfiltered.
	All,
	/// Keyword search. `None` asks for everything.
	Search { keyword: Option<String> },
	Filter(FilterSelection),
	Sort {
		selection: FilterSelection,
		sort_by: SortBy,
	},
	Locations(FilterSelection),
	JobTypes(FilterSelection),
	Salaries(FilterSelection),
	Coordinates(FilterSelection),
}

impl JobsRequest {
	#[must_use]
	pub fn endpoint(&self) -> Endpoint {
		match self {
			JobsRequest::All => Endpoint::Jobs,
			JobsRequest::Search { .. } => Endpoint::Search,
			JobsRequest::Filter(_) => Endpoint::FilterSearch,
			JobsRequest::Sort { .. } => Endpoint::Sort,
			JobsRequest::Locations(_) => Endpoint::Locations,
			JobsRequest::JobTypes(_) => Endpoint::JobTypes,
			JobsRequest::Salaries(_) => Endpoint::Salaries,
			JobsRequest::Coordinates(_) => Endpoint::Coordinates,
		}
	}

	/// Query parameters in a stable order, skipping absent values.
	#[must_use]
	pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
		let mut pairs = Vec::new();
		match self {
			JobsRequest::All => {}
			JobsRequest::Search { keyword } => {
				push(&mut pairs, "keyword", keyword.as_deref());
			}
			JobsRequest::Filter(selection) | JobsRequest::Coordinates(selection) => {
				selection_pairs(&mut pairs, selection, Omit::Nothing);
			}
			JobsRequest::Sort { selection, sort_by } => {
				selection_pairs(&mut pairs, selection, Omit::Nothing);
				pairs.push(("sortBy", sort_by.as_str().to_string()));
			}
			JobsRequest::Locations(selection) => {
				selection_pairs(&mut pairs, selection, Omit::Location);
			}
			JobsRequest::JobTypes(selection) => {
				selection_pairs(&mut pairs, selection, Omit::JobType);
			}
			JobsRequest::Salaries(selection) => {
				selection_pairs(&mut pairs, selection, Omit::Salary);
			}
		}
		pairs
	}
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Omit {
	Nothing,
	Location,
	JobType,
	Salary,
}

fn selection_pairs(pairs: &mut Vec<(&'static str, String)>, selection: &FilterSelection, omit: Omit) {
	if omit != Omit::Location {
		push(pairs, "location", selection.location.as_deref());
	}
	if omit != Omit::JobType {
		push(pairs, "jobType", selection.job_type.as_deref());
	}
	if omit != Omit::Salary {
		if let Some(band) = selection.salary {
			pairs.push(("minSalary", band.min.to_string()));
			pairs.push(("maxSalary", band.max.to_string()));
		}
	}
	push(pairs, "search", selection.keyword());
}

fn push(pairs: &mut Vec<(&'static str, String)>, key: &'static str, value: Option<&str>) {
	if let Some(value) = value {
		pairs.push((key, value.to_string()));
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::types::SalaryBand;

	fn full_selection() -> FilterSelection {
		FilterSelection {
			search: Some("rust".into()),
			location: Some("Toronto".into()),
			job_type: Some("Full-time".into()),
			salary: Some(SalaryBand::new(50_000, 100_000)),
		}
	}

	fn keys(request: &JobsRequest) -> Vec<&'static str> {
		request.query_pairs().into_iter().map(|(key, _)| key).collect()
	}

	#[test]
	fn absent_values_are_omitted() {
		let request = JobsRequest::Filter(FilterSelection::with_keyword("rust"));
		assert_eq!(request.query_pairs(), vec![("search", "rust".to_string())]);
		assert!(JobsRequest::All.query_pairs().is_empty());
		assert!(JobsRequest::Search { keyword: None }.query_pairs().is_empty());
	}

	#[test]
	fn facet_requests_leave_out_their_own_facet() {
		let selection = full_selection();
		assert_eq!(
			keys(&JobsRequest::Locations(selection.clone())),
			["jobType", "minSalary", "maxSalary", "search"]
		);
		assert_eq!(
			keys(&JobsRequest::JobTypes(selection.clone())),
			["location", "minSalary", "maxSalary", "search"]
		);
		assert_eq!(
			keys(&JobsRequest::Salaries(selection)),
			["location", "jobType", "search"]
		);
	}

	#[test]
	fn sort_carries_every_selection_and_the_order() {
		let request = JobsRequest::Sort {
			selection: full_selection(),
			sort_by: SortBy::Salary,
		};
		assert_eq!(request.endpoint().path(), "/api/jobs/sort");
		let pairs = request.query_pairs();
		assert_eq!(pairs.len(), 6);
		assert_eq!(pairs[2], ("minSalary", "50000".to_string()));
		assert_eq!(pairs[5], ("sortBy", "salary".to_string()));
	}

	#[test]
	fn default_sort_is_still_sent() {
		let request = JobsRequest::Sort {
			selection: FilterSelection::new(),
			sort_by: SortBy::Default,
		};
		assert_eq!(request.query_pairs(), vec![("sortBy", "default".to_string())]);
	}
}
