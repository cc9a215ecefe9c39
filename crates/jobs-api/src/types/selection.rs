use serde::{Deserialize, Serialize};

/// An integer salary band, inclusive on both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SalaryBand {
	pub min: i64,
	pub max: i64,
}

impl SalaryBand {
	#[must_use]
	pub fn new(min: i64, max: i64) -> Self {
		Self { min, max }
	}
}

/// The user's current refinement of the job list.
///
/// Every field is optional; an absent field is never sent to the server. The
/// keyword is stored normalised: surrounding whitespace is removed and an empty
/// keyword is the same as no keyword at all.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSelection {
	pub search: Option<String>,
	pub location: Option<String>,
	pub job_type: Option<String>,
	pub salary: Option<SalaryBand>,
}

impl FilterSelection {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	/// Selection containing only a keyword.
	#[must_use]
	pub fn with_keyword(keyword: &str) -> Self {
		let mut selection = Self::default();
		selection.set_keyword(keyword);
		selection
	}

	pub fn set_keyword(&mut self, keyword: &str) {
		let trimmed = keyword.trim();
		self.search = (!trimmed.is_empty()).then(|| trimmed.to_string());
	}

	/// Drop the location, job type and salary refinements, keeping the keyword.
	pub fn clear_facets(&mut self) {
		self.location = None;
		self.job_type = None;
		self.salary = None;
	}

	#[must_use]
	pub fn has_facets(&self) -> bool {
		self.location.is_some() || self.job_type.is_some() || self.salary.is_some()
	}

	#[must_use]
	pub fn keyword(&self) -> Option<&str> {
		self.search.as_deref()
	}
}
