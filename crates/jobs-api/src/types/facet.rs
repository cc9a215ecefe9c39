use serde::{Deserialize, Serialize};

use super::SalaryBand;

/// Number of postings available at a location for the current selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationCount {
	pub location: String,
	pub count: u64,
}

impl LocationCount {
	#[must_use]
	pub fn new(location: impl Into<String>, count: u64) -> Self {
		Self {
			location: location.into(),
			count,
		}
	}
}

/// Number of postings of a job type for the current selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobTypeCount {
	#[serde(rename = "jobType")]
	pub job_type: String,
	pub count: u64,
}

impl JobTypeCount {
	#[must_use]
	pub fn new(job_type: impl Into<String>, count: u64) -> Self {
		Self {
			job_type: job_type.into(),
			count,
		}
	}
}

/// A server-computed salary band and the number of postings inside it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalaryRange {
	#[serde(rename = "minSalary")]
	pub min_salary: f64,
	#[serde(rename = "maxSalary")]
	pub max_salary: f64,
	pub count: u64,
}

impl SalaryRange {
	#[must_use]
	pub fn new(min_salary: f64, max_salary: f64, count: u64) -> Self {
		Self {
			min_salary,
			max_salary,
			count,
		}
	}

	/// The band as it is sent back in `minSalary`/`maxSalary` query parameters.
	///
	/// The server declares both parameters as integers.
	#[must_use]
	pub fn band(&self) -> SalaryBand {
		SalaryBand::new(self.min_salary.round() as i64, self.max_salary.round() as i64)
	}
}
