use serde::{Deserialize, Serialize};

/// A single job posting as returned by the jobs endpoints.
///
/// Postings are immutable once fetched. Only the identifier, title and company
/// are guaranteed; everything else may be null on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
	#[serde(rename = "jobID")]
	pub id: i64,
	pub title: String,
	pub company: String,
	#[serde(default)]
	pub location: Option<String>,
	#[serde(default)]
	pub city: Option<String>,
	#[serde(default)]
	pub province: Option<String>,
	#[serde(rename = "jobType", default)]
	pub job_type: Option<String>,
	#[serde(default)]
	pub salary: Option<f64>,
	/// Posting date in milliseconds since the Unix epoch.
	#[serde(default)]
	pub date: Option<i64>,
	/// Rich-text (HTML) description.
	#[serde(default)]
	pub description: Option<String>,
	#[serde(rename = "jobURL", default)]
	pub apply_url: Option<String>,
}

impl Job {
	/// Create a posting with only the mandatory fields populated.
	#[must_use]
	pub fn new(id: i64, title: impl Into<String>, company: impl Into<String>) -> Self {
		Self {
			id,
			title: title.into(),
			company: company.into(),
			location: None,
			city: None,
			province: None,
			job_type: None,
			salary: None,
			date: None,
			description: None,
			apply_url: None,
		}
	}

	#[must_use]
	pub fn with_location(mut self, location: impl Into<String>) -> Self {
		self.location = Some(location.into());
		self
	}

	#[must_use]
	pub fn with_job_type(mut self, job_type: impl Into<String>) -> Self {
		self.job_type = Some(job_type.into());
		self
	}

	#[must_use]
	pub fn with_salary(mut self, salary: f64) -> Self {
		self.salary = Some(salary);
		self
	}

	#[must_use]
	pub fn with_date(mut self, millis: i64) -> Self {
		self.date = Some(millis);
		self
	}

	#[must_use]
	pub fn with_description(mut self, description: impl Into<String>) -> Self {
		self.description = Some(description.into());
		self
	}

	#[must_use]
	pub fn with_apply_url(mut self, url: impl Into<String>) -> Self {
		self.apply_url = Some(url.into());
		self
	}

	/// Return the apply link when it is present and not blank.
	#[must_use]
	pub fn apply_link(&self) -> Option<&str> {
		self.apply_url
			.as_deref()
			.map(str::trim)
			.filter(|url| !url.is_empty())
	}
}
