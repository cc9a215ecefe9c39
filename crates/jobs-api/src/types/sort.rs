use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Ordering requested from the `/sort` endpoint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortBy {
	/// Server order.
	#[default]
	Default,
	Date,
	Salary,
}

impl SortBy {
	pub const ALL: [SortBy; 3] = [SortBy::Default, SortBy::Date, SortBy::Salary];

	#[must_use]
	pub fn as_str(self) -> &'static str {
		match self {
			SortBy::Default => "default",
			SortBy::Date => "date",
			SortBy::Salary => "salary",
		}
	}

	/// Human label used by the sort picker.
	#[must_use]
	pub fn label(self) -> &'static str {
		match self {
			SortBy::Default => "Default",
			SortBy::Date => "Date (most recent)",
			SortBy::Salary => "Salary (high to low)",
		}
	}
}

impl fmt::Display for SortBy {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for SortBy {
	type Err = String;

	fn from_str(value: &str) -> Result<Self, Self::Err> {
		match value.trim().to_ascii_lowercase().as_str() {
			"" | "default" => Ok(SortBy::Default),
			"date" => Ok(SortBy::Date),
			"salary" => Ok(SortBy::Salary),
			other => Err(format!(
				"unknown sort order '{other}' (expected default, date or salary)"
			)),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn parses_case_insensitively() {
		assert_eq!("Date".parse::<SortBy>(), Ok(SortBy::Date));
		assert_eq!(" salary ".parse::<SortBy>(), Ok(SortBy::Salary));
		assert_eq!("".parse::<SortBy>(), Ok(SortBy::Default));
		assert!("price".parse::<SortBy>().is_err());
	}

	#[test]
	fn serde_uses_lowercase_names() {
		assert_eq!(serde_json::to_string(&SortBy::Date).unwrap(), "\"date\"");
		assert_eq!(SortBy::Salary.to_string(), "salary");
	}
}
