use crate::error::ApiError;
use crate::request::Endpoint;
use crate::types::{Job, JobCoordinate, JobTypeCount, LocationCount, SalaryRange};

/// Decoded body of a successful request.
#[derive(Debug, Clone, PartialEq)]
pub enum JobsResponse {
	Jobs(Vec<Job>),
	Locations(Vec<LocationCount>),
	JobTypes(Vec<JobTypeCount>),
	Salaries(Vec<SalaryRange>),
	Coordinates(Vec<JobCoordinate>),
}

impl JobsResponse {
	/// Decode a JSON body according to the shape the endpoint returns.
	pub fn decode(endpoint: Endpoint, body: &[u8]) -> Result<Self, ApiError> {
		let decode_err = |source| ApiError::Decode {
			endpoint: endpoint.path(),
			source,
		};
		let response = match endpoint {
			Endpoint::Jobs | Endpoint::Search | Endpoint::FilterSearch | Endpoint::Sort => {
				JobsResponse::Jobs(serde_json::from_slice(body).map_err(decode_err)?)
			}
			Endpoint::Locations => {
				JobsResponse::Locations(serde_json::from_slice(body).map_err(decode_err)?)
			}
			Endpoint::JobTypes => {
				JobsResponse::JobTypes(serde_json::from_slice(body).map_err(decode_err)?)
			}
			Endpoint::Salaries => {
				JobsResponse::Salaries(serde_json::from_slice(body).map_err(decode_err)?)
			}
			Endpoint::Coordinates => {
				JobsResponse::Coordinates(serde_json::from_slice(body).map_err(decode_err)?)
			}
		};
		Ok(response)
	}

	/// Number of entries in the decoded array.
	#[must_use]
	pub fn len(&self) -> usize {
		match self {
			JobsResponse::Jobs(items) => items.len(),
			JobsResponse::Locations(items) => items.len(),
			JobsResponse::JobTypes(items) => items.len(),
			JobsResponse::Salaries(items) => items.len(),
			JobsResponse::Coordinates(items) => items.len(),
		}
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}
}
