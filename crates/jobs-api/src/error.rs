use thiserror::Error;

/// Failures surfaced by the jobs API client.
#[derive(Debug, Error)]
pub enum ApiError {
	/// The configured base URL cannot be used to build endpoint URLs.
	#[error("invalid base URL '{url}': {reason}")]
	InvalidBaseUrl { url: String, reason: String },
	/// The underlying HTTP client could not be constructed.
	#[error("failed to initialise HTTP client: {0}")]
	Client(#[source] reqwest::Error),
	/// The request never produced a response (connection refused, timeout, ...).
	#[error("request to {endpoint} failed: {source}")]
	Transport {
		endpoint: &'static str,
		#[source]
		source: reqwest::Error,
	},
	/// The server answered with a non-success status.
	#[error("{endpoint} returned HTTP {status}")]
	Status { endpoint: &'static str, status: u16 },
	/// The response body did not match the expected JSON shape.
	#[error("could not decode response from {endpoint}: {source}")]
	Decode {
		endpoint: &'static str,
		#[source]
		source: serde_json::Error,
	},
}

impl ApiError {
	/// Endpoint path the failure relates to, when there is one.
	#[must_use]
	pub fn endpoint(&self) -> Option<&'static str> {
		match self {
			ApiError::InvalidBaseUrl { .. } | ApiError::Client(_) => None,
			ApiError::Transport { endpoint, .. }
			| ApiError::Status { endpoint, .. }
			| ApiError::Decode { endpoint, .. } => Some(*endpoint),
		}
	}
}
