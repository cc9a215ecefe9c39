use std::time::Duration;

use reqwest::Url;
use reqwest::blocking::{Client, Request};

use crate::error::ApiError;
use crate::request::JobsRequest;
use crate::response::JobsResponse;

/// Base URL of a locally running GeoJobSearch server.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Source of job data. The terminal UI only talks to this trait so tests can
/// substitute an in-memory implementation.
pub trait JobsApi: Send + Sync {
	fn fetch(&self, request: &JobsRequest) -> Result<JobsResponse, ApiError>;
}

/// Connection settings for [`HttpJobsClient`].
#[derive(Debug, Clone)]
pub struct ClientOptions {
	pub base_url: String,
	pub timeout: Duration,
}

impl Default for ClientOptions {
	fn default() -> Self {
		Self {
			base_url: DEFAULT_BASE_URL.to_string(),
			timeout: Duration::from_secs(10),
		}
	}
}

/// Blocking HTTP implementation of [`JobsApi`].
#[derive(Debug, Clone)]
pub struct HttpJobsClient {
	client: Client,
	base: String,
}

impl HttpJobsClient {
	pub fn new(options: ClientOptions) -> Result<Self, ApiError> {
		let base = validate_base_url(&options.base_url)?;
		let client = Client::builder()
			.timeout(options.timeout)
			.user_agent(concat!("geojob/", env!("CARGO_PKG_VERSION")))
			.build()
			.map_err(ApiError::Client)?;
		Ok(Self { client, base })
	}

	/// Base URL without a trailing slash.
	#[must_use]
	pub fn base_url(&self) -> &str {
		&self.base
	}

	/// Build the GET request for `request` without sending it.
	pub fn build(&self, request: &JobsRequest) -> Result<Request, ApiError> {
		let endpoint = request.endpoint().path();
		let url = format!("{}{}", self.base, endpoint);
		self.client
			.get(url)
			.query(&request.query_pairs())
			.build()
			.map_err(|source| ApiError::Transport { endpoint, source })
	}
}

impl JobsApi for HttpJobsClient {
	fn fetch(&self, request: &JobsRequest) -> Result<JobsResponse, ApiError> {
		let endpoint = request.endpoint();
		let http_request = self.build(request)?;
		log::debug!("GET {}", http_request.url());

		let transport = |source| ApiError::Transport {
			endpoint: endpoint.path(),
			source,
		};
		let response = self.client.execute(http_request).map_err(transport)?;
		let status = response.status();
		if !status.is_success() {
			return Err(ApiError::Status {
				endpoint: endpoint.path(),
				status: status.as_u16(),
			});
		}
		let body = response.bytes().map_err(transport)?;
		JobsResponse::decode(endpoint, &body)
	}
}

/// Check that `raw` is an absolute http(s) URL and return it without a trailing slash.
pub fn validate_base_url(raw: &str) -> Result<String, ApiError> {
	let invalid = |reason: String| ApiError::InvalidBaseUrl {
		url: raw.to_string(),
		reason,
	};
	let trimmed = raw.trim();
	let url = Url::parse(trimmed).map_err(|err| invalid(err.to_string()))?;
	match url.scheme() {
		"http" | "https" => {}
		other => return Err(invalid(format!("unsupported scheme '{other}'"))),
	}
	if url.query().is_some() || url.fragment().is_some() {
		return Err(invalid("query strings and fragments are not allowed".to_string()));
	}
	Ok(trimmed.trim_end_matches('/').to_string())
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::types::{FilterSelection, SortBy};

	fn client(base: &str) -> HttpJobsClient {
		HttpJobsClient::new(ClientOptions {
			base_url: base.to_string(),
			..ClientOptions::default()
		})
		.expect("client")
	}

	#[test]
	fn rejects_unusable_base_urls() {
		for bad in ["localhost:8080", "ftp://example.com", "not a url", "http://x/?a=1"] {
			let err = validate_base_url(bad).unwrap_err();
			assert!(matches!(err, ApiError::InvalidBaseUrl { .. }), "{bad}");
		}
	}

	#[test]
	fn keeps_path_prefix_and_strips_trailing_slash() {
		assert_eq!(
			validate_base_url("https://jobs.example.com/geo/").unwrap(),
			"https://jobs.example.com/geo"
		);
	}

	#[test]
	fn builds_urls_with_encoded_query() {
		let mut selection = FilterSelection::with_keyword("rust dev");
		selection.location = Some("Toronto, ON".into());
		let request = client("http://localhost:8080/")
			.build(&JobsRequest::Sort {
				selection,
				sort_by: SortBy::Date,
			})
			.unwrap();

		let url = request.url();
		assert_eq!(url.path(), "/api/jobs/sort");
		let pairs: Vec<(String, String)> = url
			.query_pairs()
			.map(|(k, v)| (k.into_owned(), v.into_owned()))
			.collect();
		assert_eq!(
			pairs,
			vec![
				("location".to_string(), "Toronto, ON".to_string()),
				("search".to_string(), "rust dev".to_string()),
				("sortBy".to_string(), "date".to_string()),
			]
		);
	}

	#[test]
	fn unfiltered_request_has_no_query() {
		let request = client("http://localhost:8080").build(&JobsRequest::All).unwrap();
		assert_eq!(request.url().as_str(), "http://localhost:8080/api/jobs");
	}
}
