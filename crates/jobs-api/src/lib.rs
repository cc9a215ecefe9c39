//! Client-side model of the GeoJobSearch HTTP API.
//!
//! The crate is split into the wire [`types`], the [`request`] composition that
//! turns a filter selection into endpoint paths and query strings, response
//! decoding, and a blocking [`HttpJobsClient`] implementing the [`JobsApi`]
//! seam that the terminal UI depends on.

pub mod client;
pub mod error;
pub mod request;
pub mod response;
pub mod types;

pub use client::{ClientOptions, DEFAULT_BASE_URL, HttpJobsClient, JobsApi, validate_base_url};
pub use error::ApiError;
pub use request::{Endpoint, JobsRequest};
pub use response::JobsResponse;
pub use types::{
	FilterSelection, Job, JobCoordinate, JobTypeCount, LocationCount, SalaryBand, SalaryRange,
	SortBy,
};
