mod coordinate;
mod facet;
mod job;
mod selection;
mod sort;

pub use coordinate::JobCoordinate;
pub use facet::{JobTypeCount, LocationCount, SalaryRange};
pub use job::Job;
pub use selection::{FilterSelection, SalaryBand};
pub use sort::SortBy;
