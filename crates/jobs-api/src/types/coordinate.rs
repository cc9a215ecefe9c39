use serde::{Deserialize, Serialize};

use super::Job;

/// A `[job, latitude, longitude]` triple from the coordinates endpoint.
///
/// Remote postings have no company address and arrive with null coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobCoordinate(pub Job, pub Option<f64>, pub Option<f64>);

impl JobCoordinate {
	#[must_use]
	pub fn new(job: Job, latitude: Option<f64>, longitude: Option<f64>) -> Self {
		Self(job, latitude, longitude)
	}

	#[must_use]
	pub fn job(&self) -> &Job {
		&self.0
	}

	/// Return `(latitude, longitude)` when both halves are present and finite.
	#[must_use]
	pub fn position(&self) -> Option<(f64, f64)> {
		match (self.1, self.2) {
			(Some(lat), Some(lon)) if lat.is_finite() && lon.is_finite() => Some((lat, lon)),
			_ => None,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn decodes_json_triples() {
		let json = r#"[
			[{"jobID": 1, "title": "A", "company": "X"}, null, null],
			[{"jobID": 2, "title": "B", "company": "Y"}, 43.6, -79.4]
		]"#;
		let coords: Vec<JobCoordinate> = serde_json::from_str(json).unwrap();

		assert_eq!(coords.len(), 2);
		assert_eq!(coords[0].position(), None);
		assert_eq!(coords[1].position(), Some((43.6, -79.4)));
		assert_eq!(coords[1].job().title, "B");
	}

	#[test]
	fn half_missing_coordinates_have_no_position() {
		let coord = JobCoordinate::new(Job::new(1, "A", "X"), Some(43.6), None);
		assert_eq!(coord.position(), None);
	}
}
