//! Geographic bounds and the map viewport.

use geojob_api::JobCoordinate;

/// Latitude/longitude pair in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
	pub lat: f64,
	pub lon: f64,
}

impl GeoPoint {
	#[must_use]
	pub const fn new(lat: f64, lon: f64) -> Self {
		Self { lat, lon }
	}
}

/// Initial centre of the map (Ontario).
pub const ONTARIO: GeoPoint = GeoPoint::new(50.0, -85.0);

/// Smallest span the viewport may show, in degrees.
pub const MIN_SPAN: f64 = 0.5;
/// Fraction of the fitted span added on every side.
const FIT_MARGIN: f64 = 0.1;
const DEFAULT_LAT_SPAN: f64 = 16.0;
const DEFAULT_LON_SPAN: f64 = 32.0;
const MAX_LAT_SPAN: f64 = 180.0;
const MAX_LON_SPAN: f64 = 360.0;
const ZOOM_FACTOR: f64 = 2.0;

/// Axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoBounds {
	pub south: f64,
	pub west: f64,
	pub north: f64,
	pub east: f64,
}

impl GeoBounds {
	/// Smallest box covering every point. `None` for an empty iterator.
	pub fn from_points(points: impl IntoIterator<Item = GeoPoint>) -> Option<Self> {
		points.into_iter().fold(None, |bounds, point| {
			Some(match bounds {
				None => Self {
					south: point.lat,
					west: point.lon,
					north: point.lat,
					east: point.lon,
				},
				Some(bounds) => Self {
					south: bounds.south.min(point.lat),
					west: bounds.west.min(point.lon),
					north: bounds.north.max(point.lat),
					east: bounds.east.max(point.lon),
				},
			})
		})
	}

	#[must_use]
	pub fn center(&self) -> GeoPoint {
		GeoPoint::new(
			(self.south + self.north) / 2.0,
			(self.west + self.east) / 2.0,
		)
	}

	#[must_use]
	pub fn lat_span(&self) -> f64 {
		self.north - self.south
	}

	#[must_use]
	pub fn lon_span(&self) -> f64 {
		self.east - self.west
	}

	#[must_use]
	pub fn contains(&self, point: GeoPoint) -> bool {
		(self.south..=self.north).contains(&point.lat)
			&& (self.west..=self.east).contains(&point.lon)
	}
}

/// Bounds covering every coordinate that has a position.
///
/// Entries with a null latitude or longitude are skipped; `None` when no entry
/// has a position.
#[must_use]
pub fn fit_bounds(coords: &[JobCoordinate]) -> Option<GeoBounds> {
	GeoBounds::from_points(
		coords
			.iter()
			.filter_map(JobCoordinate::position)
			.map(|(lat, lon)| GeoPoint::new(lat, lon)),
	)
}

/// Visible part of the world map.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapViewport {
	center: GeoPoint,
	lat_span: f64,
	lon_span: f64,
}

impl Default for MapViewport {
	fn default() -> Self {
		Self {
			center: ONTARIO,
			lat_span: DEFAULT_LAT_SPAN,
			lon_span: DEFAULT_LON_SPAN,
		}
	}
}

impl MapViewport {
	#[must_use]
	pub fn center(&self) -> GeoPoint {
		self.center
	}

	/// Show `bounds` with a small margin, never narrower than [`MIN_SPAN`].
	pub fn fit(&mut self, bounds: GeoBounds) {
		self.center = bounds.center();
		self.lat_span = clamp_span(bounds.lat_span() * (1.0 + 2.0 * FIT_MARGIN), MAX_LAT_SPAN);
		self.lon_span = clamp_span(bounds.lon_span() * (1.0 + 2.0 * FIT_MARGIN), MAX_LON_SPAN);
	}

	/// Fit to the positioned coordinates. Leaves the viewport untouched and
	/// returns `false` when none have a position.
	pub fn fit_to(&mut self, coords: &[JobCoordinate]) -> bool {
		match fit_bounds(coords) {
			Some(bounds) => {
				self.fit(bounds);
				true
			}
			None => false,
		}
	}

	pub fn zoom_in(&mut self) {
		self.lat_span = clamp_span(self.lat_span / ZOOM_FACTOR, MAX_LAT_SPAN);
		self.lon_span = clamp_span(self.lon_span / ZOOM_FACTOR, MAX_LON_SPAN);
	}

	pub fn zoom_out(&mut self) {
		self.lat_span = clamp_span(self.lat_span * ZOOM_FACTOR, MAX_LAT_SPAN);
		self.lon_span = clamp_span(self.lon_span * ZOOM_FACTOR, MAX_LON_SPAN);
	}

	/// Move the centre without changing the zoom level.
	pub fn center_on(&mut self, point: GeoPoint) {
		self.center = point;
	}

	/// Visible area, for canvas axis bounds.
	#[must_use]
	pub fn bounds(&self) -> GeoBounds {
		GeoBounds {
			south: self.center.lat - self.lat_span / 2.0,
			west: self.center.lon - self.lon_span / 2.0,
			north: self.center.lat + self.lat_span / 2.0,
			east: self.center.lon + self.lon_span / 2.0,
		}
	}
}

fn clamp_span(span: f64, max: f64) -> f64 {
	if span.is_finite() {
		span.clamp(MIN_SPAN, max)
	} else {
		max
	}
}
