/// Mean Earth radius in kilometers. The Earth is modeled as a perfect sphere.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Absolute tolerance used by `floats_equal`.
pub const EPSILON: f64 = 1e-8;

/// Default reference point: the Dublin office.
pub const DUBLIN_OFFICE: Point = Point::new(53.339428, -6.257664);

/// A geographic coordinate in degrees. Latitude is expected in [-90, 90] and
/// longitude in [-180, 180], but neither is enforced.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Point {
    pub latitude: f64,
    pub longitude: f64,
}

/// A `Point` projected into radians. Only ever built from a `Point`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RadianPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl Point {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    pub fn to_radians(&self) -> RadianPoint {
        RadianPoint {
            latitude: degrees_to_radians(self.latitude),
            longitude: degrees_to_radians(self.longitude),
        }
    }
}

pub fn degrees_to_radians(degrees: f64) -> f64 {
    degrees * std::f64::consts::PI / 180.0
}

/// Approximate equality with the fixed absolute `EPSILON`.
/// Only meant for assertions: it hides real differences at larger magnitudes.
pub fn floats_equal(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}
