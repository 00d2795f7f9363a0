use crate::constants::{WGS84_A, WGS84_B};
use crate::core::Point;
use crate::types::{GeodeticPosition, SarError, SarResult};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Reference ellipsoid for geodetic <-> geocentric conversion
///
/// Immutable once built. Eccentricities are derived from the axes at
/// construction time so conversions never recompute them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EllipsoidModel {
    semi_major: f64,
    semi_minor: f64,
    e2: f64,
    e2b: f64,
}

impl Default for EllipsoidModel {
    fn default() -> Self {
        Self::wgs84()
    }
}

impl EllipsoidModel {
    /// Custom ellipsoid from its semi-major and semi-minor axes (m)
    pub fn new(semi_major: f64, semi_minor: f64) -> SarResult<Self> {
        if !(semi_minor > 0.0 && semi_major >= semi_minor && semi_major.is_finite()) {
            return Err(SarError::Domain(format!(
                "Invalid ellipsoid axes: a={}, b={} (need a >= b > 0)",
                semi_major, semi_minor
            )));
        }
        Ok(Self::from_axes(semi_major, semi_minor))
    }

    pub fn wgs84() -> Self {
        Self::from_axes(WGS84_A, WGS84_B)
    }

    fn from_axes(a: f64, b: f64) -> Self {
        Self {
            semi_major: a,
            semi_minor: b,
            e2: 1.0 - (b / a).powi(2),
            e2b: (a / b).powi(2) - 1.0,
        }
    }

    pub fn semi_major(&self) -> f64 {
        self.semi_major
    }

    pub fn semi_minor(&self) -> f64 {
        self.semi_minor
    }

    /// First eccentricity squared
    pub fn e2(&self) -> f64 {
        self.e2
    }

    /// Second eccentricity squared
    pub fn e2b(&self) -> f64 {
        self.e2b
    }

    /// Prime vertical radius of curvature at geodetic latitude `phi`
    pub fn normal_radius(&self, phi: f64) -> f64 {
        self.semi_major / (1.0 - self.e2 * phi.sin().powi(2)).sqrt()
    }

    /// Geodetic latitude/longitude (radians) and height (m) to geocentric xyz
    ///
    /// Angles are accepted up to +/- pi in magnitude for both latitude and
    /// longitude; anything beyond fails with a domain error.
    pub fn ellipsoid_to_cartesian(&self, phi: f64, lambda: f64, height: f64) -> SarResult<Point> {
        if !(phi.abs() <= PI) || !(lambda.abs() <= PI) {
            return Err(SarError::Domain(format!(
                "ellipsoid_to_cartesian: latitude {} or longitude {} outside [-pi, pi]",
                phi, lambda
            )));
        }

        let n = self.normal_radius(phi);
        let n_h = n + height;
        let cos_phi = phi.cos();

        Ok(Point::new(
            n_h * cos_phi * lambda.cos(),
            n_h * cos_phi * lambda.sin(),
            (n + height - self.e2 * n) * phi.sin(),
        ))
    }

    pub fn geodetic_to_cartesian(&self, position: &GeodeticPosition) -> SarResult<Point> {
        self.ellipsoid_to_cartesian(position.latitude, position.longitude, position.height)
    }

    /// Geocentric xyz to geodetic latitude/longitude/height (Bowring)
    ///
    /// Closed form, no iteration. Height is taken from the projection onto
    /// the normal so it stays well conditioned at the poles.
    pub fn cartesian_to_ellipsoid(&self, point: &Point) -> GeodeticPosition {
        let a = self.semi_major;
        let b = self.semi_minor;

        let r = point.x.hypot(point.y);
        let nu = (point.z * a).atan2(r * b);
        let sin_nu = nu.sin();
        let cos_nu = nu.cos();

        let phi = (point.z + self.e2b * b * sin_nu.powi(3))
            .atan2(r - self.e2 * a * cos_nu.powi(3));
        let lambda = point.y.atan2(point.x);

        let sin_phi = phi.sin();
        let height = r * phi.cos() + point.z * sin_phi
            - a * (1.0 - self.e2 * sin_phi * sin_phi).sqrt();

        GeodeticPosition::new(phi, lambda, height)
    }
}
