use chrono::{DateTime, Duration, Timelike, Utc};
use serde::{Deserialize, Serialize};

/// Orbit state vector as delivered by an external metadata reader
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StateVector {
    pub time: DateTime<Utc>,
    pub position: [f64; 3],  // [x, y, z] in meters
    pub velocity: [f64; 3],  // [vx, vy, vz] in m/s
}

impl StateVector {
    /// Seconds elapsed since midnight of the state vector's day (UTC)
    pub fn seconds_of_day(&self) -> f64 {
        self.time.num_seconds_from_midnight() as f64
            + self.time.nanosecond() as f64 * 1e-9
    }

    /// Seconds elapsed since `epoch`, negative before it
    pub fn seconds_since(&self, epoch: DateTime<Utc>) -> f64 {
        let elapsed = self.time - epoch;
        let whole = elapsed.num_seconds();
        let fraction = (elapsed - Duration::seconds(whole)).num_nanoseconds().unwrap_or(0);
        whole as f64 + fraction as f64 * 1e-9
    }
}

/// Precise orbit information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrbitData {
    pub state_vectors: Vec<StateVector>,
    pub reference_time: DateTime<Utc>,
}

impl OrbitData {
    /// Midnight (UTC) starting the day of `reference_time`
    pub fn reference_day_start(&self) -> DateTime<Utc> {
        self.reference_time
            - Duration::seconds(self.reference_time.num_seconds_from_midnight() as i64)
            - Duration::nanoseconds(self.reference_time.nanosecond() as i64)
    }
}

/// Geodetic position on (or above) the reference ellipsoid
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeodeticPosition {
    pub latitude: f64,   // radians
    pub longitude: f64,  // radians
    pub height: f64,     // meters above the ellipsoid
}

impl GeodeticPosition {
    pub fn new(latitude: f64, longitude: f64, height: f64) -> Self {
        Self { latitude, longitude, height }
    }

    /// Build from latitude/longitude given in degrees
    pub fn from_degrees(latitude: f64, longitude: f64, height: f64) -> Self {
        Self::new(latitude.to_radians(), longitude.to_radians(), height)
    }
}

/// Fractional position in the radar image (1-based lines and pixels)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RadarCoordinate {
    pub line: f64,
    pub pixel: f64,
}

/// Zero-Doppler azimuth time and one-way range time of a ground point
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AzimuthRangeTime {
    pub azimuth_time: f64, // seconds of day
    pub range_time: f64,   // seconds
}

/// Orbit evaluated at a single epoch
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitSample {
    pub time: f64,
    pub position: crate::core::Point,
    pub velocity: crate::core::Point,
    pub acceleration: crate::core::Point,
}

/// Error types for orbit modelling and geocoding
#[derive(Debug, thiserror::Error)]
pub enum SarError {
    #[error("Polynomial fit error: {0}")]
    Fit(String),

    #[error("Orbit not initialized: {0}")]
    NotInitialized(String),

    #[error("Convergence error: {0}")]
    Convergence(String),

    #[error("Domain error: {0}")]
    Domain(String),
}

/// Result type for orbit and geocoding operations
pub type SarResult<T> = Result<T, SarError>;

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_seconds_of_day() {
        let sv = StateVector {
            time: Utc.with_ymd_and_hms(2020, 1, 3, 17, 8, 15).unwrap()
                + chrono::Duration::milliseconds(250),
            position: [0.0; 3],
            velocity: [0.0; 3],
        };

        let expected = 17.0 * 3600.0 + 8.0 * 60.0 + 15.25;
        assert!((sv.seconds_of_day() - expected).abs() < 1e-9);
    }

    #[test]
    fn test_seconds_since_day_start_crosses_midnight() {
        let reference = Utc.with_ymd_and_hms(2020, 1, 3, 23, 59, 58).unwrap();
        let orbit_data = OrbitData {
            state_vectors: Vec::new(),
            reference_time: reference + chrono::Duration::milliseconds(500),
        };
        let day_start = orbit_data.reference_day_start();
        assert_eq!(day_start, Utc.with_ymd_and_hms(2020, 1, 3, 0, 0, 0).unwrap());

        let after_midnight = StateVector {
            time: Utc.with_ymd_and_hms(2020, 1, 4, 0, 0, 1).unwrap() + chrono::Duration::milliseconds(250),
            position: [0.0; 3],
            velocity: [0.0; 3],
        };
        assert!((after_midnight.seconds_since(day_start) - 86_401.25).abs() < 1e-9);
        assert!((after_midnight.seconds_of_day() - 1.25).abs() < 1e-9);
    }

    #[test]
    fn test_error_display() {
        let err = SarError::Convergence("lph2xyz diverging".to_string());
        assert_eq!(format!("{}", err), "Convergence error: lph2xyz diverging");
    }
}
