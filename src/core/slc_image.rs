use crate::constants::SPEED_OF_LIGHT;
use crate::core::{EllipsoidModel, Point, Window};
use crate::types::{GeodeticPosition, RadarCoordinate, SarError, SarResult};
use serde::{Deserialize, Serialize};

/// Doppler centroid polynomial `f_dc = a0 + a1*tau + a2*tau^2`
///
/// `tau` is the range time of a pixel relative to the first pixel, see
/// [`DopplerCentroid::frequency_at`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DopplerCentroid {
    pub a0: f64, // Hz
    pub a1: f64, // Hz/s
    pub a2: f64, // Hz/s^2
}

impl DopplerCentroid {
    pub fn new(a0: f64, a1: f64, a2: f64) -> Self {
        Self { a0, a1, a2 }
    }

    /// Doppler centroid frequency at `pixel` for a given 2x range sampling rate
    pub fn frequency_at(&self, pixel: f64, range_sampling_rate_2x: f64) -> f64 {
        let tau = (pixel - 1.0) / (range_sampling_rate_2x / 2.0);
        self.a0 + self.a1 * tau + self.a2 * tau * tau
    }

    /// Zero-Doppler processed data has an all-zero polynomial
    pub fn is_zero(&self) -> bool {
        self.a0 == 0.0 && self.a1 == 0.0 && self.a2 == 0.0
    }
}

/// Acquisition metadata for one single-look complex image
///
/// Delivered by an external metadata reader; turned into an [`SlcImage`]
/// with [`SlcImage::new`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlcImageParams {
    pub mission: String,
    pub orbit_number: u32,
    /// Radar wavelength (m)
    pub radar_wavelength: f64,
    /// Pulse repetition frequency (Hz)
    pub prf: f64,
    /// Processed azimuth bandwidth (Hz)
    pub azimuth_bandwidth: f64,
    /// Range bandwidth (Hz)
    pub range_bandwidth: f64,
    /// Azimuth time of the first line (seconds of day)
    pub azimuth_time_first_line: f64,
    /// Range sampling rate, "2x" convention (Hz)
    pub range_sampling_rate: f64,
    /// One-way range time to the first pixel (s)
    pub range_time_first_pixel: f64,
    pub doppler: DopplerCentroid,
    pub multilook_azimuth: u32,
    pub multilook_range: u32,
    pub original_window: Window,
    /// Crop currently held in memory, defaults to the original window
    pub current_window: Option<Window>,
    /// Approximate scene centre, geodetic degrees (latitude, longitude)
    pub approx_geo_centre: (f64, f64),
}

/// Radar timing model of a single-look complex image
///
/// Read-only after construction. Conversions use 1-based line and pixel
/// numbers: line 1 is acquired at `azimuth_time_first_line`, pixel 1 at
/// `range_time_first_pixel`.
#[derive(Debug, Clone)]
pub struct SlcImage {
    mission: String,
    orbit_number: u32,
    radar_wavelength: f64,
    prf: f64,
    azimuth_bandwidth: f64,
    range_bandwidth: f64,
    t_azi1: f64,
    rsr2x: f64,
    t_range1: f64,
    doppler: DopplerCentroid,
    ml_az: u32,
    ml_rg: u32,
    original_window: Window,
    current_window: Window,
    approx_geo_centre_original: GeodeticPosition,
    approx_xyz_centre_original: Point,
    approx_radar_centre_original: RadarCoordinate,
    ellipsoid: EllipsoidModel,
}

impl SlcImage {
    /// Build the timing model, rejecting timing parameters the linear
    /// conversions cannot divide by.
    pub fn new(params: SlcImageParams, ellipsoid: EllipsoidModel) -> SarResult<Self> {
        if !(params.prf.is_finite() && params.prf != 0.0) {
            return Err(SarError::Domain(format!("PRF must be non-zero, got {}", params.prf)));
        }
        if !(params.range_sampling_rate.is_finite() && params.range_sampling_rate != 0.0) {
            return Err(SarError::Domain(format!(
                "Range sampling rate must be non-zero, got {}",
                params.range_sampling_rate
            )));
        }
        if params.multilook_azimuth == 0 || params.multilook_range == 0 {
            return Err(SarError::Domain(format!(
                "Multilook factors must be positive, got {}x{}",
                params.multilook_azimuth, params.multilook_range
            )));
        }

        let (lat_deg, lon_deg) = params.approx_geo_centre;
        let approx_geo_centre_original = GeodeticPosition::from_degrees(lat_deg, lon_deg, 0.0);
        let approx_xyz_centre_original =
            ellipsoid.geodetic_to_cartesian(&approx_geo_centre_original)?;

        let (centre_line, centre_pixel) = params.original_window.centre();
        let approx_radar_centre_original = RadarCoordinate {
            line: centre_line,
            pixel: centre_pixel,
        };

        log::debug!(
            "SLC image {} orbit {}: PRF {:.3} Hz, RSR2x {:.1} Hz, window {}",
            params.mission,
            params.orbit_number,
            params.prf,
            params.range_sampling_rate,
            params.original_window
        );

        Ok(Self {
            mission: params.mission,
            orbit_number: params.orbit_number,
            radar_wavelength: params.radar_wavelength,
            prf: params.prf,
            azimuth_bandwidth: params.azimuth_bandwidth,
            range_bandwidth: params.range_bandwidth,
            t_azi1: params.azimuth_time_first_line,
            rsr2x: params.range_sampling_rate,
            t_range1: params.range_time_first_pixel,
            doppler: params.doppler,
            ml_az: params.multilook_azimuth,
            ml_rg: params.multilook_range,
            original_window: params.original_window,
            current_window: params.current_window.unwrap_or(params.original_window),
            approx_geo_centre_original,
            approx_xyz_centre_original,
            approx_radar_centre_original,
            ellipsoid,
        })
    }

    pub fn pixel_to_range_time(&self, pixel: f64) -> f64 {
        self.t_range1 + (pixel - 1.0) / self.rsr2x
    }

    pub fn range_time_to_pixel(&self, range_time: f64) -> f64 {
        1.0 + self.rsr2x * (range_time - self.t_range1)
    }

    pub fn line_to_azimuth_time(&self, line: f64) -> f64 {
        self.t_azi1 + (line - 1.0) / self.prf
    }

    pub fn azimuth_time_to_line(&self, azimuth_time: f64) -> f64 {
        1.0 + self.prf * (azimuth_time - self.t_azi1)
    }

    /// One-way slant range to `pixel` (m)
    pub fn pixel_to_slant_range(&self, pixel: f64) -> f64 {
        SPEED_OF_LIGHT * self.pixel_to_range_time(pixel)
    }

    pub fn pixel_to_doppler_frequency(&self, pixel: f64) -> f64 {
        self.doppler.frequency_at(pixel, self.rsr2x)
    }

    pub fn mission(&self) -> &str {
        &self.mission
    }

    pub fn orbit_number(&self) -> u32 {
        self.orbit_number
    }

    pub fn radar_wavelength(&self) -> f64 {
        self.radar_wavelength
    }

    pub fn prf(&self) -> f64 {
        self.prf
    }

    pub fn azimuth_bandwidth(&self) -> f64 {
        self.azimuth_bandwidth
    }

    pub fn range_bandwidth(&self) -> f64 {
        self.range_bandwidth
    }

    pub fn azimuth_time_first_line(&self) -> f64 {
        self.t_azi1
    }

    pub fn range_sampling_rate(&self) -> f64 {
        self.rsr2x
    }

    pub fn range_time_first_pixel(&self) -> f64 {
        self.t_range1
    }

    pub fn doppler(&self) -> &DopplerCentroid {
        &self.doppler
    }

    pub fn multilook_azimuth(&self) -> u32 {
        self.ml_az
    }

    pub fn multilook_range(&self) -> u32 {
        self.ml_rg
    }

    pub fn original_window(&self) -> &Window {
        &self.original_window
    }

    pub fn current_window(&self) -> &Window {
        &self.current_window
    }

    pub fn approx_geo_centre_original(&self) -> &GeodeticPosition {
        &self.approx_geo_centre_original
    }

    pub fn approx_xyz_centre_original(&self) -> Point {
        self.approx_xyz_centre_original
    }

    pub fn approx_radar_centre_original(&self) -> RadarCoordinate {
        self.approx_radar_centre_original
    }

    pub fn ellipsoid(&self) -> &EllipsoidModel {
        &self.ellipsoid
    }
}
