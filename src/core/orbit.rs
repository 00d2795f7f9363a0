use crate::constants::{
    CRITERION_POSITION, CRITERION_TIME, MAX_ITERATIONS, ORBIT_TIME_SCALE, SPEED_OF_LIGHT,
};
use crate::core::polyfit::{
    normalize_time, poly_fit_normalized, poly_val, poly_val_derivative, poly_val_second_derivative,
};
use crate::core::{EllipsoidModel, Point, SlcImage, Window};
use crate::types::{
    AzimuthRangeTime, GeodeticPosition, OrbitData, OrbitSample, RadarCoordinate, SarError,
    SarResult,
};
use nalgebra::{Matrix3, Vector3};
use ndarray::Array2;
use serde::{Deserialize, Serialize};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Upper bound on the number of epochs returned by [`Orbit::dump_orbit`]
const MAX_DUMP_SAMPLES: usize = 10_000_000;

/// Orbit interpolation and geocoding configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrbitConfig {
    /// Degree of the per-axis orbit polynomial
    pub polynomial_degree: usize,
    /// Iteration cap of the Newton solvers
    pub max_iterations: usize,
    /// Convergence criterion on the position update (m)
    pub position_tolerance: f64,
    /// Convergence criterion on the azimuth time update (s)
    pub time_tolerance: f64,
}

impl Default for OrbitConfig {
    fn default() -> Self {
        Self {
            polynomial_degree: 3,
            max_iterations: MAX_ITERATIONS,
            position_tolerance: CRITERION_POSITION,
            time_tolerance: CRITERION_TIME,
        }
    }
}

/// Fitted per-axis polynomials in normalized time
#[derive(Debug, Clone)]
struct OrbitPolynomial {
    reference_time: f64,
    coeff_x: Vec<f64>,
    coeff_y: Vec<f64>,
    coeff_z: Vec<f64>,
}

impl OrbitPolynomial {
    fn position(&self, azimuth_time: f64) -> Point {
        let t = normalize_time(azimuth_time, self.reference_time);
        Point::new(
            poly_val(t, &self.coeff_x),
            poly_val(t, &self.coeff_y),
            poly_val(t, &self.coeff_z),
        )
    }

    // d/dt of p((t - t_ref) / 10) is p'(t_norm) / 10
    fn velocity(&self, azimuth_time: f64) -> Point {
        let t = normalize_time(azimuth_time, self.reference_time);
        Point::new(
            poly_val_derivative(t, &self.coeff_x),
            poly_val_derivative(t, &self.coeff_y),
            poly_val_derivative(t, &self.coeff_z),
        ) / ORBIT_TIME_SCALE
    }

    fn acceleration(&self, azimuth_time: f64) -> Point {
        let t = normalize_time(azimuth_time, self.reference_time);
        Point::new(
            poly_val_second_derivative(t, &self.coeff_x),
            poly_val_second_derivative(t, &self.coeff_y),
            poly_val_second_derivative(t, &self.coeff_z),
        ) / (ORBIT_TIME_SCALE * ORBIT_TIME_SCALE)
    }
}

/// Satellite orbit from discrete state vectors
///
/// Positions are modelled with one least-squares polynomial per axis. All
/// geocoding methods take `&self` and keep their iteration state on the
/// stack, so one fitted orbit can serve any number of threads; refitting
/// needs `&mut self`.
#[derive(Debug, Clone)]
pub struct Orbit {
    time: Vec<f64>,
    data_x: Vec<f64>,
    data_y: Vec<f64>,
    data_z: Vec<f64>,
    degree: usize,
    polynomial: Option<OrbitPolynomial>,
    config: OrbitConfig,
    ellipsoid: EllipsoidModel,
}

impl Default for Orbit {
    fn default() -> Self {
        let config = OrbitConfig::default();
        Self {
            time: Vec::new(),
            data_x: Vec::new(),
            data_y: Vec::new(),
            data_z: Vec::new(),
            degree: config.polynomial_degree,
            polynomial: None,
            config,
            ellipsoid: EllipsoidModel::default(),
        }
    }
}

impl Orbit {
    /// Empty, uninitialized orbit
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a custom configuration for later solves
    ///
    /// An already fitted orbit keeps its polynomial and degree; the
    /// configured degree applies from the next [`Orbit::fit_polynomial`].
    pub fn with_config(mut self, config: OrbitConfig) -> Self {
        if self.polynomial.is_none() {
            self.degree = config.polynomial_degree;
        } else if self.degree != config.polynomial_degree {
            log::debug!(
                "Keeping fitted degree {} (configured degree {} applies on refit)",
                self.degree,
                config.polynomial_degree
            );
        }
        self.config = config;
        self
    }

    /// Reference ellipsoid for the ellipsoid equation and geodetic output
    pub fn with_ellipsoid(mut self, ellipsoid: EllipsoidModel) -> Self {
        self.ellipsoid = ellipsoid;
        self
    }

    /// Build and fit from separate time and coordinate arrays
    pub fn from_arrays(
        time: &[f64],
        x: &[f64],
        y: &[f64],
        z: &[f64],
        degree: usize,
    ) -> SarResult<Self> {
        if time.len() != x.len() || time.len() != y.len() || time.len() != z.len() {
            return Err(SarError::Fit(format!(
                "State vector arrays differ in length: t={}, x={}, y={}, z={}",
                time.len(),
                x.len(),
                y.len(),
                z.len()
            )));
        }

        let mut orbit = Self::new();
        orbit.time = time.to_vec();
        orbit.data_x = x.to_vec();
        orbit.data_y = y.to_vec();
        orbit.data_z = z.to_vec();
        orbit.compute_coefficients(degree)?;
        Ok(orbit)
    }

    /// Build and fit from `[t, x, y, z]` rows
    pub fn from_state_vector_matrix(state_vectors: &[[f64; 4]], degree: usize) -> SarResult<Self> {
        let mut orbit = Self::new();
        orbit.set_state_vectors(state_vectors);
        orbit.compute_coefficients(degree)?;
        Ok(orbit)
    }

    /// Build and fit from timestamped state vectors
    ///
    /// Times are seconds since midnight (UTC) of the reference day and keep
    /// counting past 86400 s, so arcs crossing midnight stay monotonic.
    pub fn from_orbit_data(orbit_data: &OrbitData, degree: usize) -> SarResult<Self> {
        let day_start = orbit_data.reference_day_start();
        let rows: Vec<[f64; 4]> = orbit_data
            .state_vectors
            .iter()
            .map(|sv| [sv.seconds_since(day_start), sv.position[0], sv.position[1], sv.position[2]])
            .collect();

        if let Some(pair) = rows.windows(2).find(|pair| pair[1][0] <= pair[0][0]) {
            return Err(SarError::Fit(format!(
                "State vector times must increase: {:.6} s followed by {:.6} s",
                pair[0][0], pair[1][0]
            )));
        }

        Self::from_state_vector_matrix(&rows, degree)
    }

    /// Replace the state vectors; the orbit must be refitted afterwards
    pub fn set_state_vectors(&mut self, state_vectors: &[[f64; 4]]) {
        self.time = state_vectors.iter().map(|sv| sv[0]).collect();
        self.data_x = state_vectors.iter().map(|sv| sv[1]).collect();
        self.data_y = state_vectors.iter().map(|sv| sv[2]).collect();
        self.data_z = state_vectors.iter().map(|sv| sv[3]).collect();
        self.polynomial = None;
    }

    /// Fit the orbit polynomials with the given degree
    ///
    /// On failure the orbit is left uninitialized.
    pub fn compute_coefficients(&mut self, degree: usize) -> SarResult<()> {
        log::info!(
            "Computing coefficients for orbit polyfit degree {} ({} state vectors)",
            degree,
            self.time.len()
        );

        self.polynomial = None;
        self.degree = degree;

        let coeff_x = poly_fit_normalized(&self.time, &self.data_x, degree)?;
        let coeff_y = poly_fit_normalized(&self.time, &self.data_y, degree)?;
        let coeff_z = poly_fit_normalized(&self.time, &self.data_z, degree)?;

        self.polynomial = Some(OrbitPolynomial {
            reference_time: self.time[self.time.len() / 2],
            coeff_x,
            coeff_y,
            coeff_z,
        });
        Ok(())
    }

    /// Fit with the configured polynomial degree
    pub fn fit_polynomial(&mut self) -> SarResult<()> {
        self.compute_coefficients(self.config.polynomial_degree)
    }

    fn polynomial(&self) -> SarResult<&OrbitPolynomial> {
        self.polynomial.as_ref().ok_or_else(|| {
            SarError::NotInitialized(
                "orbit polynomial has not been fitted, call compute_coefficients first".to_string(),
            )
        })
    }

    pub fn is_interpolated(&self) -> bool {
        self.polynomial.is_some()
    }

    pub fn num_state_vectors(&self) -> usize {
        self.time.len()
    }

    pub fn time(&self) -> &[f64] {
        &self.time
    }

    pub fn data_x(&self) -> &[f64] {
        &self.data_x
    }

    pub fn data_y(&self) -> &[f64] {
        &self.data_y
    }

    pub fn data_z(&self) -> &[f64] {
        &self.data_z
    }

    pub fn coeff_x(&self) -> Option<&[f64]> {
        self.polynomial.as_ref().map(|p| p.coeff_x.as_slice())
    }

    pub fn coeff_y(&self) -> Option<&[f64]> {
        self.polynomial.as_ref().map(|p| p.coeff_y.as_slice())
    }

    pub fn coeff_z(&self) -> Option<&[f64]> {
        self.polynomial.as_ref().map(|p| p.coeff_z.as_slice())
    }

    pub fn poly_degree(&self) -> usize {
        self.degree
    }

    pub fn config(&self) -> &OrbitConfig {
        &self.config
    }

    pub fn ellipsoid(&self) -> &EllipsoidModel {
        &self.ellipsoid
    }

    /// First and last state vector time, if any
    pub fn time_span(&self) -> Option<(f64, f64)> {
        match (self.time.first(), self.time.last()) {
            (Some(&first), Some(&last)) => Some((first.min(last), first.max(last))),
            _ => None,
        }
    }

    /// True when `azimuth_time` lies outside the sampled state vector span
    pub fn is_extrapolated(&self, azimuth_time: f64) -> bool {
        match self.time_span() {
            Some((start, end)) => azimuth_time < start || azimuth_time > end,
            None => true,
        }
    }

    fn warn_if_extrapolated(&self, azimuth_time: f64, caller: &str) {
        if self.is_extrapolated(azimuth_time) {
            if let Some((start, end)) = self.time_span() {
                log::warn!(
                    "{}: orbit evaluated at {:.6} s, outside state vector span ({:.6}, {:.6})",
                    caller, azimuth_time, start, end
                );
            }
        }
    }

    /// Satellite position at `azimuth_time`
    pub fn position(&self, azimuth_time: f64) -> SarResult<Point> {
        Ok(self.polynomial()?.position(azimuth_time))
    }

    /// Satellite velocity at `azimuth_time` (m/s)
    pub fn velocity(&self, azimuth_time: f64) -> SarResult<Point> {
        Ok(self.polynomial()?.velocity(azimuth_time))
    }

    /// Satellite acceleration at `azimuth_time` (m/s^2)
    pub fn acceleration(&self, azimuth_time: f64) -> SarResult<Point> {
        Ok(self.polynomial()?.acceleration(azimuth_time))
    }

    /// Zero-Doppler condition `v . (P - S)`
    pub fn doppler_equation(satellite_velocity: &Point, satellite_to_point: &Point) -> f64 {
        satellite_velocity.dot(satellite_to_point)
    }

    /// Time derivative of the Doppler condition, `a . (P - S) - |v|^2`
    pub fn doppler_equation_rate(
        satellite_to_point: &Point,
        satellite_velocity: &Point,
        satellite_acceleration: &Point,
    ) -> f64 {
        satellite_acceleration.dot(satellite_to_point) - satellite_velocity.norm_squared()
    }

    /// Range condition `|P - S|^2 - (c * tau)^2`
    pub fn range_equation(satellite_to_point: &Point, range_time: f64) -> f64 {
        satellite_to_point.norm_squared() - (SPEED_OF_LIGHT * range_time).powi(2)
    }

    /// Ellipsoid condition `(x^2 + y^2) / (a + h)^2 + z^2 / (b + h)^2 - 1`
    pub fn ellipsoid_equation(point: &Point, ellipsoid: &EllipsoidModel, height: f64) -> f64 {
        (point.x * point.x + point.y * point.y) / (ellipsoid.semi_major() + height).powi(2)
            + (point.z / (ellipsoid.semi_minor() + height)).powi(2)
            - 1.0
    }

    /// Ground position of image coordinates at `height` above the ellipsoid
    pub fn line_col_pixel_height_to_xyz(
        &self,
        line: f64,
        pixel: f64,
        height: f64,
        slc: &SlcImage,
    ) -> SarResult<Point> {
        let azimuth_time = slc.line_to_azimuth_time(line);
        let range_time = slc.pixel_to_range_time(pixel);
        self.azimuth_range_time_height_to_xyz(
            azimuth_time,
            range_time,
            height,
            slc.approx_xyz_centre_original(),
        )
    }

    /// Solve Doppler, range and ellipsoid equations for the ground position
    ///
    /// Newton iteration on the 3x3 system, starting from `initial_position`.
    /// The satellite state is fixed at `azimuth_time`.
    pub fn azimuth_range_time_height_to_xyz(
        &self,
        azimuth_time: f64,
        range_time: f64,
        height: f64,
        initial_position: Point,
    ) -> SarResult<Point> {
        let polynomial = self.polynomial()?;
        self.warn_if_extrapolated(azimuth_time, "lph2xyz");

        let satellite_position = polynomial.position(azimuth_time);
        let satellite_velocity = polynomial.velocity(azimuth_time);

        let a_h2 = (self.ellipsoid.semi_major() + height).powi(2);
        let b_h2 = (self.ellipsoid.semi_minor() + height).powi(2);

        let mut position = initial_position;
        let mut update = Vector3::zeros();

        for iteration in 1..=self.config.max_iterations {
            let dsat_p = position - satellite_position;

            let equations = Vector3::new(
                -Self::doppler_equation(&satellite_velocity, &dsat_p),
                -Self::range_equation(&dsat_p, range_time),
                -Self::ellipsoid_equation(&position, &self.ellipsoid, height),
            );

            let partials = Matrix3::new(
                satellite_velocity.x, satellite_velocity.y, satellite_velocity.z,
                2.0 * dsat_p.x, 2.0 * dsat_p.y, 2.0 * dsat_p.z,
                2.0 * position.x / a_h2, 2.0 * position.y / a_h2, 2.0 * position.z / b_h2,
            );

            update = partials.lu().solve(&equations).ok_or_else(|| {
                SarError::Convergence(format!(
                    "lph2xyz: singular system at iteration {} (azimuth time {:.6} s)",
                    iteration, azimuth_time
                ))
            })?;

            if !update.iter().all(|d| d.is_finite()) {
                return Err(SarError::Convergence(format!(
                    "lph2xyz: non-finite update at iteration {}, estimation is diverging",
                    iteration
                )));
            }

            position = position + Point::from(update);

            if update.iter().all(|d| d.abs() < self.config.position_tolerance) {
                log::debug!("lph2xyz converged in {} iterations: {}", iteration, position);
                return Ok(position);
            }
        }

        log::warn!(
            "lph2xyz: maximum iterations ({}) reached, criterion {} m, dx,dy,dz = [{:.3e}, {:.3e}, {:.3e}]",
            self.config.max_iterations,
            self.config.position_tolerance,
            update.x,
            update.y,
            update.z
        );
        Err(SarError::Convergence(format!(
            "lph2xyz: MAXITER ({}) limit reached, estimation is diverging",
            self.config.max_iterations
        )))
    }

    /// Ground position of image coordinates on the ellipsoid (height 0)
    pub fn line_col_pixel_to_xyz(&self, line: f64, pixel: f64, slc: &SlcImage) -> SarResult<Point> {
        self.line_col_pixel_height_to_xyz(line, pixel, 0.0, slc)
    }

    /// Zero-Doppler azimuth time and range time of a ground point
    ///
    /// Starts from the azimuth time of the scene's centre line.
    pub fn xyz_to_azimuth_range_time(
        &self,
        point: &Point,
        slc: &SlcImage,
    ) -> SarResult<AzimuthRangeTime> {
        let initial = slc.line_to_azimuth_time(slc.approx_radar_centre_original().line);
        self.xyz_to_azimuth_range_time_from(point, initial)
    }

    /// As [`Orbit::xyz_to_azimuth_range_time`] with an explicit initial azimuth time
    pub fn xyz_to_azimuth_range_time_from(
        &self,
        point: &Point,
        initial_azimuth_time: f64,
    ) -> SarResult<AzimuthRangeTime> {
        let polynomial = self.polynomial()?;

        let mut azimuth_time = initial_azimuth_time;
        let mut converged = false;
        let mut step = 0.0;

        for iteration in 1..=self.config.max_iterations {
            let satellite_position = polynomial.position(azimuth_time);
            let satellite_velocity = polynomial.velocity(azimuth_time);
            let satellite_acceleration = polynomial.acceleration(azimuth_time);
            let delta = *point - satellite_position;

            step = -Self::doppler_equation(&satellite_velocity, &delta)
                / Self::doppler_equation_rate(&delta, &satellite_velocity, &satellite_acceleration);

            if !step.is_finite() {
                return Err(SarError::Convergence(format!(
                    "xyz2t: non-finite time update at iteration {}, Doppler equation is degenerate",
                    iteration
                )));
            }

            azimuth_time += step;

            if step.abs() < self.config.time_tolerance {
                log::debug!("xyz2t converged in {} iterations: t_azi = {:.9} s", iteration, azimuth_time);
                converged = true;
                break;
            }
        }

        if !converged {
            log::warn!(
                "xyz2t: maximum iterations ({}) reached, criterion {} s, dta = {:.3e} s",
                self.config.max_iterations,
                self.config.time_tolerance,
                step
            );
            return Err(SarError::Convergence(format!(
                "xyz2t: MAXITER ({}) limit reached, estimation is diverging",
                self.config.max_iterations
            )));
        }

        self.warn_if_extrapolated(azimuth_time, "xyz2t");

        let satellite_position = polynomial.position(azimuth_time);
        let range_time = point.distance_to(&satellite_position) / SPEED_OF_LIGHT;

        Ok(AzimuthRangeTime { azimuth_time, range_time })
    }

    /// Image coordinates of a ground point
    pub fn xyz_to_line_col_pixel(&self, point: &Point, slc: &SlcImage) -> SarResult<RadarCoordinate> {
        let times = self.xyz_to_azimuth_range_time(point, slc)?;
        Ok(RadarCoordinate {
            line: slc.azimuth_time_to_line(times.azimuth_time),
            pixel: slc.range_time_to_pixel(times.range_time),
        })
    }

    pub fn ground_point_to_image_line(&self, point: &Point, slc: &SlcImage) -> SarResult<f64> {
        Ok(self.xyz_to_line_col_pixel(point, slc)?.line)
    }

    pub fn ground_point_to_image_pixel(&self, point: &Point, slc: &SlcImage) -> SarResult<f64> {
        Ok(self.xyz_to_line_col_pixel(point, slc)?.pixel)
    }

    /// Satellite position at the zero-Doppler time of a ground point
    pub fn xyz_to_orbit_position(&self, point: &Point, slc: &SlcImage) -> SarResult<Point> {
        let times = self.xyz_to_azimuth_range_time(point, slc)?;
        self.position(times.azimuth_time)
    }

    /// Satellite position seeing image coordinates `(line, pixel)` at zero Doppler
    pub fn image_to_orbit_position(&self, line: f64, pixel: f64, slc: &SlcImage) -> SarResult<Point> {
        let ground = self.line_col_pixel_to_xyz(line, pixel, slc)?;
        self.xyz_to_orbit_position(&ground, slc)
    }

    /// Image coordinates of a geodetic position
    pub fn ellipsoid_to_image_line_col(
        &self,
        position: &GeodeticPosition,
        slc: &SlcImage,
    ) -> SarResult<RadarCoordinate> {
        let xyz = self.ellipsoid.geodetic_to_cartesian(position)?;
        self.xyz_to_line_col_pixel(&xyz, slc)
    }

    /// Geodetic position of image coordinates on the ellipsoid
    pub fn image_line_col_to_ellipsoid(
        &self,
        line: f64,
        pixel: f64,
        slc: &SlcImage,
    ) -> SarResult<GeodeticPosition> {
        self.image_line_col_to_ellipsoid_with_height(line, pixel, 0.0, slc)
    }

    /// Geodetic position of image coordinates at `height` above the ellipsoid
    pub fn image_line_col_to_ellipsoid_with_height(
        &self,
        line: f64,
        pixel: f64,
        height: f64,
        slc: &SlcImage,
    ) -> SarResult<GeodeticPosition> {
        let xyz = self.line_col_pixel_height_to_xyz(line, pixel, height, slc)?;
        Ok(self.ellipsoid.cartesian_to_ellipsoid(&xyz))
    }

    /// Geocentric radius of the ground point at `(line, pixel)`
    pub fn earth_radius_at(&self, line: f64, pixel: f64, slc: &SlcImage) -> SarResult<f64> {
        Ok(self.line_col_pixel_to_xyz(line, pixel, slc)?.norm())
    }

    /// Geocentric radius of the satellite when acquiring `line`
    pub fn orbit_radius_at(&self, line: f64, slc: &SlcImage) -> SarResult<f64> {
        Ok(self.position(slc.line_to_azimuth_time(line))?.norm())
    }

    /// Along-track distance between successive (multilooked) lines at the orbit
    pub fn azimuth_pixel_spacing(&self, line: f64, slc: &SlcImage) -> SarResult<f64> {
        let here = self.position(slc.line_to_azimuth_time(line))?;
        let next = self.position(slc.line_to_azimuth_time(line + 1.0))?;
        Ok((slc.multilook_azimuth() as f64 * here.distance_to(&next)).abs())
    }

    /// Azimuth resolution from the PRF / bandwidth ratio and single-look spacing
    pub fn azimuth_resolution(&self, line: f64, slc: &SlcImage) -> SarResult<f64> {
        if slc.azimuth_bandwidth() == 0.0 {
            return Err(SarError::Domain("Azimuth bandwidth must be non-zero".to_string()));
        }
        let spacing = self.azimuth_pixel_spacing(line, slc)? / slc.multilook_azimuth() as f64;
        Ok((slc.prf() / slc.azimuth_bandwidth()) * spacing)
    }

    /// Geocode every pixel of `window` at a constant height
    ///
    /// Rows are solved independently, in parallel with the `parallel` feature.
    pub fn geocode_window(
        &self,
        window: &Window,
        height: f64,
        slc: &SlcImage,
    ) -> SarResult<Array2<GeodeticPosition>> {
        self.polynomial()?;
        let lines = window.lines().max(0) as usize;
        let pixels = window.pixels().max(0) as usize;

        log::info!("Geocoding window {} ({}x{} pixels) at height {:.1} m", window, lines, pixels, height);

        let geocode_row = |row: usize| -> SarResult<Vec<GeodeticPosition>> {
            let line = (window.line_lo + row as i64) as f64;
            (0..pixels)
                .map(|col| {
                    let pixel = (window.pix_lo + col as i64) as f64;
                    self.image_line_col_to_ellipsoid_with_height(line, pixel, height, slc)
                })
                .collect()
        };

        #[cfg(feature = "parallel")]
        let rows: Vec<Vec<GeodeticPosition>> =
            (0..lines).into_par_iter().map(geocode_row).collect::<SarResult<_>>()?;
        #[cfg(not(feature = "parallel"))]
        let rows: Vec<Vec<GeodeticPosition>> =
            (0..lines).map(geocode_row).collect::<SarResult<_>>()?;

        let flat: Vec<GeodeticPosition> = rows.into_iter().flatten().collect();
        Array2::from_shape_vec((lines, pixels), flat)
            .map_err(|e| SarError::Domain(format!("Failed to shape geocoded grid: {}", e)))
    }

    /// Sample position, velocity and acceleration over the state vector span
    pub fn dump_orbit(&self, dt: f64) -> SarResult<Vec<OrbitSample>> {
        let polynomial = self.polynomial()?;
        if !(dt > 0.0) {
            return Err(SarError::Domain(format!("Orbit sampling interval must be positive, got {}", dt)));
        }
        let (start, end) = self
            .time_span()
            .ok_or_else(|| SarError::NotInitialized("no orbit data available".to_string()))?;

        log::info!(
            "dump_orbit: MAXITER {}; CRITERPOS {} m; CRITERTIM {} s",
            self.config.max_iterations,
            self.config.position_tolerance,
            self.config.time_tolerance
        );

        let steps = ((end - start) / dt).floor();
        if !steps.is_finite() || steps >= MAX_DUMP_SAMPLES as f64 {
            return Err(SarError::Domain(format!(
                "Sampling interval {} s gives more than {} samples over ({}, {})",
                dt, MAX_DUMP_SAMPLES, start, end
            )));
        }

        let count = steps as usize + 1;
        Ok((0..count)
            .map(|i| {
                let time = start + i as f64 * dt;
                OrbitSample {
                    time,
                    position: polynomial.position(time),
                    velocity: polynomial.velocity(time),
                    acceleration: polynomial.acceleration(time),
                }
            })
            .collect())
    }

    /// Log the state vectors and, when fitted, the polynomial coefficients
    pub fn log_summary(&self) {
        log::info!("Time of orbit ephemerides: {:?}", self.time);
        log::info!("Orbit ephemerides x: {:?}", self.data_x);
        log::info!("Orbit ephemerides y: {:?}", self.data_y);
        log::info!("Orbit ephemerides z: {:?}", self.data_z);

        if let Some(polynomial) = &self.polynomial {
            log::info!("Estimated coefficients x(t): {:?}", polynomial.coeff_x);
            log::info!("Estimated coefficients y(t): {:?}", polynomial.coeff_y);
            log::info!("Estimated coefficients z(t): {:?}", polynomial.coeff_z);
        }
    }
}
