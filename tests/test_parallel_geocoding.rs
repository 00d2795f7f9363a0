use approx::assert_abs_diff_eq;
use sargeom::{DopplerCentroid, EllipsoidModel, Orbit, SarError, SlcImage, SlcImageParams, Window};
use std::thread;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn fitted_orbit() -> Orbit {
    let radius = 7_000_000.0_f64;
    let omega = 7_500.0 / radius;
    let svs: Vec<[f64; 4]> = (-2..=4)
        .map(|i| {
            let t = i as f64;
            [t, radius * (omega * t).cos(), 0.0, radius * (omega * t).sin()]
        })
        .collect();
    Orbit::from_state_vector_matrix(&svs, 4).unwrap()
}

fn image() -> SlcImage {
    let params = SlcImageParams {
        mission: "SYNTHETIC".to_string(),
        orbit_number: 7,
        radar_wavelength: 0.0555,
        prf: 1000.0,
        azimuth_bandwidth: 850.0,
        range_bandwidth: 16e6,
        azimuth_time_first_line: 0.0,
        range_sampling_rate: 40e6,
        range_time_first_pixel: 5e-3,
        doppler: DopplerCentroid::default(),
        multilook_azimuth: 1,
        multilook_range: 1,
        original_window: Window::new(1, 1000, 1, 5000),
        current_window: None,
        approx_geo_centre: (0.0, 11.0),
    };
    SlcImage::new(params, EllipsoidModel::wgs84()).unwrap()
}

#[test]
fn test_geocode_window_matches_single_pixel_calls() {
    init_logging();

    let orbit = fitted_orbit();
    let slc = image();
    let window = Window::new(100, 108, 2000, 2012);

    let grid = orbit.geocode_window(&window, 250.0, &slc).unwrap();
    assert_eq!(grid.dim(), (9, 13));

    for ((row, col), geo) in grid.indexed_iter() {
        let line = (window.line_lo + row as i64) as f64;
        let pixel = (window.pix_lo + col as i64) as f64;
        let single = orbit
            .image_line_col_to_ellipsoid_with_height(line, pixel, 250.0, &slc)
            .unwrap();
        assert_eq!(geo.latitude, single.latitude);
        assert_eq!(geo.longitude, single.longitude);
        assert_abs_diff_eq!(geo.height, 250.0, epsilon = 1e-4);
    }
}

#[test]
fn test_shared_orbit_across_threads() {
    init_logging();

    let orbit = fitted_orbit();
    let slc = image();
    let lines = [1.0, 250.0, 500.0, 750.0, 1000.0];

    let sequential: Vec<_> = lines
        .iter()
        .map(|&line| orbit.line_col_pixel_height_to_xyz(line, 3000.0, 0.0, &slc).unwrap())
        .collect();

    let threaded: Vec<_> = thread::scope(|scope| {
        let handles: Vec<_> = lines
            .iter()
            .map(|&line| {
                let orbit = &orbit;
                let slc = &slc;
                scope.spawn(move || orbit.line_col_pixel_height_to_xyz(line, 3000.0, 0.0, slc))
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap().unwrap()).collect()
    });

    assert_eq!(sequential, threaded);
}

#[test]
fn test_geocode_window_requires_fitted_orbit() {
    let orbit = Orbit::new();
    let result = orbit.geocode_window(&Window::new(1, 2, 1, 2), 0.0, &image());
    assert!(matches!(result, Err(SarError::NotInitialized(_))));
}
