//! Physical constants and solver criteria

/// Speed of light in vacuum (m/s)
pub const SPEED_OF_LIGHT: f64 = 299_792_458.0;

/// WGS84 semi-major axis (m)
pub const WGS84_A: f64 = 6_378_137.0;

/// WGS84 semi-minor axis (m)
pub const WGS84_B: f64 = 6_356_752.314245;

/// Iteration cap shared by the Newton solvers
pub const MAX_ITERATIONS: usize = 10;

/// Position convergence criterion for line/pixel -> xyz (m)
pub const CRITERION_POSITION: f64 = 1e-6;

/// Time convergence criterion for xyz -> line/pixel (s)
pub const CRITERION_TIME: f64 = 1e-10;

/// Scale applied to centred orbit times before polynomial fitting (s)
pub const ORBIT_TIME_SCALE: f64 = 10.0;

/// Largest residual at the state vectors tolerated without a warning (m)
pub const MAX_FIT_RESIDUAL: f64 = 0.02;
