//! sargeom: satellite orbit interpolation and radar geocoding
//!
//! Fits polynomials to discrete orbit state vectors and converts between
//! radar image coordinates (line/pixel), satellite timing and positions on
//! a reference ellipsoid, using Newton iteration on the Range-Doppler
//! equations. Metadata parsing is left to the caller: state vectors and
//! image timing come in as plain records.

pub mod types;
pub mod constants;
pub mod core;

// Re-export main types and functions for easier access
pub use types::{
    SarError, SarResult, StateVector, OrbitData, GeodeticPosition, RadarCoordinate,
    AzimuthRangeTime, OrbitSample
};

pub use crate::core::{
    Point, Window, EllipsoidModel, SlcImage, SlcImageParams, DopplerCentroid, Orbit, OrbitConfig
};
