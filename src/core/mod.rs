//! Orbit modelling and geocoding core

pub mod point;
pub mod window;
pub mod ellipsoid;
pub mod polyfit;
pub mod slc_image;
pub mod orbit;

// Re-export main types
pub use point::Point;
pub use window::Window;
pub use ellipsoid::EllipsoidModel;
pub use slc_image::{SlcImage, SlcImageParams, DopplerCentroid};
pub use orbit::{Orbit, OrbitConfig};
