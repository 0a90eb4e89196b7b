pub mod constants;
pub mod error;
pub mod units;
pub mod vector;
pub mod waves;


pub use constants::Constants;
pub use error::{Error, Result};
pub use units::{knots_to_mps, mps_to_knots};
pub use vector::{magnitude_direction_to_uv, uv_to_magnitude_direction, Convention};
pub use waves::{
    height_from_period_steepness, period_from_height_steepness, steepness_from_height_period,
    wavelength_from_period_depth, Wavelength,
};
