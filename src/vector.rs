use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ultraviolet::DVec2;

use crate::error::{Error, Result};

/// Which way a direction in degrees points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Convention {
    /// Direction the vector comes from (winds). Code `M`.
    Meteorological,
    /// Direction the vector points towards (currents). Code `V`.
    Vector,
}

impl Convention {
    pub fn code(self) -> &'static str {
        match self {
            Convention::Meteorological => "M",
            Convention::Vector => "V",
        }
    }
}

impl FromStr for Convention {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_uppercase().as_str() {
            "M" => Ok(Convention::Meteorological),
            "V" => Ok(Convention::Vector),
            _ => Err(Error::InvalidConvention(s.to_owned())),
        }
    }
}

impl TryFrom<&str> for Convention {
    type Error = Error;

    fn try_from(s: &str) -> Result<Self> {
        s.parse()
    }
}

impl fmt::Display for Convention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Convert u/v components into magnitude and direction in degrees `[0, 360)`.
///
/// `convention` is either a [`Convention`] or its code (`"M"` or `"V"`, any case).
pub fn uv_to_magnitude_direction<C>(u: f64, v: f64, convention: C) -> Result<(f64, f64)>
where
    C: TryInto<Convention>,
    Error: From<C::Error>,
{
    let convention = convention.try_into()?;
    let uv = DVec2::new(u, v);

    // atan2 is taken as (east, north) so that 0° is north and angles grow clockwise
    let towards = match convention {
        Convention::Meteorological => -uv,
        Convention::Vector => uv,
    };
    let direction = normalize_degrees(towards.x.atan2(towards.y).to_degrees());

    Ok((uv.mag(), direction))
}

/// Convert magnitude and direction in degrees into u/v components.
///
/// The same transform is applied for both conventions; the convention is only validated.
pub fn magnitude_direction_to_uv<C>(magnitude: f64, direction: f64, convention: C) -> Result<(f64, f64)>
where
    C: TryInto<Convention>,
    Error: From<C::Error>,
{
    let convention = convention.try_into()?;
    tracing::trace!(%convention, magnitude, direction, "polar to u/v");

    let (sin, cos) = direction.to_radians().sin_cos();
    let uv = DVec2::new(sin, cos) * magnitude.abs();

    Ok((uv.x, uv.y))
}

fn normalize_degrees(deg: f64) -> f64 {
    let deg = deg.rem_euclid(360.0);
    // rem_euclid rounds tiny negative angles up to exactly 360
    if deg >= 360.0 {
        0.0
    } else {
        deg
    }
}
