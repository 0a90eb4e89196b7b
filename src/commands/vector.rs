use metoc::{magnitude_direction_to_uv, uv_to_magnitude_direction, Convention};
use serde::Serialize;

use super::{Error, Output};

/// Convert u/v components to magnitude and direction
#[derive(clap::Parser)]
pub struct UvOpts {
    /// Eastward component in m/s
    #[clap(long, allow_hyphen_values = true)]
    u: f64,
    /// Northward component in m/s
    #[clap(long, allow_hyphen_values = true)]
    v: f64,
    /// `M` (meteorological, from) or `V` (vector, towards)
    #[clap(short, long, default_value = "V")]
    convention: Convention,
}

/// Convert magnitude and direction to u/v components
#[derive(clap::Parser)]
pub struct PolarOpts {
    /// Magnitude in m/s
    #[clap(long, allow_hyphen_values = true)]
    magnitude: f64,
    /// Direction in degrees true
    #[clap(long, allow_hyphen_values = true)]
    direction: f64,
    /// `M` (meteorological, from) or `V` (vector, towards)
    #[clap(short, long, default_value = "V")]
    convention: Convention,
}

#[derive(Serialize)]
struct Components {
    u: f64,
    v: f64,
    magnitude: f64,
    direction: f64,
    convention: Convention,
}

pub fn execute_uv(opts: UvOpts, out: Output) -> Result<(), Error> {
    let (magnitude, direction) = uv_to_magnitude_direction(opts.u, opts.v, opts.convention)?;
    print(
        Components {
            u: opts.u,
            v: opts.v,
            magnitude,
            direction,
            convention: opts.convention,
        },
        out,
    )
}

pub fn execute_polar(opts: PolarOpts, out: Output) -> Result<(), Error> {
    let (u, v) = magnitude_direction_to_uv(opts.magnitude, opts.direction, opts.convention)?;
    print(
        Components {
            u,
            v,
            magnitude: opts.magnitude,
            direction: opts.direction,
            convention: opts.convention,
        },
        out,
    )
}

fn print(c: Components, out: Output) -> Result<(), Error> {
    out.print(
        &c,
        &[
            format!("U = {:.2} m/s", c.u),
            format!("V = {:.2} m/s", c.v),
            format!("Mag = {:.2} m/s", c.magnitude),
            format!("Dir = {:.1} degT ({})", c.direction, c.convention),
        ],
    )
}
