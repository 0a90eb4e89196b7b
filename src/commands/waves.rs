use metoc::Constants;
use serde::Serialize;

use super::{Error, Output};

/// Derive the missing one of wave height, period and steepness
#[derive(clap::Parser)]
pub struct Opts {
    /// Wave height in meter (individual or significant)
    #[clap(long)]
    height: Option<f64>,
    /// Wave period in seconds (individual or zero-crossing)
    #[clap(long)]
    period: Option<f64>,
    #[clap(long)]
    steepness: Option<f64>,
}

/// Deep water and depth limited wavelength
#[derive(clap::Parser)]
pub struct WavelengthOpts {
    /// Wave period in seconds
    #[clap(long)]
    period: f64,
    /// Water depth in meter
    #[clap(long)]
    depth: f64,
}

#[derive(Debug, PartialEq, Serialize)]
struct SeaState {
    height: f64,
    period: f64,
    steepness: f64,
}

pub fn execute(opts: Opts, constants: &Constants, out: Output) -> Result<(), Error> {
    let state = sea_state(&opts, constants)?;

    out.print(
        &state,
        &[
            format!("Height    = {:.2} m", state.height),
            format!("Period    = {:.1} s", state.period),
            format!("Steepness = {:.1}", state.steepness),
        ],
    )
}

fn sea_state(opts: &Opts, constants: &Constants) -> Result<SeaState, Error> {
    let state = match (opts.height, opts.period, opts.steepness) {
        (Some(height), Some(period), None) => SeaState {
            height,
            period,
            steepness: constants.steepness_from_height_period(height, period)?,
        },
        (Some(height), None, Some(steepness)) => SeaState {
            height,
            period: constants.period_from_height_steepness(height, steepness)?,
            steepness,
        },
        (None, Some(period), Some(steepness)) => SeaState {
            height: constants.height_from_period_steepness(period, steepness)?,
            period,
            steepness,
        },
        _ => {
            return Err(Error::Args(
                "exactly two of --height, --period and --steepness are required",
            ))
        }
    };

    Ok(state)
}

pub fn execute_wavelength(
    opts: WavelengthOpts,
    constants: &Constants,
    out: Output,
) -> Result<(), Error> {
    let wavelength = constants.wavelength_from_period_depth(opts.period, opts.depth)?;

    out.print(
        &wavelength,
        &[
            format!("L0 (deep water) = {:.2} m", wavelength.deep_water),
            format!(
                "L ({:.1} m depth) = {:.2} m",
                opts.depth, wavelength.depth_limited
            ),
        ],
    )
}
