use metoc::{knots_to_mps, mps_to_knots};
use serde::Serialize;

use super::{Error, Output};

/// Convert speeds between m/s and knots
#[derive(clap::Parser)]
pub struct Opts {
    #[clap(long, conflicts_with = "knots", required_unless_present = "knots")]
    mps: Option<f64>,
    #[clap(long)]
    knots: Option<f64>,
}

#[derive(Debug, PartialEq, Serialize)]
struct Speed {
    mps: f64,
    knots: f64,
}

pub fn execute(opts: Opts, out: Output) -> Result<(), Error> {
    let speed = convert(&opts)?;

    out.print(
        &speed,
        &[
            format!("{:.2} m/s", speed.mps),
            format!("{:.2} kts", speed.knots),
        ],
    )
}

fn convert(opts: &Opts) -> Result<Speed, Error> {
    let speed = match (opts.mps, opts.knots) {
        (Some(mps), None) => Speed {
            mps,
            knots: mps_to_knots(mps),
        },
        (None, Some(knots)) => Speed {
            mps: knots_to_mps(knots),
            knots,
        },
        _ => return Err(Error::Args("exactly one of --mps and --knots is required")),
    };

    Ok(speed)
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    fn parse(args: &[&str]) -> clap::Result<Opts> {
        Opts::try_parse_from(std::iter::once("speed").chain(args.iter().copied()))
    }

    #[test]
    fn converts_mps_to_knots() {
        let speed = convert(&parse(&["--mps", "40"]).unwrap()).unwrap();
        assert_eq!(speed.mps, 40.0);
        assert!((speed.knots - 77.7605).abs() < 1e-4);
    }

    #[test]
    fn converts_knots_to_mps() {
        let speed = convert(&parse(&["--knots", "10"]).unwrap()).unwrap();
        assert_eq!(speed.knots, 10.0);
        assert!((speed.mps - 5.144).abs() < 1e-12);
    }

    #[test]
    fn requires_exactly_one_unit() {
        assert!(parse(&[]).is_err());
        assert!(parse(&["--mps", "1", "--knots", "2"]).is_err());
        assert!(matches!(
            convert(&Opts {
                mps: None,
                knots: None
            }),
            Err(Error::Args(_))
        ));
    }
}
