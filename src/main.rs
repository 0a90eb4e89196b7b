mod commands;

use std::path::PathBuf;

use clap::Parser;
use metoc::Constants;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{filter, fmt};

/// Metocean derivatives: wave height, period and steepness, wavelength by depth, speed units
/// and u/v to magnitude/direction conversions.
#[derive(clap::Parser)]
#[clap(version = env!("CARGO_PKG_VERSION"))]
struct Opts {
    /// A level of verbosity, and can be used multiple times
    #[clap(short, long, parse(from_occurrences), global = true)]
    verbose: i32,
    /// Print results as JSON
    #[clap(long, global = true)]
    json: bool,
    /// JSON file overriding gravity and wavelength solver settings
    #[clap(long, env = "METOC_CONSTANTS", global = true)]
    constants: Option<PathBuf>,
    #[clap(subcommand)]
    command: Command,
}

#[derive(clap::Parser)]
enum Command {
    Waves(commands::waves::Opts),
    Wavelength(commands::waves::WavelengthOpts),
    Speed(commands::speed::Opts),
    Uv(commands::vector::UvOpts),
    Polar(commands::vector::PolarOpts),
}

fn main() {
    // a missing .env file is fine
    dotenv::dotenv().ok();

    let opts: Opts = Opts::parse();
    let max_level = match opts.verbose {
        0 => tracing::Level::INFO,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::registry()
        .with(filter::filter_fn(move |m| {
            m.target().starts_with("metoc") && m.level() <= &max_level
        }))
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(err) = run(opts) {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

fn run(opts: Opts) -> Result<(), commands::Error> {
    let constants = match opts.constants.as_deref() {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading constants");
            Constants::from_path(path)?
        }
        None => Constants::STANDARD,
    };
    let out = commands::Output { json: opts.json };

    match opts.command {
        Command::Waves(opts) => commands::waves::execute(opts, &constants, out),
        Command::Wavelength(opts) => commands::waves::execute_wavelength(opts, &constants, out),
        Command::Speed(opts) => commands::speed::execute(opts, out),
        Command::Uv(opts) => commands::vector::execute_uv(opts, out),
        Command::Polar(opts) => commands::vector::execute_polar(opts, out),
    }
}
