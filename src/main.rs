//! `calendar2png` - renders monthly calendar grids to PNG images.
//!
//! Reads a YAML settings document and a font, then writes one
//! `<year>-<MM>.png` per selected month into the output directory.

mod logging;

use std::path::PathBuf;
use std::process;

use calendar2png::{run, RunOptions};
use clap::Parser;

/// Command-line arguments for `calendar2png`.
#[derive(Parser, Debug)]
#[command(
    name = "calendar2png",
    version,
    about = "Render monthly calendar grids to PNG",
    long_about = "Draws the day numbers of one month, or every month of a year, at fixed grid positions using a TrueType/OpenType font and writes one PNG per month."
)]
struct Cli {
    /// Settings document (YAML)
    #[arg(short, long, value_name = "FILE", default_value = "config.yaml")]
    config: PathBuf,

    /// Directory for the generated images
    #[arg(short, long, value_name = "DIR", default_value = "output")]
    out: PathBuf,

    /// Override output.year from the settings document
    #[arg(long, value_name = "YEAR")]
    year: Option<i32>,

    /// Override output.month (0 renders the whole year)
    #[arg(long, value_name = "MONTH", value_parser = clap::value_parser!(u32).range(0..=12))]
    month: Option<u32>,

    /// Increase verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Write logs to file instead of stderr
    #[arg(long, value_name = "FILE")]
    debug_log: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = logging::init(cli.verbose, cli.debug_log.as_deref()) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }

    let options = RunOptions {
        config: cli.config,
        output_dir: cli.out,
        year: cli.year,
        month: cli.month,
    };

    match run(&options) {
        Ok(report) => {
            for (title, e) in report.failures() {
                eprintln!("Error: [{title}] {e}");
            }
            if !report.is_success() {
                process::exit(1);
            }
        }
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    }
}
