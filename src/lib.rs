//! `calendar2png` - renders monthly calendar grids to PNG images.
//!
//! Day numbers are drawn with a TrueType/OpenType font at fixed per-column
//! and per-row positions, colored by weekday, one image per month.

pub mod batch;
pub mod calendar;
pub mod config;
pub mod error;
pub mod face;
pub mod job;
pub mod layout;
pub mod render;
pub mod selector;

use std::path::PathBuf;

use tracing::{debug, info};

pub use batch::{BatchReport, MonthOutcome};
pub use calendar::{DayCell, MonthPlan};
pub use config::Settings;
pub use error::{ConfigError, Error, RenderError, ResourceError};
pub use face::{FontFace, GlyphFace};

/// Inputs of a full run.
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub config: PathBuf,
    pub output_dir: PathBuf,
    /// Replaces `output.year` from the settings document.
    pub year: Option<i32>,
    /// Replaces `output.month` from the settings document.
    pub month: Option<u32>,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            config: PathBuf::from("config.yaml"),
            output_dir: PathBuf::from("output"),
            year: None,
            month: None,
        }
    }
}

/// Load settings and font, then render every selected month.
///
/// Startup problems return `Err` before anything is drawn; per-month
/// failures are reported in the returned [`BatchReport`].
pub fn run(options: &RunOptions) -> Result<BatchReport, Error> {
    let mut file = config::ConfigFile::load(&options.config)?;
    if let Some(year) = options.year {
        file.output.year = Some(year);
    }
    if let Some(month) = options.month {
        file.output.month = month;
    }
    let settings = Settings::try_from(file)?;
    debug!("settings loaded from {}\n{settings}", options.config.display());

    let face = FontFace::load(&settings.font_path, settings.font_size)?;
    let plans = selector::select(&settings)?;
    info!(
        months = plans.len(),
        output = %options.output_dir.display(),
        "rendering {}",
        settings.target_year
    );

    batch::render_all(&face, &settings, plans, &options.output_dir)
}
