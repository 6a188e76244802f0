//! Error types for calendar2png.
//!
//! Startup failures ([`ConfigError`], [`ResourceError`]) abort a run before
//! anything is drawn. [`RenderError`] is scoped to a single month and ends up
//! in the batch report next to that month's title.

use std::path::PathBuf;

use thiserror::Error;

/// Problems with the settings document or the values it holds.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("cannot read config {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("cannot parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    #[error("output.year must be set to a positive year")]
    MissingYear,

    #[error("output.month must be 0 (all months) or 1..=12, got {0}")]
    InvalidMonth(u32),

    #[error("{year}-{month:02} is not a valid calendar month")]
    InvalidDate { year: i32, month: u32 },

    #[error("font size must be finite and positive, got {0}")]
    InvalidFontSize(f32),

    #[error("image size must be non-zero, got {width}x{height}")]
    InvalidCanvas { width: u32, height: u32 },

    #[error("x_pos needs exactly 7 entries (one per weekday), got {0}")]
    XOffsets(usize),

    #[error("y_pos needs between 1 and 6 entries (one per row), got {0}")]
    YOffsets(usize),
}

/// Problems loading the font file.
#[derive(Error, Debug)]
pub enum ResourceError {
    #[error("cannot read font {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid font data in {path}")]
    InvalidFont { path: PathBuf },

    #[error("font {path} has no units-per-em metric")]
    Unscalable { path: PathBuf },
}

/// Failure while painting or writing a single month.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("font has no glyph for {0:?}")]
    MissingGlyph(char),

    #[error("cell {index} falls in row {row} but y_pos only has {rows} entries")]
    RowOutOfRange {
        index: usize,
        row: usize,
        rows: usize,
    },

    #[error("cannot create output directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("cannot write {path}: {source}")]
    Encode {
        path: PathBuf,
        source: image::ImageError,
    },
}

/// Errors that stop a run before any month is rendered.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Resource(#[from] ResourceError),

    #[error("cannot start render workers: {0}")]
    Pool(#[from] rayon::ThreadPoolBuildError),
}
