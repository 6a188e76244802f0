//! Settings document loading and validation.
//!
//! The document is YAML:
//!
//! ```yaml
//! output:
//!   year: 2021
//!   month: 0        # 0 renders all twelve months
//! font: fonts/Roboto-Regular.ttf
//! size: 48
//! image:
//!   width: 1000
//!   height: 900
//! color:
//!   weekday:  [0x51, 0x51, 0x51]
//!   saturday: [0x62, 0x88, 0xe3]
//!   sunday:   [0xd9, 0x6b, 0x6b]
//! x_pos: [0, 143, 286, 429, 572, 715, 858]
//! y_pos: [90, 235, 382, 527, 672, 817]
//! ```

use std::fmt;
use std::path::{Path, PathBuf};

use image::Rgb;
use serde::Deserialize;

use crate::error::ConfigError;

/// Number of weekday columns in the grid.
pub const COLUMNS: usize = 7;
/// Maximum number of week rows a month can occupy.
pub const MAX_ROWS: usize = 6;

/// Raw settings document as written on disk.
#[derive(Debug, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub output: OutputSection,
    pub font: PathBuf,
    pub size: f32,
    pub image: ImageSection,
    #[serde(default)]
    pub color: ColorSection,
    #[serde(default = "default_x_pos", alias = "XPos")]
    pub x_pos: Vec<i32>,
    #[serde(default = "default_y_pos", alias = "YPos")]
    pub y_pos: Vec<i32>,
}

#[derive(Debug, Default, Deserialize)]
pub struct OutputSection {
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default)]
    pub month: u32,
}

#[derive(Debug, Deserialize)]
pub struct ImageSection {
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Deserialize)]
pub struct ColorSection {
    #[serde(default = "default_weekday_color")]
    pub weekday: [u8; 3],
    #[serde(default = "default_saturday_color")]
    pub saturday: [u8; 3],
    #[serde(default = "default_sunday_color")]
    pub sunday: [u8; 3],
}

impl Default for ColorSection {
    fn default() -> Self {
        Self {
            weekday: default_weekday_color(),
            saturday: default_saturday_color(),
            sunday: default_sunday_color(),
        }
    }
}

fn default_x_pos() -> Vec<i32> {
    vec![0, 143, 286, 429, 572, 715, 858]
}
fn default_y_pos() -> Vec<i32> {
    vec![90, 235, 382, 527, 672, 817]
}
fn default_weekday_color() -> [u8; 3] {
    [0x51, 0x51, 0x51]
}
fn default_saturday_color() -> [u8; 3] {
    [0x62, 0x88, 0xe3]
}
fn default_sunday_color() -> [u8; 3] {
    [0xd9, 0x6b, 0x6b]
}

impl ConfigFile {
    /// Read and parse a settings document without validating it.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_yaml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Validated, read-only settings for a run.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub target_year: i32,
    /// 0 selects every month of `target_year`.
    pub target_month: u32,
    pub font_path: PathBuf,
    pub font_size: f32,
    pub canvas_width: u32,
    pub canvas_height: u32,
    pub weekday_color: Rgb<u8>,
    pub saturday_color: Rgb<u8>,
    pub sunday_color: Rgb<u8>,
    pub x_offsets: [i32; COLUMNS],
    pub y_offsets: Vec<i32>,
}

impl Settings {
    /// Load and validate the settings document at `path`.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        Self::try_from(ConfigFile::load(path)?)
    }
}

impl TryFrom<ConfigFile> for Settings {
    type Error = ConfigError;

    fn try_from(file: ConfigFile) -> Result<Self, Self::Error> {
        let target_year = match file.output.year {
            Some(year) if year > 0 => year,
            _ => return Err(ConfigError::MissingYear),
        };
        if file.output.month > 12 {
            return Err(ConfigError::InvalidMonth(file.output.month));
        }
        if !file.size.is_finite() || file.size <= 0.0 {
            return Err(ConfigError::InvalidFontSize(file.size));
        }
        if file.image.width == 0 || file.image.height == 0 {
            return Err(ConfigError::InvalidCanvas {
                width: file.image.width,
                height: file.image.height,
            });
        }
        let x_offsets: [i32; COLUMNS] = file
            .x_pos
            .as_slice()
            .try_into()
            .map_err(|_| ConfigError::XOffsets(file.x_pos.len()))?;
        if file.y_pos.is_empty() || file.y_pos.len() > MAX_ROWS {
            return Err(ConfigError::YOffsets(file.y_pos.len()));
        }

        Ok(Self {
            target_year,
            target_month: file.output.month,
            font_path: file.font,
            font_size: file.size,
            canvas_width: file.image.width,
            canvas_height: file.image.height,
            weekday_color: Rgb(file.color.weekday),
            saturday_color: Rgb(file.color.saturday),
            sunday_color: Rgb(file.color.sunday),
            x_offsets,
            y_offsets: file.y_pos,
        })
    }
}

fn write_color(f: &mut fmt::Formatter<'_>, name: &str, color: Rgb<u8>) -> fmt::Result {
    let [r, g, b] = color.0;
    writeln!(f, "       {name:<8} : 0x{r:02x} 0x{g:02x} 0x{b:02x}")
}

fn write_positions(f: &mut fmt::Formatter<'_>, name: &str, positions: &[i32]) -> fmt::Result {
    write!(f, "    {name:<5} : ")?;
    for (i, p) in positions.iter().enumerate() {
        write!(f, "[{i}:{p}],")?;
    }
    writeln!(f)
}

impl fmt::Display for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "output : {}-{}", self.target_year, self.target_month)?;
        writeln!(f, "font file : {}", self.font_path.display())?;
        writeln!(f, "font size : {}", self.font_size)?;
        writeln!(f, "    image : {}x{}", self.canvas_width, self.canvas_height)?;
        writeln!(f, "    color :")?;
        write_color(f, "weekday", self.weekday_color)?;
        write_color(f, "saturday", self.saturday_color)?;
        write_color(f, "sunday", self.sunday_color)?;
        write_positions(f, "Xpos", &self.x_offsets)?;
        write_positions(f, "Ypos", &self.y_offsets)
    }
}
