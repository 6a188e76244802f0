//! Grid layout: cell index to pixel anchor.

use crate::config::{Settings, COLUMNS};
use crate::error::RenderError;

/// Baseline-left insertion point of a label, in canvas pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Anchor {
    pub x: i32,
    pub y: i32,
}

/// Maps flat cell indices to anchors through per-column and per-row offsets.
#[derive(Debug, Clone)]
pub struct GridLayout {
    x_offsets: [i32; COLUMNS],
    y_offsets: Vec<i32>,
}

impl GridLayout {
    pub fn new(x_offsets: [i32; COLUMNS], y_offsets: Vec<i32>) -> Self {
        Self {
            x_offsets,
            y_offsets,
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.x_offsets, settings.y_offsets.clone())
    }

    /// `(column, row)` of a cell; `index == row * 7 + column`.
    pub fn cell_position(index: usize) -> (usize, usize) {
        (index % COLUMNS, index / COLUMNS)
    }

    pub fn rows(&self) -> usize {
        self.y_offsets.len()
    }

    pub fn resolve(&self, index: usize) -> Result<Anchor, RenderError> {
        let (column, row) = Self::cell_position(index);
        let y = *self
            .y_offsets
            .get(row)
            .ok_or(RenderError::RowOutOfRange {
                index,
                row,
                rows: self.y_offsets.len(),
            })?;
        Ok(Anchor {
            x: self.x_offsets[column],
            y,
        })
    }
}
