//! Month render job: paint one month and write it as a PNG.

use std::path::{Path, PathBuf};

use image::ImageFormat;
use tracing::{debug, info};

use crate::calendar::MonthPlan;
use crate::config::Settings;
use crate::error::RenderError;
use crate::face::GlyphFace;
use crate::layout::GridLayout;
use crate::render::{self, Canvas, Palette};

/// Paint every non-blank cell of `plan` onto a fresh transparent canvas.
///
/// Rows come from the cell index alone, so leading blanks shift day 1 into
/// its column without any separate row counter.
pub fn paint_month(
    face: &dyn GlyphFace,
    layout: &GridLayout,
    palette: &Palette,
    plan: &MonthPlan,
    width: u32,
    height: u32,
) -> Result<Canvas, RenderError> {
    let mut canvas = Canvas::new(width, height);
    for (index, cell) in plan.cells.iter().enumerate() {
        if cell.is_blank() {
            continue;
        }
        let anchor = layout.resolve(index)?;
        render::paint(&mut canvas, face, palette, cell, anchor)?;
    }
    Ok(canvas)
}

/// Encode `canvas` as `<output_dir>/<title>.png`, creating the directory if needed.
pub fn write_png(canvas: &Canvas, output_dir: &Path, title: &str) -> Result<PathBuf, RenderError> {
    std::fs::create_dir_all(output_dir).map_err(|source| RenderError::CreateDir {
        path: output_dir.to_path_buf(),
        source,
    })?;
    let path = output_dir.join(format!("{title}.png"));
    canvas
        .save_with_format(&path, ImageFormat::Png)
        .map_err(|source| RenderError::Encode {
            path: path.clone(),
            source,
        })?;
    Ok(path)
}

/// Render `plan` with `settings` and write it under `output_dir`.
pub fn render_month(
    face: &dyn GlyphFace,
    settings: &Settings,
    plan: &MonthPlan,
    output_dir: &Path,
) -> Result<PathBuf, RenderError> {
    info!("generate [{}] start", plan.title);
    let layout = GridLayout::from_settings(settings);
    let palette = Palette::from_settings(settings);
    let canvas = paint_month(
        face,
        &layout,
        &palette,
        plan,
        settings.canvas_width,
        settings.canvas_height,
    )?;
    let path = write_png(&canvas, output_dir, &plan.title)?;
    debug!(path = %path.display(), "wrote [{}]", plan.title);
    Ok(path)
}
