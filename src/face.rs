//! Glyph rendering face shared by all month workers.

use std::path::Path;

use ab_glyph::{point, Font, FontArc, GlyphId, PxScale, ScaleFont};
use tracing::debug;

use crate::error::{RenderError, ResourceError};
use crate::layout::Anchor;

/// Read-only text capability used by the glyph renderer.
pub trait GlyphFace: Sync {
    /// Advance width of `text` in pixels.
    fn measure(&self, text: &str) -> f32;

    /// Lay `text` out on a single line starting at the baseline-left `anchor`
    /// and report the coverage (0.0..=1.0) of every touched pixel to `plot`.
    ///
    /// Coordinates passed to `plot` may fall outside any canvas.
    fn rasterize(
        &self,
        text: &str,
        anchor: Anchor,
        plot: &mut dyn FnMut(i32, i32, f32),
    ) -> Result<(), RenderError>;
}

/// TrueType/OpenType face at a fixed size.
#[derive(Clone)]
pub struct FontFace {
    font: FontArc,
    scale: PxScale,
}

impl FontFace {
    /// Load the font at `path` sized to `size` points at 72 dpi.
    pub fn load(path: &Path, size: f32) -> Result<Self, ResourceError> {
        let data = std::fs::read(path).map_err(|source| ResourceError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_bytes(data, size, path)
    }

    /// `origin` is only used in error messages.
    pub fn from_bytes(data: Vec<u8>, size: f32, origin: &Path) -> Result<Self, ResourceError> {
        let font = FontArc::try_from_vec(data).map_err(|_| ResourceError::InvalidFont {
            path: origin.to_path_buf(),
        })?;
        let units_per_em = font.units_per_em().ok_or_else(|| ResourceError::Unscalable {
            path: origin.to_path_buf(),
        })?;
        // An em of `size` pixels, like a point size at 72 dpi.
        let scale = PxScale::from(size * font.height_unscaled() / units_per_em);
        debug!(path = %origin.display(), size, px = scale.y, "loaded font");
        Ok(Self { font, scale })
    }

    fn glyph_ids(&self, text: &str) -> Result<Vec<GlyphId>, RenderError> {
        text.chars()
            .map(|c| match self.font.glyph_id(c) {
                GlyphId(0) => Err(RenderError::MissingGlyph(c)),
                id => Ok(id),
            })
            .collect()
    }
}

impl GlyphFace for FontFace {
    fn measure(&self, text: &str) -> f32 {
        let scaled = self.font.as_scaled(self.scale);
        let mut width = 0.0;
        let mut prev: Option<GlyphId> = None;
        for c in text.chars() {
            let id = self.font.glyph_id(c);
            if let Some(p) = prev {
                width += scaled.kern(p, id);
            }
            width += scaled.h_advance(id);
            prev = Some(id);
        }
        width
    }

    fn rasterize(
        &self,
        text: &str,
        anchor: Anchor,
        plot: &mut dyn FnMut(i32, i32, f32),
    ) -> Result<(), RenderError> {
        let ids = self.glyph_ids(text)?;
        let scaled = self.font.as_scaled(self.scale);
        let mut caret = anchor.x as f32;
        let mut prev: Option<GlyphId> = None;

        for id in ids {
            if let Some(p) = prev {
                caret += scaled.kern(p, id);
            }
            let glyph = id.with_scale_and_position(self.scale, point(caret, anchor.y as f32));
            caret += scaled.h_advance(id);
            prev = Some(id);

            if let Some(outlined) = self.font.outline_glyph(glyph) {
                let bounds = outlined.px_bounds();
                let (min_x, min_y) = (bounds.min.x as i32, bounds.min.y as i32);
                outlined.draw(|x, y, v| plot(min_x + x as i32, min_y + y as i32, v));
            }
        }
        Ok(())
    }
}
