//! Glyph renderer: paints one day label onto a month canvas.

use chrono::Weekday;
use image::{Rgb, Rgba, RgbaImage};
use tracing::warn;

use crate::calendar::DayCell;
use crate::config::Settings;
use crate::error::RenderError;
use crate::face::GlyphFace;
use crate::layout::Anchor;

/// Per-month pixel buffer. Starts fully transparent.
pub type Canvas = RgbaImage;

/// Label colors by weekday class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub weekday: Rgb<u8>,
    pub saturday: Rgb<u8>,
    pub sunday: Rgb<u8>,
}

impl Palette {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            weekday: settings.weekday_color,
            saturday: settings.saturday_color,
            sunday: settings.sunday_color,
        }
    }

    pub fn color_for(&self, weekday: Weekday) -> Rgb<u8> {
        match weekday {
            Weekday::Sun => self.sunday,
            Weekday::Sat => self.saturday,
            _ => self.weekday,
        }
    }
}

/// Composite `color` at `coverage` opacity over `dst` (source-over, straight alpha).
pub fn blend_over(dst: &mut Rgba<u8>, color: Rgb<u8>, coverage: f32) {
    let src_a = coverage.clamp(0.0, 1.0);
    if src_a <= 0.0 {
        return;
    }
    let dst_a = f32::from(dst[3]) / 255.0;
    let out_a = src_a + dst_a * (1.0 - src_a);

    let mut out = [0u8; 4];
    for i in 0..3 {
        let c = (f32::from(color[i]) * src_a + f32::from(dst[i]) * dst_a * (1.0 - src_a)) / out_a;
        out[i] = c.round().clamp(0.0, 255.0) as u8;
    }
    out[3] = (out_a * 255.0).round() as u8;
    *dst = Rgba(out);
}

/// Draw `cell` at `anchor`. Blank cells leave the canvas untouched.
pub fn paint(
    canvas: &mut Canvas,
    face: &dyn GlyphFace,
    palette: &Palette,
    cell: &DayCell,
    anchor: Anchor,
) -> Result<(), RenderError> {
    if cell.is_blank() {
        return Ok(());
    }
    let color = palette.color_for(cell.weekday);
    let (width, height) = canvas.dimensions();

    let right = anchor.x as f32 + face.measure(&cell.label);
    if anchor.x < 0 || anchor.y < 0 || right > width as f32 || anchor.y as u32 > height {
        warn!(
            label = %cell.label,
            x = anchor.x,
            y = anchor.y,
            "label runs past the {width}x{height} canvas and will be clipped"
        );
    }

    face.rasterize(&cell.label, anchor, &mut |x, y, coverage| {
        if x < 0 || y < 0 {
            return;
        }
        let (x, y) = (x as u32, y as u32);
        if x < width && y < height {
            blend_over(canvas.get_pixel_mut(x, y), color, coverage);
        }
    })
}

#[cfg(test)]
pub mod tests {
    use super::*;

    /// Face that draws every digit as a solid `advance` x `ascent` box sitting
    /// on the baseline. Any other character has no glyph.
    pub struct BoxFace {
        pub advance: i32,
        pub ascent: i32,
    }

    impl Default for BoxFace {
        fn default() -> Self {
            Self {
                advance: 4,
                ascent: 6,
            }
        }
    }

    impl GlyphFace for BoxFace {
        fn measure(&self, text: &str) -> f32 {
            (text.chars().count() as i32 * self.advance) as f32
        }

        fn rasterize(
            &self,
            text: &str,
            anchor: Anchor,
            plot: &mut dyn FnMut(i32, i32, f32),
        ) -> Result<(), RenderError> {
            if let Some(c) = text.chars().find(|c| !c.is_ascii_digit()) {
                return Err(RenderError::MissingGlyph(c));
            }
            let glyphs = text.chars().count() as i32;
            for x in anchor.x..anchor.x + glyphs * self.advance {
                for y in anchor.y - self.ascent..anchor.y {
                    plot(x, y, 1.0);
                }
            }
            Ok(())
        }
    }

    fn palette() -> Palette {
        Palette {
            weekday: Rgb([10, 10, 10]),
            saturday: Rgb([0, 0, 200]),
            sunday: Rgb([200, 0, 0]),
        }
    }

    fn cell(label: &str, weekday: Weekday) -> DayCell {
        DayCell {
            label: label.to_string(),
            weekday,
        }
    }

    #[test]
    fn color_follows_weekday_class() {
        let p = palette();
        assert_eq!(p.color_for(Weekday::Sun), p.sunday);
        assert_eq!(p.color_for(Weekday::Sat), p.saturday);
        for day in [Weekday::Mon, Weekday::Tue, Weekday::Wed, Weekday::Thu, Weekday::Fri] {
            assert_eq!(p.color_for(day), p.weekday);
        }
    }

    #[test]
    fn blank_cell_touches_nothing() {
        let mut canvas = Canvas::new(20, 20);
        let blank = cell(".", Weekday::Sun);
        paint(&mut canvas, &BoxFace::default(), &palette(), &blank, Anchor { x: 2, y: 10 })
            .unwrap();
        assert!(canvas.pixels().all(|p| *p == Rgba([0, 0, 0, 0])));
    }

    #[test]
    fn label_is_drawn_above_baseline_in_its_color() {
        let mut canvas = Canvas::new(20, 20);
        let day = cell("12", Weekday::Sat);
        paint(&mut canvas, &BoxFace::default(), &palette(), &day, Anchor { x: 2, y: 10 })
            .unwrap();

        assert_eq!(*canvas.get_pixel(2, 4), Rgba([0, 0, 200, 255]));
        assert_eq!(*canvas.get_pixel(9, 9), Rgba([0, 0, 200, 255]));
        // Baseline row and the pixel past the advance stay clear.
        assert_eq!(canvas.get_pixel(2, 10)[3], 0);
        assert_eq!(canvas.get_pixel(10, 9)[3], 0);
        assert_eq!(canvas.get_pixel(2, 3)[3], 0);
    }

    #[test]
    fn glyphs_past_the_edge_are_clipped() {
        let mut canvas = Canvas::new(8, 8);
        let day = cell("31", Weekday::Sun);
        paint(&mut canvas, &BoxFace::default(), &palette(), &day, Anchor { x: -2, y: 3 })
            .unwrap();
        assert_eq!(*canvas.get_pixel(0, 0), Rgba([200, 0, 0, 255]));
        assert_eq!(*canvas.get_pixel(5, 2), Rgba([200, 0, 0, 255]));
        assert_eq!(canvas.get_pixel(6, 0)[3], 0);
    }

    #[test]
    fn missing_glyph_is_reported() {
        let mut canvas = Canvas::new(8, 8);
        let day = cell("1a", Weekday::Mon);
        let err = paint(&mut canvas, &BoxFace::default(), &palette(), &day, Anchor { x: 0, y: 7 })
            .unwrap_err();
        assert!(matches!(err, RenderError::MissingGlyph('a')));
    }

    #[test]
    fn blend_over_transparent_takes_source() {
        let mut px = Rgba([0, 0, 0, 0]);
        blend_over(&mut px, Rgb([100, 150, 200]), 1.0);
        assert_eq!(px, Rgba([100, 150, 200, 255]));

        let mut px = Rgba([0, 0, 0, 0]);
        blend_over(&mut px, Rgb([100, 150, 200]), 0.5);
        assert_eq!(px, Rgba([100, 150, 200, 128]));
    }

    #[test]
    fn blend_over_opaque_mixes_colors() {
        let mut px = Rgba([0, 0, 0, 255]);
        blend_over(&mut px, Rgb([200, 100, 0]), 0.5);
        assert_eq!(px, Rgba([100, 50, 0, 255]));
    }

    #[test]
    fn zero_coverage_is_a_no_op() {
        let mut px = Rgba([1, 2, 3, 4]);
        blend_over(&mut px, Rgb([255, 255, 255]), 0.0);
        assert_eq!(px, Rgba([1, 2, 3, 4]));
    }
}
