use std::fmt::Debug;

use fontdue::Font;
use label_interpreter::{TextAnchor, TextRun};
use log::warn;
use tiny_skia::{FilterQuality, IntSize, Pixmap, PixmapPaint, Transform};

use crate::{Drawable, RenderError};

/// Used when a face has no horizontal line metrics.
const FALLBACK_ASCENT: f32 = 0.8;
/// Glyphs taller than this many surfaces are not rasterised.
const MAX_SIZE_TO_SURFACE: f32 = 2.;

#[derive(Clone, PartialEq)]
struct Glyph {
    #[cfg(debug_assertions)]
    ch: char,
    x: f32,
    width: usize,
    height: usize,
    advance_width: f32,
    xmin: i32,
    ymin: i32,
    bitmap: Vec<u8>,
}

impl Debug for Glyph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug = f.debug_struct("Glyph");
        #[cfg(debug_assertions)]
        debug.field("char", &self.ch);
        debug
            .field("x", &self.x)
            .field("width", &self.width)
            .field("height", &self.height)
            .field("advance_width", &self.advance_width)
            .field("xmin", &self.xmin)
            .field("ymin", &self.ymin)
            .field("bitmap", &"...")
            .finish()
    }
}

impl Glyph {
    fn new(font: &Font, ch: char, px: f32, x: f32) -> Self {
        let (metrics, bitmap) = font.rasterize(ch, px);
        Self {
            #[cfg(debug_assertions)]
            ch,
            x,
            width: metrics.width,
            height: metrics.height,
            advance_width: metrics.advance_width,
            xmin: metrics.xmin,
            ymin: metrics.ymin,
            bitmap,
        }
    }

    /// transform coverage bitmap to premultiplied black rgba
    fn to_rgba(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(self.bitmap.len() * 4);
        for &alpha in &self.bitmap {
            buf.extend_from_slice(&[0, 0, 0, alpha]);
        }
        buf
    }

    fn to_pixmap(&self) -> Option<Pixmap> {
        let size = IntSize::from_wh(self.width as u32, self.height as u32)?;
        Pixmap::from_vec(self.to_rgba(), size)
    }

    /// Composite onto `target` for a run starting at device x `left` whose
    /// baseline sits at device y `baseline`, stretched by `x_scale`.
    fn draw_on(&self, target: &mut Pixmap, left: f32, baseline: f32, x_scale: f32) {
        let Some(glyph) = self.to_pixmap() else {
            // whitespace has no coverage
            return;
        };
        let x = left + (self.x + self.xmin as f32) * x_scale;
        let y = baseline - self.height as f32 - self.ymin as f32;
        let paint = PixmapPaint {
            quality: FilterQuality::Bilinear,
            ..PixmapPaint::default()
        };
        target.draw_pixmap(
            0,
            0,
            glyph.as_ref(),
            &paint,
            Transform::from_row(x_scale, 0., 0., 1., x, y.round()),
            None,
        );
    }
}

/// A text run bound to the face it is drawn with.
pub(crate) struct Text<'a> {
    run: &'a TextRun,
    font: &'a Font,
}

impl<'a> Text<'a> {
    pub(crate) fn new(run: &'a TextRun, font: &'a Font) -> Self {
        Self { run, font }
    }

    fn ascent(&self, px: f32) -> f32 {
        self.font
            .horizontal_line_metrics(px)
            .map_or(px * FALLBACK_ASCENT, |m| m.ascent)
    }

    /// Lays out glyphs along the pen. Only glyphs that end at or after
    /// `min_pen` are rasterised, and layout stops at the first one that
    /// starts past `max_pen`.
    fn layout(&self, px: f32, min_pen: f32, max_pen: f32) -> Vec<Glyph> {
        let mut pen = 0.;
        let mut glyphs = Vec::new();
        for ch in self.run.content.chars() {
            if pen > max_pen {
                break;
            }
            let advance = self.font.metrics(ch, px).advance_width;
            if pen + advance >= min_pen {
                glyphs.push(Glyph::new(self.font, ch, px, pen));
            }
            pen += advance;
        }
        glyphs
    }

    /// Glyphs that can land on a `target_width` pixel wide surface when the
    /// run starts at device x `left`.
    fn visible_glyphs(&self, px: f32, left: f32, target_width: f32) -> Vec<Glyph> {
        let x_scale = self.run.x_scale.max(f32::EPSILON);
        self.layout(px, -left / x_scale, (target_width - left) / x_scale)
    }
}

impl Drawable for Text<'_> {
    /// `transform` is only read for its uniform scale; glyphs are rasterised
    /// at device size rather than resampled.
    fn draw(&self, target: &mut Pixmap, transform: Transform) -> Result<(), RenderError> {
        let scale = transform.sx;
        let px = self.run.size * scale;
        if self.run.content.is_empty() || px <= 0. {
            return Ok(());
        }
        if px > target.height() as f32 * MAX_SIZE_TO_SURFACE {
            warn!("skipping oversized text ({px} px): {}", self.run.content);
            return Ok(());
        }

        let left = self.run.origin.x as f32 * scale;
        let baseline = match self.run.anchor {
            TextAnchor::Baseline => self.run.origin.y as f32 * scale,
            TextAnchor::Top => self.run.origin.y as f32 * scale + self.ascent(px),
        };
        for glyph in self.visible_glyphs(px, left, target.width() as f32) {
            glyph.draw_on(target, left, baseline, self.run.x_scale);
        }
        Ok(())
    }
}
