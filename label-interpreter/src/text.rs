use crate::geometry::{Point, to_raster_space};

/// Base pixel sizes for font ids 1 through 8.
const FONT_SIZES: [u32; 8] = [18, 22, 28, 36, 46, 58, 72, 86];
const DEFAULT_FONT_SIZE: u32 = 22;
/// Font ids at or above this are drawn with the heavy face.
const BOLD_FONT_ID: u32 = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontFace {
    Regular,
    Bold,
    Mono,
}

/// Which point of the text box `origin` refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAnchor {
    /// Left end of the baseline.
    Baseline,
    /// Top-left corner of the line box.
    Top,
}

/// A single line of text, positioned in raster dots.
#[derive(Debug, Clone, PartialEq)]
pub struct TextRun {
    pub origin: Point,
    pub anchor: TextAnchor,
    pub face: FontFace,
    /// Glyph height in dots.
    pub size: f32,
    /// Horizontal stretch applied on top of `size`.
    pub x_scale: f32,
    pub content: String,
}

pub fn base_font_size(font_id: u32) -> u32 {
    font_id
        .checked_sub(1)
        .and_then(|index| FONT_SIZES.get(index as usize))
        .copied()
        .unwrap_or(DEFAULT_FONT_SIZE)
}

/// Lays out a text command. Returns `None` for empty values.
pub(crate) fn text_run(
    x: i32,
    y: i32,
    font_id: u32,
    x_mul: u32,
    y_mul: u32,
    value: &str,
) -> Option<TextRun> {
    if value.is_empty() {
        return None;
    }
    let x_mul = x_mul.max(1);
    let y_mul = y_mul.max(1);
    let face = match font_id >= BOLD_FONT_ID {
        true => FontFace::Bold,
        false => FontFace::Regular,
    };

    Some(TextRun {
        origin: to_raster_space(x, y),
        anchor: TextAnchor::Baseline,
        face,
        size: base_font_size(font_id).saturating_mul(y_mul) as f32,
        x_scale: x_mul as f32 / y_mul as f32,
        content: value.to_string(),
    })
}
