use crate::{
    geometry::{LABEL_HEIGHT_DOTS, LABEL_WIDTH_DOTS, Point, Rect, to_raster_space},
    pattern::{BarPattern, fnv1a},
    text::{FontFace, TextAnchor, TextRun},
};

const MIN_WIDTH: i32 = 220;
const MIN_HEIGHT: u32 = 40;
const DEFAULT_HEIGHT: u32 = 200;
const DEFAULT_MODULE: u32 = 2;
/// Estimated dots per UTF-16 unit of the value, per module.
const WIDTH_PER_CHAR: i32 = 8;
const RIGHT_MARGIN: i32 = 10;

const BAR_INSET_X: i32 = 6;
const BAR_INSET_Y: i32 = 4;

const CAPTION_GAP: i32 = 6;
const CAPTION_SIZE: f32 = 22.;
const CAPTION_BOTTOM_MARGIN: i32 = 4;

/// A boxed, bar-like stand in for a barcode, in raster dots.
#[derive(Debug, Clone, PartialEq)]
pub struct BarcodePlaceholder {
    pub frame: Rect,
    /// Black bars only, left to right.
    pub bars: Vec<Rect>,
    pub caption: Option<TextRun>,
}

/// Placeholder width for a barcode starting at native `x`.
///
/// The estimate is clamped to `[220, LABEL_WIDTH_DOTS - x - 10]`. When the
/// upper bound falls below 220 (barcodes anchored near the right edge) the
/// lower bound wins and the box may overflow the label.
pub fn estimate_width(x: i32, value: &str, module: u32) -> i32 {
    let module = if module == 0 { DEFAULT_MODULE } else { module };
    let units = i32::try_from(value.encode_utf16().count()).unwrap_or(i32::MAX);
    let module = i32::try_from(module).unwrap_or(i32::MAX);
    let raw = units
        .saturating_mul(module)
        .saturating_mul(WIDTH_PER_CHAR)
        .max(MIN_WIDTH);
    let high = LABEL_WIDTH_DOTS.saturating_sub(x).saturating_sub(RIGHT_MARGIN);
    raw.min(high).max(MIN_WIDTH)
}

fn placeholder_height(height: u32) -> i32 {
    let height = if height == 0 { DEFAULT_HEIGHT } else { height };
    i32::try_from(height.max(MIN_HEIGHT)).unwrap_or(i32::MAX)
}

fn layout_bars(frame: Rect, seed: u32, module: u32) -> Vec<Rect> {
    let module = if module == 0 { DEFAULT_MODULE } else { module };
    let limit = frame.right() - BAR_INSET_X;
    let top = frame.y.saturating_add(BAR_INSET_Y);
    let height = frame.height - 2 * BAR_INSET_Y;

    let mut bars = Vec::new();
    let mut cursor = frame.x.saturating_add(BAR_INSET_X);
    for bar in BarPattern::new(seed, module) {
        let width = i32::try_from(bar.width).unwrap_or(i32::MAX);
        let next = cursor.saturating_add(width);
        if next > limit {
            break;
        }
        if bar.black {
            bars.push(Rect::new(cursor, top, width, height));
        }
        cursor = next;
    }
    bars
}

/// Lays out a barcode command. The box sits on the anchor and grows upward
/// in native space.
pub(crate) fn barcode_placeholder(
    x: i32,
    y: i32,
    height: u32,
    module: u32,
    value: &str,
) -> BarcodePlaceholder {
    let anchor = to_raster_space(x, y);
    let height = placeholder_height(height);
    let width = estimate_width(x, value, module);
    let frame = Rect::new(anchor.x, anchor.y.saturating_sub(height), width, height);
    let bars = layout_bars(frame, fnv1a(value), module);

    let caption_top = frame.bottom().saturating_add(CAPTION_GAP);
    let fits = caption_top <= LABEL_HEIGHT_DOTS - CAPTION_BOTTOM_MARGIN;
    let caption = (!value.is_empty() && fits).then(|| TextRun {
        origin: Point::new(frame.x, caption_top),
        anchor: TextAnchor::Top,
        face: FontFace::Mono,
        size: CAPTION_SIZE,
        x_scale: 1.,
        content: value.to_string(),
    });

    BarcodePlaceholder {
        frame,
        bars,
        caption,
    }
}
