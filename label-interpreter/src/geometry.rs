//! Label dimensions and the flip from native label space (origin bottom-left,
//! Y up) to raster space (origin top-left, Y down). Both are measured in dots.

/// 4 inch wide at 406 dpi.
pub const LABEL_WIDTH_DOTS: i32 = 1624;
/// 6 inch tall.
pub const LABEL_HEIGHT_DOTS: i32 = 2436;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Axis aligned rectangle in raster dots, `(x, y)` is the top-left corner.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> i32 {
        self.x.saturating_add(self.width)
    }

    pub fn bottom(&self) -> i32 {
        self.y.saturating_add(self.height)
    }
}

pub fn to_raster_space(x_dots: i32, y_dots: i32) -> Point {
    Point::new(x_dots, LABEL_HEIGHT_DOTS.saturating_sub(y_dots))
}
