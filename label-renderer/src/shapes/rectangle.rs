use label_interpreter::Rect as DotRect;
use tiny_skia::{Color, Paint, PathBuilder, Pixmap, Rect, Stroke, Transform};

use crate::{Drawable, RenderError};

#[derive(Debug, Clone, Copy)]
pub(crate) enum Fill {
    Solid(Color),
    Outline { color: Color, line_thickness: f32 },
}

/// Rectangle in dot space, filled or outlined.
pub(crate) struct Rectangle {
    rect: DotRect,
    fill: Fill,
}

impl Rectangle {
    pub(crate) fn new(rect: DotRect, fill: Fill) -> Self {
        Self { rect, fill }
    }
}

fn paint_for(color: Color) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color(color);
    paint
}

impl Drawable for Rectangle {
    fn draw(&self, target: &mut Pixmap, transform: Transform) -> Result<(), RenderError> {
        // zero or negative extents have nothing to paint
        let Some(rect) = Rect::from_xywh(
            self.rect.x as f32,
            self.rect.y as f32,
            self.rect.width as f32,
            self.rect.height as f32,
        ) else {
            return Ok(());
        };

        match self.fill {
            Fill::Solid(color) => {
                let mut paint = paint_for(color);
                paint.anti_alias = false;
                target.fill_rect(rect, &paint, transform, None);
            }
            Fill::Outline {
                color,
                line_thickness,
            } => {
                let path = PathBuilder::from_rect(rect);
                let stroke = Stroke {
                    width: line_thickness,
                    ..Stroke::default()
                };
                target.stroke_path(&path, &paint_for(color), &stroke, transform, None);
            }
        }

        Ok(())
    }
}
