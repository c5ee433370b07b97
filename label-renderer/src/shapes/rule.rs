use label_interpreter::Rule;
use tiny_skia::{LineCap, Paint, PathBuilder, Pixmap, Stroke, Transform};

use crate::{Drawable, RenderError};

pub(crate) struct RuleShape<'a> {
    rule: &'a Rule,
}

impl<'a> RuleShape<'a> {
    pub(crate) fn new(rule: &'a Rule) -> Self {
        Self { rule }
    }
}

impl Drawable for RuleShape<'_> {
    fn draw(&self, target: &mut Pixmap, transform: Transform) -> Result<(), RenderError> {
        let Rule { from, to, width } = *self.rule;
        // butt caps leave nothing to see on a zero length rule
        if from == to {
            return Ok(());
        }

        let mut pb = PathBuilder::new();
        pb.move_to(from.x as f32, from.y as f32);
        pb.line_to(to.x as f32, to.y as f32);
        let Some(path) = pb.finish() else {
            return Ok(());
        };

        let mut paint = Paint::default();
        paint.set_color_rgba8(0, 0, 0, 255);

        let stroke = Stroke {
            width,
            line_cap: LineCap::Butt,
            ..Stroke::default()
        };

        target.stroke_path(&path, &paint, &stroke, transform, None);
        Ok(())
    }
}
