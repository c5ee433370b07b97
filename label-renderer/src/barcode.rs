use label_interpreter::BarcodePlaceholder;
use tiny_skia::{Color, Pixmap, Transform};

use crate::{
    Drawable, RenderError,
    fonts::Fonts,
    shapes::{Fill, Rectangle},
    text::Text,
};

const FRAME_THICKNESS: f32 = 2.;

pub(crate) struct Barcode<'a> {
    placeholder: &'a BarcodePlaceholder,
    fonts: &'a Fonts,
}

impl<'a> Barcode<'a> {
    pub(crate) fn new(placeholder: &'a BarcodePlaceholder, fonts: &'a Fonts) -> Self {
        Self { placeholder, fonts }
    }
}

impl Drawable for Barcode<'_> {
    fn draw(&self, target: &mut Pixmap, transform: Transform) -> Result<(), RenderError> {
        let frame = self.placeholder.frame;
        Rectangle::new(frame, Fill::Solid(Color::WHITE)).draw(target, transform)?;
        Rectangle::new(
            frame,
            Fill::Outline {
                color: Color::BLACK,
                line_thickness: FRAME_THICKNESS,
            },
        )
        .draw(target, transform)?;

        for bar in &self.placeholder.bars {
            Rectangle::new(*bar, Fill::Solid(Color::BLACK)).draw(target, transform)?;
        }

        if let Some(caption) = &self.placeholder.caption {
            Text::new(caption, self.fonts.face(caption.face)).draw(target, transform)?;
        }
        Ok(())
    }
}
