use fontdue::{Font, FontSettings};
use label_interpreter::FontFace;

use crate::RenderError;

const SANS: &[u8] = include_bytes!("../../fonts/DejaVu/DejaVuSans.ttf");
const SANS_BOLD: &[u8] = include_bytes!("../../fonts/DejaVu/DejaVuSans-Bold.ttf");
const MONO: &[u8] = include_bytes!("../../fonts/DejaVu/DejaVuSansMono.ttf");

fn load(name: &'static str, data: &'static [u8]) -> Result<Font, RenderError> {
    Font::from_bytes(data, FontSettings::default())
        .map_err(|reason| RenderError::Font { name, reason })
}

/// The embedded faces, parsed once per renderer.
pub(crate) struct Fonts {
    regular: Font,
    bold: Font,
    mono: Font,
}

impl Fonts {
    pub(crate) fn load() -> Result<Self, RenderError> {
        Ok(Self {
            regular: load("DejaVuSans", SANS)?,
            bold: load("DejaVuSans-Bold", SANS_BOLD)?,
            mono: load("DejaVuSansMono", MONO)?,
        })
    }

    pub(crate) fn face(&self, face: FontFace) -> &Font {
        match face {
            FontFace::Regular => &self.regular,
            FontFace::Bold => &self.bold,
            FontFace::Mono => &self.mono,
        }
    }
}
