use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum RenderError {
    #[error("render scale must be finite and positive, got {0}")]
    InvalidScale(f32),

    #[error("no drawing surface available for {width}x{height} pixels")]
    NoSurface { width: u32, height: u32 },

    #[error("failed to load font {name}: {reason}")]
    Font {
        name: &'static str,
        reason: &'static str,
    },

    #[error("failed to encode png: {0}")]
    Encode(String),
}
