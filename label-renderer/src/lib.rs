mod barcode;
mod error;
mod fonts;
mod shapes;
mod text;

use label_interpreter::{Label, LabelElement, Rect as DotRect};
use log::debug;
use tiny_skia::{Color, Pixmap, Transform};

pub use crate::error::RenderError;
use crate::{
    barcode::Barcode,
    fonts::Fonts,
    shapes::{Fill, Rectangle, RuleShape},
    text::Text,
};

/// Thin border that marks the label edge on the preview.
const BORDER_INSET: i32 = 1;
const BORDER_THICKNESS: f32 = 1.;
const BORDER_ALPHA: f32 = 0.2;
/// Largest surface we allocate, 1 GiB of rgba.
const MAX_SURFACE_PIXELS: u64 = 256 * 1024 * 1024;

pub(crate) trait Drawable {
    /// `transform` maps label dots to device pixels.
    fn draw(&self, target: &mut Pixmap, transform: Transform) -> Result<(), RenderError>;
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderConfig {
    /// User facing magnification.
    pub zoom: f32,
    /// Device pixels per css pixel.
    pub pixel_density: f32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            zoom: 1.,
            pixel_density: 1.,
        }
    }
}

impl RenderConfig {
    pub fn new(zoom: f32, pixel_density: f32) -> Self {
        Self {
            zoom,
            pixel_density,
        }
    }

    /// Device pixels per label dot.
    pub fn scale(&self) -> f32 {
        self.zoom * self.pixel_density
    }

    /// Pixel size of the surface for a label of `width` x `height` dots.
    pub fn surface_size(&self, width: i32, height: i32) -> Result<(u32, u32), RenderError> {
        let scale = self.scale();
        if !scale.is_finite() || scale <= 0. {
            return Err(RenderError::InvalidScale(scale));
        }
        let width = (width as f32 * scale).round() as u32;
        let height = (height as f32 * scale).round() as u32;
        if u64::from(width) * u64::from(height) > MAX_SURFACE_PIXELS {
            return Err(RenderError::NoSurface { width, height });
        }
        Ok((width, height))
    }
}

pub struct RenderOutput {
    pub width: u32,
    pub height: u32,
    pub png: Vec<u8>,
}

/// Paints labels. Holds the parsed fonts so repeated renders skip loading.
pub struct Renderer {
    fonts: Fonts,
}

impl Renderer {
    pub fn new() -> Result<Self, RenderError> {
        Ok(Self {
            fonts: Fonts::load()?,
        })
    }

    /// Allocates a surface sized for `config` and paints the label into it.
    pub fn render_pixmap(
        &self,
        label: &Label,
        config: &RenderConfig,
    ) -> Result<Pixmap, RenderError> {
        let (width, height) = config.surface_size(label.width, label.height)?;
        let mut pixmap =
            Pixmap::new(width, height).ok_or(RenderError::NoSurface { width, height })?;
        debug!("rendering {width}x{height} px at scale {}", config.scale());
        self.paint(label, &mut pixmap, Transform::from_scale(config.scale(), config.scale()))?;
        Ok(pixmap)
    }

    pub fn render(
        &self,
        label: &Label,
        config: &RenderConfig,
    ) -> Result<RenderOutput, RenderError> {
        let pixmap = self.render_pixmap(label, config)?;
        let png = pixmap
            .encode_png()
            .map_err(|err| RenderError::Encode(err.to_string()))?;
        Ok(RenderOutput {
            width: pixmap.width(),
            height: pixmap.height(),
            png,
        })
    }

    /// Repaints `target` from scratch. Elements are expected in paint order.
    fn paint(
        &self,
        label: &Label,
        target: &mut Pixmap,
        transform: Transform,
    ) -> Result<(), RenderError> {
        // White background
        target.fill(Color::WHITE);
        let border = DotRect::new(
            BORDER_INSET,
            BORDER_INSET,
            label.width - 2 * BORDER_INSET,
            label.height - 2 * BORDER_INSET,
        );
        let border_color = Color::from_rgba(0., 0., 0., BORDER_ALPHA).unwrap_or(Color::BLACK);
        Rectangle::new(
            border,
            Fill::Outline {
                color: border_color,
                line_thickness: BORDER_THICKNESS,
            },
        )
        .draw(target, transform)?;

        for el in &label.elements {
            match el {
                LabelElement::Rule(rule) => RuleShape::new(rule).draw(target, transform)?,
                LabelElement::Barcode(placeholder) => {
                    Barcode::new(placeholder, &self.fonts).draw(target, transform)?
                }
                LabelElement::Text(run) => {
                    Text::new(run, self.fonts.face(run.face)).draw(target, transform)?
                }
            }
        }
        Ok(())
    }
}

/// One-shot convenience around [`Renderer`].
pub fn render(label: &Label, config: &RenderConfig) -> Result<RenderOutput, RenderError> {
    Renderer::new()?.render(label, config)
}

#[cfg(test)]
mod tests {
    use label_interpreter::interpret;
    use label_parser::parse_script;
    use tiny_skia::Pixmap;

    use crate::{RenderConfig, RenderError, Renderer, render};

    fn is_dark(pixmap: &Pixmap, x: u32, y: u32) -> bool {
        let p = pixmap.pixel(x, y).unwrap();
        p.red() < 64 && p.green() < 64 && p.blue() < 64
    }

    fn is_white(pixmap: &Pixmap, x: u32, y: u32) -> bool {
        let p = pixmap.pixel(x, y).unwrap();
        p.red() == 255 && p.green() == 255 && p.blue() == 255
    }

    fn render_script(script: &str, config: RenderConfig) -> Pixmap {
        let label = interpret(&parse_script(script).commands);
        Renderer::new()
            .unwrap()
            .render_pixmap(&label, &config)
            .unwrap()
    }

    #[test]
    fn surface_follows_zoom_and_density() {
        let pixmap = render_script("", RenderConfig::new(0.5, 2.));
        assert_eq!((pixmap.width(), pixmap.height()), (1624, 2436));

        let pixmap = render_script("", RenderConfig::new(0.25, 1.));
        assert_eq!((pixmap.width(), pixmap.height()), (406, 609));
    }

    #[test]
    fn blank_label_is_white_inside_border() {
        let pixmap = render_script("", RenderConfig::default());
        assert!(is_white(&pixmap, 800, 1200));
        assert!(is_white(&pixmap, 10, 10));
        // faint border, neither white nor black
        let faint = (0..3).any(|x| {
            let p = pixmap.pixel(x, 600).unwrap();
            p.red() < 255 && p.red() > 64
        });
        assert!(faint);
    }

    #[test]
    fn north_rule_is_painted_between_endpoints() {
        let pixmap = render_script("!F B N 1725 960 L 10 50", RenderConfig::default());
        // rule spans raster y 661..711 around x 960
        assert!(is_dark(&pixmap, 960, 686));
        assert!(is_dark(&pixmap, 957, 670));
        assert!(is_white(&pixmap, 960, 650));
        assert!(is_white(&pixmap, 960, 720));
        assert!(is_white(&pixmap, 970, 686));
    }

    #[test]
    fn east_rule_scales_with_zoom() {
        let pixmap = render_script("!F B E 2036 100 L 4 400", RenderConfig::new(0.5, 1.));
        // raster y 400 -> 200 px, x 100..500 -> 50..250 px
        assert!(is_dark(&pixmap, 150, 200));
        assert!(is_white(&pixmap, 40, 200));
        assert!(is_white(&pixmap, 260, 200));
    }

    #[test]
    fn barcode_frame_and_bars_are_painted() {
        let pixmap = render_script(
            "!F C S 400 120 N 180 3 0 \"SE123456789\"",
            RenderConfig::default(),
        );
        // frame spans x 120..384, y 1856..2036
        assert!(is_dark(&pixmap, 120, 1950));
        assert!(is_dark(&pixmap, 250, 1856));
        let row = 1950;
        let dark = (126..378).filter(|&x| is_dark(&pixmap, x, row)).count();
        assert!(dark > 20 && dark < 240, "{dark}");
        // no bars in the vertical inset
        assert!((126..378).all(|x| !is_dark(&pixmap, x, 1858)));
    }

    #[test]
    fn text_is_painted_above_baseline() {
        let pixmap = render_script("!F T S 1911 990 L 8 1 1 \"HH\"", RenderConfig::default());
        let above = (990..1100).any(|x| (470..525).any(|y| is_dark(&pixmap, x, y)));
        let below = (990..1100).any(|x| (530..560).any(|y| is_dark(&pixmap, x, y)));
        assert!(above);
        assert!(!below);
    }

    #[test]
    fn later_groups_paint_over_earlier_ones() {
        // rule runs through where the barcode box sits, box is painted after
        let script = "!F B E 1950 0 L 30 1624\n!F C S 1800 120 N 300 3 0 \"\"";
        let pixmap = render_script(script, RenderConfig::default());
        // inside the box, between the inset and the first bar column
        assert!(is_white(&pixmap, 123, 486));
        assert!(is_dark(&pixmap, 60, 486));
    }

    #[test]
    fn zero_zoom_has_no_surface() {
        let label = interpret(&[]);
        let result = render(&label, &RenderConfig::new(0., 1.));
        assert!(matches!(result, Err(RenderError::InvalidScale(_))));
    }

    #[test]
    fn tiny_zoom_has_no_surface() {
        let label = interpret(&[]);
        let result = render(&label, &RenderConfig::new(0.0001, 1.));
        assert!(matches!(result, Err(RenderError::NoSurface { .. })));
    }

    #[test]
    fn huge_zoom_is_refused_before_allocating() {
        let config = RenderConfig::new(40., 1.);
        assert_eq!(
            config.surface_size(1624, 2436),
            Err(RenderError::NoSurface {
                width: 64960,
                height: 97440,
            })
        );

        let label = interpret(&parse_script("!F B E 10 10 L 2 100").commands);
        let result = render(&label, &config);
        assert!(matches!(result, Err(RenderError::NoSurface { .. })));
    }

    #[test]
    fn large_zoom_within_budget_is_sized() {
        let config = RenderConfig::new(4., 2.);
        assert_eq!(config.surface_size(1624, 2436), Ok((12992, 19488)));
    }

    #[test]
    fn render_encodes_png() {
        let label = interpret(&parse_script("!F B E 10 10 L 2 100").commands);
        let output = render(&label, &RenderConfig::new(0.25, 1.)).unwrap();
        assert_eq!((output.width, output.height), (406, 609));
        assert_eq!(&output.png[..8], b"\x89PNG\r\n\x1a\n");
    }
}
