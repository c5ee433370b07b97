mod error;

use std::{fs, path::Path};

use log::info;

pub use error::*;

pub use label_interpreter::{Label, interpret};
pub use label_parser::{Command, CommandKind, LineDirection, ParsedScript, Warning, parse_script};
pub use label_renderer::{RenderConfig, RenderError, RenderOutput, Renderer, render};

/// Result of one parse and render cycle.
pub struct Preview {
    pub script: ParsedScript,
    pub output: RenderOutput,
}

impl Preview {
    pub fn png(&self) -> &[u8] {
        &self.output.png
    }

    /// Display ready warnings, in source order.
    pub fn warnings(&self) -> Vec<String> {
        self.script.warnings.iter().map(ToString::to_string).collect()
    }

    /// One line status text, e.g. `3 commands (1 text, 1 line, 1 barcode), 1 warning`.
    pub fn summary(&self) -> String {
        summarize(&self.script)
    }
}

fn plural(count: usize, word: &str) -> String {
    match count {
        1 => format!("{count} {word}"),
        _ => format!("{count} {word}s"),
    }
}

pub fn summarize(script: &ParsedScript) -> String {
    format!(
        "{} ({} text, {}, {}), {}",
        plural(script.commands.len(), "command"),
        script.text_count(),
        plural(script.line_count(), "line"),
        plural(script.barcode_count(), "barcode"),
        plural(script.warnings.len(), "warning"),
    )
}

/// Owns a [`Renderer`] so fonts are loaded once across previews.
pub struct LabelPreview {
    renderer: Renderer,
}

impl LabelPreview {
    pub fn new() -> Result<Self, PreviewError> {
        Ok(Self {
            renderer: Renderer::new()?,
        })
    }

    pub fn parse_and_render(
        &self,
        input: &str,
        config: &RenderConfig,
    ) -> Result<Preview, PreviewError> {
        let script = parse_script(input);
        let label = interpret(&script.commands);
        let output = self.renderer.render(&label, config)?;
        info!(
            "rendered {}x{} px preview: {}",
            output.width,
            output.height,
            summarize(&script)
        );
        Ok(Preview { script, output })
    }

    pub fn render_file(&self, path: &Path, config: &RenderConfig) -> Result<Preview, PreviewError> {
        let input = fs::read_to_string(path).map_err(|source| PreviewError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        self.parse_and_render(&input, config)
    }
}
