//! Renders a label script to a PNG preview.
//!
//! ```text
//! label-preview <script> [-o out.png] [--zoom Z] [--density D]
//! ```
//!
//! The summary goes to stdout, one line per warning to stderr. Warnings do
//! not change the exit code. Set `RUST_LOG=debug` for per-line tracing.

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use label_preview::{LabelPreview, RenderConfig};

const USAGE: &str = "usage: label-preview <script> [-o out.png] [--zoom Z] [--density D]";

#[derive(Debug, PartialEq)]
struct Args {
    script: PathBuf,
    output: PathBuf,
    config: RenderConfig,
}

fn parse_factor(flag: &str, value: Option<String>) -> Result<f32> {
    let value = value.with_context(|| format!("{flag} needs a value"))?;
    let factor: f32 = value
        .parse()
        .with_context(|| format!("{flag} expects a number, got '{value}'"))?;
    if !factor.is_finite() || factor <= 0. {
        bail!("{flag} must be positive, got {factor}");
    }
    Ok(factor)
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Args> {
    let mut script = None;
    let mut output = None;
    let mut config = RenderConfig::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-o" | "--output" => {
                output = Some(PathBuf::from(args.next().context("-o needs a path")?));
            }
            "--zoom" => config.zoom = parse_factor("--zoom", args.next())?,
            "--density" => config.pixel_density = parse_factor("--density", args.next())?,
            "-h" | "--help" => bail!(USAGE),
            flag if flag.starts_with('-') => bail!("unknown option '{flag}'\n{USAGE}"),
            path if script.is_none() => script = Some(PathBuf::from(path)),
            other => bail!("unexpected argument '{other}'\n{USAGE}"),
        }
    }

    let script: PathBuf = script.context(USAGE)?;
    let output = output.unwrap_or_else(|| default_output(&script));
    Ok(Args {
        script,
        output,
        config,
    })
}

fn default_output(script: &Path) -> PathBuf {
    script.with_extension("png")
}

fn main() -> Result<()> {
    env_logger::init();

    let args = parse_args(std::env::args().skip(1))?;
    let previewer = LabelPreview::new().context("failed to set up renderer")?;
    let preview = previewer.render_file(&args.script, &args.config)?;

    fs::write(&args.output, preview.png())
        .with_context(|| format!("failed to write {}", args.output.display()))?;

    for warning in preview.warnings() {
        eprintln!("{warning}");
    }
    println!("{} -> {}", preview.summary(), args.output.display());
    Ok(())
}
