use log::{debug, warn};
use nom::{
    IResult, Parser,
    bytes::complete::{tag, take_till},
    character::complete::{char, i32 as parse_i32, satisfy, space0, space1, u32 as parse_u32},
    combinator::all_consuming,
    error::Error,
    sequence::{delimited, preceded, terminated},
};

use crate::{
    commands::{Command, CommandKind, LineDirection},
    warning::Warning,
};

const COMMENT_PREFIX: &str = "//";
const DRAW_PREFIX: &str = "!F";

// Printer setup directives. Acknowledged, never drawn, never warned about.
const SETUP_FAMILY_PREFIX: &str = "!Y";
const PRINT_MARKER: &str = "!P";
const CONTROL_PREFIXES: [&str; 2] = ["!C", "!Q"];

/// Output of one parse: commands in source order plus the warnings raised
/// along the way. Both lists are final once returned.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedScript {
    pub commands: Vec<Command>,
    pub warnings: Vec<Warning>,
}

impl ParsedScript {
    pub fn text_count(&self) -> usize {
        self.commands.iter().filter(|c| c.is_text()).count()
    }

    pub fn line_count(&self) -> usize {
        self.commands.iter().filter(|c| c.is_line()).count()
    }

    pub fn barcode_count(&self) -> usize {
        self.commands.iter().filter(|c| c.is_barcode()).count()
    }
}

/// A line that matched one of the command shapes, before semantic checks.
#[derive(Debug, Clone, PartialEq)]
enum Shape<'a> {
    Text {
        y: i32,
        x: i32,
        orientation: char,
        font_id: u32,
        x_mul: u32,
        y_mul: u32,
        value: &'a str,
    },
    Line {
        direction: char,
        y: i32,
        x: i32,
        thickness: u32,
        length: u32,
    },
    Barcode {
        y: i32,
        x: i32,
        orientation: char,
        height: u32,
        module: u32,
        extra: u32,
        value: &'a str,
    },
}

impl Shape<'_> {
    fn into_command(self, line_no: usize) -> Result<Command, Warning> {
        let (x, y, kind) = match self {
            Shape::Text {
                y,
                x,
                orientation,
                font_id,
                x_mul,
                y_mul,
                value,
            } => (
                x,
                y,
                CommandKind::Text {
                    orientation,
                    font_id,
                    x_mul,
                    y_mul,
                    value: value.to_string(),
                },
            ),
            Shape::Line {
                direction,
                y,
                x,
                thickness,
                length,
            } => {
                let direction = LineDirection::try_from(direction).map_err(|direction| {
                    Warning::UnsupportedDirection { line_no, direction }
                })?;
                (
                    x,
                    y,
                    CommandKind::Line {
                        direction,
                        thickness,
                        length,
                    },
                )
            }
            Shape::Barcode {
                y,
                x,
                orientation,
                height,
                module,
                extra,
                value,
            } => (
                x,
                y,
                CommandKind::Barcode {
                    orientation,
                    height,
                    module,
                    extra,
                    value: value.to_string(),
                },
            ),
        };
        Ok(Command {
            x,
            y,
            line_no,
            kind,
        })
    }
}

type Matcher = for<'a> fn(&'a str) -> IResult<&'a str, Shape<'a>>;

/// Tried in order, first full match wins.
const SHAPES: [(&str, Matcher); 3] = [
    ("text", text_shape),
    ("line", line_shape),
    ("barcode", barcode_shape),
];

/// A space-separated token.
fn field<'a, O, P>(parser: P) -> impl Parser<&'a str, Output = O, Error = Error<&'a str>>
where
    P: Parser<&'a str, Output = O, Error = Error<&'a str>>,
{
    preceded(space1, parser)
}

fn letter(input: &str) -> IResult<&str, char> {
    satisfy(|c: char| c.is_ascii_uppercase()).parse(input)
}

fn quoted(input: &str) -> IResult<&str, &str> {
    delimited(char('"'), take_till(|c: char| c == '"'), char('"')).parse(input)
}

/// Whole-line match, tolerating trailing blanks only.
fn whole_line<'a, O, P>(parser: P) -> impl Parser<&'a str, Output = O, Error = Error<&'a str>>
where
    P: Parser<&'a str, Output = O, Error = Error<&'a str>>,
{
    all_consuming(terminated(parser, space0))
}

// !F T S <y> <x> <orientation> <font> <x-mul> <y-mul> "<value>"
fn text_shape(input: &str) -> IResult<&str, Shape<'_>> {
    let (input, (_, _, _, y, x, orientation, font_id, x_mul, y_mul, value)) = whole_line((
        tag(DRAW_PREFIX),
        field(tag("T")),
        field(tag("S")),
        field(parse_i32),
        field(parse_i32),
        field(letter),
        field(parse_u32),
        field(parse_u32),
        field(parse_u32),
        field(quoted),
    ))
    .parse(input)?;

    Ok((
        input,
        Shape::Text {
            y,
            x,
            orientation,
            font_id,
            x_mul,
            y_mul,
            value,
        },
    ))
}

// !F B <direction> <y> <x> L <thickness> <length>
fn line_shape(input: &str) -> IResult<&str, Shape<'_>> {
    let (input, (_, _, direction, y, x, _, thickness, length)) = whole_line((
        tag(DRAW_PREFIX),
        field(tag("B")),
        field(letter),
        field(parse_i32),
        field(parse_i32),
        field(tag("L")),
        field(parse_u32),
        field(parse_u32),
    ))
    .parse(input)?;

    Ok((
        input,
        Shape::Line {
            direction,
            y,
            x,
            thickness,
            length,
        },
    ))
}

// !F C S <y> <x> <orientation> <height> <module> <extra> "<value>"
fn barcode_shape(input: &str) -> IResult<&str, Shape<'_>> {
    let (input, (_, _, _, y, x, orientation, height, module, extra, value)) = whole_line((
        tag(DRAW_PREFIX),
        field(tag("C")),
        field(tag("S")),
        field(parse_i32),
        field(parse_i32),
        field(letter),
        field(parse_u32),
        field(parse_u32),
        field(parse_u32),
        field(quoted),
    ))
    .parse(input)?;

    Ok((
        input,
        Shape::Barcode {
            y,
            x,
            orientation,
            height,
            module,
            extra,
            value,
        },
    ))
}

fn is_control(line: &str) -> bool {
    line.starts_with(SETUP_FAMILY_PREFIX)
        || line == PRINT_MARKER
        || CONTROL_PREFIXES
            .iter()
            .any(|prefix| line.starts_with(prefix))
}

#[derive(Debug, PartialEq)]
enum LineOutcome {
    Skipped,
    Command(Command),
    Warning(Warning),
}

fn classify_line(raw: &str, line_no: usize) -> LineOutcome {
    let line = raw.trim();
    if line.is_empty() || line.starts_with(COMMENT_PREFIX) || is_control(line) {
        return LineOutcome::Skipped;
    }
    // Unknown top-level prefixes are dropped without a warning.
    if !line.starts_with(DRAW_PREFIX) {
        debug!("line {line_no}: ignoring non-drawing line");
        return LineOutcome::Skipped;
    }

    for (name, matcher) in SHAPES {
        if let Ok((_, shape)) = matcher(line) {
            debug!("line {line_no}: matched {name} shape");
            return match shape.into_command(line_no) {
                Ok(command) => LineOutcome::Command(command),
                Err(warning) => LineOutcome::Warning(warning),
            };
        }
    }

    LineOutcome::Warning(Warning::Unparsed {
        line_no,
        line: raw.to_string(),
    })
}

/// Parse a whole label script. Never fails: lines that cannot be used are
/// either skipped silently or reported in [`ParsedScript::warnings`].
pub fn parse_script(input: &str) -> ParsedScript {
    let mut parsed = ParsedScript::default();

    for (index, raw) in input.lines().enumerate() {
        match classify_line(raw, index + 1) {
            LineOutcome::Skipped => {}
            LineOutcome::Command(command) => parsed.commands.push(command),
            LineOutcome::Warning(warning) => {
                warn!("{warning}");
                parsed.warnings.push(warning);
            }
        }
    }

    parsed
}
