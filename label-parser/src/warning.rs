use std::fmt::{self, Display};

use crate::commands::LineDirection;

/// Advisory diagnostics collected while parsing. None of them abort the parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Warning {
    /// A line had the rule shape but a direction other than `N` or `E`.
    UnsupportedDirection { line_no: usize, direction: char },
    /// A drawing line that matched none of the known command shapes.
    Unparsed { line_no: usize, line: String },
}

impl Warning {
    pub fn line_no(&self) -> usize {
        match self {
            Warning::UnsupportedDirection { line_no, .. } | Warning::Unparsed { line_no, .. } => {
                *line_no
            }
        }
    }
}

impl Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Warning::UnsupportedDirection { line_no, direction } => {
                write!(f, "Line {line_no}: unsupported line direction '{direction}' ")?;
                write!(
                    f,
                    "(only {} and {} are drawn)",
                    LineDirection::North,
                    LineDirection::East
                )
            }
            Warning::Unparsed { line_no, line } => {
                write!(f, "Line {line_no}: unparsed command ignored: {line}")
            }
        }
    }
}
