use std::fmt::{self, Display};

/// Direction of a drawn rule, in native label space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineDirection {
    North, // N, +Y
    East,  // E, +X
}

impl TryFrom<char> for LineDirection {
    type Error = char;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value {
            'N' => Ok(LineDirection::North),
            'E' => Ok(LineDirection::East),
            other => Err(other),
        }
    }
}

impl Display for LineDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LineDirection::North => write!(f, "N"),
            LineDirection::East => write!(f, "E"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandKind {
    Text {
        orientation: char,
        font_id: u32,
        x_mul: u32,
        y_mul: u32,
        value: String,
    },
    Line {
        direction: LineDirection,
        thickness: u32,
        length: u32,
    },
    Barcode {
        orientation: char,
        height: u32,
        module: u32,
        /// Carried through from the script, not used for layout.
        extra: u32,
        value: String,
    },
}

/// One drawing command. `x` and `y` are dots in the label's native space
/// (origin bottom-left, Y up); `line_no` is the 1-based source line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    pub x: i32,
    pub y: i32,
    pub line_no: usize,
    pub kind: CommandKind,
}

impl Command {
    pub fn is_text(&self) -> bool {
        matches!(self.kind, CommandKind::Text { .. })
    }

    pub fn is_line(&self) -> bool {
        matches!(self.kind, CommandKind::Line { .. })
    }

    pub fn is_barcode(&self) -> bool {
        matches!(self.kind, CommandKind::Barcode { .. })
    }
}
