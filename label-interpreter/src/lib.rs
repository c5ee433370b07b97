mod barcode;
mod geometry;
mod pattern;
mod text;

use label_parser::{Command, CommandKind, LineDirection};
use log::debug;

pub use crate::barcode::{BarcodePlaceholder, estimate_width};
pub use crate::geometry::*;
pub use crate::pattern::{Bar, BarPattern, fnv1a};
pub use crate::text::{FontFace, TextAnchor, TextRun, base_font_size};

/// A straight, flat-capped rule in raster dots.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rule {
    pub from: Point,
    pub to: Point,
    pub width: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub enum LabelElement {
    Rule(Rule),
    Barcode(BarcodePlaceholder),
    Text(TextRun),
}

/// Everything needed to paint one label, in raster dots and paint order.
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub width: i32,
    pub height: i32,
    pub elements: Vec<LabelElement>,
}

impl Default for Label {
    fn default() -> Self {
        Self {
            width: LABEL_WIDTH_DOTS,
            height: LABEL_HEIGHT_DOTS,
            elements: Vec::new(),
        }
    }
}

fn rule(cmd: &Command, direction: LineDirection, thickness: u32, length: u32) -> Rule {
    let (end_x, end_y) = match direction {
        LineDirection::East => (cmd.x.saturating_add_unsigned(length), cmd.y),
        LineDirection::North => (cmd.x, cmd.y.saturating_add_unsigned(length)),
    };
    Rule {
        from: to_raster_space(cmd.x, cmd.y),
        to: to_raster_space(end_x, end_y),
        width: thickness.max(1) as f32,
    }
}

/// Turns parsed commands into positioned elements. Rules are painted first,
/// then barcodes, then text, each group in source order.
pub fn interpret(cmds: &[Command]) -> Label {
    let mut label = Label::default();

    for cmd in cmds {
        if let CommandKind::Line {
            direction,
            thickness,
            length,
        } = cmd.kind
        {
            let rule = rule(cmd, direction, thickness, length);
            debug!("line {}: rule {:?} -> {:?}", cmd.line_no, rule.from, rule.to);
            label.elements.push(LabelElement::Rule(rule));
        }
    }

    for cmd in cmds {
        if let CommandKind::Barcode {
            height,
            module,
            ref value,
            ..
        } = cmd.kind
        {
            let barcode = barcode::barcode_placeholder(cmd.x, cmd.y, height, module, value);
            debug!(
                "line {}: barcode frame {:?} with {} bars",
                cmd.line_no,
                barcode.frame,
                barcode.bars.len()
            );
            label.elements.push(LabelElement::Barcode(barcode));
        }
    }

    for cmd in cmds {
        if let CommandKind::Text {
            font_id,
            x_mul,
            y_mul,
            ref value,
            ..
        } = cmd.kind
        {
            match text::text_run(cmd.x, cmd.y, font_id, x_mul, y_mul, value) {
                Some(run) => label.elements.push(LabelElement::Text(run)),
                None => debug!("line {}: empty text skipped", cmd.line_no),
            }
        }
    }

    label
}

#[cfg(test)]
mod tests {
    use label_parser::parse_script;

    use crate::{LabelElement, Point, Rule, interpret};

    #[test]
    fn north_rule_endpoints() {
        let parsed = parse_script("!F B N 1725 960 L 10 50");
        let label = interpret(&parsed.commands);
        assert_eq!(
            label.elements,
            vec![LabelElement::Rule(Rule {
                from: Point::new(960, 711),
                to: Point::new(960, 661),
                width: 10.,
            })]
        );
    }

    #[test]
    fn east_rule_endpoints_and_min_width() {
        let parsed = parse_script("!F B E 100 40 L 0 300");
        let label = interpret(&parsed.commands);
        assert_eq!(
            label.elements,
            vec![LabelElement::Rule(Rule {
                from: Point::new(40, 2336),
                to: Point::new(340, 2336),
                width: 1.,
            })]
        );
    }

    #[test]
    fn paint_order_is_by_kind() {
        let script = "!F T S 100 100 N 2 1 1 \"first\"\n\
            !F C S 500 100 N 100 2 0 \"123\"\n\
            !F B E 50 50 L 2 100\n\
            !F T S 200 100 N 2 1 1 \"second\"\n\
            !F B N 50 50 L 2 100";
        let label = interpret(&parse_script(script).commands);

        let kinds: Vec<&str> = label
            .elements
            .iter()
            .map(|el| match el {
                LabelElement::Rule(_) => "rule",
                LabelElement::Barcode(_) => "barcode",
                LabelElement::Text(_) => "text",
            })
            .collect();
        assert_eq!(kinds, vec!["rule", "rule", "barcode", "text", "text"]);

        let LabelElement::Rule(first_rule) = &label.elements[0] else {
            panic!("expected rule");
        };
        assert_eq!(first_rule.to, Point::new(150, 2386));

        let LabelElement::Text(first_text) = &label.elements[3] else {
            panic!("expected text");
        };
        assert_eq!(first_text.content, "first");
    }

    #[test]
    fn empty_text_produces_no_element() {
        let label = interpret(&parse_script("!F T S 100 100 N 2 1 1 \"\"").commands);
        assert!(label.elements.is_empty());
    }

    #[test]
    fn label_has_fixed_size() {
        let label = interpret(&[]);
        assert_eq!((label.width, label.height), (1624, 2436));
    }
}
