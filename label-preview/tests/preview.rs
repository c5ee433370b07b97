use label_preview::{
    Command, CommandKind, LabelPreview, LineDirection, PreviewError, RenderConfig, RenderError,
    Warning, interpret, parse_script,
};
use label_interpreter::{LabelElement, Point, Rule};

#[test]
fn text_scenario_parses_and_places_baseline() {
    let parsed = parse_script(r#"!F T S 1911 990 L 2 1 1 "Från""#);
    assert!(parsed.warnings.is_empty());
    assert_eq!(
        parsed.commands,
        vec![Command {
            x: 990,
            y: 1911,
            line_no: 1,
            kind: CommandKind::Text {
                orientation: 'L',
                font_id: 2,
                x_mul: 1,
                y_mul: 1,
                value: "Från".into(),
            },
        }]
    );

    let label = interpret(&parsed.commands);
    let [LabelElement::Text(run)] = label.elements.as_slice() else {
        panic!("expected a single text run");
    };
    assert_eq!(run.origin, Point::new(990, 525));
}

#[test]
fn line_scenario_endpoints() {
    let parsed = parse_script("!F B N 1725 960 L 10 50");
    assert!(matches!(
        parsed.commands[0].kind,
        CommandKind::Line {
            direction: LineDirection::North,
            thickness: 10,
            length: 50
        }
    ));
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
fn unparsed_line_is_reported_once() {
    let parsed = parse_script("!F X Y Z");
    assert!(parsed.commands.is_empty());
    assert_eq!(parsed.warnings.len(), 1);
    let text = parsed.warnings[0].to_string();
    assert!(text.contains('1'));
    assert!(text.contains("!F X Y Z"));
}

#[test]
fn filtered_lines_are_silent() {
    let parsed = parse_script("// c\n\n   \n!Y35 G\n!P\n!C\n!Q2\n^XA");
    assert!(parsed.commands.is_empty());
    assert!(parsed.warnings.is_empty());
}

#[test]
fn direction_warning_points_at_line() {
    let parsed = parse_script("!F B N 1 1 L 1 1\n!F B S 1 1 L 1 1");
    assert_eq!(parsed.commands.len(), 1);
    assert_eq!(
        parsed.warnings,
        vec![Warning::UnsupportedDirection {
            line_no: 2,
            direction: 'S'
        }]
    );
}

#[test]
fn sample_label_renders() {
    let script = include_str!("../examples/shipping_label.txt");
    let previewer = LabelPreview::new().unwrap();
    let preview = previewer
        .parse_and_render(script, &RenderConfig::new(0.25, 2.))
        .unwrap();

    assert!(preview.warnings().is_empty(), "{:?}", preview.warnings());
    assert_eq!(preview.script.text_count(), 12);
    assert_eq!(preview.script.line_count(), 4);
    assert_eq!(preview.script.barcode_count(), 1);
    assert_eq!((preview.output.width, preview.output.height), (812, 1218));
    assert_eq!(&preview.png()[..4], b"\x89PNG");
}

#[test]
fn reparsing_gives_identical_previews() {
    let script = include_str!("../examples/shipping_label.txt");
    let previewer = LabelPreview::new().unwrap();
    let config = RenderConfig::new(0.1, 1.);
    let first = previewer.parse_and_render(script, &config).unwrap();
    let second = previewer.parse_and_render(script, &config).unwrap();
    assert_eq!(first.script, second.script);
    assert_eq!(first.png(), second.png());
}

#[test]
fn missing_script_file_is_an_error() {
    let previewer = LabelPreview::new().unwrap();
    let result = previewer.render_file(
        std::path::Path::new("does/not/exist.txt"),
        &RenderConfig::default(),
    );
    assert!(result.is_err());
}

#[test]
fn oversized_zoom_is_an_error_not_an_abort() {
    let preview = LabelPreview::new().unwrap();
    let result = preview.parse_and_render("!F B E 10 10 L 2 100", &RenderConfig::new(40., 1.));
    assert!(matches!(
        result,
        Err(PreviewError::Render(RenderError::NoSurface { .. }))
    ));
}

#[test]
fn long_stretched_text_renders_on_default_surface() {
    let script = format!("!F T S 2400 0 N 8 1 20 \"{}\"", "W".repeat(150));
    let preview = LabelPreview::new()
        .unwrap()
        .parse_and_render(&script, &RenderConfig::default())
        .unwrap();
    assert_eq!(preview.script.commands.len(), 1);
    assert_eq!((preview.output.width, preview.output.height), (1624, 2436));
}
