use label_preview::{LabelPreview, RenderConfig};

fn main() {
    let script = include_str!("shipping_label.txt");
    let previewer = LabelPreview::new().unwrap();
    let preview = previewer
        .parse_and_render(script, &RenderConfig::new(0.5, 1.))
        .unwrap();
    for warning in preview.warnings() {
        eprintln!("{warning}");
    }
    std::fs::write("label.png", preview.png()).expect("write png");
    println!("Wrote label.png: {}", preview.summary());
}
