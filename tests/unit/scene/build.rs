use super::*;
use crate::{config::model::BarrelConfig, geometry::resolver::resolve};

fn count_ops(scene: &Scene) -> (usize, usize, usize) {
    let mut ellipses = 0;
    let mut paths = 0;
    let mut texts = 0;
    for op in &scene.ops {
        match op {
            DrawOp::Ellipse { .. } => ellipses += 1,
            DrawOp::Path { .. } => paths += 1,
            DrawOp::Text { .. } => texts += 1,
        }
    }
    (ellipses, paths, texts)
}

#[test]
fn default_scene_has_expected_primitives() {
    let scene = build_scene(&resolve(&BarrelConfig::default()));
    assert_eq!(scene.canvas, Canvas::BARREL);
    // body + 13 staves + 3 bands * 2 + gloss + plate
    assert_eq!(count_ops(&scene), (2, 1 + 13 + 6 + 1 + 1, 1));
}

#[test]
fn empty_label_skips_plate_and_text() {
    let cfg = BarrelConfig::default().with_label("");
    let scene = build_scene(&resolve(&cfg));
    assert_eq!(count_ops(&scene), (2, 1 + 13 + 6 + 1, 0));
}

#[test]
fn paint_order_is_back_to_front() {
    let scene = build_scene(&resolve(&BarrelConfig::default()));
    assert!(matches!(scene.ops.first(), Some(DrawOp::Ellipse { .. })));
    assert!(matches!(
        &scene.ops[1],
        DrawOp::Path {
            fill: Some(Paint::Gradient(GradientId::Body)),
            ..
        }
    ));
    assert!(matches!(scene.ops.last(), Some(DrawOp::Text { .. })));
}

#[test]
fn gradients_use_wood_tones() {
    let g = resolve(&BarrelConfig::default());
    let scene = build_scene(&g);
    let body = scene
        .gradients
        .iter()
        .find(|gr| gr.id == GradientId::Body)
        .unwrap();
    assert_eq!(body.stops.len(), 4);
    assert_eq!(body.stops[0], (0.0, Color::Wood(g.tones.shadow)));
    assert_eq!(body.stops[1], (0.4, Color::Wood(g.tones.base)));
    assert_eq!(body.stops[2], (0.6, Color::Wood(g.tones.highlight)));

    let stave = scene
        .gradients
        .iter()
        .find(|gr| gr.id == GradientId::Stave)
        .unwrap();
    assert_eq!(
        stave.stops[3],
        (1.0, Color::Wood(g.tones.shadow.shift_lightness(5.0)))
    );
}

#[test]
fn body_outline_passes_through_rim_corners() {
    let g = resolve(&BarrelConfig::default());
    let scene = build_scene(&g);
    let DrawOp::Path { path, .. } = &scene.ops[1] else {
        panic!("expected body path");
    };
    let s = g.silhouette;
    let bbox = kurbo::Shape::bounding_box(path);
    assert!((bbox.y0 - s.top_y).abs() < 1e-9);
    assert!((bbox.y1 - s.bottom_y).abs() < 1e-9);
    // The belly pushes the outline past the rims.
    assert!(bbox.width() > s.top_width);
}

#[test]
fn label_text_sits_on_plate() {
    let g = resolve(&BarrelConfig::default());
    let scene = build_scene(&g);
    let Some(DrawOp::Text {
        text,
        anchor,
        font_size,
        ..
    }) = scene.ops.last()
    else {
        panic!("expected label text");
    };
    assert_eq!(text, "СЕЛЬСКАЯ КАЗНА");
    assert_eq!(*font_size, g.label.font_size);
    assert!((anchor.y - (60.0 + 220.0 * 0.58)).abs() < 1e-9);
}

#[test]
fn color_css_and_alpha() {
    assert_eq!(
        Color::Fixed(Rgba::hex(0x2d2d2f)).css_and_alpha(),
        ("#2d2d2f".to_string(), 1.0)
    );
    assert_eq!(
        Color::Fixed(Rgba::new(255, 243, 220, 0.8)).css_and_alpha(),
        ("#fff3dc".to_string(), 0.8)
    );
    assert_eq!(
        Color::Wood(Hsl::new(0.0, 0.0, 100.0)).css_and_alpha(),
        ("hsl(0, 0%, 100%)".to_string(), 1.0)
    );
    assert_eq!(
        Color::Wood(Hsl::new(28.0, 63.0, 17.0).shift_lightness(-0.5)).css_and_alpha(),
        ("hsl(28, 63%, 16.5%)".to_string(), 1.0)
    );
}
