use super::*;
use crate::{
    config::model::BarrelConfig, geometry::resolver::resolve, scene::build::build_scene,
};

fn svg_for(cfg: &BarrelConfig) -> String {
    render_svg(&build_scene(&resolve(cfg))).unwrap()
}

#[test]
fn document_shell_and_gradients() {
    let svg = svg_for(&BarrelConfig::default());
    assert!(svg.starts_with(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="400" height="420" viewBox="0 0 400 420">"#
    ));
    assert!(svg.trim_end().ends_with("</svg>"));
    for id in ["barrel-body", "barrel-stave", "metal-band"] {
        assert!(svg.contains(&format!(r#"<linearGradient id="{id}""#)), "{id}");
        assert!(svg.contains(&format!("url(#{id})")), "{id}");
    }
    assert!(svg.contains(r##"<stop offset="40%" stop-color="#5b5d60"/>"##));
}

#[test]
fn one_path_per_stave_and_two_per_band() {
    let cfg = BarrelConfig {
        staves: 9,
        band_count: 4,
        ..BarrelConfig::default()
    };
    let svg = svg_for(&cfg);
    assert_eq!(svg.matches(r#"stroke="url(#barrel-stave)""#).count(), 8);
    assert_eq!(svg.matches(r#"stroke="url(#metal-band)""#).count(), 4);
    assert_eq!(svg.matches(r##"stroke="#ffffff" stroke-opacity="0.12""##).count(), 4);
    assert_eq!(svg.matches("<ellipse").count(), 2);
}

#[test]
fn label_text_is_escaped() {
    let svg = svg_for(&BarrelConfig::default().with_label("Ром & <ко>"));
    assert!(svg.contains(">РОМ &amp; &lt;КО&gt;</text>"));
    assert!(svg.contains(r#"font-weight="600""#));
}

#[test]
fn empty_label_has_no_text_element() {
    let svg = svg_for(&BarrelConfig::default().with_label(""));
    assert!(!svg.contains("<text"));
}

#[test]
fn identical_configs_render_identically() {
    let cfg = BarrelConfig::default();
    assert_eq!(svg_for(&cfg), svg_for(&cfg.clone()));
}

#[test]
fn escape_xml_covers_markup_chars() {
    assert_eq!(
        escape_xml(r#"a&b<c>"d"'e'"#),
        "a&amp;b&lt;c&gt;&quot;d&quot;&apos;e&apos;"
    );
    assert_eq!(escape_xml("ВИНО"), "ВИНО");
}

#[test]
fn wood_stops_keep_fractional_lightness() {
    let cfg = BarrelConfig {
        wood_lightness: 43.0,
        char_level: 0.3,
        ..BarrelConfig::default()
    };
    let svg = svg_for(&cfg);
    // shadow = 43 - 18 - 7.5
    assert!(svg.contains(r#"<stop offset="0%" stop-color="hsl(28, 63%, 17.5%)"/>"#));
}
