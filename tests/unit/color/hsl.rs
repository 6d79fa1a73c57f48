use super::*;

#[test]
fn shift_lightness_clamps_both_ends() {
    let c = Hsl::new(28.0, 63.0, 43.0);
    assert_eq!(c.shift_lightness(-500.0).l, 0.0);
    assert_eq!(c.shift_lightness(500.0).l, 100.0);
    assert_eq!(c.shift_lightness(7.0).l, 50.0);
}

#[test]
fn shift_lightness_passes_hue_and_saturation_through() {
    let c = Hsl::new(311.5, 12.25, 80.0);
    for delta in [-1000.0, -18.0, 0.0, 14.0, 1000.0] {
        let out = shift_lightness(c, delta);
        assert_eq!(out.h, c.h);
        assert_eq!(out.s, c.s);
        assert!((0.0..=100.0).contains(&out.l));
    }
}

#[test]
fn display_color_uses_css_hsl_notation() {
    assert_eq!(
        to_display_color(Hsl::new(28.0, 63.0, 43.0)),
        "hsl(28, 63%, 43%)"
    );
    assert_eq!(
        Hsl::new(28.0, 63.0, 17.0).shift_lightness(-0.5).to_display_color(),
        "hsl(28, 63%, 16.5%)"
    );
}

#[test]
fn rgb_conversion_primary_and_gray() {
    assert_eq!(Hsl::new(0.0, 100.0, 50.0).to_rgb8(), [255, 0, 0]);
    assert_eq!(Hsl::new(120.0, 100.0, 50.0).to_rgb8(), [0, 255, 0]);
    assert_eq!(Hsl::new(240.0, 100.0, 50.0).to_rgb8(), [0, 0, 255]);
    assert_eq!(Hsl::new(200.0, 0.0, 50.0).to_rgb8(), [128, 128, 128]);
    assert_eq!(Hsl::new(0.0, 0.0, 0.0).to_hex(), "#000000");
    assert_eq!(Hsl::new(0.0, 0.0, 100.0).to_hex(), "#ffffff");
}

#[test]
fn rgb_conversion_wraps_hue() {
    assert_eq!(
        Hsl::new(360.0, 100.0, 50.0).to_rgb8(),
        Hsl::new(0.0, 100.0, 50.0).to_rgb8()
    );
}
