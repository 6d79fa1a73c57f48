use super::*;

#[test]
fn spec_table_covers_every_param_once() {
    let keys: Vec<_> = Param::ALL.iter().map(|p| p.spec().key).collect();
    assert_eq!(
        keys,
        [
            "staves",
            "height",
            "bulge",
            "bandCount",
            "woodHue",
            "woodSaturation",
            "woodLightness",
            "charLevel",
            "gloss"
        ]
    );
    for p in Param::ALL {
        let spec = p.spec();
        assert!(spec.min < spec.max, "{p:?}");
        assert!(spec.step > 0.0, "{p:?}");
    }
}

#[test]
fn readouts_match_control_surface() {
    assert_eq!(Param::Staves.format(14.0), "14");
    assert_eq!(Param::Height.format(0.5), "100%");
    assert_eq!(Param::Height.format(0.0), "60%");
    assert_eq!(Param::Height.format(1.0), "140%");
    assert_eq!(Param::Bulge.format(0.43), "43%");
    assert_eq!(Param::BandCount.format(3.0), "3");
    assert_eq!(Param::WoodHue.format(28.0), "28°");
    assert_eq!(Param::WoodSaturation.format(63.0), "63%");
    assert_eq!(Param::WoodLightness.format(43.0), "43%");
    assert_eq!(Param::CharLevel.format(0.326), "33%");
    assert_eq!(Param::Gloss.format(0.0), "0%");
}

#[test]
fn param_parses_camel_and_snake_keys() {
    assert_eq!("bandCount".parse::<Param>().unwrap(), Param::BandCount);
    assert_eq!("band_count".parse::<Param>().unwrap(), Param::BandCount);
    assert_eq!("wood-hue".parse::<Param>().unwrap(), Param::WoodHue);
    assert!("hoops".parse::<Param>().is_err());
}

#[test]
fn override_parsing() {
    assert_eq!(
        "staves=16".parse::<Override>().unwrap(),
        Override::Param(Param::Staves, 16.0)
    );
    assert_eq!(
        "label=ВИНО 1987".parse::<Override>().unwrap(),
        Override::Label("ВИНО 1987".to_string())
    );
    assert!("staves".parse::<Override>().is_err());
    assert!("staves=lots".parse::<Override>().is_err());
    assert!("gloss=inf".parse::<Override>().is_err());
    assert!("nope=1".parse::<Override>().is_err());
}

#[test]
fn with_param_replaces_one_field_only() {
    let base = BarrelConfig::default();
    let next = base.with_param(Param::Bulge, 0.9);
    assert_eq!(next.bulge, 0.9);
    assert_eq!(base.bulge, 0.43);
    assert_eq!(next.with_param(Param::Bulge, 0.43), base);

    let next = base.with_param(Param::Staves, 7.6);
    assert_eq!(next.staves, 8);
    let next = base.with_param(Param::BandCount, -2.0);
    assert_eq!(next.band_count, 0);
}

#[test]
fn with_label_truncates() {
    let cfg = BarrelConfig::default().with_label("ОЧЕНЬ ДЛИННАЯ МАРКИРОВКА");
    assert_eq!(cfg.label_len(), 18);
    cfg.validate().unwrap();

    let cfg = cfg.with_override(&Override::Label(String::new()));
    assert!(cfg.label.is_empty());
}

#[test]
fn sanitized_snaps_into_slider_ranges() {
    let cfg = BarrelConfig {
        staves: 200,
        height: -1.0,
        bulge: 3.0,
        band_count: 0,
        wood_hue: 400.0,
        wood_saturation: 5.0,
        wood_lightness: 99.0,
        char_level: 1.5,
        gloss: -0.2,
        label: "x".repeat(40),
    }
    .sanitized();

    assert_eq!(cfg.staves, 24);
    assert_eq!(cfg.height, 0.0);
    assert_eq!(cfg.bulge, 1.0);
    assert_eq!(cfg.band_count, 1);
    assert_eq!(cfg.wood_hue, 360.0);
    assert_eq!(cfg.wood_saturation, 20.0);
    assert_eq!(cfg.wood_lightness, 75.0);
    assert_eq!(cfg.char_level, 1.0);
    assert_eq!(cfg.gloss, 0.0);
    assert_eq!(cfg.label_len(), 18);
}

#[test]
fn sanitized_keeps_in_range_config() {
    let cfg = BarrelConfig::default();
    assert_eq!(cfg.sanitized(), cfg);
}

#[test]
fn out_of_range_lists_values_sanitizing_moves() {
    assert!(BarrelConfig::default().out_of_range().is_empty());

    let cfg = BarrelConfig {
        wood_saturation: 10.0,
        wood_lightness: 95.0,
        ..BarrelConfig::default()
    };
    assert_eq!(
        cfg.out_of_range(),
        [(Param::WoodSaturation, 10.0), (Param::WoodLightness, 95.0)]
    );
    assert!(cfg.sanitized().out_of_range().is_empty());
}
