use definition::{CurveRef, RangeTable, TrackAssignment, TrackRatios};
use palette::ColorAllocator;
use trackplot_core::annotation::AnnotationRole;
use trackplot_core::{
    load_layout_settings_file, normalize_layout_settings, save_layout_settings_file,
    LayoutComposer, LayoutError, LayoutRequest, LayoutSettings,
};

#[test]
fn defaults_match_the_band_layout() {
    let settings = LayoutSettings::default();
    assert_eq!(settings.header_split, 0.8);
    assert_eq!(settings.stack_step, 0.04);
    assert_eq!(settings.linear_tick_count, 5);
    assert!(settings.is_categorical("CLASS"));
    assert!(settings.is_categorical("MARKER"));
    assert!(!settings.is_categorical("GR"));
    assert_eq!(normalize_layout_settings(settings.clone()), Ok(settings));
}

#[test]
fn normalize_rejects_broken_bands() {
    let cases = [
        LayoutSettings {
            header_split: 1.0,
            ..LayoutSettings::default()
        },
        LayoutSettings {
            header_split: 0.9,
            header_base: 0.85,
            ..LayoutSettings::default()
        },
        LayoutSettings {
            stack_step: 0.0,
            ..LayoutSettings::default()
        },
        LayoutSettings {
            linear_tick_count: 1,
            ..LayoutSettings::default()
        },
        LayoutSettings {
            max_gridlines: 0,
            ..LayoutSettings::default()
        },
    ];
    for settings in cases {
        let err = normalize_layout_settings(settings).expect_err("invalid settings");
        assert!(matches!(err, LayoutError::InvalidSettings(_)));
    }
}

#[test]
fn normalize_clamps_negative_widths() {
    let settings = normalize_layout_settings(LayoutSettings {
        line_width: -2.0,
        unit_offset: -0.1,
        ..LayoutSettings::default()
    })
    .expect("valid");
    assert_eq!(settings.line_width, 0.0);
    assert_eq!(settings.unit_offset, 0.0);
}

#[test]
fn composer_refuses_invalid_settings() {
    let result = LayoutComposer::new(LayoutSettings {
        header_split: 0.0,
        ..LayoutSettings::default()
    });
    assert!(result.is_err());
}

#[test]
fn toml_and_json_files_round_trip() {
    let dir = tempfile::tempdir().expect("tempdir");
    let settings = LayoutSettings {
        stack_step: 0.05,
        depth_label: "MD (ft)".to_string(),
        ..LayoutSettings::default()
    };
    for name in ["layout.toml", "layout.json"] {
        let path = dir.path().join(name);
        save_layout_settings_file(&path, &settings).expect("save");
        let loaded = load_layout_settings_file(&path).expect("load");
        assert_eq!(loaded, settings);
    }
}

#[test]
fn partial_file_keeps_defaults() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("layout.toml");
    std::fs::write(&path, "header_split = 0.75\nheader_base = 0.8\n").expect("write");

    let loaded = load_layout_settings_file(&path).expect("load");
    assert_eq!(loaded.header_split, 0.75);
    assert_eq!(loaded.header_base, 0.8);
    assert_eq!(loaded.stack_step, 0.04);
    assert_eq!(loaded.grid_color, "gainsboro");
}

#[test]
fn missing_or_invalid_file_is_reported() {
    let dir = tempfile::tempdir().expect("tempdir");
    let err = load_layout_settings_file(&dir.path().join("absent.json")).expect_err("missing");
    assert!(err.to_string().contains("Failed to read layout settings file"));

    let path = dir.path().join("broken.json");
    std::fs::write(&path, "{ not json").expect("write");
    let err = load_layout_settings_file(&path).expect_err("broken");
    assert!(err.to_string().contains("Failed to parse layout settings file"));

    let path = dir.path().join("bad.json");
    std::fs::write(&path, r#"{"stack_step": -1.0}"#).expect("write");
    let err = load_layout_settings_file(&path).expect_err("invalid");
    assert!(matches!(err, LayoutError::InvalidSettings(_)));
}

#[test]
fn custom_step_and_split_reach_the_layout() {
    let settings = LayoutSettings {
        header_split: 0.7,
        header_base: 0.75,
        stack_step: 0.06,
        ..LayoutSettings::default()
    };
    let tracks = TrackAssignment::new().with_track(
        "RT_RO",
        vec![CurveRef::new("RT", "OHMM"), CurveRef::new("RO", "OHMM")],
    );
    let ratios = TrackRatios::new().with_ratio("RT_RO", 1.0);
    let ranges = RangeTable::new();
    let layout = LayoutComposer::new(settings)
        .expect("settings")
        .compose(
            &LayoutRequest::new(&tracks, &ratios, &ranges),
            &mut ColorAllocator::seeded(2),
        )
        .expect("layout")
        .layout;

    let names: Vec<f64> = layout
        .annotations
        .iter()
        .filter(|a| a.role == AnnotationRole::CurveName)
        .map(|a| a.y)
        .collect();
    assert_eq!(names[0], 0.75);
    assert!((names[1] - 0.81).abs() < 1e-12);
    assert_eq!(layout.depth_axis.domain, [0.0, 0.7]);
    assert!(layout.shapes.iter().any(|s| s.y0 == 0.7 && s.y1 == 0.7));
}

#[test]
fn uppercase_toml_extension_is_read_as_toml() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("LAYOUT.TOML");
    std::fs::write(&path, "stack_step = 0.05\n").expect("write");

    let loaded = load_layout_settings_file(&path).expect("load");
    assert_eq!(loaded.stack_step, 0.05);

    save_layout_settings_file(&path, &loaded).expect("save");
    let text = std::fs::read_to_string(&path).expect("read");
    assert!(text.contains("stack_step = 0.05"));
}
