use definition::{
    validate_ratios, validate_tracks, CurveRef, DepthExtent, DepthRow, PlotDefinition, RangeEntry,
    RangeTable, TrackAssignment, TrackConfigError, TrackRatios,
};

fn sample_definition() -> PlotDefinition {
    PlotDefinition {
        name: "well-a".to_string(),
        grid_interval: Some(50.0),
        tracks: TrackAssignment::new()
            .with_track("GR", vec![CurveRef::new("GR", "GAPI").with_color("darkgreen")])
            .with_track(
                "RT_RO",
                vec![CurveRef::new("RT", "OHMM"), CurveRef::new("RO", "OHMM")],
            ),
        ratios: TrackRatios::new().with_ratio("GR", 1.0).with_ratio("RT_RO", 2.0),
        ranges: RangeTable::new()
            .with_entry("GR", RangeEntry::linear(vec![[0.0, 250.0]]))
            .with_entry(
                "RT_RO",
                RangeEntry::log(vec![[0.02, 2000.0], [0.02, 2000.0]]),
            ),
    }
}

#[test]
fn save_and_load_definition_json() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("plot.json");
    let definition = sample_definition();

    definition.save_to_file(&path).unwrap();
    let loaded = PlotDefinition::load_from_file(&path).unwrap();

    assert_eq!(loaded.name, "well-a");
    assert_eq!(loaded.grid_interval, Some(50.0));
    assert_eq!(loaded.tracks, definition.tracks);
    assert_eq!(loaded.ratios, definition.ratios);
    assert_eq!(loaded.ranges, definition.ranges);
}

#[test]
fn save_and_load_definition_toml() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("plot.toml");
    let definition = sample_definition();

    definition.save_to_file(&path).unwrap();
    let loaded = PlotDefinition::load_from_file(&path).unwrap();

    assert_eq!(loaded.tracks.len(), 2);
    assert_eq!(loaded.ratios.get("RT_RO"), Some(2.0));
    assert!(loaded.ranges.entry("RT_RO").unwrap().log);
}

#[test]
fn definition_json_keeps_track_order() {
    let json = r#"{
        "tracks": [
            {"key": "RT", "curves": [{"name": "RT", "unit": "OHMM"}]},
            {"key": "GR", "curves": [{"name": "GR"}]}
        ],
        "ratios": {"GR": 1, "RT": 1}
    }"#;
    let definition: PlotDefinition = serde_json::from_str(json).unwrap();
    let keys: Vec<&str> = definition.tracks.keys().collect();
    assert_eq!(keys, vec!["RT", "GR"]);
    assert_eq!(definition.tracks.get("GR").unwrap().curves[0].unit, "");
    assert!(definition.ranges.entry("GR").is_none());
    assert!(definition.grid_interval.is_none());
}

#[test]
fn range_lookup_is_explicitly_optional() {
    let table = RangeTable::new().with_entry(
        "NPHI_RHOB",
        RangeEntry::linear(vec![[0.6, 0.0], [1.71, 2.71]]),
    );
    let entry = table.entry("NPHI_RHOB").unwrap();
    let nphi = entry.range(0).unwrap();
    assert_eq!((nphi.start, nphi.end), (0.6, 0.0));
    assert_eq!((nphi.lo(), nphi.hi()), (0.0, 0.6));
    assert!(entry.range(2).is_none());
    assert!(table.entry("SWGRAD").is_none());
}

#[test]
fn merged_table_prefers_overrides() {
    let base = RangeTable::new()
        .with_entry("GR", RangeEntry::linear(vec![[0.0, 250.0]]))
        .with_entry("SP", RangeEntry::linear(vec![[-160.0, 40.0]]));
    let overrides = RangeTable::new().with_entry("GR", RangeEntry::linear(vec![[0.0, 150.0]]));
    let merged = base.merged(&overrides);
    assert_eq!(merged.entry("GR").unwrap().ranges, vec![[0.0, 150.0]]);
    assert!(merged.entry("SP").is_some());
}

#[test]
fn ratio_rules() {
    assert!(matches!(
        validate_ratios(&[]),
        Err(TrackConfigError::InvalidTrackConfiguration(_))
    ));
    assert!(matches!(
        validate_ratios(&[0.0, 0.0]),
        Err(TrackConfigError::InvalidTrackConfiguration(_))
    ));
    assert!(matches!(
        validate_ratios(&[1.0, -1.0]),
        Err(TrackConfigError::InvalidTrackConfiguration(_))
    ));
    assert!(matches!(
        validate_ratios(&[1.0, f64::NAN]),
        Err(TrackConfigError::InvalidTrackConfiguration(_))
    ));
    assert_eq!(validate_ratios(&[0.5, 1.5]).unwrap(), 2.0);
}

#[test]
fn track_rules() {
    let tracks = TrackAssignment::new()
        .with_track("GR", vec![CurveRef::new("GR", "GAPI")])
        .with_track("RT", vec![CurveRef::new("RT", "OHMM")]);

    let err = validate_tracks(&tracks, &TrackRatios::new().with_ratio("GR", 1.0)).unwrap_err();
    assert_eq!(err, TrackConfigError::MissingTrackRatio("RT".to_string()));

    let ratios = TrackRatios::new().with_ratio("GR", 1.0).with_ratio("RT", 3.0);
    assert_eq!(validate_tracks(&tracks, &ratios).unwrap(), vec![1.0, 3.0]);

    let doubled = tracks.with_track("GR", vec![CurveRef::new("GR_NORM", "GAPI")]);
    let err = validate_tracks(&doubled, &ratios).unwrap_err();
    assert_eq!(err, TrackConfigError::DuplicateTrack("GR".to_string()));
}

#[test]
fn depth_extent_ignores_missing_depths() {
    let rows: Vec<DepthRow> = serde_json::from_str(
        r#"[
            {"DEPTH": 1520.5, "GR": 80.1},
            {"DEPTH": null, "GR": 70.0},
            {"depth": 1500.0, "MARKER": "B1"},
            {"DEPTH": 1510.0}
        ]"#,
    )
    .unwrap();
    let extent = DepthExtent::from_rows(&rows).unwrap();
    assert_eq!(extent.min, 1500.0);
    assert_eq!(extent.max, 1520.5);
    assert_eq!(rows[0].values.get("GR"), Some(&serde_json::json!(80.1)));

    assert!(DepthExtent::from_rows(&[]).is_none());
    assert!(DepthExtent::from_depths([f64::NAN]).is_none());
    assert_eq!(
        DepthExtent::from_depths([3.0, 1.0, 2.0]),
        Some(DepthExtent { min: 1.0, max: 3.0 })
    );
}
