use definition::{CurveRef, RangeEntry, RangeTable, TrackAssignment, TrackRatios};
use palette::ColorAllocator;
use trackplot_core::annotation::{AnnotationRole, XAnchor};
use trackplot_core::{Diagnostic, Layout, LayoutComposer, LayoutRequest};

fn layout(tracks: &TrackAssignment, ranges: &RangeTable) -> Layout {
    let mut ratios = TrackRatios::new();
    for key in tracks.keys() {
        ratios.insert(key, 1.0);
    }
    let request = LayoutRequest::new(tracks, &ratios, ranges);
    LayoutComposer::default()
        .compose(&request, &mut ColorAllocator::seeded(5))
        .expect("layout")
        .layout
}

fn roles(layout: &Layout, track: &str) -> Vec<AnnotationRole> {
    layout
        .annotations
        .iter()
        .filter(|a| a.track.as_deref() == Some(track))
        .map(|a| a.role)
        .collect()
}

#[test]
fn styled_curve_gets_name_unit_and_range() {
    let tracks = TrackAssignment::new().with_track("GR", vec![CurveRef::new("GR", "GAPI")]);
    let ranges = RangeTable::new().with_entry("GR", RangeEntry::linear(vec![[0.0, 250.0]]));
    let layout = layout(&tracks, &ranges);

    assert_eq!(
        roles(&layout, "GR"),
        vec![
            AnnotationRole::CurveName,
            AnnotationRole::Unit,
            AnnotationRole::RangeMin,
            AnnotationRole::RangeMax,
        ]
    );
    let name = &layout.annotations[0];
    assert!(name.bold);
    assert_eq!(name.text, "GR");
    assert_eq!(name.x, 0.5);
    assert_eq!(name.y, 0.85);

    let unit = &layout.annotations[1];
    assert!(unit.y < name.y);
    assert!(!unit.bold);

    let min = &layout.annotations[2];
    let max = &layout.annotations[3];
    assert_eq!((min.text.as_str(), min.x, min.x_anchor), ("0", 0.0, XAnchor::Left));
    assert_eq!((max.text.as_str(), max.x, max.x_anchor), ("250", 1.0, XAnchor::Right));
    assert_eq!(min.y, name.y);
    assert_eq!(layout.stack("GR").map(|s| s.height), Some(1));
}

#[test]
fn unstyled_curve_without_unit_gets_only_its_name() {
    let tracks = TrackAssignment::new().with_track("DNS", vec![CurveRef::new("DNS", "")]);
    let layout = layout(&tracks, &RangeTable::new());
    assert_eq!(roles(&layout, "DNS"), vec![AnnotationRole::CurveName]);
}

#[test]
fn stacked_curves_step_upward() {
    let tracks = TrackAssignment::new().with_track(
        "RT_RHOB",
        vec![
            CurveRef::new("RT", "OHMM"),
            CurveRef::new("RHOB", "G/C3"),
            CurveRef::new("RT_NORM", "OHMM"),
        ],
    );
    let layout = layout(&tracks, &RangeTable::new());

    let names: Vec<f64> = layout
        .annotations
        .iter()
        .filter(|a| a.role == AnnotationRole::CurveName)
        .map(|a| a.y)
        .collect();
    assert_eq!(names.len(), 3);
    for pair in names.windows(2) {
        assert!((pair[1] - pair[0] - 0.04).abs() < 1e-12);
    }
    let stack = layout.stack("RT_RHOB").expect("stack");
    assert_eq!(stack.height, 3);
    assert!((stack.top - names[2]).abs() < 1e-12);

    let texts: Vec<&str> = layout
        .annotations
        .iter()
        .filter(|a| a.role == AnnotationRole::CurveName)
        .map(|a| a.text.as_str())
        .collect();
    assert_eq!(texts, vec!["RT", "RHOB", "RT_NORM"]);
}

#[test]
fn annotation_colors_match_axis_colors() {
    let tracks = TrackAssignment::new().with_track(
        "RT_F",
        vec![
            CurveRef::new("RT", "OHMM").with_color("tomato"),
            CurveRef::new("F", "V/V"),
        ],
    );
    let ranges = RangeTable::new().with_entry(
        "RT_F",
        RangeEntry::log(vec![[0.02, 2000.0], [0.02, 2000.0]]),
    );
    let layout = layout(&tracks, &ranges);

    for axis in &layout.axes {
        let colors: Vec<&str> = layout
            .annotations
            .iter()
            .filter(|a| a.axis_index == Some(axis.axis_index))
            .map(|a| a.color.as_str())
            .collect();
        assert_eq!(colors.len(), 4);
        assert!(colors.iter().all(|c| *c == axis.color));
    }
}

#[test]
fn categorical_keys_skip_range_labels() {
    let tracks = TrackAssignment::new().with_track("XPT", vec![CurveRef::new("XPT", "")]);
    let ranges = RangeTable::new().with_entry("XPT", RangeEntry::linear(vec![[0.0, 1.0]]));
    let layout = layout(&tracks, &ranges);
    assert_eq!(roles(&layout, "XPT"), vec![AnnotationRole::CurveName]);
    assert!(layout.axes[0].is_styled());
}

#[test]
fn depth_label_is_rotated_left_of_tracks() {
    let tracks = TrackAssignment::new().with_track("GR", vec![CurveRef::new("GR", "GAPI")]);
    let layout = layout(&tracks, &RangeTable::new());

    let depth: Vec<_> = layout
        .annotations
        .iter()
        .filter(|a| a.role == AnnotationRole::DepthLabel)
        .collect();
    assert_eq!(depth.len(), 1);
    assert_eq!(depth[0].text_angle, -90.0);
    assert!(depth[0].x < 0.0);
    assert!(depth[0].track.is_none());
}

#[test]
fn overfull_track_header_is_reported() {
    let curves = ["RT", "RO", "RXO", "RT_NORM", "RT_RO"]
        .into_iter()
        .map(|name| CurveRef::new(name, "OHMM"))
        .collect();
    let tracks = TrackAssignment::new().with_track("RES", curves);
    let ratios = TrackRatios::new().with_ratio("RES", 1.0);
    let ranges = RangeTable::new();
    let output = LayoutComposer::default()
        .compose(
            &LayoutRequest::new(&tracks, &ratios, &ranges),
            &mut ColorAllocator::seeded(5),
        )
        .expect("layout");

    let stack = output.layout.stack("RES").expect("stack");
    assert_eq!(stack.height, 5);
    assert!(stack.top > 1.0);
    let overflow: Vec<_> = output
        .diagnostics
        .entries()
        .iter()
        .filter(|d| matches!(d, Diagnostic::HeaderOverflow { .. }))
        .collect();
    assert_eq!(
        overflow,
        vec![&Diagnostic::HeaderOverflow {
            track: "RES".to_string(),
            curves: 5,
            top: stack.top,
        }]
    );

    let four = TrackAssignment::new().with_track(
        "RES",
        vec![
            CurveRef::new("RT", "OHMM"),
            CurveRef::new("RO", "OHMM"),
            CurveRef::new("RXO", "OHMM"),
            CurveRef::new("RT_NORM", "OHMM"),
        ],
    );
    let output = LayoutComposer::default()
        .compose(
            &LayoutRequest::new(&four, &ratios, &ranges),
            &mut ColorAllocator::seeded(5),
        )
        .expect("layout");
    assert!(!output
        .diagnostics
        .entries()
        .iter()
        .any(|d| matches!(d, Diagnostic::HeaderOverflow { .. })));
}
