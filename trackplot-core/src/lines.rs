use crate::diagnostics::Diagnostic;
use crate::domain::{boundaries, TrackDomain};
use crate::settings::LayoutSettings;
use definition::DepthExtent;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CoordRef {
    Paper,
    /// Real depth values on the `y1` axis.
    Depth,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeLayer {
    Above,
    Below,
}

/// A straight line segment.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Shape {
    pub x0: f64,
    pub x1: f64,
    pub y0: f64,
    pub y1: f64,
    pub x_ref: CoordRef,
    pub y_ref: CoordRef,
    pub color: String,
    pub width: f64,
    pub layer: ShapeLayer,
}

impl Shape {
    fn paper(x0: f64, x1: f64, y0: f64, y1: f64, settings: &LayoutSettings) -> Self {
        Self {
            x0,
            x1,
            y0,
            y1,
            x_ref: CoordRef::Paper,
            y_ref: CoordRef::Paper,
            color: settings.line_color.clone(),
            width: settings.line_width,
            layer: ShapeLayer::Above,
        }
    }

    pub fn is_vertical(&self) -> bool {
        self.x0 == self.x1
    }

    pub fn is_horizontal(&self) -> bool {
        self.y0 == self.y1
    }
}

fn verticals(domains: &[TrackDomain], y0: f64, y1: f64, settings: &LayoutSettings) -> Vec<Shape> {
    if domains.is_empty() {
        return Vec::new();
    }
    boundaries(domains)
        .into_iter()
        .map(|x| Shape::paper(x, x, y0, y1, settings))
        .collect()
}

/// Track separators over the header band plus its bottom and top edges.
pub fn header_lines(domains: &[TrackDomain], settings: &LayoutSettings) -> Vec<Shape> {
    let mut shapes = verticals(domains, settings.header_split, 1.0, settings);
    shapes.push(Shape::paper(0.0, 1.0, settings.header_split, settings.header_split, settings));
    shapes.push(Shape::paper(0.0, 1.0, 1.0, 1.0, settings));
    shapes
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MainLines {
    pub shapes: Vec<Shape>,
    /// True when explicit gridlines were drawn and the depth axis grid must be off.
    pub grid_replaced: bool,
    pub diagnostics: Vec<Diagnostic>,
}

/// Slack, in units of the interval, for multiples that land on a bound.
const GRID_INDEX_TOLERANCE: f64 = 1e-9;

/// First and last multiplier `k` with `k * interval` inside the extent.
fn gridline_indices(extent: DepthExtent, interval: f64) -> (f64, f64) {
    let first = (extent.min / interval - GRID_INDEX_TOLERANCE).ceil();
    let last = (extent.max / interval + GRID_INDEX_TOLERANCE).floor();
    (first, last)
}

/// Depth values of every multiple of `interval` inside `[extent.min, extent.max]`.
pub fn gridline_depths(extent: DepthExtent, interval: f64) -> Vec<f64> {
    let (first, last) = gridline_indices(extent, interval);
    (first as i64..=last as i64).map(|k| k as f64 * interval).collect()
}

/// Track separators over the main band, its bottom edge, and optional
/// horizontal depth gridlines drawn beneath the traces.
pub fn main_lines(
    domains: &[TrackDomain],
    depth: Option<DepthExtent>,
    grid_interval: Option<f64>,
    settings: &LayoutSettings,
) -> MainLines {
    let mut main = MainLines {
        shapes: verticals(domains, 0.0, settings.header_split, settings),
        ..MainLines::default()
    };
    main.shapes.push(Shape::paper(0.0, 1.0, 0.0, 0.0, settings));

    let Some(interval) = grid_interval else {
        return main;
    };
    if !(interval > 0.0 && interval.is_finite()) {
        main.diagnostics.push(Diagnostic::GridlinesSkipped {
            reason: format!("interval {interval} is not a positive number"),
        });
        return main;
    }
    let Some(extent) = depth else {
        main.diagnostics.push(Diagnostic::GridlinesSkipped {
            reason: "depth series is empty".to_string(),
        });
        return main;
    };
    let (first, last) = gridline_indices(extent, interval);
    let count = (last - first + 1.0).max(0.0);
    if count > settings.max_gridlines as f64 {
        main.diagnostics.push(Diagnostic::GridlinesSkipped {
            reason: format!(
                "{count} lines at interval {interval} exceed the limit of {}",
                settings.max_gridlines
            ),
        });
        return main;
    }

    let depths = gridline_depths(extent, interval);
    log::debug!("drawing {} depth gridlines every {interval}", depths.len());
    main.shapes.extend(depths.into_iter().map(|y| Shape {
        x0: 0.0,
        x1: 1.0,
        y0: y,
        y1: y,
        x_ref: CoordRef::Paper,
        y_ref: CoordRef::Depth,
        color: settings.grid_color.clone(),
        width: settings.line_width,
        layer: ShapeLayer::Below,
    }));
    main.grid_replaced = true;
    main
}
