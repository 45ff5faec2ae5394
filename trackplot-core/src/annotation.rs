use crate::axis::AxisSlot;
use crate::diagnostics::Diagnostic;
use crate::domain::TrackDomain;
use crate::settings::LayoutSettings;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum XAnchor {
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum YAnchor {
    Top,
    Middle,
    Bottom,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AnnotationRole {
    CurveName,
    Unit,
    RangeMin,
    RangeMax,
    DepthLabel,
}

/// Header text positioned in paper coordinates.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Annotation {
    pub role: AnnotationRole,
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub x_anchor: XAnchor,
    pub y_anchor: YAnchor,
    pub color: String,
    pub font_size: f64,
    pub bold: bool,
    pub text_angle: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub track: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub axis_index: Option<usize>,
}

/// How many curves are stacked in a track's header slot and where the top one sits.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnnotationStack {
    pub track: String,
    pub height: usize,
    pub top: f64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct HeaderAnnotations {
    pub annotations: Vec<Annotation>,
    pub stacks: Vec<AnnotationStack>,
    pub diagnostics: Vec<Diagnostic>,
}

fn format_bound(value: f64) -> String {
    format!("{value}")
}

pub fn depth_label(settings: &LayoutSettings) -> Annotation {
    Annotation {
        role: AnnotationRole::DepthLabel,
        text: settings.depth_label.clone(),
        x: settings.depth_label_x,
        y: settings.depth_label_y,
        x_anchor: XAnchor::Right,
        y_anchor: YAnchor::Top,
        color: settings.line_color.clone(),
        font_size: settings.name_font_size,
        bold: false,
        text_angle: -90.0,
        track: None,
        axis_index: None,
    }
}

/// Name, unit and range labels for every curve, stacked upward per track by
/// `stack_step`, followed by the depth-axis label.
///
/// `slots` must be in track then axis-index order, as `plan_axes` returns them.
pub fn place_annotations(
    slots: &[AxisSlot<'_>],
    domains: &[TrackDomain],
    ranges: &definition::RangeTable,
    settings: &LayoutSettings,
) -> HeaderAnnotations {
    let mut placed = HeaderAnnotations::default();

    for domain in domains {
        let curves: Vec<&AxisSlot<'_>> = slots.iter().filter(|s| s.track == domain.key).collect();
        let mut name_y = settings.header_base;

        for slot in &curves {
            let label = |role, text: String, x, y, x_anchor, y_anchor, font_size, bold| Annotation {
                role,
                text,
                x,
                y,
                x_anchor,
                y_anchor,
                color: slot.color.clone(),
                font_size,
                bold,
                text_angle: 0.0,
                track: Some(domain.key.clone()),
                axis_index: Some(slot.axis_index),
            };

            placed.annotations.push(label(
                AnnotationRole::CurveName,
                slot.curve.name.clone(),
                domain.center(),
                name_y,
                XAnchor::Center,
                YAnchor::Bottom,
                settings.name_font_size,
                true,
            ));

            if !slot.curve.unit.is_empty() {
                placed.annotations.push(label(
                    AnnotationRole::Unit,
                    slot.curve.unit.clone(),
                    domain.center(),
                    name_y - settings.unit_offset,
                    XAnchor::Center,
                    YAnchor::Top,
                    settings.unit_font_size,
                    false,
                ));
            }

            let quantitative = !settings.is_categorical(&domain.key) && slot.curve.labels.is_none();
            let range = ranges
                .entry(&domain.key)
                .and_then(|entry| entry.range(slot.axis_index));
            if let (true, Some(range)) = (quantitative, range) {
                placed.annotations.push(label(
                    AnnotationRole::RangeMin,
                    format_bound(range.start),
                    domain.start,
                    name_y,
                    XAnchor::Left,
                    YAnchor::Middle,
                    settings.range_font_size,
                    false,
                ));
                placed.annotations.push(label(
                    AnnotationRole::RangeMax,
                    format_bound(range.end),
                    domain.end,
                    name_y,
                    XAnchor::Right,
                    YAnchor::Middle,
                    settings.range_font_size,
                    false,
                ));
            }

            name_y += settings.stack_step;
        }

        let top = name_y - settings.stack_step;
        if top > 1.0 {
            placed.diagnostics.push(Diagnostic::HeaderOverflow {
                track: domain.key.clone(),
                curves: curves.len(),
                top,
            });
        }
        placed.stacks.push(AnnotationStack {
            track: domain.key.clone(),
            height: curves.len(),
            top,
        });
    }

    placed.annotations.push(depth_label(settings));
    placed
}
