use crate::colors::ColorAssignment;
use crate::diagnostics::Diagnostic;
use crate::domain::TrackDomain;
use crate::settings::LayoutSettings;
use crate::ticks::{linspace, log_ticks};
use definition::{CurveRange, CurveRef, RangeTable, TrackAssignment};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScaleType {
    Linear,
    Log,
}

/// A curve's axis placement before any range styling.
#[derive(Debug, Clone)]
pub struct AxisSlot<'a> {
    pub id: String,
    pub primary_id: String,
    pub track: &'a str,
    pub axis_index: usize,
    pub curve: &'a CurveRef,
    pub color: String,
    pub domain: [f64; 2],
}

impl AxisSlot<'_> {
    pub fn is_primary(&self) -> bool {
        self.axis_index == 0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AxisDefinition {
    pub id: String,
    pub track: String,
    pub axis_index: usize,
    pub curve: String,
    pub domain: [f64; 2],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overlaying: Option<String>,
    /// Paper height of the axis line inside the header band.
    pub position: f64,
    pub color: String,
    pub line_width: f64,
    pub tick_font_size: f64,
    pub show_grid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grid_color: Option<String>,
    pub scale: ScaleType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range: Option<[f64; 2]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tick_values: Option<Vec<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tick_text: Option<Vec<String>>,
}

impl AxisDefinition {
    pub fn is_overlay(&self) -> bool {
        self.overlaying.is_some()
    }

    pub fn is_styled(&self) -> bool {
        self.tick_values.is_some()
    }
}

/// Assigns axis ids: the first curve of track `i` owns `x{i+1}`; overlay axes
/// are numbered after all primaries, in track then curve order.
pub fn plan_axes<'a>(
    tracks: &'a TrackAssignment,
    domains: &[TrackDomain],
    colors: &ColorAssignment,
    settings: &LayoutSettings,
) -> Vec<AxisSlot<'a>> {
    let mut slots = Vec::with_capacity(tracks.curve_count());
    let mut next_overlay = tracks.len() + 1;

    for ((track_idx, track), domain) in tracks.iter().enumerate().zip(domains) {
        let primary_id = format!("x{}", track_idx + 1);
        for (axis_index, curve) in track.curves.iter().enumerate() {
            let id = if axis_index == 0 {
                primary_id.clone()
            } else {
                let id = format!("x{next_overlay}");
                next_overlay += 1;
                id
            };
            let color = colors
                .color(&track.key, axis_index)
                .unwrap_or(settings.default_curve_color.as_str())
                .to_string();
            slots.push(AxisSlot {
                id,
                primary_id: primary_id.clone(),
                track: &track.key,
                axis_index,
                curve,
                color,
                domain: domain.bounds(),
            });
        }
    }
    slots
}

#[derive(Debug, Clone, Default)]
pub struct StyledAxes {
    pub axes: Vec<AxisDefinition>,
    pub diagnostics: Vec<Diagnostic>,
}

enum Ticks {
    Unstyled,
    Categorical,
    Linear(CurveRange),
    Log(CurveRange),
}

fn finite(range: CurveRange) -> bool {
    range.start.is_finite() && range.end.is_finite()
}

pub fn style_axes(slots: &[AxisSlot<'_>], ranges: &RangeTable, settings: &LayoutSettings) -> StyledAxes {
    let mut styled = StyledAxes::default();

    for slot in slots {
        let position = (settings.header_base + slot.axis_index as f64 * settings.stack_step
            - settings.axis_line_offset)
            .min(1.0);
        let mut axis = AxisDefinition {
            id: slot.id.clone(),
            track: slot.track.to_string(),
            axis_index: slot.axis_index,
            curve: slot.curve.name.clone(),
            domain: slot.domain,
            overlaying: (!slot.is_primary()).then(|| slot.primary_id.clone()),
            position,
            color: slot.color.clone(),
            line_width: settings.axis_line_width,
            tick_font_size: settings.tick_font_size,
            show_grid: slot.is_primary(),
            grid_color: slot.is_primary().then(|| settings.grid_color.clone()),
            scale: ScaleType::Linear,
            range: None,
            tick_values: None,
            tick_text: None,
        };

        let entry = ranges.entry(slot.track);
        let configured = entry
            .and_then(|e| e.range(slot.axis_index))
            .filter(|r| finite(*r));
        let log_flagged = entry.is_some_and(|e| e.log);

        let ticks = match (configured, &slot.curve.labels) {
            (_, Some(_)) => Ticks::Categorical,
            (None, None) => Ticks::Unstyled,
            (Some(range), None) if log_flagged && range.lo() > 0.0 => Ticks::Log(range),
            (Some(range), None) => {
                if log_flagged {
                    styled.diagnostics.push(Diagnostic::LogScaleFallback {
                        track: slot.track.to_string(),
                        axis_index: slot.axis_index,
                        start: range.start,
                        end: range.end,
                    });
                }
                Ticks::Linear(range)
            }
        };

        match ticks {
            Ticks::Unstyled => {
                styled.diagnostics.push(Diagnostic::UnstyledAxis {
                    track: slot.track.to_string(),
                    axis_index: slot.axis_index,
                    curve: slot.curve.name.clone(),
                });
            }
            Ticks::Categorical => {
                if let Some(labels) = &slot.curve.labels {
                    axis.tick_values = Some(labels.keys().map(|code| f64::from(*code)).collect());
                    axis.tick_text = Some(labels.values().cloned().collect());
                }
                axis.range = configured.map(|r| [r.start, r.end]);
            }
            Ticks::Linear(range) => {
                axis.tick_values = Some(linspace(range.start, range.end, settings.linear_tick_count));
                axis.range = Some([range.start, range.end]);
            }
            Ticks::Log(range) => {
                axis.scale = ScaleType::Log;
                axis.tick_values = Some(log_ticks(range.lo(), range.hi()));
                axis.range = Some([range.start.log10(), range.end.log10()]);
            }
        }

        styled.axes.push(axis);
    }

    log::debug!(
        "styled {} axes, {} left unstyled",
        styled.axes.len(),
        styled.axes.iter().filter(|a| !a.is_styled()).count()
    );
    styled
}
