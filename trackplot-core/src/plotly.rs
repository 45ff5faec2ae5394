use crate::annotation::Annotation;
use crate::axis::{AxisDefinition, ScaleType};
use crate::layout::{DepthAxis, Layout};
use crate::lines::{CoordRef, Shape};
use serde_json::{json, Map, Value};

/// `x3` becomes `xaxis3`, the key Plotly expects in a layout object; the
/// first axis of each direction has no number (`x1` is `xaxis`).
fn layout_key(id: &str) -> String {
    let mut chars = id.chars();
    match (chars.next(), chars.as_str()) {
        (Some(axis), "1") => format!("{axis}axis"),
        (Some(axis), n) => format!("{axis}axis{n}"),
        (None, _) => id.to_string(),
    }
}

/// Plotly refers to `x1` as plain `x`.
fn axis_ref(id: &str) -> &str {
    match id.strip_suffix('1') {
        Some(axis) if axis.len() == 1 => axis,
        _ => id,
    }
}

fn x_axis(axis: &AxisDefinition) -> Value {
    let mut value = json!({
        "domain": axis.domain,
        "side": "top",
        "anchor": "free",
        "position": axis.position,
        "showgrid": axis.show_grid,
        "showline": true,
        "linecolor": axis.color,
        "linewidth": axis.line_width,
        "tickfont": { "color": axis.color, "size": axis.tick_font_size },
    });
    let Some(map) = value.as_object_mut() else {
        return value;
    };
    if let Some(primary) = &axis.overlaying {
        map.insert("overlaying".into(), json!(axis_ref(primary)));
    }
    if let Some(color) = &axis.grid_color {
        map.insert("gridcolor".into(), json!(color));
    }
    if axis.scale == ScaleType::Log {
        map.insert("type".into(), json!("log"));
    }
    if let Some(range) = axis.range {
        map.insert("range".into(), json!(range));
    }
    if let Some(ticks) = &axis.tick_values {
        map.insert("tickvals".into(), json!(ticks));
    }
    if let Some(text) = &axis.tick_text {
        map.insert("ticktext".into(), json!(text));
    }
    value
}

fn y_axis(axis: &DepthAxis) -> Value {
    let mut value = json!({
        "domain": axis.domain,
        "showgrid": axis.show_grid,
    });
    if let (Some(range), Some(map)) = (axis.range, value.as_object_mut()) {
        map.insert("range".into(), json!(range));
    }
    value
}

fn coord_ref(coord: CoordRef) -> &'static str {
    match coord {
        CoordRef::Paper => "paper",
        CoordRef::Depth => "y",
    }
}

fn shape(shape: &Shape) -> Value {
    json!({
        "type": "line",
        "xref": coord_ref(shape.x_ref),
        "yref": coord_ref(shape.y_ref),
        "x0": shape.x0,
        "x1": shape.x1,
        "y0": shape.y0,
        "y1": shape.y1,
        "layer": shape.layer,
        "line": { "color": shape.color, "width": shape.width },
    })
}

fn annotation(annotation: &Annotation) -> Value {
    let text = if annotation.bold {
        format!("<b>{}</b>", annotation.text)
    } else {
        annotation.text.clone()
    };
    json!({
        "text": text,
        "x": annotation.x,
        "y": annotation.y,
        "xref": "paper",
        "yref": "paper",
        "xanchor": annotation.x_anchor,
        "yanchor": annotation.y_anchor,
        "showarrow": false,
        "textangle": annotation.text_angle,
        "font": { "color": annotation.color, "size": annotation.font_size },
    })
}

impl Layout {
    /// The layout half of a Plotly figure.
    pub fn to_plotly_json(&self) -> Value {
        let mut layout = Map::new();
        for axis in &self.axes {
            layout.insert(layout_key(&axis.id), x_axis(axis));
        }
        layout.insert(layout_key(&self.depth_axis.id), y_axis(&self.depth_axis));
        layout.insert(
            "shapes".into(),
            Value::Array(self.shapes.iter().map(shape).collect()),
        );
        layout.insert(
            "annotations".into(),
            Value::Array(self.annotations.iter().map(annotation).collect()),
        );
        layout.insert("showlegend".into(), json!(false));
        Value::Object(layout)
    }
}
