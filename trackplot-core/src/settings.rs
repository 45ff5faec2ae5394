use crate::error::LayoutError;
use definition::is_toml;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_HEADER_SPLIT: f64 = 0.8;
pub const DEFAULT_HEADER_BASE: f64 = 0.85;
pub const DEFAULT_STACK_STEP: f64 = 0.04;
pub const DEFAULT_LINEAR_TICK_COUNT: usize = 5;
pub const DEFAULT_CATEGORICAL_KEYS: [&str; 5] = ["CLASS", "TEST", "XPT", "MARKER", "ZONA"];

/// Every tunable constant of a layout build.
///
/// Vertical positions are paper fractions: `[header_split, 1]` is the header
/// band, `[0, header_split]` the main band.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutSettings {
    pub header_split: f64,
    /// Height of the first curve's name inside a track's header slot.
    pub header_base: f64,
    pub stack_step: f64,
    pub unit_offset: f64,
    pub axis_line_offset: f64,
    pub linear_tick_count: usize,
    pub categorical_keys: Vec<String>,
    pub default_curve_color: String,
    pub line_color: String,
    pub line_width: f64,
    pub grid_color: String,
    pub axis_line_width: f64,
    pub max_gridlines: usize,
    pub depth_label: String,
    pub depth_label_x: f64,
    pub depth_label_y: f64,
    pub name_font_size: f64,
    pub unit_font_size: f64,
    pub range_font_size: f64,
    pub tick_font_size: f64,
}

impl Default for LayoutSettings {
    fn default() -> Self {
        Self {
            header_split: DEFAULT_HEADER_SPLIT,
            header_base: DEFAULT_HEADER_BASE,
            stack_step: DEFAULT_STACK_STEP,
            unit_offset: 0.02,
            axis_line_offset: 0.01,
            linear_tick_count: DEFAULT_LINEAR_TICK_COUNT,
            categorical_keys: DEFAULT_CATEGORICAL_KEYS
                .iter()
                .map(|k| k.to_string())
                .collect(),
            default_curve_color: "black".to_string(),
            line_color: "black".to_string(),
            line_width: 1.0,
            grid_color: "gainsboro".to_string(),
            axis_line_width: 1.5,
            max_gridlines: 5_000,
            depth_label: "DEPTH (m)".to_string(),
            depth_label_x: -0.01,
            depth_label_y: 0.9,
            name_font_size: 12.0,
            unit_font_size: 10.0,
            range_font_size: 10.0,
            tick_font_size: 9.0,
        }
    }
}

impl LayoutSettings {
    pub fn is_categorical(&self, key: &str) -> bool {
        self.categorical_keys.iter().any(|k| k == key)
    }
}

fn invalid(message: impl Into<String>) -> LayoutError {
    LayoutError::InvalidSettings(message.into())
}

pub fn normalize_layout_settings(settings: LayoutSettings) -> Result<LayoutSettings, LayoutError> {
    if !(settings.header_split > 0.0 && settings.header_split < 1.0) {
        return Err(invalid("header_split must lie strictly between 0 and 1"));
    }
    if !(settings.header_base >= settings.header_split && settings.header_base <= 1.0) {
        return Err(invalid("header_base must lie inside the header band"));
    }
    if !(settings.stack_step > 0.0 && settings.stack_step.is_finite()) {
        return Err(invalid("stack_step must be positive"));
    }
    if settings.linear_tick_count < 2 {
        return Err(invalid("linear_tick_count must be at least 2"));
    }
    if settings.max_gridlines == 0 {
        return Err(invalid("max_gridlines must be at least 1"));
    }
    let mut settings = settings;
    settings.line_width = settings.line_width.max(0.0);
    settings.axis_line_width = settings.axis_line_width.max(0.0);
    settings.unit_offset = settings.unit_offset.max(0.0);
    settings.axis_line_offset = settings.axis_line_offset.max(0.0);
    Ok(settings)
}

pub fn load_layout_settings_file(path: &Path) -> Result<LayoutSettings, LayoutError> {
    let data = std::fs::read_to_string(path).map_err(|e| {
        LayoutError::SettingsFile(format!(
            "Failed to read layout settings file '{}': {e}",
            path.display()
        ))
    })?;
    let parsed = if is_toml(path) {
        toml::from_str::<LayoutSettings>(&data).map_err(|e| e.to_string())
    } else {
        serde_json::from_str::<LayoutSettings>(&data).map_err(|e| e.to_string())
    };
    let settings = parsed.map_err(|e| {
        LayoutError::SettingsFile(format!(
            "Failed to parse layout settings file '{}': {e}",
            path.display()
        ))
    })?;
    normalize_layout_settings(settings)
}

pub fn save_layout_settings_file(path: &Path, settings: &LayoutSettings) -> Result<(), LayoutError> {
    if let Some(parent) = path.parent() {
        let _ = std::fs::create_dir_all(parent);
    }
    let data = if is_toml(path) {
        toml::to_string_pretty(settings).map_err(|e| e.to_string())
    } else {
        serde_json::to_string_pretty(settings).map_err(|e| e.to_string())
    }
    .map_err(|e| LayoutError::SettingsFile(format!("Failed to serialize layout settings: {e}")))?;
    std::fs::write(path, data).map_err(|e| {
        LayoutError::SettingsFile(format!(
            "Failed to write layout settings file '{}': {e}",
            path.display()
        ))
    })
}
