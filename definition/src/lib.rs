use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

pub mod depth;
pub mod validation;
pub use depth::{DepthExtent, DepthRow};
pub use validation::{ordered_ratios, validate_ratios, validate_tracks};

/// Reverse map from categorical code to its label; code `0` is the empty label.
pub type LabelMap = BTreeMap<u32, String>;

/// One curve plotted inside a track. Its axis index is its position in the track.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurveRef {
    pub name: String,
    #[serde(default)]
    pub unit: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub labels: Option<LabelMap>,
}

impl CurveRef {
    pub fn new(name: impl Into<String>, unit: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            unit: unit.into(),
            color: None,
            labels: None,
        }
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn with_labels(mut self, labels: LabelMap) -> Self {
        self.labels = Some(labels);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackDefinition {
    pub key: String,
    pub curves: Vec<CurveRef>,
}

/// Ordered mapping of track key to the curves plotted in it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TrackAssignment {
    tracks: Vec<TrackDefinition>,
}

impl TrackAssignment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_track(mut self, key: impl Into<String>, curves: Vec<CurveRef>) -> Self {
        self.push(key, curves);
        self
    }

    pub fn push(&mut self, key: impl Into<String>, curves: Vec<CurveRef>) {
        self.tracks.push(TrackDefinition {
            key: key.into(),
            curves,
        });
    }

    pub fn get(&self, key: &str) -> Option<&TrackDefinition> {
        self.tracks.iter().find(|track| track.key == key)
    }

    pub fn iter(&self) -> impl Iterator<Item = &TrackDefinition> {
        self.tracks.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.tracks.iter().map(|track| track.key.as_str())
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    pub fn curve_count(&self) -> usize {
        self.tracks.iter().map(|track| track.curves.len()).sum()
    }
}

/// Nominal value range of one curve, as configured. `start` may exceed `end`
/// for axes drawn high-to-low (neutron porosity, saturation).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveRange {
    pub start: f64,
    pub end: f64,
}

impl CurveRange {
    pub fn lo(&self) -> f64 {
        self.start.min(self.end)
    }

    pub fn hi(&self) -> f64 {
        self.start.max(self.end)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RangeEntry {
    pub ranges: Vec<[f64; 2]>,
    #[serde(default)]
    pub log: bool,
}

impl RangeEntry {
    pub fn linear(ranges: Vec<[f64; 2]>) -> Self {
        Self { ranges, log: false }
    }

    pub fn log(ranges: Vec<[f64; 2]>) -> Self {
        Self { ranges, log: true }
    }

    pub fn range(&self, axis_index: usize) -> Option<CurveRange> {
        self.ranges
            .get(axis_index)
            .map(|[start, end]| CurveRange {
                start: *start,
                end: *end,
            })
    }
}

/// Curve-group key to nominal ranges, index-aligned with each track's curves.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RangeTable {
    entries: BTreeMap<String, RangeEntry>,
}

impl RangeTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(mut self, key: impl Into<String>, entry: RangeEntry) -> Self {
        self.insert(key, entry);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, entry: RangeEntry) {
        self.entries.insert(key.into(), entry);
    }

    pub fn entry(&self, key: &str) -> Option<&RangeEntry> {
        self.entries.get(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Entries of `other` replace entries with the same key.
    pub fn merged(mut self, other: &RangeTable) -> Self {
        for (key, entry) in &other.entries {
            self.entries.insert(key.clone(), entry.clone());
        }
        self
    }
}

/// Relative track widths keyed by track key.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TrackRatios {
    ratios: BTreeMap<String, f64>,
}

impl TrackRatios {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_ratio(mut self, key: impl Into<String>, ratio: f64) -> Self {
        self.insert(key, ratio);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, ratio: f64) {
        self.ratios.insert(key.into(), ratio);
    }

    pub fn get(&self, key: &str) -> Option<f64> {
        self.ratios.get(key).copied()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.ratios.contains_key(key)
    }
}

/// A complete plot request as stored on disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlotDefinition {
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grid_interval: Option<f64>,
    pub tracks: TrackAssignment,
    #[serde(default)]
    pub ratios: TrackRatios,
    #[serde(default)]
    pub ranges: RangeTable,
}

#[derive(thiserror::Error, Debug)]
pub enum DefinitionError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("toml parse error: {0}")]
    TomlDe(#[from] toml::de::Error),
    #[error("toml write error: {0}")]
    TomlSer(#[from] toml::ser::Error),
}

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum TrackConfigError {
    #[error("invalid track configuration: {0}")]
    InvalidTrackConfiguration(String),
    #[error("track '{0}' has no width ratio")]
    MissingTrackRatio(String),
    #[error("track '{0}' is assigned more than once")]
    DuplicateTrack(String),
}

/// True for a `.toml` extension in any letter case; every other file is read as JSON.
pub fn is_toml(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"))
}

impl PlotDefinition {
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), DefinitionError> {
        let path = path.as_ref();
        if is_toml(path) {
            fs::write(path, toml::to_string_pretty(self)?)?;
        } else {
            fs::write(path, serde_json::to_vec_pretty(self)?)?;
        }
        Ok(())
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, DefinitionError> {
        let path = path.as_ref();
        if is_toml(path) {
            let data = fs::read_to_string(path)?;
            return Ok(toml::from_str(&data)?);
        }
        let data = fs::read(path)?;
        let definition = serde_json::from_slice(&data)?;
        Ok(definition)
    }
}
