//! Built-in track catalog: default curves, ranges, scale and width ratio for
//! the well-known petrophysics track keys.

use crate::error::LayoutError;
use definition::{
    CurveRef, LabelMap, PlotDefinition, RangeEntry, RangeTable, TrackAssignment, TrackRatios,
};

const RED: &str = "tomato";
const BLUE: &str = "royalblue";
const BLACK: &str = "rgba(62, 62, 62, 1)";
const ORANGE: &str = "#FF9900";
const GREEN: &str = "#109618";
const PURPLE: &str = "#990099";
const CYAN: &str = "#0099C6";

const NARROW: f64 = 0.5;
const WIDE: f64 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PresetCurve {
    pub name: &'static str,
    pub unit: &'static str,
    pub color: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Preset {
    pub key: &'static str,
    pub ratio: f64,
    pub log: bool,
    pub ranges: &'static [[f64; 2]],
    pub curves: &'static [PresetCurve],
    /// Code labels of flag tracks; empty for quantitative tracks.
    pub labels: &'static [(u32, &'static str)],
}

macro_rules! curve {
    ($name:expr, $unit:expr, $color:expr) => {
        PresetCurve {
            name: $name,
            unit: $unit,
            color: $color,
        }
    };
}

const fn linear(
    key: &'static str,
    ratio: f64,
    ranges: &'static [[f64; 2]],
    curves: &'static [PresetCurve],
) -> Preset {
    Preset {
        key,
        ratio,
        log: false,
        ranges,
        curves,
        labels: &[],
    }
}

const fn log_scaled(
    key: &'static str,
    ranges: &'static [[f64; 2]],
    curves: &'static [PresetCurve],
) -> Preset {
    Preset {
        key,
        ratio: WIDE,
        log: true,
        ranges,
        curves,
        labels: &[],
    }
}

const fn flag(
    key: &'static str,
    curves: &'static [PresetCurve],
    labels: &'static [(u32, &'static str)],
) -> Preset {
    Preset {
        key,
        ratio: NARROW,
        log: false,
        ranges: &[],
        curves,
        labels,
    }
}

static PRESETS: &[Preset] = &[
    flag("MARKER", &[curve!("MARKER", "", BLACK)], &[]),
    linear("GR", WIDE, &[[0.0, 250.0]], &[curve!("GR", "GAPI", "darkgreen")]),
    linear("GR_NORM", WIDE, &[[0.0, 250.0]], &[curve!("GR_NORM", "GAPI", "orange")]),
    linear(
        "GR_DUAL",
        WIDE,
        &[[0.0, 250.0], [0.0, 250.0]],
        &[curve!("GR", "GAPI", "darkgreen"), curve!("GR_NORM", "GAPI", "orange")],
    ),
    log_scaled("RT", &[[0.02, 2000.0]], &[curve!("RT", "OHMM", RED)]),
    log_scaled(
        "RT_RO",
        &[[0.02, 2000.0], [0.02, 2000.0]],
        &[curve!("RT", "OHMM", RED), curve!("RO", "OHMM", PURPLE)],
    ),
    linear("X_RT_RO", NARROW, &[[0.0, 4.0]], &[curve!("RT_RO", "V/V", BLACK)]),
    linear(
        "NPHI_RHOB_NON_NORM",
        WIDE,
        &[[0.6, 0.0], [1.71, 2.71]],
        &[curve!("NPHI", "V/V", BLUE), curve!("RHOB", "G/C3", RED)],
    ),
    linear(
        "NPHI_RHOB",
        WIDE,
        &[[0.6, 0.0], [1.71, 2.71], [1.0, 0.0], [1.0, 0.0]],
        &[
            curve!("NPHI", "V/V", BLUE),
            curve!("RHOB", "G/C3", RED),
            curve!("NPHI_NORM", "V/V", BLUE),
            curve!("RHOB_NORM_NPHI", "G/C3", RED),
        ],
    ),
    linear("RHOB", WIDE, &[[1.71, 2.71]], &[curve!("RHOB", "G/C3", RED)]),
    linear("SW", WIDE, &[[1.0, 0.0]], &[curve!("SW", "DEC", BLUE)]),
    linear(
        "PHIE_PHIT",
        WIDE,
        &[[0.5, 0.0], [0.5, 0.0]],
        &[curve!("PHIE", "V/V", "darkblue"), curve!("PHIT", "V/V", CYAN)],
    ),
    log_scaled("PERM", &[[0.02, 2000.0]], &[curve!("PERM", "mD", BLUE)]),
    linear("VCL", WIDE, &[[0.0, 1.0]], &[curve!("VCL", "V/V", BLACK)]),
    log_scaled(
        "RWAPP_RW",
        &[[0.01, 1000.0], [0.01, 1000.0]],
        &[curve!("RWAPP", "OHMM", BLACK), curve!("RW", "OHMM", BLUE)],
    ),
    linear("X_RWA_RW", NARROW, &[[0.0, 4.0]], &[curve!("RWA_RW", "V/V", BLACK)]),
    log_scaled(
        "RT_F",
        &[[0.02, 2000.0], [0.02, 2000.0]],
        &[curve!("RT", "OHMM", RED), curve!("F", "V/V", CYAN)],
    ),
    linear("X_RT_F", NARROW, &[[0.0, 2.0]], &[curve!("RT_F", "V/V", BLACK)]),
    log_scaled(
        "RT_RHOB",
        &[[0.01, 1000.0], [1.71, 2.71], [0.0, 1.0], [0.0, 1.0]],
        &[
            curve!("RT", "OHMM", RED),
            curve!("RHOB", "G/C3", BLACK),
            curve!("RT_NORM", "OHMM", RED),
            curve!("RHOB_NORM_RT", "G/C3", GREEN),
        ],
    ),
    linear("X_RT_RHOB", NARROW, &[[-0.5, 0.5]], &[curve!("RT_RHOB", "V/V", BLACK)]),
    linear("XPT", NARROW, &[[0.0, 1.0]], &[curve!("XPT", "", BLACK)]),
    log_scaled(
        "RT_RGSA",
        &[[0.02, 2000.0], [0.02, 2000.0]],
        &[curve!("RT", "OHMM", RED), curve!("RGSA", "", BLUE)],
    ),
    linear(
        "NPHI_NGSA",
        WIDE,
        &[[0.6, 0.0], [0.6, 0.0]],
        &[curve!("NPHI", "V/V", RED), curve!("NGSA", "", GREEN)],
    ),
    linear(
        "RHOB_DGSA",
        WIDE,
        &[[1.71, 2.71], [1.71, 2.71]],
        &[curve!("RHOB", "G/C3", RED), curve!("DGSA", "", GREEN)],
    ),
    linear("VSH", WIDE, &[[0.0, 1.0]], &[curve!("VSH", "V/V", "darkblue")]),
    linear("SP", WIDE, &[[-160.0, 40.0]], &[curve!("SP", "MV", "darkblue")]),
    linear("VSH_LINEAR", WIDE, &[[0.0, 1.0]], &[curve!("VSH_LINEAR", "V/V", "darkblue")]),
    linear("VSH_DN", WIDE, &[[0.0, 1.0]], &[curve!("VSH_DN", "V/V", "darkblue")]),
    linear("VSH_SP", WIDE, &[[0.0, 1.0]], &[curve!("VSH_SP", "V/V", "darkblue")]),
    linear(
        "PHIE_DEN",
        WIDE,
        &[[0.0, 1.0], [0.0, 1.0]],
        &[curve!("PHIE", "", "darkblue"), curve!("PHIE_DEN", "", BLUE)],
    ),
    linear(
        "PHIT_DEN",
        WIDE,
        &[[0.0, 1.0], [0.0, 1.0]],
        &[curve!("PHIT", "", RED), curve!("PHIT_DEN", "", ORANGE)],
    ),
    linear(
        "RWA",
        WIDE,
        &[[0.0, 60.0], [0.0, 60.0], [0.0, 60.0]],
        &[
            curve!("RWA_FULL", "OHMM", "darkblue"),
            curve!("RWA_SIMPLE", "OHMM", "darkgreen"),
            curve!("RWA_TAR", "OHMM", RED),
        ],
    ),
    linear("PHIE", WIDE, &[[0.6, 0.0]], &[curve!("PHIE", "", "darkblue")]),
    log_scaled(
        "RT_GR",
        &[[0.02, 2000.0], [0.0, 250.0], [0.02, 2000.0], [0.0, 250.0]],
        &[
            curve!("RT", "OHMM", RED),
            curve!("GR", "GAPI", "darkgreen"),
            curve!("RT_NORM", "OHMM", RED),
            curve!("GR_NORM_RT", "GAPI", "darkgreen"),
        ],
    ),
    log_scaled(
        "RT_PHIE",
        &[[0.02, 2000.0], [0.6, 0.0]],
        &[curve!("RT", "OHMM", RED), curve!("PHIE", "", "darkblue")],
    ),
    linear(
        "SWARRAY",
        WIDE,
        &[[1.0, 0.0], [1.0, 0.0]],
        &[curve!("SWARRAY_10", "V/V", "darkblue"), curve!("SWARRAY_25", "V/V", "orange")],
    ),
    linear("SWGRAD", WIDE, &[[-2.0, 2.0]], &[curve!("SWGRAD", "V/V", "darkgreen")]),
    flag("TEST", &[curve!("TEST", "V/V", BLACK)], &[(0, ""), (1, "Water"), (3, "Gas")]),
    flag(
        "CLASS",
        &[curve!("CLASS", "V/V", BLACK)],
        &[
            (0, "Non Reservoir"),
            (1, "Water"),
            (2, "LRLC-Potential"),
            (3, "LRLC-Proven"),
            (4, "LC-Res"),
            (5, "Non-LCRes"),
            (6, "Coal"),
        ],
    ),
    flag(
        "ZONA",
        &[curve!("ZONA", "", BLACK)],
        &[
            (0, "Zona Prospek Kuat"),
            (1, "Zona Menarik"),
            (2, "Zona Lemah"),
            (3, "Non Prospek"),
        ],
    ),
    flag(
        "RESERVOIR_CLASS",
        &[curve!("RESERVOIR_CLASS", "", BLACK)],
        &[
            (0, "Zona Prospek Kuat"),
            (1, "Zona Menarik"),
            (2, "Zona Lemah"),
            (3, "Non Prospek"),
            (4, "No Data"),
        ],
    ),
    flag("IQUAL", &[curve!("IQUAL", "", BLACK)], &[(1, "1")]),
    flag("RGBE", &[curve!("RGBE", "", BLACK)], &[]),
    flag("RPBE", &[curve!("RPBE", "", BLACK)], &[]),
];

impl Preset {
    pub fn curve_refs(&self) -> Vec<CurveRef> {
        let labels: Option<LabelMap> = (!self.labels.is_empty()).then(|| {
            self.labels
                .iter()
                .map(|(code, label)| (*code, label.to_string()))
                .collect()
        });
        self.curves
            .iter()
            .map(|c| {
                let curve = CurveRef::new(c.name, c.unit).with_color(c.color);
                match &labels {
                    Some(labels) => curve.with_labels(labels.clone()),
                    None => curve,
                }
            })
            .collect()
    }

    pub fn range_entry(&self) -> Option<RangeEntry> {
        if self.ranges.is_empty() {
            return None;
        }
        let ranges = self.ranges.to_vec();
        Some(if self.log {
            RangeEntry::log(ranges)
        } else {
            RangeEntry::linear(ranges)
        })
    }
}

pub fn presets() -> &'static [Preset] {
    PRESETS
}

pub fn preset(key: &str) -> Option<&'static Preset> {
    PRESETS.iter().find(|p| p.key == key)
}

pub fn track(key: &str) -> Option<Vec<CurveRef>> {
    preset(key).map(Preset::curve_refs)
}

pub fn default_range_table() -> RangeTable {
    let mut table = RangeTable::new();
    for preset in PRESETS {
        if let Some(entry) = preset.range_entry() {
            table.insert(preset.key, entry);
        }
    }
    table
}

pub fn default_ratios() -> TrackRatios {
    let mut ratios = TrackRatios::new();
    for preset in PRESETS {
        ratios.insert(preset.key, preset.ratio);
    }
    ratios
}

/// A plot definition stacking the named presets left to right.
pub fn plot_definition<S: AsRef<str>>(name: &str, keys: &[S]) -> Result<PlotDefinition, LayoutError> {
    let mut tracks = TrackAssignment::new();
    let mut ratios = TrackRatios::new();
    let mut ranges = RangeTable::new();
    for key in keys {
        let key = key.as_ref();
        let preset = preset(key).ok_or_else(|| LayoutError::UnknownPreset(key.to_string()))?;
        tracks.push(key, preset.curve_refs());
        ratios.insert(key, preset.ratio);
        if let Some(entry) = preset.range_entry() {
            ranges.insert(key, entry);
        }
    }
    Ok(PlotDefinition {
        name: name.to_string(),
        grid_interval: None,
        tracks,
        ratios,
        ranges,
    })
}
