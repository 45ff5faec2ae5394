use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One depth-indexed sample row. Curve values ride along untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepthRow {
    #[serde(alias = "DEPTH", default)]
    pub depth: Option<f64>,
    #[serde(flatten)]
    pub values: BTreeMap<String, serde_json::Value>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DepthExtent {
    pub min: f64,
    pub max: f64,
}

impl DepthExtent {
    /// Extent of the finite depths; `None` when there are none.
    pub fn from_depths<I: IntoIterator<Item = f64>>(depths: I) -> Option<Self> {
        let mut extent: Option<Self> = None;
        for depth in depths.into_iter().filter(|d| d.is_finite()) {
            extent = Some(match extent {
                Some(current) => Self {
                    min: current.min.min(depth),
                    max: current.max.max(depth),
                },
                None => Self {
                    min: depth,
                    max: depth,
                },
            });
        }
        extent
    }

    pub fn from_rows(rows: &[DepthRow]) -> Option<Self> {
        Self::from_depths(rows.iter().filter_map(|row| row.depth))
    }
}
