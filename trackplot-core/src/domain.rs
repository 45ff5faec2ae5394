use definition::{validate_ratios, TrackConfigError};
use serde::{Deserialize, Serialize};

/// Horizontal paper-fraction extent of one track.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackDomain {
    pub key: String,
    pub start: f64,
    pub end: f64,
}

impl TrackDomain {
    pub fn width(&self) -> f64 {
        self.end - self.start
    }

    pub fn center(&self) -> f64 {
        self.start + self.width() / 2.0
    }

    pub fn bounds(&self) -> [f64; 2] {
        [self.start, self.end]
    }
}

/// Partitions `[0, 1]` into contiguous segments proportional to `ratios`.
///
/// The first segment starts at exactly `0.0`, the last ends at exactly `1.0`,
/// and each segment ends where the next one starts.
pub fn compute(ratios: &[f64]) -> Result<Vec<[f64; 2]>, TrackConfigError> {
    let total = validate_ratios(ratios)?;

    let mut boundaries = Vec::with_capacity(ratios.len() + 1);
    boundaries.push(0.0);
    let mut cumulative = 0.0;
    for ratio in &ratios[..ratios.len() - 1] {
        cumulative += ratio;
        boundaries.push((cumulative / total).min(1.0));
    }
    boundaries.push(1.0);

    Ok(boundaries.windows(2).map(|w| [w[0], w[1]]).collect())
}

/// Track boundaries left to right, outer edges included.
pub fn boundaries(domains: &[TrackDomain]) -> Vec<f64> {
    let mut edges: Vec<f64> = domains.iter().map(|d| d.start).collect();
    edges.push(domains.last().map_or(1.0, |d| d.end));
    edges
}
