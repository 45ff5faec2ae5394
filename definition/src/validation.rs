use crate::{TrackAssignment, TrackConfigError, TrackRatios};
use std::collections::HashSet;

/// Rejects ratio lists that cannot partition `[0, 1]`.
pub fn validate_ratios(ratios: &[f64]) -> Result<f64, TrackConfigError> {
    if ratios.is_empty() {
        return Err(TrackConfigError::InvalidTrackConfiguration(
            "no tracks to lay out".to_string(),
        ));
    }
    if let Some(bad) = ratios.iter().find(|r| !r.is_finite() || **r < 0.0) {
        return Err(TrackConfigError::InvalidTrackConfiguration(format!(
            "track ratio {bad} is not a non-negative number"
        )));
    }
    let total: f64 = ratios.iter().sum();
    if total <= 0.0 {
        return Err(TrackConfigError::InvalidTrackConfiguration(
            "track ratios sum to zero".to_string(),
        ));
    }
    Ok(total)
}

/// Ratios in track order; every assigned track must have one.
pub fn ordered_ratios(
    tracks: &TrackAssignment,
    ratios: &TrackRatios,
) -> Result<Vec<f64>, TrackConfigError> {
    tracks
        .keys()
        .map(|key| {
            ratios
                .get(key)
                .ok_or_else(|| TrackConfigError::MissingTrackRatio(key.to_string()))
        })
        .collect()
}

pub fn validate_tracks(
    tracks: &TrackAssignment,
    ratios: &TrackRatios,
) -> Result<Vec<f64>, TrackConfigError> {
    let mut seen = HashSet::new();
    for key in tracks.keys() {
        if !seen.insert(key) {
            return Err(TrackConfigError::DuplicateTrack(key.to_string()));
        }
    }
    let ordered = ordered_ratios(tracks, ratios)?;
    validate_ratios(&ordered)?;
    Ok(ordered)
}
