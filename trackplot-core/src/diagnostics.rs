use serde::Serialize;
use std::fmt;

/// A non-fatal anomaly met while building a layout.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Diagnostic {
    /// No range configured for this curve; its axis carries no ticks or range.
    UnstyledAxis {
        track: String,
        axis_index: usize,
        curve: String,
    },
    /// A log-flagged range that touches zero or below; drawn linear instead.
    LogScaleFallback {
        track: String,
        axis_index: usize,
        start: f64,
        end: f64,
    },
    GridlinesSkipped {
        reason: String,
    },
    /// The stacked curve names of a track climb past the top of the figure.
    HeaderOverflow {
        track: String,
        curves: usize,
        top: f64,
    },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::UnstyledAxis {
                track,
                axis_index,
                curve,
            } => write!(
                f,
                "no range for '{track}' axis {axis_index} ({curve}); axis left unstyled"
            ),
            Diagnostic::LogScaleFallback {
                track,
                axis_index,
                start,
                end,
            } => write!(
                f,
                "range [{start}, {end}] of '{track}' axis {axis_index} cannot be log-scaled; using linear ticks"
            ),
            Diagnostic::GridlinesSkipped { reason } => write!(f, "depth gridlines skipped: {reason}"),
            Diagnostic::HeaderOverflow { track, curves, top } => write!(
                f,
                "{curves} curves in '{track}' stack up to y = {top:.2}, above the header band"
            ),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct LayoutDiagnostics {
    entries: Vec<Diagnostic>,
}

impl LayoutDiagnostics {
    pub fn push(&mut self, diagnostic: Diagnostic) {
        log::warn!("{diagnostic}");
        self.entries.push(diagnostic);
    }

    pub fn extend(&mut self, diagnostics: impl IntoIterator<Item = Diagnostic>) {
        for diagnostic in diagnostics {
            self.push(diagnostic);
        }
    }

    pub fn entries(&self) -> &[Diagnostic] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Track keys with at least one unstyled axis, in first-seen order.
    pub fn unstyled_keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = Vec::new();
        for entry in &self.entries {
            if let Diagnostic::UnstyledAxis { track, .. } = entry {
                if !keys.contains(&track.as_str()) {
                    keys.push(track);
                }
            }
        }
        keys
    }

    pub fn gridlines_skipped(&self) -> bool {
        self.entries
            .iter()
            .any(|e| matches!(e, Diagnostic::GridlinesSkipped { .. }))
    }
}
