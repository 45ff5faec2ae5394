use definition::TrackAssignment;
use palette::{ColorSource, Rgb};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CurveColor {
    pub track: String,
    pub axis_index: usize,
    pub color: String,
    /// Set for colors the allocator produced or that parse as hex.
    pub rgb: Option<Rgb>,
    pub allocated: bool,
}

/// Colors of every curve for one layout build, in track then axis order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ColorAssignment {
    curves: Vec<CurveColor>,
}

impl ColorAssignment {
    /// Keeps colors the curves already carry and asks `source` for the rest,
    /// each new color spaced away from every RGB color assigned so far.
    pub fn build(tracks: &TrackAssignment, source: &mut dyn ColorSource) -> Self {
        let mut used: Vec<Rgb> = Vec::new();
        let mut curves = Vec::with_capacity(tracks.curve_count());

        for track in tracks.iter() {
            for (axis_index, curve) in track.curves.iter().enumerate() {
                let entry = match &curve.color {
                    Some(color) => CurveColor {
                        track: track.key.clone(),
                        axis_index,
                        color: color.clone(),
                        rgb: Rgb::from_hex(color),
                        allocated: false,
                    },
                    None => {
                        let rgb = source.next_color(&used);
                        CurveColor {
                            track: track.key.clone(),
                            axis_index,
                            color: rgb.to_hex(),
                            rgb: Some(rgb),
                            allocated: true,
                        }
                    }
                };
                if let Some(rgb) = entry.rgb {
                    used.push(rgb);
                }
                curves.push(entry);
            }
        }

        Self { curves }
    }

    pub fn color(&self, track: &str, axis_index: usize) -> Option<&str> {
        self.curves
            .iter()
            .find(|c| c.track == track && c.axis_index == axis_index)
            .map(|c| c.color.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &CurveColor> {
        self.curves.iter()
    }

    pub fn allocated_count(&self) -> usize {
        self.curves.iter().filter(|c| c.allocated).count()
    }
}
