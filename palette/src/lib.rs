use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// An RGB color with channels in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Rgb {
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Sum of absolute per-channel differences.
    pub fn manhattan(&self, other: &Rgb) -> f64 {
        (self.r - other.r).abs() + (self.g - other.g).abs() + (self.b - other.b).abs()
    }

    pub fn channels(&self) -> [f64; 3] {
        [self.r, self.g, self.b]
    }

    pub fn to_hex(&self) -> String {
        let byte = |c: f64| (c * 255.0).round().clamp(0.0, 255.0) as u8;
        format!("#{:02x}{:02x}{:02x}", byte(self.r), byte(self.g), byte(self.b))
    }

    /// Parses `#rrggbb` (the leading `#` is optional).
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.trim().trim_start_matches('#');
        if digits.len() != 6 || !digits.is_ascii() {
            return None;
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16)
                .ok()
                .map(|v| f64::from(v) / 255.0)
        };
        Some(Self::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaletteConfig {
    pub pastel_factor: f64,
    pub trials: usize,
    pub seed: Option<u64>,
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            pastel_factor: 0.5,
            trials: 100,
            seed: None,
        }
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum PaletteError {
    #[error("pastel factor must be finite and non-negative, got {0}")]
    InvalidPastelFactor(f64),
    #[error("trial count must be at least 1")]
    NoTrials,
    #[error("colorscale needs {expected} bounds for {colors} colors, got {actual}")]
    BoundsMismatch {
        expected: usize,
        colors: usize,
        actual: usize,
    },
}

/// Produces a color that should stand apart from the ones already in use.
pub trait ColorSource {
    fn next_color(&mut self, existing: &[Rgb]) -> Rgb;
}

/// Greedy max-min color picker with a pastel bias.
///
/// Each call samples `trials` random pastel candidates and keeps the one whose
/// nearest existing color is farthest away (Manhattan distance). This is a
/// heuristic: no minimum separation is guaranteed, and two independent
/// allocators share nothing, so palettes from separate calls may collide.
#[derive(Debug, Clone)]
pub struct ColorAllocator<R = StdRng> {
    rng: R,
    pastel_factor: f64,
    trials: usize,
}

impl ColorAllocator<StdRng> {
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    pub fn from_os_rng() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }
}

impl<R: Rng> ColorAllocator<R> {
    pub fn with_rng(rng: R) -> Self {
        let defaults = PaletteConfig::default();
        Self {
            rng,
            pastel_factor: defaults.pastel_factor,
            trials: defaults.trials,
        }
    }

    pub fn pastel_factor(mut self, pastel_factor: f64) -> Result<Self, PaletteError> {
        if !pastel_factor.is_finite() || pastel_factor < 0.0 {
            return Err(PaletteError::InvalidPastelFactor(pastel_factor));
        }
        self.pastel_factor = pastel_factor;
        Ok(self)
    }

    pub fn trials(mut self, trials: usize) -> Self {
        self.trials = trials.max(1);
        self
    }

    fn random_pastel(&mut self) -> Rgb {
        let p = self.pastel_factor;
        let mut channel = || (self.rng.random::<f64>() + p) / (1.0 + p);
        Rgb::new(channel(), channel(), channel())
    }
}

impl<R: Rng> ColorSource for ColorAllocator<R> {
    fn next_color(&mut self, existing: &[Rgb]) -> Rgb {
        if existing.is_empty() {
            return self.random_pastel();
        }

        let mut best: Option<(f64, Rgb)> = None;
        for _ in 0..self.trials {
            let candidate = self.random_pastel();
            let nearest = existing
                .iter()
                .map(|color| candidate.manhattan(color))
                .fold(f64::INFINITY, f64::min);
            if best.map_or(true, |(distance, _)| nearest > distance) {
                best = Some((nearest, candidate));
            }
        }
        let (distance, color) = best.unwrap_or_else(|| (0.0, self.random_pastel()));
        log::trace!(
            "picked {} at distance {distance:.3} from {} existing colors",
            color.to_hex(),
            existing.len()
        );
        color
    }
}

pub struct PaletteFactory;

impl PaletteFactory {
    pub fn create(config: &PaletteConfig) -> Result<Box<dyn ColorSource>, PaletteError> {
        if config.trials == 0 {
            return Err(PaletteError::NoTrials);
        }
        let allocator = match config.seed {
            Some(seed) => ColorAllocator::seeded(seed),
            None => ColorAllocator::from_os_rng(),
        };
        Ok(Box::new(
            allocator
                .pastel_factor(config.pastel_factor)?
                .trials(config.trials),
        ))
    }
}

/// Builds a stepped colorscale: color `k` covers `[bounds[k], bounds[k + 1]]`
/// after the bounds are sorted and normalized to `[0, 1]`.
pub fn discrete_colorscale(
    bounds: &[f64],
    colors: &[String],
) -> Result<Vec<(f64, String)>, PaletteError> {
    if bounds.len() != colors.len() + 1 {
        return Err(PaletteError::BoundsMismatch {
            expected: colors.len() + 1,
            colors: colors.len(),
            actual: bounds.len(),
        });
    }

    let mut sorted = bounds.to_vec();
    sorted.sort_by(f64::total_cmp);
    let min = sorted[0];
    let max = sorted[sorted.len() - 1];

    if max == min {
        return Ok(colors.iter().map(|c| (0.0, c.clone())).collect());
    }

    let normalized: Vec<f64> = sorted.iter().map(|v| (v - min) / (max - min)).collect();
    let mut scale = Vec::with_capacity(colors.len() * 2);
    for (k, color) in colors.iter().enumerate() {
        scale.push((normalized[k], color.clone()));
        scale.push((normalized[k + 1], color.clone()));
    }
    Ok(scale)
}
