use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::foundation::color::Rgba;
use crate::foundation::core::{FigureSize, Viewport};
use crate::foundation::error::{PetalError, PetalResult};
use crate::palette::PaletteSpec;
use crate::placement::{MAX_EXTENT, Placement};
use crate::shape::{DEFAULT_POINT_COUNT, ShapeProfile};

/// Densest outline accepted per blob.
pub const MAX_POINT_COUNT: usize = 10_000;

/// Upper bound for `wobble` and `spike_depth`, as fractions of the blob radius.
pub const MAX_WOBBLE: f64 = 10.0;

/// Closed `[lo, hi]` interval, written as a two element JSON array.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Span<T>(pub T, pub T);

impl<T: Copy + PartialOrd> Span<T> {
    pub fn new(lo: T, hi: T) -> Self {
        Self(lo, hi)
    }

    pub fn lo(&self) -> T {
        self.0
    }

    pub fn hi(&self) -> T {
        self.1
    }

    pub fn contains(&self, v: T) -> bool {
        self.0 <= v && v <= self.1
    }
}

/// Optional dark outline drawn over each blob fill.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutlineStyle {
    #[default]
    None,
    /// Fixed semi-transparent dark stroke.
    Dark,
}

impl OutlineStyle {
    pub const DARK_COLOR: Rgba = Rgba::rgba(0.1, 0.1, 0.12, 0.35);
    /// Stroke width in viewport units.
    pub const DARK_WIDTH: f64 = 0.04;
}

/// Everything one composition needs. Partial JSON files overlay [`Default`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GenerationParameters {
    pub canvas: FigureSize,
    pub viewport: Viewport,
    pub background: Rgba,
    pub title: String,
    pub subtitle: String,
    pub placement: Placement,
    pub radius: Span<f64>,
    pub wobble: Span<f64>,
    pub spikes: Span<u32>,
    pub spike_depth: f64,
    pub alpha: Span<f64>,
    pub profile: ShapeProfile,
    pub point_count: usize,
    pub palette: PaletteSpec,
    pub outline: OutlineStyle,
    pub seed: Option<u64>,
}

impl Default for GenerationParameters {
    fn default() -> Self {
        Self {
            canvas: FigureSize::default(),
            viewport: Viewport::default(),
            background: Rgba::WHITE,
            title: "Generative Poster".to_string(),
            subtitle: "Seeded Petal Edition".to_string(),
            placement: Placement::default(),
            radius: Span(0.15, 0.45),
            wobble: Span(0.0, 0.25),
            spikes: Span(0, 0),
            spike_depth: 0.0,
            alpha: Span(0.25, 0.6),
            profile: ShapeProfile::Heart,
            point_count: DEFAULT_POINT_COUNT,
            palette: PaletteSpec::default(),
            outline: OutlineStyle::None,
            seed: None,
        }
    }
}

impl GenerationParameters {
    /// Parse parameters from a JSON reader. Missing fields take their defaults.
    pub fn from_reader<R: std::io::Read>(r: R) -> PetalResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| PetalError::serde(format!("parse parameters JSON: {e}")))
    }

    /// Parse parameters from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> PetalResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            PetalError::validation(format!("open parameters JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Check every range, count and color before anything is drawn.
    pub fn validate(&self) -> PetalResult<()> {
        finite_positive("canvas.width_in", self.canvas.width_in)?;
        finite_positive("canvas.height_in", self.canvas.height_in)?;
        finite_positive("viewport", self.viewport.half_extent)?;

        if !self.background.is_normalized() {
            return Err(PetalError::validation(
                "background has a channel outside [0, 1]",
            ));
        }

        float_span("radius", self.radius, 0.0, MAX_EXTENT)?;
        float_span("wobble", self.wobble, 0.0, MAX_WOBBLE)?;
        float_span("alpha", self.alpha, 0.0, 1.0)?;
        if self.spikes.lo() > self.spikes.hi() {
            return Err(PetalError::validation(format!(
                "spikes range is inverted: {} > {}",
                self.spikes.lo(),
                self.spikes.hi()
            )));
        }
        if !self.spike_depth.is_finite() || !(0.0..=MAX_WOBBLE).contains(&self.spike_depth) {
            return Err(PetalError::validation(format!(
                "spike_depth must lie within [0, {MAX_WOBBLE}] (got {})",
                self.spike_depth
            )));
        }
        if !(2..=MAX_POINT_COUNT).contains(&self.point_count) {
            return Err(PetalError::validation(format!(
                "point_count must lie within [2, {MAX_POINT_COUNT}] (got {})",
                self.point_count
            )));
        }

        self.palette.validate()?;
        self.placement.validate()?;
        Ok(())
    }
}

fn finite_positive(field: &str, v: f64) -> PetalResult<()> {
    if !v.is_finite() || v <= 0.0 {
        return Err(PetalError::validation(format!(
            "{field} must be finite and > 0 (got {v})"
        )));
    }
    Ok(())
}

fn float_span(field: &str, span: Span<f64>, min: f64, max: f64) -> PetalResult<()> {
    let Span(lo, hi) = span;
    if !lo.is_finite() || !hi.is_finite() {
        return Err(PetalError::validation(format!(
            "{field} bounds must be finite"
        )));
    }
    if lo > hi {
        return Err(PetalError::validation(format!(
            "{field} range is inverted: {lo} > {hi}"
        )));
    }
    if lo < min || hi > max {
        return Err(PetalError::validation(format!(
            "{field} range [{lo}, {hi}] must lie within [{min}, {max}]"
        )));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../tests/unit/params.rs"]
mod tests;
