use serde::{Deserialize, Serialize};

use crate::foundation::color::Rgba;
use crate::foundation::error::{PetalError, PetalResult};
use crate::random::ArtRng;

/// Curated pastel set: peach, pink, lilac, lavender, warm yellow and their neighbours.
pub const CURATED_PASTELS: [Rgba; 8] = [
    Rgba::rgb(1.00, 0.80, 0.67),
    Rgba::rgb(1.00, 0.71, 0.76),
    Rgba::rgb(0.85, 0.72, 0.93),
    Rgba::rgb(0.78, 0.75, 0.95),
    Rgba::rgb(1.00, 0.92, 0.62),
    Rgba::rgb(0.98, 0.76, 0.60),
    Rgba::rgb(0.96, 0.66, 0.80),
    Rgba::rgb(0.74, 0.86, 0.96),
];

const SUNSET: [Rgba; 5] = [
    Rgba::rgb(0.99, 0.42, 0.31),
    Rgba::rgb(0.99, 0.62, 0.29),
    Rgba::rgb(1.00, 0.82, 0.40),
    Rgba::rgb(0.89, 0.40, 0.55),
    Rgba::rgb(0.55, 0.30, 0.55),
];

const OCEAN: [Rgba; 5] = [
    Rgba::rgb(0.02, 0.24, 0.43),
    Rgba::rgb(0.00, 0.45, 0.62),
    Rgba::rgb(0.16, 0.66, 0.75),
    Rgba::rgb(0.56, 0.84, 0.85),
    Rgba::rgb(0.88, 0.96, 0.95),
];

const FOREST: [Rgba; 5] = [
    Rgba::rgb(0.13, 0.27, 0.18),
    Rgba::rgb(0.25, 0.45, 0.27),
    Rgba::rgb(0.49, 0.62, 0.35),
    Rgba::rgb(0.78, 0.80, 0.55),
    Rgba::rgb(0.60, 0.45, 0.30),
];

/// Names accepted by [`PaletteMode::Named`].
pub const NAMED_PALETTES: [&str; 4] = ["sunset", "ocean", "forest", "pastel"];

/// Look up a fixed palette by name.
pub fn named_palette(name: &str) -> Option<&'static [Rgba]> {
    match name {
        "sunset" => Some(&SUNSET),
        "ocean" => Some(&OCEAN),
        "forest" => Some(&FOREST),
        "pastel" => Some(&CURATED_PASTELS),
        _ => None,
    }
}

/// Largest palette a spec may request.
pub const MAX_PALETTE_SIZE: usize = 1_024;

/// How palette colors are obtained.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum PaletteMode {
    /// Independent uniform RGB draws, opaque.
    #[default]
    Random,
    /// Shuffled curated pastels, cycled to size.
    Curated,
    /// Fixed named palette in canonical order, cycled to size.
    Named { name: String },
    /// Caller-supplied colors, cycled to size.
    Custom { colors: Vec<Rgba> },
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PaletteSpec {
    #[serde(flatten)]
    pub mode: PaletteMode,
    pub size: usize,
}

impl Default for PaletteSpec {
    fn default() -> Self {
        Self {
            mode: PaletteMode::Random,
            size: 6,
        }
    }
}

impl PaletteSpec {
    pub fn validate(&self) -> PetalResult<()> {
        if !(1..=MAX_PALETTE_SIZE).contains(&self.size) {
            return Err(PetalError::validation(format!(
                "palette.size must lie within [1, {MAX_PALETTE_SIZE}] (got {})",
                self.size
            )));
        }
        match &self.mode {
            PaletteMode::Random | PaletteMode::Curated => Ok(()),
            PaletteMode::Named { name } => {
                if named_palette(name).is_none() {
                    return Err(PetalError::validation(format!(
                        "unknown palette name \"{name}\" (expected one of {NAMED_PALETTES:?})"
                    )));
                }
                Ok(())
            }
            PaletteMode::Custom { colors } => {
                if colors.is_empty() {
                    return Err(PetalError::validation(
                        "palette.colors must contain at least one color",
                    ));
                }
                if let Some(i) = colors.iter().position(|c| !c.is_normalized()) {
                    return Err(PetalError::validation(format!(
                        "palette.colors[{i}] has a channel outside [0, 1]"
                    )));
                }
                Ok(())
            }
        }
    }
}

/// Ordered palette. Entries may repeat.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Palette {
    colors: Vec<Rgba>,
}

impl Palette {
    pub fn new(colors: Vec<Rgba>) -> Self {
        Self { colors }
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Color at `i` modulo the palette length.
    pub fn cyclic(&self, i: usize) -> Rgba {
        self.colors[i % self.colors.len()]
    }

    pub fn colors(&self) -> &[Rgba] {
        &self.colors
    }

    pub fn contains(&self, c: Rgba) -> bool {
        self.colors.contains(&c)
    }
}

fn cycle_to(base: &[Rgba], size: usize) -> Vec<Rgba> {
    base.iter().copied().cycle().take(size).collect()
}

/// Build the palette for one composition. Only `random` and `curated` draw from `rng`.
///
/// `spec` must have passed [`PaletteSpec::validate`].
pub fn generate_palette(rng: &mut ArtRng, spec: &PaletteSpec) -> Palette {
    let colors = match &spec.mode {
        PaletteMode::Random => (0..spec.size)
            .map(|_| {
                let r = rng.unit();
                let g = rng.unit();
                let b = rng.unit();
                Rgba::rgb(r, g, b)
            })
            .collect(),
        PaletteMode::Curated => {
            let mut set = CURATED_PASTELS;
            rng.shuffle(&mut set);
            cycle_to(&set, spec.size)
        }
        PaletteMode::Named { name } => {
            cycle_to(named_palette(name).unwrap_or(&CURATED_PASTELS), spec.size)
        }
        PaletteMode::Custom { colors } => cycle_to(colors, spec.size),
    };
    Palette::new(colors)
}

#[cfg(test)]
#[path = "../tests/unit/palette.rs"]
mod tests;
