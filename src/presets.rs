use crate::foundation::color::Rgba;
use crate::foundation::core::Viewport;
use crate::palette::{PaletteMode, PaletteSpec};
use crate::params::{GenerationParameters, OutlineStyle, Span};
use crate::placement::Placement;
use crate::shape::ShapeProfile;

/// Preset names accepted by [`preset`].
pub const PRESET_NAMES: [&str; 4] = ["hearts", "spiky-bloom", "dense-cluster", "radial-bloom"];

/// Look up a named preset. Every preset leaves `seed` unset.
pub fn preset(name: &str) -> Option<GenerationParameters> {
    let p = match name {
        "hearts" => GenerationParameters::default(),
        "spiky-bloom" => spiky_bloom(),
        "dense-cluster" => dense_cluster(),
        "radial-bloom" => radial_bloom(),
        _ => return None,
    };
    Some(p)
}

fn spiky_bloom() -> GenerationParameters {
    GenerationParameters {
        background: Rgba::rgb(0.99, 0.97, 0.94),
        title: "Spiky Bloom".to_string(),
        subtitle: "Scattered Petals".to_string(),
        placement: Placement::Scatter {
            count: 24,
            half_extent: 8.0,
        },
        radius: Span(0.8, 2.2),
        wobble: Span(0.02, 0.12),
        spikes: Span(5, 11),
        spike_depth: 0.3,
        alpha: Span(0.25, 0.55),
        profile: ShapeProfile::Circle,
        palette: PaletteSpec {
            mode: PaletteMode::Random,
            size: 6,
        },
        ..GenerationParameters::default()
    }
}

fn dense_cluster() -> GenerationParameters {
    GenerationParameters {
        background: Rgba::rgb(0.98, 0.96, 0.99),
        title: "Dense Bloom".to_string(),
        subtitle: "Pastel Cluster".to_string(),
        placement: Placement::Cluster {
            layers: 12,
            density: 10,
            sigma: 3.0,
        },
        radius: Span(0.3, 1.1),
        wobble: Span(0.02, 0.1),
        spikes: Span(3, 7),
        spike_depth: 0.22,
        alpha: Span(0.15, 0.4),
        profile: ShapeProfile::Circle,
        palette: PaletteSpec {
            mode: PaletteMode::Curated,
            size: 6,
        },
        ..GenerationParameters::default()
    }
}

fn radial_bloom() -> GenerationParameters {
    GenerationParameters {
        viewport: Viewport::new(7.0),
        background: Rgba::rgb(1.0, 0.97, 0.92),
        title: "Radial Bloom".to_string(),
        subtitle: "Sunset Symmetry".to_string(),
        placement: Placement::Radial {
            arms: 8,
            layers: 3,
            step: 1.6,
            center_radius: 2.0,
        },
        radius: Span(0.7, 1.3),
        wobble: Span(0.05, 0.2),
        spikes: Span(5, 9),
        spike_depth: 0.25,
        alpha: Span(0.35, 0.65),
        profile: ShapeProfile::Circle,
        palette: PaletteSpec {
            mode: PaletteMode::Named {
                name: "sunset".to_string(),
            },
            size: 5,
        },
        outline: OutlineStyle::Dark,
        ..GenerationParameters::default()
    }
}
