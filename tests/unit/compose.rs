use super::*;
use crate::palette::{PaletteMode, PaletteSpec};
use crate::params::Span;
use crate::placement::{BlobOrigin, Placement};
use crate::shape::ShapeProfile;

fn radial_params() -> GenerationParameters {
    GenerationParameters {
        viewport: Viewport::new(7.0),
        placement: Placement::Radial {
            arms: 8,
            layers: 3,
            step: 1.6,
            center_radius: 2.0,
        },
        radius: Span(0.6, 1.2),
        wobble: Span(0.05, 0.2),
        spikes: Span(4, 8),
        spike_depth: 0.25,
        profile: ShapeProfile::Circle,
        palette: PaletteSpec {
            mode: PaletteMode::Named {
                name: "sunset".to_string(),
            },
            size: 5,
        },
        seed: Some(4701),
        ..GenerationParameters::default()
    }
}

#[test]
fn radial_scenario_produces_25_blobs_with_fixed_colors() {
    let out = compose(&radial_params()).unwrap();
    assert_eq!(out.seed, 4701);
    assert_eq!(out.image.layers.len(), 25);

    let first_ring = out
        .image
        .specs()
        .find(|s| s.origin == BlobOrigin::Radial { arm: 0, layer: 1 })
        .unwrap();
    assert_eq!(first_ring.palette_index, 1);
    assert_eq!(first_ring.color, out.image.palette.colors()[1]);

    assert_eq!(
        out.image.layers.last().unwrap().spec.origin,
        BlobOrigin::Center
    );
}

#[test]
fn explicit_seed_is_deterministic() {
    let p = radial_params();
    let a = compose(&p).unwrap();
    let b = compose(&p).unwrap();
    assert_eq!(a, b);
}

#[test]
fn fresh_seed_round_trips() {
    let p = GenerationParameters::default();
    let first = compose(&p).unwrap();
    let again = compose(&p.clone().with_seed(Some(first.seed))).unwrap();
    assert_eq!(first.image, again.image);
}

#[test]
fn fills_carry_blob_alpha_and_palette_colors() {
    let out = compose(&GenerationParameters::default().with_seed(Some(12))).unwrap();
    for layer in &out.image.layers {
        assert!(out.image.palette.contains(layer.spec.color));
        assert_eq!(layer.fill.a, layer.spec.alpha);
        assert_eq!(layer.fill.r, layer.spec.color.r);
        assert!(layer.stroke.is_none());
        assert_eq!(layer.outline.len(), 300);
    }
}

#[test]
fn dark_outline_variant_adds_strokes() {
    let p = GenerationParameters {
        outline: OutlineStyle::Dark,
        seed: Some(1),
        ..GenerationParameters::default()
    };
    let out = compose(&p).unwrap();
    assert!(out.image.layers.iter().all(|l| l.stroke.is_some()));
}

#[test]
fn text_overlays_follow_blobs_with_fixed_anchors() {
    let p = GenerationParameters {
        title: "Bloom".to_string(),
        subtitle: "study no. 4".to_string(),
        seed: Some(3),
        ..GenerationParameters::default()
    };
    let out = compose(&p).unwrap();
    let [title, subtitle] = out.image.texts.as_slice() else {
        panic!("expected title and subtitle overlays");
    };
    assert_eq!(title.text, "Bloom");
    assert_eq!(title.weight, FontWeight::Bold);
    assert_eq!(title.anchor, Point::new(-9.0, 9.0));
    assert_eq!(subtitle.style, FontStyle::Italic);
    assert_eq!(subtitle.anchor, Point::new(-9.0, 8.0));
    assert!(title.size_pt > subtitle.size_pt);
}

#[test]
fn invalid_params_are_rejected_before_drawing() {
    let p = GenerationParameters {
        radius: Span(0.5, 0.1),
        ..GenerationParameters::default()
    };
    let err = compose(&p).unwrap_err();
    assert!(err.to_string().contains("radius"));
}

#[test]
fn seed_zero_is_honoured() {
    let p = GenerationParameters::default().with_seed(Some(0));
    let a = compose(&p).unwrap();
    let b = compose(&p).unwrap();
    assert_eq!(a.seed, 0);
    assert_eq!(a, b);
}
