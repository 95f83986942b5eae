use serde_json::json;

use super::*;

fn spec(mode: PaletteMode, size: usize) -> PaletteSpec {
    PaletteSpec { mode, size }
}

#[test]
fn random_palette_has_requested_size_and_opaque_entries() {
    let mut rng = ArtRng::from_seed(8);
    let p = generate_palette(&mut rng, &spec(PaletteMode::Random, 7));
    assert_eq!(p.len(), 7);
    for c in p.colors() {
        assert!(c.is_normalized());
        assert_eq!(c.a, 1.0);
    }
}

#[test]
fn curated_palette_wraps_past_set_length() {
    let size = CURATED_PASTELS.len() * 2 + 3;
    let mut rng = ArtRng::from_seed(8);
    let p = generate_palette(&mut rng, &spec(PaletteMode::Curated, size));
    assert_eq!(p.len(), size);
    for i in 0..size {
        assert!(CURATED_PASTELS.contains(&p.colors()[i]));
        assert_eq!(p.colors()[i], p.colors()[i % CURATED_PASTELS.len()]);
    }
}

#[test]
fn curated_palette_truncates_and_is_a_permutation_prefix() {
    let mut rng = ArtRng::from_seed(99);
    let p = generate_palette(&mut rng, &spec(PaletteMode::Curated, 3));
    assert_eq!(p.len(), 3);
    assert_ne!(p.colors()[0], p.colors()[1]);
    assert_ne!(p.colors()[1], p.colors()[2]);
}

#[test]
fn seeded_palettes_reproduce() {
    for mode in [PaletteMode::Random, PaletteMode::Curated] {
        let a = generate_palette(&mut ArtRng::from_seed(1234), &spec(mode.clone(), 5));
        let b = generate_palette(&mut ArtRng::from_seed(1234), &spec(mode, 5));
        assert_eq!(a, b);
    }
}

#[test]
fn named_palette_keeps_canonical_order() {
    let mut rng = ArtRng::from_seed(0);
    let p = generate_palette(
        &mut rng,
        &spec(
            PaletteMode::Named {
                name: "sunset".to_string(),
            },
            7,
        ),
    );
    let sunset = named_palette("sunset").unwrap();
    assert_eq!(&p.colors()[..5], sunset);
    assert_eq!(p.colors()[5], sunset[0]);
    assert_eq!(p.colors()[6], sunset[1]);
}

#[test]
fn validation_rejects_bad_specs() {
    assert!(spec(PaletteMode::Random, 0).validate().is_err());
    assert!(
        spec(
            PaletteMode::Named {
                name: "neon".to_string()
            },
            3
        )
        .validate()
        .is_err()
    );
    assert!(spec(PaletteMode::Custom { colors: vec![] }, 3).validate().is_err());
    assert!(
        spec(
            PaletteMode::Custom {
                colors: vec![Rgba::rgba(0.0, 2.0, 0.0, 1.0)]
            },
            3
        )
        .validate()
        .is_err()
    );
    assert!(spec(PaletteMode::Curated, 12).validate().is_ok());
}

#[test]
fn palette_spec_json_shape() {
    let s: PaletteSpec =
        serde_json::from_value(json!({"mode": "named", "name": "ocean", "size": 4})).unwrap();
    assert_eq!(
        s.mode,
        PaletteMode::Named {
            name: "ocean".to_string()
        }
    );
    assert_eq!(s.size, 4);

    let s: PaletteSpec = serde_json::from_value(
        json!({"mode": "custom", "colors": ["#ff0000", [0.0, 1.0, 0.0]], "size": 3}),
    )
    .unwrap();
    let p = generate_palette(&mut ArtRng::from_seed(0), &s);
    assert_eq!(p.cyclic(2), Rgba::rgb(1.0, 0.0, 0.0));
}
