use super::*;
use crate::palette::PaletteMode;

fn rejects(p: &GenerationParameters, needle: &str) {
    match p.validate() {
        Err(PetalError::Validation(msg)) => assert!(msg.contains(needle), "{msg}"),
        other => panic!("expected validation error mentioning {needle:?}, got {other:?}"),
    }
}

#[test]
fn defaults_validate() {
    let p = GenerationParameters::default();
    p.validate().unwrap();
    assert_eq!(p.seed, None);
    assert_eq!(p.point_count, DEFAULT_POINT_COUNT);
    assert_eq!(p.radius, Span(0.15, 0.45));
    assert_eq!(p.spikes, Span(0, 0));
}

#[test]
fn span_contains_is_inclusive() {
    let s = Span::new(0.25, 0.6);
    assert!(s.contains(0.25));
    assert!(s.contains(0.6));
    assert!(!s.contains(0.61));
    assert!(Span(3, 3).contains(3));
}

#[test]
fn inverted_ranges_are_rejected() {
    let mut p = GenerationParameters::default();
    p.alpha = Span(0.9, 0.2);
    rejects(&p, "alpha");

    let mut p = GenerationParameters::default();
    p.spikes = Span(7, 2);
    rejects(&p, "spikes");

    let mut p = GenerationParameters::default();
    p.radius = Span(2.0, 1.0);
    rejects(&p, "radius");
}

#[test]
fn out_of_domain_values_are_rejected() {
    let mut p = GenerationParameters::default();
    p.alpha = Span(0.2, 1.5);
    rejects(&p, "alpha");

    let mut p = GenerationParameters::default();
    p.wobble = Span(-0.1, 0.2);
    rejects(&p, "wobble");

    let mut p = GenerationParameters::default();
    p.radius = Span(0.1, f64::NAN);
    rejects(&p, "radius");

    let mut p = GenerationParameters::default();
    p.spike_depth = -0.5;
    rejects(&p, "spike_depth");

    let mut p = GenerationParameters::default();
    p.point_count = 1;
    rejects(&p, "point_count");

    let mut p = GenerationParameters::default();
    p.canvas.width_in = 0.0;
    rejects(&p, "canvas.width_in");

    let mut p = GenerationParameters::default();
    p.viewport = Viewport::new(-1.0);
    rejects(&p, "viewport");

    let mut p = GenerationParameters::default();
    p.background = Rgba::rgba(1.0, 1.0, 2.0, 1.0);
    rejects(&p, "background");
}

#[test]
fn nested_palette_and_placement_errors_surface() {
    let mut p = GenerationParameters::default();
    p.palette.size = 0;
    rejects(&p, "palette.size");

    let mut p = GenerationParameters::default();
    p.palette.mode = PaletteMode::Named {
        name: "neon".to_string(),
    };
    rejects(&p, "neon");

    let mut p = GenerationParameters::default();
    p.placement = Placement::Radial {
        arms: 0,
        layers: 3,
        step: 1.0,
        center_radius: 1.0,
    };
    rejects(&p, "placement.arms");
}

#[test]
fn zero_width_spans_are_valid() {
    let mut p = GenerationParameters::default();
    p.radius = Span(0.1, 0.1);
    p.alpha = Span(1.0, 1.0);
    p.wobble = Span(0.0, 0.0);
    p.validate().unwrap();
}

#[test]
fn partial_json_overlays_defaults() {
    let json = r##"{
        "seed": 42,
        "alpha": [0.1, 0.3],
        "background": "#ffeedd",
        "placement": { "kind": "cluster", "layers": 4, "density": 5, "sigma": 2.0 },
        "palette": { "mode": "named", "name": "ocean", "size": 3 }
    }"##;
    let p = GenerationParameters::from_reader(json.as_bytes()).unwrap();
    assert_eq!(p.seed, Some(42));
    assert_eq!(p.alpha, Span(0.1, 0.3));
    assert_eq!(p.background.to_rgba8(), [0xff, 0xee, 0xdd, 0xff]);
    assert_eq!(p.placement.blob_count(), 20);
    assert_eq!(p.palette.size, 3);

    let d = GenerationParameters::default();
    assert_eq!(p.radius, d.radius);
    assert_eq!(p.title, d.title);
    assert_eq!(p.profile, d.profile);
    p.validate().unwrap();
}

#[test]
fn unknown_fields_are_rejected() {
    let err = GenerationParameters::from_reader(r#"{ "radious": [1, 2] }"#.as_bytes())
        .unwrap_err();
    assert!(matches!(err, PetalError::Serde(_)), "{err}");
    assert!(err.to_string().contains("radious"));
}

#[test]
fn json_round_trip_keeps_every_field() {
    let mut p = GenerationParameters::default().with_seed(Some(0));
    p.outline = OutlineStyle::Dark;
    p.profile = ShapeProfile::Circle;
    let s = serde_json::to_string(&p).unwrap();
    let back = GenerationParameters::from_reader(s.as_bytes()).unwrap();
    assert_eq!(back, p);
}

#[test]
fn missing_file_is_reported() {
    let err = GenerationParameters::from_path("target/does-not-exist/params.json").unwrap_err();
    assert!(err.to_string().contains("does-not-exist"));
}

#[test]
fn oversized_inputs_are_rejected_before_allocation() {
    let p = GenerationParameters::from_reader(r#"{ "point_count": 1000000000000 }"#.as_bytes())
        .unwrap();
    rejects(&p, "point_count");

    let mut p = GenerationParameters::default();
    p.point_count = MAX_POINT_COUNT;
    p.validate().unwrap();

    let mut p = GenerationParameters::default();
    p.radius = Span(1.0, f64::MAX);
    rejects(&p, "radius");

    let mut p = GenerationParameters::default();
    p.wobble = Span(0.0, 1e300);
    rejects(&p, "wobble");

    let mut p = GenerationParameters::default();
    p.spike_depth = 1e300;
    rejects(&p, "spike_depth");

    let mut p = GenerationParameters::default();
    p.palette.size = usize::MAX;
    rejects(&p, "palette.size");

    let mut p = GenerationParameters::default();
    p.placement = Placement::Scatter {
        count: u32::MAX,
        half_extent: 8.0,
    };
    rejects(&p, "blobs");
}
