use super::*;
use crate::foundation::color::Rgba;
use crate::foundation::core::Point;

fn overlay(text: &str, weight: FontWeight, style: FontStyle) -> TextOverlay {
    TextOverlay {
        text: text.to_string(),
        anchor: Point::new(-9.0, 9.0),
        size_pt: 26.0,
        weight,
        style,
        color: Rgba::BLACK,
    }
}

#[test]
fn points_scale_with_dpi() {
    assert!((points_to_px(72.0, 300) - 300.0).abs() < 1e-12);
    assert!((points_to_px(26.0, 72) - 26.0).abs() < 1e-12);
}

#[test]
fn svg_places_text_at_top_left_anchor() {
    let texts = [overlay("Hello", FontWeight::Bold, FontStyle::Normal)];
    let svg = overlay_svg(&texts, Viewport::new(10.0), 200, 200, 72);
    // (-9, 9) in a 20-unit window over 200px lands at (10, 10); baseline is 0.8em below.
    assert!(svg.contains(r#"x="10.000""#), "{svg}");
    assert!(svg.contains(r#"y="30.800""#), "{svg}");
    assert!(svg.contains(r#"font-weight="bold""#));
    assert!(svg.contains(r#"font-style="normal""#));
    assert!(svg.contains(r##"fill="#000000""##));
}

#[test]
fn svg_escapes_markup_and_skips_blank_lines() {
    let texts = [
        overlay("a < b & \"c\"", FontWeight::Normal, FontStyle::Italic),
        overlay("   ", FontWeight::Normal, FontStyle::Normal),
    ];
    let svg = overlay_svg(&texts, Viewport::new(10.0), 100, 100, 72);
    assert!(svg.contains("a &lt; b &amp; &quot;c&quot;"));
    assert!(svg.contains(r#"font-style="italic""#));
    assert_eq!(svg.matches("<text").count(), 1);
}

#[test]
fn blank_overlays_produce_no_raster() {
    let r = TextRasterizer {
        fontdb: Arc::new(usvg::fontdb::Database::new()),
    };
    let texts = [overlay("", FontWeight::Bold, FontStyle::Normal)];
    assert!(
        r.rasterize(&texts, Viewport::new(10.0), 32, 32, 72)
            .unwrap()
            .is_none()
    );
}

#[test]
fn empty_font_database_skips_text() {
    let r = TextRasterizer {
        fontdb: Arc::new(usvg::fontdb::Database::new()),
    };
    assert_eq!(r.face_count(), 0);
    let texts = [overlay("Title", FontWeight::Bold, FontStyle::Normal)];
    assert!(
        r.rasterize(&texts, Viewport::new(10.0), 32, 32, 72)
            .unwrap()
            .is_none()
    );
}

#[test]
fn control_characters_are_dropped_from_titles() {
    let texts = [overlay(
        "\u{1}Poster\u{7} \u{FFFE}One\tTwo",
        FontWeight::Bold,
        FontStyle::Normal,
    )];
    let svg = overlay_svg(&texts, Viewport::new(10.0), 64, 64, 72);
    assert!(svg.contains(">Poster One\tTwo</text>"), "{svg}");
    assert!(!svg.contains('\u{1}') && !svg.contains('\u{7}') && !svg.contains('\u{FFFE}'));

    let opts = usvg::Options::default();
    assert!(usvg::Tree::from_str(&svg, &opts).is_ok());
}
