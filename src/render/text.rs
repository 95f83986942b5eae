use std::path::PathBuf;
use std::sync::Arc;

use crate::compose::{FontStyle, FontWeight, TextOverlay};
use crate::foundation::core::Viewport;
use crate::foundation::error::{PetalError, PetalResult};

/// Typographic ascent used to turn a top-left anchor into an SVG baseline.
const ASCENT_EM: f64 = 0.8;

pub(crate) fn points_to_px(pt: f64, dpi: u32) -> f64 {
    pt * f64::from(dpi) / 72.0
}

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            c if is_xml_char(c) => out.push(c),
            _ => {}
        }
    }
    out
}

/// XML 1.0 `Char` production; anything else makes the document unparseable.
fn is_xml_char(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n' | '\r' | '\u{20}'..='\u{D7FF}' | '\u{E000}'..='\u{FFFD}' | '\u{10000}'..
    )
}

/// Build a `width × height` SVG document holding the overlays in pixel space.
pub(crate) fn overlay_svg(
    texts: &[TextOverlay],
    viewport: Viewport,
    width: u32,
    height: u32,
    dpi: u32,
) -> String {
    let to_px = viewport.to_pixels(width, height);
    let mut svg = format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}">"#
    );
    for t in texts.iter().filter(|t| !t.text.trim().is_empty()) {
        let top_left = to_px * t.anchor;
        let size = points_to_px(t.size_pt, dpi);
        let baseline = top_left.y + ASCENT_EM * size;
        let weight = match t.weight {
            FontWeight::Normal => "normal",
            FontWeight::Bold => "bold",
        };
        let style = match t.style {
            FontStyle::Normal => "normal",
            FontStyle::Italic => "italic",
        };
        svg.push_str(&format!(
            r#"<text x="{:.3}" y="{:.3}" font-family="sans-serif" font-size="{:.3}" font-weight="{weight}" font-style="{style}" fill="{}" fill-opacity="{:.4}">{}</text>"#,
            top_left.x,
            baseline,
            size,
            t.color.to_hex_rgb(),
            t.color.a.clamp(0.0, 1.0),
            escape_xml(&t.text),
        ));
    }
    svg.push_str("</svg>");
    svg
}

/// Lays out and rasterizes text overlays with `usvg`/`resvg`.
///
/// The font database is loaded once and shared between clones.
#[derive(Clone)]
pub(crate) struct TextRasterizer {
    fontdb: Arc<usvg::fontdb::Database>,
}

impl TextRasterizer {
    pub(crate) fn new(font_dirs: &[PathBuf]) -> Self {
        let mut db = usvg::fontdb::Database::new();
        db.load_system_fonts();
        for dir in font_dirs {
            db.load_fonts_dir(dir);
        }
        tracing::debug!(faces = db.len(), "loaded font database");
        Self {
            fontdb: Arc::new(db),
        }
    }

    pub(crate) fn face_count(&self) -> usize {
        self.fontdb.len()
    }

    /// Premultiplied RGBA8 raster of the overlays, or `None` when nothing would be drawn.
    pub(crate) fn rasterize(
        &self,
        texts: &[TextOverlay],
        viewport: Viewport,
        width: u32,
        height: u32,
        dpi: u32,
    ) -> PetalResult<Option<Vec<u8>>> {
        if texts.iter().all(|t| t.text.trim().is_empty()) {
            return Ok(None);
        }
        if self.face_count() == 0 {
            tracing::warn!("no fonts available; skipping title and subtitle");
            return Ok(None);
        }

        let svg = overlay_svg(texts, viewport, width, height, dpi);
        let opts = usvg::Options {
            fontdb: self.fontdb.clone(),
            ..Default::default()
        };
        let tree = usvg::Tree::from_str(&svg, &opts)
            .map_err(|e| PetalError::render(format!("parse text overlay svg: {e}")))?;

        let mut pixmap = resvg::tiny_skia::Pixmap::new(width, height)
            .ok_or_else(|| PetalError::render("failed to allocate text pixmap"))?;
        resvg::render(
            &tree,
            resvg::tiny_skia::Transform::identity(),
            &mut pixmap.as_mut(),
        );
        Ok(Some(pixmap.take()))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/text.rs"]
mod tests;
