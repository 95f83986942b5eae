use serde::Serialize;

use crate::foundation::color::Rgba;
use crate::foundation::core::{FigureSize, Point, Viewport};
use crate::foundation::error::PetalResult;
use crate::palette::{Palette, generate_palette};
use crate::params::{GenerationParameters, OutlineStyle};
use crate::placement::{BlobRanges, BlobSpec, place_blobs};
use crate::random::{ArtRng, resolve_seed};
use crate::shape::{BlobOutline, OutlineParams, generate_blob_outline};

pub const TITLE_SIZE_PT: f64 = 26.0;
pub const SUBTITLE_SIZE_PT: f64 = 16.0;

/// Stroke applied on top of a blob fill.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Stroke {
    pub color: Rgba,
    /// Width in viewport units.
    pub width: f64,
}

/// One filled blob, in composite order.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BlobLayer {
    pub spec: BlobSpec,
    pub outline: BlobOutline,
    /// Fill color with the blob alpha applied.
    pub fill: Rgba,
    pub stroke: Option<Stroke>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FontWeight {
    Normal,
    Bold,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FontStyle {
    Normal,
    Italic,
}

/// Text drawn after every blob, anchored at its top-left corner.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TextOverlay {
    pub text: String,
    /// Top-left anchor in viewport coordinates.
    pub anchor: Point,
    pub size_pt: f64,
    pub weight: FontWeight,
    pub style: FontStyle,
    pub color: Rgba,
}

/// Vector result of a composition: what to draw, in which order, on which window.
///
/// Layers are only ever appended; the first layer is the back-most.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ComposedImage {
    pub figure: FigureSize,
    pub viewport: Viewport,
    pub background: Rgba,
    pub palette: Palette,
    pub layers: Vec<BlobLayer>,
    pub texts: Vec<TextOverlay>,
}

impl ComposedImage {
    fn new(params: &GenerationParameters, palette: Palette) -> Self {
        Self {
            figure: params.canvas,
            viewport: params.viewport,
            background: params.background,
            palette,
            layers: Vec::new(),
            texts: Vec::new(),
        }
    }

    fn push_layer(&mut self, layer: BlobLayer) {
        self.layers.push(layer);
    }

    fn push_text(&mut self, text: TextOverlay) {
        self.texts.push(text);
    }

    pub fn specs(&self) -> impl Iterator<Item = &BlobSpec> {
        self.layers.iter().map(|l| &l.spec)
    }
}

/// A finished image plus the seed that produced it.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Composition {
    pub image: ComposedImage,
    pub seed: u64,
}

/// Produce one poster from `params`.
///
/// Parameters are validated first; nothing is drawn for invalid input. When `params.seed` is
/// `None` a fresh seed is drawn and returned in [`Composition::seed`], and feeding it back
/// reproduces the same image.
#[tracing::instrument(skip(params), fields(seed = ?params.seed))]
pub fn compose(params: &GenerationParameters) -> PetalResult<Composition> {
    params.validate()?;

    let seed = resolve_seed(params.seed);
    tracing::debug!(seed, supplied = params.seed.is_some(), "resolved seed");
    let mut rng = ArtRng::from_seed(seed);

    let palette = generate_palette(&mut rng, &params.palette);
    let ranges = BlobRanges {
        radius: params.radius,
        wobble: params.wobble,
        spikes: params.spikes,
        alpha: params.alpha,
    };
    let specs = place_blobs(&mut rng, &params.placement, &ranges, &palette);

    let stroke = match params.outline {
        OutlineStyle::None => None,
        OutlineStyle::Dark => Some(Stroke {
            color: OutlineStyle::DARK_COLOR,
            width: OutlineStyle::DARK_WIDTH,
        }),
    };

    let mut image = ComposedImage::new(params, palette);
    for spec in specs {
        let outline = generate_blob_outline(
            &mut rng,
            &OutlineParams {
                center: spec.center,
                radius: spec.radius,
                wobble: spec.wobble,
                spikes: spec.spikes,
                spike_depth: params.spike_depth,
                point_count: params.point_count,
                profile: params.profile,
            },
        );
        image.push_layer(BlobLayer {
            fill: spec.color.with_alpha(spec.alpha),
            spec,
            outline,
            stroke,
        });
    }

    let h = params.viewport.half_extent;
    image.push_text(TextOverlay {
        text: params.title.clone(),
        anchor: Point::new(-0.9 * h, 0.9 * h),
        size_pt: TITLE_SIZE_PT,
        weight: FontWeight::Bold,
        style: FontStyle::Normal,
        color: Rgba::BLACK,
    });
    image.push_text(TextOverlay {
        text: params.subtitle.clone(),
        anchor: Point::new(-0.9 * h, 0.8 * h),
        size_pt: SUBTITLE_SIZE_PT,
        weight: FontWeight::Normal,
        style: FontStyle::Italic,
        color: Rgba::BLACK,
    });

    tracing::debug!(blobs = image.layers.len(), "composition finished");
    Ok(Composition { image, seed })
}

#[cfg(test)]
#[path = "../tests/unit/compose.rs"]
mod tests;
