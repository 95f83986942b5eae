use std::path::PathBuf;

use crate::compose::{BlobLayer, ComposedImage};
use crate::foundation::color::Rgba;
use crate::foundation::core::{Affine, BezPath};
use crate::foundation::error::{PetalError, PetalResult};
use crate::render::composite::over_in_place;
use crate::render::text::TextRasterizer;
use crate::render::{FrameRGBA, RenderBackend};

/// Reference export resolution.
pub const DEFAULT_DPI: u32 = 300;

/// Options for the CPU backend.
#[derive(Clone, Debug)]
pub struct CpuBackendOpts {
    /// Pixels per inch of the figure size.
    pub dpi: u32,
    /// Extra directories scanned for `.ttf`/`.otf`/`.ttc` files, on top of system fonts.
    pub font_dirs: Vec<PathBuf>,
    /// Skip title and subtitle rasterization entirely.
    pub skip_text: bool,
}

impl Default for CpuBackendOpts {
    fn default() -> Self {
        Self {
            dpi: DEFAULT_DPI,
            font_dirs: Vec::new(),
            skip_text: false,
        }
    }
}

/// CPU backend: `vello_cpu` for blob fills and strokes, `resvg` for text.
pub struct CpuBackend {
    opts: CpuBackendOpts,
    text: Option<TextRasterizer>,
}

impl CpuBackend {
    pub fn new(opts: CpuBackendOpts) -> Self {
        Self { opts, text: None }
    }

    /// Load the font database now instead of on the first render. Returns the face count.
    pub fn preload_fonts(&mut self) -> usize {
        self.text_rasterizer().face_count()
    }

    /// Backend with the same options sharing any font database already loaded.
    pub fn fork(&self) -> Self {
        Self {
            opts: self.opts.clone(),
            text: self.text.clone(),
        }
    }

    pub fn opts(&self) -> &CpuBackendOpts {
        &self.opts
    }

    fn text_rasterizer(&mut self) -> &TextRasterizer {
        let dirs = &self.opts.font_dirs;
        self.text.get_or_insert_with(|| TextRasterizer::new(dirs))
    }
}

impl RenderBackend for CpuBackend {
    #[tracing::instrument(skip(self, image), fields(layers = image.layers.len()))]
    fn render(&mut self, image: &ComposedImage) -> PetalResult<FrameRGBA> {
        let (width, height) = image.figure.pixels_at(self.opts.dpi)?;
        let width_u16: u16 = width
            .try_into()
            .map_err(|_| PetalError::render("surface width exceeds u16"))?;
        let height_u16: u16 = height
            .try_into()
            .map_err(|_| PetalError::render("surface height exceeds u16"))?;

        let mut ctx = vello_cpu::RenderContext::new(width_u16, height_u16);

        ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        ctx.set_paint(color_to_cpu(image.background));
        ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
            0.0,
            0.0,
            f64::from(width),
            f64::from(height),
        ));

        let to_px = image.viewport.to_pixels(width, height);
        for layer in &image.layers {
            draw_layer(&mut ctx, layer, to_px);
        }

        ctx.flush();
        let mut pixmap = vello_cpu::Pixmap::new(width_u16, height_u16);
        ctx.render_to_pixmap(&mut pixmap);
        let mut data = pixmap.data_as_u8_slice().to_vec();

        if !self.opts.skip_text {
            let dpi = self.opts.dpi;
            let text = self
                .text_rasterizer()
                .rasterize(&image.texts, image.viewport, width, height, dpi)?;
            if let Some(text) = text {
                over_in_place(&mut data, &text)?;
            }
        }

        Ok(FrameRGBA {
            width,
            height,
            data,
            premultiplied: true,
        })
    }
}

fn draw_layer(ctx: &mut vello_cpu::RenderContext, layer: &BlobLayer, to_px: Affine) {
    if layer.outline.is_empty() {
        return;
    }
    let path = bezpath_to_cpu(&layer.outline.to_bez_path());

    ctx.set_transform(affine_to_cpu(to_px));
    ctx.set_paint(color_to_cpu(layer.fill));
    ctx.fill_path(&path);

    if let Some(stroke) = layer.stroke {
        ctx.set_stroke(vello_cpu::kurbo::Stroke::new(stroke.width));
        ctx.set_paint(color_to_cpu(stroke.color));
        ctx.stroke_path(&path);
    }
}

fn color_to_cpu(c: Rgba) -> vello_cpu::peniko::Color {
    let [r, g, b, a] = c.to_rgba8();
    vello_cpu::peniko::Color::from_rgba8(r, g, b, a)
}

fn affine_to_cpu(a: Affine) -> vello_cpu::kurbo::Affine {
    vello_cpu::kurbo::Affine::new(a.as_coeffs())
}

fn point_to_cpu(p: crate::foundation::core::Point) -> vello_cpu::kurbo::Point {
    vello_cpu::kurbo::Point::new(p.x, p.y)
}

fn bezpath_to_cpu(path: &BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(point_to_cpu(p)),
            PathEl::LineTo(p) => out.line_to(point_to_cpu(p)),
            PathEl::QuadTo(p1, p2) => out.quad_to(point_to_cpu(p1), point_to_cpu(p2)),
            PathEl::CurveTo(p1, p2, p3) => {
                out.curve_to(point_to_cpu(p1), point_to_cpu(p2), point_to_cpu(p3));
            }
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}
