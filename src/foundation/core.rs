use crate::foundation::error::{PetalError, PetalResult};

pub use kurbo::{Affine, BezPath, Point, Rect};

/// Physical poster size in inches. Pixel size is derived from this and the export DPI.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FigureSize {
    pub width_in: f64,
    pub height_in: f64,
}

impl Default for FigureSize {
    fn default() -> Self {
        Self {
            width_in: 6.0,
            height_in: 8.0,
        }
    }
}

impl FigureSize {
    /// Pixel dimensions at `dpi`, each side at least 1.
    pub fn pixels_at(self, dpi: u32) -> PetalResult<(u32, u32)> {
        if dpi == 0 {
            return Err(PetalError::validation("dpi must be > 0"));
        }
        let to_px = |inches: f64| -> PetalResult<u32> {
            let px = (inches * f64::from(dpi)).round();
            if !px.is_finite() || px < 1.0 || px > f64::from(u16::MAX) {
                return Err(PetalError::validation(format!(
                    "figure side of {inches}in at {dpi}dpi gives {px}px (must be 1..={})",
                    u16::MAX
                )));
            }
            Ok(px as u32)
        };
        Ok((to_px(self.width_in)?, to_px(self.height_in)?))
    }
}

/// Square logical coordinate window `[-half_extent, half_extent]²`, y pointing up.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Viewport {
    pub half_extent: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self { half_extent: 10.0 }
    }
}

impl Viewport {
    pub fn new(half_extent: f64) -> Self {
        Self { half_extent }
    }

    pub fn rect(self) -> Rect {
        let h = self.half_extent;
        Rect::new(-h, -h, h, h)
    }

    /// Map logical coordinates onto a `width × height` pixel grid (y flipped).
    pub fn to_pixels(self, width: u32, height: u32) -> Affine {
        let r = self.rect();
        let sx = f64::from(width) / r.width();
        let sy = f64::from(height) / r.height();
        Affine::new([sx, 0.0, 0.0, -sy, -r.x0 * sx, r.y1 * sy])
    }
}
