use crate::compose::ComposedImage;
use crate::foundation::error::PetalResult;

pub mod composite;
pub mod cpu;
pub(crate) mod text;

/// A rendered poster as RGBA8 pixels.
///
/// Frames are premultiplied alpha; the flag makes that explicit at API boundaries.
#[derive(Clone, Debug)]
pub struct FrameRGBA {
    pub width: u32,
    pub height: u32,
    /// RGBA8 bytes, tightly packed, row-major.
    pub data: Vec<u8>,
    pub premultiplied: bool,
}

impl FrameRGBA {
    /// Pixel at `(x, y)`, `None` when out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        self.data.get(i..i + 4).map(|p| [p[0], p[1], p[2], p[3]])
    }
}

/// Rasterizes a [`ComposedImage`].
pub trait RenderBackend {
    fn render(&mut self, image: &ComposedImage) -> PetalResult<FrameRGBA>;
}
