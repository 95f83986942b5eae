use std::path::{Path, PathBuf};

use crate::foundation::error::{PetalError, PetalResult};
use crate::foundation::math::unpremultiply_in_place;
use crate::render::FrameRGBA;

/// Consumer of finished posters.
pub trait ImageSink {
    /// Accept one rendered frame along with the seed that produced it.
    fn write(&mut self, frame: &FrameRGBA, seed: u64) -> PetalResult<()>;
}

/// Encode a frame as PNG bytes (straight alpha).
pub fn encode_png(frame: &FrameRGBA) -> PetalResult<Vec<u8>> {
    let img = to_rgba_image(frame)?;
    let mut out = std::io::Cursor::new(Vec::new());
    img.write_to(&mut out, image::ImageFormat::Png)
        .map_err(|e| PetalError::render(format!("encode png: {e}")))?;
    Ok(out.into_inner())
}

fn to_rgba_image(frame: &FrameRGBA) -> PetalResult<image::RgbaImage> {
    let mut straight = frame.data.clone();
    if frame.premultiplied {
        unpremultiply_in_place(&mut straight);
    }
    image::RgbaImage::from_raw(frame.width, frame.height, straight)
        .ok_or_else(|| PetalError::render("frame buffer does not match width*height*4"))
}

/// Writes PNG files.
///
/// With a fixed path every write replaces that file; with a directory each write lands at
/// `<dir>/<prefix>-<seed>.png`.
#[derive(Debug, Clone)]
pub enum PngSink {
    File(PathBuf),
    Dir { dir: PathBuf, prefix: String },
}

impl PngSink {
    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self::File(path.into())
    }

    pub fn dir(dir: impl Into<PathBuf>, prefix: impl Into<String>) -> Self {
        Self::Dir {
            dir: dir.into(),
            prefix: prefix.into(),
        }
    }

    /// Where a frame rendered with `seed` ends up.
    pub fn path_for(&self, seed: u64) -> PathBuf {
        match self {
            Self::File(p) => p.clone(),
            Self::Dir { dir, prefix } => dir.join(format!("{prefix}-{seed}.png")),
        }
    }
}

impl ImageSink for PngSink {
    fn write(&mut self, frame: &FrameRGBA, seed: u64) -> PetalResult<()> {
        let path = self.path_for(seed);
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        save_png(frame, &path)?;
        tracing::info!(path = %path.display(), seed, "wrote poster");
        Ok(())
    }
}

fn save_png(frame: &FrameRGBA, path: &Path) -> PetalResult<()> {
    let img = to_rgba_image(frame)?;
    img.save_with_format(path, image::ImageFormat::Png)
        .map_err(|e| PetalError::render(format!("write png '{}': {e}", path.display())))
}

/// In-memory sink for tests and debugging.
#[derive(Debug, Default)]
pub struct InMemorySink {
    pub frames: Vec<(u64, FrameRGBA)>,
}

impl InMemorySink {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ImageSink for InMemorySink {
    fn write(&mut self, frame: &FrameRGBA, seed: u64) -> PetalResult<()> {
        self.frames.push((seed, frame.clone()));
        Ok(())
    }
}
