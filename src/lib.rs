//! Seeded generative poster renderer.
//!
//! A poster is a stack of translucent organic blobs (hearts or spiky blooms) placed by a
//! scatter, cluster or radial strategy, colored from a palette and captioned with a title and
//! subtitle. The pipeline is:
//!
//! - build and validate [`GenerationParameters`] (by hand, from JSON, or from a [`preset`])
//! - [`compose`] them into a vector [`ComposedImage`] plus the effective seed
//! - rasterize with [`CpuBackend`] and hand the [`FrameRGBA`] to an [`ImageSink`]
//!
//! Composition is pure: the same parameters with the same seed always give the same image.
#![forbid(unsafe_code)]

mod foundation;

pub mod compose;
pub mod encode;
pub mod palette;
pub mod params;
pub mod placement;
pub mod presets;
pub mod random;
pub mod render;
pub mod session;
pub mod shape;

pub use crate::foundation::color::Rgba;
pub use crate::foundation::core::{Affine, BezPath, FigureSize, Point, Rect, Viewport};
pub use crate::foundation::error::{PetalError, PetalResult};
pub use crate::foundation::math::signed_area;

pub use crate::compose::{
    BlobLayer, ComposedImage, Composition, FontStyle, FontWeight, Stroke, TextOverlay, compose,
};
pub use crate::encode::sink::{ImageSink, InMemorySink, PngSink, encode_png};
pub use crate::palette::{Palette, PaletteMode, PaletteSpec, generate_palette};
pub use crate::params::{GenerationParameters, MAX_POINT_COUNT, MAX_WOBBLE, OutlineStyle, Span};
pub use crate::placement::{
    BlobOrigin, BlobRanges, BlobSpec, MAX_BLOB_COUNT, MAX_EXTENT, Placement, place_blobs,
};
pub use crate::presets::{PRESET_NAMES, preset};
pub use crate::random::{ArtRng, FRESH_SEED_MAX, batch_seeds, resolve_seed};
pub use crate::render::cpu::{CpuBackend, CpuBackendOpts, DEFAULT_DPI};
pub use crate::render::{FrameRGBA, RenderBackend};
pub use crate::session::SeedSession;
pub use crate::shape::{BlobOutline, OutlineParams, ShapeProfile, generate_blob_outline};
