use std::f64::consts::TAU;

use serde::{Deserialize, Serialize};

use crate::foundation::color::Rgba;
use crate::foundation::core::Point;
use crate::foundation::error::{PetalError, PetalResult};
use crate::palette::Palette;
use crate::params::Span;
use crate::random::ArtRng;

/// Most blobs a single poster may hold.
pub const MAX_BLOB_COUNT: usize = 10_000;

/// Largest accepted distance-like value (extents, sigma, step, radii) in viewport units.
pub const MAX_EXTENT: f64 = 1_000.0;

/// Where blob centers come from and how many blobs there are.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Placement {
    /// `count` centers uniform in `[-half_extent, half_extent]²`.
    Scatter { count: u32, half_extent: f64 },
    /// `layers × density` centers from an isotropic gaussian at the origin.
    Cluster { layers: u32, density: u32, sigma: f64 },
    /// One blob per (arm, layer) on a polar grid, plus a central blob on top.
    Radial {
        arms: u32,
        layers: u32,
        step: f64,
        center_radius: f64,
    },
}

impl Default for Placement {
    fn default() -> Self {
        Self::Scatter {
            count: 8,
            half_extent: 8.0,
        }
    }
}

impl Placement {
    pub fn validate(&self) -> PetalResult<()> {
        match *self {
            Self::Scatter { count, half_extent } => {
                positive_count("placement.count", count)?;
                extent("placement.half_extent", half_extent)?;
            }
            Self::Cluster {
                layers,
                density,
                sigma,
            } => {
                positive_count("placement.layers", layers)?;
                positive_count("placement.density", density)?;
                layers.checked_mul(density).ok_or_else(|| {
                    PetalError::validation("placement.layers * placement.density overflows")
                })?;
                extent("placement.sigma", sigma)?;
            }
            Self::Radial {
                arms,
                layers,
                step,
                center_radius,
            } => {
                positive_count("placement.arms", arms)?;
                positive_count("placement.layers", layers)?;
                arms.checked_mul(layers)
                    .and_then(|n| n.checked_add(1))
                    .ok_or_else(|| {
                        PetalError::validation("placement.arms * placement.layers overflows")
                    })?;
                extent("placement.step", step)?;
                extent("placement.center_radius", center_radius)?;
            }
        }
        let n = self.blob_count();
        if n > MAX_BLOB_COUNT {
            return Err(PetalError::validation(format!(
                "placement yields {n} blobs, more than the limit of {MAX_BLOB_COUNT}"
            )));
        }
        Ok(())
    }

    /// Number of blobs this strategy yields.
    pub fn blob_count(&self) -> usize {
        match *self {
            Self::Scatter { count, .. } => count as usize,
            Self::Cluster {
                layers, density, ..
            } => layers as usize * density as usize,
            Self::Radial { arms, layers, .. } => arms as usize * layers as usize + 1,
        }
    }
}

fn positive_count(field: &str, v: u32) -> PetalResult<()> {
    if v == 0 {
        return Err(PetalError::validation(format!("{field} must be > 0")));
    }
    Ok(())
}

fn extent(field: &str, v: f64) -> PetalResult<()> {
    if !v.is_finite() || !(0.0..=MAX_EXTENT).contains(&v) {
        return Err(PetalError::validation(format!(
            "{field} must lie within [0, {MAX_EXTENT}] (got {v})"
        )));
    }
    Ok(())
}

/// Which slot of the strategy produced a blob.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BlobOrigin {
    Scatter { index: u32 },
    Cluster { index: u32 },
    Radial { arm: u32, layer: u32 },
    Center,
}

/// Per-blob draw, created fresh during composition.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BlobSpec {
    pub origin: BlobOrigin,
    pub center: Point,
    pub radius: f64,
    pub wobble: f64,
    pub spikes: u32,
    pub palette_index: usize,
    pub color: Rgba,
    pub alpha: f64,
}

/// Per-blob ranges shared by every strategy.
#[derive(Clone, Copy, Debug)]
pub struct BlobRanges {
    pub radius: Span<f64>,
    pub wobble: Span<f64>,
    pub spikes: Span<u32>,
    pub alpha: Span<f64>,
}

struct Draw {
    radius: f64,
    wobble: f64,
    spikes: u32,
    alpha: f64,
}

fn draw_attrs(rng: &mut ArtRng, r: &BlobRanges) -> Draw {
    Draw {
        radius: rng.uniform(r.radius.lo(), r.radius.hi()),
        wobble: rng.uniform(r.wobble.lo(), r.wobble.hi()),
        spikes: rng.int_inclusive(r.spikes.lo(), r.spikes.hi()),
        alpha: rng.uniform(r.alpha.lo(), r.alpha.hi()),
    }
}

fn spec(origin: BlobOrigin, center: Point, d: Draw, palette: &Palette, idx: usize) -> BlobSpec {
    BlobSpec {
        origin,
        center,
        radius: d.radius,
        wobble: d.wobble,
        spikes: d.spikes,
        palette_index: idx,
        color: palette.cyclic(idx),
        alpha: d.alpha,
    }
}

/// Produce the blob specs in back-to-front order.
///
/// `placement` must have passed [`Placement::validate`] and `palette` must be non-empty. The
/// per-blob draw order within a strategy is part of the reproducibility contract: center, then
/// radius, wobble, spikes, alpha, then the palette pick.
pub fn place_blobs(
    rng: &mut ArtRng,
    placement: &Placement,
    ranges: &BlobRanges,
    palette: &Palette,
) -> Vec<BlobSpec> {
    let mut out = Vec::with_capacity(placement.blob_count());
    match *placement {
        Placement::Scatter { count, half_extent } => {
            for index in 0..count {
                let x = rng.uniform(-half_extent, half_extent);
                let y = rng.uniform(-half_extent, half_extent);
                let d = draw_attrs(rng, ranges);
                let idx = rng.index(palette.len());
                out.push(spec(
                    BlobOrigin::Scatter { index },
                    Point::new(x, y),
                    d,
                    palette,
                    idx,
                ));
            }
        }
        Placement::Cluster {
            layers,
            density,
            sigma,
        } => {
            for index in 0..layers * density {
                let x = sigma * rng.gaussian();
                let y = sigma * rng.gaussian();
                let d = draw_attrs(rng, ranges);
                let idx = rng.index(palette.len());
                out.push(spec(
                    BlobOrigin::Cluster { index },
                    Point::new(x, y),
                    d,
                    palette,
                    idx,
                ));
            }
        }
        Placement::Radial {
            arms,
            layers,
            step,
            center_radius,
        } => {
            for layer in 1..=layers {
                let dist = f64::from(layer) * step;
                for arm in 0..arms {
                    let theta = TAU * f64::from(arm) / f64::from(arms);
                    let center = Point::new(dist * theta.cos(), dist * theta.sin());
                    let d = draw_attrs(rng, ranges);
                    let idx = (arm as usize + layer as usize) % palette.len();
                    out.push(spec(
                        BlobOrigin::Radial { arm, layer },
                        center,
                        d,
                        palette,
                        idx,
                    ));
                }
            }
            let core = Draw {
                radius: center_radius,
                wobble: ranges.wobble.lo(),
                spikes: ranges.spikes.lo(),
                alpha: ranges.alpha.hi(),
            };
            out.push(spec(BlobOrigin::Center, Point::ORIGIN, core, palette, 0));
        }
    }
    out
}

#[cfg(test)]
#[path = "../tests/unit/placement.rs"]
mod tests;
