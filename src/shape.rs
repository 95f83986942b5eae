//! Organic blob outlines.
//!
//! An outline is a base profile (circle or heart curve, unit scale) whose radius is modulated
//! per vertex by gaussian noise scaled by the wobble and by a sinusoid with `spikes` periods per
//! turn. The sinusoid phase is drawn once per shape, so equal parameters still give distinct
//! silhouettes unless the seed is pinned.

use std::f64::consts::TAU;

use serde::{Deserialize, Serialize};

use crate::foundation::core::{BezPath, Point};
use crate::foundation::math::signed_area;
use crate::random::ArtRng;

/// Reference outline density.
pub const DEFAULT_POINT_COUNT: usize = 300;

/// Base silhouette a blob is modulated from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapeProfile {
    /// Normalized heart curve.
    #[default]
    Heart,
    /// Plain circle; with spikes this reads as a spiky bloom.
    Circle,
}

impl ShapeProfile {
    /// Unit-scale base point for parameter `t ∈ [0, 2π)`.
    pub fn base_point(self, t: f64) -> Point {
        match self {
            Self::Circle => Point::new(t.cos(), t.sin()),
            Self::Heart => {
                let x = 16.0 * t.sin().powi(3);
                let y = 13.0 * t.cos()
                    - 5.0 * (2.0 * t).cos()
                    - 2.0 * (3.0 * t).cos()
                    - (4.0 * t).cos();
                Point::new(x / 17.0, y / 17.0)
            }
        }
    }
}

/// Inputs for one outline.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OutlineParams {
    pub center: Point,
    pub radius: f64,
    pub wobble: f64,
    pub spikes: u32,
    pub spike_depth: f64,
    pub point_count: usize,
    pub profile: ShapeProfile,
}

/// Implicitly closed polygon; the last vertex connects back to the first.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BlobOutline {
    pub points: Vec<Point>,
}

impl BlobOutline {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn signed_area(&self) -> f64 {
        signed_area(&self.points)
    }

    pub fn to_bez_path(&self) -> BezPath {
        let mut path = BezPath::new();
        let mut it = self.points.iter();
        if let Some(first) = it.next() {
            path.move_to(*first);
            for p in it {
                path.line_to(*p);
            }
            path.close_path();
        }
        path
    }
}

/// Build one blob outline, drawing the phase and per-vertex noise from `rng`.
///
/// Draw order is fixed (phase, then one gaussian per vertex) so seeded runs stay reproducible.
pub fn generate_blob_outline(rng: &mut ArtRng, p: &OutlineParams) -> BlobOutline {
    let phase = rng.phase();
    let n = p.point_count;
    let spikes = f64::from(p.spikes);

    let mut points = Vec::with_capacity(n);
    for i in 0..n {
        let theta = TAU * (i as f64) / (n as f64);
        let noise = p.wobble * rng.gaussian();
        let petal = if p.spikes == 0 {
            0.0
        } else {
            p.spike_depth * (spikes * theta + phase).sin()
        };
        let modulation = 1.0 + noise + petal;
        let base = p.profile.base_point(theta);
        points.push(Point::new(
            p.center.x + p.radius * modulation * base.x,
            p.center.y + p.radius * modulation * base.y,
        ));
    }
    BlobOutline { points }
}

#[cfg(test)]
#[path = "../tests/unit/shape.rs"]
mod tests;
