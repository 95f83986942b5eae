use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_distr::StandardNormal;
use rand_pcg::Pcg64;

/// Upper bound (inclusive) for seeds drawn from entropy. Small enough to read off a screen.
pub const FRESH_SEED_MAX: u64 = 999_999;

/// Draw a fresh seed from the thread-local entropy source.
pub fn fresh_seed() -> u64 {
    rand::rng().random_range(0..=FRESH_SEED_MAX)
}

/// Return `seed` when present, otherwise a fresh one. Zero is a valid seed.
pub fn resolve_seed(seed: Option<u64>) -> u64 {
    match seed {
        Some(s) => s,
        None => fresh_seed(),
    }
}

/// Distinct seeds for a batch of `count` posters.
///
/// A fixed `first` seed anchors a run of consecutive seeds. Otherwise seeds are drawn fresh
/// and redrawn on collision; once `count` exceeds half the fresh range a consecutive run from a
/// single fresh seed is used instead.
pub fn batch_seeds(first: Option<u64>, count: usize) -> Vec<u64> {
    let consecutive = |start: u64| -> Vec<u64> {
        (0..count as u64).map(|i| start.wrapping_add(i)).collect()
    };
    match first {
        Some(start) => consecutive(start),
        None if count as u64 > FRESH_SEED_MAX.div_ceil(2) => consecutive(fresh_seed()),
        None => {
            let mut seen = HashSet::with_capacity(count);
            let mut seeds = Vec::with_capacity(count);
            while seeds.len() < count {
                let seed = fresh_seed();
                if seen.insert(seed) {
                    seeds.push(seed);
                }
            }
            seeds
        }
    }
}

/// Interpolate without forming `hi - lo`, which overflows for bounds near `±f64::MAX`.
fn lerp(lo: f64, hi: f64, t: f64) -> f64 {
    if lo == hi {
        return lo;
    }
    (lo * (1.0 - t) + hi * t).clamp(lo, hi)
}

/// Seeded random source owned by a single composition.
///
/// Every draw a composition makes (palette, placement, outline phase and noise) goes through
/// one instance, so the whole run is a function of the seed it was built from.
#[derive(Clone, Debug)]
pub struct ArtRng {
    inner: Pcg64,
}

impl ArtRng {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            inner: Pcg64::seed_from_u64(seed),
        }
    }

    /// Uniform in `[0, 1)`.
    pub fn unit(&mut self) -> f64 {
        self.inner.random::<f64>()
    }

    /// Uniform in `[lo, hi]`; returns exactly `lo` when `lo == hi`.
    pub fn uniform(&mut self, lo: f64, hi: f64) -> f64 {
        let t = self.unit();
        lerp(lo, hi, t)
    }

    /// Uniform integer in `[lo, hi]` (both inclusive).
    pub fn int_inclusive(&mut self, lo: u32, hi: u32) -> u32 {
        self.inner.random_range(lo..=hi)
    }

    /// Uniform index in `[0, len)`. `len` must be non-zero.
    pub fn index(&mut self, len: usize) -> usize {
        self.inner.random_range(0..len)
    }

    /// Standard normal sample.
    pub fn gaussian(&mut self) -> f64 {
        self.inner.sample(StandardNormal)
    }

    /// Uniform angle in `[0, 2π)`.
    pub fn phase(&mut self) -> f64 {
        self.unit() * std::f64::consts::TAU
    }

    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        items.shuffle(&mut self.inner);
    }
}
