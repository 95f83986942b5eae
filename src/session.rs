use crate::params::GenerationParameters;
use crate::random::fresh_seed;

/// Adapter-side "current seed" holder.
///
/// Mirrors a control panel: the seed shown to the user, re-rolled by a "new random layout"
/// action and applied to every regenerate. The composition core never sees this type.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SeedSession {
    current: Option<u64>,
}

impl SeedSession {
    /// Start with a freshly drawn seed.
    pub fn new_random() -> Self {
        Self {
            current: Some(fresh_seed()),
        }
    }

    pub fn pinned(seed: u64) -> Self {
        Self {
            current: Some(seed),
        }
    }

    pub fn current(&self) -> Option<u64> {
        self.current
    }

    /// Draw a new seed and make it current.
    pub fn reroll(&mut self) -> u64 {
        let seed = fresh_seed();
        self.current = Some(seed);
        seed
    }

    pub fn pin(&mut self, seed: u64) {
        self.current = Some(seed);
    }

    /// Remember the seed a composition actually used.
    pub fn record(&mut self, effective: u64) {
        self.current = Some(effective);
    }

    /// Return `params` with the held seed filled in (an explicit seed in `params` is replaced).
    pub fn apply(&self, params: &GenerationParameters) -> GenerationParameters {
        params.clone().with_seed(self.current.or(params.seed))
    }
}
