use crate::range::RangeConfig;
use rand::{FromEntropy, Rng, SeedableRng};
use std::fmt;
use std::ops::{Deref, DerefMut};

// Pcg32 = Lcg64Xsh32 has "16 bytes of state and 128-bit seeds", and is "considered value-stable
// (i.e. any change affecting the output given a fixed seed would be considered a breaking change
// to the crate)". Seeded runs depend on that.
type RngImpl = rand_pcg::Lcg64Xsh32;

pub struct Random {
    rng: RngImpl,
}

/// Saved engine state. Restoring it puts the engine back exactly where it was when the snapshot
/// was taken.
pub struct RngState {
    rng: RngImpl,
}

impl Random {
    pub fn new() -> Self {
        Random { rng: RngImpl::from_entropy() }
    }

    pub fn from_seed(seed: u64) -> Self {
        Random { rng: RngImpl::seed_from_u64(seed) }
    }

    /// Draws uniformly from `range`, both ends included.
    pub fn get(&mut self, range: RangeConfig) -> i32 {
        // Widen so that `max + 1` cannot overflow.
        self.rng.gen_range(i64::from(range.min()), i64::from(range.max()) + 1) as i32
    }

    pub fn seed(&mut self, seed: u64) {
        self.rng = RngImpl::seed_from_u64(seed);
    }

    pub fn seed_unpredictably(&mut self) {
        self.rng = RngImpl::from_entropy();
    }

    pub fn snapshot(&self) -> RngState {
        RngState { rng: self.rng.clone() }
    }

    pub fn restore(&mut self, state: RngState) {
        self.rng = state.rng;
    }

    /// Reseeds the engine for the lifetime of the returned guard. The previous state comes back
    /// when the guard is dropped, whichever way the scope is left.
    pub fn reseeded(&mut self, seed: u64) -> Reseeded {
        let saved = self.snapshot();
        self.seed(seed);
        Reseeded {
            random: self,
            saved: Some(saved),
        }
    }
}

impl Default for Random {
    fn default() -> Self {
        Random::new()
    }
}

impl fmt::Debug for Random {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Random {{ .. }}")
    }
}

impl fmt::Debug for RngState {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "RngState {{ .. }}")
    }
}

pub struct Reseeded<'a> {
    random: &'a mut Random,
    saved: Option<RngState>,
}

impl<'a> Deref for Reseeded<'a> {
    type Target = Random;
    fn deref(&self) -> &Random {
        self.random
    }
}

impl<'a> DerefMut for Reseeded<'a> {
    fn deref_mut(&mut self) -> &mut Random {
        self.random
    }
}

impl<'a> Drop for Reseeded<'a> {
    fn drop(&mut self) {
        if let Some(saved) = self.saved.take() {
            self.random.restore(saved);
        }
    }
}
