use crate::errors::ConfigError;
use crate::random::Random;
use crate::range::RangeConfig;
use std::ops::{Deref, DerefMut};
use tracing::{debug, error, info, trace, warn};

pub const DEFAULT_DETERMINISTIC_SEED: i32 = 12345;

/// How a generator turns engine output into its next value.
pub trait Strategy {
    fn draw(&mut self, random: &mut Random, range: RangeConfig) -> i32;
}

/// Continues the engine's stream.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct Production;

impl Strategy for Production {
    fn draw(&mut self, random: &mut Random, range: RangeConfig) -> i32 {
        random.get(range)
    }
}

/// Reseeds the engine with `base_seed + draw_index` before every draw, so the value at any
/// position depends only on the base seed and the position.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Deterministic {
    base_seed: i32,
    draw_index: u64,
}

impl Deterministic {
    pub fn new(base_seed: i32) -> Deterministic {
        Deterministic { base_seed: base_seed, draw_index: 0 }
    }

    pub fn base_seed(&self) -> i32 {
        self.base_seed
    }

    pub fn draw_index(&self) -> u64 {
        self.draw_index
    }

    pub fn reset(&mut self) {
        self.draw_index = 0;
    }

    /// The value at position `index` of this seed's sequence. The engine is left as it was.
    pub fn value_at(&self, random: &mut Random, range: RangeConfig, index: u64) -> i32 {
        random.reseeded(engine_seed(self.base_seed, index)).get(range)
    }
}

impl Strategy for Deterministic {
    fn draw(&mut self, random: &mut Random, range: RangeConfig) -> i32 {
        let value = self.value_at(random, range, self.draw_index);
        self.draw_index += 1;
        value
    }
}

fn engine_seed(seed: i32, offset: u64) -> u64 {
    (i64::from(seed) as u64).wrapping_add(offset)
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Mode {
    Production(Production),
    Deterministic(Deterministic),
}

impl Mode {
    fn strategy(&mut self) -> &mut dyn Strategy {
        match self {
            Mode::Production(production) => production,
            Mode::Deterministic(deterministic) => deterministic,
        }
    }
}

/// Draws target numbers from a configured range.
///
/// Each generator owns its engine. Seeded and deterministic draws reseed that engine only inside
/// a `Reseeded` scope, so they never disturb the production stream.
#[derive(Debug)]
pub struct NumberGenerator {
    range: RangeConfig,
    random: Random,
    mode: Mode,
    // Remembered while deterministic mode is off, so toggling it back on reuses it.
    deterministic_seed: i32,
    current_target: Option<i32>,
}

impl NumberGenerator {
    pub fn new(range: RangeConfig) -> NumberGenerator {
        NumberGenerator::with_random(range, Random::new())
    }

    /// A generator whose production stream is itself reproducible.
    pub fn with_seed(range: RangeConfig, seed: u64) -> NumberGenerator {
        NumberGenerator::with_random(range, Random::from_seed(seed))
    }

    fn with_random(range: RangeConfig, random: Random) -> NumberGenerator {
        debug!(%range, "number generator configured");
        NumberGenerator {
            range: range,
            random: random,
            mode: Mode::Production(Production),
            deterministic_seed: DEFAULT_DETERMINISTIC_SEED,
            current_target: None,
        }
    }

    pub fn range(&self) -> RangeConfig {
        self.range
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn is_deterministic(&self) -> bool {
        match self.mode {
            Mode::Deterministic(_) => true,
            Mode::Production(_) => false,
        }
    }

    pub fn deterministic_seed(&self) -> i32 {
        self.deterministic_seed
    }

    /// Number of draws since deterministic mode was last enabled or reset.
    pub fn draw_index(&self) -> Option<u64> {
        match self.mode {
            Mode::Deterministic(deterministic) => Some(deterministic.draw_index()),
            Mode::Production(_) => None,
        }
    }

    pub fn current_target(&self) -> Option<i32> {
        self.current_target
    }

    pub fn has_target(&self) -> bool {
        self.current_target.is_some()
    }

    pub fn next(&mut self) -> i32 {
        let value = self.mode.strategy().draw(&mut self.random, self.range);
        trace!(value, index = ?self.draw_index(), "generated target");
        self.current_target = Some(value);
        value
    }

    /// Draws a single value from an engine freshly seeded with `seed`. The engine state from
    /// before the call is restored afterwards, and the draw index is not advanced.
    pub fn generate_with_seed(&mut self, seed: i32) -> i32 {
        let value = self.random.reseeded(engine_seed(seed, 0)).get(self.range);
        debug!(seed, value, "generated target with seed");
        self.current_target = Some(value);
        value
    }

    pub fn is_correct(&self, guess: i32) -> bool {
        self.current_target == Some(guess)
    }

    /// `1` if the target is higher than `guess`, `-1` if it is lower, `0` on a match. `None`
    /// before any target has been drawn.
    pub fn compare_to_target(&self, guess: i32) -> Option<i32> {
        self.current_target.map(|target| {
            if guess < target {
                1
            } else if guess > target {
                -1
            } else {
                0
            }
        })
    }

    /// Replaces the range. An inverted or empty range is refused and the current one stays. A
    /// minimum below 1 is raised to 1.
    pub fn set_range(&mut self, min: i32, max: i32) -> Result<(), ConfigError> {
        if min >= max {
            error!(min, max, "invalid range, min must be less than max");
            return Err(ConfigError::InvalidRange(min, max));
        }
        let min = if min < 1 {
            warn!(min, "minimum is less than 1, adjusting to 1");
            1
        } else {
            min
        };
        let range = RangeConfig::new(min, max).map_err(|err| {
            error!(%err, "range not applied");
            err
        })?;
        self.range = range;
        info!(%range, "range updated");
        Ok(())
    }

    pub fn enable_deterministic_mode(&mut self, seed: i32) {
        self.deterministic_seed = seed;
        self.mode = Mode::Deterministic(Deterministic::new(seed));
        info!(seed, "deterministic mode enabled");
    }

    pub fn disable_deterministic_mode(&mut self) {
        self.mode = Mode::Production(Production);
        info!("deterministic mode disabled");
    }

    /// Returns whether deterministic mode is on afterwards.
    pub fn toggle_deterministic_mode(&mut self) -> bool {
        if self.is_deterministic() {
            self.disable_deterministic_mode();
            false
        } else {
            let seed = self.deterministic_seed;
            self.enable_deterministic_mode(seed);
            true
        }
    }

    /// Changes the base seed. If deterministic mode is on, the sequence restarts from it.
    pub fn set_deterministic_seed(&mut self, seed: i32) {
        self.deterministic_seed = seed;
        if self.is_deterministic() {
            self.mode = Mode::Deterministic(Deterministic::new(seed));
            info!(seed, "deterministic seed updated");
        }
    }

    pub fn reset_sequence(&mut self) {
        if let Mode::Deterministic(ref mut deterministic) = self.mode {
            deterministic.reset();
            info!(seed = deterministic.base_seed(), "deterministic sequence reset");
        }
    }

    /// The first `len` values of the current deterministic sequence, computed without moving the
    /// draw index or the engine. Empty when deterministic mode is off.
    pub fn preview_sequence(&mut self, len: usize) -> Vec<i32> {
        let deterministic = match self.mode {
            Mode::Deterministic(deterministic) => deterministic,
            Mode::Production(_) => {
                warn!("cannot preview a sequence while deterministic mode is disabled");
                return Vec::new();
            }
        };
        let range = self.range;
        let random = &mut self.random;
        let sequence: Vec<i32> = (0..len as u64)
            .map(|index| deterministic.value_at(random, range, index))
            .collect();
        debug!(seed = deterministic.base_seed(), ?sequence, "previewed deterministic sequence");
        sequence
    }

    pub fn validate_current_target(&self) -> bool {
        match self.current_target {
            Some(target) if !self.range.contains(target) => {
                error!(target, range = %self.range, "target outside range");
                false
            }
            Some(_) => true,
            None => false,
        }
    }

    pub fn debug_info(&self) -> String {
        let target = match self.current_target {
            Some(target) => target.to_string(),
            None => "none".to_string(),
        };
        let mut info = format!("NumberGenerator - Target: {}, Range: {}, HasTarget: {}",
                               target, self.range, self.has_target());
        if let Mode::Deterministic(deterministic) = self.mode {
            info += &format!(", DeterministicMode: ON, Seed: {}, Generation: {}",
                             deterministic.base_seed(), deterministic.draw_index());
        }
        info
    }

    pub(crate) fn restore_mode(&mut self, mode: Mode, deterministic_seed: i32) {
        self.mode = mode;
        self.deterministic_seed = deterministic_seed;
    }

    /// Runs in deterministic mode with `seed` until the returned guard is dropped, then puts back
    /// the previous mode, base seed and draw index.
    pub fn deterministic_scope(&mut self, seed: i32) -> DeterministicScope {
        let saved_mode = self.mode;
        let saved_seed = self.deterministic_seed;
        self.enable_deterministic_mode(seed);
        DeterministicScope {
            generator: self,
            saved_mode: saved_mode,
            saved_seed: saved_seed,
        }
    }
}

impl Default for NumberGenerator {
    fn default() -> NumberGenerator {
        NumberGenerator::new(RangeConfig::default())
    }
}

pub struct DeterministicScope<'a> {
    generator: &'a mut NumberGenerator,
    saved_mode: Mode,
    saved_seed: i32,
}

impl<'a> Deref for DeterministicScope<'a> {
    type Target = NumberGenerator;
    fn deref(&self) -> &NumberGenerator {
        self.generator
    }
}

impl<'a> DerefMut for DeterministicScope<'a> {
    fn deref_mut(&mut self) -> &mut NumberGenerator {
        self.generator
    }
}

impl<'a> Drop for DeterministicScope<'a> {
    fn drop(&mut self) {
        self.generator.restore_mode(self.saved_mode, self.saved_seed);
        debug!(mode = ?self.saved_mode, "generator mode restored");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compare_to_target_points_towards_target() {
        let mut generator = NumberGenerator::with_seed(RangeConfig::default(), 1);
        assert_eq!(generator.compare_to_target(50), None);
        assert!(!generator.is_correct(50));

        let target = generator.next();
        assert!(generator.is_correct(target));
        assert_eq!(generator.compare_to_target(target), Some(0));
        assert_eq!(generator.compare_to_target(target - 1), Some(1));
        assert_eq!(generator.compare_to_target(target + 1), Some(-1));
    }

    #[test]
    fn minimum_below_one_is_raised() {
        let mut generator = NumberGenerator::default();
        assert_eq!(generator.set_range(-5, 20), Ok(()));
        assert_eq!(generator.range(), RangeConfig::new(1, 20).unwrap());
    }

    #[test]
    fn raising_minimum_cannot_empty_the_range() {
        let mut generator = NumberGenerator::default();
        assert_eq!(generator.set_range(-5, 1), Err(ConfigError::InvalidRange(1, 1)));
        assert_eq!(generator.range(), RangeConfig::default());
    }

    #[test]
    fn toggle_reuses_last_seed() {
        let mut generator = NumberGenerator::default();
        generator.enable_deterministic_mode(77);
        assert!(!generator.toggle_deterministic_mode());
        assert_eq!(generator.draw_index(), None);
        assert!(generator.toggle_deterministic_mode());
        assert_eq!(generator.mode(), Mode::Deterministic(Deterministic::new(77)));
    }

    #[test]
    fn set_deterministic_seed_restarts_sequence() {
        let mut generator = NumberGenerator::default();
        generator.enable_deterministic_mode(1);
        generator.next();
        generator.next();
        generator.set_deterministic_seed(2);
        assert_eq!(generator.draw_index(), Some(0));
        assert_eq!(generator.deterministic_seed(), 2);
    }

    #[test]
    fn debug_info_mentions_deterministic_state() {
        let mut generator = NumberGenerator::default();
        assert_eq!(generator.debug_info(),
                   "NumberGenerator - Target: none, Range: 1-100, HasTarget: false");
        generator.enable_deterministic_mode(5);
        generator.next();
        assert!(generator.debug_info().ends_with("DeterministicMode: ON, Seed: 5, Generation: 1"));
    }
}
