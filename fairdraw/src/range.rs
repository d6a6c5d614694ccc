use crate::errors::ConfigError;
use std::fmt;
use std::ops::RangeInclusive;

pub const DEFAULT_MIN: i32 = 1;
pub const DEFAULT_MAX: i32 = 100;

/// Inclusive bounds `[min, max]` for generated values.
///
/// A `RangeConfig` can only be obtained through `new`, so every value in circulation satisfies
/// `1 <= min < max`. Changing a range means replacing the whole value.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct RangeConfig {
    min: i32,
    max: i32,
}

impl RangeConfig {
    pub fn new(min: i32, max: i32) -> Result<RangeConfig, ConfigError> {
        if min >= max {
            return Err(ConfigError::InvalidRange(min, max));
        }
        if min < 1 {
            return Err(ConfigError::MinimumBelowOne(min));
        }
        Ok(RangeConfig { min: min, max: max })
    }

    pub fn min(&self) -> i32 {
        self.min
    }

    pub fn max(&self) -> i32 {
        self.max
    }

    pub fn size(&self) -> usize {
        (i64::from(self.max) - i64::from(self.min) + 1) as usize
    }

    pub fn contains(&self, value: i32) -> bool {
        value >= self.min && value <= self.max
    }

    pub fn values(&self) -> RangeInclusive<i32> {
        self.min..=self.max
    }
}

impl Default for RangeConfig {
    fn default() -> RangeConfig {
        RangeConfig { min: DEFAULT_MIN, max: DEFAULT_MAX }
    }
}

impl fmt::Display for RangeConfig {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}-{}", self.min, self.max)
    }
}
