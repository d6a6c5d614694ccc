#![allow(dead_code)]

use difference::Changeset;
use fairdraw::*;

/// Replays a fixed list of values over and over, regardless of the range it claims.
pub struct ScriptedSource {
    range: RangeConfig,
    script: Vec<i32>,
    next_idx: usize,
}

impl ScriptedSource {
    pub fn new(range: RangeConfig, script: Vec<i32>) -> Self {
        assert!(!script.is_empty());
        ScriptedSource {
            range: range,
            script: script,
            next_idx: 0,
        }
    }

    /// Cycles through every value of the range in order, which yields a perfectly flat table
    /// whenever the sample size is a multiple of the range size.
    pub fn uniform(range: RangeConfig) -> Self {
        ScriptedSource::new(range, range.values().collect())
    }
}

impl DrawSource for ScriptedSource {
    fn range(&self) -> RangeConfig {
        self.range
    }

    fn draw(&mut self) -> i32 {
        let value = self.script[self.next_idx % self.script.len()];
        self.next_idx += 1;
        value
    }
}

pub fn untimed_config() -> ValidatorConfig {
    let mut config = ValidatorConfig::default();
    config.performance_monitoring = false;
    config
}

pub fn assert_eq_with_diff(actual: &str, expected: &str) {
    let diff = Changeset::new(&actual, &expected, "");
    assert!(actual == expected,
        "Actual output did not match expected output. Difference (green = expected, red = actual):\n\n{}\n", diff);
}
