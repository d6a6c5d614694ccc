use crate::generator::NumberGenerator;
use crate::range::RangeConfig;
use std::collections::btree_map::{self, BTreeMap};
use tracing::{debug, warn};

/// Smaller sample sizes are raised to this.
pub const MIN_SAMPLE_SIZE: usize = 100;

// Above this many buckets per draw a table is mostly zeros and costly to build.
const SPARSE_BUCKETS_PER_DRAW: usize = 10;

/// Anything that can be sampled: a range and a way to draw from it.
pub trait DrawSource {
    fn range(&self) -> RangeConfig;
    fn draw(&mut self) -> i32;
}

impl DrawSource for NumberGenerator {
    fn range(&self) -> RangeConfig {
        NumberGenerator::range(self)
    }

    fn draw(&mut self) -> i32 {
        self.next()
    }
}

/// Observed count per value. Every value of the range has an entry, zero or not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: BTreeMap<i32, u32>,
    rejected: usize,
}

impl FrequencyTable {
    pub fn new(range: RangeConfig) -> FrequencyTable {
        FrequencyTable {
            counts: range.values().map(|value| (value, 0)).collect(),
            rejected: 0,
        }
    }

    /// A table with no buckets at all, as carried by results that never sampled.
    pub fn empty() -> FrequencyTable {
        FrequencyTable {
            counts: BTreeMap::new(),
            rejected: 0,
        }
    }

    /// Builds a table from consecutive counts starting at `range.min()`. Missing counts are 0 and
    /// extra counts are ignored.
    pub fn from_counts(range: RangeConfig, counts: &[u32]) -> FrequencyTable {
        let mut table = FrequencyTable::new(range);
        for (value, &count) in range.values().zip(counts) {
            table.counts.insert(value, count);
        }
        table
    }

    /// Counts `value`. Returns false, and counts a rejection instead, if it has no bucket.
    pub fn record(&mut self, value: i32) -> bool {
        match self.counts.get_mut(&value) {
            Some(count) => {
                *count += 1;
                true
            }
            None => {
                self.rejected += 1;
                false
            }
        }
    }

    pub fn count(&self, value: i32) -> Option<u32> {
        self.counts.get(&value).cloned()
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Number of recorded draws, rejections excluded.
    pub fn total(&self) -> u64 {
        self.counts.values().map(|&count| u64::from(count)).sum()
    }

    pub fn rejected(&self) -> usize {
        self.rejected
    }

    pub fn iter(&self) -> Iter {
        Iter { inner: self.counts.iter() }
    }
}

pub struct Iter<'a> {
    inner: btree_map::Iter<'a, i32, u32>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (i32, u32);
    fn next(&mut self) -> Option<(i32, u32)> {
        self.inner.next().map(|(&value, &count)| (value, count))
    }
}

impl<'a> IntoIterator for &'a FrequencyTable {
    type Item = (i32, u32);
    type IntoIter = Iter<'a>;
    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}

/// Draws `sample_size` values (at least `MIN_SAMPLE_SIZE`) from `source` and tallies them.
///
/// Draws outside the source's range are logged and counted in `FrequencyTable::rejected`; they
/// indicate a broken source and never abort the run.
pub fn sample<S: DrawSource + ?Sized>(sample_size: usize, source: &mut S) -> FrequencyTable {
    let sample_size = clamp_sample_size(sample_size);
    let range = source.range();
    if is_sparse(range.size(), sample_size) {
        warn!(%range, range_size = range.size(), sample_size,
              "range is much larger than the sample, frequency table will be sparse");
    }
    let mut table = FrequencyTable::new(range);
    for _ in 0..sample_size {
        let value = source.draw();
        if !table.record(value) {
            warn!(value, %range, "generated value outside expected range");
        }
    }
    debug!(sample_size, buckets = table.len(), rejected = table.rejected(), "sampling complete");
    table
}

pub fn clamp_sample_size(sample_size: usize) -> usize {
    if sample_size < MIN_SAMPLE_SIZE {
        warn!(sample_size, minimum = MIN_SAMPLE_SIZE,
              "sample size too small for reliable statistical analysis, using minimum");
        MIN_SAMPLE_SIZE
    } else {
        sample_size
    }
}

fn is_sparse(range_size: usize, sample_size: usize) -> bool {
    range_size / SPARSE_BUCKETS_PER_DRAW > sample_size
}
