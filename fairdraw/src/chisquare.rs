//! Chi-square goodness-of-fit against the uniform distribution.
//!
//! The p-value is not computed from the chi-square CDF. It is bucketed into one of three values
//! by comparing the statistic against fixed critical values: the tabulated 0.05 and 0.01 points
//! for 99 degrees of freedom (the 1-100 range), and multiples of the degrees of freedom
//! otherwise.

use crate::sampler::FrequencyTable;
use tracing::trace;

/// Degrees of freedom of the default 1-100 range.
const TABULATED_DEGREES_OF_FREEDOM: usize = 99;
const TABULATED_CRITICAL_05: f64 = 123.2;
const TABULATED_CRITICAL_01: f64 = 135.8;

const SCALED_CRITICAL_05: f64 = 1.2;
const SCALED_CRITICAL_01: f64 = 1.4;

pub const P_GOOD: f64 = 0.10;
pub const P_ACCEPTABLE: f64 = 0.03;
pub const P_POOR: f64 = 0.005;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChiSquareAnalysis {
    pub expected_frequency: f64,
    pub chi_square: f64,
    pub degrees_of_freedom: usize,
    pub p_value: f64,
    pub passed: bool,
    pub max_deviation: f64,
}

pub fn analyze(table: &FrequencyTable, sample_size: usize, confidence_level: f64) -> ChiSquareAnalysis {
    let range_size = table.len();
    let expected = expected_frequency(sample_size, range_size);
    let chi_square = chi_square(table, expected);
    let degrees_of_freedom = range_size.saturating_sub(1);
    let p_value = p_value(chi_square, degrees_of_freedom);
    let passed = passes(p_value, confidence_level);
    let max_deviation = max_deviation(table, expected);
    trace!(expected, chi_square, degrees_of_freedom, p_value, passed, "chi-square analysis");
    ChiSquareAnalysis {
        expected_frequency: expected,
        chi_square: chi_square,
        degrees_of_freedom: degrees_of_freedom,
        p_value: p_value,
        passed: passed,
        max_deviation: max_deviation,
    }
}

pub fn expected_frequency(sample_size: usize, range_size: usize) -> f64 {
    sample_size as f64 / range_size as f64
}

pub fn chi_square(table: &FrequencyTable, expected: f64) -> f64 {
    table.iter()
        .map(|(_, observed)| {
            let deviation = f64::from(observed) - expected;
            deviation * deviation / expected
        })
        .sum()
}

pub fn p_value(chi_square: f64, degrees_of_freedom: usize) -> f64 {
    let (critical_05, critical_01) = if degrees_of_freedom == TABULATED_DEGREES_OF_FREEDOM {
        (TABULATED_CRITICAL_05, TABULATED_CRITICAL_01)
    } else {
        let df = degrees_of_freedom as f64;
        (df * SCALED_CRITICAL_05, df * SCALED_CRITICAL_01)
    };
    if chi_square <= critical_05 {
        P_GOOD
    } else if chi_square <= critical_01 {
        P_ACCEPTABLE
    } else {
        P_POOR
    }
}

pub fn passes(p_value: f64, confidence_level: f64) -> bool {
    p_value > 1.0 - confidence_level
}

/// Largest absolute difference between a bucket and the expected frequency.
pub fn max_deviation(table: &FrequencyTable, expected: f64) -> f64 {
    table.iter()
        .map(|(_, observed)| (f64::from(observed) - expected).abs())
        .fold(0.0, f64::max)
}
