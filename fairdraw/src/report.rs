use crate::bias::BiasReport;
use crate::chisquare::ChiSquareAnalysis;
use crate::validator::ValidationResult;
use std::fmt::Write;

pub fn summary(result: &ValidationResult) -> String {
    let analysis = ChiSquareAnalysis {
        expected_frequency: result.expected_frequency,
        chi_square: result.chi_square,
        degrees_of_freedom: result.degrees_of_freedom,
        p_value: result.p_value,
        passed: result.test_passed,
        max_deviation: result.max_deviation,
    };
    summary_of(&analysis, &result.bias, result.sample_size, result.seed)
}

pub fn summary_of(analysis: &ChiSquareAnalysis, bias: &BiasReport, sample_size: usize, seed: Option<i32>)
                  -> String {
    let status = if analysis.passed { "PASSED" } else { "FAILED" };
    let bias_status = if bias.has_significant_bias { "BIAS DETECTED" } else { "NO BIAS" };
    let mut line = format!("Statistical Test {} | Samples: {} | Chi²: {:.2} | p-value: {:.3} | \
                            Max deviation: {:.1} | {}",
                           status, sample_size, analysis.chi_square, analysis.p_value,
                           analysis.max_deviation, bias_status);
    if let Some(seed) = seed {
        line += &format!(" (Seeded with {})", seed);
    }
    line
}

/// Per-value table of observed counts and their signed deviation from the expected frequency.
pub fn frequency_report(result: &ValidationResult) -> String {
    let table = &result.frequency_table;
    if table.is_empty() {
        return "No frequency data available".to_string();
    }
    let mut report = String::new();
    writeln!(report, "Frequency Distribution Report (Sample Size: {})", result.sample_size).unwrap();
    writeln!(report, "Expected frequency per value: {:.1}", result.expected_frequency).unwrap();
    writeln!(report, "Value | Frequency | Deviation").unwrap();
    for (value, count) in table {
        let deviation = f64::from(count) - result.expected_frequency;
        writeln!(report, "{:>3} | {:>9} | {:>+9.1}", value, count, deviation).unwrap();
    }
    report
}
