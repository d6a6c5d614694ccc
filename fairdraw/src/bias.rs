use crate::sampler::FrequencyTable;

/// Relative deviation, in percent, above which a distribution counts as biased.
pub const SIGNIFICANT_BIAS_PERCENTAGE: f64 = 20.0;

#[derive(Debug, Clone, PartialEq)]
pub struct BiasReport {
    pub has_significant_bias: bool,
    pub most_frequent_value: Option<i32>,
    pub least_frequent_value: Option<i32>,
    pub bias_percentage: f64,
    pub description: String,
}

impl BiasReport {
    fn no_data() -> BiasReport {
        BiasReport {
            has_significant_bias: false,
            most_frequent_value: None,
            least_frequent_value: None,
            bias_percentage: 0.0,
            description: "No frequency data available".to_string(),
        }
    }
}

/// Compares the most and least frequent buckets against `expected`. Ties go to the lowest value.
pub fn detect(table: &FrequencyTable, expected: f64) -> BiasReport {
    let mut most: Option<(i32, u32)> = None;
    let mut least: Option<(i32, u32)> = None;
    for (value, count) in table {
        if most.map_or(true, |(_, max)| count > max) {
            most = Some((value, count));
        }
        if least.map_or(true, |(_, min)| count < min) {
            least = Some((value, count));
        }
    }
    let ((most_value, max_freq), (least_value, min_freq)) = match (most, least) {
        (Some(most), Some(least)) => (most, least),
        _ => return BiasReport::no_data(),
    };

    let deviation = (f64::from(max_freq) - expected).max(expected - f64::from(min_freq));
    let bias_percentage = deviation / expected * 100.0;
    let has_significant_bias = bias_percentage > SIGNIFICANT_BIAS_PERCENTAGE;
    let description = if has_significant_bias {
        format!("Significant bias detected: {:.1}% deviation. \
                 Value {} appears {} times, value {} appears {} times (expected: {:.1})",
                bias_percentage, most_value, max_freq, least_value, min_freq, expected)
    } else {
        format!("No significant bias detected. Maximum deviation: {:.1}%", bias_percentage)
    };

    BiasReport {
        has_significant_bias: has_significant_bias,
        most_frequent_value: Some(most_value),
        least_frequent_value: Some(least_value),
        bias_percentage: bias_percentage,
        description: description,
    }
}
