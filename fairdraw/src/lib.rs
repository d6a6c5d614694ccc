mod bias;
mod chisquare;
mod commands;
mod errors;
mod generator;
mod random;
mod range;
mod report;
mod sampler;
mod validator;

pub use crate::bias::{detect as detect_bias, BiasReport, SIGNIFICANT_BIAS_PERCENTAGE};
pub use crate::chisquare::{analyze as analyze_chi_square, ChiSquareAnalysis};
pub use crate::commands::{Command, Session, LARGE_SAMPLE_SIZE, PREVIEW_LENGTH, SEEDED_TEST_SAMPLE_SIZE,
                          SEEDED_TEST_SEED};
pub use crate::errors::ConfigError;
pub use crate::generator::{Deterministic, DeterministicScope, Mode, NumberGenerator, Production, Strategy,
                           DEFAULT_DETERMINISTIC_SEED};
pub use crate::random::{Random, Reseeded, RngState};
pub use crate::range::RangeConfig;
pub use crate::report::{frequency_report, summary, summary_of};
pub use crate::sampler::{sample, DrawSource, FrequencyTable, MIN_SAMPLE_SIZE};
pub use crate::validator::{validate_source, ValidationResult, Validator, ValidatorConfig, DEFAULT_CONFIDENCE_LEVEL,
                           DEFAULT_SAMPLE_SIZE, MAX_CONFIDENCE_LEVEL, MIN_CONFIDENCE_LEVEL};

pub mod stats {
    pub use crate::chisquare::{chi_square, expected_frequency, max_deviation, p_value, passes, P_ACCEPTABLE,
                               P_GOOD, P_POOR};
}
