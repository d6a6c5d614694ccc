use crate::bias::{self, BiasReport};
use crate::chisquare;
use crate::errors::ConfigError;
use crate::generator::NumberGenerator;
use crate::report;
use crate::sampler::{self, DrawSource, FrequencyTable};
use std::time::Instant;
use tracing::{error, info};

pub const DEFAULT_SAMPLE_SIZE: usize = 1000;
pub const DEFAULT_CONFIDENCE_LEVEL: f64 = 0.95;
pub const MIN_CONFIDENCE_LEVEL: f64 = 0.8;
pub const MAX_CONFIDENCE_LEVEL: f64 = 0.99;

#[derive(Debug, Clone, PartialEq)]
pub struct ValidatorConfig {
    /// Used when a validation is requested without a sample size.
    pub default_sample_size: usize,
    confidence_level: f64,
    pub performance_monitoring: bool,
    /// Log the full frequency report after each validation.
    pub detailed_logging: bool,
}

impl ValidatorConfig {
    pub fn confidence_level(&self) -> f64 {
        self.confidence_level
    }

    pub fn set_confidence_level(&mut self, level: f64) -> Result<(), ConfigError> {
        if !(level >= MIN_CONFIDENCE_LEVEL && level <= MAX_CONFIDENCE_LEVEL) {
            error!(level, "confidence level not applied");
            return Err(ConfigError::ConfidenceOutOfRange(level));
        }
        self.confidence_level = level;
        Ok(())
    }

    pub fn with_confidence_level(mut self, level: f64) -> Result<ValidatorConfig, ConfigError> {
        self.set_confidence_level(level)?;
        Ok(self)
    }
}

impl Default for ValidatorConfig {
    fn default() -> ValidatorConfig {
        ValidatorConfig {
            default_sample_size: DEFAULT_SAMPLE_SIZE,
            confidence_level: DEFAULT_CONFIDENCE_LEVEL,
            performance_monitoring: true,
            detailed_logging: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ValidationResult {
    /// Number of draws actually made, after clamping.
    pub sample_size: usize,
    pub chi_square: f64,
    pub degrees_of_freedom: usize,
    pub p_value: f64,
    pub test_passed: bool,
    pub frequency_table: FrequencyTable,
    pub expected_frequency: f64,
    pub max_deviation: f64,
    pub bias: BiasReport,
    pub summary: String,
    /// Zero when performance monitoring is off.
    pub execution_time_ms: f64,
    /// Base seed of a seeded validation.
    pub seed: Option<i32>,
}

impl ValidationResult {
    fn error(message: &str) -> ValidationResult {
        ValidationResult {
            sample_size: 0,
            chi_square: 0.0,
            degrees_of_freedom: 0,
            p_value: 0.0,
            test_passed: false,
            frequency_table: FrequencyTable::empty(),
            expected_frequency: 0.0,
            max_deviation: 0.0,
            bias: bias::detect(&FrequencyTable::empty(), 0.0),
            summary: format!("VALIDATION ERROR: {}", message),
            execution_time_ms: 0.0,
            seed: None,
        }
    }
}

const GENERATOR_UNAVAILABLE: &str = "NumberGenerator not available";

pub fn validate_source<S: DrawSource + ?Sized>(config: &ValidatorConfig, source: &mut S,
                                                sample_size: usize, seed: Option<i32>)
                                                -> ValidationResult {
    let start = if config.performance_monitoring { Some(Instant::now()) } else { None };

    let sample_size = sampler::clamp_sample_size(sample_size);
    let table = sampler::sample(sample_size, source);
    let analysis = chisquare::analyze(&table, sample_size, config.confidence_level);
    let bias = bias::detect(&table, analysis.expected_frequency);

    let execution_time_ms = start
        .map(|start| start.elapsed().as_secs_f64() * 1000.0)
        .unwrap_or(0.0);

    let summary = report::summary_of(&analysis, &bias, sample_size, seed);
    let result = ValidationResult {
        sample_size: sample_size,
        chi_square: analysis.chi_square,
        degrees_of_freedom: analysis.degrees_of_freedom,
        p_value: analysis.p_value,
        test_passed: analysis.passed,
        frequency_table: table,
        expected_frequency: analysis.expected_frequency,
        max_deviation: analysis.max_deviation,
        bias: bias,
        summary: summary,
        execution_time_ms: execution_time_ms,
        seed: seed,
    };

    info!(summary = %result.summary, execution_time_ms, "statistical validation completed");
    if config.detailed_logging {
        info!("{}", report::frequency_report(&result));
    }
    result
}

/// Runs uniformity checks against an attached `NumberGenerator` and keeps the latest result.
#[derive(Debug, Default)]
pub struct Validator {
    config: ValidatorConfig,
    generator: Option<NumberGenerator>,
    last_result: Option<ValidationResult>,
}

impl Validator {
    /// A validator without a generator. Validations report an error until one is attached.
    pub fn new(config: ValidatorConfig) -> Validator {
        Validator {
            config: config,
            generator: None,
            last_result: None,
        }
    }

    pub fn with_generator(config: ValidatorConfig, generator: NumberGenerator) -> Validator {
        Validator {
            config: config,
            generator: Some(generator),
            last_result: None,
        }
    }

    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut ValidatorConfig {
        &mut self.config
    }

    pub fn generator(&self) -> Option<&NumberGenerator> {
        self.generator.as_ref()
    }

    pub fn generator_mut(&mut self) -> Option<&mut NumberGenerator> {
        self.generator.as_mut()
    }

    pub fn attach_generator(&mut self, generator: NumberGenerator) {
        self.generator = Some(generator);
    }

    pub fn detach_generator(&mut self) -> Option<NumberGenerator> {
        self.generator.take()
    }

    pub fn validate_distribution(&mut self, sample_size: Option<usize>) -> ValidationResult {
        let sample_size = sample_size.unwrap_or(self.config.default_sample_size);
        let result = match self.generator.as_mut() {
            Some(generator) => validate_source(&self.config, generator, sample_size, None),
            None => {
                error!("number generator not found, cannot perform validation");
                return ValidationResult::error(GENERATOR_UNAVAILABLE);
            }
        };
        self.record(result)
    }

    /// Validates in deterministic mode with base seed `seed`. The generator's previous mode, base
    /// seed and draw index are restored afterwards.
    pub fn validate_with_seed(&mut self, seed: i32, sample_size: usize) -> ValidationResult {
        let result = match self.generator.as_mut() {
            Some(generator) => {
                let mut scope = generator.deterministic_scope(seed);
                validate_source(&self.config, &mut *scope, sample_size, Some(seed))
            }
            None => {
                error!("number generator not found, cannot perform seeded validation");
                return ValidationResult::error(GENERATOR_UNAVAILABLE);
            }
        };
        self.record(result)
    }

    pub fn last_result(&self) -> Option<&ValidationResult> {
        self.last_result.as_ref()
    }

    pub fn last_summary(&self) -> &str {
        match self.last_result {
            Some(ref result) => &result.summary,
            None => "No validation performed yet",
        }
    }

    pub fn frequency_report(&self, result: &ValidationResult) -> String {
        report::frequency_report(result)
    }

    fn record(&mut self, result: ValidationResult) -> ValidationResult {
        self.last_result = Some(result.clone());
        result
    }
}
