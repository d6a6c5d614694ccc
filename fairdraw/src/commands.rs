use crate::generator::{NumberGenerator, DEFAULT_DETERMINISTIC_SEED};
use crate::validator::Validator;

pub const LARGE_SAMPLE_SIZE: usize = 5000;
pub const SEEDED_TEST_SEED: i32 = DEFAULT_DETERMINISTIC_SEED;
pub const SEEDED_TEST_SAMPLE_SIZE: usize = 1000;
pub const PREVIEW_LENGTH: usize = 10;

/// Named operations a front end can trigger. Each maps onto one validator or generator call.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    RunTest,
    RunLargeSample(usize),
    TestWithSeed { seed: i32, sample_size: usize },
    ShowLastResult,
    Generate,
    GenerateWithSeed(i32),
    Guess(i32),
    SetRange { min: i32, max: i32 },
    ToggleDeterministic,
    SetSeed(i32),
    ResetSequence,
    PreviewSequence(usize),
    DebugInfo,
}

#[derive(Debug)]
pub struct Session {
    validator: Validator,
}

impl Session {
    pub fn new(validator: Validator) -> Session {
        Session { validator: validator }
    }

    pub fn validator(&self) -> &Validator {
        &self.validator
    }

    pub fn validator_mut(&mut self) -> &mut Validator {
        &mut self.validator
    }

    pub fn execute(&mut self, command: Command) -> String {
        match command {
            Command::RunTest => {
                let result = self.validator.validate_distribution(None);
                let mut output = format!("Statistical Test Results:\n{}", result.summary);
                if self.validator.config().detailed_logging {
                    output += &format!("\nDetailed Results:\n{}", self.validator.frequency_report(&result));
                }
                output
            }
            Command::RunLargeSample(sample_size) => {
                let result = self.validator.validate_distribution(Some(sample_size));
                format!("Large Sample Test Results:\n{}\nExecution time: {:.2}ms",
                        result.summary, result.execution_time_ms)
            }
            Command::TestWithSeed { seed, sample_size } => {
                let result = self.validator.validate_with_seed(seed, sample_size);
                format!("Seeded Test Results:\n{}", result.summary)
            }
            Command::ShowLastResult => {
                format!("Last Validation Results:\n{}", self.validator.last_summary())
            }
            Command::Generate => self.with_generator(|generator| {
                format!("New target generated: {}", generator.next())
            }),
            Command::GenerateWithSeed(seed) => self.with_generator(|generator| {
                format!("Generated with seed {}: {}", seed, generator.generate_with_seed(seed))
            }),
            Command::Guess(guess) => self.with_generator(|generator| {
                match generator.compare_to_target(guess) {
                    None => "No target generated yet".to_string(),
                    Some(0) => format!("{} is correct", guess),
                    Some(ordering) if ordering > 0 => format!("Target is higher than {}", guess),
                    Some(_) => format!("Target is lower than {}", guess),
                }
            }),
            Command::SetRange { min, max } => self.with_generator(|generator| {
                match generator.set_range(min, max) {
                    Ok(()) => format!("Range updated to: {}", generator.range()),
                    Err(err) => format!("Range not changed: {}", err),
                }
            }),
            Command::ToggleDeterministic => self.with_generator(|generator| {
                if generator.toggle_deterministic_mode() {
                    format!("Deterministic mode enabled with seed: {}", generator.deterministic_seed())
                } else {
                    "Deterministic mode disabled".to_string()
                }
            }),
            Command::SetSeed(seed) => self.with_generator(|generator| {
                generator.set_deterministic_seed(seed);
                format!("Deterministic seed set to: {}", seed)
            }),
            Command::ResetSequence => self.with_generator(|generator| {
                if generator.is_deterministic() {
                    generator.reset_sequence();
                    "Deterministic sequence reset".to_string()
                } else {
                    "Deterministic mode is not enabled".to_string()
                }
            }),
            Command::PreviewSequence(len) => self.with_generator(|generator| {
                if !generator.is_deterministic() {
                    return "Deterministic mode is not enabled. Enable it first to preview sequences."
                        .to_string();
                }
                let sequence = generator.preview_sequence(len)
                    .iter()
                    .map(|value| value.to_string())
                    .collect::<Vec<_>>()
                    .join(", ");
                format!("Deterministic sequence ({} values): [{}]", len, sequence)
            }),
            Command::DebugInfo => self.with_generator(|generator| generator.debug_info()),
        }
    }

    fn with_generator<F>(&mut self, f: F) -> String
        where F: FnOnce(&mut NumberGenerator) -> String
    {
        match self.validator.generator_mut() {
            Some(generator) => f(generator),
            None => "NumberGenerator not available".to_string(),
        }
    }
}
