mod common;

use crate::common::untimed_config;
use fairdraw::*;

fn session() -> Session {
    Session::new(Validator::with_generator(untimed_config(), NumberGenerator::with_seed(RangeConfig::default(), 8)))
}

#[test]
fn show_last_result_before_and_after_a_run() {
    let mut session = session();
    assert_eq!(session.execute(Command::ShowLastResult),
               "Last Validation Results:\nNo validation performed yet");

    let output = session.execute(Command::RunTest);
    let summary = session.validator().last_summary().to_string();
    assert_eq!(output, format!("Statistical Test Results:\n{}", summary));
    assert!(summary.contains("| Samples: 1000 |"));
    assert_eq!(session.execute(Command::ShowLastResult), format!("Last Validation Results:\n{}", summary));
}

#[test]
fn detailed_run_includes_frequency_report() {
    let mut session = session();
    session.validator_mut().config_mut().detailed_logging = true;
    let output = session.execute(Command::RunTest);
    assert!(output.contains("\nDetailed Results:\nFrequency Distribution Report (Sample Size: 1000)\n"));
    assert_eq!(output.lines().filter(|line| line.contains(" | ")).count(), 1 + 1 + 100);
}

#[test]
fn large_sample_reports_time() {
    let mut session = session();
    let output = session.execute(Command::RunLargeSample(LARGE_SAMPLE_SIZE));
    assert!(output.starts_with("Large Sample Test Results:\nStatistical Test "));
    assert!(output.contains("| Samples: 5000 |"));
    assert!(output.ends_with("\nExecution time: 0.00ms"));
}

#[test]
fn seeded_test_restores_generator_and_is_repeatable() {
    let mut session = session();
    let command = Command::TestWithSeed { seed: SEEDED_TEST_SEED, sample_size: SEEDED_TEST_SAMPLE_SIZE };
    let first = session.execute(command.clone());
    assert!(first.starts_with("Seeded Test Results:\n"));
    assert!(first.ends_with("(Seeded with 12345)"));
    assert_eq!(session.execute(command), first);
    assert!(!session.execute(Command::DebugInfo).contains("DeterministicMode"));
}

#[test]
fn guessing_against_the_target() {
    let mut session = session();
    assert_eq!(session.execute(Command::Guess(50)), "No target generated yet");

    let target = session.validator_mut().generator_mut().unwrap().generate_with_seed(3);
    assert_eq!(session.execute(Command::Guess(target)), format!("{} is correct", target));
    if target > 1 {
        assert_eq!(session.execute(Command::Guess(target - 1)), format!("Target is higher than {}", target - 1));
    }
    if target < 100 {
        assert_eq!(session.execute(Command::Guess(target + 1)), format!("Target is lower than {}", target + 1));
    }
}

#[test]
fn generate_commands() {
    let mut session = session();
    let output = session.execute(Command::GenerateWithSeed(7));
    assert_eq!(session.execute(Command::GenerateWithSeed(7)), output);
    assert!(output.starts_with("Generated with seed 7: "));
    assert!(session.execute(Command::Generate).starts_with("New target generated: "));
}

#[test]
fn set_range_reports_rejection() {
    let mut session = session();
    assert_eq!(session.execute(Command::SetRange { min: 50, max: 10 }),
               "Range not changed: invalid range 50 to 10: min must be less than max");
    assert_eq!(session.execute(Command::SetRange { min: 1, max: 6 }), "Range updated to: 1-6");
    assert_eq!(session.validator().generator().unwrap().range(), RangeConfig::new(1, 6).unwrap());
}

#[test]
fn deterministic_commands() {
    let mut session = session();
    assert_eq!(session.execute(Command::PreviewSequence(PREVIEW_LENGTH)),
               "Deterministic mode is not enabled. Enable it first to preview sequences.");
    assert_eq!(session.execute(Command::ResetSequence), "Deterministic mode is not enabled");

    assert_eq!(session.execute(Command::ToggleDeterministic), "Deterministic mode enabled with seed: 12345");
    let preview = session.execute(Command::PreviewSequence(3));
    assert!(preview.starts_with("Deterministic sequence (3 values): ["));

    assert_eq!(session.execute(Command::SetSeed(55)), "Deterministic seed set to: 55");
    assert!(session.execute(Command::DebugInfo).ends_with("Seed: 55, Generation: 0"));
    session.execute(Command::Generate);
    assert!(session.execute(Command::DebugInfo).ends_with("Seed: 55, Generation: 1"));
    assert_eq!(session.execute(Command::ResetSequence), "Deterministic sequence reset");
    assert!(session.execute(Command::DebugInfo).ends_with("Seed: 55, Generation: 0"));

    assert_eq!(session.execute(Command::ToggleDeterministic), "Deterministic mode disabled");
}

#[test]
fn commands_without_generator() {
    let mut session = Session::new(Validator::new(untimed_config()));
    assert_eq!(session.execute(Command::Generate), "NumberGenerator not available");
    assert_eq!(session.execute(Command::RunTest),
               "Statistical Test Results:\nVALIDATION ERROR: NumberGenerator not available");
}
