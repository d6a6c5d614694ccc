use fairdraw::*;
use std::error::Error;
use std::io::{self, BufRead, Write};
use std::iter;
use structopt::StructOpt;
use tracing::metadata::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(StructOpt, Debug)]
#[structopt(name = "fairdraw")]
struct Options {
    #[structopt(long = "min", help = "smallest value to generate", default_value = "1")]
    min: i32,
    #[structopt(long = "max", help = "largest value to generate", default_value = "100")]
    max: i32,
    #[structopt(short = "c", long = "confidence", help = "confidence level, between 0.8 and 0.99",
                default_value = "0.95")]
    confidence: f64,
    #[structopt(short = "n", long = "sample-size", help = "sample size used by run-test",
                default_value = "1000")]
    sample_size: usize,
    #[structopt(long = "seed", help = "seed the generator so that unseeded runs are reproducible too")]
    seed: Option<u64>,
    #[structopt(long = "no-timing", help = "do not measure execution time")]
    no_timing: bool,
    #[structopt(short = "d", long = "detailed", help = "print and log the full frequency report")]
    detailed: bool,
    #[structopt(short = "v", long = "verbose", help = "log debug messages to stderr")]
    verbose: bool,
    #[structopt(subcommand)]
    command: Option<CommandLine>,
}

#[derive(StructOpt, Debug)]
#[structopt(name = "fairdraw")]
enum CommandLine {
    #[structopt(name = "run-test", about = "validate the distribution with the default sample size")]
    RunTest,
    #[structopt(name = "run-large-sample", about = "validate the distribution with a large sample")]
    RunLargeSample {
        sample_size: Option<usize>,
    },
    #[structopt(name = "test-with-seed", about = "validate the distribution in deterministic mode")]
    TestWithSeed {
        seed: Option<i32>,
        sample_size: Option<usize>,
    },
    #[structopt(name = "show-last-result", about = "show the summary of the last validation")]
    ShowLastResult,
    #[structopt(name = "generate", about = "draw a new target")]
    Generate,
    #[structopt(name = "generate-with-seed", about = "draw a target from a fixed seed")]
    GenerateWithSeed {
        seed: i32,
    },
    #[structopt(name = "guess", about = "compare a guess with the current target")]
    Guess {
        guess: i32,
    },
    #[structopt(name = "set-range", about = "change the range of generated values")]
    SetRange {
        min: i32,
        max: i32,
    },
    #[structopt(name = "toggle-deterministic", about = "switch deterministic mode on or off")]
    ToggleDeterministic,
    #[structopt(name = "set-seed", about = "set the base seed of deterministic mode")]
    SetSeed {
        seed: i32,
    },
    #[structopt(name = "reset-sequence", about = "restart the deterministic sequence")]
    ResetSequence,
    #[structopt(name = "preview-sequence", about = "show the start of the deterministic sequence")]
    PreviewSequence {
        len: Option<usize>,
    },
    #[structopt(name = "debug-info", about = "show the generator state")]
    DebugInfo,
}

impl CommandLine {
    fn into_command(self) -> Command {
        match self {
            CommandLine::RunTest => Command::RunTest,
            CommandLine::RunLargeSample { sample_size } =>
                Command::RunLargeSample(sample_size.unwrap_or(LARGE_SAMPLE_SIZE)),
            CommandLine::TestWithSeed { seed, sample_size } => Command::TestWithSeed {
                seed: seed.unwrap_or(SEEDED_TEST_SEED),
                sample_size: sample_size.unwrap_or(SEEDED_TEST_SAMPLE_SIZE),
            },
            CommandLine::ShowLastResult => Command::ShowLastResult,
            CommandLine::Generate => Command::Generate,
            CommandLine::GenerateWithSeed { seed } => Command::GenerateWithSeed(seed),
            CommandLine::Guess { guess } => Command::Guess(guess),
            CommandLine::SetRange { min, max } => Command::SetRange { min: min, max: max },
            CommandLine::ToggleDeterministic => Command::ToggleDeterministic,
            CommandLine::SetSeed { seed } => Command::SetSeed(seed),
            CommandLine::ResetSequence => Command::ResetSequence,
            CommandLine::PreviewSequence { len } => Command::PreviewSequence(len.unwrap_or(PREVIEW_LENGTH)),
            CommandLine::DebugInfo => Command::DebugInfo,
        }
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose { LevelFilter::DEBUG } else { LevelFilter::INFO };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::default().add_directive(level.into()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn make_session(opts: &Options) -> Result<Session, ConfigError> {
    let range = RangeConfig::new(opts.min, opts.max)?;
    let mut config = ValidatorConfig::default();
    config.default_sample_size = opts.sample_size;
    config.performance_monitoring = !opts.no_timing;
    config.detailed_logging = opts.detailed;
    let config = config.with_confidence_level(opts.confidence)?;
    let generator = match opts.seed {
        Some(seed) => NumberGenerator::with_seed(range, seed),
        None => NumberGenerator::new(range),
    };
    Ok(Session::new(Validator::with_generator(config, generator)))
}

fn run_interactive(session: &mut Session) -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    write!(stdout, "> ")?;
    stdout.flush()?;
    for line in stdin.lock().lines() {
        let line = line?;
        let words: Vec<&str> = line.split_whitespace().collect();
        match words.first() {
            None => {}
            Some(&"quit") | Some(&"exit") => break,
            Some(_) => match CommandLine::from_iter_safe(iter::once("fairdraw").chain(words.iter().cloned())) {
                Ok(command) => writeln!(stdout, "{}", session.execute(command.into_command()))?,
                Err(err) => writeln!(stdout, "{}", err.message)?,
            },
        }
        write!(stdout, "> ")?;
        stdout.flush()?;
    }
    Ok(())
}

fn run() -> Result<(), Box<dyn Error>> {
    let opts = Options::from_args();
    init_logging(opts.verbose);

    let mut session = make_session(&opts)?;
    match opts.command {
        Some(command) => println!("{}", session.execute(command.into_command())),
        None => run_interactive(&mut session)?,
    }
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Fatal error: {}", err);
        std::process::exit(1);
    }
}
