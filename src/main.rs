//! perceptron - train a perceptron on one delimited file, report accuracy on another.
//!
//! Usage:
//!   perceptron train.csv test.csv 100                 # Train for up to 100 passes
//!   perceptron train.csv test.csv 100 --show-model    # Also dump bias and weights
//!   perceptron train.tsv test.tsv 50 --delimiter '\t' # Tab separated input

use clap::Parser;
use perceptron_classifier::{LoaderOptions, Perceptron, PerceptronError, load_dataset};
use std::path::PathBuf;
use std::process::ExitCode;

/// Train a perceptron and print its accuracy on held-out data.
///
/// Both files need a header row and the same column order; the last column is the label
/// (0/1 or -1/1).
#[derive(Parser, Debug)]
#[command(name = "perceptron")]
#[command(version)]
struct Cli {
    /// Training data file
    #[arg(value_name = "TRAIN")]
    train: PathBuf,

    /// Test data file
    #[arg(value_name = "TEST")]
    test: PathBuf,

    /// Maximum number of passes over the training data (negative means none)
    #[arg(value_name = "MAX_ITERS", allow_negative_numbers = true)]
    max_iters: i64,

    /// Field separator (a single ASCII character, `\t` for tab)
    #[arg(short, long, default_value = ",", value_parser = parse_delimiter)]
    delimiter: u8,

    /// Print the learned bias and weights after training
    #[arg(long)]
    show_model: bool,

    /// Only print the accuracy line
    #[arg(short, long)]
    quiet: bool,
}

fn parse_delimiter(s: &str) -> Result<u8, String> {
    match s {
        "\\t" | "\t" => Ok(b'\t'),
        _ if s.len() == 1 && s.is_ascii() => Ok(s.as_bytes()[0]),
        _ => Err(format!("delimiter must be a single ASCII character, got '{s}'")),
    }
}

impl Cli {
    /// Passes to run; a negative count runs none.
    fn passes(&self) -> usize {
        usize::try_from(self.max_iters).unwrap_or(0)
    }
}

fn main() -> ExitCode {
    // clap exits with status 2 and the usage text on a bad argument list, before any file is read
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            e.exit_code()
        }
    }
}

fn run(cli: &Cli) -> Result<(), PerceptronError> {
    let options = LoaderOptions { delimiter: cli.delimiter };

    let (train, feature_names) = load_dataset::<f64, _>(&cli.train, &options)?;
    // The test file's header is not used; columns are matched by position
    let (test, _) = load_dataset::<f64, _>(&cli.test, &options)?;
    if !cli.quiet {
        eprintln!(
            "Loaded {} training and {} test examples with {} features",
            train.len(),
            test.len(),
            feature_names.len()
        );
    }

    if let Some(dp) = test.iter().find(|dp| dp.features.len() != feature_names.len()) {
        return Err(PerceptronError::DimensionMismatch {
            expected: feature_names.len(),
            actual: dp.features.len(),
        });
    }

    if !cli.quiet {
        eprintln!("Training...");
    }
    let mut model = Perceptron::<f64>::new(&feature_names);
    let outcome = model.train_with_outcome(&train, cli.passes());
    if !cli.quiet {
        if outcome.converged {
            eprintln!("Converged after {} passes", outcome.epochs);
        } else {
            eprintln!("Stopped after {} passes without converging", outcome.epochs);
        }
    }
    if cli.show_model {
        println!("{model}");
    }

    if !cli.quiet {
        eprintln!("Testing...");
    }
    let accuracy = model.test_accuracy(&test)?;
    println!("Classifier had {accuracy:?} accuracy on the test data");

    Ok(())
}
