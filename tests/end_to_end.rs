//! Loader, model and CLI driven together through files on disk.

use approx::assert_relative_eq;
use perceptron_classifier::{LoaderOptions, Perceptron, PerceptronError, load_dataset};
use std::io::Write;
use std::process::Command;
use tempfile::NamedTempFile;

fn write_csv(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

// y > x is positive, labels in 0/1 form
const TRAIN: &str = "x,y,label\n0,1,1\n1,3,1\n2,5,1\n-1,0,1\n1,0,0\n3,1,0\n5,2,0\n0,-1,0\n";
const TEST: &str = "a,b,c\n0,2,1\n4,0,0\n-2,-1,1\n2,1,0\n";

fn perceptron_bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_perceptron"))
}

#[test]
fn test_train_then_evaluate_from_files() {
    let train_file = write_csv(TRAIN);
    let test_file = write_csv(TEST);
    let options = LoaderOptions::default();

    let (train, names) = load_dataset::<f64, _>(train_file.path(), &options).unwrap();
    let (test, _) = load_dataset::<f64, _>(test_file.path(), &options).unwrap();
    assert_eq!(names, vec!["x", "y"]);
    assert!(train.iter().all(|dp| dp.label == 1.0 || dp.label == -1.0));

    let mut model = Perceptron::<f64>::new(&names);
    let outcome = model.train_with_outcome(&train, 1000);
    assert!(outcome.converged);
    assert_relative_eq!(model.test_accuracy(&train).unwrap(), 1.0);

    let accuracy = model.test_accuracy(&test).unwrap();
    assert!((0.0..=1.0).contains(&accuracy));
}

#[test]
fn test_accuracy_on_empty_test_file_is_rejected() {
    let train_file = write_csv(TRAIN);
    let empty_file = write_csv("x,y,label\n");
    let options = LoaderOptions::default();

    let (train, names) = load_dataset::<f64, _>(train_file.path(), &options).unwrap();
    let (test, _) = load_dataset::<f64, _>(empty_file.path(), &options).unwrap();
    let mut model = Perceptron::<f64>::new(&names);
    model.train(&train, 10);
    assert!(matches!(model.test_accuracy(&test), Err(PerceptronError::EmptyDataset)));
}

#[test]
fn test_cli_reports_accuracy() {
    let train_file = write_csv("x,y,label\n1,1,1\n-1,-1,0\n");
    let test_file = write_csv("x,y,label\n1,1,1\n-1,-1,0\n");

    let output = perceptron_bin()
        .arg(train_file.path())
        .arg(test_file.path())
        .arg("10")
        .arg("--show-model")
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("bias 1.0\nx 1.0\ny 1.0"), "stdout was: {stdout}");
    assert!(stdout.contains("Classifier had 1.0 accuracy on the test data"), "stdout was: {stdout}");
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Training..."));
    assert!(stderr.contains("Testing..."));
}

#[test]
fn test_cli_wrong_argument_count_exits_2() {
    let output = perceptron_bin().arg("only_one.csv").output().unwrap();
    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.to_lowercase().contains("usage"), "stderr was: {stderr}");
}

#[test]
fn test_cli_parse_error_fails() {
    let train_file = write_csv("x,label\n1,1\noops,0\n");
    let test_file = write_csv("x,label\n1,1\n");

    let output = perceptron_bin()
        .arg(train_file.path())
        .arg(test_file.path())
        .arg("5")
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert_ne!(output.status.code(), Some(2));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("oops"), "stderr was: {stderr}");
}

#[test]
fn test_cli_rejects_test_file_with_different_width() {
    let train_file = write_csv("x,y,label\n1,1,1\n-1,-1,0\n");
    let test_file = write_csv("x,label\n1,1\n");

    let output = perceptron_bin()
        .arg(train_file.path())
        .arg(test_file.path())
        .arg("5")
        .arg("--quiet")
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("expected 2 features, got 1"), "stderr was: {stderr}");
}
