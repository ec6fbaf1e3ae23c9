// End-to-end checks of CsvExampleLoader against the files in tests/fixtures.

use std::path::{Path, PathBuf};

use sentiment_trainer::data::loader::CsvExampleLoader;
use sentiment_trainer::domain::example::SentimentExample;
use sentiment_trainer::domain::traits::ExampleSource;
use sentiment_trainer::SentimentError;

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures").join(name)
}

fn load(name: &str) -> Vec<SentimentExample> {
    CsvExampleLoader::new().load(&fixture(name)).unwrap()
}

#[test]
fn loads_and_normalizes_labeled_data() {
    let examples = load("labeled_sentiment_data.csv");

    assert_eq!(examples.len(), 4);
    assert_eq!(examples[0], SentimentExample::new("positive", "i absolutely loved this!"));
    assert_eq!(examples[1].text, "terrible, would not buy again.");
    assert_eq!(examples[3], SentimentExample::new("negative", "it broke after \"one\" day"));
    assert!(examples.iter().all(|e| e.sentiment == e.sentiment.to_lowercase()));
}

#[test]
fn blank_lines_are_ignored() {
    let examples = load("blank_lines.csv");
    assert_eq!(examples.len(), 2);
}

#[test]
fn rows_missing_a_field_are_dropped() {
    let examples = load("missing_fields.csv");
    assert_eq!(examples, vec![SentimentExample::new("negative", "awful")]);
}

#[test]
fn columns_are_found_by_name() {
    let examples = load("extra_columns.csv");
    assert_eq!(
        examples,
        vec![
            SentimentExample::new("positive", "loved it"),
            SentimentExample::new("negative", "hated it"),
        ]
    );
}

#[test]
fn duplicates_are_kept() {
    let examples = load("duplicates.csv");
    assert_eq!(examples.len(), 2);
    assert_eq!(examples[0], examples[1]);
}

#[test]
fn whitespace_is_collapsed_and_trimmed() {
    let examples = load("whitespace.csv");
    assert_eq!(examples, vec![SentimentExample::new("positive", "this is a test.")]);
}

#[test]
fn header_without_required_columns_is_format_error() {
    let err = CsvExampleLoader::new().load(&fixture("header_mismatch.csv")).unwrap_err();
    assert!(matches!(err, SentimentError::Format(_)), "got {err:?}");
}

#[test]
fn missing_file_is_file_not_found() {
    let err = CsvExampleLoader::new()
        .load(&fixture("file_does_not_exist.csv"))
        .unwrap_err();

    assert!(matches!(err, SentimentError::FileNotFound { .. }));
    assert!(err.to_string().contains("file_does_not_exist.csv"));
}

#[test]
fn loading_twice_gives_the_same_examples() {
    assert_eq!(load("train.csv"), load("train.csv"));
}
