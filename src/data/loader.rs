// ============================================================
// Layer 4 — CSV Example Loader
// ============================================================
// Reads a labelled CSV file into normalised SentimentExamples
// using the `csv` crate.
//
// Expected file shape:
//   Sentiment,Text,Source
//   Positive,"  I ABSOLUTELY   loved this!  ",web
//   negative,"Terrible, would not buy again",store
//
//   - Columns are found by NAME (case-insensitive), not by
//     position. Extra columns are ignored.
//   - Quoted fields may contain commas, newlines and "" quotes.
//
// Row policy:
//   - Blank lines are skipped
//   - Rows with an empty Sentiment or Text are skipped
//   - Rows that normalise to an empty field are skipped
//   - Duplicates are kept, order is preserved
//
// Only two things are errors: the file cannot be opened, or the
// header lacks one of the required columns. Skipped rows are a
// filtering policy and are logged at debug level.
//
// Reference: csv crate documentation
//            Rust Book §9 (Error Handling)

use std::{collections::HashMap, fs::File, io::BufReader, path::Path};

use csv::{ReaderBuilder, StringRecord};

use crate::data::normalizer::TextNormalizer;
use crate::domain::example::SentimentExample;
use crate::domain::traits::ExampleSource;
use crate::error::{Result, SentimentError};

/// Required header names, compared after lowercasing
const SENTIMENT_COLUMN: &str = "sentiment";
const TEXT_COLUMN:      &str = "text";

/// Loads SentimentExamples from a delimited text file.
/// Implements the ExampleSource trait from Layer 3.
#[derive(Debug, Clone)]
pub struct CsvExampleLoader {
    /// Field delimiter, a comma unless overridden
    delimiter: u8,
}

impl CsvExampleLoader {
    /// Create a loader for standard comma-separated files
    pub fn new() -> Self {
        Self { delimiter: b',' }
    }

    /// Use a different field delimiter (e.g. b'\t' for TSV exports)
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }
}

impl Default for CsvExampleLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ExampleSource for CsvExampleLoader {
    fn load(&self, path: &Path) -> Result<Vec<SentimentExample>> {
        // Missing, a directory, or unreadable: all "not a readable file"
        if !path.is_file() {
            return Err(SentimentError::FileNotFound { path: path.to_path_buf() });
        }

        let file = File::open(path).map_err(|e| {
            tracing::debug!("Cannot open '{}': {}", path.display(), e);
            SentimentError::FileNotFound { path: path.to_path_buf() }
        })?;

        // flexible: rows may have more or fewer fields than the header
        let mut reader = ReaderBuilder::new()
            .delimiter(self.delimiter)
            .has_headers(true)
            .flexible(true)
            .from_reader(BufReader::new(file));

        // ── Step 1: Resolve the required columns by name ──────────────────────
        let columns = RequiredColumns::from_headers(reader.headers()?)?;
        tracing::debug!(
            "Header of '{}': sentiment at column {}, text at column {}",
            path.display(),
            columns.sentiment,
            columns.text
        );

        // ── Step 2: Walk the records in file order ────────────────────────────
        let mut examples = Vec::new();
        let mut skipped  = 0usize;

        for (row, record) in reader.records().enumerate() {
            let record = match record {
                Ok(record) => record,
                Err(e) if e.is_io_error() => return Err(e.into()),
                // Undecodable rows are dropped, not escalated
                Err(e) => {
                    tracing::warn!("Skipping row {} of '{}': {}", row + 1, path.display(), e);
                    skipped += 1;
                    continue;
                }
            };

            match columns.extract(&record) {
                Some(example) => examples.push(example),
                None => {
                    tracing::debug!("Skipping row {}: missing Sentiment or Text", row + 1);
                    skipped += 1;
                }
            }
        }

        tracing::info!(
            "Loaded {} examples from '{}' ({} rows skipped)",
            examples.len(),
            path.display(),
            skipped
        );
        Ok(examples)
    }
}

/// Column positions of the two fields we care about
#[derive(Debug, Clone, Copy)]
struct RequiredColumns {
    sentiment: usize,
    text:      usize,
}

impl RequiredColumns {
    /// Build a case-insensitive name → index map and pick out
    /// the required columns. The first occurrence of a name wins.
    fn from_headers(headers: &StringRecord) -> Result<Self> {
        let mut index: HashMap<String, usize> = HashMap::new();
        for (i, name) in headers.iter().enumerate() {
            let name = name.trim_start_matches('\u{feff}').trim().to_lowercase();
            index.entry(name).or_insert(i);
        }

        match (index.get(SENTIMENT_COLUMN), index.get(TEXT_COLUMN)) {
            (Some(&sentiment), Some(&text)) => Ok(Self { sentiment, text }),
            _ => Err(SentimentError::Format(format!(
                "Header must contain the columns 'Sentiment' and 'Text' (case-insensitive); found [{}]",
                headers.iter().collect::<Vec<_>>().join(", ")
            ))),
        }
    }

    /// Normalise one record, or None if it must be skipped
    fn extract(&self, record: &StringRecord) -> Option<SentimentExample> {
        let raw_sentiment = record.get(self.sentiment)?;
        let raw_text      = record.get(self.text)?;

        // Empty or all-whitespace raw values are skipped outright
        if raw_sentiment.trim().is_empty() || raw_text.trim().is_empty() {
            return None;
        }

        let sentiment = raw_sentiment.trim().to_lowercase();
        let text      = TextNormalizer::normalize(raw_text).to_lowercase();

        // Escapes like "\0" can normalise to nothing
        if sentiment.is_empty() || text.is_empty() {
            return None;
        }

        Some(SentimentExample::new(sentiment, text))
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_csv(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    fn load(contents: &str) -> Result<Vec<SentimentExample>> {
        let file = write_csv(contents);
        CsvExampleLoader::new().load(file.path())
    }

    #[test]
    fn test_normalises_both_fields() {
        let examples = load("Sentiment,Text\n Positive ,\"  I ABSOLUTELY   loved this!  \"\n").unwrap();
        assert_eq!(examples, vec![SentimentExample::new("positive", "i absolutely loved this!")]);
    }

    #[test]
    fn test_columns_found_by_name_in_any_order() {
        let examples = load("id,TEXT,extra,sentiment\n1,Great stuff,x,positive\n2,Bad,y,negative\n").unwrap();
        assert_eq!(examples.len(), 2);
        assert_eq!(examples[0].text, "great stuff");
        assert_eq!(examples[1].sentiment, "negative");
    }

    #[test]
    fn test_quoted_fields_with_commas_and_newlines() {
        let examples = load("Sentiment,Text\npositive,\"good, really\ngood\"\n").unwrap();
        assert_eq!(examples[0].text, "good, really good");
    }

    #[test]
    fn test_skips_blank_and_incomplete_rows() {
        let examples = load("Sentiment,Text\n\npositive,\n,orphan text\n   ,   \nnegative,Awful\n\n").unwrap();
        assert_eq!(examples, vec![SentimentExample::new("negative", "awful")]);
    }

    #[test]
    fn test_short_rows_are_skipped() {
        let examples = load("Sentiment,Text\npositive\nnegative,Bad\n").unwrap();
        assert_eq!(examples.len(), 1);
    }

    #[test]
    fn test_text_that_normalises_to_empty_is_skipped() {
        let examples = load("Sentiment,Text\npositive,\\0\nnegative,Bad\n").unwrap();
        assert_eq!(examples.len(), 1);
    }

    #[test]
    fn test_keeps_duplicates_in_order() {
        let examples = load("Sentiment,Text\npositive,Same\npositive,Same\nnegative,Other\n").unwrap();
        assert_eq!(examples.len(), 3);
        assert_eq!(examples[0], examples[1]);
        assert_eq!(examples[2].text, "other");
    }

    #[test]
    fn test_missing_text_column_is_format_error() {
        let err = load("Sentiment,Body\npositive,Great\n").unwrap_err();
        match err {
            SentimentError::Format(msg) => {
                assert!(msg.contains("Sentiment"));
                assert!(msg.contains("Text"));
            }
            other => panic!("expected Format, got {other:?}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_unreadable_file_is_file_not_found() {
        use std::os::unix::fs::PermissionsExt;

        let file = write_csv("Sentiment,Text\npositive,Great\n");
        std::fs::set_permissions(file.path(), std::fs::Permissions::from_mode(0o000)).unwrap();

        // Root ignores file modes, nothing to check then
        if File::open(file.path()).is_ok() {
            return;
        }

        let err = CsvExampleLoader::new().load(file.path()).unwrap_err();
        assert!(matches!(err, SentimentError::FileNotFound { .. }), "got {err:?}");
        let name = file.path().file_name().unwrap().to_string_lossy().into_owned();
        assert!(err.to_string().contains(&name));
    }

    #[test]
    fn test_empty_file_is_format_error() {
        assert!(matches!(load(""), Err(SentimentError::Format(_))));
    }

    #[test]
    fn test_missing_file_names_path() {
        let err = CsvExampleLoader::new()
            .load(Path::new("data/file_does_not_exist.csv"))
            .unwrap_err();
        assert!(matches!(err, SentimentError::FileNotFound { .. }));
        assert!(err.to_string().contains("file_does_not_exist.csv"));
    }

    #[test]
    fn test_directory_is_not_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = CsvExampleLoader::new().load(dir.path()).unwrap_err();
        assert!(matches!(err, SentimentError::FileNotFound { .. }));
    }

    #[test]
    fn test_tab_delimited() {
        let file = write_csv("Text\tSentiment\nLovely\tpositive\n");
        let examples = CsvExampleLoader::new()
            .with_delimiter(b'\t')
            .load(file.path())
            .unwrap();
        assert_eq!(examples, vec![SentimentExample::new("positive", "lovely")]);
    }
}
