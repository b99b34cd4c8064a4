pub mod constants;

use ngram_analyzer::types::{NGram, NGramFrequency, RawDocument};
use ngram_analyzer::rank_documents;
use std::{fs, path::Path};

/// Reads a fixture file and strips the annotation lines, leaving only the
/// text under analysis.
///
/// Fixture files mix prose with `EXPECTED:` and `COMMENT:` lines; the
/// annotations describe the expected ranking and must not be fed to the
/// pipeline themselves.
pub fn load_fixture_text(file_path: &str) -> String {
    let raw_text = fs::read_to_string(file_path).expect("Failed to read test file");

    raw_text
        .lines()
        .filter(|line| {
            !line.trim_start().starts_with("EXPECTED:")
                && !line.trim_start().starts_with("COMMENT:")
        })
        .collect::<Vec<&str>>()
        .join("\n")
}

/// Helper function to get the expected ranked n-grams from a fixture file.
///
/// Each `EXPECTED:` line has the form `EXPECTED: the cat sat = 2`: the
/// n-gram's tokens separated by spaces, then `=`, then the count. Lines are
/// returned in file order, which is the expected ranking order.
pub fn get_expected_ngrams(file_path: &Path) -> Vec<(NGram, NGramFrequency)> {
    let content = fs::read_to_string(file_path).expect("Failed to read test file");

    content
        .lines()
        .filter_map(|line| {
            let line = line.trim();
            if !line.starts_with("EXPECTED:") {
                return None;
            }

            let entry = line.replace("EXPECTED:", "");
            let (tokens, count) = entry
                .rsplit_once('=')
                .expect("EXPECTED line must have the form 'TOKENS = COUNT'");

            let ngram: NGram = tokens.split_whitespace().map(str::to_string).collect();
            let frequency: NGramFrequency = count
                .trim()
                .parse()
                .expect("EXPECTED count must be an integer");

            Some((ngram, frequency))
        })
        .collect()
}

/// Helper function to run the ranking pipeline over one fixture file and
/// assert that the result matches the file's `EXPECTED:` annotations.
pub fn run_ranking_fixture(test_file_path: &str, ngram_size: usize, top_k: usize) {
    let text = load_fixture_text(test_file_path);

    let corpus: Vec<RawDocument> = vec![(test_file_path.to_string(), text.into_bytes())];

    let report =
        rank_documents(&corpus, ngram_size, top_k).expect("Failed to rank fixture document");

    let expected_ngrams = get_expected_ngrams(Path::new(test_file_path));

    assert_eq!(
        report.top_ngrams, expected_ngrams,
        "{} - Expected: {:?}, but got: {:?}",
        test_file_path, expected_ngrams, report.top_ngrams
    );

    assert!(
        report.skipped_documents.is_empty(),
        "{} - Fixture document unexpectedly skipped: {:?}",
        test_file_path,
        report.skipped_documents
    );
}
