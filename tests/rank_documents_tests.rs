use ngram_analyzer::types::RawDocument;
use ngram_analyzer::{rank_documents, rank_texts, Error};
use test_utils::constants::TEST_FILES_DIRECTORY;
use test_utils::run_ranking_fixture;

#[cfg(test)]
mod rank_documents_tests {
    use super::*;

    #[test]
    fn test_most_frequent_bigram_ranks_first() {
        let results = rank_texts(&["the cat sat on the mat. the cat ran."], 2, 3).unwrap();

        assert_eq!(results.len(), 3);
        assert_eq!(results[0], (vec!["the".to_string(), "cat".to_string()], 2));
        assert_eq!(results[1], (vec!["cat".to_string(), "sat".to_string()], 1));
        assert_eq!(results[2], (vec!["sat".to_string(), "on".to_string()], 1));
    }

    #[test]
    fn test_invalid_ngram_size_rejected() {
        let result = rank_texts(&["some text"], 0, 5);
        assert!(matches!(result, Err(Error::InvalidParameter(_))));
    }

    #[test]
    fn test_invalid_top_k_rejected() {
        let result = rank_texts(&["some text"], 2, 0);
        assert!(matches!(result, Err(Error::InvalidParameter(_))));
    }

    #[test]
    fn test_undecodable_documents_are_skipped() {
        let corpus: Vec<RawDocument> = vec![
            (
                "good.txt".to_string(),
                b"one two three one two three one two three".to_vec(),
            ),
            ("bad.txt".to_string(), vec![0xff, 0xfe, 0xfd]),
        ];

        let report = rank_documents(&corpus, 3, 5).unwrap();

        // Only the valid document contributes n-grams
        assert_eq!(
            report.top_ngrams[0],
            (
                vec!["one".to_string(), "two".to_string(), "three".to_string()],
                3
            )
        );

        // The invalid document is named in the report
        assert_eq!(report.skipped_documents.len(), 1);
        assert_eq!(report.skipped_documents[0].index, 1);
        assert_eq!(report.skipped_documents[0].label, "bad.txt");
        assert!(!report.skipped_documents[0].reason.is_empty());
    }

    #[test]
    fn test_all_documents_invalid_yields_empty_ranking() {
        let corpus: Vec<RawDocument> = vec![
            ("bad-1.txt".to_string(), vec![0xff]),
            ("bad-2.txt".to_string(), vec![0xc0, 0x20]),
        ];

        let report = rank_documents(&corpus, 2, 5).unwrap();

        assert!(report.top_ngrams.is_empty());
        assert_eq!(report.skipped_documents.len(), 2);
    }

    #[test]
    fn test_empty_corpus_yields_empty_ranking() {
        let report = rank_documents(&[], 2, 5).unwrap();

        assert!(report.top_ngrams.is_empty());
        assert!(report.skipped_documents.is_empty());
    }

    #[test]
    fn test_top_k_exceeding_distinct_count() {
        // Only two distinct bigrams exist; no padding, no error
        let results = rank_texts(&["the cat sat"], 2, 100).unwrap();
        assert_eq!(results.len(), 2);
    }

    #[test]
    fn test_ranking_is_deterministic() {
        let texts = ["the cat sat on the mat. the cat ran.", "the dog sat."];

        let first = rank_texts(&texts, 2, 10).unwrap();
        let second = rank_texts(&texts, 2, 10).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_growing_top_k_only_appends() {
        let texts = ["the cat sat on the mat. the cat ran. the dog ran."];

        let smaller = rank_texts(&texts, 2, 3).unwrap();
        let larger = rank_texts(&texts, 2, 8).unwrap();

        assert!(larger.len() >= smaller.len());
        assert_eq!(&larger[..smaller.len()], &smaller[..]);
    }

    #[test]
    fn test_equal_counts_keep_first_seen_order() {
        // All three unigrams occur twice; ranking must follow first
        // appearance (b, a, c), not lexicographic order
        let results = rank_texts(&["b a c a b c"], 1, 10).unwrap();

        assert_eq!(
            results,
            vec![
                (vec!["b".to_string()], 2),
                (vec!["a".to_string()], 2),
                (vec!["c".to_string()], 2),
            ]
        );
    }

    #[test]
    fn test_counts_aggregate_across_documents() {
        let results = rank_texts(&["the cat", "the cat"], 2, 1).unwrap();
        assert_eq!(results, vec![(vec!["the".to_string(), "cat".to_string()], 2)]);
    }

    #[test]
    fn test_counting_is_case_sensitive() {
        let results = rank_texts(&["The the The"], 1, 2).unwrap();

        assert_eq!(
            results,
            vec![(vec!["The".to_string()], 2), (vec!["the".to_string()], 1)]
        );
    }

    #[test]
    fn test_bigram_fixture_file() {
        run_ranking_fixture(
            &format!("{}/test_file_1.txt", TEST_FILES_DIRECTORY),
            2,
            3,
        );
    }

    #[test]
    fn test_trigram_fixture_file() {
        run_ranking_fixture(
            &format!("{}/test_file_2.txt", TEST_FILES_DIRECTORY),
            3,
            5,
        );
    }

    #[test]
    fn test_punctuation_only_fixture_file() {
        run_ranking_fixture(
            &format!("{}/test_file_punctuation.txt", TEST_FILES_DIRECTORY),
            2,
            10,
        );
    }
}
