use crate::types::{NGram, NGramFrequencyMap};

/// Counts the frequency of each distinct n-gram in the given sequence.
///
/// Alongside its count, each distinct n-gram records the rank at which it was
/// first seen. Callers feed this function the concatenated n-gram streams of
/// all documents in upload order, so the rank gives a stable, reproducible
/// tie-break when counts are equal.
///
/// # Arguments
/// * `ngrams` - A slice of n-grams to analyze, in document order.
///
/// # Returns
/// * A map where the keys are n-grams and the values are
///   `(frequency, insertion rank)` pairs.
///
/// # Example
/// ```
/// use ngram_analyzer::count_ngram_frequencies;
///
/// let ngrams = vec![
///     vec!["the".to_string(), "cat".to_string()],
///     vec!["cat".to_string(), "sat".to_string()],
///     vec!["the".to_string(), "cat".to_string()],
/// ];
/// let frequencies = count_ngram_frequencies(&ngrams);
/// assert_eq!(frequencies[&vec!["the".to_string(), "cat".to_string()]], (2, 0));
/// assert_eq!(frequencies[&vec!["cat".to_string(), "sat".to_string()]], (1, 1));
/// ```
pub fn count_ngram_frequencies(ngrams: &[NGram]) -> NGramFrequencyMap {
    let mut frequencies: NGramFrequencyMap = NGramFrequencyMap::new();

    for ngram in ngrams {
        let next_rank = frequencies.len();
        let entry = frequencies.entry(ngram.clone()).or_insert((0, next_rank));
        entry.0 += 1;
    }

    frequencies
}
