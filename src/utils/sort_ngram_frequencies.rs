use crate::types::{InsertionRank, NGram, NGramFrequency, NGramFrequencyMap};

/// Sorts a mapping of n-grams to their frequencies into a ranked list.
///
/// ### Sorting Order:
/// - **Primary:** Sorts by frequency in descending order (higher frequency first).
/// - **Secondary:** If two n-grams have the same frequency, sorts by first-seen
///   insertion rank in ascending order, so the ranking is deterministic and
///   reproduces the order in which distinct n-grams were encountered.
///
/// ### Parameters:
/// - `frequencies`: An `NGramFrequencyMap` mapping each n-gram to its
///   `(frequency, insertion rank)` pair.
///
/// ### Returns:
/// - A `Vec` of `(NGram, NGramFrequency)` tuples, sorted as described above.
///   The insertion rank is consumed by the sort and not returned.
///
/// ### Example:
/// ```rust
/// use std::collections::HashMap;
/// use ngram_analyzer::sort_ngram_frequencies;
/// use ngram_analyzer::types::NGramFrequencyMap;
///
/// let mut frequencies: NGramFrequencyMap = HashMap::new();
/// frequencies.insert(vec!["the".to_string(), "cat".to_string()], (2, 0));
/// frequencies.insert(vec!["cat".to_string(), "sat".to_string()], (1, 1));
/// frequencies.insert(vec!["sat".to_string(), "on".to_string()], (1, 2));
///
/// let sorted = sort_ngram_frequencies(frequencies);
/// assert_eq!(sorted, vec![
///     (vec!["the".to_string(), "cat".to_string()], 2),
///     (vec!["cat".to_string(), "sat".to_string()], 1),
///     (vec!["sat".to_string(), "on".to_string()], 1),
/// ]);
/// ```
pub fn sort_ngram_frequencies(
    frequencies: NGramFrequencyMap,
) -> Vec<(NGram, NGramFrequency)> {
    let mut sorted_results: Vec<(NGram, NGramFrequency, InsertionRank)> = frequencies
        .into_iter()
        .map(|(ngram, (frequency, rank))| (ngram, frequency, rank))
        .collect();

    sorted_results.sort_by(|a, b| {
        b.1.cmp(&a.1) // Sort by frequency (descending)
            .then_with(|| a.2.cmp(&b.2)) // Secondary sort by insertion rank (ascending)
    });

    sorted_results
        .into_iter()
        .map(|(ngram, frequency, _)| (ngram, frequency))
        .collect()
}
