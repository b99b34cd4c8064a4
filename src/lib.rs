mod config;
pub use config::DEFAULT_ANALYSIS_CONFIG;
mod constants;
pub mod models;
pub use models::{
    AnalysisConfig, AnalysisReport, Error, NGramExtractor, SkippedDocument, Tokenizer,
};
pub mod types;
mod utils;
pub use types::{
    DocumentIndex, DocumentLabel, NGram, NGramFrequency, NGramFrequencyMap, RawDocument, Token,
    TokenRef,
};
pub use utils::{
    count_ngram_frequencies, read_frequency_csv, sort_ngram_frequencies, write_frequency_csv,
};

use log::{debug, warn};

/// Extracts all n-grams of size `ngram_size` from a single decoded text, in
/// document order, with punctuation-only windows removed.
///
/// A text with fewer than `ngram_size` tokens yields an empty sequence.
pub fn extract_ngrams(text: &str, ngram_size: usize) -> Vec<NGram> {
    NGramExtractor::new(ngram_size).extract(text)
}

/// Ranks the most frequent n-grams across a corpus of raw documents.
///
/// Each document is decoded as UTF-8, its n-grams are extracted, and all
/// sequences are merged into one frequency table before the top `top_k`
/// entries are selected. Documents that fail to decode are skipped and
/// reported in the returned [`AnalysisReport`]; they never abort the run.
///
/// Returns `Error::InvalidParameter` when `ngram_size` or `top_k` is zero.
pub fn rank_documents(
    corpus: &[RawDocument],
    ngram_size: usize,
    top_k: usize,
) -> Result<AnalysisReport, Error> {
    let analysis_config = AnalysisConfig { ngram_size, top_k };

    let report = rank_documents_with_custom_config(&analysis_config, corpus)?;

    Ok(report)
}

/// As [`rank_documents`], with the parameters supplied as an
/// [`AnalysisConfig`] (see [`DEFAULT_ANALYSIS_CONFIG`]).
pub fn rank_documents_with_custom_config(
    analysis_config: &AnalysisConfig,
    corpus: &[RawDocument],
) -> Result<AnalysisReport, Error> {
    analysis_config.validate()?;

    let extractor = NGramExtractor::new(analysis_config.ngram_size);

    let mut all_ngrams: Vec<NGram> = Vec::new();
    let mut skipped_documents: Vec<SkippedDocument> = Vec::new();

    for (index, (label, bytes)) in corpus.iter().enumerate() {
        match std::str::from_utf8(bytes) {
            Ok(text) => {
                let document_ngrams = extractor.extract(text);
                debug!(
                    "Document {} ({}): {} n-grams extracted",
                    index,
                    label,
                    document_ngrams.len()
                );
                all_ngrams.extend(document_ngrams);
            }
            Err(err) => {
                warn!("Skipping document {} ({}): {}", index, label, err);
                skipped_documents.push(SkippedDocument {
                    index,
                    label: label.clone(),
                    reason: err.to_string(),
                });
            }
        }
    }

    let frequencies = count_ngram_frequencies(&all_ngrams);

    let mut top_ngrams = sort_ngram_frequencies(frequencies);
    top_ngrams.truncate(analysis_config.top_k);

    Ok(AnalysisReport {
        top_ngrams,
        skipped_documents,
    })
}

/// Convenience wrapper for already-decoded input: ranks n-grams across a
/// slice of texts and returns just the ranked pairs.
pub fn rank_texts(
    texts: &[&str],
    ngram_size: usize,
    top_k: usize,
) -> Result<Vec<(NGram, NGramFrequency)>, Error> {
    let corpus: Vec<RawDocument> = texts
        .iter()
        .enumerate()
        .map(|(index, text)| (format!("text-{}", index), text.as_bytes().to_vec()))
        .collect();

    let report = rank_documents(&corpus, ngram_size, top_k)?;

    Ok(report.top_ngrams)
}
