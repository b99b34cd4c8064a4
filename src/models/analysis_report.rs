use crate::types::{DocumentIndex, DocumentLabel, NGram, NGramFrequency};

/// A document that was excluded from a run because its bytes could not be
/// decoded. Skips are reported as data rather than raised as errors so that
/// one malformed file never aborts the remaining documents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedDocument {
    /// Position of the document in the submitted corpus.
    pub index: DocumentIndex,
    /// Caller-supplied identifier (e.g. the file path).
    pub label: DocumentLabel,
    /// Human-readable decode failure description.
    pub reason: String,
}

/// The outcome of one analysis run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisReport {
    /// Ranked (n-gram, count) pairs: descending by count, ties broken by
    /// first-occurrence order. At most `top_k` entries.
    pub top_ngrams: Vec<(NGram, NGramFrequency)>,

    /// Documents excluded from the run, in corpus order. Empty when every
    /// document decoded cleanly.
    pub skipped_documents: Vec<SkippedDocument>,
}
