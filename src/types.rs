use std::collections::HashMap;

// Types listed here are either shared across multiple files and/or exposed via the library.

/// Represents a token as an owned `String`. Tokens are the basic units used for processing text.
pub type Token = String;

/// Represents a borrowed view of a token as a `str`. This is used when ownership is not required.
pub type TokenRef = str;

/// An ordered, fixed-length sequence of consecutive tokens drawn from one document.
/// Equality and hashing are structural over the token strings, case-sensitive.
pub type NGram = Vec<Token>;

/// Represents the total number of occurrences of an n-gram across a corpus.
pub type NGramFrequency = usize;

/// The position at which a distinct n-gram was first inserted into a frequency map
/// while scanning documents in input order. Serves as the deterministic tie-break
/// among n-grams with equal frequency.
pub type InsertionRank = usize;

/// Represents a map of n-grams to their frequency counts within a corpus.
/// The key is the `NGram`, and the value is `(NGramFrequency, InsertionRank)`.
pub type NGramFrequencyMap = HashMap<NGram, (NGramFrequency, InsertionRank)>;

/// Zero-based position of a document within the input corpus.
pub type DocumentIndex = usize;

/// Caller-supplied identifier for a document (e.g. a file path). Only used when
/// reporting which documents were excluded from a run.
pub type DocumentLabel = String;

/// A raw document as submitted for analysis, where each entry includes:
/// - `DocumentLabel`: An identifier used when reporting decode failures.
/// - `Vec<u8>`: The undecoded document bytes.
pub type RawDocument = (DocumentLabel, Vec<u8>);
