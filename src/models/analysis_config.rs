use crate::models::Error;

/// Parameters of one analysis run.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct AnalysisConfig {
    /// Number of consecutive tokens per n-gram. Must be >= 1.
    pub ngram_size: usize,

    /// Maximum number of ranked entries to return. Must be >= 1.
    pub top_k: usize,
}

impl AnalysisConfig {
    /// Rejects invalid parameters before any document is processed.
    pub fn validate(&self) -> Result<(), Error> {
        if self.ngram_size < 1 {
            return Err(Error::InvalidParameter(format!(
                "ngram_size must be >= 1, got {}",
                self.ngram_size
            )));
        }

        if self.top_k < 1 {
            return Err(Error::InvalidParameter(format!(
                "top_k must be >= 1, got {}",
                self.top_k
            )));
        }

        Ok(())
    }
}
