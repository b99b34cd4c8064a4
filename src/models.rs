pub mod analysis_config;
pub use analysis_config::AnalysisConfig;

pub mod analysis_report;
pub use analysis_report::{AnalysisReport, SkippedDocument};

pub mod error;
pub use error::Error;

pub mod ngram_extractor;
pub use ngram_extractor::NGramExtractor;

pub mod tokenizer;
pub use tokenizer::Tokenizer;
