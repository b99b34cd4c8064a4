use crate::models::AnalysisConfig;

pub const DEFAULT_ANALYSIS_CONFIG: &AnalysisConfig = &AnalysisConfig {
    ngram_size: 4,
    top_k: 10,
};
