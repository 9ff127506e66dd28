// src/analysis/mod.rs
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub mod features;
pub mod keywords;
pub mod sections;
pub mod suggestions;
pub mod tfidf;
pub mod vocab;

pub use features::FeatureExtractor;
pub use sections::SectionSegmenter;

/// Sentences assigned to each recognized résumé section, in document order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SectionMap {
    pub work_experience: Vec<String>,
    pub education: Vec<String>,
    pub skills: Vec<String>,
}

/// Everything the feature extraction pass produces for one résumé.
/// Immutable once built; every downstream stage reads from it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Content-richness proxy in [0, 100]; not a quality judgment.
    pub score: u32,
    /// Entity label to last extracted span for that label. Last-write-wins
    /// is the accepted policy, one value per label.
    pub entities: BTreeMap<String, String>,
    /// Noun-phrase chunks in order of first appearance; may repeat.
    pub key_phrases: Vec<String>,
    /// Up to 10 terms, highest TF-IDF weight first.
    pub important_terms: Vec<String>,
    pub sections: SectionMap,
    /// Whitespace-token count of the raw document, used by the length rule.
    pub word_count: usize,
}
