// src/nlp/mod.rs
use serde::{Deserialize, Serialize};

pub mod model;
pub mod preprocess;

pub use model::RuleLanguageModel;
pub use preprocess::TextPreprocessor;

/// A labeled text span recognized by the language model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entity {
    pub label: String,
    pub text: String,
}

/// A single token with the flags the preprocessor needs.
#[derive(Debug, Clone)]
pub struct Token {
    pub text: String,
    pub is_stop_word: bool,
    pub is_punctuation: bool,
}

/// Full annotation pass over a document.
#[derive(Debug, Clone, Default)]
pub struct Annotation {
    pub entities: Vec<Entity>,
    pub noun_chunks: Vec<String>,
    pub sentences: Vec<String>,
}

/// Language-model capability consumed by the analysis core.
///
/// Loaded once at process start and shared read-only across requests, so
/// implementations must be `Send + Sync` and never mutate per call.
pub trait LanguageModel: Send + Sync {
    fn annotate(&self, text: &str) -> Annotation;
    fn tokenize(&self, text: &str) -> Vec<Token>;
}
