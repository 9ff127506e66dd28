// src/nlp/preprocess.rs
use super::LanguageModel;
use std::sync::Arc;

/// Normalizes text into a lowercase bag-of-words string for similarity
/// scoring: tokenize, drop stop words and punctuation, join with spaces.
#[derive(Clone)]
pub struct TextPreprocessor {
    model: Arc<dyn LanguageModel>,
}

impl TextPreprocessor {
    pub fn new(model: Arc<dyn LanguageModel>) -> Self {
        Self { model }
    }

    pub fn normalize(&self, text: &str) -> String {
        self.model
            .tokenize(text)
            .into_iter()
            .filter(|t| !t.is_stop_word && !t.is_punctuation)
            .map(|t| t.text.to_lowercase())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nlp::RuleLanguageModel;

    fn preprocessor() -> TextPreprocessor {
        TextPreprocessor::new(Arc::new(RuleLanguageModel::new().unwrap()))
    }

    #[test]
    fn test_normalize_drops_stop_words_and_punctuation() {
        let normalized = preprocessor().normalize("The team was led by a Senior Engineer!");
        assert_eq!(normalized, "team led senior engineer");
    }

    #[test]
    fn test_normalize_empty_input() {
        assert_eq!(preprocessor().normalize(""), "");
        assert_eq!(preprocessor().normalize("-- ;; !!"), "");
    }
}
