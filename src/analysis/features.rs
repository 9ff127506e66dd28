// src/analysis/features.rs
//! Turns raw résumé text into the structured features every downstream stage
//! consumes: entities, key phrases, TF-IDF-ranked important terms, section
//! map, and a crude content-richness score.

use super::tfidf::TfidfVectorizer;
use super::{AnalysisResult, SectionSegmenter};
use crate::nlp::LanguageModel;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::warn;

const VOCABULARY_CAP: usize = 100;
const MAX_IMPORTANT_TERMS: usize = 10;
const MAX_SCORE: usize = 100;

pub struct FeatureExtractor {
    model: Arc<dyn LanguageModel>,
}

impl FeatureExtractor {
    pub fn new(model: Arc<dyn LanguageModel>) -> Self {
        Self { model }
    }

    pub fn extract(&self, text: &str) -> AnalysisResult {
        let annotation = self.model.annotate(text);

        let mut entities: BTreeMap<String, String> = BTreeMap::new();
        for entity in annotation.entities {
            entities.insert(entity.label, entity.text);
        }

        let key_phrases = annotation.noun_chunks;
        let important_terms = Self::important_terms(text);
        let sections = SectionSegmenter::segment(&annotation.sentences);

        let richness = entities.len() + key_phrases.len() + important_terms.len();
        let score = (2 * richness).min(MAX_SCORE) as u32;

        AnalysisResult {
            score,
            entities,
            key_phrases,
            important_terms,
            sections,
            word_count: text.split_whitespace().count(),
        }
    }

    /// Top-10 terms by summed TF-IDF weight over the singleton document.
    /// Stable sort, so ties keep vocabulary insertion order. An empty
    /// vocabulary degrades to zero terms instead of failing the request.
    fn important_terms(text: &str) -> Vec<String> {
        let matrix = match TfidfVectorizer::with_max_features(VOCABULARY_CAP).fit_transform(&[text])
        {
            Ok(matrix) => matrix,
            Err(e) => {
                warn!("Term weighting skipped: {}", e);
                return Vec::new();
            }
        };

        let mut weights = matrix.term_weights();
        weights.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        weights
            .into_iter()
            .take(MAX_IMPORTANT_TERMS)
            .map(|(term, _)| term)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nlp::RuleLanguageModel;

    fn extractor() -> FeatureExtractor {
        FeatureExtractor::new(Arc::new(RuleLanguageModel::new().unwrap()))
    }

    #[test]
    fn test_empty_text_degrades_to_zero_score() {
        let result = extractor().extract("");
        assert_eq!(result.score, 0);
        assert!(result.important_terms.is_empty());
        assert!(result.entities.is_empty());
        assert_eq!(result.word_count, 0);
    }

    #[test]
    fn test_score_bounds_and_term_cap() {
        let long_text = (0..400)
            .map(|i| format!("term{} phrase{}", i, i))
            .collect::<Vec<_>>()
            .join(". ");
        let result = extractor().extract(&long_text);
        // Rich enough that the raw tally far exceeds the cap.
        assert_eq!(result.score, 100);
        assert!(result.important_terms.len() <= 10);
    }

    #[test]
    fn test_term_count_never_exceeds_input_vocabulary() {
        let result = extractor().extract("rust rust tokio");
        assert!(result.important_terms.len() <= 2);
        assert_eq!(result.important_terms[0], "rust");
    }

    #[test]
    fn test_entity_map_is_last_write_wins() {
        let text = "Worked at Acme Corp and later joined Globex Corporation for a new role.";
        let result = extractor().extract(text);
        if let Some(org) = result.entities.get("ORG") {
            assert!(org.contains("Globex"));
        }
    }

    #[test]
    fn test_sections_populated_from_sentence_walk() {
        let result = extractor().extract("Work Experience\nShipped the billing migration.");
        assert_eq!(
            result.sections.work_experience,
            vec!["Shipped the billing migration"]
        );
    }
}
