// src/pipeline.rs
//! End-to-end pipeline: features -> sections -> titles/skills -> postings ->
//! ranked matches -> suggestions. Everything past input validation degrades
//! feature-by-feature; a failed posting search never blocks the score and
//! suggestions portion of the response.

use crate::analysis::keywords::KeywordExtractor;
use crate::analysis::suggestions::SuggestionGenerator;
use crate::analysis::{AnalysisResult, FeatureExtractor, SectionMap};
use crate::jobs::{JobPostingGateway, MatchScorer, MatchedJob};
use crate::nlp::{LanguageModel, TextPreprocessor};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

const MAX_KEY_PHRASES_REPORTED: usize = 5;
const DEFAULT_QUERY: &str = "software developer";

/// Analysis details reported back to the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub important_terms: Vec<String>,
    pub key_phrases: Vec<String>,
    pub entities: BTreeMap<String, String>,
    pub structured_info: SectionMap,
}

/// Full response payload for one résumé.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisOutcome {
    pub request_id: String,
    pub score: u32,
    pub suggestions: Vec<String>,
    pub matching_jobs: Vec<MatchedJob>,
    pub analysis: AnalysisReport,
}

pub struct AnalysisOrchestrator {
    extractor: FeatureExtractor,
    scorer: MatchScorer,
    gateway: JobPostingGateway,
    default_location: String,
}

impl AnalysisOrchestrator {
    pub fn new(
        model: Arc<dyn LanguageModel>,
        gateway: JobPostingGateway,
        default_location: String,
    ) -> Self {
        Self {
            extractor: FeatureExtractor::new(Arc::clone(&model)),
            scorer: MatchScorer::new(TextPreprocessor::new(model)),
            gateway,
            default_location,
        }
    }

    pub async fn analyze(&self, text: &str, location: Option<&str>) -> AnalysisOutcome {
        let request_id = Uuid::new_v4().to_string();
        info!("Starting resume analysis (request {})", request_id);

        let result = self.extractor.extract(text);
        let titles = KeywordExtractor::extract_titles(&result);
        let skills = KeywordExtractor::extract_skills(&result);

        let query = if titles.is_empty() {
            DEFAULT_QUERY.to_string()
        } else {
            titles.join(" ")
        };
        let location = location.unwrap_or(&self.default_location);

        let postings = self.gateway.search(&query, location).await;
        info!(
            "Retrieved {} postings for '{}' (request {})",
            postings.len(),
            query,
            request_id
        );

        let matching_jobs = self.scorer.rank(&result, &skills, postings);
        let suggestions = SuggestionGenerator::generate(&result);

        info!(
            "Analysis complete: score {}, {} suggestions, {} matches (request {})",
            result.score,
            suggestions.len(),
            matching_jobs.len(),
            request_id
        );

        Self::assemble(request_id, result, suggestions, matching_jobs)
    }

    fn assemble(
        request_id: String,
        result: AnalysisResult,
        suggestions: Vec<String>,
        matching_jobs: Vec<MatchedJob>,
    ) -> AnalysisOutcome {
        let mut key_phrases = result.key_phrases;
        key_phrases.truncate(MAX_KEY_PHRASES_REPORTED);

        AnalysisOutcome {
            request_id,
            score: result.score,
            suggestions,
            matching_jobs,
            analysis: AnalysisReport {
                important_terms: result.important_terms,
                key_phrases,
                entities: result.entities,
                structured_info: result.sections,
            },
        }
    }
}
