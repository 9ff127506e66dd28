// src/jobs/matcher.rs
//! Composite match scoring: cosine similarity over a freshly-fit TF-IDF pair
//! dominates, with structured bonuses for skill overlap and verbatim
//! experience presence. Weighting is a tunable constant set, documented in
//! DESIGN.md.

use super::{JobPosting, MatchedJob};
use crate::analysis::tfidf::{cosine_similarity, TfidfVectorizer};
use crate::analysis::AnalysisResult;
use crate::nlp::TextPreprocessor;
use std::cmp::Ordering;

const SIMILARITY_WEIGHT: f64 = 0.6;
const SKILL_OVERLAP_WEIGHT: f64 = 0.25;
const EXPERIENCE_WEIGHT: f64 = 0.15;

/// Skill overlap is normalized against the extractor's skill cap.
const SKILL_OVERLAP_DENOMINATOR: f64 = 5.0;
const MAX_MATCHES: usize = 10;
const DESCRIPTION_PREVIEW_CHARS: usize = 200;

pub struct MatchScorer {
    preprocessor: TextPreprocessor,
}

impl MatchScorer {
    pub fn new(preprocessor: TextPreprocessor) -> Self {
        Self { preprocessor }
    }

    /// Ranks postings against the résumé features, descending by composite
    /// score, truncated to the top 10. An empty posting list scores to an
    /// empty result, never an error.
    pub fn rank(
        &self,
        result: &AnalysisResult,
        skills: &[String],
        postings: Vec<JobPosting>,
    ) -> Vec<MatchedJob> {
        let resume_text = self.resume_comparison_text(result, skills);

        let mut matches: Vec<MatchedJob> = postings
            .into_iter()
            .map(|posting| self.score_posting(&resume_text, result, skills, posting))
            .collect();

        matches.sort_by(|a, b| {
            b.match_score
                .partial_cmp(&a.match_score)
                .unwrap_or(Ordering::Equal)
        });
        matches.truncate(MAX_MATCHES);
        matches
    }

    /// Normalized concatenation of important terms, extracted skills, and
    /// entity values.
    fn resume_comparison_text(&self, result: &AnalysisResult, skills: &[String]) -> String {
        let combined = result
            .important_terms
            .iter()
            .map(String::as_str)
            .chain(skills.iter().map(String::as_str))
            .chain(result.entities.values().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ");
        self.preprocessor.normalize(&combined)
    }

    fn score_posting(
        &self,
        resume_text: &str,
        result: &AnalysisResult,
        skills: &[String],
        posting: JobPosting,
    ) -> MatchedJob {
        let posting_text = self.preprocessor.normalize(&posting.description);
        let similarity = pair_similarity(resume_text, &posting_text);

        let skill_match = skill_overlap(skills, &posting);
        let skill_component = if skills.is_empty() {
            0.0
        } else {
            (skill_match as f64 / SKILL_OVERLAP_DENOMINATOR).min(1.0)
        };

        let description_lower = posting.description.to_lowercase();
        let experience_match = result
            .sections
            .work_experience
            .iter()
            .any(|sentence| description_lower.contains(&sentence.to_lowercase()));

        let composite = SIMILARITY_WEIGHT * similarity
            + SKILL_OVERLAP_WEIGHT * skill_component
            + EXPERIENCE_WEIGHT * if experience_match { 1.0 } else { 0.0 };

        MatchedJob {
            title: posting.title,
            company: posting.company,
            match_score: round2(composite * 100.0),
            job_link: posting.apply_link,
            skill_match,
            experience_match,
            location: posting.location,
            salary_min: posting.salary_min,
            salary_max: posting.salary_max,
            description: posting.description.chars().take(DESCRIPTION_PREVIEW_CHARS).collect(),
        }
    }
}

/// Cosine similarity over TF-IDF vectors of the pair, vocabulary = union of
/// the two texts. Degenerate inputs (either side empty) score zero.
fn pair_similarity(resume_text: &str, posting_text: &str) -> f64 {
    if resume_text.is_empty() || posting_text.is_empty() {
        return 0.0;
    }
    match TfidfVectorizer::new().fit_transform(&[resume_text, posting_text]) {
        Ok(matrix) => cosine_similarity(matrix.row(0), matrix.row(1)),
        Err(_) => 0.0,
    }
}

/// Intersection of résumé skills with the posting's listed qualifications.
/// Postings without qualification highlights fall back to the description.
fn skill_overlap(skills: &[String], posting: &JobPosting) -> usize {
    let haystack = if posting.qualifications.is_empty() {
        posting.description.to_lowercase()
    } else {
        posting.qualifications.join(" ").to_lowercase()
    };
    skills
        .iter()
        .filter(|skill| haystack.contains(&skill.to_lowercase()))
        .count()
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::SectionMap;
    use crate::jobs::NOT_SPECIFIED;
    use crate::nlp::RuleLanguageModel;
    use std::collections::BTreeMap;
    use std::sync::Arc;

    fn scorer() -> MatchScorer {
        MatchScorer::new(TextPreprocessor::new(Arc::new(
            RuleLanguageModel::new().unwrap(),
        )))
    }

    fn result_with_terms(terms: &[&str]) -> AnalysisResult {
        AnalysisResult {
            score: 50,
            entities: BTreeMap::new(),
            key_phrases: Vec::new(),
            important_terms: terms.iter().map(|t| t.to_string()).collect(),
            sections: SectionMap::default(),
            word_count: 100,
        }
    }

    fn posting(title: &str, description: &str, qualifications: Vec<String>) -> JobPosting {
        JobPosting {
            title: title.to_string(),
            company: "Acme".to_string(),
            description: description.to_string(),
            apply_link: "https://example.com".to_string(),
            location: NOT_SPECIFIED.to_string(),
            salary_min: NOT_SPECIFIED.to_string(),
            salary_max: NOT_SPECIFIED.to_string(),
            qualifications,
        }
    }

    #[test]
    fn test_empty_postings_scores_to_empty_list() {
        let result = result_with_terms(&["python"]);
        assert!(scorer().rank(&result, &[], Vec::new()).is_empty());
    }

    #[test]
    fn test_output_sorted_non_increasing_and_capped() {
        let result = result_with_terms(&["python", "django", "postgresql"]);
        let skills = vec!["python".to_string(), "django".to_string()];
        let postings: Vec<JobPosting> = (0..15)
            .map(|i| {
                if i % 2 == 0 {
                    posting("Match", "python django postgresql services", Vec::new())
                } else {
                    posting("Miss", "forklift operator warehouse", Vec::new())
                }
            })
            .collect();

        let ranked = scorer().rank(&result, &skills, postings);
        assert_eq!(ranked.len(), 10);
        for pair in ranked.windows(2) {
            assert!(pair[0].match_score >= pair[1].match_score);
        }
        assert_eq!(ranked[0].title, "Match");
    }

    #[test]
    fn test_similar_posting_outranks_dissimilar() {
        let result = result_with_terms(&["rust", "tokio", "backend"]);
        let postings = vec![
            posting("Rust Backend", "rust tokio backend engineer", Vec::new()),
            posting("Florist", "flower arrangement retail", Vec::new()),
        ];
        let ranked = scorer().rank(&result, &[], postings);
        assert_eq!(ranked[0].title, "Rust Backend");
        assert!(ranked[0].match_score > ranked[1].match_score);
    }

    #[test]
    fn test_skill_overlap_counts_qualifications() {
        let p = posting(
            "Dev",
            "generic text",
            vec!["Python required".to_string(), "SQL a plus".to_string()],
        );
        let skills = vec!["python".to_string(), "sql".to_string(), "rust".to_string()];
        assert_eq!(skill_overlap(&skills, &p), 2);
    }

    #[test]
    fn test_experience_match_flag() {
        let mut result = result_with_terms(&["python"]);
        result.sections.work_experience = vec!["Built data pipelines".to_string()];
        let postings = vec![posting(
            "Data Engineer",
            "We want someone who has built data pipelines in Python",
            Vec::new(),
        )];
        let ranked = scorer().rank(&result, &[], postings);
        assert!(ranked[0].experience_match);
    }

    #[test]
    fn test_scores_stay_within_percentage_bounds() {
        let result = result_with_terms(&["python"]);
        let skills = vec!["python".to_string()];
        let mut r = result.clone();
        r.sections.work_experience = vec!["python".to_string()];
        let ranked = scorer().rank(&r, &skills, vec![posting("Dev", "python", Vec::new())]);
        assert!(ranked[0].match_score <= 100.0);
        assert!(ranked[0].match_score >= 0.0);
    }
}
