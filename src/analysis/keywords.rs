// src/analysis/keywords.rs
//! Closed-vocabulary lookup of candidate job titles and skills. Substring
//! containment over normalized text against the curated tables in `vocab`,
//! deliberately not open-ended extraction.

use super::vocab::{JOB_TITLES, SENIORITY_LEVELS, SKILLS};
use super::AnalysisResult;

const MAX_TITLES: usize = 3;
const MAX_SKILLS: usize = 5;

pub struct KeywordExtractor;

impl KeywordExtractor {
    /// Up to 3 candidate job titles, most frequent hits first; ties keep the
    /// order titles were first recorded in.
    pub fn extract_titles(result: &AnalysisResult) -> Vec<String> {
        let haystack = Self::haystack(result);
        let mut hits: Vec<(String, usize)> = Vec::new();

        for title in JOB_TITLES {
            if haystack.contains(title) {
                Self::record(&mut hits, title);
            }
            for level in SENIORITY_LEVELS {
                let combined = format!("{} {}", level, title);
                if haystack.contains(&combined) {
                    Self::record(&mut hits, &combined);
                }
            }
        }

        hits.sort_by(|a, b| b.1.cmp(&a.1));
        hits.into_iter()
            .take(MAX_TITLES)
            .map(|(title, _)| title)
            .collect()
    }

    /// Up to 5 skills in vocabulary order, first match wins.
    pub fn extract_skills(result: &AnalysisResult) -> Vec<String> {
        let haystack = Self::haystack(result);
        SKILLS
            .iter()
            .filter(|skill| haystack.contains(*skill))
            .take(MAX_SKILLS)
            .map(|skill| skill.to_string())
            .collect()
    }

    /// Whitespace-collapsed lowercase concatenation of section text and key
    /// phrases.
    fn haystack(result: &AnalysisResult) -> String {
        let sections = &result.sections;
        let parts = sections
            .work_experience
            .iter()
            .chain(sections.education.iter())
            .chain(sections.skills.iter())
            .chain(result.key_phrases.iter());

        parts
            .flat_map(|s| s.split_whitespace())
            .map(|w| w.to_lowercase())
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn record(hits: &mut Vec<(String, usize)>, hit: &str) {
        match hits.iter_mut().find(|(recorded, _)| recorded == hit) {
            Some((_, count)) => *count += 1,
            None => hits.push((hit.to_string(), 1)),
        }
    }
}
