// src/analysis/suggestions.rs
//! Rule-based improvement suggestions. Each rule is independent, evaluated in
//! a fixed order, and all applicable suggestions are returned together.

use super::vocab::{ACTION_VERBS, QUANTIFIER_WORDS};
use super::AnalysisResult;

const MIN_WORD_COUNT: usize = 300;
const MAX_WORD_COUNT: usize = 700;
const MIN_ACTION_VERBS: usize = 3;

pub const TOO_SHORT: &str =
    "Your resume seems too short. Consider adding more detail about your experience and accomplishments.";
pub const TOO_LONG: &str =
    "Your resume seems too long. Consider trimming it down to the most relevant experience.";
pub const ADD_WORK_EXPERIENCE: &str = "Consider adding a Work Experience section.";
pub const ADD_EDUCATION: &str = "Consider adding an Education section.";
pub const ADD_SKILLS: &str = "Consider adding a Skills section.";
pub const USE_ACTION_VERBS: &str =
    "Use more action verbs (managed, led, developed) to describe your experience.";
pub const ADD_MEASURABLE_ACHIEVEMENTS: &str =
    "Include measurable achievements (numbers, percentages) in your work experience.";

pub struct SuggestionGenerator;

impl SuggestionGenerator {
    pub fn generate(result: &AnalysisResult) -> Vec<String> {
        let mut suggestions = Vec::new();

        if result.word_count < MIN_WORD_COUNT {
            suggestions.push(TOO_SHORT.to_string());
        } else if result.word_count > MAX_WORD_COUNT {
            suggestions.push(TOO_LONG.to_string());
        }

        if result.sections.work_experience.is_empty() {
            suggestions.push(ADD_WORK_EXPERIENCE.to_string());
        }
        if result.sections.education.is_empty() {
            suggestions.push(ADD_EDUCATION.to_string());
        }
        if result.sections.skills.is_empty() {
            suggestions.push(ADD_SKILLS.to_string());
        }

        let verb_count = result
            .important_terms
            .iter()
            .filter(|term| ACTION_VERBS.contains(&term.as_str()))
            .count();
        if verb_count < MIN_ACTION_VERBS {
            suggestions.push(USE_ACTION_VERBS.to_string());
        }

        let experience_text = result.sections.work_experience.join(" ").to_lowercase();
        let has_quantifier = QUANTIFIER_WORDS
            .iter()
            .any(|word| experience_text.contains(word));
        if !has_quantifier {
            suggestions.push(ADD_MEASURABLE_ACHIEVEMENTS.to_string());
        }

        suggestions
    }
}
