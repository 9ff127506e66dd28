// src/nlp/model.rs
//! Rule-based language model: sentence splitting, pattern-driven entity
//! recognition, and noun-chunk extraction. No external model download; the
//! whole thing is regexes plus a curated stop-word list, built once at startup.

use super::{Annotation, Entity, LanguageModel, Token};
use anyhow::{Context, Result};
use regex::Regex;
use std::collections::HashSet;

const STOP_WORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "all", "also", "am", "an", "and", "any", "are", "as",
    "at", "be", "because", "been", "before", "being", "below", "between", "both", "but", "by",
    "can", "did", "do", "does", "doing", "down", "during", "each", "few", "for", "from", "further",
    "had", "has", "have", "having", "he", "her", "here", "hers", "him", "his", "how", "i", "if",
    "in", "into", "is", "it", "its", "just", "me", "more", "most", "my", "no", "nor", "not", "now",
    "of", "off", "on", "once", "only", "or", "other", "our", "out", "over", "own", "same", "she",
    "so", "some", "such", "than", "that", "the", "their", "them", "then", "there", "these", "they",
    "this", "those", "through", "to", "too", "under", "until", "up", "very", "was", "we", "were",
    "what", "when", "where", "which", "while", "who", "whom", "why", "will", "with", "you", "your",
];

pub struct RuleLanguageModel {
    stop_words: HashSet<&'static str>,
    email_pattern: Regex,
    phone_pattern: Regex,
    org_pattern: Regex,
    location_pattern: Regex,
    date_pattern: Regex,
    person_pattern: Regex,
}

impl RuleLanguageModel {
    pub fn new() -> Result<Self> {
        Ok(Self {
            stop_words: STOP_WORDS.iter().copied().collect(),
            email_pattern: Regex::new(r"[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}")
                .context("Failed to compile email pattern")?,
            phone_pattern: Regex::new(r"\+?\d[\d\s().\-]{7,}\d")
                .context("Failed to compile phone pattern")?,
            org_pattern: Regex::new(
                r"([A-Z][A-Za-z&]+ )+(Inc|LLC|Ltd|Corp|Corporation|Company|Technologies|Solutions|Systems|Labs|University|College|Institute)\b",
            )
            .context("Failed to compile organization pattern")?,
            location_pattern: Regex::new(r"\b(?:in|at|near|based in) ([A-Z][a-z]+(?: [A-Z][a-z]+)?(?:, [A-Z]{2})?)\b")
                .context("Failed to compile location pattern")?,
            date_pattern: Regex::new(r"\b(19|20)\d{2}\b")
                .context("Failed to compile date pattern")?,
            person_pattern: Regex::new(r"^([A-Z][a-z]+(?: [A-Z]\.?)? [A-Z][a-z]+)$")
                .context("Failed to compile person pattern")?,
        })
    }

    /// Sentence boundaries: line breaks, or `.` `!` `?` followed by whitespace.
    fn split_sentences(&self, text: &str) -> Vec<String> {
        let mut sentences = Vec::new();
        for line in text.lines() {
            let mut start = 0;
            let chars: Vec<char> = line.chars().collect();
            let mut i = 0;
            while i < chars.len() {
                if matches!(chars[i], '.' | '!' | '?') {
                    let at_end = i + 1 >= chars.len();
                    let before_space = !at_end && chars[i + 1].is_whitespace();
                    if at_end || before_space {
                        let sentence: String = chars[start..i].iter().collect();
                        let trimmed = sentence.trim();
                        if !trimmed.is_empty() {
                            sentences.push(trimmed.to_string());
                        }
                        start = i + 1;
                    }
                }
                i += 1;
            }
            if start < chars.len() {
                let tail: String = chars[start..].iter().collect();
                let trimmed = tail.trim();
                if !trimmed.is_empty() {
                    sentences.push(trimmed.to_string());
                }
            }
        }
        sentences
    }

    fn extract_entities(&self, text: &str) -> Vec<Entity> {
        let mut entities = Vec::new();

        // A résumé usually opens with the candidate's name.
        if let Some(first_line) = text.lines().find(|l| !l.trim().is_empty()) {
            if let Some(m) = self.person_pattern.captures(first_line.trim()) {
                entities.push(Entity {
                    label: "PERSON".to_string(),
                    text: m[1].to_string(),
                });
            }
        }

        for m in self.org_pattern.find_iter(text) {
            entities.push(Entity {
                label: "ORG".to_string(),
                text: m.as_str().trim().to_string(),
            });
        }

        for caps in self.location_pattern.captures_iter(text) {
            entities.push(Entity {
                label: "GPE".to_string(),
                text: caps[1].to_string(),
            });
        }

        for m in self.date_pattern.find_iter(text) {
            entities.push(Entity {
                label: "DATE".to_string(),
                text: m.as_str().to_string(),
            });
        }

        for m in self.email_pattern.find_iter(text) {
            entities.push(Entity {
                label: "EMAIL".to_string(),
                text: m.as_str().to_string(),
            });
        }

        for m in self.phone_pattern.find_iter(text) {
            entities.push(Entity {
                label: "PHONE".to_string(),
                text: m.as_str().trim().to_string(),
            });
        }

        entities
    }

    /// Noun chunks: runs of consecutive content tokens inside a sentence,
    /// broken at stop words and punctuation. Runs of a single lowercase word
    /// are dropped as noise; capitalized single words survive.
    fn extract_noun_chunks(&self, sentences: &[String]) -> Vec<String> {
        let mut chunks = Vec::new();
        for sentence in sentences {
            let mut run: Vec<String> = Vec::new();
            for token in self.tokenize(sentence) {
                if token.is_punctuation || token.is_stop_word {
                    Self::flush_run(&mut run, &mut chunks);
                } else if run.len() >= 4 {
                    Self::flush_run(&mut run, &mut chunks);
                    run.push(token.text);
                } else {
                    run.push(token.text);
                }
            }
            Self::flush_run(&mut run, &mut chunks);
        }
        chunks
    }

    fn flush_run(run: &mut Vec<String>, chunks: &mut Vec<String>) {
        if run.is_empty() {
            return;
        }
        let keep = run.len() > 1
            || run[0]
                .chars()
                .next()
                .map(|c| c.is_uppercase())
                .unwrap_or(false);
        if keep && run.iter().any(|t| t.chars().any(|c| c.is_alphabetic())) {
            chunks.push(run.join(" "));
        }
        run.clear();
    }
}

impl LanguageModel for RuleLanguageModel {
    fn annotate(&self, text: &str) -> Annotation {
        let sentences = self.split_sentences(text);
        Annotation {
            entities: self.extract_entities(text),
            noun_chunks: self.extract_noun_chunks(&sentences),
            sentences,
        }
    }

    fn tokenize(&self, text: &str) -> Vec<Token> {
        text.split_whitespace()
            .map(|raw| {
                let stripped: &str =
                    raw.trim_matches(|c: char| !c.is_alphanumeric() && c != '#' && c != '+');
                if stripped.is_empty() {
                    Token {
                        text: raw.to_string(),
                        is_stop_word: false,
                        is_punctuation: true,
                    }
                } else {
                    let lower = stripped.to_lowercase();
                    Token {
                        is_stop_word: self.stop_words.contains(lower.as_str()),
                        text: stripped.to_string(),
                        is_punctuation: false,
                    }
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model() -> RuleLanguageModel {
        RuleLanguageModel::new().unwrap()
    }

    #[test]
    fn test_split_sentences_on_lines_and_periods() {
        let text = "John Smith\nWork Experience\nManaged a team of 5 engineers, increased output by 20%.\nEducation\nBS Computer Science.";
        let sentences = model().split_sentences(text);
        assert_eq!(sentences[0], "John Smith");
        assert_eq!(sentences[1], "Work Experience");
        assert_eq!(
            sentences[2],
            "Managed a team of 5 engineers, increased output by 20%"
        );
        assert_eq!(sentences[3], "Education");
        assert_eq!(sentences[4], "BS Computer Science");
    }

    #[test]
    fn test_split_keeps_inline_dots_together() {
        let sentences = model().split_sentences("Worked with Node.js and React daily. Shipped v2.");
        assert_eq!(sentences.len(), 2);
        assert!(sentences[0].contains("Node.js"));
    }

    #[test]
    fn test_entity_extraction() {
        let text = "John Smith\nSoftware engineer at Acme Technologies in Boston, MA.\nContact: john@example.com or +1 555 123 4567. Graduated 2019.";
        let entities = model().extract_entities(text);
        let labels: Vec<&str> = entities.iter().map(|e| e.label.as_str()).collect();
        assert!(labels.contains(&"PERSON"));
        assert!(labels.contains(&"ORG"));
        assert!(labels.contains(&"GPE"));
        assert!(labels.contains(&"DATE"));
        assert!(labels.contains(&"EMAIL"));
        assert!(labels.contains(&"PHONE"));
    }

    #[test]
    fn test_tokenize_flags() {
        let tokens = model().tokenize("The quick, brown C++ --- fox");
        assert!(tokens[0].is_stop_word);
        assert_eq!(tokens[1].text, "quick");
        assert_eq!(tokens[3].text, "C++");
        assert!(tokens[4].is_punctuation);
    }

    #[test]
    fn test_noun_chunks_order_and_duplicates() {
        let chunks = model().extract_noun_chunks(&[
            "Built Python services".to_string(),
            "Built Python services".to_string(),
        ]);
        assert_eq!(chunks.len(), 2);
        assert_eq!(chunks[0], chunks[1]);
    }
}
