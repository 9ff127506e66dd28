// src/analysis/sections.rs
//! Heading-triggered section segmentation: a small state machine over the
//! sentence sequence, not a grammar. A heading sentence switches the current
//! section and is consumed by the transition; it is never appended to the
//! section it introduces. The bare "experience" trigger is intentionally
//! broad and kept as-is.

use super::SectionMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    None,
    WorkExperience,
    Education,
    Skills,
}

pub struct SectionSegmenter;

impl SectionSegmenter {
    pub fn segment(sentences: &[String]) -> SectionMap {
        let mut map = SectionMap::default();
        let mut current = Section::None;

        for sentence in sentences {
            let lower = sentence.trim().to_lowercase();
            if lower.contains("work experience")
                || lower.contains("professional experience")
                || lower.contains("experience")
            {
                current = Section::WorkExperience;
            } else if lower.contains("education") {
                current = Section::Education;
            } else if lower.contains("skills") || lower.contains("technical skills") {
                current = Section::Skills;
            } else {
                match current {
                    Section::None => {}
                    Section::WorkExperience => map.work_experience.push(sentence.clone()),
                    Section::Education => map.education.push(sentence.clone()),
                    Section::Skills => map.skills.push(sentence.clone()),
                }
            }
        }

        map
    }
}
