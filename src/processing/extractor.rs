//! Skill extraction from free-text resume content

use crate::error::{Result, SkillLensError};
use crate::processing::dictionary::{SkillCategory, SkillDefinition, SkillDictionary};
use log::info;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::HashSet;
use std::fmt;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillLevel {
    Beginner,
    #[default]
    Intermediate,
    Advanced,
}

impl SkillLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            SkillLevel::Beginner => "beginner",
            SkillLevel::Intermediate => "intermediate",
            SkillLevel::Advanced => "advanced",
        }
    }
}

impl fmt::Display for SkillLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractedSkill {
    pub name: String,
    pub category: SkillCategory,
    pub level: SkillLevel,
    /// Mention-frequency signal in [0.5, 1.0], two decimals
    pub confidence: f64,
}

/// Scans text for every dictionary skill using one compiled pattern per skill
pub struct SkillExtractor {
    patterns: Vec<(Regex, SkillDefinition)>,
}

impl SkillExtractor {
    /// Create an extractor over the built-in dictionary
    pub fn new() -> Result<Self> {
        Self::with_dictionary(&SkillDictionary::new())
    }

    pub fn with_dictionary(dictionary: &SkillDictionary) -> Result<Self> {
        let patterns = dictionary
            .lookup_all()
            .iter()
            .map(|definition| {
                let regex = Regex::new(&Self::word_pattern(&definition.name)).map_err(|e| {
                    SkillLensError::Processing(format!(
                        "Failed to compile pattern for skill '{}': {}",
                        definition.name, e
                    ))
                })?;
                Ok((regex, definition.clone()))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { patterns })
    }

    /// Case-insensitive whole-word pattern for a literal skill name.
    ///
    /// A `\b` is only placed on a side whose edge character is a word
    /// character; `\b` next to `+`, `#` or `.` would require a word character
    /// on the far side and make names like `C++` undetectable.
    fn word_pattern(name: &str) -> String {
        let is_word = |c: char| c.is_alphanumeric() || c == '_';
        let mut pattern = String::from("(?i)");
        if name.chars().next().is_some_and(is_word) {
            pattern.push_str(r"\b");
        }
        pattern.push_str(&regex::escape(name));
        if name.chars().last().is_some_and(is_word) {
            pattern.push_str(r"\b");
        }
        pattern
    }

    /// Extract skills from resume text, highest confidence first
    pub fn extract(&self, text: &str) -> Vec<ExtractedSkill> {
        let mut seen = HashSet::new();
        let mut skills = Vec::new();

        for (regex, definition) in &self.patterns {
            let count = regex.find_iter(text).count();
            if count == 0 || !seen.insert(definition.name.clone()) {
                continue;
            }

            skills.push(ExtractedSkill {
                name: definition.name.clone(),
                category: definition.category,
                level: Self::estimate_level(text, &definition.name),
                confidence: confidence_for(count),
            });
        }

        // stable: ties keep dictionary order
        skills.sort_by(|a, b| {
            b.confidence
                .partial_cmp(&a.confidence)
                .unwrap_or(Ordering::Equal)
        });

        info!("Extracted {} skills from resume", skills.len());
        skills
    }

    /// Estimate proficiency from context phrases around the skill name.
    ///
    /// Never yields `Beginner`; unknown context defaults to `Intermediate`.
    pub fn estimate_level(text: &str, skill: &str) -> SkillLevel {
        let text_lower = text.to_lowercase();
        let skill_lower = skill.to_lowercase();

        let advanced = [
            format!("expert in {}", skill_lower),
            format!("advanced {}", skill_lower),
            format!("senior {}", skill_lower),
            format!("lead {}", skill_lower),
            "architect".to_string(),
        ];
        if advanced.iter().any(|p| text_lower.contains(p.as_str())) {
            return SkillLevel::Advanced;
        }

        let intermediate = [
            format!("experience with {}", skill_lower),
            format!("proficient in {}", skill_lower),
            format!("worked with {}", skill_lower),
        ];
        if intermediate.iter().any(|p| text_lower.contains(p.as_str())) {
            return SkillLevel::Intermediate;
        }

        SkillLevel::Intermediate
    }

    /// Number of compiled skill patterns
    pub fn skill_count(&self) -> usize {
        self.patterns.len()
    }
}

/// `min(0.5 + 0.1 * count, 1.0)` rounded to two decimals
pub fn confidence_for(count: usize) -> f64 {
    let raw = (0.5 + 0.1 * count as f64).min(1.0);
    (raw * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn find<'a>(skills: &'a [ExtractedSkill], name: &str) -> Option<&'a ExtractedSkill> {
        skills.iter().find(|s| s.name == name)
    }

    #[test]
    fn test_extractor_covers_every_dictionary_entry() {
        let dictionary = SkillDictionary::new();
        let extractor = SkillExtractor::with_dictionary(&dictionary).unwrap();
        assert_eq!(extractor.skill_count(), dictionary.len());
    }

    #[test]
    fn test_every_dictionary_skill_is_detectable() {
        let dictionary = SkillDictionary::new();
        let extractor = SkillExtractor::with_dictionary(&dictionary).unwrap();

        for definition in dictionary.lookup_all() {
            let text = format!("Skills: {} and more", definition.name);
            let skills = extractor.extract(&text);
            let found = find(&skills, &definition.name)
                .unwrap_or_else(|| panic!("'{}' was not detected", definition.name));
            assert!(found.confidence >= 0.5);
            assert_eq!(found.category, definition.category);
        }
    }

    #[test]
    fn test_confidence_progression() {
        assert_eq!(confidence_for(1), 0.6);
        assert_eq!(confidence_for(2), 0.7);
        assert_eq!(confidence_for(5), 1.0);
        assert_eq!(confidence_for(10), 1.0);
    }

    #[test]
    fn test_counts_case_insensitive_whole_words() {
        let extractor = SkillExtractor::new().unwrap();
        let skills = extractor.extract("python, PYTHON and Python. Pythonic code does not count.");
        assert_eq!(find(&skills, "Python").unwrap().confidence, 0.8);
    }

    #[test]
    fn test_word_boundaries_reject_embedded_names() {
        let extractor = SkillExtractor::new().unwrap();
        let skills = extractor.extract("Gopher Rusty Scalable Javascripting");
        assert!(find(&skills, "Go").is_none());
        assert!(find(&skills, "Rust").is_none());
        assert!(find(&skills, "Scala").is_none());
        assert!(find(&skills, "JavaScript").is_none());
    }

    #[test]
    fn test_symbol_names_are_literal() {
        let extractor = SkillExtractor::new().unwrap();
        let skills = extractor.extract("Wrote C++ and C# services on .NET");
        assert!(find(&skills, "C++").is_some());
        assert!(find(&skills, "C#").is_some());
        assert!(find(&skills, ".NET").is_some());

        // the dot must not act as a wildcard
        let skills = extractor.extract("Built a nodeXjs clone");
        assert!(find(&skills, "Node.js").is_none());
    }

    #[test]
    fn test_related_entries_detected_separately() {
        let extractor = SkillExtractor::new().unwrap();
        let skills = extractor.extract("Built UIs in React.js");
        assert!(find(&skills, "React.js").is_some());
        // "React" is also a whole word inside "React.js"
        assert!(find(&skills, "React").is_some());
        assert_eq!(skills.iter().filter(|s| s.name == "React").count(), 1);
    }

    #[test]
    fn test_sorted_by_confidence_with_stable_ties() {
        let extractor = SkillExtractor::new().unwrap();
        let skills = extractor.extract("Docker, Python, Docker, Java, Docker");
        let names: Vec<&str> = skills.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Docker", "Python", "Java"]);
        assert_eq!(skills[0].confidence, 0.8);
    }

    #[test]
    fn test_advanced_level_takes_precedence() {
        let extractor = SkillExtractor::new().unwrap();
        let skills = extractor.extract("Experienced in Python, advanced Python development");
        assert_eq!(find(&skills, "Python").unwrap().level, SkillLevel::Advanced);
    }

    #[test]
    fn test_level_estimation_rules() {
        assert_eq!(
            SkillExtractor::estimate_level("Expert in Rust systems", "Rust"),
            SkillLevel::Advanced
        );
        assert_eq!(
            SkillExtractor::estimate_level("Proficient in SQL", "SQL"),
            SkillLevel::Intermediate
        );
        assert_eq!(
            SkillExtractor::estimate_level("Solutions Architect; used Git", "Git"),
            SkillLevel::Advanced
        );
        assert_eq!(
            SkillExtractor::estimate_level("Dabbled in Go once", "Go"),
            SkillLevel::Intermediate
        );
    }

    #[test]
    fn test_empty_text_yields_nothing() {
        let extractor = SkillExtractor::new().unwrap();
        assert!(extractor.extract("").is_empty());
        assert!(extractor.extract("Gardening and pottery").is_empty());
    }
}
