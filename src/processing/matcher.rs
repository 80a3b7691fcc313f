//! Set-based comparison of user skills against a role's required skills

use crate::error::Result;
use crate::processing::normalizer::SynonymTable;
use log::info;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    /// Required skills present in the user's set, original casing and order
    pub matched: Vec<String>,
    /// Required skills missing from the user's set, original casing and order
    pub gaps: Vec<String>,
    /// Percentage of distinct required skills matched, one decimal
    pub score: f64,
    pub total_required: usize,
    pub total_matched: usize,
}

pub struct SkillMatcher {
    synonyms: SynonymTable,
}

impl SkillMatcher {
    /// Create a matcher over the built-in synonym table
    pub fn new() -> Result<Self> {
        Ok(Self::with_synonyms(SynonymTable::new()?))
    }

    pub fn with_synonyms(synonyms: SynonymTable) -> Self {
        Self { synonyms }
    }

    pub fn normalize(&self, skill: &str) -> String {
        self.synonyms.normalize(skill)
    }

    /// Match user skills against required skills.
    ///
    /// Output order and casing always come from `required_skills`.
    pub fn match_skills<U, R>(&self, user_skills: &[U], required_skills: &[R]) -> MatchResult
    where
        U: AsRef<str>,
        R: AsRef<str>,
    {
        let user: HashSet<String> = user_skills
            .iter()
            .map(|s| self.normalize(s.as_ref()))
            .collect();
        let required: HashSet<String> = required_skills
            .iter()
            .map(|s| self.normalize(s.as_ref()))
            .collect();

        let matched_set: HashSet<&String> = required.intersection(&user).collect();

        let score = if required.is_empty() {
            0.0
        } else {
            let raw = matched_set.len() as f64 / required.len() as f64 * 100.0;
            (raw * 10.0).round_ties_even() / 10.0
        };

        let mut matched = Vec::new();
        let mut gaps = Vec::new();
        for original in required_skills {
            let original = original.as_ref();
            if matched_set.contains(&self.normalize(original)) {
                matched.push(original.to_string());
            } else {
                gaps.push(original.to_string());
            }
        }

        info!(
            "Skill match: {}/{} = {:.1}%",
            matched_set.len(),
            required.len(),
            score
        );

        MatchResult {
            matched,
            gaps,
            score,
            total_required: required.len(),
            total_matched: matched_set.len(),
        }
    }

    pub fn synonyms(&self) -> &SynonymTable {
        &self.synonyms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matcher() -> SkillMatcher {
        SkillMatcher::new().unwrap()
    }

    #[test]
    fn test_end_to_end_example() {
        let result = matcher().match_skills(
            &["Python", "SQL"],
            &["Python", "Pandas", "SQL", "NumPy"],
        );
        assert_eq!(result.matched, vec!["Python", "SQL"]);
        assert_eq!(result.gaps, vec!["Pandas", "NumPy"]);
        assert_eq!(result.score, 50.0);
        assert_eq!(result.total_required, 4);
        assert_eq!(result.total_matched, 2);
    }

    #[test]
    fn test_synonym_equivalence() {
        let result = matcher().match_skills(&["js"], &["JavaScript"]);
        assert_eq!(result.matched, vec!["JavaScript"]);
        assert!(result.gaps.is_empty());
        assert_eq!(result.score, 100.0);
    }

    #[test]
    fn test_empty_required_skills() {
        let result = matcher().match_skills(&["Python"], &[] as &[&str]);
        assert_eq!(result.score, 0.0);
        assert!(result.matched.is_empty());
        assert!(result.gaps.is_empty());
        assert_eq!(result.total_required, 0);
        assert_eq!(result.total_matched, 0);
    }

    #[test]
    fn test_empty_user_skills_yield_all_gaps() {
        let result = matcher().match_skills(&[] as &[&str], &["Docker", "AWS"]);
        assert_eq!(result.gaps, vec!["Docker", "AWS"]);
        assert_eq!(result.score, 0.0);
    }

    #[test]
    fn test_user_order_does_not_matter() {
        let required = ["React", "Node.js", "MongoDB", "Docker", "Git"];
        let m = matcher();
        let a = m.match_skills(&["git", "nodejs", "react", "Rust"], &required);
        let b = m.match_skills(&["Rust", "react", "git", "nodejs"], &required);
        assert_eq!(a, b);
        assert_eq!(a.matched, vec!["React", "Node.js", "Git"]);
        assert_eq!(a.score, 60.0);
    }

    #[test]
    fn test_output_casing_comes_from_required_list() {
        let result = matcher().match_skills(&["KUBERNETES"], &["k8s"]);
        assert_eq!(result.matched, vec!["k8s"]);
    }

    #[test]
    fn test_duplicate_required_skills_collapse_in_counts() {
        let result = matcher().match_skills(&["aws"], &["AWS", "Amazon Web Services", "GCP"]);
        assert_eq!(result.total_required, 2);
        assert_eq!(result.total_matched, 1);
        assert_eq!(result.score, 50.0);
        // both spellings are reported, in input order
        assert_eq!(result.matched, vec!["AWS", "Amazon Web Services"]);
        assert_eq!(result.gaps, vec!["GCP"]);
    }

    #[test]
    fn test_score_rounds_to_one_decimal() {
        let result = matcher().match_skills(&["A"], &["A", "B", "C"]);
        assert_eq!(result.score, 33.3);
    }

    #[test]
    fn test_half_way_scores_round_to_even() {
        let required: Vec<String> = (0..16).map(|i| format!("skill{}", i)).collect();

        let result = matcher().match_skills(&required[..1], &required);
        assert_eq!(result.score, 6.2);

        let result = matcher().match_skills(&required[..5], &required);
        assert_eq!(result.score, 31.2);

        let result = matcher().match_skills(&required[..3], &required);
        assert_eq!(result.score, 18.8);
    }

    #[test]
    fn test_serializes_with_camel_case_totals() {
        let result = matcher().match_skills(&["Go"], &["Go"]);
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["totalRequired"], 1);
        assert_eq!(json["totalMatched"], 1);
        assert_eq!(json["score"], 100.0);
    }
}
