//! Derived report views: score bands and per-category coverage

use crate::processing::analyzer::SkillGapReport;
use crate::processing::dictionary::SkillCategory;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScoreBand {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl ScoreBand {
    pub fn from_score(score: f64) -> Self {
        if score >= 80.0 {
            ScoreBand::Excellent
        } else if score >= 60.0 {
            ScoreBand::Good
        } else if score >= 40.0 {
            ScoreBand::Fair
        } else {
            ScoreBand::Poor
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ScoreBand::Excellent => "EXCELLENT",
            ScoreBand::Good => "GOOD",
            ScoreBand::Fair => "FAIR",
            ScoreBand::Poor => "POOR",
        }
    }

    pub fn verdict(&self) -> &'static str {
        match self {
            ScoreBand::Excellent => "Strong fit: the resume covers most of the role's required skills",
            ScoreBand::Good => "Good fit with a few gaps worth closing",
            ScoreBand::Fair => "Partial fit: several core skills are missing",
            ScoreBand::Poor => "Weak fit: most required skills were not found",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryCoverage {
    pub category: SkillCategory,
    pub required: usize,
    pub matched: usize,
}

impl CategoryCoverage {
    pub fn percentage(&self) -> f64 {
        if self.required == 0 {
            0.0
        } else {
            self.matched as f64 / self.required as f64 * 100.0
        }
    }
}

/// Required vs matched counts per category, in first-seen catalog order
pub fn category_breakdown(report: &SkillGapReport) -> Vec<CategoryCoverage> {
    let mut coverage: Vec<CategoryCoverage> = Vec::new();

    for skill in &report.required_skills {
        let matched = report.matched_skills.iter().any(|m| m.name == skill.name);
        let entry = match coverage.iter_mut().position(|c| c.category == skill.category) {
            Some(index) => &mut coverage[index],
            None => {
                coverage.push(CategoryCoverage {
                    category: skill.category,
                    required: 0,
                    matched: 0,
                });
                let last = coverage.len() - 1;
                &mut coverage[last]
            }
        };
        entry.required += 1;
        if matched {
            entry.matched += 1;
        }
    }

    coverage
}
