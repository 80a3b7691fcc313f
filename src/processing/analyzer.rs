//! Analysis engine combining skill extraction, role catalog lookup and matching

use crate::config::Config;
use crate::error::{Result, SkillLensError};
use crate::processing::catalog::{RequiredSkill, RoleCatalog};
use crate::processing::dictionary::SkillCategory;
use crate::processing::extractor::{ExtractedSkill, SkillExtractor, SkillLevel};
use crate::processing::matcher::SkillMatcher;
use crate::processing::recommendations::{generate_recommendations, Recommendation};
use chrono::{DateTime, Utc};
use log::info;
use serde::{Deserialize, Serialize};
use std::time::Instant;

/// Coordinates the extractor, matcher and role catalog
pub struct SkillAnalyzer {
    extractor: SkillExtractor,
    matcher: SkillMatcher,
    catalog: RoleCatalog,
    preview_chars: usize,
    include_recommendations: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillItem {
    pub name: String,
    pub level: SkillLevel,
    pub category: Option<SkillCategory>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillGapReport {
    pub role_id: String,
    pub role_label: String,

    /// Leading slice of the analysed text
    pub extracted_text: String,

    pub extracted_skills: Vec<ExtractedSkill>,
    pub required_skills: Vec<RequiredSkill>,
    pub matched_skills: Vec<SkillItem>,
    pub gap_skills: Vec<SkillItem>,

    /// 0-100, one decimal
    pub match_score: f64,
    pub total_required: usize,
    pub total_matched: usize,

    pub recommendations: Vec<Recommendation>,

    pub generated_at: DateTime<Utc>,
    pub processing_time_ms: u64,
}

impl SkillAnalyzer {
    /// Build from configuration, loading a custom role catalog if one is configured
    pub fn new(config: &Config) -> Result<Self> {
        let catalog = match &config.catalog.roles_file {
            Some(path) => {
                info!("Loading role catalog from {}", path.display());
                RoleCatalog::from_file(path)?
            }
            None => RoleCatalog::builtin(),
        };
        Self::with_catalog(config, catalog)
    }

    pub fn with_catalog(config: &Config, catalog: RoleCatalog) -> Result<Self> {
        Ok(Self {
            extractor: SkillExtractor::new()?,
            matcher: SkillMatcher::new()?,
            catalog,
            preview_chars: config.analysis.preview_chars,
            include_recommendations: config.analysis.include_recommendations,
        })
    }

    /// Analyse resume text against the required skills of a role
    pub fn analyze(&self, text: &str, role_id: &str) -> Result<SkillGapReport> {
        let start_time = Instant::now();

        let role = self.catalog.get(role_id).ok_or_else(|| SkillLensError::RoleNotFound {
            role: role_id.to_string(),
            suggestion: self.catalog.suggest_role(role_id).map(str::to_string),
        })?;

        let extracted_skills = self.extractor.extract(text);
        info!("Required skills for {}: {}", role_id, role.skills.len());

        let user_names: Vec<&str> = extracted_skills.iter().map(|s| s.name.as_str()).collect();
        let required_names: Vec<&str> = role.skills.iter().map(|s| s.name.as_str()).collect();
        let result = self.matcher.match_skills(&user_names, &required_names);

        let category_of = |name: &str| {
            role.skills
                .iter()
                .find(|s| s.name == name)
                .map(|s| s.category)
        };

        let matched_skills = result
            .matched
            .iter()
            .map(|name| SkillItem {
                name: name.clone(),
                level: SkillLevel::Intermediate,
                category: category_of(name.as_str()),
            })
            .collect();

        let gap_skills = result
            .gaps
            .iter()
            .map(|name| SkillItem {
                name: name.clone(),
                level: SkillLevel::Beginner,
                category: category_of(name.as_str()),
            })
            .collect();

        let recommendations = if self.include_recommendations {
            generate_recommendations(&result.gaps)
        } else {
            Vec::new()
        };

        Ok(SkillGapReport {
            role_id: role.id.clone(),
            role_label: role.label.clone(),
            extracted_text: truncate_chars(text, self.preview_chars),
            extracted_skills,
            required_skills: role.skills.clone(),
            matched_skills,
            gap_skills,
            match_score: result.score,
            total_required: result.total_required,
            total_matched: result.total_matched,
            recommendations,
            generated_at: Utc::now(),
            processing_time_ms: start_time.elapsed().as_millis() as u64,
        })
    }

    pub fn extractor(&self) -> &SkillExtractor {
        &self.extractor
    }

    pub fn matcher(&self) -> &SkillMatcher {
        &self.matcher
    }

    pub fn catalog(&self) -> &RoleCatalog {
        &self.catalog
    }
}

/// First `max_chars` characters of `text`, never splitting a code point
fn truncate_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((byte_index, _)) => text[..byte_index].to_string(),
        None => text.to_string(),
    }
}
