//! Skill extraction, normalization, and role matching

pub mod dictionary;
pub mod extractor;
pub mod normalizer;
pub mod matcher;
pub mod catalog;
pub mod recommendations;
pub mod analyzer;

pub use analyzer::{SkillAnalyzer, SkillGapReport};
pub use extractor::{ExtractedSkill, SkillExtractor, SkillLevel};
pub use matcher::{MatchResult, SkillMatcher};
pub use normalizer::SynonymTable;
