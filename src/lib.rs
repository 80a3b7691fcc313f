//! Skill lens library: resume skill extraction and role gap analysis

pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod processing;
pub mod output;

pub use error::{Result, SkillLensError};
pub use config::Config;
