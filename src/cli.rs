//! CLI interface for skill lens

use crate::config::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "skill-lens")]
#[command(about = "Resume skill extraction and role gap analysis tool")]
#[command(long_about = "Detect skills in a resume, compare them with the skills a target role requires, and get prioritized recommendations for the gaps")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze a resume against a target role
    Analyze {
        /// Path to resume file (PDF, DOCX, TXT, MD)
        #[arg(short, long)]
        resume: PathBuf,

        /// Target role id (see `roles list`)
        #[arg(long)]
        role: String,

        /// Output format: console, json, markdown
        #[arg(short, long)]
        output: Option<String>,

        /// Include detected skills and category coverage
        #[arg(short, long)]
        detailed: bool,

        /// Save output to file
        #[arg(short, long)]
        save: Option<PathBuf>,
    },

    /// List skills detected in a resume
    Extract {
        /// Path to resume file (PDF, DOCX, TXT, MD)
        #[arg(short, long)]
        resume: PathBuf,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Match a list of skills against required skills
    Match {
        /// Comma-separated user skills
        #[arg(short, long, value_delimiter = ',')]
        user: Vec<String>,

        /// Comma-separated required skills
        #[arg(long, value_delimiter = ',', conflicts_with = "role")]
        required: Vec<String>,

        /// Take required skills from a catalog role instead
        #[arg(long)]
        role: Option<String>,
    },

    /// Print the canonical form of skill names
    Normalize {
        /// Skill names
        #[arg(required = true)]
        skills: Vec<String>,
    },

    /// Role catalog commands
    Roles {
        #[command(subcommand)]
        action: RoleAction,
    },

    /// Show configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum RoleAction {
    /// List available roles
    List,

    /// Show the required skills of a role
    Show {
        /// Role id
        role: String,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Reset configuration to defaults
    Reset,

    /// Print the configuration file path
    Path,
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> Result<OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" => Ok(OutputFormat::Console),
        "json" => Ok(OutputFormat::Json),
        "markdown" | "md" => Ok(OutputFormat::Markdown),
        _ => Err(format!(
            "Invalid output format: {}. Supported: console, json, markdown",
            format
        )),
    }
}

/// Validate file extension
pub fn validate_file_extension(path: &Path, allowed_extensions: &[&str]) -> Result<(), String> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => {
            if allowed_extensions.contains(&ext.to_lowercase().as_str()) {
                Ok(())
            } else {
                Err(format!(
                    "Unsupported file extension: .{}. Allowed: {}",
                    ext,
                    allowed_extensions.join(", ")
                ))
            }
        }
        None => Err("File has no extension".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_output_format() {
        assert_eq!(parse_output_format("JSON"), Ok(OutputFormat::Json));
        assert_eq!(parse_output_format("md"), Ok(OutputFormat::Markdown));
        assert!(parse_output_format("pdf").is_err());
    }

    #[test]
    fn test_validate_file_extension() {
        let allowed = ["pdf", "txt", "md"];
        assert!(validate_file_extension(Path::new("cv.PDF"), &allowed).is_ok());
        assert!(validate_file_extension(Path::new("cv.docx"), &allowed).is_err());
        assert!(validate_file_extension(Path::new("cv"), &allowed).is_err());
    }

    #[test]
    fn test_match_command_splits_lists() {
        let cli = Cli::try_parse_from([
            "skill-lens", "match", "--user", "js,Python", "--required", "JavaScript,SQL",
        ])
        .unwrap();
        match cli.command {
            Commands::Match { user, required, role } => {
                assert_eq!(user, vec!["js", "Python"]);
                assert_eq!(required, vec!["JavaScript", "SQL"]);
                assert!(role.is_none());
            }
            _ => panic!("expected match command"),
        }
    }

    #[test]
    fn test_required_conflicts_with_role() {
        let result = Cli::try_parse_from([
            "skill-lens", "match", "--user", "js", "--required", "SQL", "--role", "data-analyst",
        ]);
        assert!(result.is_err());
    }
}
