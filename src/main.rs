//! Skill lens: resume skill extraction and role gap analysis tool

use clap::Parser;
use log::{error, info};
use skill_lens::cli::{self, Cli, Commands, ConfigAction, RoleAction};
use skill_lens::config::Config;
use skill_lens::error::{Result, SkillLensError};
use skill_lens::input::InputManager;
use skill_lens::output::formatter::{save_report_to_file, ReportGenerator};
use skill_lens::processing::{SkillAnalyzer, SkillMatcher};
use std::path::PathBuf;
use std::process;

const RESUME_EXTENSIONS: &[&str] = &["pdf", "docx", "txt", "md", "markdown"];

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config_path = cli.config.clone().unwrap_or_else(Config::config_path);
    let config = match Config::load_from(&config_path) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run_command(cli.command, config, config_path).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

async fn run_command(command: Commands, config: Config, config_path: PathBuf) -> Result<()> {
    match command {
        Commands::Analyze {
            resume,
            role,
            output,
            detailed,
            save,
        } => {
            info!("Starting skill gap analysis for role '{}'", role);

            cli::validate_file_extension(&resume, RESUME_EXTENSIONS)
                .map_err(|e| SkillLensError::InvalidInput(format!("Resume file: {}", e)))?;

            let output_format = match output {
                Some(format) => cli::parse_output_format(&format).map_err(SkillLensError::InvalidInput)?,
                None => config.output.format,
            };

            let analyzer = SkillAnalyzer::new(&config)?;

            let mut input_manager = InputManager::from_config(&config.input);
            let text = input_manager.extract_text(&resume).await?;
            info!("Extracted {} characters from resume", text.chars().count());

            let report = analyzer.analyze(&text, &role)?;

            let generator = ReportGenerator::with_options(
                config.output.color_output && save.is_none(),
                detailed || config.output.detailed,
                true,
                true,
            );
            let rendered = generator.generate_report(&report, &output_format)?;

            match save {
                Some(path) => {
                    save_report_to_file(&rendered, &path)?;
                    println!("Report saved to {}", path.display());
                }
                None => println!("{}", rendered),
            }
        }

        Commands::Extract { resume, json } => {
            cli::validate_file_extension(&resume, RESUME_EXTENSIONS)
                .map_err(|e| SkillLensError::InvalidInput(format!("Resume file: {}", e)))?;

            let analyzer = SkillAnalyzer::new(&config)?;
            let mut input_manager = InputManager::from_config(&config.input);
            let text = input_manager.extract_text(&resume).await?;
            let skills = analyzer.extractor().extract(&text);

            if json {
                println!("{}", serde_json::to_string_pretty(&skills)?);
            } else if skills.is_empty() {
                println!("No known skills detected in {}", resume.display());
            } else {
                println!("Detected {} skills in {}\n", skills.len(), resume.display());
                for skill in &skills {
                    println!(
                        "  • {:<20} {:<13} {:<13} {:.2}",
                        skill.name, skill.category, skill.level, skill.confidence
                    );
                }
            }
        }

        Commands::Match { user, required, role } => {
            let required = match role {
                Some(role_id) => {
                    let analyzer = SkillAnalyzer::new(&config)?;
                    let catalog = analyzer.catalog();
                    if catalog.get(&role_id).is_none() {
                        return Err(SkillLensError::RoleNotFound {
                            suggestion: catalog.suggest_role(&role_id).map(str::to_string),
                            role: role_id,
                        });
                    }
                    catalog
                        .required_skills_for(&role_id)
                        .iter()
                        .map(|s| s.name.clone())
                        .collect()
                }
                None => required,
            };

            let matcher = SkillMatcher::new()?;
            let result = matcher.match_skills(&user, &required);
            println!("{}", serde_json::to_string_pretty(&result)?);
        }

        Commands::Normalize { skills } => {
            let matcher = SkillMatcher::new()?;
            for skill in &skills {
                println!("{} -> {}", skill, matcher.normalize(skill));
            }
        }

        Commands::Roles { action } => {
            let analyzer = SkillAnalyzer::new(&config)?;
            let catalog = analyzer.catalog();

            match action {
                RoleAction::List => {
                    println!("Available roles\n");
                    for role in catalog.all_roles() {
                        println!("  • {:<22} {}", role.id, role.label);
                    }
                }

                RoleAction::Show { role } => {
                    let job_role = catalog.get(&role).ok_or_else(|| SkillLensError::RoleNotFound {
                        suggestion: catalog.suggest_role(&role).map(str::to_string),
                        role: role.clone(),
                    })?;

                    println!("{} ({})\n", job_role.label, job_role.id);
                    for skill in &job_role.skills {
                        println!("  • {:<20} {:<13} {}", skill.name, skill.level, skill.category);
                    }
                }
            }
        }

        Commands::Config { action } => match action {
            Some(ConfigAction::Show) | None => {
                println!("Configuration ({})\n", config_path.display());
                println!("Input:");
                println!("  Minimum text length: {}", config.input.min_text_length);
                println!("  Maximum file size: {} bytes", config.input.max_file_size_bytes);
                println!("  Cache: {}", config.input.enable_cache);
                println!("Analysis:");
                println!("  Preview characters: {}", config.analysis.preview_chars);
                println!("  Recommendations: {}", config.analysis.include_recommendations);
                println!("Catalog:");
                match &config.catalog.roles_file {
                    Some(path) => println!("  Roles file: {}", path.display()),
                    None => println!("  Roles file: built-in"),
                }
                println!("Output:");
                println!("  Format: {:?}", config.output.format);
                println!("  Detailed: {}", config.output.detailed);
                println!("  Colors: {}", config.output.color_output);
            }

            Some(ConfigAction::Reset) => {
                Config::reset(&config_path)?;
                println!("Configuration reset: {}", config_path.display());
            }

            Some(ConfigAction::Path) => {
                println!("{}", config_path.display());
            }
        },
    }

    Ok(())
}
