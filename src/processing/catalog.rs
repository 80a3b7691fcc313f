//! Read-only role catalog: required skills per job role

use crate::error::{Result, SkillLensError};
use crate::processing::dictionary::SkillCategory;
use crate::processing::extractor::SkillLevel;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use strsim::jaro_winkler;

use SkillCategory::*;
use SkillLevel::*;

type RoleSeed = (&'static str, &'static str, &'static [(&'static str, SkillLevel, SkillCategory)]);

const BUILTIN_ROLES: &[RoleSeed] = &[
    ("frontend-developer", "Frontend Developer", &[
        ("JavaScript", Advanced, Programming),
        ("HTML", Advanced, Frontend),
        ("CSS", Advanced, Frontend),
        ("React", Advanced, Frontend),
        ("TypeScript", Intermediate, Programming),
        ("Git", Intermediate, Tools),
        ("REST API", Intermediate, Tools),
        ("Tailwind", Intermediate, Frontend),
        ("Redux", Intermediate, Frontend),
        ("Jest", Beginner, Tools),
    ]),
    ("backend-developer", "Backend Developer", &[
        ("Node.js", Advanced, Backend),
        ("JavaScript", Advanced, Programming),
        ("Python", Intermediate, Programming),
        ("SQL", Advanced, Database),
        ("MongoDB", Intermediate, Database),
        ("REST API", Advanced, Tools),
        ("Git", Intermediate, Tools),
        ("Docker", Intermediate, CloudDevops),
        ("Express", Advanced, Backend),
        ("PostgreSQL", Intermediate, Database),
    ]),
    ("fullstack-developer", "Full Stack Developer", &[
        ("JavaScript", Advanced, Programming),
        ("React", Advanced, Frontend),
        ("Node.js", Advanced, Backend),
        ("HTML", Advanced, Frontend),
        ("CSS", Advanced, Frontend),
        ("MongoDB", Intermediate, Database),
        ("SQL", Intermediate, Database),
        ("Git", Intermediate, Tools),
        ("Docker", Beginner, CloudDevops),
        ("REST API", Advanced, Tools),
        ("TypeScript", Intermediate, Programming),
    ]),
    ("data-scientist", "Data Scientist", &[
        ("Python", Advanced, Programming),
        ("Machine Learning", Advanced, DataMl),
        ("Pandas", Advanced, DataMl),
        ("NumPy", Advanced, DataMl),
        ("Scikit-learn", Advanced, DataMl),
        ("TensorFlow", Intermediate, DataMl),
        ("SQL", Intermediate, Database),
        ("Matplotlib", Intermediate, DataMl),
        ("Statistics", Advanced, DataMl),
        ("Deep Learning", Intermediate, DataMl),
    ]),
    ("data-analyst", "Data Analyst", &[
        ("SQL", Advanced, Database),
        ("Excel", Advanced, Tools),
        ("Python", Intermediate, Programming),
        ("Pandas", Intermediate, DataMl),
        ("Data Visualization", Advanced, DataMl),
        ("Tableau", Intermediate, Tools),
        ("Statistics", Intermediate, DataMl),
        ("Power BI", Intermediate, Tools),
    ]),
    ("devops-engineer", "DevOps Engineer", &[
        ("Docker", Advanced, CloudDevops),
        ("Kubernetes", Advanced, CloudDevops),
        ("AWS", Advanced, CloudDevops),
        ("Linux", Advanced, CloudDevops),
        ("Bash", Advanced, CloudDevops),
        ("CI/CD", Advanced, CloudDevops),
        ("Terraform", Intermediate, CloudDevops),
        ("Git", Advanced, Tools),
        ("Python", Intermediate, Programming),
        ("Jenkins", Intermediate, CloudDevops),
    ]),
    ("ml-engineer", "Machine Learning Engineer", &[
        ("Python", Advanced, Programming),
        ("Machine Learning", Advanced, DataMl),
        ("TensorFlow", Advanced, DataMl),
        ("PyTorch", Advanced, DataMl),
        ("Deep Learning", Advanced, DataMl),
        ("Docker", Intermediate, CloudDevops),
        ("AWS", Intermediate, CloudDevops),
        ("Scikit-learn", Advanced, DataMl),
        ("MLOps", Intermediate, DataMl),
        ("SQL", Intermediate, Database),
    ]),
    ("cloud-architect", "Cloud Architect", &[
        ("AWS", Advanced, CloudDevops),
        ("Azure", Advanced, CloudDevops),
        ("GCP", Intermediate, CloudDevops),
        ("Terraform", Advanced, CloudDevops),
        ("Kubernetes", Advanced, CloudDevops),
        ("Docker", Advanced, CloudDevops),
        ("Networking", Advanced, CloudDevops),
        ("Security", Advanced, CloudDevops),
        ("Microservices", Advanced, Tools),
    ]),
    ("product-manager", "Product Manager", &[
        ("Product Strategy", Advanced, Tools),
        ("Agile", Advanced, Tools),
        ("Scrum", Advanced, Tools),
        ("Data Analysis", Intermediate, DataMl),
        ("User Research", Advanced, Tools),
        ("Jira", Intermediate, Tools),
        ("SQL", Beginner, Database),
        ("A/B Testing", Intermediate, Tools),
    ]),
    ("ui-ux-designer", "UI/UX Designer", &[
        ("Figma", Advanced, Tools),
        ("UI Design", Advanced, Frontend),
        ("UX Research", Advanced, Tools),
        ("Prototyping", Advanced, Tools),
        ("Adobe XD", Intermediate, Tools),
        ("CSS", Intermediate, Frontend),
        ("HTML", Intermediate, Frontend),
        ("Design Systems", Intermediate, Tools),
        ("User Testing", Intermediate, Tools),
    ]),
];

/// Minimum Jaro-Winkler similarity for a "did you mean" suggestion
const SUGGESTION_THRESHOLD: f64 = 0.8;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequiredSkill {
    pub name: String,
    #[serde(default)]
    pub level: SkillLevel,
    pub category: SkillCategory,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobRole {
    pub id: String,
    pub label: String,
    pub skills: Vec<RequiredSkill>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoleSummary {
    pub id: String,
    pub label: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoleCatalog {
    roles: Vec<JobRole>,
}

impl Default for RoleCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl RoleCatalog {
    /// Catalog with the built-in seed roles
    pub fn builtin() -> Self {
        let roles = BUILTIN_ROLES
            .iter()
            .map(|(id, label, skills)| JobRole {
                id: id.to_string(),
                label: label.to_string(),
                skills: skills
                    .iter()
                    .map(|(name, level, category)| RequiredSkill {
                        name: name.to_string(),
                        level: *level,
                        category: *category,
                    })
                    .collect(),
            })
            .collect();

        Self { roles }
    }

    pub fn from_roles(roles: Vec<JobRole>) -> Result<Self> {
        let mut ids = HashSet::new();
        for role in &roles {
            if role.id.trim().is_empty() {
                return Err(SkillLensError::Catalog("Role id must not be empty".to_string()));
            }
            if !ids.insert(role.id.as_str()) {
                return Err(SkillLensError::Catalog(format!("Duplicate role id: {}", role.id)));
            }
        }
        Ok(Self { roles })
    }

    /// Parse a catalog from TOML with one `[[roles]]` table per role
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let parsed: RoleCatalog = toml::from_str(content)
            .map_err(|e| SkillLensError::Catalog(format!("Failed to parse role catalog: {}", e)))?;
        Self::from_roles(parsed.roles)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Required skills for a role; unknown ids yield an empty slice
    pub fn required_skills_for(&self, role_id: &str) -> &[RequiredSkill] {
        self.get(role_id).map(|r| r.skills.as_slice()).unwrap_or(&[])
    }

    pub fn all_roles(&self) -> Vec<RoleSummary> {
        self.roles
            .iter()
            .map(|r| RoleSummary {
                id: r.id.clone(),
                label: r.label.clone(),
            })
            .collect()
    }

    pub fn role_label(&self, role_id: &str) -> Option<&str> {
        self.get(role_id).map(|r| r.label.as_str())
    }

    pub fn get(&self, role_id: &str) -> Option<&JobRole> {
        self.roles.iter().find(|r| r.id == role_id)
    }

    /// Closest known role id for a mistyped one
    pub fn suggest_role(&self, role_id: &str) -> Option<&str> {
        let needle = role_id.trim().to_lowercase();
        self.roles
            .iter()
            .map(|r| (r.id.as_str(), jaro_winkler(&needle, &r.id)))
            .filter(|(_, similarity)| *similarity >= SUGGESTION_THRESHOLD)
            .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
            .map(|(id, _)| id)
    }

    pub fn len(&self) -> usize {
        self.roles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_roles_in_order() {
        let catalog = RoleCatalog::builtin();
        let ids: Vec<String> = catalog.all_roles().into_iter().map(|r| r.id).collect();
        assert_eq!(ids.len(), 10);
        assert_eq!(ids[0], "frontend-developer");
        assert_eq!(ids[9], "ui-ux-designer");
    }

    #[test]
    fn test_required_skills_for_known_role() {
        let catalog = RoleCatalog::builtin();
        let skills = catalog.required_skills_for("devops-engineer");
        assert_eq!(skills.len(), 10);
        assert_eq!(skills[5].name, "CI/CD");
        assert_eq!(skills[5].level, SkillLevel::Advanced);
        assert_eq!(skills[5].category, SkillCategory::CloudDevops);
        assert_eq!(catalog.role_label("ml-engineer"), Some("Machine Learning Engineer"));
    }

    #[test]
    fn test_unknown_role_is_empty_not_error() {
        let catalog = RoleCatalog::builtin();
        assert!(catalog.required_skills_for("astronaut").is_empty());
        assert!(catalog.role_label("astronaut").is_none());
    }

    #[test]
    fn test_suggest_role_for_typo() {
        let catalog = RoleCatalog::builtin();
        assert_eq!(catalog.suggest_role("data-scientst"), Some("data-scientist"));
        assert_eq!(catalog.suggest_role("zzzz"), None);
    }

    #[test]
    fn test_custom_catalog_from_toml() {
        let content = r#"
[[roles]]
id = "rust-developer"
label = "Rust Developer"

[[roles.skills]]
name = "Rust"
level = "advanced"
category = "programming"

[[roles.skills]]
name = "Docker"
category = "cloud_devops"
"#;
        let catalog = RoleCatalog::from_toml_str(content).unwrap();
        assert_eq!(catalog.len(), 1);
        let skills = catalog.required_skills_for("rust-developer");
        assert_eq!(skills[0].level, SkillLevel::Advanced);
        assert_eq!(skills[1].level, SkillLevel::Intermediate);
        assert_eq!(skills[1].category, SkillCategory::CloudDevops);
    }

    #[test]
    fn test_duplicate_role_ids_rejected() {
        let role = JobRole {
            id: "x".to_string(),
            label: "X".to_string(),
            skills: Vec::new(),
        };
        let result = RoleCatalog::from_roles(vec![role.clone(), role]);
        assert!(matches!(result, Err(SkillLensError::Catalog(_))));
    }

    #[test]
    fn test_invalid_category_rejected() {
        let content = r#"
[[roles]]
id = "r"
label = "R"

[[roles.skills]]
name = "Rust"
category = "systems"
"#;
        assert!(RoleCatalog::from_toml_str(content).is_err());
    }
}
