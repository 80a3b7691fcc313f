//! Static skill dictionary: canonical skill names grouped by category

use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Skill category tags. The serialized form is surfaced to callers verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillCategory {
    Programming,
    Frontend,
    Backend,
    Database,
    CloudDevops,
    DataMl,
    Tools,
}

impl SkillCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            SkillCategory::Programming => "programming",
            SkillCategory::Frontend => "frontend",
            SkillCategory::Backend => "backend",
            SkillCategory::Database => "database",
            SkillCategory::CloudDevops => "cloud_devops",
            SkillCategory::DataMl => "data_ml",
            SkillCategory::Tools => "tools",
        }
    }
}

impl fmt::Display for SkillCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Seed table for the built-in dictionary, in detection order.
const SKILL_TABLE: &[(SkillCategory, &[&str])] = &[
    (
        SkillCategory::Programming,
        &[
            "Python", "JavaScript", "TypeScript", "Java", "C++", "C#", "Go", "Rust",
            "Ruby", "PHP", "Swift", "Kotlin", "Scala", "R", "MATLAB", "Perl",
        ],
    ),
    (
        SkillCategory::Frontend,
        &[
            "React", "React.js", "Vue", "Vue.js", "Angular", "Svelte", "Next.js",
            "HTML", "HTML5", "CSS", "CSS3", "Sass", "SCSS", "Less", "Tailwind",
            "Bootstrap", "Material UI", "Redux", "Zustand", "jQuery",
        ],
    ),
    (
        SkillCategory::Backend,
        &[
            "Node.js", "Express", "Express.js", "Django", "Flask", "FastAPI",
            "Spring", "Spring Boot", ".NET", "ASP.NET", "Rails", "Laravel",
            "NestJS", "Koa", "Hapi",
        ],
    ),
    (
        SkillCategory::Database,
        &[
            "MongoDB", "PostgreSQL", "MySQL", "SQLite", "Redis", "Elasticsearch",
            "Cassandra", "DynamoDB", "Firebase", "Supabase", "Oracle", "SQL Server",
            "Neo4j", "GraphQL", "Prisma",
        ],
    ),
    (
        SkillCategory::CloudDevops,
        &[
            "AWS", "Azure", "GCP", "Google Cloud", "Docker", "Kubernetes", "K8s",
            "Terraform", "Ansible", "Jenkins", "GitHub Actions", "GitLab CI",
            "CircleCI", "Travis CI", "Nginx", "Apache", "Linux", "Bash",
        ],
    ),
    (
        SkillCategory::DataMl,
        &[
            "Machine Learning", "Deep Learning", "TensorFlow", "PyTorch", "Keras",
            "Scikit-learn", "Pandas", "NumPy", "Matplotlib", "Seaborn", "Jupyter",
            "NLP", "Computer Vision", "Neural Networks", "AI", "Data Science",
        ],
    ),
    (
        SkillCategory::Tools,
        &[
            "Git", "GitHub", "GitLab", "Bitbucket", "Jira", "Confluence", "Trello",
            "Agile", "Scrum", "CI/CD", "REST API", "GraphQL", "Microservices",
            "Unit Testing", "Jest", "Pytest", "Mocha", "Cypress",
        ],
    ),
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillDefinition {
    pub name: String,
    pub category: SkillCategory,
}

impl SkillDefinition {
    pub fn new(name: impl Into<String>, category: SkillCategory) -> Self {
        Self {
            name: name.into(),
            category,
        }
    }
}

/// Canonical skill names keyed by their lowercase form.
///
/// Iteration order is insertion order. When two entries fold to the same key,
/// the later definition replaces the earlier one but keeps its position.
#[derive(Debug, Clone)]
pub struct SkillDictionary {
    entries: Vec<SkillDefinition>,
    index: HashMap<String, usize>,
}

impl Default for SkillDictionary {
    fn default() -> Self {
        Self::new()
    }
}

impl SkillDictionary {
    /// Build the dictionary from the built-in seed table
    pub fn new() -> Self {
        let mut dictionary = Self {
            entries: Vec::new(),
            index: HashMap::new(),
        };

        for (category, names) in SKILL_TABLE {
            for name in names.iter() {
                dictionary.insert(SkillDefinition::new(*name, *category));
            }
        }

        dictionary
    }

    /// Built-in dictionary extended with caller-supplied definitions
    pub fn with_custom_skills(additional: Vec<SkillDefinition>) -> Self {
        let mut dictionary = Self::new();
        for definition in additional {
            dictionary.insert(definition);
        }
        dictionary
    }

    fn insert(&mut self, definition: SkillDefinition) {
        let key = definition.name.to_lowercase();
        match self.index.get(&key) {
            Some(&position) => {
                debug!(
                    "Skill '{}' redefined: {} -> {}",
                    definition.name, self.entries[position].category, definition.category
                );
                self.entries[position] = definition;
            }
            None => {
                self.index.insert(key, self.entries.len());
                self.entries.push(definition);
            }
        }
    }

    /// All definitions in detection order
    pub fn lookup_all(&self) -> &[SkillDefinition] {
        &self.entries
    }

    /// Case-insensitive lookup by canonical name
    pub fn get(&self, name: &str) -> Option<&SkillDefinition> {
        self.index
            .get(&name.trim().to_lowercase())
            .map(|&position| &self.entries[position])
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
