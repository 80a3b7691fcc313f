//! Skill name normalization through a synonym table

use crate::error::{Result, SkillLensError};
use std::collections::HashMap;

/// Canonical skill (lowercase) and its alternate spellings
const SYNONYM_TABLE: &[(&str, &[&str])] = &[
    ("javascript", &["js", "ecmascript", "es6", "es2015"]),
    ("typescript", &["ts"]),
    ("react", &["react.js", "reactjs"]),
    ("vue", &["vue.js", "vuejs"]),
    ("angular", &["angularjs", "angular.js"]),
    ("node.js", &["nodejs", "node"]),
    ("mongodb", &["mongo"]),
    ("postgresql", &["postgres", "psql"]),
    ("kubernetes", &["k8s"]),
    ("amazon web services", &["aws"]),
    ("google cloud platform", &["gcp", "google cloud"]),
    ("machine learning", &["ml"]),
    ("deep learning", &["dl"]),
    ("natural language processing", &["nlp"]),
    ("continuous integration", &["ci"]),
    ("continuous deployment", &["cd"]),
    ("ci/cd", &["cicd", "ci cd"]),
];

/// Many-to-one synonym table with its derived reverse map.
#[derive(Debug, Clone)]
pub struct SynonymTable {
    groups: Vec<(String, Vec<String>)>,
    reverse: HashMap<String, String>,
}

impl SynonymTable {
    /// Build the built-in synonym table
    pub fn new() -> Result<Self> {
        Self::from_groups(SYNONYM_TABLE.iter().map(|(canonical, alternates)| {
            (
                canonical.to_string(),
                alternates.iter().map(|a| a.to_string()).collect(),
            )
        }))
    }

    /// Build a table from `(canonical, alternates)` groups.
    ///
    /// Fails if an alternate spelling is claimed by two different canonical skills.
    pub fn from_groups<I>(groups: I) -> Result<Self>
    where
        I: IntoIterator<Item = (String, Vec<String>)>,
    {
        let mut table = Self {
            groups: Vec::new(),
            reverse: HashMap::new(),
        };

        for (canonical, alternates) in groups {
            let canonical = canonical.trim().to_lowercase();
            let mut kept = Vec::new();

            for alternate in alternates {
                let alternate = alternate.trim().to_lowercase();
                match table.reverse.get(&alternate) {
                    Some(existing) if *existing != canonical => {
                        return Err(SkillLensError::SynonymConflict {
                            alternate,
                            existing: existing.clone(),
                            incoming: canonical,
                        });
                    }
                    Some(_) => continue,
                    None => {
                        table.reverse.insert(alternate.clone(), canonical.clone());
                        kept.push(alternate);
                    }
                }
            }

            match table.groups.iter_mut().find(|(c, _)| *c == canonical) {
                Some((_, existing)) => existing.extend(kept),
                None => table.groups.push((canonical, kept)),
            }
        }

        Ok(table)
    }

    /// Lowercase, trim, then map an alternate spelling to its canonical form
    pub fn normalize(&self, skill: &str) -> String {
        let normalized = skill.trim().to_lowercase();
        match self.reverse.get(&normalized) {
            Some(canonical) => canonical.clone(),
            None => normalized,
        }
    }

    /// Alternate spellings registered for a canonical skill
    pub fn alternates(&self, canonical: &str) -> &[String] {
        let canonical = canonical.trim().to_lowercase();
        self.groups
            .iter()
            .find(|(c, _)| *c == canonical)
            .map(|(_, alts)| alts.as_slice())
            .unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.reverse.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reverse.is_empty()
    }
}
