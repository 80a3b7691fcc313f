//! Prioritized learning recommendations from a gap list

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub skill: String,
    pub priority: Priority,
    pub reason: String,
}

/// Split the gap list into thirds: the first third is high priority, the
/// second medium, the rest low. Gaps keep their catalog order.
pub fn generate_recommendations<S: AsRef<str>>(gaps: &[S]) -> Vec<Recommendation> {
    let n = gaps.len();

    gaps.iter()
        .enumerate()
        .map(|(i, skill)| {
            let skill = skill.as_ref();
            let (priority, reason) = if i < n / 3 {
                (Priority::High, format!("{} is a core requirement for this role", skill))
            } else if i < 2 * n / 3 {
                (Priority::Medium, format!("{} would strengthen your profile", skill))
            } else {
                (Priority::Low, format!("{} is a nice-to-have skill", skill))
            };

            Recommendation {
                skill: skill.to_string(),
                priority,
                reason,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn priorities(gaps: &[&str]) -> Vec<Priority> {
        generate_recommendations(gaps).into_iter().map(|r| r.priority).collect()
    }

    #[test]
    fn test_thirds_split() {
        use Priority::*;
        assert_eq!(
            priorities(&["a", "b", "c", "d", "e", "f"]),
            vec![High, High, Medium, Medium, Low, Low]
        );
        assert_eq!(
            priorities(&["a", "b", "c", "d"]),
            vec![High, Medium, Low, Low]
        );
    }

    #[test]
    fn test_small_gap_lists_have_no_high_priority() {
        assert_eq!(priorities(&["a"]), vec![Priority::Low]);
        assert_eq!(priorities(&["a", "b"]), vec![Priority::Medium, Priority::Low]);
        assert!(generate_recommendations::<&str>(&[]).is_empty());
    }

    #[test]
    fn test_reasons() {
        let recs = generate_recommendations(&["Docker", "AWS", "Linux"]);
        assert_eq!(recs[0].reason, "Docker is a core requirement for this role");
        assert_eq!(recs[1].reason, "AWS would strengthen your profile");
        assert_eq!(recs[2].reason, "Linux is a nice-to-have skill");
    }
}
