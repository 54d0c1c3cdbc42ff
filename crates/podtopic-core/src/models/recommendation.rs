use std::fmt;

use serde::{Deserialize, Serialize};

pub const MATCH_INTRO: &str =
    "We analyzed our podcast database using NLP and clustered it by topic.";
pub const FALLBACK_INTRO: &str = "We couldn\u{2019}t find a strong match based on your input.";
pub const FALLBACK_LIBRARY: &str = "Here\u{2019}s how our podcast library is clustered:";

/// One recommended title, annotated with its cluster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationEntry {
    pub cluster_id: usize,
    pub title: String,
    pub description: String,
}

/// One cluster line of the fallback summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClusterSummary {
    pub cluster_id: usize,
    pub description: String,
}

/// Per-query result. Ephemeral, never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Recommendation {
    /// At least one cluster matched the query.
    Matched {
        query: String,
        /// Matched cluster ids in ranking order.
        cluster_ids: Vec<usize>,
        entries: Vec<RecommendationEntry>,
    },
    /// Nothing matched; every cluster is summarized without titles.
    Fallback { clusters: Vec<ClusterSummary> },
}

impl Recommendation {
    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback { .. })
    }

    /// Render as plain multi-line text suitable for direct display.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Matched { query, entries, .. } => {
                writeln!(f, "{MATCH_INTRO}")?;
                write!(f, "Based on your interest in \"{query}\", you\u{2019}ll likely enjoy:")?;
                for entry in entries {
                    write!(
                        f,
                        "\n- {} (Cluster {}: {})",
                        entry.title,
                        entry.cluster_id + 1,
                        entry.description
                    )?;
                }
                Ok(())
            }
            Self::Fallback { clusters } => {
                write!(f, "{FALLBACK_INTRO}\n{FALLBACK_LIBRARY}")?;
                for summary in clusters {
                    write!(
                        f,
                        "\nCluster {}: {}",
                        summary.cluster_id + 1,
                        summary.description
                    )?;
                }
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_matched_lines() {
        let rec = Recommendation::Matched {
            query: "Cook pasta".to_string(),
            cluster_ids: vec![1],
            entries: vec![RecommendationEntry {
                cluster_id: 1,
                title: "Pasta Night".to_string(),
                description: "cook, pasta".to_string(),
            }],
        };
        let text = rec.render();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], MATCH_INTRO);
        assert_eq!(
            lines[1],
            "Based on your interest in \"Cook pasta\", you\u{2019}ll likely enjoy:"
        );
        assert_eq!(lines[2], "- Pasta Night (Cluster 2: cook, pasta)");
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn renders_fallback_without_titles() {
        let rec = Recommendation::Fallback {
            clusters: vec![
                ClusterSummary {
                    cluster_id: 0,
                    description: "money, invest".to_string(),
                },
                ClusterSummary {
                    cluster_id: 1,
                    description: "cook, recipe".to_string(),
                },
            ],
        };
        assert!(rec.is_fallback());
        assert_eq!(
            rec.render(),
            format!("{FALLBACK_INTRO}\n{FALLBACK_LIBRARY}\nCluster 1: money, invest\nCluster 2: cook, recipe")
        );
    }

    #[test]
    fn user_facing_text_uses_typographic_apostrophes() {
        assert_eq!(FALLBACK_INTRO, "We couldn’t find a strong match based on your input.");
        assert_eq!(FALLBACK_LIBRARY, "Here’s how our podcast library is clustered:");
        assert!(!FALLBACK_INTRO.contains('\''));
        assert!(!FALLBACK_LIBRARY.contains('\''));
    }
}
