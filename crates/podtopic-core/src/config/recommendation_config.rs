use serde::{Deserialize, Serialize};

use super::defaults;

/// Recommendation scorer configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecommendationConfig {
    /// Maximum number of matched clusters listed per response.
    pub top_n: usize,
}

impl Default for RecommendationConfig {
    fn default() -> Self {
        Self {
            top_n: defaults::DEFAULT_TOP_N,
        }
    }
}
