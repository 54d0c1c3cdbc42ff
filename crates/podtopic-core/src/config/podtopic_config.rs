//! Top-level podtopic configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::defaults::PROJECT_CONFIG_FILENAME;
use super::{ClusteringConfig, ObservabilityConfig, RecommendationConfig};
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`PODTOPIC_*`)
/// 3. Project config (`podtopic.toml` in the project root, or an explicit file)
/// 4. Compiled defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct PodtopicConfig {
    pub clustering: ClusteringConfig,
    pub recommendation: RecommendationConfig,
    pub observability: ObservabilityConfig,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub num_clusters: Option<usize>,
    pub cluster_seed: Option<u64>,
    pub top_n: Option<usize>,
    pub log_level: Option<String>,
}

impl PodtopicConfig {
    /// Load configuration from `podtopic.toml` in `root` (if present),
    /// then environment, then CLI overrides.
    pub fn load(root: &Path, cli_overrides: Option<&CliOverrides>) -> Result<Self, ConfigError> {
        let project_config_path = root.join(PROJECT_CONFIG_FILENAME);
        let base = if project_config_path.exists() {
            Self::from_file(&project_config_path)?
        } else {
            Self::default()
        };
        Self::resolve(base, cli_overrides)
    }

    /// Load configuration from an explicit file, then environment, then CLI overrides.
    /// A missing explicit file is an error.
    pub fn load_file(path: &Path, cli_overrides: Option<&CliOverrides>) -> Result<Self, ConfigError> {
        let base = Self::from_file(path)?;
        Self::resolve(base, cli_overrides)
    }

    fn resolve(mut config: Self, cli_overrides: Option<&CliOverrides>) -> Result<Self, ConfigError> {
        Self::apply_env_overrides(&mut config);
        if let Some(cli) = cli_overrides {
            Self::apply_cli_overrides(&mut config, cli);
        }
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.clustering.num_clusters == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "clustering.num_clusters".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if self.clustering.max_iterations == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "clustering.max_iterations".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if !(self.clustering.tolerance > 0.0) {
            return Err(ConfigError::ValidationFailed {
                field: "clustering.tolerance".to_string(),
                message: "must be a positive number".to_string(),
            });
        }
        if self.clustering.min_df == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "clustering.min_df".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        if self.recommendation.top_n == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "recommendation.top_n".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        Ok(())
    }

    /// Apply environment variable overrides.
    /// Pattern: `PODTOPIC_NUM_CLUSTERS`, `PODTOPIC_TOP_N`, etc.
    /// Unparseable values are ignored.
    fn apply_env_overrides(config: &mut PodtopicConfig) {
        if let Ok(val) = std::env::var("PODTOPIC_NUM_CLUSTERS") {
            if let Ok(v) = val.parse::<usize>() {
                config.clustering.num_clusters = v;
            }
        }
        if let Ok(val) = std::env::var("PODTOPIC_CLUSTER_SEED") {
            if let Ok(v) = val.parse::<u64>() {
                config.clustering.cluster_seed = v;
            }
        }
        if let Ok(val) = std::env::var("PODTOPIC_MAX_ITERATIONS") {
            if let Ok(v) = val.parse::<usize>() {
                config.clustering.max_iterations = v;
            }
        }
        if let Ok(val) = std::env::var("PODTOPIC_TOP_N") {
            if let Ok(v) = val.parse::<usize>() {
                config.recommendation.top_n = v;
            }
        }
        if let Ok(val) = std::env::var("PODTOPIC_LOG_LEVEL") {
            config.observability.log_level = val;
        }
    }

    /// Apply CLI overrides (highest priority).
    fn apply_cli_overrides(config: &mut PodtopicConfig, cli: &CliOverrides) {
        if let Some(v) = cli.num_clusters {
            config.clustering.num_clusters = v;
        }
        if let Some(v) = cli.cluster_seed {
            config.clustering.cluster_seed = v;
        }
        if let Some(v) = cli.top_n {
            config.recommendation.top_n = v;
        }
        if let Some(ref v) = cli.log_level {
            config.observability.log_level = v.clone();
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}
