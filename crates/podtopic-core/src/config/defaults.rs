// Single source of truth for all default values.

// --- Clustering ---
pub const DEFAULT_NUM_CLUSTERS: usize = 5;
pub const DEFAULT_CLUSTER_SEED: u64 = 42;
pub const DEFAULT_MAX_ITERATIONS: usize = 300;
pub const DEFAULT_TOLERANCE: f64 = 1e-4;
pub const DEFAULT_MIN_DF: usize = 1;

// --- Recommendation ---
pub const DEFAULT_TOP_N: usize = 3;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = false;

// --- Files ---
pub const PROJECT_CONFIG_FILENAME: &str = "podtopic.toml";
