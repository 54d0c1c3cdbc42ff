/// podtopic version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Number of keywords kept per cluster.
pub const TOP_KEYWORDS_PER_CLUSTER: usize = 10;

/// Number of leading keywords used as a cluster's human-facing description.
pub const SHORT_DESCRIPTION_LENGTH: usize = 5;

/// Maximum titles listed per matched cluster in a recommendation.
pub const TITLES_PER_CLUSTER: usize = 5;

/// Number of corpus-wide terms kept for the word-frequency summary.
pub const CORPUS_TERMS_LIMIT: usize = 50;
