use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use podtopic_clustering::TopicEngine;
use podtopic_core::config::{CliOverrides, PodtopicConfig};
use podtopic_core::constants::VERSION;
use podtopic_core::models::ClusterState;
use podtopic_core::providers::JsonCorpusFile;
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "podtopic",
    version,
    about = "Cluster podcast transcripts by topic and recommend episodes for free-text interests"
)]
struct Cli {
    /// Corpus file: a JSON array of {title, transcript} rows, or JSON Lines (.jsonl)
    #[arg(long, env = "PODTOPIC_CORPUS")]
    corpus: PathBuf,

    /// Explicit config file (defaults to podtopic.toml in the working directory, if present)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of topic clusters
    #[arg(long)]
    clusters: Option<usize>,

    /// Clusters considered per recommendation
    #[arg(long)]
    top_n: Option<usize>,

    /// Seed for centroid initialization
    #[arg(long)]
    seed: Option<u64>,

    /// Log filter, e.g. `debug` or `podtopic_clustering=debug`
    #[arg(long)]
    log_level: Option<String>,

    /// Emit logs as JSON lines on stderr
    #[arg(long, default_value_t = false)]
    json_logs: bool,

    /// Print the cluster summary, silhouette and most frequent corpus terms
    #[arg(long, default_value_t = false)]
    summary: bool,

    /// Query to answer; repeatable. Without any, queries are read from stdin
    #[arg(long = "query", short = 'q')]
    queries: Vec<String>,
}

impl Cli {
    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            num_clusters: self.clusters,
            cluster_seed: self.seed,
            top_n: self.top_n,
            log_level: self.log_level.clone(),
        }
    }

    fn load_config(&self) -> Result<PodtopicConfig> {
        let overrides = self.overrides();
        let config = match &self.config {
            Some(path) => PodtopicConfig::load_file(path, Some(&overrides))
                .with_context(|| format!("failed to load config {}", path.display()))?,
            None => PodtopicConfig::load(Path::new("."), Some(&overrides))
                .context("failed to resolve configuration")?,
        };
        Ok(config)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.load_config()?;
    podtopic_core::tracing::init_tracing_with_filter(
        &config.observability.log_level,
        cli.json_logs || config.observability.json_logs,
    );

    let provider = JsonCorpusFile::new(&cli.corpus);
    let engine = TopicEngine::initialize(&provider, config)
        .with_context(|| format!("failed to cluster corpus {}", cli.corpus.display()))?;
    let state = engine.snapshot();
    info!(
        version = VERSION,
        clusters = state.num_clusters(),
        documents = state.metrics.document_count,
        "corpus clustered"
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if cli.summary {
        write!(out, "{}", render_summary(&state))?;
    }

    if !cli.queries.is_empty() {
        for (i, query) in cli.queries.iter().enumerate() {
            if i > 0 {
                writeln!(out)?;
            }
            writeln!(out, "{}", engine.recommend(query))?;
        }
        return Ok(());
    }

    if cli.summary {
        return Ok(());
    }

    interactive(&engine, io::stdin().lock(), &mut out)
}

/// Answer one query per input line until EOF, `quit` or `exit`.
fn interactive(engine: &TopicEngine, input: impl BufRead, out: &mut impl Write) -> Result<()> {
    write!(out, "> ")?;
    out.flush()?;
    for line in input.lines() {
        let line = line.context("failed to read query from stdin")?;
        let query = line.trim();
        if query.eq_ignore_ascii_case("quit") || query.eq_ignore_ascii_case("exit") {
            break;
        }
        if !query.is_empty() {
            writeln!(out, "{}\n", engine.recommend(query))?;
        }
        write!(out, "> ")?;
        out.flush()?;
    }
    writeln!(out)?;
    Ok(())
}

fn render_summary(state: &ClusterState) -> String {
    let mut text = String::new();
    for line in state.summary_lines() {
        text.push_str(&line);
        text.push('\n');
    }
    match state.silhouette() {
        Some(score) => text.push_str(&format!("Silhouette score: {score:.3}\n")),
        None => text.push_str("Silhouette score: undefined\n"),
    }
    for warning in &state.warnings {
        text.push_str(&format!("Warning: {warning}\n"));
    }
    let terms: Vec<String> = state
        .corpus_terms
        .iter()
        .take(10)
        .map(|(term, count)| format!("{term} ({count})"))
        .collect();
    if !terms.is_empty() {
        text.push_str(&format!("Top terms: {}\n", terms.join(", ")));
    }
    text
}
