//! Recommendation scoring and rendering against hand-built cluster states.

use chrono::Utc;
use podtopic_core::models::{Cluster, ClusterState, Recommendation, RunMetrics};

use podtopic_clustering::recommend::{self, build_recommendation, recommend_from_parts};

fn cluster(id: usize, keywords: &[&str], titles: &[&str]) -> Cluster {
    Cluster {
        id,
        centroid: Vec::new(),
        keywords: keywords.iter().map(|s| s.to_string()).collect(),
        member_titles: titles.iter().map(|s| s.to_string()).collect(),
    }
}

fn state(clusters: Vec<Cluster>) -> ClusterState {
    let cluster_sizes = clusters.iter().map(|c| c.member_titles.len()).collect();
    ClusterState {
        generation: 1,
        built_at: Utc::now(),
        metrics: RunMetrics {
            document_count: clusters.iter().map(|c| c.member_titles.len()).sum(),
            vocabulary_size: 0,
            num_clusters: clusters.len(),
            cluster_sizes,
            silhouette: None,
            inertia: 0.0,
            iterations: 0,
            duration_ms: 0,
        },
        clusters,
        warnings: Vec::new(),
        corpus_terms: Vec::new(),
    }
}

fn three_topics() -> ClusterState {
    state(vec![
        cluster(0, &["money", "invest", "stock"], &["Budget 101", "Index Funds"]),
        cluster(1, &["cook", "pasta", "recipe"], &["Pasta Night"]),
        cluster(2, &["run", "marathon", "training"], &["Marathon Prep"]),
    ])
}

#[test]
fn single_scoring_cluster_is_not_padded() {
    let rec = build_recommendation("a pasta recipe please", &three_topics(), 3);
    match rec {
        Recommendation::Matched {
            cluster_ids,
            entries,
            ..
        } => {
            assert_eq!(cluster_ids, vec![1]);
            assert_eq!(entries.len(), 1);
            assert_eq!(entries[0].title, "Pasta Night");
        }
        other => panic!("expected a match, got {other:?}"),
    }
}

#[test]
fn tied_clusters_keep_ascending_id() {
    // One keyword hit each in clusters 0 and 2.
    let text = recommend::recommend("stock marathon", &three_topics(), 3);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 5);
    assert_eq!(lines[2], "- Budget 101 (Cluster 1: money, invest, stock)");
    assert_eq!(lines[3], "- Index Funds (Cluster 1: money, invest, stock)");
    assert_eq!(lines[4], "- Marathon Prep (Cluster 3: run, marathon, training)");
}

#[test]
fn higher_score_ranks_first() {
    let rec = build_recommendation("marathon training and a stock tip", &three_topics(), 3);
    match rec {
        Recommendation::Matched { cluster_ids, .. } => assert_eq!(cluster_ids, vec![2, 0]),
        other => panic!("expected a match, got {other:?}"),
    }
}

#[test]
fn top_n_limits_matched_clusters() {
    let rec = build_recommendation("stock pasta marathon", &three_topics(), 1);
    match rec {
        Recommendation::Matched { cluster_ids, .. } => assert_eq!(cluster_ids, vec![0]),
        other => panic!("expected a match, got {other:?}"),
    }
}

#[test]
fn keywords_match_as_substrings() {
    // "run" is contained in "brunch" and "stock" in "stockpot".
    let rec = build_recommendation("brunch in a stockpot", &three_topics(), 3);
    match rec {
        Recommendation::Matched { cluster_ids, .. } => assert_eq!(cluster_ids, vec![0, 2]),
        other => panic!("expected a match, got {other:?}"),
    }
}

#[test]
fn query_is_lowercased_before_matching() {
    let text = recommend::recommend("PASTA", &three_topics(), 3);
    assert!(text.contains("Based on your interest in \"PASTA\""));
    assert!(text.contains("- Pasta Night (Cluster 2: cook, pasta, recipe)"));
}

#[test]
fn at_most_five_titles_per_cluster() {
    let titles = ["Ep 1", "Ep 2", "Ep 3", "Ep 4", "Ep 5", "Ep 6", "Ep 7"];
    let big = state(vec![cluster(0, &["garden"], &titles)]);
    let text = recommend::recommend("garden tips", &big, 3);
    assert_eq!(text.lines().count(), 2 + 5);
    assert!(text.contains("- Ep 5 (Cluster 1: garden)"));
    assert!(!text.contains("Ep 6"));
}

#[test]
fn description_uses_first_five_keywords() {
    let keywords = vec![vec![
        "a1".to_string(),
        "b2".to_string(),
        "c3".to_string(),
        "d4".to_string(),
        "e5".to_string(),
        "f6".to_string(),
    ]];
    let titles = vec![vec!["Only".to_string()]];
    let text = recommend_from_parts("zzz", &keywords, &titles, 3).render();
    assert_eq!(text.lines().nth(2), Some("Cluster 1: a1, b2, c3, d4, e5"));
}

#[test]
fn no_overlap_lists_every_cluster_without_titles() {
    let text = recommend::recommend("quantum physics", &three_topics(), 3);
    assert_eq!(
        text,
        "We couldn\u{2019}t find a strong match based on your input.\n\
         Here\u{2019}s how our podcast library is clustered:\n\
         Cluster 1: money, invest, stock\n\
         Cluster 2: cook, pasta, recipe\n\
         Cluster 3: run, marathon, training"
    );
}

#[test]
fn empty_state_always_falls_back() {
    let empty = state(Vec::new());
    let rec = build_recommendation("pasta", &empty, 3);
    assert!(rec.is_fallback());
    assert_eq!(rec.render().lines().count(), 2);
}
