//! Recommendation: score clusters against a query and render the response.
//!
//! Never fails. No match, an empty query or an empty state all produce the
//! fallback summary.

pub mod scorer;

use podtopic_core::constants::{SHORT_DESCRIPTION_LENGTH, TITLES_PER_CLUSTER};
use podtopic_core::models::{ClusterState, ClusterSummary, Recommendation, RecommendationEntry};
use podtopic_core::recommend_span;
use tracing::debug;

pub use scorer::{rank, score_clusters, select_matches, ClusterScore};

/// Recommend episodes for `user_input` and render plain text.
pub fn recommend(user_input: &str, state: &ClusterState, top_n: usize) -> String {
    build_recommendation(user_input, state, top_n).render()
}

/// Structured form of [`recommend`].
pub fn build_recommendation(user_input: &str, state: &ClusterState, top_n: usize) -> Recommendation {
    recommend_from_parts(user_input, &state.keywords(), &state.titles(), top_n)
}

/// Recommend from parallel keyword/title lists indexed by cluster id.
pub fn recommend_from_parts<K, T>(
    user_input: &str,
    keywords: &[K],
    titles: &[T],
    top_n: usize,
) -> Recommendation
where
    K: AsRef<[String]>,
    T: AsRef<[String]>,
{
    let span = recommend_span!(top_n);
    let _enter = span.enter();

    let query = user_input.to_lowercase();
    let matches = select_matches(score_clusters(&query, keywords), top_n);
    debug!(matched = matches.len(), clusters = keywords.len(), "clusters scored");

    if matches.is_empty() {
        return Recommendation::Fallback {
            clusters: keywords
                .iter()
                .enumerate()
                .map(|(cluster_id, terms)| ClusterSummary {
                    cluster_id,
                    description: describe(terms.as_ref()),
                })
                .collect(),
        };
    }

    let mut entries = Vec::new();
    for score in &matches {
        let description = describe(keywords[score.cluster_id].as_ref());
        let members = titles
            .get(score.cluster_id)
            .map(|t| t.as_ref())
            .unwrap_or_default();
        entries.extend(members.iter().take(TITLES_PER_CLUSTER).map(|title| {
            RecommendationEntry {
                cluster_id: score.cluster_id,
                title: title.clone(),
                description: description.clone(),
            }
        }));
    }

    Recommendation::Matched {
        query: user_input.to_string(),
        cluster_ids: matches.iter().map(|s| s.cluster_id).collect(),
        entries,
    }
}

fn describe(keywords: &[String]) -> String {
    let end = SHORT_DESCRIPTION_LENGTH.min(keywords.len());
    keywords[..end].join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn matched_text_lists_titles_with_cluster_labels() {
        let keywords = vec![strings(&["money", "invest"]), strings(&["cook", "pasta"])];
        let titles = vec![strings(&["Budget 101"]), strings(&["Pasta Night", "Knife Skills"])];
        let text = recommend_from_parts("How to COOK pasta", &keywords, &titles, 3).render();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(
            lines[1],
            "Based on your interest in \"How to COOK pasta\", you\u{2019}ll likely enjoy:"
        );
        assert_eq!(lines[2], "- Pasta Night (Cluster 2: cook, pasta)");
        assert_eq!(lines[3], "- Knife Skills (Cluster 2: cook, pasta)");
    }

    #[test]
    fn empty_input_falls_back() {
        let keywords = vec![strings(&["money"])];
        let titles = vec![strings(&["Budget 101"])];
        let rec = recommend_from_parts("", &keywords, &titles, 3);
        assert!(rec.is_fallback());
    }

    #[test]
    fn empty_state_falls_back_with_no_cluster_lines() {
        let keywords: Vec<Vec<String>> = Vec::new();
        let titles: Vec<Vec<String>> = Vec::new();
        let text = recommend_from_parts("anything", &keywords, &titles, 3).render();
        assert_eq!(text.lines().count(), 2);
    }
}
