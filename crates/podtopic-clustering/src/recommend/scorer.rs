//! Keyword-overlap scoring of clusters against a free-text query.

/// Match count for one cluster.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClusterScore {
    pub cluster_id: usize,
    pub match_count: usize,
}

/// Count, per cluster, the keywords contained in `query` as substrings.
///
/// `query` must already be lowercased. Containment is plain substring
/// search, so "cat" counts inside "concatenate".
pub fn score_clusters<K: AsRef<[String]>>(query: &str, keywords: &[K]) -> Vec<ClusterScore> {
    keywords
        .iter()
        .enumerate()
        .map(|(cluster_id, terms)| ClusterScore {
            cluster_id,
            match_count: terms
                .as_ref()
                .iter()
                .filter(|kw| query.contains(kw.as_str()))
                .count(),
        })
        .collect()
}

/// Sort by match count descending. Stable: ties keep ascending cluster id.
pub fn rank(mut scores: Vec<ClusterScore>) -> Vec<ClusterScore> {
    scores.sort_by(|a, b| b.match_count.cmp(&a.match_count));
    scores
}

/// Top `top_n` of the ranking, minus any with zero matches.
///
/// Truncation happens before filtering, so zero-score clusters never pad
/// the result up to `top_n`.
pub fn select_matches(scores: Vec<ClusterScore>, top_n: usize) -> Vec<ClusterScore> {
    rank(scores)
        .into_iter()
        .take(top_n)
        .filter(|s| s.match_count > 0)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kw(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn counts_substring_containment() {
        let keywords = vec![kw(&["cat", "dog"]), kw(&["fish"])];
        let scores = score_clusters("concatenate the dogma", &keywords);
        assert_eq!(scores[0].match_count, 2);
        assert_eq!(scores[1].match_count, 0);
    }

    #[test]
    fn ties_keep_ascending_id() {
        let scores = vec![
            ClusterScore { cluster_id: 0, match_count: 1 },
            ClusterScore { cluster_id: 1, match_count: 3 },
            ClusterScore { cluster_id: 2, match_count: 1 },
        ];
        let ids: Vec<usize> = rank(scores).iter().map(|s| s.cluster_id).collect();
        assert_eq!(ids, vec![1, 0, 2]);
    }

    #[test]
    fn zero_scores_are_not_padded_in() {
        let scores = vec![
            ClusterScore { cluster_id: 0, match_count: 0 },
            ClusterScore { cluster_id: 1, match_count: 2 },
            ClusterScore { cluster_id: 2, match_count: 0 },
        ];
        let selected = select_matches(scores, 3);
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].cluster_id, 1);
    }

    #[test]
    fn truncates_before_filtering() {
        let scores = vec![
            ClusterScore { cluster_id: 0, match_count: 1 },
            ClusterScore { cluster_id: 1, match_count: 1 },
            ClusterScore { cluster_id: 2, match_count: 1 },
        ];
        let ids: Vec<usize> = select_matches(scores, 2)
            .iter()
            .map(|s| s.cluster_id)
            .collect();
        assert_eq!(ids, vec![0, 1]);
    }
}
