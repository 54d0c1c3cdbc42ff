//! Keyword extraction from cluster centroids.

/// Top `limit` vocabulary terms by centroid weight, descending.
///
/// Ties keep vocabulary order. Returns `min(limit, vocabulary.len())` terms.
pub fn top_keywords(centroid: &[f64], vocabulary: &[String], limit: usize) -> Vec<String> {
    top_weighted(centroid, vocabulary, limit)
        .into_iter()
        .map(|(term, _)| term)
        .collect()
}

/// Like [`top_keywords`], keeping the weights.
pub fn top_weighted(centroid: &[f64], vocabulary: &[String], limit: usize) -> Vec<(String, f64)> {
    let mut order: Vec<usize> = (0..vocabulary.len().min(centroid.len())).collect();
    // `sort_by` is stable: equal weights stay in vocabulary order.
    order.sort_by(|&a, &b| {
        centroid[b]
            .partial_cmp(&centroid[a])
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    order
        .into_iter()
        .take(limit)
        .map(|j| (vocabulary[j].clone(), centroid[j]))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vocab(terms: &[&str]) -> Vec<String> {
        terms.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn orders_by_weight_descending() {
        let v = vocab(&["basil", "cook", "pasta"]);
        assert_eq!(
            top_keywords(&[0.1, 0.7, 0.4], &v, 10),
            vec!["cook", "pasta", "basil"]
        );
    }

    #[test]
    fn ties_keep_vocabulary_order() {
        let v = vocab(&["alpha", "beta", "gamma", "delta"]);
        assert_eq!(
            top_keywords(&[0.5, 0.2, 0.5, 0.2], &v, 3),
            vec!["alpha", "gamma", "beta"]
        );
    }

    #[test]
    fn length_is_min_of_limit_and_vocabulary() {
        let v = vocab(&["a1", "b2", "c3"]);
        assert_eq!(top_keywords(&[0.0, 0.0, 0.0], &v, 10).len(), 3);
        let big: Vec<String> = (0..25).map(|i| format!("t{i:02}")).collect();
        let weights: Vec<f64> = (0..25).map(|i| i as f64).collect();
        let top = top_weighted(&weights, &big, 10);
        assert_eq!(top.len(), 10);
        assert!(top.windows(2).all(|w| w[0].1 >= w[1].1));
        assert_eq!(top[0].0, "t24");
    }
}
