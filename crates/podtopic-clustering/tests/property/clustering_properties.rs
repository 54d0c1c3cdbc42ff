//! Property tests for the clustering algorithms.

use proptest::prelude::*;

use podtopic_clustering::algorithms::{normalize, top_keywords, KMeans, TfIdfVectorizer};

fn word() -> impl Strategy<Value = String> {
    prop::sample::select(vec![
        "pasta", "recipe", "money", "stock", "garden", "marathon", "podcast", "the", "and", "of",
        "budget", "sauce", "yoga", "startup",
    ])
    .prop_map(str::to_string)
}

fn document() -> impl Strategy<Value = String> {
    prop::collection::vec(word(), 1..12).prop_map(|words| words.join(" "))
}

fn points() -> impl Strategy<Value = Vec<Vec<f64>>> {
    prop::collection::vec(prop::collection::vec(-10.0f64..10.0, 3), 4..30)
}

// Normalized text only ever holds lowercase ASCII letters, digits and spaces.
proptest! {
    #[test]
    fn prop_normalize_alphabet(text in "\\PC*") {
        let out = normalize(&text);
        prop_assert!(out.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == ' '));
    }
}

proptest! {
    #[test]
    fn prop_normalize_idempotent(text in "\\PC*") {
        let once = normalize(&text);
        prop_assert_eq!(normalize(&once), once);
    }
}

proptest! {
    #[test]
    fn prop_vocabulary_independent_of_order(docs in prop::collection::vec(document(), 1..8)) {
        let vectorizer = TfIdfVectorizer::new();
        let forward = vectorizer.fit_transform(&docs);
        let mut reversed_docs = docs.clone();
        reversed_docs.reverse();
        let reversed = vectorizer.fit_transform(&reversed_docs);

        match (forward, reversed) {
            (Ok(a), Ok(b)) => {
                prop_assert_eq!(&a.vocabulary, &b.vocabulary);
                prop_assert_eq!(&a.idf, &b.idf);
            }
            (Err(a), Err(b)) => prop_assert_eq!(a, b),
            _ => prop_assert!(false, "order changed the outcome"),
        }
    }
}

proptest! {
    #[test]
    fn prop_weights_non_negative_and_normalized(docs in prop::collection::vec(document(), 1..8)) {
        if let Ok(matrix) = TfIdfVectorizer::new().fit_transform(&docs) {
            prop_assert_eq!(matrix.rows.len(), docs.len());
            for row in &matrix.rows {
                prop_assert!(row.iter().all(|&w| w >= 0.0));
                let norm: f64 = row.iter().map(|w| w * w).sum::<f64>().sqrt();
                prop_assert!(norm == 0.0 || (norm - 1.0).abs() < 1e-9);
            }
        }
    }
}

// Every point lands in exactly one cluster id in [0, k).
proptest! {
    #[test]
    fn prop_partition_complete(data in points(), k in 1usize..4) {
        let fit = KMeans::new(k).with_seed(42).fit(&data).unwrap();
        prop_assert_eq!(fit.labels.len(), data.len());
        prop_assert!(fit.labels.iter().all(|&l| l < k));
        prop_assert_eq!(fit.centroids.len(), k);
    }
}

proptest! {
    #[test]
    fn prop_deterministic(data in points(), seed in 0u64..1000) {
        let a = KMeans::new(3).with_seed(seed).fit(&data).unwrap();
        let b = KMeans::new(3).with_seed(seed).fit(&data).unwrap();
        prop_assert_eq!(a, b);
    }
}

proptest! {
    #[test]
    fn prop_keyword_count_and_order(weights in prop::collection::vec(0.0f64..1.0, 0..25)) {
        let vocabulary: Vec<String> = (0..weights.len()).map(|i| format!("term{i:02}")).collect();
        let keywords = top_keywords(&weights, &vocabulary, 10);
        prop_assert_eq!(keywords.len(), weights.len().min(10));

        let weight_of = |kw: &String| weights[vocabulary.iter().position(|v| v == kw).unwrap()];
        for pair in keywords.windows(2) {
            prop_assert!(weight_of(&pair[0]) >= weight_of(&pair[1]));
        }
    }
}
