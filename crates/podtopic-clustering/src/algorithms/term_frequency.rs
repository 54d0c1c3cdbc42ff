//! Corpus-wide term counts: the data behind a transcript word cloud.

use std::collections::HashMap;

use super::tfidf::tokenize;

/// The `limit` most frequent non-stop-word terms across `texts`,
/// by count descending then term ascending.
pub fn top_terms(texts: &[String], limit: usize) -> Vec<(String, usize)> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    for text in texts {
        for token in tokenize(text) {
            *counts.entry(token).or_insert(0) += 1;
        }
    }

    let mut terms: Vec<(String, usize)> = counts.into_iter().collect();
    terms.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    terms.truncate(limit);
    terms
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_across_documents() {
        let texts = vec![
            "pasta pasta sauce".to_string(),
            "the pasta and basil".to_string(),
        ];
        let terms = top_terms(&texts, 2);
        assert_eq!(
            terms,
            vec![("pasta".to_string(), 3), ("basil".to_string(), 1)]
        );
    }

    #[test]
    fn empty_input_gives_no_terms() {
        assert!(top_terms(&[], 10).is_empty());
    }
}
