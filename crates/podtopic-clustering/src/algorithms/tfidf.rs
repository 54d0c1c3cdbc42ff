//! TF-IDF vectorization over a frozen corpus vocabulary.

use std::collections::{BTreeMap, HashMap, HashSet};

use podtopic_core::errors::VectorizeError;

use super::stop_words::is_stop_word;

/// Dense TF-IDF matrix: one L2-normalized row per document.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureMatrix {
    /// Terms sorted lexicographically; column `j` is `vocabulary[j]`.
    pub vocabulary: Vec<String>,
    /// Inverse document frequency per column.
    pub idf: Vec<f64>,
    /// `rows[i]` is the weight vector of document `i`.
    pub rows: Vec<Vec<f64>>,
}

impl FeatureMatrix {
    pub fn n_documents(&self) -> usize {
        self.rows.len()
    }

    pub fn n_terms(&self) -> usize {
        self.vocabulary.len()
    }

    /// Rows with no vocabulary term at all.
    pub fn empty_rows(&self) -> usize {
        self.rows
            .iter()
            .filter(|row| row.iter().all(|&w| w == 0.0))
            .count()
    }
}

/// TF-IDF vectorizer with English stop-word removal.
///
/// `idf(t) = ln((1 + N) / (1 + df(t))) + 1`; raw counts are scaled by idf and
/// each row is L2-normalized.
#[derive(Debug, Clone)]
pub struct TfIdfVectorizer {
    min_df: usize,
}

impl Default for TfIdfVectorizer {
    fn default() -> Self {
        Self { min_df: 1 }
    }
}

impl TfIdfVectorizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop terms appearing in fewer than `min_df` documents.
    pub fn with_min_df(mut self, min_df: usize) -> Self {
        self.min_df = min_df.max(1);
        self
    }

    /// Build the vocabulary from `documents` and weight every document.
    pub fn fit_transform(&self, documents: &[String]) -> Result<FeatureMatrix, VectorizeError> {
        if documents.is_empty() {
            return Err(VectorizeError::EmptyCorpus);
        }

        let tokenized: Vec<Vec<String>> = documents.iter().map(|d| tokenize(d)).collect();

        // Document frequency: how many documents contain each term.
        let mut df: BTreeMap<&str, usize> = BTreeMap::new();
        for tokens in &tokenized {
            let unique: HashSet<&str> = tokens.iter().map(String::as_str).collect();
            for term in unique {
                *df.entry(term).or_insert(0) += 1;
            }
        }

        let n_docs = documents.len() as f64;
        let mut vocabulary = Vec::new();
        let mut idf = Vec::new();
        for (term, &count) in &df {
            if count >= self.min_df {
                vocabulary.push((*term).to_string());
                idf.push(((1.0 + n_docs) / (1.0 + count as f64)).ln() + 1.0);
            }
        }

        if vocabulary.is_empty() {
            return Err(VectorizeError::EmptyVocabulary {
                documents: documents.len(),
            });
        }

        let column: HashMap<&str, usize> = vocabulary
            .iter()
            .enumerate()
            .map(|(j, term)| (term.as_str(), j))
            .collect();

        let rows = tokenized
            .iter()
            .map(|tokens| {
                let mut row = vec![0.0f64; vocabulary.len()];
                for token in tokens {
                    if let Some(&j) = column.get(token.as_str()) {
                        row[j] += 1.0;
                    }
                }
                for (weight, &w_idf) in row.iter_mut().zip(&idf) {
                    *weight *= w_idf;
                }
                l2_normalize(&mut row);
                row
            })
            .collect();

        Ok(FeatureMatrix {
            vocabulary,
            idf,
            rows,
        })
    }
}

/// Split on non-alphanumeric characters, lowercase, keep tokens of two or more
/// characters that are not stop words.
pub fn tokenize(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphanumeric() && c != '_')
        .filter(|s| s.chars().count() >= 2)
        .map(str::to_lowercase)
        .filter(|w| !is_stop_word(w))
        .collect()
}

fn l2_normalize(row: &mut [f64]) {
    let norm = row.iter().map(|x| x * x).sum::<f64>().sqrt();
    if norm > f64::EPSILON {
        for v in row.iter_mut() {
            *v /= norm;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn docs(texts: &[&str]) -> Vec<String> {
        texts.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn vocabulary_is_sorted_and_excludes_stop_words() {
        let matrix = TfIdfVectorizer::new()
            .fit_transform(&docs(&["the pasta and the sauce", "a sauce of tomato"]))
            .unwrap();
        assert_eq!(matrix.vocabulary, vec!["pasta", "sauce", "tomato"]);
    }

    #[test]
    fn rarer_terms_get_higher_idf() {
        let matrix = TfIdfVectorizer::new()
            .fit_transform(&docs(&["pasta sauce", "pasta basil", "pasta garlic"]))
            .unwrap();
        let pasta = matrix.vocabulary.iter().position(|t| t == "pasta").unwrap();
        let basil = matrix.vocabulary.iter().position(|t| t == "basil").unwrap();
        assert!(matrix.idf[basil] > matrix.idf[pasta]);
        // Common to every document: ln(4/4) + 1.
        assert!((matrix.idf[pasta] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn rows_are_unit_length() {
        let matrix = TfIdfVectorizer::new()
            .fit_transform(&docs(&["pasta pasta sauce", "money stock"]))
            .unwrap();
        for row in &matrix.rows {
            let norm: f64 = row.iter().map(|x| x * x).sum::<f64>().sqrt();
            assert!((norm - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn stop_word_only_document_gives_zero_row() {
        let matrix = TfIdfVectorizer::new()
            .fit_transform(&docs(&["pasta sauce", "the a of"]))
            .unwrap();
        assert_eq!(matrix.empty_rows(), 1);
        assert!(matrix.rows[1].iter().all(|&w| w == 0.0));
    }

    #[test]
    fn empty_corpus_fails() {
        assert_eq!(
            TfIdfVectorizer::new().fit_transform(&[]),
            Err(VectorizeError::EmptyCorpus)
        );
    }

    #[test]
    fn all_stop_words_is_empty_vocabulary() {
        let result = TfIdfVectorizer::new().fit_transform(&docs(&["the a of", "", "x y z"]));
        assert_eq!(result, Err(VectorizeError::EmptyVocabulary { documents: 3 }));
    }

    #[test]
    fn min_df_filters_rare_terms() {
        let matrix = TfIdfVectorizer::new()
            .with_min_df(2)
            .fit_transform(&docs(&["pasta sauce", "pasta basil"]))
            .unwrap();
        assert_eq!(matrix.vocabulary, vec!["pasta"]);
    }
}
