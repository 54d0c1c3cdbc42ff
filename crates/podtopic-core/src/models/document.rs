use serde::{Deserialize, Serialize};

/// A raw `(title, text)` pair as yielded by a corpus provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorpusRecord {
    pub title: String,
    pub transcript: String,
}

impl CorpusRecord {
    pub fn new(title: impl Into<String>, transcript: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            transcript: transcript.into(),
        }
    }
}

/// An ingested document. Immutable once loaded; identified by its corpus position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub title: String,
    pub raw_text: String,
    /// Lowercase `[a-z0-9 ]` form of `raw_text`.
    pub normalized_text: String,
}

/// Ordered documents of one pipeline run.
///
/// Position `i` aligns with row `i` of the feature matrix and label `i`
/// of the cluster assignment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Corpus {
    documents: Vec<Document>,
}

impl Corpus {
    pub fn new(documents: Vec<Document>) -> Self {
        Self { documents }
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    /// Normalized texts in corpus order.
    pub fn normalized_texts(&self) -> Vec<String> {
        self.documents
            .iter()
            .map(|d| d.normalized_text.clone())
            .collect()
    }

    /// Titles in corpus order, duplicates included.
    pub fn titles(&self) -> Vec<String> {
        self.documents.iter().map(|d| d.title.clone()).collect()
    }
}
