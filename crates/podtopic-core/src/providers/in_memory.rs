use crate::errors::CorpusError;
use crate::models::CorpusRecord;
use crate::traits::CorpusProvider;

/// Corpus held in memory. Used by tests and by front ends that fetch
/// documents themselves.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCorpus {
    records: Vec<CorpusRecord>,
}

impl InMemoryCorpus {
    pub fn new(records: Vec<CorpusRecord>) -> Self {
        Self { records }
    }

    /// Build from `(title, text)` pairs.
    pub fn from_pairs<T, S>(pairs: impl IntoIterator<Item = (T, S)>) -> Self
    where
        T: Into<String>,
        S: Into<String>,
    {
        Self {
            records: pairs
                .into_iter()
                .map(|(title, text)| CorpusRecord::new(title, text))
                .collect(),
        }
    }
}

impl CorpusProvider for InMemoryCorpus {
    fn name(&self) -> &str {
        "in-memory"
    }

    fn load(&self) -> Result<Vec<CorpusRecord>, CorpusError> {
        Ok(self.records.clone())
    }
}
