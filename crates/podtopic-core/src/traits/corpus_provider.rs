use crate::errors::CorpusError;
use crate::models::CorpusRecord;

/// Any collaborator that yields an ordered sequence of `(title, text)` records:
/// a spreadsheet reader, a database query, a file loader.
///
/// Blocking I/O is allowed here; it only runs inside a pipeline run.
pub trait CorpusProvider: Send + Sync {
    /// Provider name, for logs.
    fn name(&self) -> &str;

    /// Load every record in its canonical order.
    fn load(&self) -> Result<Vec<CorpusRecord>, CorpusError>;
}
