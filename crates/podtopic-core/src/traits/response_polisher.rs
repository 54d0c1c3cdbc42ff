use crate::errors::PolishError;

/// Optional final-phrasing step (e.g. a local language model).
///
/// Receives the already-ranked plain response and may rewrite its wording.
/// It cannot change which clusters or titles were matched.
pub trait ResponsePolisher: Send + Sync {
    fn name(&self) -> &str;

    fn polish(&self, query: &str, draft: &str) -> Result<String, PolishError>;
}
