//! Collaborator seams: corpus sources, response polishing, cancellation.

pub mod cancellation;
pub mod corpus_provider;
pub mod response_polisher;

pub use cancellation::{Cancellable, CancellationToken};
pub use corpus_provider::CorpusProvider;
pub use response_polisher::ResponsePolisher;
