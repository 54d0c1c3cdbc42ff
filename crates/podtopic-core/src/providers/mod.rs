//! Built-in corpus providers.

pub mod in_memory;
pub mod json_file;

pub use in_memory::InMemoryCorpus;
pub use json_file::JsonCorpusFile;
