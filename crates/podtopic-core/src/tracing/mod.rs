//! Tracing setup and span helpers.

pub mod setup;
pub mod spans;

pub use setup::init_tracing_with_filter;
