// src/pipeline/filters/mod.rs

mod completeness_filter;
mod deduplicator;

// Re-export the main types
pub use completeness_filter::CompletenessFilter;
pub use deduplicator::Deduplicator;
