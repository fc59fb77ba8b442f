// src/config.rs

pub mod cleaner;
pub mod pipeline;

pub use pipeline::{load_cleaning_config, CleaningConfig, DedupKey, StopWordsConfig};
