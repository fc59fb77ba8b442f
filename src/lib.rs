#![allow(non_snake_case)]

// Declare the modules that form the library's public API
// Using `pub mod` makes them accessible from the binary using `use NewsCleaner::module_name;`
pub mod config;
pub mod data_model;
pub mod error;
pub mod executor;
pub mod job;
pub mod pipeline;
pub mod utils;

pub use data_model::{ArticleRecord, ArticleTable};
pub use error::{PipelineError, Result};
pub use executor::{PipelineExecutor, ProcessingStep};
