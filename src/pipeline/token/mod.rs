// src/pipeline/token/mod.rs

pub mod row_mask;
pub mod token_counter;

pub use row_mask::{eligible_rows, RowMask};
pub use token_counter::{TextColumn, TokenCounter};
