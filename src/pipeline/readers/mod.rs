// src/pipeline/readers/mod.rs

pub mod base_reader;
pub mod csv_reader;
pub mod parquet_reader;

pub use base_reader::BaseReader;
pub use csv_reader::CsvReader;
pub use parquet_reader::ParquetReader;

use std::path::Path;

use crate::pipeline::TableFormat;

/// Picks the reader matching the file extension of `path`.
pub fn reader_for(path: &Path, csv_delimiter: u8) -> Box<dyn BaseReader> {
    match TableFormat::from_path(path) {
        TableFormat::Parquet => Box::new(ParquetReader::new(path)),
        TableFormat::Csv => Box::new(CsvReader::new(path, csv_delimiter)),
    }
}
