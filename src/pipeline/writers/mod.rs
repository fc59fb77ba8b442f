// src/pipeline/writers/mod.rs

pub mod base_writer;
pub mod csv_writer;
pub mod parquet_writer;

pub use base_writer::BaseWriter;
pub use csv_writer::CsvWriter;
pub use parquet_writer::ParquetWriter;

use std::path::Path;

use crate::data_model::ArticleTable;
use crate::error::Result;
use crate::pipeline::TableFormat;

/// Writes `table` to `path` in the given format and closes the file.
pub fn write_table(
    path: &Path,
    format: TableFormat,
    table: &ArticleTable,
    csv_delimiter: u8,
) -> Result<()> {
    match format {
        TableFormat::Csv => {
            let mut writer = CsvWriter::new(path, csv_delimiter)?;
            writer.write_table(table)?;
            writer.close()
        }
        TableFormat::Parquet => {
            let mut writer = ParquetWriter::new(path)?;
            writer.write_table(table)?;
            writer.close()
        }
    }
}
