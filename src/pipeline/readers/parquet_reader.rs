// src/pipeline/readers/parquet_reader.rs

use std::fs::File;
use std::path::PathBuf;

use arrow::array::{Array, StringArray};
use arrow::compute::cast;
use arrow::datatypes::DataType;
use arrow::record_batch::{RecordBatch, RecordBatchReader};
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use tracing::info;

use crate::data_model::ArticleTable;
use crate::error::{PipelineError, Result};
use crate::pipeline::readers::base_reader::{BaseReader, ColumnLayout};

/// Reads an article table from a Parquet file.
#[derive(Debug)]
pub struct ParquetReader {
    path: PathBuf,
    batch_size: Option<usize>,
}

impl ParquetReader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        ParquetReader {
            path: path.into(),
            batch_size: None,
        }
    }

    /// Arrow batch size used while decoding.
    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = Some(batch_size);
        self
    }
}

/// Every column of `batch` as UTF-8 text. Non-string columns are cast.
fn string_columns(batch: &RecordBatch) -> Result<Vec<StringArray>> {
    batch
        .columns()
        .iter()
        .map(|column| {
            let as_text = match column.data_type() {
                DataType::Utf8 => column.clone(),
                _ => cast(column, &DataType::Utf8)?,
            };
            as_text
                .as_any()
                .downcast_ref::<StringArray>()
                .cloned()
                .ok_or_else(|| {
                    PipelineError::Unexpected("Column did not cast to a Utf8 StringArray".to_string())
                })
        })
        .collect()
}

impl BaseReader for ParquetReader {
    fn read_table(&self) -> Result<ArticleTable> {
        let source = self.path.display().to_string();
        info!("Reading file {}", source);

        let file = File::open(&self.path)?;
        let builder = ParquetRecordBatchReaderBuilder::try_new(file)?;
        let builder = if let Some(batch_size) = self.batch_size {
            builder.with_batch_size(batch_size)
        } else {
            builder
        };
        let record_batch_reader = builder.build()?;

        let headers: Vec<String> = record_batch_reader
            .schema()
            .fields()
            .iter()
            .map(|field| field.name().clone())
            .collect();
        let (layout, mut table) = ColumnLayout::resolve(&headers, &source)?;

        let mut row_number = 0usize;
        for batch_result in record_batch_reader {
            let batch = batch_result?;
            let columns = string_columns(&batch)?;
            for i in 0..batch.num_rows() {
                row_number += 1;
                let mut cells: Vec<Option<String>> = columns
                    .iter()
                    .map(|col| (!col.is_null(i)).then(|| col.value(i).to_string()))
                    .collect();
                table
                    .records
                    .push(layout.record_from_cells(&mut cells, row_number, &source)?);
            }
        }

        info!(rows = table.len(), columns = table.input_columns.len(), "Loaded table");
        Ok(table)
    }
}
