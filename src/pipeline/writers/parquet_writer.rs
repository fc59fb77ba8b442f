use std::fs::File;
use std::path::Path;
use std::sync::Arc;

use arrow::array::{ArrayRef, RecordBatch, StringBuilder, UInt64Builder};
use arrow::datatypes::{DataType, Field, Schema, SchemaRef};
use parquet::arrow::arrow_writer::ArrowWriter;
use parquet::file::properties::WriterProperties;

use crate::data_model::{
    ArticleTable, HOST_COLUMN, NEWSPAPER_UID_COLUMN, N_TOKENS_BODY_COLUMN, N_TOKENS_TITLE_COLUMN,
    UID_COLUMN,
};
use crate::error::Result;
use crate::pipeline::writers::BaseWriter;

fn create_schema(table: &ArticleTable) -> SchemaRef {
    let mut fields = vec![Field::new(UID_COLUMN, DataType::Utf8, true)];
    fields.extend(
        table
            .input_columns
            .iter()
            .map(|column| Field::new(column, DataType::Utf8, true)),
    );
    fields.push(Field::new(NEWSPAPER_UID_COLUMN, DataType::Utf8, true));
    fields.push(Field::new(HOST_COLUMN, DataType::Utf8, true));
    fields.push(Field::new(N_TOKENS_TITLE_COLUMN, DataType::UInt64, true));
    fields.push(Field::new(N_TOKENS_BODY_COLUMN, DataType::UInt64, true));
    Arc::new(Schema::new(fields))
}

/// Writes an article table to a Parquet file. Token counts are stored as
/// `UInt64`, every other column as nullable UTF-8.
///
/// The schema depends on the table's input columns, so the Arrow writer is
/// created lazily on the first `write_table`.
pub struct ParquetWriter {
    file: Option<File>,
    writer: Option<ArrowWriter<File>>,
}

impl ParquetWriter {
    pub fn new(path: &Path) -> Result<Self> {
        let file = File::create(path)?;
        Ok(ParquetWriter {
            file: Some(file),
            writer: None,
        })
    }
}

impl BaseWriter for ParquetWriter {
    fn write_table(&mut self, table: &ArticleTable) -> Result<()> {
        let schema = create_schema(table);
        if self.writer.is_none() {
            if let Some(file) = self.file.take() {
                let props = WriterProperties::builder().build();
                self.writer = Some(ArrowWriter::try_new(file, schema.clone(), Some(props))?);
            }
        }

        let mut uid_builder = StringBuilder::new();
        let mut input_builders: Vec<StringBuilder> = table
            .input_columns
            .iter()
            .map(|_| StringBuilder::new())
            .collect();
        let mut newspaper_uid_builder = StringBuilder::new();
        let mut host_builder = StringBuilder::new();
        let mut n_tokens_title_builder = UInt64Builder::new();
        let mut n_tokens_body_builder = UInt64Builder::new();

        for record in &table.records {
            uid_builder.append_option(record.uid.as_deref());
            for (builder, column) in input_builders.iter_mut().zip(&table.input_columns) {
                builder.append_option(record.input_value(table, column));
            }
            newspaper_uid_builder.append_option(record.newspaper_uid.as_deref());
            host_builder.append_option(record.host.as_deref());
            n_tokens_title_builder.append_option(record.n_tokens_title.map(|n| n as u64));
            n_tokens_body_builder.append_option(record.n_tokens_body.map(|n| n as u64));
        }

        let mut columns: Vec<ArrayRef> = vec![Arc::new(uid_builder.finish())];
        columns.extend(
            input_builders
                .iter_mut()
                .map(|builder| Arc::new(builder.finish()) as ArrayRef),
        );
        columns.push(Arc::new(newspaper_uid_builder.finish()));
        columns.push(Arc::new(host_builder.finish()));
        columns.push(Arc::new(n_tokens_title_builder.finish()));
        columns.push(Arc::new(n_tokens_body_builder.finish()));

        let batch = RecordBatch::try_new(schema, columns)?;

        if let Some(writer) = self.writer.as_mut() {
            writer.write(&batch)?;
        }

        Ok(())
    }

    fn close(mut self) -> Result<()> {
        if let Some(writer) = self.writer.take() {
            writer.close()?;
        }
        Ok(())
    }
}
