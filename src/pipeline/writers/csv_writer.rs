use std::fs::File;
use std::path::Path;

use csv::{Writer, WriterBuilder};

use crate::data_model::ArticleTable;
use crate::error::Result;
use crate::pipeline::writers::base_writer::{output_cells, BaseWriter};

/// Writes an article table as delimited text, `uid` first. Missing values
/// become empty cells.
pub struct CsvWriter {
    writer: Writer<File>,
}

impl CsvWriter {
    pub fn new(path: &Path, delimiter: u8) -> Result<Self> {
        let file = File::create(path)?;
        let writer = WriterBuilder::new().delimiter(delimiter).from_writer(file);
        Ok(CsvWriter { writer })
    }
}

impl BaseWriter for CsvWriter {
    fn write_table(&mut self, table: &ArticleTable) -> Result<()> {
        self.writer.write_record(table.output_columns())?;
        for record in &table.records {
            let cells = output_cells(table, record);
            self.writer
                .write_record(cells.iter().map(|cell| cell.as_deref().unwrap_or("")))?;
        }
        Ok(())
    }

    fn close(mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
