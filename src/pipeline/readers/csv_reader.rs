use std::fs::File;
use std::path::PathBuf;

use csv::ReaderBuilder;
use tracing::info;

use crate::data_model::ArticleTable;
use crate::error::Result;
use crate::pipeline::readers::base_reader::{BaseReader, ColumnLayout};

/// Reads a delimited-text file with a header row. Empty cells are missing values.
#[derive(Debug)]
pub struct CsvReader {
    path: PathBuf,
    delimiter: u8,
}

impl CsvReader {
    pub fn new(path: impl Into<PathBuf>, delimiter: u8) -> Self {
        CsvReader {
            path: path.into(),
            delimiter,
        }
    }
}

impl BaseReader for CsvReader {
    fn read_table(&self) -> Result<ArticleTable> {
        let source = self.path.display().to_string();
        info!("Reading file {}", source);

        // Opened separately so a missing file surfaces as an I/O error
        let file = File::open(&self.path)?;
        let mut reader = ReaderBuilder::new()
            .delimiter(self.delimiter)
            .has_headers(true)
            .from_reader(file);

        let headers: Vec<String> = reader
            .headers()?
            .iter()
            .map(|h| h.trim().to_string())
            .collect();
        let (layout, mut table) = ColumnLayout::resolve(&headers, &source)?;

        for (i, row) in reader.records().enumerate() {
            let row = row?;
            let mut cells: Vec<Option<String>> = row
                .iter()
                .map(|cell| (!cell.is_empty()).then(|| cell.to_string()))
                .collect();
            table
                .records
                .push(layout.record_from_cells(&mut cells, i + 1, &source)?);
        }

        info!(rows = table.len(), columns = table.input_columns.len(), "Loaded table");
        Ok(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PipelineError;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_csv(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        write!(file, "{}", content).expect("Failed to write temp file");
        file
    }

    #[test]
    fn reads_rows_and_missing_cells() {
        let file = write_csv(
            "url,title,body\n\
             https://a.com/x/uno,Uno,Cuerpo uno\n\
             https://a.com/x/dos-tres,,\"Cuerpo\ncon salto\"\n",
        );
        let table = CsvReader::new(file.path(), b',').read_table().unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.records[0].title.as_deref(), Some("Uno"));
        assert_eq!(table.records[1].title, None);
        assert_eq!(table.records[1].body.as_deref(), Some("Cuerpo\ncon salto"));
        assert!(table.extra_columns.is_empty());
    }

    #[test]
    fn extra_columns_are_preserved() {
        let file = write_csv("section;url;title;body\nsports;https://a.com/1;T;B\n");
        let table = CsvReader::new(file.path(), b';').read_table().unwrap();
        assert_eq!(table.input_columns, vec!["section", "url", "title", "body"]);
        assert_eq!(table.extra_columns, vec!["section"]);
        assert_eq!(table.records[0].extra, vec![Some("sports".to_string())]);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let result = CsvReader::new("does/not/exist_20200101.csv", b',').read_table();
        assert!(matches!(result, Err(PipelineError::IoError { .. })));
    }

    #[test]
    fn missing_column_is_a_format_error() {
        let file = write_csv("url,headline,body\nhttps://a.com/1,T,B\n");
        let result = CsvReader::new(file.path(), b',').read_table();
        assert!(matches!(result, Err(PipelineError::FormatError(_))));
    }

    #[test]
    fn duplicate_header_is_a_format_error() {
        let file = write_csv("url,title,body,title\nhttps://a.com/1,T,B,Otro\n");
        let result = CsvReader::new(file.path(), b',').read_table();
        assert!(matches!(result, Err(PipelineError::FormatError(_))));
    }

    #[test]
    fn ragged_rows_are_csv_errors() {
        let file = write_csv("url,title,body\nhttps://a.com/1,T\n");
        let result = CsvReader::new(file.path(), b',').read_table();
        assert!(matches!(result, Err(PipelineError::CsvError { .. })));
    }
}
