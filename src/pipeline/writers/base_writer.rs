use crate::data_model::{ArticleRecord, ArticleTable};
use crate::error::Result;

/// Trait for writing an article table to an output sink (e.g. file).
pub trait BaseWriter {
    /// Write every row of `table`, in order.
    fn write_table(&mut self, table: &ArticleTable) -> Result<()>;

    /// Finalize and close the output writer.
    fn close(self) -> Result<()>;
}

/// Cells of one output row, following `ArticleTable::output_columns`.
pub(crate) fn output_cells(table: &ArticleTable, record: &ArticleRecord) -> Vec<Option<String>> {
    let mut cells = Vec::with_capacity(table.input_columns.len() + 5);
    cells.push(record.uid.clone());
    cells.extend(
        table
            .input_columns
            .iter()
            .map(|column| record.input_value(table, column).map(str::to_string)),
    );
    cells.push(record.newspaper_uid.clone());
    cells.push(record.host.clone());
    cells.push(record.n_tokens_title.map(|n| n.to_string()));
    cells.push(record.n_tokens_body.map(|n| n.to_string()));
    cells
}
