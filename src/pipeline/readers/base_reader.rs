use std::collections::HashSet;

use itertools::Itertools;
use tracing::warn;

use crate::data_model::{
    ArticleRecord, ArticleTable, BODY_COLUMN, DERIVED_COLUMNS, REQUIRED_COLUMNS, TITLE_COLUMN,
    UID_COLUMN, URL_COLUMN,
};
use crate::error::{PipelineError, Result};

/// Loads a whole tabular file into memory.
pub trait BaseReader {
    fn read_table(&self) -> Result<ArticleTable>;
}

/// Columns the pipeline computes itself. Any input copy of them is ignored.
fn is_pipeline_column(name: &str) -> bool {
    name == UID_COLUMN || DERIVED_COLUMNS.contains(&name)
}

/// Positions of the required columns within an input header.
pub(crate) struct ColumnLayout {
    url: usize,
    title: usize,
    body: usize,
    /// Positions of every other column, in input order.
    extras: Vec<usize>,
}

impl ColumnLayout {
    /// Fails with `FormatError` on repeated header names, or naming every
    /// required column the header lacks.
    ///
    /// Returns the layout and the table to fill, whose input columns leave out
    /// any column the pipeline derives.
    pub(crate) fn resolve(headers: &[String], source: &str) -> Result<(Self, ArticleTable)> {
        let mut seen = HashSet::new();
        let duplicates: Vec<&str> = headers
            .iter()
            .filter(|h| !seen.insert(h.as_str()))
            .map(String::as_str)
            .unique()
            .collect();
        if !duplicates.is_empty() {
            return Err(PipelineError::FormatError(format!(
                "Input '{}' has duplicate column(s): {}",
                source,
                duplicates.join(", ")
            )));
        }

        let position = |name: &str| headers.iter().position(|h| h == name);

        let missing: Vec<&str> = REQUIRED_COLUMNS
            .iter()
            .copied()
            .filter(|name| position(name).is_none())
            .collect();
        if !missing.is_empty() {
            return Err(PipelineError::FormatError(format!(
                "Input '{}' is missing required column(s): {}",
                source,
                missing.join(", ")
            )));
        }

        let mut extras = Vec::new();
        let mut input_columns = Vec::new();
        let mut extra_columns = Vec::new();
        for (idx, name) in headers.iter().enumerate() {
            if is_pipeline_column(name) {
                warn!(column = %name, "Ignoring input column that the pipeline recomputes");
                continue;
            }
            input_columns.push(name.clone());
            if !REQUIRED_COLUMNS.contains(&name.as_str()) {
                extras.push(idx);
                extra_columns.push(name.clone());
            }
        }

        // positions were checked above
        let layout = ColumnLayout {
            url: position(URL_COLUMN).unwrap_or_default(),
            title: position(TITLE_COLUMN).unwrap_or_default(),
            body: position(BODY_COLUMN).unwrap_or_default(),
            extras,
        };
        let table = ArticleTable {
            input_columns,
            extra_columns,
            records: Vec::new(),
            index: None,
        };
        Ok((layout, table))
    }

    /// Builds a record from one row of cells, `None` meaning a missing value.
    /// `row_number` is 1-based and only used in error messages.
    pub(crate) fn record_from_cells(
        &self,
        cells: &mut [Option<String>],
        row_number: usize,
        source: &str,
    ) -> Result<ArticleRecord> {
        let url = cells
            .get_mut(self.url)
            .and_then(Option::take)
            .ok_or_else(|| {
                PipelineError::FormatError(format!(
                    "Row {} of '{}' has no value in column '{}'",
                    row_number, source, URL_COLUMN
                ))
            })?;
        let mut take = |idx: usize| cells.get_mut(idx).and_then(Option::take);
        Ok(ArticleRecord {
            url,
            title: take(self.title),
            body: take(self.body),
            extra: self.extras.iter().map(|&idx| take(idx)).collect(),
            ..Default::default()
        })
    }
}
