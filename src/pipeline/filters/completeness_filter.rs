use tracing::info;

use crate::data_model::{ArticleRecord, ArticleTable};
use crate::error::Result;
use crate::executor::ProcessingStep;

/// Drops every row that still has a missing value in any column.
pub struct CompletenessFilter {
    treat_empty_host_as_missing: bool,
}

impl CompletenessFilter {
    pub fn new(treat_empty_host_as_missing: bool) -> Self {
        CompletenessFilter {
            treat_empty_host_as_missing,
        }
    }

    fn keeps(&self, record: &ArticleRecord) -> bool {
        if !record.is_complete() {
            return false;
        }
        !(self.treat_empty_host_as_missing && record.host.as_deref() == Some(""))
    }
}

impl ProcessingStep for CompletenessFilter {
    fn name(&self) -> &'static str {
        "CompletenessFilter"
    }

    fn process(&self, mut table: ArticleTable) -> Result<ArticleTable> {
        info!("Dropping rows with missing values");
        table.records.retain(|record| self.keeps(record));
        Ok(table)
    }
}
