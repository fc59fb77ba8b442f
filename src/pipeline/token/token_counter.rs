use tracing::info;

use crate::data_model::{ArticleRecord, ArticleTable, BODY_COLUMN, TITLE_COLUMN};
use crate::error::Result;
use crate::executor::ProcessingStep;
use crate::pipeline::token::row_mask::eligible_rows;
use crate::utils::text::{count_content_tokens, StopWords};

/// Text columns that get an `n_tokens_<column>` feature.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextColumn {
    Title,
    Body,
}

impl TextColumn {
    pub fn name(&self) -> &'static str {
        match self {
            TextColumn::Title => TITLE_COLUMN,
            TextColumn::Body => BODY_COLUMN,
        }
    }

    fn text<'a>(&self, record: &'a ArticleRecord) -> Option<&'a str> {
        match self {
            TextColumn::Title => record.title.as_deref(),
            TextColumn::Body => record.body.as_deref(),
        }
    }

    fn set_count(&self, record: &mut ArticleRecord, count: Option<usize>) {
        match self {
            TextColumn::Title => record.n_tokens_title = count,
            TextColumn::Body => record.n_tokens_body = count,
        }
    }
}

/// Counts alphabetic, non-stop-word tokens in each configured text column.
///
/// The eligibility mask is taken once, before any column is counted, and
/// shared by every column.
pub struct TokenCounter {
    columns: Vec<TextColumn>,
    stop_words: StopWords,
}

impl TokenCounter {
    pub fn new(columns: Vec<TextColumn>, stop_words: StopWords) -> Self {
        TokenCounter {
            columns,
            stop_words,
        }
    }
}

impl ProcessingStep for TokenCounter {
    fn name(&self) -> &'static str {
        "TokenCounter"
    }

    fn process(&self, mut table: ArticleTable) -> Result<ArticleTable> {
        let mask = eligible_rows(&table);
        info!(
            eligible = mask.count_set(),
            skipped = mask.len() - mask.count_set(),
            "Rows selected for tokenizing"
        );

        for column in &self.columns {
            info!("Tokenizing from column {}", column.name());
            for (row, record) in table.records.iter_mut().enumerate() {
                let count = match column.text(record) {
                    Some(text) if mask.is_set(row) => {
                        Some(count_content_tokens(text, &self.stop_words)?)
                    }
                    _ => None,
                };
                column.set_count(record, count);
            }
        }
        Ok(table)
    }
}
