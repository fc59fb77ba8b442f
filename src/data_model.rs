use std::fmt;

pub const URL_COLUMN: &str = "url";
pub const TITLE_COLUMN: &str = "title";
pub const BODY_COLUMN: &str = "body";
pub const UID_COLUMN: &str = "uid";
pub const NEWSPAPER_UID_COLUMN: &str = "newspaper_uid";
pub const HOST_COLUMN: &str = "host";
pub const N_TOKENS_TITLE_COLUMN: &str = "n_tokens_title";
pub const N_TOKENS_BODY_COLUMN: &str = "n_tokens_body";

/// Columns every input table must carry.
pub const REQUIRED_COLUMNS: &[&str] = &[URL_COLUMN, TITLE_COLUMN, BODY_COLUMN];

/// Columns appended by the pipeline, in output order.
pub const DERIVED_COLUMNS: &[&str] = &[
    NEWSPAPER_UID_COLUMN,
    HOST_COLUMN,
    N_TOKENS_TITLE_COLUMN,
    N_TOKENS_BODY_COLUMN,
];

/// One scraped article plus the columns derived from it.
///
/// `None` marks a missing value. Derived fields stay `None` until the step
/// that produces them has run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArticleRecord {
    pub url: String,
    pub title: Option<String>,
    pub body: Option<String>,
    /// Values of the table's extra input columns, aligned with `ArticleTable::extra_columns`.
    pub extra: Vec<Option<String>>,
    pub newspaper_uid: Option<String>,
    pub host: Option<String>,
    pub uid: Option<String>,
    pub n_tokens_title: Option<usize>,
    pub n_tokens_body: Option<usize>,
}

impl ArticleRecord {
    pub fn new(url: &str, title: Option<&str>, body: Option<&str>) -> Self {
        ArticleRecord {
            url: url.to_string(),
            title: title.map(str::to_string),
            body: body.map(str::to_string),
            ..Default::default()
        }
    }

    /// True when none of the non-feature columns is missing.
    pub fn has_complete_source_fields(&self) -> bool {
        self.title.is_some()
            && self.body.is_some()
            && self.newspaper_uid.is_some()
            && self.host.is_some()
            && self.uid.is_some()
            && self.extra.iter().all(Option::is_some)
    }

    /// True when every column, token counts included, holds a value.
    pub fn is_complete(&self) -> bool {
        self.has_complete_source_fields()
            && self.n_tokens_title.is_some()
            && self.n_tokens_body.is_some()
    }

    /// Value of an input column by name, used by writers to reproduce the input layout.
    pub fn input_value<'a>(&'a self, table: &ArticleTable, column: &str) -> Option<&'a str> {
        match column {
            URL_COLUMN => Some(self.url.as_str()),
            TITLE_COLUMN => self.title.as_deref(),
            BODY_COLUMN => self.body.as_deref(),
            other => table
                .extra_columns
                .iter()
                .position(|name| name == other)
                .and_then(|idx| self.extra.get(idx))
                .and_then(|value| value.as_deref()),
        }
    }
}

/// Which column serves as the table's primary key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableIndex {
    Uid,
}

/// An ordered batch of articles held fully in memory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArticleTable {
    /// Input header order as read by the loader.
    pub input_columns: Vec<String>,
    /// Input headers beyond url/title/body, in input order.
    pub extra_columns: Vec<String>,
    pub records: Vec<ArticleRecord>,
    pub index: Option<TableIndex>,
}

impl ArticleTable {
    /// Builds a table with only the required columns.
    pub fn from_records(records: Vec<ArticleRecord>) -> Self {
        ArticleTable {
            input_columns: REQUIRED_COLUMNS.iter().map(|c| c.to_string()).collect(),
            extra_columns: Vec::new(),
            records,
            index: None,
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Full output header: index first, then input columns, then derived columns.
    pub fn output_columns(&self) -> Vec<String> {
        let mut columns = Vec::with_capacity(self.input_columns.len() + DERIVED_COLUMNS.len() + 1);
        columns.push(UID_COLUMN.to_string());
        columns.extend(self.input_columns.iter().cloned());
        columns.extend(DERIVED_COLUMNS.iter().map(|c| c.to_string()));
        columns
    }
}

const DISPLAY_HEAD_ROWS: usize = 5;
const DISPLAY_CELL_WIDTH: usize = 32;

fn clip(value: &str) -> String {
    if value.chars().count() <= DISPLAY_CELL_WIDTH {
        value.to_string()
    } else {
        let clipped: String = value.chars().take(DISPLAY_CELL_WIDTH - 3).collect();
        format!("{clipped}...")
    }
}

fn render_count(count: Option<usize>) -> String {
    count.map_or_else(|| "NaN".to_string(), |n| n.to_string())
}

/// Renders the head and tail of the table with a `[N rows x M columns]` footer.
impl fmt::Display for ArticleTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let columns = [
            UID_COLUMN,
            NEWSPAPER_UID_COLUMN,
            HOST_COLUMN,
            TITLE_COLUMN,
            N_TOKENS_TITLE_COLUMN,
            N_TOKENS_BODY_COLUMN,
        ];
        writeln!(f, "{}", columns.join("\t"))?;

        let n = self.records.len();
        let shown: Vec<usize> = if n <= DISPLAY_HEAD_ROWS * 2 {
            (0..n).collect()
        } else {
            (0..DISPLAY_HEAD_ROWS).chain(n - DISPLAY_HEAD_ROWS..n).collect()
        };

        for (pos, &i) in shown.iter().enumerate() {
            if pos == DISPLAY_HEAD_ROWS && n > DISPLAY_HEAD_ROWS * 2 {
                writeln!(f, "...")?;
            }
            let record = &self.records[i];
            let cells = [
                record.uid.as_deref().unwrap_or("NaN").to_string(),
                clip(record.newspaper_uid.as_deref().unwrap_or("NaN")),
                clip(record.host.as_deref().unwrap_or("NaN")),
                clip(record.title.as_deref().unwrap_or("NaN")),
                render_count(record.n_tokens_title),
                render_count(record.n_tokens_body),
            ];
            writeln!(f, "{}", cells.join("\t"))?;
        }

        write!(
            f,
            "\n[{} rows x {} columns]",
            n,
            self.output_columns().len() - 1
        )
    }
}
