use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{info, info_span};

use crate::config::CleaningConfig;
use crate::data_model::ArticleTable;
use crate::error::Result;
use crate::executor::{PipelineExecutor, ProcessingStep};
use crate::pipeline::enrich::{
    newspaper_uid_from_path, BodySanitizer, HostExtractor, IdentityGenerator, SourceTagger,
    TitleRepairer,
};
use crate::pipeline::filters::{CompletenessFilter, Deduplicator};
use crate::pipeline::readers::reader_for;
use crate::pipeline::token::{TextColumn, TokenCounter};
use crate::pipeline::writers::write_table;
use crate::pipeline::TableFormat;

/// One cleaning run over a single input file.
#[derive(Debug, Clone)]
pub struct CleaningJob {
    pub input: PathBuf,
    /// Overrides the uid derived from the input file name.
    pub newspaper_uid: Option<String>,
    /// Overrides `<output_prefix><input file name>` next to the input.
    pub output: Option<PathBuf>,
    pub config: CleaningConfig,
}

impl CleaningJob {
    pub fn new(input: impl Into<PathBuf>, config: CleaningConfig) -> Self {
        CleaningJob {
            input: input.into(),
            newspaper_uid: None,
            output: None,
            config,
        }
    }

    pub fn newspaper_uid(&self) -> String {
        self.newspaper_uid.clone().unwrap_or_else(|| {
            newspaper_uid_from_path(&self.input, &self.config.source_delimiter)
        })
    }

    pub fn output_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| default_output_path(&self.input, &self.config.output_prefix))
    }
}

#[derive(Debug)]
pub struct JobOutcome {
    pub table: ArticleTable,
    pub output_path: PathBuf,
    pub rows_read: usize,
}

/// `<prefix><file name>` in the input's directory.
pub fn default_output_path(input: &Path, prefix: &str) -> PathBuf {
    let mut file_name = OsString::from(prefix);
    if let Some(name) = input.file_name() {
        file_name.push(name);
    }
    input.with_file_name(file_name)
}

/// The fixed stage order: tagging, host, title repair, identity, body,
/// token counts, dedup, completeness.
pub fn build_pipeline(config: &CleaningConfig, newspaper_uid: &str) -> PipelineExecutor {
    let steps: Vec<Box<dyn ProcessingStep>> = vec![
        Box::new(SourceTagger::new(newspaper_uid)),
        Box::new(HostExtractor),
        Box::new(TitleRepairer),
        Box::new(IdentityGenerator),
        Box::new(BodySanitizer),
        Box::new(TokenCounter::new(
            vec![TextColumn::Title, TextColumn::Body],
            config.stop_words.build(),
        )),
        Box::new(Deduplicator::new(config.dedup_key)),
        Box::new(CompletenessFilter::new(config.treat_empty_host_as_missing)),
    ];
    PipelineExecutor::new(steps)
}

/// Writes next to `path` first and renames into place, so a failed write
/// never leaves a truncated output behind.
fn write_atomically(path: &Path, table: &ArticleTable, csv_delimiter: u8) -> Result<()> {
    let mut partial_name = path.file_name().map(OsString::from).unwrap_or_default();
    partial_name.push(".partial");
    let partial = path.with_file_name(partial_name);

    let format = TableFormat::from_path(path);
    if let Err(e) = write_table(&partial, format, table, csv_delimiter) {
        let _ = fs::remove_file(&partial);
        return Err(e);
    }
    fs::rename(&partial, path).map_err(|e| {
        let _ = fs::remove_file(&partial);
        e.into()
    })
}

/// Load, clean, and save one file.
pub fn run_cleaning_job(job: &CleaningJob) -> Result<JobOutcome> {
    let span = info_span!("cleaning_job", input = %job.input.display());
    let _enter = span.enter();
    info!("Starting cleaning process");

    job.config.validate()?;
    let csv_delimiter = job.config.csv_delimiter_byte();

    let table = reader_for(&job.input, csv_delimiter).read_table()?;
    let rows_read = table.len();

    let newspaper_uid = job.newspaper_uid();
    let executor = build_pipeline(&job.config, &newspaper_uid);
    let table = executor.run(table)?;

    let output_path = job.output_path();
    info!("Saving data at location: {}", output_path.display());
    write_atomically(&output_path, &table, csv_delimiter)?;

    info!(
        rows_read,
        rows_written = table.len(),
        "Cleaning process finished"
    );
    Ok(JobOutcome {
        table,
        output_path,
        rows_read,
    })
}
