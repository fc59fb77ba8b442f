use crate::data_model::ArticleTable;
use crate::error::{PipelineError, Result};
use tracing::{debug, info, warn};

/// A whole-table transformation. Steps take ownership of the table and hand it
/// back, so each one may add columns or drop rows.
pub trait ProcessingStep: Send + Sync {
    fn name(&self) -> &'static str; // For logging/error reporting

    fn process(&self, table: ArticleTable) -> Result<ArticleTable>;
}

pub struct PipelineExecutor {
    steps: Vec<Box<dyn ProcessingStep>>, // Holds the ordered steps
}

impl PipelineExecutor {
    pub fn new(steps: Vec<Box<dyn ProcessingStep>>) -> Self {
        if steps.is_empty() {
            warn!("Pipeline created with no steps.");
        }
        PipelineExecutor { steps }
    }

    pub fn step_names(&self) -> Vec<&'static str> {
        self.steps.iter().map(|step| step.name()).collect()
    }

    /// Runs every step in order. The first failing step aborts the run.
    pub fn run(&self, initial_table: ArticleTable) -> Result<ArticleTable> {
        let mut current = initial_table;
        for step in &self.steps {
            let rows_before = current.len();
            debug!("Running step: {}", step.name());

            current = step
                .process(current)
                .map_err(|e| PipelineError::StepError {
                    step_name: step.name().to_string(),
                    source: Box::new(e),
                })?;

            if current.len() != rows_before {
                info!(
                    step = step.name(),
                    rows_before,
                    rows_after = current.len(),
                    "Step removed {} rows",
                    rows_before.saturating_sub(current.len())
                );
            }
        }
        Ok(current)
    }
}
