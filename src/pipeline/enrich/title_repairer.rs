use itertools::Itertools;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, info};

use crate::data_model::ArticleTable;
use crate::error::Result;
use crate::executor::ProcessingStep;

/// Text after the last `/` of a url.
static LAST_PATH_SEGMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^/]+$").expect("static regex is valid"));

/// Best-effort title built from the final path segment of `url`, with hyphens
/// turned into spaces. Returns `None` when the url ends in `/`.
///
/// Slug suffixes such as numeric ids or query strings are kept as-is.
pub fn title_from_url(url: &str) -> Option<String> {
    LAST_PATH_SEGMENT
        .find(url)
        .map(|segment| segment.as_str().split('-').join(" "))
}

/// Fills missing titles from the article url.
pub struct TitleRepairer;

impl ProcessingStep for TitleRepairer {
    fn name(&self) -> &'static str {
        "TitleRepairer"
    }

    fn process(&self, mut table: ArticleTable) -> Result<ArticleTable> {
        info!("Filling missing titles");
        let mut repaired = 0usize;
        let mut unrepairable = 0usize;
        for record in table.records.iter_mut().filter(|r| r.title.is_none()) {
            match title_from_url(&record.url) {
                Some(title) => {
                    debug!(url = %record.url, title = %title, "Repaired missing title");
                    record.title = Some(title);
                    repaired += 1;
                }
                None => unrepairable += 1,
            }
        }
        info!(repaired, unrepairable, "Missing titles processed");
        Ok(table)
    }
}
