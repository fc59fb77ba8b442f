use tracing::{info, warn};
use url::Url;

use crate::data_model::ArticleTable;
use crate::error::Result;
use crate::executor::ProcessingStep;

/// Network authority of `url`: the host, plus `:port` when the url names a
/// non-default port. Unparseable urls, and urls without a host, give `""`.
pub fn extract_host(url: &str) -> String {
    match Url::parse(url) {
        Ok(parsed) => match (parsed.host_str(), parsed.port()) {
            (Some(host), Some(port)) => format!("{}:{}", host, port),
            (Some(host), None) => host.to_string(),
            (None, _) => {
                warn!(url, "Url has no host, leaving host empty");
                String::new()
            }
        },
        Err(e) => {
            warn!(url, error = %e, "Failed to parse url, leaving host empty");
            String::new()
        }
    }
}

pub struct HostExtractor;

impl ProcessingStep for HostExtractor {
    fn name(&self) -> &'static str {
        "HostExtractor"
    }

    fn process(&self, mut table: ArticleTable) -> Result<ArticleTable> {
        info!("Extracting host from urls");
        for record in &mut table.records {
            record.host = Some(extract_host(&record.url));
        }
        Ok(table)
    }
}
