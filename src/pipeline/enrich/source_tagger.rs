use std::path::Path;

use tracing::info;

use crate::data_model::ArticleTable;
use crate::error::Result;
use crate::executor::ProcessingStep;

/// Derives the source identifier from an input file name following the
/// `<newspaper_uid><delimiter><rest>` convention.
///
/// Only the file name is inspected, never the parent directories. A name
/// without the delimiter is used whole.
pub fn newspaper_uid_from_path(path: &Path, delimiter: &str) -> String {
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let newspaper_uid = match file_name.split_once(delimiter) {
        Some((uid, _)) => uid.to_string(),
        None => file_name,
    };
    info!("Newspaper UID detected: {}", newspaper_uid);
    newspaper_uid
}

/// Stamps every row with the batch's newspaper uid.
pub struct SourceTagger {
    newspaper_uid: String,
}

impl SourceTagger {
    pub fn new(newspaper_uid: impl Into<String>) -> Self {
        SourceTagger {
            newspaper_uid: newspaper_uid.into(),
        }
    }
}

impl ProcessingStep for SourceTagger {
    fn name(&self) -> &'static str {
        "SourceTagger"
    }

    fn process(&self, mut table: ArticleTable) -> Result<ArticleTable> {
        info!("Filling newspaper UID column with {}", self.newspaper_uid);
        for record in &mut table.records {
            record.newspaper_uid = Some(self.newspaper_uid.clone());
        }
        Ok(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_model::ArticleRecord;

    #[test]
    fn uid_is_the_text_before_the_first_delimiter() {
        assert_eq!(
            newspaper_uid_from_path(Path::new("eluniversal_2020_01_01_articles.csv"), "_"),
            "eluniversal"
        );
    }

    #[test]
    fn parent_directories_are_ignored() {
        assert_eq!(
            newspaper_uid_from_path(Path::new("data/raw_dumps/elpais_20200101.csv"), "_"),
            "elpais"
        );
    }

    #[test]
    fn name_without_delimiter_is_used_whole() {
        assert_eq!(
            newspaper_uid_from_path(Path::new("articles.csv"), "_"),
            "articles.csv"
        );
    }

    #[test]
    fn leading_delimiter_yields_empty_uid() {
        assert_eq!(newspaper_uid_from_path(Path::new("_rest.csv"), "_"), "");
    }

    #[test]
    fn every_row_gets_the_same_uid() {
        let table = ArticleTable::from_records(vec![
            ArticleRecord::new("http://a.com/1", Some("a"), Some("b")),
            ArticleRecord::new("http://a.com/2", None, Some("b")),
        ]);
        let tagged = SourceTagger::new("site").process(table).unwrap();
        assert!(tagged
            .records
            .iter()
            .all(|r| r.newspaper_uid.as_deref() == Some("site")));
    }
}
