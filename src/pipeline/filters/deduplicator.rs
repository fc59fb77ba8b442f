use std::collections::HashSet;

use tracing::info;

use crate::config::DedupKey;
use crate::data_model::{ArticleRecord, ArticleTable};
use crate::error::Result;
use crate::executor::ProcessingStep;

/// Drops rows whose key repeats an earlier row's key, keeping the first
/// occurrence and the relative order of survivors.
///
/// Missing keys compare equal to each other.
pub struct Deduplicator {
    key: DedupKey,
}

impl Deduplicator {
    pub fn new(key: DedupKey) -> Self {
        Deduplicator { key }
    }

    fn key_of<'a>(&self, record: &'a ArticleRecord) -> Option<&'a str> {
        match self.key {
            DedupKey::Title => record.title.as_deref(),
            DedupKey::Uid => record.uid.as_deref(),
        }
    }
}

impl ProcessingStep for Deduplicator {
    fn name(&self) -> &'static str {
        "Deduplicator"
    }

    fn process(&self, mut table: ArticleTable) -> Result<ArticleTable> {
        info!("Removing duplicates values in {}", self.key.column_name());
        let mut seen: HashSet<Option<String>> = HashSet::with_capacity(table.len());
        table
            .records
            .retain(|record| seen.insert(self.key_of(record).map(str::to_string)));
        Ok(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> ArticleTable {
        let mut records = vec![
            ArticleRecord::new("http://a.com/1", Some("Same"), Some("first")),
            ArticleRecord::new("http://a.com/2", Some("Other"), Some("second")),
            ArticleRecord::new("http://a.com/3", Some("Same"), Some("third")),
            ArticleRecord::new("http://a.com/2", Some("Different"), Some("fourth")),
        ];
        for record in &mut records {
            record.uid = Some(crate::pipeline::enrich::url_uid(&record.url));
        }
        ArticleTable::from_records(records)
    }

    #[test]
    fn title_key_keeps_first_occurrence() {
        let out = Deduplicator::new(DedupKey::Title).process(table()).unwrap();
        let bodies: Vec<_> = out.records.iter().map(|r| r.body.as_deref().unwrap()).collect();
        assert_eq!(bodies, vec!["first", "second", "fourth"]);
    }

    #[test]
    fn uid_key_only_merges_identical_urls() {
        let out = Deduplicator::new(DedupKey::Uid).process(table()).unwrap();
        let bodies: Vec<_> = out.records.iter().map(|r| r.body.as_deref().unwrap()).collect();
        assert_eq!(bodies, vec!["first", "second", "third"]);
    }

    #[test]
    fn title_match_is_exact() {
        let table = ArticleTable::from_records(vec![
            ArticleRecord::new("http://a.com/1", Some("Same"), Some("b")),
            ArticleRecord::new("http://a.com/2", Some("same"), Some("b")),
            ArticleRecord::new("http://a.com/3", Some("Same "), Some("b")),
        ]);
        let out = Deduplicator::new(DedupKey::Title).process(table).unwrap();
        assert_eq!(out.len(), 3);
    }

    #[test]
    fn missing_titles_count_as_equal() {
        let table = ArticleTable::from_records(vec![
            ArticleRecord::new("http://a.com/", None, Some("b")),
            ArticleRecord::new("http://b.com/", None, Some("b")),
        ]);
        let out = Deduplicator::new(DedupKey::Title).process(table).unwrap();
        assert_eq!(out.len(), 1);
        assert_eq!(out.records[0].url, "http://a.com/");
    }
}
