use crate::data_model::ArticleTable;

/// Per-row eligibility flags, aligned index-for-index with `ArticleTable::records`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowMask {
    flags: Vec<bool>,
}

impl RowMask {
    pub fn from_flags(flags: Vec<bool>) -> Self {
        RowMask { flags }
    }

    pub fn is_set(&self, row: usize) -> bool {
        self.flags.get(row).copied().unwrap_or(false)
    }

    pub fn len(&self) -> usize {
        self.flags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }

    pub fn count_set(&self) -> usize {
        self.flags.iter().filter(|&&flag| flag).count()
    }
}

/// Rows whose non-feature columns are all present. Feature columns are
/// computed only for these rows; every other row gets a missing value in
/// every feature column, so all features stay aligned with the table.
pub fn eligible_rows(table: &ArticleTable) -> RowMask {
    RowMask::from_flags(
        table
            .records
            .iter()
            .map(|record| record.has_complete_source_fields())
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_model::ArticleRecord;

    fn enriched(url: &str, title: Option<&str>, body: Option<&str>) -> ArticleRecord {
        let mut record = ArticleRecord::new(url, title, body);
        record.newspaper_uid = Some("site".into());
        record.host = Some("a.com".into());
        record.uid = Some("uid".into());
        record
    }

    #[test]
    fn mask_flags_rows_with_any_missing_source_field() {
        let table = ArticleTable::from_records(vec![
            enriched("http://a.com/1", Some("t"), Some("b")),
            enriched("http://a.com/2", None, Some("b")),
            enriched("http://a.com/3", Some("t"), None),
            ArticleRecord::new("http://a.com/4", Some("t"), Some("b")),
        ]);
        let mask = eligible_rows(&table);
        assert_eq!(mask.len(), 4);
        assert!(mask.is_set(0));
        assert!(!mask.is_set(1));
        assert!(!mask.is_set(2));
        assert!(!mask.is_set(3));
        assert_eq!(mask.count_set(), 1);
    }

    #[test]
    fn out_of_range_rows_are_not_set() {
        let mask = RowMask::from_flags(vec![true]);
        assert!(!mask.is_set(5));
    }
}
