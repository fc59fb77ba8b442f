use std::collections::HashSet;

use md5::{Digest, Md5};
use tracing::{debug, info};

use crate::data_model::{ArticleTable, TableIndex};
use crate::error::Result;
use crate::executor::ProcessingStep;

/// Lower-case hex MD5 digest of the UTF-8 bytes of `url`.
///
/// MD5 is used for its fixed-length deterministic output, not for security.
pub fn url_uid(url: &str) -> String {
    let mut hasher = Md5::new();
    hasher.update(url.as_bytes());
    hex::encode(hasher.finalize())
}

/// Computes each row's `uid` and makes it the table's primary key.
///
/// Rows sharing a url share a uid; they are not removed here.
pub struct IdentityGenerator;

impl ProcessingStep for IdentityGenerator {
    fn name(&self) -> &'static str {
        "IdentityGenerator"
    }

    fn process(&self, mut table: ArticleTable) -> Result<ArticleTable> {
        info!("Generating uids for each row");
        let mut seen = HashSet::with_capacity(table.len());
        let mut collisions = 0usize;
        for record in &mut table.records {
            let uid = url_uid(&record.url);
            if !seen.insert(uid.clone()) {
                collisions += 1;
            }
            record.uid = Some(uid);
        }
        if collisions > 0 {
            debug!(collisions, "Rows share a uid because their urls are identical");
        }
        table.index = Some(TableIndex::Uid);
        Ok(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_model::ArticleRecord;

    #[test]
    fn uid_is_md5_hex_of_url() {
        assert_eq!(url_uid(""), "d41d8cd98f00b204e9800998ecf8427e");
        assert_eq!(url_uid("abc"), "900150983cd24fb0d6963f7d28e17f72");
    }

    #[test]
    fn uid_is_deterministic_and_fixed_length() {
        let a = url_uid("https://example.com/news/2020/foo-bar-baz");
        let b = url_uid("https://example.com/news/2020/foo-bar-baz");
        assert_eq!(a, b);
        assert_eq!(a.len(), 32);
        assert_ne!(a, url_uid("https://example.com/news/2020/foo-bar-baz/"));
    }

    #[test]
    fn identical_urls_collide_but_survive() {
        let table = ArticleTable::from_records(vec![
            ArticleRecord::new("http://a.com/x", Some("one"), Some("b")),
            ArticleRecord::new("http://a.com/x", Some("two"), Some("b")),
        ]);
        let out = IdentityGenerator.process(table).unwrap();
        assert_eq!(out.len(), 2);
        assert_eq!(out.records[0].uid, out.records[1].uid);
        assert_eq!(out.index, Some(TableIndex::Uid));
    }
}
