use once_cell::sync::Lazy;
use regex::Regex;
use tracing::info;

use crate::data_model::ArticleTable;
use crate::error::Result;
use crate::executor::ProcessingStep;

static LINE_BREAKS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\n|\r)+").expect("static regex is valid"));

/// Deletes every run of `\n`/`\r`. Words on either side of a break are joined
/// without a space.
pub fn strip_line_breaks(body: &str) -> String {
    LINE_BREAKS.replace_all(body, "").into_owned()
}

pub struct BodySanitizer;

impl ProcessingStep for BodySanitizer {
    fn name(&self) -> &'static str {
        "BodySanitizer"
    }

    fn process(&self, mut table: ArticleTable) -> Result<ArticleTable> {
        info!("Clean invisible characters from body");
        for body in table.records.iter_mut().filter_map(|r| r.body.as_mut()) {
            if LINE_BREAKS.is_match(body) {
                *body = strip_line_breaks(body);
            }
        }
        Ok(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_model::ArticleRecord;

    #[test]
    fn line_breaks_are_removed() {
        assert_eq!(strip_line_breaks("uno\ndos\r\n\r\ntres"), "unodostres");
        assert_eq!(strip_line_breaks("sin saltos"), "sin saltos");
        assert_eq!(strip_line_breaks("\n\r"), "");
    }

    #[test]
    fn other_whitespace_is_untouched() {
        assert_eq!(strip_line_breaks("a\t b  c\n"), "a\t b  c");
    }

    #[test]
    fn missing_bodies_stay_missing() {
        let table = ArticleTable::from_records(vec![
            ArticleRecord::new("http://a.com/1", Some("t"), Some("línea\nuno")),
            ArticleRecord::new("http://a.com/2", Some("t"), None),
        ]);
        let out = BodySanitizer.process(table).unwrap();
        assert_eq!(out.records[0].body.as_deref(), Some("líneauno"));
        assert_eq!(out.records[1].body, None);
    }
}
