// src/pipeline/enrich/mod.rs

mod body_sanitizer;
mod host_extractor;
mod identity;
mod source_tagger;
mod title_repairer;

pub use body_sanitizer::{strip_line_breaks, BodySanitizer};
pub use host_extractor::{extract_host, HostExtractor};
pub use identity::{url_uid, IdentityGenerator};
pub use source_tagger::{newspaper_uid_from_path, SourceTagger};
pub use title_repairer::{title_from_url, TitleRepairer};
