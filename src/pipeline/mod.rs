// src/pipeline/mod.rs

pub mod enrich;
pub mod filters;
pub mod readers;
pub mod token;
pub mod writers;

use std::path::Path;

/// On-disk layout of an input or output table, chosen by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableFormat {
    Csv,
    Parquet,
}

impl TableFormat {
    /// `.parquet` files are Parquet; anything else is delimited text.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("parquet") => TableFormat::Parquet,
            _ => TableFormat::Csv,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_follows_extension() {
        assert_eq!(TableFormat::from_path(Path::new("a_1.parquet")), TableFormat::Parquet);
        assert_eq!(TableFormat::from_path(Path::new("a_1.PARQUET")), TableFormat::Parquet);
        assert_eq!(TableFormat::from_path(Path::new("a_1.csv")), TableFormat::Csv);
        assert_eq!(TableFormat::from_path(Path::new("a_1.tsv")), TableFormat::Csv);
        assert_eq!(TableFormat::from_path(Path::new("a_1")), TableFormat::Csv);
    }
}
