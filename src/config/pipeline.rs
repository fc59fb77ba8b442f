use crate::error::{PipelineError, Result};
use crate::utils::text::{StopWordLanguage, StopWords};
use serde::Deserialize;
use std::fs; // For reading the file
use std::path::Path;

/// Which column the deduplicator compares.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum DedupKey {
    /// Exact article title. Distinct urls sharing a title collapse into one row.
    #[default]
    Title,
    /// Url digest. Only rows scraped from the same url collapse.
    Uid,
}

impl DedupKey {
    pub fn column_name(&self) -> &'static str {
        match self {
            DedupKey::Title => crate::data_model::TITLE_COLUMN,
            DedupKey::Uid => crate::data_model::UID_COLUMN,
        }
    }
}

/// Stop-word selection for the token counter.
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct StopWordsConfig {
    pub language: StopWordLanguage,
    /// Words added on top of the language list (or of `custom`).
    pub extra: Vec<String>,
    /// Replaces the bundled language list entirely when present.
    pub custom: Option<Vec<String>>,
}

impl StopWordsConfig {
    pub fn build(&self) -> StopWords {
        let base = match &self.custom {
            Some(words) => StopWords::from_words(words.iter().map(String::as_str)),
            None => StopWords::for_language(self.language),
        };
        base.with_extra(self.extra.iter().map(String::as_str))
    }
}

/// Settings for one cleaning run, read from YAML. Every field has a default,
/// so an empty file (or no file at all) yields the stock Spanish pipeline.
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct CleaningConfig {
    pub stop_words: StopWordsConfig,
    pub dedup_key: DedupKey,
    /// Separator between the newspaper uid and the rest of the input file name.
    pub source_delimiter: String,
    /// Prefix put in front of the input file name to name the output file.
    pub output_prefix: String,
    pub csv_delimiter: char,
    /// Count rows whose url had no parseable host as incomplete.
    pub treat_empty_host_as_missing: bool,
}

impl Default for CleaningConfig {
    fn default() -> Self {
        CleaningConfig {
            stop_words: StopWordsConfig::default(),
            dedup_key: DedupKey::Title,
            source_delimiter: "_".to_string(),
            output_prefix: "clean_".to_string(),
            csv_delimiter: ',',
            treat_empty_host_as_missing: false,
        }
    }
}

impl CleaningConfig {
    pub fn validate(&self) -> Result<()> {
        if self.source_delimiter.is_empty() {
            return Err(PipelineError::ConfigError(
                "source_delimiter must not be empty".to_string(),
            ));
        }
        if self.output_prefix.is_empty() {
            return Err(PipelineError::ConfigError(
                "output_prefix must not be empty, the output would overwrite the input".to_string(),
            ));
        }
        if !self.csv_delimiter.is_ascii() {
            return Err(PipelineError::ConfigError(format!(
                "csv_delimiter must be a single ASCII character, got '{}'",
                self.csv_delimiter
            )));
        }
        if let Some(custom) = &self.stop_words.custom {
            if custom.iter().any(|w| w.trim().is_empty()) {
                return Err(PipelineError::ConfigError(
                    "stop_words.custom must not contain blank entries".to_string(),
                ));
            }
        }
        Ok(())
    }

    /// The CSV delimiter as the byte the `csv` crate expects. Only valid after `validate`.
    pub fn csv_delimiter_byte(&self) -> u8 {
        self.csv_delimiter as u8
    }
}

/// Loads, parses and validates the cleaning configuration YAML file.
pub fn load_cleaning_config<P: AsRef<Path>>(config_path: P) -> Result<CleaningConfig> {
    let path_ref = config_path.as_ref();
    let config_content = fs::read_to_string(path_ref).map_err(|e| {
        PipelineError::ConfigError(format!(
            "Failed to read cleaning config file '{}': {}",
            path_ref.display(),
            e
        ))
    })?;

    // serde_yaml reads an empty document as unit, not as an empty map
    if config_content.trim().is_empty() {
        return Ok(CleaningConfig::default());
    }

    let config: CleaningConfig = serde_yaml::from_str(&config_content).map_err(|e| {
        PipelineError::ConfigError(format!(
            "Failed to parse cleaning config YAML from '{}': {}",
            path_ref.display(),
            e
        ))
    })?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_stock_pipeline() {
        let config = CleaningConfig::default();
        assert_eq!(config.dedup_key, DedupKey::Title);
        assert_eq!(config.source_delimiter, "_");
        assert_eq!(config.output_prefix, "clean_");
        assert_eq!(config.csv_delimiter_byte(), b',');
        assert!(!config.treat_empty_host_as_missing);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_yaml_keeps_remaining_defaults() {
        let config: CleaningConfig = serde_yaml::from_str("dedup_key: uid\n").unwrap();
        assert_eq!(config.dedup_key, DedupKey::Uid);
        assert_eq!(config.output_prefix, "clean_");
    }

    #[test]
    fn custom_stop_words_replace_language_list() {
        let config = StopWordsConfig {
            language: StopWordLanguage::Spanish,
            extra: vec!["gato".to_string()],
            custom: Some(vec!["perro".to_string()]),
        };
        let stop_words = config.build();
        assert!(stop_words.contains("perro"));
        assert!(stop_words.contains("gato"));
        assert!(!stop_words.contains("el"));
    }

    #[test]
    fn validate_rejects_non_ascii_delimiter() {
        let config = CleaningConfig {
            csv_delimiter: '§',
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(PipelineError::ConfigError(_))
        ));
    }
}
