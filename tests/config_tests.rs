#[cfg(test)]
mod tests {
    use std::io::Write;
    use tempfile::NamedTempFile;
    use NewsCleaner::config::pipeline::*;
    use NewsCleaner::error::PipelineError;
    use NewsCleaner::utils::text::StopWordLanguage;

    // Helper to create a temporary config file with given content
    fn create_temp_config_file(content: &str) -> NamedTempFile {
        let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
        writeln!(temp_file, "{}", content).expect("Failed to write to temp file");
        temp_file
    }

    #[test]
    fn test_load_valid_config() {
        let yaml_content = r#"
stop_words:
  language: english
  extra: ["breaking", "news"]
dedup_key: uid
source_delimiter: "-"
output_prefix: "cleaned_"
csv_delimiter: ";"
treat_empty_host_as_missing: true
        "#;
        let temp_file = create_temp_config_file(yaml_content);
        let config_result = load_cleaning_config(temp_file.path());

        assert!(
            config_result.is_ok(),
            "Should load valid config: {:?}",
            config_result.err()
        );
        let config = config_result.unwrap();
        assert_eq!(config.stop_words.language, StopWordLanguage::English);
        assert_eq!(config.dedup_key, DedupKey::Uid);
        assert_eq!(config.source_delimiter, "-");
        assert_eq!(config.output_prefix, "cleaned_");
        assert_eq!(config.csv_delimiter_byte(), b';');
        assert!(config.treat_empty_host_as_missing);

        let stop_words = config.stop_words.build();
        assert!(stop_words.contains("the"));
        assert!(stop_words.contains("breaking"));
        assert!(!stop_words.contains("el"));
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let temp_file = create_temp_config_file("");
        let config = load_cleaning_config(temp_file.path()).unwrap();
        assert_eq!(config.dedup_key, DedupKey::Title);
        assert_eq!(config.stop_words.language, StopWordLanguage::Spanish);
        assert_eq!(config.output_prefix, "clean_");
    }

    #[test]
    fn test_load_config_file_not_found() {
        let result = load_cleaning_config("non_existent_config.yaml");
        assert!(result.is_err());
        match result.err().unwrap() {
            PipelineError::ConfigError(msg) => {
                assert!(msg.contains("Failed to read cleaning config file"));
                assert!(msg.contains("non_existent_config.yaml"));
            }
            _ => panic!("Expected ConfigError for non-existent file"),
        }
    }

    #[test]
    fn test_load_unknown_dedup_key() {
        let temp_file = create_temp_config_file("dedup_key: body\n");
        match load_cleaning_config(temp_file.path()) {
            Err(PipelineError::ConfigError(msg)) => {
                assert!(msg.contains("Failed to parse cleaning config YAML"));
            }
            other => panic!("Expected ConfigError for unknown dedup key, got {:?}", other),
        }
    }

    #[test]
    fn test_load_rejects_empty_output_prefix() {
        let temp_file = create_temp_config_file("output_prefix: \"\"\n");
        match load_cleaning_config(temp_file.path()) {
            Err(PipelineError::ConfigError(msg)) => assert!(msg.contains("output_prefix")),
            other => panic!("Expected ConfigError for empty prefix, got {:?}", other),
        }
    }
}
