#[cfg(test)]
mod tests {
    use harvestlog::api::harvester::{BackendConfig, DEFAULT_API_URL, DEFAULT_TIMEOUT_SECS};
    use harvestlog::libs::config::{Config, ExportConfig, LedgerConfig, API_URL_ENV, CONFIG_FILE_NAME};
    use harvestlog::libs::data_storage::DataStorage;
    use harvestlog::libs::ledger::{RoundingPolicy, WageLedger};
    use std::env;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct ConfigTestContext {
        temp_dir: TempDir,
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            ConfigTestContext {
                temp_dir: tempfile::tempdir().unwrap(),
            }
        }
    }

    impl ConfigTestContext {
        fn storage(&self) -> DataStorage {
            DataStorage::at(self.temp_dir.path())
        }
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.ledger(), WageLedger::new(RoundingPolicy::PerStep));
        assert_eq!(config.export_dir(), None);

        let backend = BackendConfig::default();
        assert_eq!(backend.api_url, DEFAULT_API_URL);
        assert_eq!(backend.timeout_secs, DEFAULT_TIMEOUT_SECS);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_missing_file_reads_as_default(ctx: &mut ConfigTestContext) {
        let config = Config::read_from(&ctx.storage()).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_save_and_read_back(ctx: &mut ConfigTestContext) {
        let config = Config {
            backend: Some(BackendConfig {
                api_url: "http://localhost:8080".to_string(),
                timeout_secs: 5,
            }),
            ledger: Some(LedgerConfig {
                rounding: RoundingPolicy::FinalOnly,
            }),
            export: Some(ExportConfig {
                output_dir: Some("/tmp/reports".to_string()),
            }),
        };

        config.save_to(&ctx.storage()).unwrap();

        let text = fs::read_to_string(ctx.temp_dir.path().join(CONFIG_FILE_NAME)).unwrap();
        assert!(text.contains("\"final-only\""));

        let read = Config::read_from(&ctx.storage()).unwrap();
        assert_eq!(read, config);
        assert_eq!(read.ledger(), WageLedger::new(RoundingPolicy::FinalOnly));
        assert_eq!(read.export_dir(), Some(PathBuf::from("/tmp/reports")));
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_partial_file(ctx: &mut ConfigTestContext) {
        fs::write(ctx.temp_dir.path().join(CONFIG_FILE_NAME), r#"{ "ledger": {}, "export": { "output_dir": "  " } }"#)
            .unwrap();

        let config = Config::read_from(&ctx.storage()).unwrap();

        assert_eq!(config.backend, None);
        assert_eq!(config.ledger(), WageLedger::default());
        assert_eq!(config.export_dir(), None);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_malformed_file_is_an_error(ctx: &mut ConfigTestContext) {
        fs::write(ctx.temp_dir.path().join(CONFIG_FILE_NAME), "not json").unwrap();
        assert!(Config::read_from(&ctx.storage()).is_err());
    }

    #[test]
    fn test_api_url_from_environment() {
        let config = Config {
            backend: Some(BackendConfig {
                api_url: "http://configured".to_string(),
                timeout_secs: 5,
            }),
            ..Config::default()
        };

        env::set_var(API_URL_ENV, " http://from-env:9000 ");
        let overridden = config.backend_config();
        env::set_var(API_URL_ENV, "   ");
        let blank = config.backend_config();
        env::remove_var(API_URL_ENV);
        let plain = config.backend_config();

        assert_eq!(overridden.api_url, "http://from-env:9000");
        assert_eq!(overridden.timeout_secs, 5);
        assert_eq!(blank.api_url, "http://configured");
        assert_eq!(plain.api_url, "http://configured");
    }
}
