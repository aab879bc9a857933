use crate::error::ConfigError;
use std::path::Path;

// Declare the modules that make up this crate.
pub mod error;
pub mod logging;
pub mod settings;

// Re-export the core types to provide a clean public API.
pub use logging::init_tracing;
pub use settings::{Config, DataSettings, HighlightSettings, LoggingSettings};

/// The file read when no explicit path is given.
pub const DEFAULT_CONFIG_FILE: &str = "promo.toml";

/// Prefix for environment overrides, e.g. `PROMO_DATA__SALES_PATH`.
const ENV_PREFIX: &str = "PROMO";

/// Loads the application configuration.
///
/// Built-in defaults are overlaid by the TOML file at `path` (skipped when it
/// does not exist) and then by `PROMO_<SECTION>__<KEY>` environment variables.
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    load_config_with_env(path, None)
}

/// Same as `load_config`, but reads overrides from `env` instead of the process
/// environment when it is `Some`.
pub fn load_config_with_env(
    path: &Path,
    env: Option<config::Map<String, String>>,
) -> Result<Config, ConfigError> {
    let builder = config::Config::builder()
        .add_source(config::File::from(path).required(false))
        .add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .source(env),
        )
        .build()?;

    let config = builder.try_deserialize::<Config>()?;
    validate(&config)?;

    tracing::debug!(?config, "Configuration loaded.");
    Ok(config)
}

fn validate(config: &Config) -> Result<(), ConfigError> {
    if config.data.promo_periods_path.as_os_str().is_empty() {
        return Err(ConfigError::ValidationError(
            "data.promo_periods_path must not be empty".to_string(),
        ));
    }
    if config.data.sales_path.as_os_str().is_empty() {
        return Err(ConfigError::ValidationError(
            "data.sales_path must not be empty".to_string(),
        ));
    }
    if config.highlights.stars == 0 && config.highlights.risks == 0 {
        return Err(ConfigError::ValidationError(
            "highlights must select at least one star or one risk".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_types::JoinKey;
    use std::io::Write;

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config.highlights.stars, 2);
        assert_eq!(config.highlights.risks, 2);
        assert_eq!(config.highlights.default_min_promos, 1);
        assert_eq!(config.data.join_key, JoinKey::DisplayName);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn file_overrides_selected_keys() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            "[data]\nsales_path = \"other/sales.csv\"\njoin_key = \"upc\"\n\n[highlights]\nstars = 3"
        )
        .unwrap();

        let config = load_config(file.path()).unwrap();
        assert_eq!(config.data.sales_path, Path::new("other/sales.csv"));
        assert_eq!(config.data.join_key, JoinKey::Upc);
        assert_eq!(config.highlights.stars, 3);
        // Untouched keys keep their defaults.
        assert_eq!(config.highlights.risks, 2);
        assert_eq!(config.data.promo_periods_path, Path::new("data/promo_period.csv"));
    }

    #[test]
    fn environment_overrides_file_and_defaults() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[highlights]\nstars = 5\nrisks = 4").unwrap();

        let env: config::Map<String, String> = [
            ("PROMO_DATA__SALES_PATH", "env/sales.csv"),
            ("PROMO_HIGHLIGHTS__STARS", "3"),
            ("OTHER_HIGHLIGHTS__RISKS", "9"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        let config = load_config_with_env(file.path(), Some(env)).unwrap();
        assert_eq!(config.data.sales_path, Path::new("env/sales.csv"));
        assert_eq!(config.highlights.stars, 3);
        // Unprefixed variables are ignored; the file value stands.
        assert_eq!(config.highlights.risks, 4);
        assert_eq!(config.data.promo_periods_path, Path::new("data/promo_period.csv"));
    }

    #[test]
    fn rejects_empty_highlight_selection() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[highlights]\nstars = 0\nrisks = 0").unwrap();

        let err = load_config(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }
}
