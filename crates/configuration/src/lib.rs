use crate::error::ConfigError;
use std::path::Path;

// Declare the modules that make up this crate.
pub mod error;
pub mod settings;

// Re-export the core types to provide a clean public API.
pub use settings::{BonusTiers, ReportConfig, ReportSettings, UnknownReferencePolicy};

/// Upper bound for `report.decimal_places`.
const MAX_DECIMAL_PLACES: u32 = 10;

/// Loads the report configuration.
///
/// With an explicit `path` the file must exist. Without one, `config.toml` in the
/// working directory is used if present and the built-in defaults otherwise.
/// `SALES_REPORT__<SECTION>__<KEY>` environment variables override both.
pub fn load_config(path: Option<&Path>) -> Result<ReportConfig, ConfigError> {
    let file = match path {
        Some(path) => config::File::from(path).required(true),
        None => config::File::with_name("config.toml").required(false),
    };

    let builder = config::Config::builder()
        .add_source(file)
        .add_source(
            config::Environment::with_prefix("SALES_REPORT")
                .prefix_separator("__")
                .separator("__"),
        )
        .build()?;

    let config = builder.try_deserialize::<ReportConfig>()?;
    validate(&config)?;

    tracing::debug!(?config, "Report configuration loaded.");
    Ok(config)
}

/// Rejects settings that would make the report meaningless.
pub fn validate(config: &ReportConfig) -> Result<(), ConfigError> {
    if config.report.top_products_limit == 0 {
        return Err(ConfigError::ValidationError(
            "report.top_products_limit must be greater than 0".to_string(),
        ));
    }
    if config.report.decimal_places > MAX_DECIMAL_PLACES {
        return Err(ConfigError::ValidationError(format!(
            "report.decimal_places must be at most {MAX_DECIMAL_PLACES}"
        )));
    }

    let tiers = &config.bonus;
    for (name, rate) in [
        ("top_rate", tiers.top_rate),
        ("runner_up_rate", tiers.runner_up_rate),
        ("standard_rate", tiers.standard_rate),
        ("last_place_rate", tiers.last_place_rate),
    ] {
        if rate.is_sign_negative() || rate > rust_decimal::Decimal::ONE {
            return Err(ConfigError::ValidationError(format!(
                "bonus.{name} must be between 0 and 1, got {rate}"
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use std::fs;
    use tempfile::TempDir;

    fn write_config(contents: &str) -> (TempDir, std::path::PathBuf) {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("report.toml");
        fs::write(&path, contents).unwrap();
        (dir, path)
    }

    #[test]
    fn defaults_match_the_standard_report() {
        let config = ReportConfig::default();
        assert_eq!(config.report.top_products_limit, 10);
        assert_eq!(config.report.decimal_places, 2);
        assert_eq!(config.report.unknown_references, UnknownReferencePolicy::Fail);
        assert_eq!(config.bonus.top_rate, dec!(0.15));
        assert_eq!(config.bonus.runner_up_rate, dec!(0.10));
        assert_eq!(config.bonus.standard_rate, dec!(0.05));
        assert_eq!(config.bonus.last_place_rate, dec!(0));
    }

    #[test]
    fn partial_file_keeps_defaults_for_missing_keys() {
        let (_dir, path) = write_config(
            r#"
[report]
unknown_references = "skip"

[bonus]
top_rate = "0.2"
"#,
        );

        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.report.unknown_references, UnknownReferencePolicy::Skip);
        assert_eq!(config.report.top_products_limit, 10);
        assert_eq!(config.bonus.top_rate, dec!(0.2));
        assert_eq!(config.bonus.standard_rate, dec!(0.05));
    }

    #[test]
    fn explicit_path_must_exist() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope.toml");
        assert!(matches!(
            load_config(Some(&missing)),
            Err(ConfigError::LoadError(_))
        ));
    }

    #[test]
    fn zero_top_products_limit_is_rejected() {
        let (_dir, path) = write_config("[report]\ntop_products_limit = 0\n");
        assert!(matches!(
            load_config(Some(&path)),
            Err(ConfigError::ValidationError(_))
        ));
    }

    #[test]
    fn rates_outside_unit_interval_are_rejected() {
        let mut config = ReportConfig::default();
        config.bonus.runner_up_rate = dec!(1.5);
        assert!(validate(&config).is_err());

        config.bonus.runner_up_rate = dec!(-0.1);
        assert!(validate(&config).is_err());
    }
}
