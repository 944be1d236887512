use cartline_catalog::{Catalog, CatalogError, ProductSeed};
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub catalog: CatalogConfig,
    pub session: SessionConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct CatalogConfig {
    pub products: Vec<ProductSeed>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            products: Catalog::default_seeds(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct SessionConfig {
    /// Offer the remove path on the add/remove menu entry
    pub allow_remove: bool,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct LoggingConfig {
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_filter(),
        }
    }
}

fn default_filter() -> String {
    "warn".to_string()
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());
        Self::load_from("config", &run_mode)
    }

    /// Layer `<dir>/default`, `<dir>/<run_mode>`, `<dir>/local` and then
    /// `CARTLINE_*` environment variables. Every file is optional.
    pub fn load_from(dir: &str, run_mode: &str) -> Result<Self, config::ConfigError> {
        let s = config::Config::builder()
            .add_source(config::File::with_name(&format!("{}/default", dir)).required(false))
            .add_source(config::File::with_name(&format!("{}/{}", dir, run_mode)).required(false))
            // Not checked in
            .add_source(config::File::with_name(&format!("{}/local", dir)).required(false))
            // Eg. `CARTLINE_SESSION__ALLOW_REMOVE=true`
            .add_source(
                config::Environment::with_prefix("CARTLINE")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        s.try_deserialize()
    }

    pub fn catalog(&self) -> Result<Catalog, CatalogError> {
        Catalog::from_seeds(self.catalog.products.iter().cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::{File, FileFormat};

    fn from_toml(text: &str) -> Config {
        config::Config::builder()
            .add_source(File::from_str(text, FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap()
    }

    #[test]
    fn test_defaults_without_sources() {
        let config = from_toml("");
        assert_eq!(config, Config::default());
        assert!(!config.session.allow_remove);
        assert_eq!(config.logging.filter, "warn");
        assert_eq!(config.catalog().unwrap(), Catalog::default());
    }

    #[test]
    fn test_overrides() {
        let config = from_toml(
            r#"
            [session]
            allow_remove = true

            [[catalog.products]]
            name = "Scarf"
            price = "12.5"
            "#,
        );

        assert!(config.session.allow_remove);
        let catalog = config.catalog().unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.listing().next().unwrap(), "1. Scarf - $12.5");
    }

    #[test]
    fn test_missing_directory_falls_back_to_defaults() {
        let config = Config::load_from("does/not/exist", "test").unwrap();
        assert_eq!(config.catalog.products, Catalog::default_seeds());
    }
}
