use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use foodgram_shopping::MergePolicy;
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
    #[serde(default)]
    pub shopping: ShoppingConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct ShoppingConfig {
    /// `name-and-unit` keeps different units apart, `name` merges them under the first unit.
    #[serde(default)]
    pub merge_policy: MergePolicy,
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (FOODGRAM__DATABASE__URL, etc.)
    /// 2. Config file specified by path
    /// 3. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder()
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 8000)?
            .set_default("database.url", "sqlite:foodgram.db")?
            .set_default("database.max_connections", 5)?;

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("FOODGRAM")
                .separator("__")
                .try_parsing(true),
        );

        if let Ok(database_url) = env::var("DATABASE_URL") {
            builder = builder.set_override("database.url", database_url)?;
        }

        builder.build()?.try_deserialize()
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.database.max_connections < 1 {
            return Err("Database max_connections must be at least 1".to_string());
        }
        if self.server.port == 0 {
            return Err("Server port must be greater than 0".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::FileFormat;

    fn config(port: u16, max_connections: u32) -> Config {
        Config {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port,
            },
            database: DatabaseConfig {
                url: "sqlite:test.db".to_string(),
                max_connections,
            },
            observability: ObservabilityConfig::default(),
            shopping: ShoppingConfig::default(),
        }
    }

    #[test]
    fn test_validation_zero_port() {
        assert!(config(0, 5).validate().is_err());
    }

    #[test]
    fn test_validation_zero_connections() {
        assert!(config(8000, 0).validate().is_err());
    }

    #[test]
    fn test_validation_valid_config() {
        assert!(config(8000, 5).validate().is_ok());
    }

    #[test]
    fn test_merge_policy_from_toml() {
        let toml = r#"
            [server]
            host = "0.0.0.0"
            port = 8080

            [database]
            url = "sqlite:foodgram.db"
            max_connections = 4

            [shopping]
            merge_policy = "name"
        "#;

        let config: Config = ConfigBuilder::builder()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(config.shopping.merge_policy, MergePolicy::Name);
        assert_eq!(config.observability.log_level, "info");
        assert_eq!(config.server.port, 8080);
    }

    #[test]
    fn test_merge_policy_defaults_to_name_and_unit() {
        let toml = r#"
            [server]
            host = "0.0.0.0"
            port = 8080

            [database]
            url = "sqlite:foodgram.db"
            max_connections = 4
        "#;

        let config: Config = ConfigBuilder::builder()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(config.shopping.merge_policy, MergePolicy::NameAndUnit);
    }
}
