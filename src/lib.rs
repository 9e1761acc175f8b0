use config::{Config, ConfigError, Source};
use serde::Deserialize;

pub mod domain;
pub mod infrastructure;

#[derive(Clone, Debug, Deserialize)]
pub struct KokyakuConfig {
    pub server: Server,
    pub logger: Logger,
}

impl KokyakuConfig {
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(config::File::with_name("kokyaku.toml").required(false))
    }

    fn load_from<S>(file: S) -> Result<Self, ConfigError>
    where
        S: Source + Send + Sync + 'static,
    {
        Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8080)?
            .set_default("logger.level", "INFO")?
            .add_source(file)
            .add_source(config::Environment::with_prefix("KOKYAKU").separator("_"))
            .build()?
            .try_deserialize::<KokyakuConfig>()
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct Server {
    pub host: String,
    pub port: u16,
    pub tls: Option<Tls>,
}

/// PEM形式の証明書と秘密鍵のパス
#[derive(Clone, Debug, Deserialize)]
pub struct Tls {
    pub cert: String,
    pub key: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Logger {
    pub level: Level,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub enum Level {
    TRACE,
    DEBUG,
    INFO,
    WARN,
    ERROR,
}

impl From<&Level> for tracing::Level {
    fn from(value: &Level) -> Self {
        match value {
            Level::TRACE => tracing::Level::TRACE,
            Level::DEBUG => tracing::Level::DEBUG,
            Level::INFO => tracing::Level::INFO,
            Level::WARN => tracing::Level::WARN,
            Level::ERROR => tracing::Level::ERROR,
        }
    }
}

#[cfg(test)]
mod tests {
    use config::{File, FileFormat};

    use super::{KokyakuConfig, Level};

    #[test]
    fn test_defaults() {
        let config = KokyakuConfig::load_from(File::from_str("", FileFormat::Toml)).unwrap();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
        assert!(config.server.tls.is_none());
        assert_eq!(config.logger.level, Level::INFO);
    }

    #[test]
    fn test_file_overrides_defaults() {
        let toml = r#"
            [server]
            port = 3000

            [server.tls]
            cert = "localhost.pem"
            key = "localhost.key"

            [logger]
            level = "DEBUG"
        "#;
        let config = KokyakuConfig::load_from(File::from_str(toml, FileFormat::Toml)).unwrap();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 3000);
        let tls = config.server.tls.unwrap();
        assert_eq!(tls.cert, "localhost.pem");
        assert_eq!(tls.key, "localhost.key");
        assert_eq!(config.logger.level, Level::DEBUG);
        assert_eq!(tracing::Level::from(&config.logger.level), tracing::Level::DEBUG);
    }
}
