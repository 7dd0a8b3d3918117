//! Configuration loading and typed config structures for the Hearth
//! server.
//!
//! The configuration lives in `hearth-config.yaml` next to the binary's
//! working directory unless another path is given on the command line.
//! Every field has a default, so an empty or missing file is valid.

use std::path::Path;

use hearth_world::StartingWorldOptions;
use serde::Deserialize;

/// Default configuration file name.
pub const DEFAULT_CONFIG_PATH: &str = "hearth-config.yaml";

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },

    /// An environment override held a value of the wrong type.
    #[error("invalid value {value:?} for {variable}")]
    InvalidOverride {
        /// The environment variable.
        variable: &'static str,
        /// The value it held.
        value: String,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Top-level server configuration.
///
/// Mirrors the structure of `hearth-config.yaml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct HearthConfig {
    /// Listener settings.
    #[serde(default)]
    pub server: ServerConfig,

    /// Starting world settings.
    #[serde(default)]
    pub world: WorldConfig,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl HearthConfig {
    /// Load configuration from a YAML file at the given path.
    ///
    /// Environment variables override YAML values:
    /// - `HEARTH_HOST` overrides `server.host`
    /// - `HEARTH_PORT` overrides `server.port`
    /// - `HEARTH_WIZARD_PASSWORD` overrides `world.wizard_password`
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read,
    /// [`ConfigError::Yaml`] if the content is not valid YAML, or
    /// [`ConfigError::InvalidOverride`] for a malformed override.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let mut config = Self::parse(&contents)?;
        config.apply_overrides(|name| std::env::var(name).ok())?;
        Ok(config)
    }

    /// Load from `path` if it exists, otherwise start from defaults.
    /// Environment overrides apply either way.
    ///
    /// # Errors
    ///
    /// See [`HearthConfig::from_file`].
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            return Self::from_file(path);
        }
        let mut config = Self::default();
        config.apply_overrides(|name| std::env::var(name).ok())?;
        Ok(config)
    }

    /// Parse configuration from a YAML string. No overrides are applied.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        // An empty document deserializes to unit, not to an empty map.
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yml::from_str(yaml)?)
    }

    /// Apply overrides from `lookup`, which maps a variable name to its
    /// value when set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidOverride`] if `HEARTH_PORT` is not a
    /// port number.
    pub fn apply_overrides(
        &mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<(), ConfigError> {
        if let Some(host) = lookup("HEARTH_HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("HEARTH_PORT") {
            let Ok(parsed) = port.trim().parse() else {
                return Err(ConfigError::InvalidOverride {
                    variable: "HEARTH_PORT",
                    value: port,
                });
            };
            self.server.port = parsed;
        }
        if let Some(password) = lookup("HEARTH_WIZARD_PASSWORD") {
            self.world.wizard_password = Some(password);
        }
        Ok(())
    }
}

/// Listener configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ServerConfig {
    /// The host address to bind to.
    #[serde(default = "default_host")]
    pub host: String,

    /// The TCP port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Text sent to every new connection before anything else.
    #[serde(default = "default_banner")]
    pub banner: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            banner: default_banner(),
        }
    }
}

impl ServerConfig {
    /// `host:port` as a bind address string.
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Starting world configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct WorldConfig {
    /// Name of the room new players arrive in.
    #[serde(default = "default_lobby_name")]
    pub lobby_name: String,

    /// Description of that room.
    #[serde(default)]
    pub lobby_description: String,

    /// Name of the bootstrap wizard.
    #[serde(default = "default_wizard_name")]
    pub wizard_name: String,

    /// Password of the bootstrap wizard. No wizard is created without one.
    #[serde(default)]
    pub wizard_password: Option<String>,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            lobby_name: default_lobby_name(),
            lobby_description: String::new(),
            wizard_name: default_wizard_name(),
            wizard_password: None,
        }
    }
}

impl WorldConfig {
    /// Options for seeding the world.
    pub fn starting_world_options(&self) -> StartingWorldOptions {
        StartingWorldOptions {
            lobby_name: self.lobby_name.clone(),
            lobby_description: self.lobby_description.clone(),
            wizard_name: self.wizard_name.clone(),
            wizard_password: self.wizard_password.clone(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error). `RUST_LOG` wins when
    /// set.
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_owned()
}

const fn default_port() -> u16 {
    4201
}

fn default_banner() -> String {
    "Welcome to Hearth!\nType \"connect <name> <password>\" or \"newplayer <name> <password>\"."
        .to_owned()
}

fn default_lobby_name() -> String {
    "The Lobby".to_owned()
}

fn default_wizard_name() -> String {
    "Wizard".to_owned()
}

fn default_log_level() -> String {
    "info".to_owned()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_gives_defaults() {
        let config = HearthConfig::parse("").unwrap();
        assert_eq!(config, HearthConfig::default());
        assert_eq!(config.server.address(), "0.0.0.0:4201");
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let yaml = "server:\n  port: 5000\nworld:\n  lobby_name: Town Square\n  wizard_password: hunter2\n";
        let config = HearthConfig::parse(yaml).unwrap();
        assert_eq!(config.server.port, 5000);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.world.lobby_name, "Town Square");
        assert_eq!(config.world.wizard_name, "Wizard");

        let options = config.world.starting_world_options();
        assert_eq!(options.wizard_password.as_deref(), Some("hunter2"));
    }

    #[test]
    fn malformed_yaml_is_an_error() {
        let err = HearthConfig::parse("server: [unclosed").unwrap_err();
        assert!(matches!(err, ConfigError::Yaml { .. }));
    }

    #[test]
    fn overrides_replace_values() {
        let mut config = HearthConfig::default();
        config
            .apply_overrides(|name| match name {
                "HEARTH_HOST" => Some("127.0.0.1".to_owned()),
                "HEARTH_PORT" => Some("6000".to_owned()),
                "HEARTH_WIZARD_PASSWORD" => Some("sesame".to_owned()),
                _ => None,
            })
            .unwrap();
        assert_eq!(config.server.address(), "127.0.0.1:6000");
        assert_eq!(config.world.wizard_password.as_deref(), Some("sesame"));
    }

    #[test]
    fn bad_port_override_is_rejected() {
        let mut config = HearthConfig::default();
        let err = config
            .apply_overrides(|name| (name == "HEARTH_PORT").then(|| "lots".to_owned()))
            .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidOverride { variable: "HEARTH_PORT", .. }
        ));
        assert_eq!(config.server.port, 4201);
    }
}
