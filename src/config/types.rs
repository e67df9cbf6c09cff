//! The configuration structs used to build the AppConfig, and their impls.
use std::{
    net::{Ipv4Addr, SocketAddr},
    path::Path,
};

use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::Deserialize;
use strum_macros::AsRefStr;

use crate::config::{ConfigError, ConfigResult};

/// Prefix for environment variables that override file configuration.
/// Nested keys are separated by `__`, e.g. `APP_NET_CONFIG__APP_PORT=9000`.
pub const ENV_PREFIX: &str = "APP_";

// ###################################
// ->   STRUCTS
// ###################################
#[derive(AsRefStr, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Local,
    Production,
}

#[derive(Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    pub net_config: NetConfig,
}

#[derive(Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct NetConfig {
    pub host: [u8; 4],
    pub app_port: u16,
}

// ###################################
// ->   IMPLs
// ###################################
impl AppConfig {
    /// Layers `base.toml`, the environment specific file and `APP_` prefixed env variables.
    pub fn load(config_dir: &Path, environment: Environment) -> ConfigResult<Self> {
        let base_file = config_dir.join("base.toml");
        let env_file = config_dir.join(environment.file_name());

        for file in [&base_file, &env_file] {
            if !file.is_file() {
                return Err(ConfigError::MissingFile(file.clone()));
            }
        }

        let figment = Figment::new()
            .merge(Toml::file(base_file))
            .merge(Toml::file(env_file))
            .merge(Env::prefixed(ENV_PREFIX).split("__"));

        Self::from_figment(figment)
    }

    pub fn from_figment(figment: Figment) -> ConfigResult<Self> {
        Ok(figment.extract()?)
    }
}

impl NetConfig {
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::from((Ipv4Addr::from(self.host), self.app_port))
    }
}

impl Environment {
    pub fn file_name(&self) -> String {
        format!("{}.toml", self.as_ref().to_lowercase())
    }
}

// ###################################
// ->   TRY FROMs
// ###################################

impl TryFrom<String> for Environment {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.to_ascii_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "production" => Ok(Self::Production),
            _ => Err(Self::Error::StringToEnvironmentFail(value)),
        }
    }
}

// ###################################
// ->   TESTS
// ###################################
