/*
 * Responsibility
 * - 環境変数の読み込み (listen port, key/loader paths, credentials file)
 * - 設定値のバリデーション (不足なら起動失敗)
 * - handler に渡す KeyConfig は起動後に変更しない
 */
use std::ffi::OsString;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnv {
    Development,
    Production,
}

impl AppEnv {
    pub fn from_env() -> Self {
        Self::parse(&std::env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()))
    }

    fn parse(value: &str) -> Self {
        match value.to_ascii_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            _ => Self::Development,
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing configuration: {0}")]
    Missing(&'static str),
    #[error("invalid configuration: {0}")]
    Invalid(&'static str),
}

/// Files served by the handlers.
///
/// The public key is not configured separately: it is the sibling of
/// `ssh_key` with a `.pub` suffix, the layout `ssh-keygen` produces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyConfig {
    pub loader_script: PathBuf,
    pub ssh_key: PathBuf,
}

impl KeyConfig {
    pub fn new(loader_script: impl Into<PathBuf>, ssh_key: impl Into<PathBuf>) -> Self {
        Self {
            loader_script: loader_script.into(),
            ssh_key: ssh_key.into(),
        }
    }

    pub fn public_key_path(&self) -> PathBuf {
        let mut path: OsString = self.ssh_key.as_os_str().to_owned();
        path.push(".pub");
        PathBuf::from(path)
    }
}

pub struct Config {
    pub addr: SocketAddr,
    pub app_env: AppEnv,

    pub keys: KeyConfig,
    pub credentials_file: PathBuf,

    pub request_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let port: u16 = match std::env::var("PORT") {
            Ok(s) => s.parse().map_err(|_| ConfigError::Invalid("PORT"))?,
            Err(_) => 3000,
        };

        let addr: SocketAddr = SocketAddr::from_str(&format!("0.0.0.0:{}", port))
            .map_err(|_| ConfigError::Invalid("PORT"))?;

        let app_env = AppEnv::from_env();

        let loader_script = required_path("KEYGUARD_LOADER_SCRIPT")?;
        let ssh_key = required_path("KEYGUARD_SSH_KEY")?;
        let credentials_file = required_path("KEYGUARD_CREDENTIALS_FILE")?;

        let request_timeout_seconds = match std::env::var("REQUEST_TIMEOUT_SECONDS") {
            Ok(s) => s
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .ok_or(ConfigError::Invalid("REQUEST_TIMEOUT_SECONDS"))?,
            Err(_) => 30,
        };

        Ok(Self {
            addr,
            app_env,
            keys: KeyConfig::new(loader_script, ssh_key),
            credentials_file,
            request_timeout: Duration::from_secs(request_timeout_seconds),
        })
    }
}

fn required_path(key: &'static str) -> Result<PathBuf, ConfigError> {
    let value = std::env::var(key).map_err(|_| ConfigError::Missing(key))?;
    let value = value.trim();
    if value.is_empty() {
        return Err(ConfigError::Missing(key));
    }
    Ok(Path::new(value).to_path_buf())
}
