/// Factory: build the `Authenticator` from application `Config`.
use std::sync::Arc;

use crate::config::Config;
use crate::services::auth::{Authenticator, CredentialsError, StaticCredentials};

pub fn build_authenticator(config: &Config) -> Result<Arc<dyn Authenticator>, CredentialsError> {
    let credentials = StaticCredentials::from_file(&config.credentials_file)?;

    if credentials.is_empty() {
        tracing::warn!(
            path = %config.credentials_file.display(),
            "credentials file lists no users; every /key request will be rejected"
        );
    } else {
        tracing::info!(
            path = %config.credentials_file.display(),
            users = credentials.len(),
            "loaded static credentials"
        );
    }

    Ok(Arc::new(credentials))
}
