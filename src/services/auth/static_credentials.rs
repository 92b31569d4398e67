//! Authenticator backed by a fixed list of users loaded at startup.
//!
//! Credentials file format (JSON):
//!
//! ```json
//! [
//!   { "username": "keyguard", "password_sha256": "<hex digest>" }
//! ]
//! ```
//!
//! Plain passwords are never stored; only their SHA-256 digests are kept in
//! memory and compared.

use std::collections::HashMap;
use std::path::Path;

use async_trait::async_trait;
use serde::Deserialize;
use sha2::{Digest, Sha256};
use thiserror::Error;

use super::{AuthError, Authenticator};

type PasswordDigest = [u8; 32];

#[derive(Debug, Error)]
pub enum CredentialsError {
    #[error("cannot read credentials file: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed credentials file: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid password digest for user {username}")]
    InvalidDigest { username: String },
    #[error("duplicate user {username}")]
    DuplicateUser { username: String },
    #[error("empty username")]
    EmptyUsername,
}

#[derive(Debug, Deserialize)]
struct CredentialEntry {
    username: String,
    password_sha256: String,
}

#[derive(Clone, Debug, Default)]
pub struct StaticCredentials {
    users: HashMap<String, PasswordDigest>,
}

impl StaticCredentials {
    pub fn from_file(path: &Path) -> Result<Self, CredentialsError> {
        let raw = std::fs::read(path)?;
        Self::from_json(&raw)
    }

    pub fn from_json(raw: &[u8]) -> Result<Self, CredentialsError> {
        let entries: Vec<CredentialEntry> = serde_json::from_slice(raw)?;

        let mut users = HashMap::with_capacity(entries.len());
        for entry in entries {
            if entry.username.is_empty() {
                return Err(CredentialsError::EmptyUsername);
            }

            let digest = parse_digest(&entry.password_sha256).ok_or_else(|| {
                CredentialsError::InvalidDigest {
                    username: entry.username.clone(),
                }
            })?;

            if users.insert(entry.username.clone(), digest).is_some() {
                return Err(CredentialsError::DuplicateUser {
                    username: entry.username,
                });
            }
        }

        Ok(Self { users })
    }

    /// Build from plain passwords (hashes them immediately).
    #[cfg(test)]
    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let users = pairs
            .into_iter()
            .map(|(username, password)| (username.to_string(), hash_password(password)))
            .collect();
        Self { users }
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

#[async_trait]
impl Authenticator for StaticCredentials {
    fn backend_name(&self) -> &'static str {
        "static"
    }

    async fn authenticate(&self, username: &str, password: &str) -> Result<bool, AuthError> {
        let presented = hash_password(password);
        Ok(self
            .users
            .get(username)
            .is_some_and(|stored| digests_equal(stored, &presented)))
    }
}

fn hash_password(password: &str) -> PasswordDigest {
    let mut digest = [0u8; 32];
    digest.copy_from_slice(&Sha256::digest(password.as_bytes()));
    digest
}

fn parse_digest(hex_digest: &str) -> Option<PasswordDigest> {
    let bytes = hex::decode(hex_digest.trim()).ok()?;
    bytes.try_into().ok()
}

// Runtime does not depend on where the first mismatch is.
fn digests_equal(a: &PasswordDigest, b: &PasswordDigest) -> bool {
    a.iter().zip(b.iter()).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}
