/*!
 * HTTP Basic credentials extractor
 *
 * Responsibility:
 * - `Authorization: Basic <base64(user:pass)>` を username/password に分解する
 * - 検証はしない (Authenticator の責務)
 *
 * Notes:
 * - 抽出に失敗しても reject しない。`MaybeBasicAuth(None)` を返し、
 *   401 にするかどうかは handler が決める
 */

use std::convert::Infallible;
use std::fmt;

use axum::extract::FromRequestParts;
use axum::http::{HeaderMap, header, request::Parts};
use base64::{Engine, engine::general_purpose::STANDARD};

#[derive(Clone, PartialEq, Eq)]
pub struct BasicCredentials {
    pub username: String,
    pub password: String,
}

impl fmt::Debug for BasicCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BasicCredentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl BasicCredentials {
    /// Parse the value of an `Authorization` header.
    ///
    /// The scheme is matched case-insensitively and the decoded pair is split
    /// on the first `:`, so passwords may contain colons.
    pub fn parse(value: &str) -> Option<Self> {
        let (scheme, encoded) = value.trim().split_once(' ')?;
        if !scheme.eq_ignore_ascii_case("basic") {
            return None;
        }

        let decoded = STANDARD.decode(encoded.trim()).ok()?;
        let decoded = String::from_utf8(decoded).ok()?;
        let (username, password) = decoded.split_once(':')?;

        Some(Self {
            username: username.to_string(),
            password: password.to_string(),
        })
    }

    pub fn from_headers(headers: &HeaderMap) -> Option<Self> {
        headers
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .and_then(Self::parse)
    }
}

/// Handler で Basic credentials を (あれば) 受け取るための extractor
pub struct MaybeBasicAuth(pub Option<BasicCredentials>);

impl<S> FromRequestParts<S> for MaybeBasicAuth
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(MaybeBasicAuth(BasicCredentials::from_headers(&parts.headers)))
    }
}
