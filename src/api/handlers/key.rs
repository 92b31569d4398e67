/*
 * Responsibility
 * - GET /key (private key)
 * - Basic credentials → Authenticator → 200 + key / 401 + challenge
 *
 * Notes
 * - credentials なし / 不一致 / Authenticator の Err はすべて同じ 401 にする
 * - 理由は audit log (tracing) にだけ残す。password はログに出さない
 * - username はクライアント入力なので Debug (?username) で出す (改行をエスケープ)
 */
use axum::{extract::State, response::Response};

use crate::{
    api::{extractors::MaybeBasicAuth, handlers::files::octet_stream},
    error::AppError,
    services::files::read_served_file,
    state::AppState,
};

pub async fn private_key(
    State(state): State<AppState>,
    MaybeBasicAuth(credentials): MaybeBasicAuth,
) -> Result<Response, AppError> {
    let Some(credentials) = credentials else {
        tracing::warn!(reason = "missing_credentials", "private key request rejected");
        return Err(AppError::Unauthorized);
    };

    let username = credentials.username.as_str();
    let backend = state.authenticator.backend_name();

    match state
        .authenticator
        .authenticate(username, &credentials.password)
        .await
    {
        Ok(true) => {}
        Ok(false) => {
            tracing::warn!(
                ?username,
                backend,
                reason = "invalid_credentials",
                "private key request rejected"
            );
            return Err(AppError::Unauthorized);
        }
        Err(err) => {
            tracing::warn!(
                ?username,
                backend,
                error = %err,
                reason = "authenticator_error",
                "private key request rejected"
            );
            return Err(AppError::Unauthorized);
        }
    }

    let body = read_served_file(&state.keys.ssh_key).await?;
    tracing::info!(?username, backend, "private key disclosed");

    Ok(octet_stream(body))
}
