/*
 * Responsibility
 * - GET / (loader script) と GET /pubkey (public key)
 * - 認証なしで、設定されたファイルをそのまま返す
 */
use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
};

use crate::{error::AppError, services::files::read_served_file, state::AppState};

pub async fn loader_script(State(state): State<AppState>) -> Result<Response, AppError> {
    let body = read_served_file(&state.keys.loader_script).await?;
    Ok(octet_stream(body))
}

pub async fn public_key(State(state): State<AppState>) -> Result<Response, AppError> {
    let body = read_served_file(&state.keys.public_key_path()).await?;
    Ok(octet_stream(body))
}

pub(crate) fn octet_stream(body: Vec<u8>) -> Response {
    ([(header::CONTENT_TYPE, "application/octet-stream")], body).into_response()
}
