/*
 * Responsibility
 * - URL 構造を定義
 * - method は見ない (any)
 * - 認証は /key の handler 内で行う (middleware ではない)
 */
use axum::{Router, routing::any};

use crate::state::AppState;

use crate::api::handlers::{
    files::{loader_script, public_key},
    key::private_key,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", any(loader_script))
        .route("/pubkey", any(public_key))
        .route("/key", any(private_key))
}
