/*
 * Responsibility
 * - Router に紐づける共有コンテキスト (AppState)
 *   - keys: 配信するファイルのパス (起動後は不変)
 *   - authenticator: /key の資格情報検証 (差し替え可能)
 * - Clone 前提で持つ (内部は Arc)
 */
use std::sync::Arc;

use crate::config::KeyConfig;
use crate::services::auth::Authenticator;

#[derive(Clone)]
pub struct AppState {
    pub keys: Arc<KeyConfig>,
    pub authenticator: Arc<dyn Authenticator>,
}

impl AppState {
    pub fn new(keys: KeyConfig, authenticator: Arc<dyn Authenticator>) -> Self {
        Self {
            keys: Arc::new(keys),
            authenticator,
        }
    }
}
