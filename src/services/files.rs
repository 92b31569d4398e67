//! Reads the files served by the handlers.
//!
//! Every request re-reads its file: nothing is cached, so replacing a file on
//! disk takes effect on the next request.

use std::path::Path;

use crate::error::AppError;

/// Read the whole file, mapping any I/O failure to `AppError::Internal`.
///
/// The file handle is owned by `tokio::fs::read` and closed before it
/// returns, on both the success and the error path.
pub async fn read_served_file(path: &Path) -> Result<Vec<u8>, AppError> {
    tokio::fs::read(path).await.map_err(|err| {
        tracing::error!(
            error = %err,
            path = %path.display(),
            "failed to read served file"
        );
        AppError::Internal
    })
}
