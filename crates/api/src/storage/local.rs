//! Local filesystem upload fallback.
//!
//! Used when no blob credential is configured (local development). Files
//! land in a public uploads directory and are served at the matching
//! `/uploads/...` URL path.

use std::path::PathBuf;

use async_trait::async_trait;

use super::{StorageError, StorageProvider};

/// Public URL prefix under which the uploads directory is served.
const PUBLIC_PREFIX: &str = "/uploads";

/// Writes uploads to a local directory.
pub struct LocalStorage {
    root: PathBuf,
}

impl LocalStorage {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }
}

/// Build a collision-resistant file name: the current timestamp in
/// milliseconds, a dash, then the original name with whitespace runs
/// replaced by single dashes.
fn unique_name(filename: &str) -> String {
    let sanitized: String = filename.split_whitespace().collect::<Vec<_>>().join("-");
    format!("{}-{}", chrono::Utc::now().timestamp_millis(), sanitized)
}

#[async_trait]
impl StorageProvider for LocalStorage {
    async fn store(&self, filename: &str, bytes: Vec<u8>) -> Result<String, StorageError> {
        // The directory may not exist on first upload.
        tokio::fs::create_dir_all(&self.root).await?;

        let name = unique_name(filename);
        let path = self.root.join(&name);
        tokio::fs::write(&path, bytes).await?;

        tracing::info!(path = %path.display(), "Stored upload locally");
        Ok(format!("{PUBLIC_PREFIX}/{name}"))
    }
}
