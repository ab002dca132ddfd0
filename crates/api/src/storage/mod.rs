//! Upload storage providers.
//!
//! Two mutually exclusive strategies behind one trait: a cloud object store
//! ([`s3::S3Storage`]) when the blob credential is configured, and a local
//! filesystem fallback ([`local::LocalStorage`]) otherwise. Both take the
//! file bytes and return a public URL.

pub mod local;
pub mod s3;

use async_trait::async_trait;

pub use local::LocalStorage;
pub use s3::S3Storage;

/// Failure in a storage backend. Callers surface these as a generic
/// upload-failed error; the detail is only for logs.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Object store error: {0}")]
    Remote(String),
}

/// A destination for uploaded files.
#[async_trait]
pub trait StorageProvider: Send + Sync {
    /// Store `bytes` under a name derived from `filename` and return the
    /// public URL at which the file is reachable.
    async fn store(&self, filename: &str, bytes: Vec<u8>) -> Result<String, StorageError>;
}
