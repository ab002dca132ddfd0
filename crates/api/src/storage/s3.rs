//! Cloud object storage provider.
//!
//! Selected when the blob credential is present in the environment. Objects
//! are stored under their original filename in a bucket configured for
//! public read, and the returned URL points at the public base.

use async_trait::async_trait;
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::types::ObjectCannedAcl;

use super::{StorageError, StorageProvider};
use crate::config::BlobConfig;

/// Stores uploads in an S3-compatible bucket.
pub struct S3Storage {
    client: aws_sdk_s3::Client,
    bucket: String,
    public_base_url: String,
}

impl S3Storage {
    /// Build a client from the ambient AWS environment configuration.
    pub async fn connect(config: &BlobConfig) -> Self {
        let aws_config = aws_config::load_from_env().await;
        Self {
            client: aws_sdk_s3::Client::new(&aws_config),
            bucket: config.bucket.clone(),
            public_base_url: config.public_base_url.clone(),
        }
    }
}

/// Join the public base URL and an object key without doubling slashes.
fn object_url(base: &str, key: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), key)
}

#[async_trait]
impl StorageProvider for S3Storage {
    async fn store(&self, filename: &str, bytes: Vec<u8>) -> Result<String, StorageError> {
        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(filename)
            .acl(ObjectCannedAcl::PublicRead)
            .body(ByteStream::from(bytes))
            .send()
            .await
            .map_err(|e| StorageError::Remote(e.to_string()))?;

        tracing::info!(bucket = %self.bucket, key = %filename, "Stored upload in object store");
        Ok(object_url(&self.public_base_url, filename))
    }
}
