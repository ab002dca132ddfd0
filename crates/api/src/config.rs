use std::path::PathBuf;

use crate::auth::jwt::SessionConfig;

/// Server configuration loaded from environment variables.
///
/// All fields except the admin credentials and session secret have defaults
/// suitable for local development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// The single static admin identity.
    pub admin: AdminConfig,
    /// Session token configuration (secret, lifetime).
    pub session: SessionConfig,
    /// Directory for the local upload fallback (default: `public/uploads`).
    pub uploads_dir: PathBuf,
    /// Cloud blob storage settings. `Some` when `BLOB_READ_WRITE_TOKEN` is
    /// present in the environment, which selects the cloud upload path.
    pub blob: Option<BlobConfig>,
}

/// The configured admin credential pair. There is no account store; this is
/// the only identity that can authenticate.
#[derive(Debug, Clone)]
pub struct AdminConfig {
    pub email: String,
    pub password: String,
}

/// Cloud object storage settings for the upload endpoint.
#[derive(Debug, Clone)]
pub struct BlobConfig {
    /// Target bucket, configured for public read.
    pub bucket: String,
    /// Base URL under which stored objects are publicly reachable.
    pub public_base_url: String,
}

impl AdminConfig {
    /// Load the admin credential pair from the environment.
    ///
    /// # Panics
    ///
    /// Panics if `ADMIN_EMAIL` or `ADMIN_PASSWORD` is not set or is empty.
    pub fn from_env() -> Self {
        let email = std::env::var("ADMIN_EMAIL").expect("ADMIN_EMAIL must be set");
        let password = std::env::var("ADMIN_PASSWORD").expect("ADMIN_PASSWORD must be set");
        assert!(!email.is_empty(), "ADMIN_EMAIL must not be empty");
        assert!(!password.is_empty(), "ADMIN_PASSWORD must not be empty");
        Self { email, password }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                  | Required | Default                 |
    /// |--------------------------|----------|-------------------------|
    /// | `HOST`                   | no       | `0.0.0.0`               |
    /// | `PORT`                   | no       | `3000`                  |
    /// | `CORS_ORIGINS`           | no       | `http://localhost:3001` |
    /// | `REQUEST_TIMEOUT_SECS`   | no       | `30`                    |
    /// | `ADMIN_EMAIL`            | **yes**  | --                      |
    /// | `ADMIN_PASSWORD`         | **yes**  | --                      |
    /// | `SESSION_SECRET`         | **yes**  | --                      |
    /// | `SESSION_EXPIRY_HOURS`   | no       | `24`                    |
    /// | `UPLOADS_DIR`            | no       | `public/uploads`        |
    /// | `BLOB_READ_WRITE_TOKEN`  | no       | -- (toggles cloud path) |
    /// | `BLOB_BUCKET`            | with token | --                    |
    /// | `BLOB_PUBLIC_BASE_URL`   | no       | derived from bucket     |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:3001".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let uploads_dir = PathBuf::from(
            std::env::var("UPLOADS_DIR").unwrap_or_else(|_| "public/uploads".into()),
        );

        // The presence of the blob credential selects the cloud storage
        // strategy; its absence selects the local filesystem fallback.
        let blob = std::env::var("BLOB_READ_WRITE_TOKEN")
            .ok()
            .filter(|token| !token.is_empty())
            .map(|_| {
                let bucket = std::env::var("BLOB_BUCKET")
                    .expect("BLOB_BUCKET must be set when BLOB_READ_WRITE_TOKEN is present");
                let public_base_url = std::env::var("BLOB_PUBLIC_BASE_URL")
                    .unwrap_or_else(|_| format!("https://{bucket}.s3.amazonaws.com"));
                BlobConfig {
                    bucket,
                    public_base_url,
                }
            });

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            admin: AdminConfig::from_env(),
            session: SessionConfig::from_env(),
            uploads_dir,
            blob,
        }
    }
}
