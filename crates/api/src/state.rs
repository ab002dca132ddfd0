use std::sync::Arc;

use crate::cache::PageCache;
use crate::config::ServerConfig;
use crate::storage::StorageProvider;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: folio_db::DbPool,
    /// Server configuration (accessed by the auth gate and handlers).
    pub config: Arc<ServerConfig>,
    /// Selected upload storage strategy (cloud or local fallback).
    pub storage: Arc<dyn StorageProvider>,
    /// Cached public page bodies, invalidated by mutations.
    pub page_cache: PageCache,
}
