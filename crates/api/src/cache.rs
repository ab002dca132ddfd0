//! In-process cache of rendered public page bodies.
//!
//! Public read endpoints serve from this cache when possible; mutation
//! handlers invalidate the entries for every path that renders the
//! affected entity, fire-and-forget relative to the caller's response.
//! The next public read recomputes the body from current data.
//!
//! Inserts are epoch-guarded: a read captures the epoch before fetching
//! from the database and an invalidation bumps it, so a body fetched
//! before a mutation committed cannot be cached after that mutation's
//! invalidation has already run.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

/// Cache invalidation path sets, one per entity. Each set lists the public
/// endpoints whose rendered body includes that entity.
pub mod paths {
    pub const PROFILE: &[&str] = &["/api/v1/profile"];
    pub const PROJECTS: &[&str] = &["/api/v1/projects", "/api/v1/projects/featured"];
    pub const SKILLS: &[&str] = &["/api/v1/skills"];
    pub const TESTIMONIALS: &[&str] = &["/api/v1/testimonials"];
}

#[derive(Default)]
struct Inner {
    entries: HashMap<String, serde_json::Value>,
    /// Bumped on every invalidation; stale puts are recognized by it.
    epoch: u64,
}

/// Path-keyed cache of serialized response bodies.
///
/// Cheaply cloneable; all clones share the same map.
#[derive(Clone, Default)]
pub struct PageCache {
    inner: Arc<RwLock<Inner>>,
}

impl PageCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch the cached body for a path, if present.
    pub async fn get(&self, path: &str) -> Option<serde_json::Value> {
        self.inner.read().await.entries.get(path).cloned()
    }

    /// The current invalidation epoch. Capture this before rendering a
    /// body and hand it back to [`Self::put`].
    pub async fn epoch(&self) -> u64 {
        self.inner.read().await.epoch
    }

    /// Store a body rendered at `epoch`. Dropped if any invalidation has
    /// happened since: the body may predate the mutation that triggered it.
    pub async fn put(&self, path: &str, body: serde_json::Value, epoch: u64) {
        let mut inner = self.inner.write().await;
        if inner.epoch == epoch {
            inner.entries.insert(path.to_string(), body);
        }
    }

    /// Drop the cached entries for the given paths and bump the epoch.
    pub async fn invalidate(&self, paths: &[&str]) {
        let mut inner = self.inner.write().await;
        inner.epoch += 1;
        for path in paths {
            inner.entries.remove(*path);
        }
    }

    /// Invalidate without blocking the caller: the work is spawned and the
    /// mutation response does not wait for it.
    pub fn invalidate_detached(&self, paths: &'static [&'static str]) {
        let cache = self.clone();
        tokio::spawn(async move {
            cache.invalidate(paths).await;
            tracing::debug!(?paths, "Invalidated cached pages");
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_put_get_invalidate() {
        let cache = PageCache::new();
        assert_eq!(cache.get("/api/v1/skills").await, None);

        let epoch = cache.epoch().await;
        cache
            .put("/api/v1/skills", json!([{"name": "Rust"}]), epoch)
            .await;
        cache.put("/api/v1/profile", json!({"name": "Ada"}), epoch).await;
        assert!(cache.get("/api/v1/skills").await.is_some());

        cache.invalidate(paths::SKILLS).await;
        assert_eq!(cache.get("/api/v1/skills").await, None);
        // Unrelated entries survive.
        assert!(cache.get("/api/v1/profile").await.is_some());
    }

    #[tokio::test]
    async fn test_detached_invalidation_applies() {
        let cache = PageCache::new();
        let epoch = cache.epoch().await;
        cache.put("/api/v1/projects", json!([]), epoch).await;
        cache.put("/api/v1/projects/featured", json!([]), epoch).await;

        cache.invalidate_detached(paths::PROJECTS);

        // The spawned task owns a clone of the same map; yield until it runs.
        for _ in 0..100 {
            tokio::task::yield_now().await;
            if cache.get("/api/v1/projects").await.is_none() {
                break;
            }
        }
        assert_eq!(cache.get("/api/v1/projects").await, None);
        assert_eq!(cache.get("/api/v1/projects/featured").await, None);
    }

    /// A body rendered before an invalidation must not be cached after it:
    /// the read would otherwise pin pre-mutation data until the next
    /// mutation.
    #[tokio::test]
    async fn test_stale_put_is_dropped() {
        let cache = PageCache::new();

        // A read captures the epoch, then a mutation invalidates before
        // the read's body is stored.
        let epoch = cache.epoch().await;
        cache.invalidate(paths::SKILLS).await;
        cache.put("/api/v1/skills", json!(["stale"]), epoch).await;
        assert_eq!(cache.get("/api/v1/skills").await, None);

        // A body rendered at the current epoch still lands.
        let epoch = cache.epoch().await;
        cache.put("/api/v1/skills", json!(["fresh"]), epoch).await;
        assert_eq!(cache.get("/api/v1/skills").await, Some(json!(["fresh"])));
    }
}
