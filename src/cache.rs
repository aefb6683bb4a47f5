use chrono::{DateTime, Duration, Utc};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

// Endpoint-specific TTLs, in seconds. Keys are fixed per endpoint type; every
// cached endpoint is parameterless, so no request parameter belongs in a key.
pub const TEAMS_TTL_SECS: i64 = 3600;
pub const STANDINGS_TTL_SECS: i64 = 30;
pub const SCOREBOARD_TTL_SECS: i64 = 15;
pub const LEADERS_TTL_SECS: i64 = 30;
pub const SCHEDULE_TTL_SECS: i64 = 3600;

#[derive(Clone, Debug)]
struct CacheEntry {
    expires_at: DateTime<Utc>,
    value: Value,
}

/// Short-TTL in-memory cache, constructed once at startup and handed to
/// handlers through `web::Data`. Expiry is the only eviction mechanism;
/// expired entries are dropped lazily on the read path.
#[derive(Clone, Default)]
pub struct TtlCache {
    entries: Arc<RwLock<HashMap<String, CacheEntry>>>,
}

impl TtlCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached value if present and not yet expired.
    pub async fn get(&self, key: &str) -> Option<Value> {
        let now = Utc::now();
        {
            let map = self.entries.read().await;
            match map.get(key) {
                Some(entry) if now < entry.expires_at => return Some(entry.value.clone()),
                Some(_) => {}
                None => return None,
            }
        }
        // expired; evict under the write lock
        let mut map = self.entries.write().await;
        if let Some(entry) = map.get(key) {
            if now < entry.expires_at {
                return Some(entry.value.clone());
            }
            map.remove(key);
        }
        None
    }

    /// Stores `value` with absolute expiry `now + ttl_secs`.
    pub async fn set(&self, key: &str, value: Value, ttl_secs: i64) {
        let entry = CacheEntry {
            expires_at: Utc::now() + Duration::seconds(ttl_secs),
            value,
        };
        let mut map = self.entries.write().await;
        map.insert(key.to_string(), entry);
    }
}
