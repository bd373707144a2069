//! Key/value cache with per-entry expiry.

use std::collections::HashMap;
use std::hash::Hash;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::Instant;

struct Entry<V> {
    value: V,
    expires_at: Instant,
}

impl<V> Entry<V> {
    fn is_expired(&self, now: Instant) -> bool {
        now >= self.expires_at
    }
}

/// A cache where every entry expires a fixed TTL after its last write.
///
/// Reads lazily evict the expired entry they encounter, and
/// [`spawn_sweeper`](Self::spawn_sweeper) bounds memory growth for keys
/// that are never read again. Writes replace unconditionally (last write
/// wins); per-key operations are linearizable behind one mutex. Clones
/// share the underlying map.
///
/// Absent remote values are never stored here: the caller simply doesn't
/// insert, so the next lookup re-queries instead of pinning "not found".
pub struct TtlCache<K, V> {
    map: Arc<Mutex<HashMap<K, Entry<V>>>>,
    ttl: Duration,
}

impl<K, V> Clone for TtlCache<K, V> {
    fn clone(&self) -> Self {
        Self {
            map: Arc::clone(&self.map),
            ttl: self.ttl,
        }
    }
}

impl<K, V> TtlCache<K, V>
where
    K: Eq + Hash + Clone + Send + 'static,
    V: Clone + Send + 'static,
{
    /// Creates an empty cache with the given entry TTL.
    pub fn new(ttl: Duration) -> Self {
        Self {
            map: Arc::new(Mutex::new(HashMap::new())),
            ttl,
        }
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<K, Entry<V>>> {
        self.map.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Returns the live value for `key`, evicting it if expired.
    ///
    /// A read at or after the expiry instant is treated as absent.
    pub fn get(&self, key: &K) -> Option<V> {
        let now = Instant::now();
        let mut map = self.lock();
        match map.get(key) {
            Some(entry) if entry.is_expired(now) => {
                map.remove(key);
                None
            }
            Some(entry) => Some(entry.value.clone()),
            None => None,
        }
    }

    /// Stores `value` under `key`, restarting its TTL.
    pub fn insert(&self, key: K, value: V) {
        let expires_at = Instant::now() + self.ttl;
        self.lock().insert(key, Entry { value, expires_at });
    }

    /// Removes `key` regardless of expiry.
    pub fn invalidate(&self, key: &K) {
        self.lock().remove(key);
    }

    /// Removes every entry.
    pub fn clear(&self) {
        self.lock().clear();
    }

    /// Removes every expired entry.
    pub fn sweep(&self) {
        let now = Instant::now();
        self.lock().retain(|_, entry| !entry.is_expired(now));
    }

    /// Number of entries, counting not-yet-swept expired ones.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Spawns a background task sweeping expired entries once per TTL.
    ///
    /// Aborting the returned handle stops future sweeps; reads still evict
    /// lazily without it.
    pub fn spawn_sweeper(&self) -> JoinHandle<()> {
        let cache = self.clone();
        let period = self.ttl;
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval_at(Instant::now() + period, period);
            loop {
                ticker.tick().await;
                cache.sweep();
            }
        })
    }
}
