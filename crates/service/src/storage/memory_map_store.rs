use std::{collections::HashMap, hash::Hash, sync::Arc};
use tokio::sync::RwLock;

/// Process-local key-value map guarded by an async `RwLock`.
///
/// Every method takes the lock exactly once, so readers always see whole
/// values and read-modify-write cycles cannot interleave.
#[derive(Clone)]
pub struct MemoryMapStore<K, V> {
    inner: Arc<RwLock<HashMap<K, V>>>,
}

impl<K, V> Default for MemoryMapStore<K, V> {
    fn default() -> Self {
        Self { inner: Arc::new(RwLock::new(HashMap::new())) }
    }
}

impl<K, V> MemoryMapStore<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// All values, in no particular order.
    pub async fn values(&self) -> Vec<V> {
        let map = self.inner.read().await;
        map.values().cloned().collect()
    }

    pub async fn get(&self, key: &K) -> Option<V> {
        let map = self.inner.read().await;
        map.get(key).cloned()
    }

    /// Insert or overwrite.
    pub async fn insert(&self, key: K, value: V) {
        let mut map = self.inner.write().await;
        map.insert(key, value);
    }

    /// Remove a key; returns whether it existed.
    pub async fn remove(&self, key: &K) -> bool {
        let mut map = self.inner.write().await;
        map.remove(key).is_some()
    }

    /// Replace the value at `key` with `f(current)` under a single write lock.
    /// Returns the new value, or `None` when the key is absent.
    pub async fn replace_with<F>(&self, key: &K, f: F) -> Option<V>
    where
        F: FnOnce(&V) -> V,
    {
        let mut map = self.inner.write().await;
        let slot = map.get_mut(key)?;
        let next = f(slot);
        *slot = next.clone();
        Some(next)
    }

}
