use std::{
    collections::HashMap,
    hash::{DefaultHasher, Hash, Hasher},
    sync::{LazyLock, RwLock}
};

use crate::store::QueryStore;

/// Global store cache
static STORE_CACHE: LazyLock<RwLock<StoreCache>> =
    LazyLock::new(|| RwLock::new(StoreCache::new(64)));

/// Cache of loaded stores keyed by source content hash
pub struct StoreCache {
    cache:    HashMap<u64, QueryStore>,
    max_size: usize
}

impl StoreCache {
    pub fn new(max_size: usize) -> Self {
        Self {
            cache: HashMap::with_capacity(max_size),
            max_size
        }
    }

    fn hash_key(source: &str) -> u64 {
        let mut hasher = DefaultHasher::new();
        source.hash(&mut hasher);
        hasher.finish()
    }

    pub fn get(&self, source: &str) -> Option<QueryStore> {
        let key = Self::hash_key(source);
        self.cache.get(&key).cloned()
    }

    pub fn insert(&mut self, source: &str, store: QueryStore) {
        // Simple eviction: clear half when full
        if self.cache.len() >= self.max_size {
            let keys: Vec<_> = self.cache.keys().take(self.max_size / 2).copied().collect();
            for key in keys {
                self.cache.remove(&key);
            }
        }

        let key = Self::hash_key(source);
        self.cache.insert(key, store);
    }
}

/// Get a cached store for this exact source text, or None
pub fn get_cached(source: &str) -> Option<QueryStore> {
    STORE_CACHE.read().ok()?.get(source)
}

/// Cache a loaded store under its source text
pub fn cache_store(source: &str, store: QueryStore) {
    if let Ok(mut cache) = STORE_CACHE.write() {
        cache.insert(source, store);
    }
}
