use sql_query_loader::{
    cache::{StoreCache, cache_store, get_cached},
    store::QueryStore
};

#[test]
fn test_global_cache_roundtrip() {
    let source = "--/cacheRoundtrip\nSELECT 1;\n--/\n";
    let store = QueryStore::load_str(source).unwrap();

    cache_store(source, store);

    let cached = get_cached(source).unwrap();
    assert_eq!(cached.get("cacheRoundtrip"), Some("SELECT 1;\n"));
}

#[test]
fn test_global_cache_miss_returns_none() {
    assert!(get_cached("--/neverCachedAnywhere\nSELECT 0;\n--/\n").is_none());
}

#[test]
fn test_cache_distinguishes_sources() {
    let first = "--/cacheFirst\nSELECT 1;\n--/\n";
    let second = "--/cacheSecond\nSELECT 2;\n--/\n";

    cache_store(first, QueryStore::load_str(first).unwrap());
    cache_store(second, QueryStore::load_str(second).unwrap());

    assert!(get_cached(first).unwrap().get("cacheFirst").is_some());
    assert!(get_cached(second).unwrap().get("cacheSecond").is_some());
}

#[test]
fn test_store_cache_eviction_keeps_capacity_bounded() {
    let mut cache = StoreCache::new(4);

    for i in 0..10 {
        let source = format!("--/q{}\nSELECT {};\n--/\n", i, i);
        cache.insert(&source, QueryStore::load_str(&source).unwrap());
    }

    // At least the most recent insert survives eviction.
    let last = "--/q9\nSELECT 9;\n--/\n";
    assert!(cache.get(last).is_some());
}
