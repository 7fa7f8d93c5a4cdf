use super::*;

#[test]
fn memory_storage_round_trips_values() {
    let storage = MemoryStorage::new();
    assert!(storage.get("k").is_none());
    storage.set("k", "v").unwrap();
    assert_eq!(storage.get("k").as_deref(), Some("v"));
    storage.remove("k");
    assert!(storage.get("k").is_none());
    assert!(storage.is_empty());
}

#[test]
fn memory_storage_clones_share_entries() {
    let a = MemoryStorage::new();
    let b = a.clone();
    a.set("shared", "1").unwrap();
    assert_eq!(b.get("shared").as_deref(), Some("1"));
    assert_eq!(b.len(), 1);
}

#[test]
fn load_json_missing_key_is_none() {
    let storage = MemoryStorage::new();
    let loaded: Option<Vec<u32>> = load_json(&storage, "missing").unwrap();
    assert!(loaded.is_none());
}

#[test]
fn load_json_rejects_corrupt_payload() {
    let storage = MemoryStorage::with_entry("cart", "{not json");
    let loaded: Result<Option<Vec<u32>>, _> = load_json(&storage, "cart");
    assert!(loaded.is_err());
}

#[test]
fn save_then_load_json() {
    let storage = MemoryStorage::new();
    save_json(&storage, "nums", &vec![1_u32, 2, 3]).unwrap();
    assert_eq!(storage.get("nums").as_deref(), Some("[1,2,3]"));
    let loaded: Option<Vec<u32>> = load_json(&storage, "nums").unwrap();
    assert_eq!(loaded, Some(vec![1, 2, 3]));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn browser_storage_is_inert_outside_the_browser() {
    let storage = BrowserStorage;
    assert!(storage.set("k", "v").is_ok());
    assert!(storage.get("k").is_none());
    storage.remove("k");
}
