use super::*;

#[test]
fn memory_storage_set_get_remove() {
    let storage = MemoryStorage::new();
    assert!(storage.is_empty());

    storage.set_item("k", "v");
    assert_eq!(storage.get_item("k").as_deref(), Some("v"));
    assert_eq!(storage.len(), 1);

    storage.remove_item("k");
    assert_eq!(storage.get_item("k"), None);
    storage.remove_item("k");
    assert!(storage.is_empty());
}

#[test]
fn json_helpers_round_trip_and_reject_garbage() {
    let storage = MemoryStorage::new();
    save_json(&storage, "nums", &vec![1, 2, 3]);
    assert_eq!(load_json::<Vec<i32>>(&storage, "nums"), Some(vec![1, 2, 3]));

    storage.set_item("nums", "{not json");
    assert_eq!(load_json::<Vec<i32>>(&storage, "nums"), None);
    assert_eq!(load_json::<Vec<i32>>(&storage, "missing"), None);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn browser_storage_is_inert_off_browser() {
    let storage = BrowserStorage;
    storage.set_item("k", "v");
    assert_eq!(storage.get_item("k"), None);
    storage.remove_item("k");
}
