//! Integration tests for typed store access.

use prefwatch::prelude::*;

#[test]
fn test_round_trip_every_kind() {
    let store = MemoryStore::new();

    store.set("text", "hello".to_string()).unwrap();
    store.set("int", -7i32).unwrap();
    store.set("bool", true).unwrap();
    store.set("float", 1.25f32).unwrap();
    store.set("long", i64::MAX).unwrap();

    assert_eq!(store.get("text", String::new()).unwrap(), "hello");
    assert_eq!(store.get("int", 0i32).unwrap(), -7);
    assert!(store.get("bool", false).unwrap());
    assert_eq!(store.get("float", 0.0f32).unwrap(), 1.25);
    assert_eq!(store.get("long", 0i64).unwrap(), i64::MAX);
}

#[test]
fn test_missing_keys_fall_back_to_defaults() {
    let store = MemoryStore::new();

    assert_eq!(store.get("name", "anon".to_string()).unwrap(), "anon");
    assert_eq!(store.get("retries", 3i32).unwrap(), 3);
    assert!(!store.get("enabled", false).unwrap());
}

#[test]
fn test_kind_mismatch_reports_both_kinds() {
    let store = MemoryStore::new();
    store.set("port", 8080i32).unwrap();

    let err = store.get("port", 0i64).unwrap_err();
    let message = err.to_string();
    assert!(message.contains("port"));
    assert!(message.contains("int"));
    assert!(message.contains("long"));
}

#[test]
fn test_overwrite_changes_kind() {
    // Overwriting with another kind is allowed; only reads enforce kinds.
    let store = MemoryStore::new();
    store.set("flag", true).unwrap();
    store.set("flag", "yes".to_string()).unwrap();

    assert!(store.get("flag", false).is_err());
    assert_eq!(store.get("flag", String::new()).unwrap(), "yes");
}

#[test]
fn test_raw_access_matches_typed_access() {
    let store = MemoryStore::new();
    store.set("volume", 0.5f32).unwrap();

    assert_eq!(store.value("volume"), Some(PrefValue::Float(0.5)));
    assert_eq!(store.value("volume").unwrap().kind(), Kind::Float);
}

#[cfg(feature = "json-store")]
mod json_store {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_two_handles_one_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.json");

        let store = JsonFileStore::open(&path).unwrap();
        let handle = store.clone();

        store.set("lang", "el".to_string()).unwrap();
        assert_eq!(handle.get("lang", String::new()).unwrap(), "el");
    }

    #[test]
    fn test_full_lifecycle_across_reopen() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.json");

        {
            let store = JsonFileStore::open(&path).unwrap();
            store.set("dark_mode", true).unwrap();
            store.set("volume", 0.3f32).unwrap();
            store.set("stale", 1i32).unwrap();
            store.remove("stale").unwrap();
        }

        let store = JsonFileStore::open(&path).unwrap();
        assert!(store.get("dark_mode", false).unwrap());
        assert_eq!(store.get("volume", 0.0f32).unwrap(), 0.3);
        assert!(!store.contains("stale"));
        assert_eq!(store.len(), 2);
    }
}
