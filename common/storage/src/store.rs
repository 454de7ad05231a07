use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::error;

use crate::backend::StorageBackend;

/// Namespace applied to every key so unrelated users of the same backend
/// cannot collide with ours.
pub const NAMESPACE: &str = "app_";

/// Typed, namespaced view over a [`StorageBackend`].
///
/// Values serialize as JSON, except strings, which are stored verbatim so a
/// raw string round-trips without quoting.
#[derive(Clone)]
pub struct KvStore {
    backend: Arc<dyn StorageBackend>,
}

impl KvStore {
    pub fn new(backend: Arc<dyn StorageBackend>) -> Self {
        Self { backend }
    }

    /// The backing store, for collaborators that keep keys outside the
    /// namespace (the cart does, for legacy script compatibility).
    pub fn backend(&self) -> Arc<dyn StorageBackend> {
        Arc::clone(&self.backend)
    }

    fn scoped(key: &str) -> String {
        format!("{NAMESPACE}{key}")
    }

    /// Write a value under the namespaced key.
    ///
    /// Failures are logged and swallowed: a disabled or full backing store
    /// is not actionable by callers, and storage must never take the UI
    /// down with it.
    pub fn set<T: Serialize + ?Sized>(&self, key: &str, value: &T) {
        let raw = match serde_json::to_value(value) {
            Ok(Value::String(text)) => text,
            Ok(other) => other.to_string(),
            Err(err) => {
                error!(key, %err, "failed to serialize value for storage");
                return;
            }
        };

        if let Err(err) = self.backend.set_item(&Self::scoped(key), &raw) {
            error!(key, %err, "failed to write value to storage");
        }
    }

    /// Read a value. Raw text is JSON-parsed first; when it is not valid
    /// JSON, or the parsed value is not the requested shape, the raw text
    /// is retried as a bare string, matching what [`KvStore::set`] writes
    /// for strings (a stored `"3001234567"` parses as a number but must
    /// still read back as the string it was). An absent key and a
    /// conversion failure are both `None`.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = self.backend.get_item(&Self::scoped(key))?;
        if let Ok(value) = serde_json::from_str::<Value>(&raw) {
            if let Ok(typed) = serde_json::from_value(value) {
                return Some(typed);
            }
        }
        serde_json::from_value(Value::String(raw)).ok()
    }

    /// Delete the namespaced key; no-op when absent.
    pub fn remove(&self, key: &str) {
        self.backend.remove_item(&Self::scoped(key));
    }

    /// Wipe the entire backing store.
    ///
    /// Global, not namespace-scoped: keys written by anything sharing the
    /// backend (including the bare cart key) go too.
    pub fn clear(&self) {
        self.backend.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::MemoryBackend;
    use serde::Deserialize;

    fn store() -> KvStore {
        KvStore::new(Arc::new(MemoryBackend::new()))
    }

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Line {
        id: String,
        quantity: u32,
    }

    #[test]
    fn strings_are_stored_verbatim_and_round_trip() {
        let store = store();
        store.set(crate::keys::TOKEN, "abc.def.ghi");

        // Verbatim: no JSON quoting on the wire.
        let raw = store.backend().get_item("app_token");
        assert_eq!(raw.as_deref(), Some("abc.def.ghi"));

        let read: Option<String> = store.get(crate::keys::TOKEN);
        assert_eq!(read.as_deref(), Some("abc.def.ghi"));
    }

    #[test]
    fn objects_round_trip_deep_equal() {
        let store = store();
        let value = vec![
            Line {
                id: "p-1".to_string(),
                quantity: 2,
            },
            Line {
                id: "p-2".to_string(),
                quantity: 1,
            },
        ];
        store.set("lines", &value);

        let read: Option<Vec<Line>> = store.get("lines");
        assert_eq!(read, Some(value));
    }

    #[test]
    fn strings_that_look_like_json_scalars_round_trip() {
        let store = store();
        // Digit-only phone numbers and keyword-shaped strings parse as
        // JSON scalars; they must still read back as the strings they
        // were written as.
        for value in ["3001234567", "123456", "true", "false", "null", "-7"] {
            store.set(crate::keys::PHONE, value);
            let read: Option<String> = store.get(crate::keys::PHONE);
            assert_eq!(read.as_deref(), Some(value), "round-tripping {value:?}");
        }
    }

    #[test]
    fn keys_are_namespaced() {
        let store = store();
        store.set("k", "v");
        assert_eq!(store.backend().get_item("k"), None);
        assert!(store.backend().get_item("app_k").is_some());
    }

    #[test]
    fn absent_and_mismatched_values_read_as_none() {
        let store = store();
        assert_eq!(store.get::<String>("missing"), None);

        store.set("count", &3);
        assert_eq!(store.get::<u32>("count"), Some(3));
        assert_eq!(store.get::<Vec<Line>>("count"), None);
    }

    #[test]
    fn remove_is_a_no_op_when_absent() {
        let store = store();
        store.remove("missing");

        store.set("k", "v");
        store.remove("k");
        assert_eq!(store.get::<String>("k"), None);
    }

    #[test]
    fn clear_wipes_the_whole_backend() {
        let store = store();
        store.set("k", "v");
        store
            .backend()
            .set_item(crate::keys::CART, "[]")
            .expect("bare write");

        store.clear();
        assert_eq!(store.get::<String>("k"), None);
        assert_eq!(store.backend().get_item(crate::keys::CART), None);
    }
}
