#![allow(dead_code)] // shared across test binaries; not every binary uses every helper

use std::sync::{Arc, Mutex};

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use common_storage::{KvStore, MemoryBackend};
use storefront_client::Navigator;

/// Test double for the routing seam; records every navigation.
pub struct RecordingNavigator {
    paths: Mutex<Vec<String>>,
}

impl RecordingNavigator {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            paths: Mutex::new(Vec::new()),
        })
    }

    pub fn last(&self) -> Option<String> {
        self.paths.lock().expect("mutex poisoned").last().cloned()
    }

    pub fn all(&self) -> Vec<String> {
        self.paths.lock().expect("mutex poisoned").clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, path: &str) {
        self.paths
            .lock()
            .expect("mutex poisoned")
            .push(path.to_string());
    }
}

pub fn memory_store() -> KvStore {
    KvStore::new(Arc::new(MemoryBackend::new()))
}

/// Unsigned three-segment token whose payload carries the given role.
pub fn token_with_role(role: Option<&str>) -> String {
    let mut payload = serde_json::json!({
        "id": "u-1",
        "username": "tester",
        "iat": 1_700_000_000,
        "exp": 4_102_444_800i64,
    });
    if let Some(role) = role {
        payload["role"] = role.into();
    }
    format!(
        "header.{}.signature",
        URL_SAFE_NO_PAD.encode(payload.to_string())
    )
}
