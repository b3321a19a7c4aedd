//! Opaque FHIR extensions carried by coded values.

use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// An extension record attached to a coded value.
///
/// The content is opaque to this crate: it is carried, compared and
/// serialized, never interpreted. `value` holds the extension's `value[x]`
/// payload (or nested extensions) exactly as it appeared on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Extension {
    pub url: String,
    #[serde(flatten)]
    pub value: serde_json::Map<String, Value>,
}

impl Extension {
    /// Extension with a single `value[x]` entry, e.g. `("valueString", json!("x"))`.
    pub fn new(url: impl Into<String>, key: impl Into<String>, value: Value) -> Self {
        let mut map = serde_json::Map::new();
        map.insert(key.into(), value);
        Extension {
            url: url.into(),
            value: map,
        }
    }

    /// Extension carrying only a URL.
    pub fn marker(url: impl Into<String>) -> Self {
        Extension {
            url: url.into(),
            value: serde_json::Map::new(),
        }
    }
}

impl Hash for Extension {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Map iteration order depends on serde_json features, so only the
        // url and the sorted key set feed the hash.
        self.url.hash(state);
        let mut keys: Vec<&String> = self.value.keys().collect();
        keys.sort();
        keys.hash(state);
    }
}
