use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use serde_json::Value;

use crate::check::types::{Check, CheckRecord};
use crate::check::{EnvVarCheck, FileChecksumCheck, FileExistsCheck, HttpReachableCheck};
use crate::error::RusmokeError;

/// Registry entry for one check kind: how to decode its persisted record
/// and how to build an illustrative example instance.
pub struct KindEntry {
    pub decode: fn(&Value) -> crate::Result<Box<dyn Check>>,
    pub example: fn() -> Box<dyn Check>,
}

/// Variant registry keyed by kind tag.
///
/// New check kinds register a decode/example pair here; the suite and the
/// runner never change. Unknown tags on decode are a hard format error,
/// never skipped, so a stale document cannot silently shrink coverage.
pub struct CheckRegistry {
    entries: BTreeMap<&'static str, KindEntry>,
}

impl CheckRegistry {
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Registry with the built-in check kinds registered.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        registry.insert(FileExistsCheck::KIND, KindEntry {
            decode: decode_as::<FileExistsCheck>,
            example: || Box::new(FileExistsCheck::example()),
        });
        registry.insert(FileChecksumCheck::KIND, KindEntry {
            decode: decode_as::<FileChecksumCheck>,
            example: || Box::new(FileChecksumCheck::example()),
        });
        registry.insert(EnvVarCheck::KIND, KindEntry {
            decode: decode_as::<EnvVarCheck>,
            example: || Box::new(EnvVarCheck::example()),
        });
        registry.insert(HttpReachableCheck::KIND, KindEntry {
            decode: decode_as::<HttpReachableCheck>,
            example: || Box::new(HttpReachableCheck::example()),
        });
        registry
    }

    fn insert(&mut self, kind: &'static str, entry: KindEntry) {
        self.entries.insert(kind, entry);
    }

    /// Register a new kind. Fails when the tag is already taken.
    pub fn register(&mut self, kind: &'static str, entry: KindEntry) -> crate::Result<()> {
        if self.entries.contains_key(kind) {
            return Err(RusmokeError::Other(format!(
                "check kind already registered: {kind}"
            )));
        }
        self.insert(kind, entry);
        Ok(())
    }

    /// Reconstruct a check from its persisted record.
    pub fn decode(&self, record: &CheckRecord) -> crate::Result<Box<dyn Check>> {
        let Some(entry) = self.entries.get(record.kind.as_str()) else {
            return Err(RusmokeError::unknown_kind(&record.kind));
        };
        let params = Value::Object(record.params.clone());
        (entry.decode)(&params)
            .map_err(|e| RusmokeError::Format(format!("check kind '{}': {e}", record.kind)))
    }

    /// Registered kind tags, in registry order
    pub fn kinds(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.keys().copied()
    }

    /// One example instance of every registered kind, in registry order.
    pub fn examples(&self) -> Vec<Box<dyn Check>> {
        self.entries.values().map(|entry| (entry.example)()).collect()
    }
}

impl Default for CheckRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Decode a record's parameter object as a concrete check type.
pub fn decode_as<T>(params: &Value) -> crate::Result<Box<dyn Check>>
where
    T: Check + serde::de::DeserializeOwned + 'static,
{
    let check: T = serde_json::from_value(params.clone())
        .map_err(|e| RusmokeError::Format(format!("invalid parameters: {e}")))?;
    Ok(Box::new(check))
}

// Global instance helper
pub fn builtin_registry() -> &'static CheckRegistry {
    static REGISTRY: Lazy<CheckRegistry> = Lazy::new(CheckRegistry::builtin);
    &REGISTRY
}
