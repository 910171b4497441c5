use std::collections::BTreeMap;

use crate::StoreError;

/// Key of the persisted "player has seen the onboarding" flag.
pub const ONBOARDED_KEY: &str = "onboarded";

/// String key-value persistence injected into the session.
///
/// The shell backs this with a settings file; tests use [`MemoryStore`].
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

#[must_use]
pub fn is_onboarded(store: &dyn KeyValueStore) -> bool {
    store.get(ONBOARDED_KEY).is_some_and(|value| value == "true")
}

pub fn mark_onboarded(store: &mut dyn KeyValueStore) -> Result<(), StoreError> {
    store.set(ONBOARDED_KEY, "true")
}
