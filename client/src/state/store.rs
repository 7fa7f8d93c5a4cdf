//! Write-through persistence for client state.
//!
//! DESIGN
//! ======
//! `Persisted` is the only place where in-memory state and storage meet.
//! The stored copy is read at most once (`hydrate`). Every `update` hydrates
//! first if that has not happened yet, applies the mutation, then writes the
//! whole value back. A store that was never hydrated never writes, so an
//! empty initial state rendered on the server cannot clobber what the
//! browser already has.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::ops::Deref;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::util::storage::{BrowserStorage, KeyValueStorage, load_json, save_json};

/// A value of type `T` mirrored to `storage` under `key`.
#[derive(Clone, Debug)]
pub struct Persisted<T, S = BrowserStorage> {
    key: &'static str,
    storage: S,
    value: T,
    hydrated: bool,
}

impl<T, S> Persisted<T, S>
where
    T: Serialize + DeserializeOwned + Default,
    S: KeyValueStorage,
{
    /// Create an unhydrated store holding `T::default()`.
    pub fn new(key: &'static str, storage: S) -> Self {
        Self { key, storage, value: T::default(), hydrated: false }
    }

    /// Create a store and hydrate it immediately.
    pub fn open(key: &'static str, storage: S) -> Self {
        let mut store = Self::new(key, storage);
        store.hydrate();
        store
    }

    /// Load the stored value once. Returns `true` if this call performed the load.
    ///
    /// Corrupt stored data is logged and replaced by the default value on the
    /// next write.
    pub fn hydrate(&mut self) -> bool {
        if self.hydrated {
            return false;
        }
        self.hydrated = true;
        match load_json::<T>(&self.storage, self.key) {
            Ok(Some(value)) => self.value = value,
            Ok(None) => {}
            Err(e) => {
                leptos::logging::warn!("discarding unreadable {} from storage: {e}", self.key);
            }
        }
        true
    }

    #[must_use]
    pub fn is_hydrated(&self) -> bool {
        self.hydrated
    }

    #[must_use]
    pub fn key(&self) -> &'static str {
        self.key
    }

    #[must_use]
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Mutate the value and write it through to storage.
    pub fn update<R>(&mut self, f: impl FnOnce(&mut T) -> R) -> R {
        self.hydrate();
        let out = f(&mut self.value);
        self.flush();
        out
    }

    fn flush(&self) {
        if let Err(e) = save_json(&self.storage, self.key, &self.value) {
            leptos::logging::warn!("failed to persist {}: {e}", self.key);
        }
    }
}

impl<T, S> Deref for Persisted<T, S> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.value
    }
}
