//! Credential storage and the session view over it.
//!
//! SYSTEM CONTEXT
//! ==============
//! The stored credential is the only signal of authentication. The sign-in
//! flow writes it, sign-out clears it, and the redirect check, route guard,
//! and API client read it at the moment they need it.
//!
//! TRADE-OFFS
//! ==========
//! Storage failures fail open: `Session::credential` logs and reports "no
//! credential", so the visitor is asked to sign in again instead of seeing a
//! blank screen.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::collections::HashMap;
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use crate::config::DEFAULT_TOKEN_KEY;
use crate::error::StorageError;

/// Opaque bearer token proving an authenticated session.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(..)")
    }
}

/// Durable single-value key/value store holding the credential.
pub trait CredentialStore {
    /// # Errors
    ///
    /// Returns `StorageError` when the backing store cannot be reached.
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// # Errors
    ///
    /// Returns `StorageError` when the backing store rejects the write.
    fn write(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// # Errors
    ///
    /// Returns `StorageError` when the backing store cannot be reached.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// In-memory store for tests and builds without a browser.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: Mutex<HashMap<String, String>>,
    failing: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with a credential under `key`.
    pub fn with_value(key: &str, value: &str) -> Self {
        let store = Self::default();
        if let Ok(mut values) = store.values.lock() {
            values.insert(key.to_owned(), value.to_owned());
        }
        store
    }

    /// Make every subsequent operation fail with `StorageError::Unavailable`.
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    fn values(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, String>>, StorageError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(StorageError::Unavailable);
        }
        self.values.lock().map_err(|_| StorageError::Access("store lock poisoned".to_owned()))
    }
}

impl CredentialStore for MemoryStore {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.values()?.get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.values()?.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.values()?.remove(key);
        Ok(())
    }
}

/// `window.localStorage`, looked up on every call.
#[cfg(feature = "csr")]
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStore;

#[cfg(feature = "csr")]
impl BrowserStore {
    fn storage() -> Result<web_sys::Storage, StorageError> {
        let window = web_sys::window().ok_or(StorageError::Unavailable)?;
        window
            .local_storage()
            .map_err(|e| StorageError::Access(format!("{e:?}")))?
            .ok_or(StorageError::Unavailable)
    }
}

#[cfg(feature = "csr")]
impl CredentialStore for BrowserStore {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        Self::storage()?.get_item(key).map_err(|e| StorageError::Access(format!("{e:?}")))
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        Self::storage()?.set_item(key, value).map_err(|e| StorageError::Access(format!("{e:?}")))
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        Self::storage()?.remove_item(key).map_err(|e| StorageError::Access(format!("{e:?}")))
    }
}

/// Shared handle to the credential under its fixed key.
#[derive(Clone)]
pub struct Session {
    store: Arc<dyn CredentialStore + Send + Sync>,
    key: String,
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session").field("key", &self.key).finish_non_exhaustive()
    }
}

impl Session {
    /// Session over `store` using the default `token` key.
    pub fn new(store: Arc<dyn CredentialStore + Send + Sync>) -> Self {
        Self::with_key(store, DEFAULT_TOKEN_KEY)
    }

    pub fn with_key(store: Arc<dyn CredentialStore + Send + Sync>, key: impl Into<String>) -> Self {
        Self { store, key: key.into() }
    }

    /// Session backed by browser `localStorage`.
    #[cfg(feature = "csr")]
    pub fn browser(key: impl Into<String>) -> Self {
        Self::with_key(Arc::new(BrowserStore), key)
    }

    /// Raw store read. An empty stored value counts as absent.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` when the store cannot be read.
    pub fn try_credential(&self) -> Result<Option<Credential>, StorageError> {
        let raw = self.store.read(&self.key)?;
        Ok(raw.filter(|value| !value.is_empty()).map(Credential))
    }

    /// Stored credential, treating storage failures as "none".
    pub fn credential(&self) -> Option<Credential> {
        match self.try_credential() {
            Ok(credential) => credential,
            Err(e) => {
                log::warn!("session: credential read failed, treating as signed out: {e}");
                None
            }
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.credential().is_some()
    }

    /// Persist a credential issued by the sign-in flow.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` when the store rejects the write.
    pub fn remember(&self, token: &str) -> Result<(), StorageError> {
        self.store.write(&self.key, token)
    }

    /// Clear the stored credential (sign-out).
    ///
    /// # Errors
    ///
    /// Returns `StorageError` when the store cannot be reached.
    pub fn forget(&self) -> Result<(), StorageError> {
        self.store.remove(&self.key)
    }
}
