//! Session-scoped key/value persistence.
//!
//! The tracker never talks to `window.sessionStorage` directly; it receives a
//! [`SessionStore`] so tests (and non-browser builds) can swap in
//! [`MemorySessionStore`]. Every store operation may fail (quota, privacy
//! mode, missing window) and callers are expected to degrade, not propagate.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use thiserror::Error;

/// Value recorded once a section has been scrolled into view.
pub const SEEN_VALUE: &str = "true";

const SEEN_PREFIX: &str = "section-seen-";

/// Namespaced session key for a section's "already seen" flag.
pub fn section_seen_key(section_key: &str) -> String {
    format!("{SEEN_PREFIX}{section_key}")
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("session storage is unavailable")]
    Unavailable,
    #[error("session storage rejected `{key}`: {reason}")]
    Rejected { key: String, reason: String },
}

pub trait SessionStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Whether `section_key` was recorded as seen. Read failures count as "not seen".
pub fn was_seen(store: &dyn SessionStore, section_key: &str) -> bool {
    match store.get(&section_seen_key(section_key)) {
        Ok(value) => value.as_deref() == Some(SEEN_VALUE),
        Err(err) => {
            dioxus::logger::tracing::debug!("[visibility] seen-flag read failed: {err}");
            false
        }
    }
}

/// Record `section_key` as seen. Best-effort: failures are logged and dropped.
pub fn mark_seen(store: &dyn SessionStore, section_key: &str) {
    if let Err(err) = store.set(&section_seen_key(section_key), SEEN_VALUE) {
        dioxus::logger::tracing::debug!("[visibility] seen-flag write skipped: {err}");
    }
}

/// In-memory store used off the browser and in tests.
///
/// Reads and writes can be made to fail to simulate quota or privacy-mode
/// restrictions.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    entries: RefCell<HashMap<String, String>>,
    fail_reads: Cell<bool>,
    fail_writes: Cell<bool>,
    writes: Cell<usize>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.entries.borrow_mut().insert(key.into(), value.into());
        self
    }

    pub fn fail_reads(&self, fail: bool) {
        self.fail_reads.set(fail);
    }

    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.set(fail);
    }

    /// Number of write attempts, including rejected ones.
    pub fn write_attempts(&self) -> usize {
        self.writes.get()
    }

    pub fn peek(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        if self.fail_reads.get() {
            return Err(StorageError::Unavailable);
        }
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.writes.set(self.writes.get() + 1);
        if self.fail_writes.get() {
            return Err(StorageError::Rejected {
                key: key.to_string(),
                reason: "QuotaExceededError".to_string(),
            });
        }
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// `window.sessionStorage`, resolved lazily on every call so a storage that
/// becomes unavailable mid-session degrades instead of panicking.
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserSessionStore;

#[cfg(target_arch = "wasm32")]
impl BrowserSessionStore {
    fn storage() -> Result<web_sys::Storage, StorageError> {
        web_sys::window()
            .and_then(|w| w.session_storage().ok().flatten())
            .ok_or(StorageError::Unavailable)
    }
}

#[cfg(target_arch = "wasm32")]
impl SessionStore for BrowserSessionStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Self::storage()?
            .get_item(key)
            .map_err(|err| StorageError::Rejected {
                key: key.to_string(),
                reason: format!("{err:?}"),
            })
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|err| StorageError::Rejected {
                key: key.to_string(),
                reason: format!("{err:?}"),
            })
    }
}
