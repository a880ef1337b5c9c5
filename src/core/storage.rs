//! Persisted access token
//!
//! Only the session store writes through these; everything else reads the
//! token from the session.

use std::sync::{Arc, Mutex, PoisonError};

/// localStorage key holding the access token
pub const TOKEN_STORAGE_KEY: &str = "access_token";

pub trait TokenStore: Send + Sync {
    fn load(&self) -> Option<String>;
    fn save(&self, token: &str);
    fn clear(&self);
}

/// Process-local token slot, used on the server and in tests
#[derive(Debug, Clone, Default)]
pub struct MemoryTokenStore {
    slot: Arc<Mutex<Option<String>>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: &str) -> Self {
        let store = Self::new();
        store.save(token);
        store
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Option<String> {
        self.slot
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn save(&self, token: &str) {
        *self.slot.lock().unwrap_or_else(PoisonError::into_inner) = Some(token.to_string());
    }

    fn clear(&self) {
        *self.slot.lock().unwrap_or_else(PoisonError::into_inner) = None;
    }
}

/// `window.localStorage` backed store for the browser build
#[cfg(feature = "hydrate")]
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserTokenStore;

#[cfg(feature = "hydrate")]
impl BrowserTokenStore {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

#[cfg(feature = "hydrate")]
impl TokenStore for BrowserTokenStore {
    fn load(&self) -> Option<String> {
        Self::storage()?
            .get_item(TOKEN_STORAGE_KEY)
            .ok()?
            .filter(|token| !token.is_empty())
    }

    fn save(&self, token: &str) {
        if let Some(storage) = Self::storage() {
            if storage.set_item(TOKEN_STORAGE_KEY, token).is_err() {
                tracing::warn!("localStorage refused the access token");
            }
        }
    }

    fn clear(&self) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(TOKEN_STORAGE_KEY);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_roundtrip() {
        let store = MemoryTokenStore::new();
        assert!(store.load().is_none());

        store.save("T1");
        assert_eq!(store.load().as_deref(), Some("T1"));

        store.save("T2");
        assert_eq!(store.load().as_deref(), Some("T2"));

        store.clear();
        assert!(store.load().is_none());
        store.clear();
        assert!(store.load().is_none());
    }

    #[test]
    fn test_memory_store_clones_share_slot() {
        let store = MemoryTokenStore::with_token("T");
        let view = store.clone();
        store.clear();
        assert!(view.load().is_none());
    }
}
