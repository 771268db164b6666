//! Narrow key-value persistence used by the session store.
//!
//! Browser builds persist to `window.localStorage`; native builds and tests use the
//! in-memory [`MemoryStorage`].

use std::{cell::RefCell, collections::HashMap, rc::Rc};

use crate::client::error::session::SessionError;

pub trait KeyValueStorage {
    /// Read the value stored under `key`, `None` when absent
    fn get(&self, key: &str) -> Result<Option<String>, SessionError>;

    fn set(&self, key: &str, value: &str) -> Result<(), SessionError>;

    /// Remove the value stored under `key`. Removing an absent key succeeds.
    fn clear(&self, key: &str) -> Result<(), SessionError>;
}

/// In-memory storage. Clones share the same entries.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, SessionError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), SessionError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());

        Ok(())
    }

    fn clear(&self, key: &str) -> Result<(), SessionError> {
        self.entries.borrow_mut().remove(key);

        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
pub use local::LocalStorage;

/// Storage used by the running application on the current target
#[cfg(target_arch = "wasm32")]
pub type PlatformStorage = LocalStorage;
#[cfg(not(target_arch = "wasm32"))]
pub type PlatformStorage = MemoryStorage;

#[cfg(target_arch = "wasm32")]
mod local {
    use web_sys::Storage;

    use super::KeyValueStorage;
    use crate::client::error::session::SessionError;

    /// `window.localStorage`
    #[derive(Clone, Copy, Debug, Default)]
    pub struct LocalStorage;

    impl LocalStorage {
        fn backend() -> Result<Storage, SessionError> {
            web_sys::window()
                .ok_or_else(|| SessionError::StorageUnavailable("no window".to_string()))?
                .local_storage()
                .map_err(|e| SessionError::StorageUnavailable(format!("{:?}", e)))?
                .ok_or_else(|| {
                    SessionError::StorageUnavailable("localStorage is disabled".to_string())
                })
        }
    }

    impl KeyValueStorage for LocalStorage {
        fn get(&self, key: &str) -> Result<Option<String>, SessionError> {
            Self::backend()?
                .get_item(key)
                .map_err(|e| SessionError::StorageUnavailable(format!("{:?}", e)))
        }

        fn set(&self, key: &str, value: &str) -> Result<(), SessionError> {
            Self::backend()?
                .set_item(key, value)
                .map_err(|e| SessionError::StorageWriteFailed(format!("{:?}", e)))
        }

        fn clear(&self, key: &str) -> Result<(), SessionError> {
            Self::backend()?
                .remove_item(key)
                .map_err(|e| SessionError::StorageWriteFailed(format!("{:?}", e)))
        }
    }
}
