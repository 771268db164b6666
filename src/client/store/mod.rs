//! Client-side state: the session store and the key-value storage it persists to.

pub mod session;
pub mod storage;

pub use session::{SessionState, SessionStore, SESSION_STORAGE_KEY};
pub use storage::{KeyValueStorage, MemoryStorage, PlatformStorage};
