use crate::error::Result;

/// Abstract interface for the durable key-value medium.
///
/// Values are opaque strings. Reads and writes are synchronous and may fail,
/// but must not block indefinitely. Implementations use `&self` for every
/// method; the single-threaded in-memory backend relies on `RefCell`.
pub trait StorageBackend {
    /// Read the value stored under `key`.
    /// Returns Ok(None) when the key has never been written or was removed.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Remove `key`. Removing a missing key is not an error.
    fn remove(&self, key: &str) -> Result<()>;
}
