//! Key/value backend trait.
//!
//! `KeyValueStore` is the seam between the entry store and wherever the
//! serialized collection actually lives.

use crate::error::Result;

/// A string-keyed persistent slot.
///
/// Implementations must ensure:
/// - `set_item` replaces the whole value in one write
/// - A value written by `set_item` is returned verbatim by `get_item`
/// - Removing a missing key is not an error
pub trait KeyValueStore {
    /// Read the value stored under `key`.
    ///
    /// Returns `Ok(None)` when nothing has been stored yet.
    fn get_item(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, overwriting any previous value.
    fn set_item(&mut self, key: &str, value: &str) -> Result<()>;

    /// Delete the value stored under `key`.
    fn remove_item(&mut self, key: &str) -> Result<()>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Box<T> {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        (**self).get_item(key)
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<()> {
        (**self).set_item(key, value)
    }

    fn remove_item(&mut self, key: &str) -> Result<()> {
        (**self).remove_item(key)
    }
}
