//! Reference-shared mutable storage behind String and Composite values.
//!
//! Each handle is an `Arc<Mutex<_>>`. The engine's evaluation lock already
//! serializes every access; the inner mutex only makes values `Send + Sync`.
//! Locks are held for a single read or write and never across a call back
//! into evaluation, so nested values (including self-references) never
//! deadlock.

use std::sync::Arc;

use parking_lot::Mutex;
use rustc_hash::FxHashMap;

use super::Value;

/// Key/value storage of composites and environment frames.
pub type Table = FxHashMap<String, Value>;

/// A mutable byte string shared by every value that references it.
#[derive(Clone, Default)]
pub struct StrBuffer(Arc<Mutex<Vec<u8>>>);

impl StrBuffer {
    pub fn new(bytes: Vec<u8>) -> Self {
        StrBuffer(Arc::new(Mutex::new(bytes)))
    }

    pub fn len(&self) -> usize {
        self.0.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.lock().is_empty()
    }

    /// Copy of the current contents.
    pub fn to_vec(&self) -> Vec<u8> {
        self.0.lock().clone()
    }

    pub fn byte_at(&self, index: usize) -> Option<u8> {
        self.0.lock().get(index).copied()
    }

    pub fn to_string_lossy(&self) -> String {
        String::from_utf8_lossy(&self.0.lock()).into_owned()
    }

    /// Overwrite bytes starting at `offset`, growing the buffer when the
    /// patch runs past the end. `offset == len` appends.
    ///
    /// Returns the current length as the error when `offset` is past it.
    pub fn write_at(&self, offset: usize, patch: &[u8]) -> Result<(), usize> {
        let mut buf = self.0.lock();
        let len = buf.len();
        if offset > len {
            return Err(len);
        }
        let end = offset + patch.len();
        if end > len {
            buf.resize(end, 0);
        }
        buf[offset..end].copy_from_slice(patch);
        Ok(())
    }

    pub fn ptr_eq(&self, other: &StrBuffer) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl From<&str> for StrBuffer {
    fn from(s: &str) -> Self {
        StrBuffer::new(s.as_bytes().to_vec())
    }
}

/// A mutable string-keyed map shared by every value that references it.
#[derive(Clone, Default)]
pub struct Composite(Arc<Mutex<Table>>);

impl Composite {
    pub fn new() -> Self {
        Composite::default()
    }

    pub fn from_table(table: Table) -> Self {
        Composite(Arc::new(Mutex::new(table)))
    }

    pub fn get(&self, key: &str) -> Option<Value> {
        self.0.lock().get(key).cloned()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.0.lock().contains_key(key)
    }

    pub fn set(&self, key: impl Into<String>, value: Value) {
        self.0.lock().insert(key.into(), value);
    }

    /// Replace an existing entry; returns `false` if `key` is absent.
    pub fn replace(&self, key: &str, value: Value) -> bool {
        match self.0.lock().get_mut(key) {
            Some(slot) => {
                *slot = value;
                true
            }
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.0.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.lock().is_empty()
    }

    /// Keys in sorted order.
    pub fn keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.0.lock().keys().cloned().collect();
        keys.sort_unstable();
        keys
    }

    /// Snapshot of all entries, sorted by key.
    pub fn entries(&self) -> Vec<(String, Value)> {
        let mut entries: Vec<(String, Value)> = self
            .0
            .lock()
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();
        entries.sort_unstable_by(|a, b| a.0.cmp(&b.0));
        entries
    }

    /// Unordered copy of the table.
    pub fn snapshot(&self) -> Table {
        self.0.lock().clone()
    }

    pub fn ptr_eq(&self, other: &Composite) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    /// Address of the shared table, stable for the composite's lifetime.
    pub fn addr(&self) -> usize {
        Arc::as_ptr(&self.0) as usize
    }
}

impl FromIterator<(String, Value)> for Composite {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Composite::from_table(iter.into_iter().collect())
    }
}
